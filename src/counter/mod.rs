//! Model-View-Presenter core of the counter.
//!
//! # Architecture
//!
//! ```text
//! View ──intent──→ Presenter ──mutate──→ Model
//!  ↑                   │
//!  └──update_counter───┘ (reads Model::count)
//! ```
//!
//! - **Model**: sole owner and mutator of the count
//! - **Presenter**: turns intents into mutations, pushes the new count
//! - **View**: forwards intents, renders whatever it is pushed

mod model;
mod presenter;
mod view;

pub use model::{Counter, CounterModel};
pub use presenter::{CounterPresenter, Presenter};
pub use view::{CounterView, PresenterSlot, ViewError};
