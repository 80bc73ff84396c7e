pub mod events;
pub mod focus;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod screen;
pub mod terminal_guard;
pub mod theme;

pub use screen::{CounterLabel, CounterScreen};
