//! Line-oriented front end: commands on an input stream, one printed line
//! per view update.

mod session;
mod view;

pub use session::{ConsoleCommand, ConsoleSession};
pub use view::ConsoleView;
