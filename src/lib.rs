pub mod app;
pub mod cli;
pub mod config;
pub mod console;
pub mod counter;
pub mod logging;
pub mod ui;
