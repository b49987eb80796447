pub mod cli;
pub mod model;
pub mod service;
pub mod session;
pub mod state;
pub mod stopwatch;
pub mod tui;
pub mod ui;
