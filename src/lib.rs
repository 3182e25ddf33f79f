pub mod cli;
pub mod loader;
pub mod model;
pub mod session;
pub mod shuffle;
pub mod state;
pub mod timer;
pub mod tui;
pub mod ui;
