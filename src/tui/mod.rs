//! # Terminal UI
//!
//! Navigation state machine, screens and the crossterm event loop.

pub mod app;
pub mod form;
pub mod input;
pub mod menu;
pub mod screens;
pub mod styles;
mod terminal;

pub use app::App;
pub use terminal::run;
