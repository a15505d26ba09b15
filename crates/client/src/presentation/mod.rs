//! Rendering layer for the terminal client.
pub mod terminal;
pub mod ui;
pub mod widgets;
