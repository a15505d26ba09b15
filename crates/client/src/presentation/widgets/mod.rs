//! Screen widgets for the terminal client.
pub mod footer;
pub mod game_area;
pub mod header;
pub mod results;
pub mod selector;
