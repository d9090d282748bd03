pub mod handler;

pub use handler::{handle_index, render_index};
