pub mod about;

pub use about::{about_rows, render_about_window};
