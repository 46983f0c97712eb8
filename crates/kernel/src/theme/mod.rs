//! Tera-based rendering of navigation markup and the shell page.

mod engine;

pub use engine::ThemeEngine;
