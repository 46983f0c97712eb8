//! Navigation menu tree.
//!
//! A static ordered sequence of menu entries, declared in the site file and
//! read-only thereafter. The tree carries inactive entries; suppressing them
//! is the rendering layer's policy.

mod tree;

pub use tree::{MenuEntry, MenuTree};
