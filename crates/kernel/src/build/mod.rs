//! Build pipeline staging the deployable output directory.

mod pipeline;

pub use pipeline::{BuildReport, run};
