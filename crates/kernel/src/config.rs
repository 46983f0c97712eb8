//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use anyhow::Result;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the declarative site file (default: ./site/site.toml).
    pub site_file: PathBuf,

    /// Path to the site source directory (default: ./site).
    pub source_dir: PathBuf,

    /// Path to the Tera templates directory (default: ./templates).
    pub templates_dir: PathBuf,

    /// Path to the deployable output directory (default: ./dist).
    pub output_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let site_file = env::var("SITE_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./site/site.toml"));

        let source_dir = env::var("SOURCE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./site"));

        let templates_dir = env::var("TEMPLATES_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./templates"));

        let output_dir = env::var("OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./dist"));

        Ok(Self {
            site_file,
            source_dir,
            templates_dir,
            output_dir,
        })
    }
}
