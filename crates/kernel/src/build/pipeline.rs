//! Fixed-order build tasks.
//!
//! The pipeline runs in a fixed order: clear the output directory, compile
//! styles, stage partials, stage top-level files, then render the shell
//! page. Every task is a straight file transformation; the only ordering
//! constraint is that `clean` runs first.

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::site::Site;
use crate::theme::ThemeEngine;

/// Subdirectory of the source tree holding style sources.
const STYLES_DIR: &str = "styles";

/// Subdirectory of the source tree holding view partials.
const PARTIALS_DIR: &str = "partials";

/// Name of the compiled stylesheet emitted into `styles/`.
const COMPILED_STYLESHEET: &str = "site.css";

/// Per-task file counts from one pipeline run.
#[derive(Debug, Default, Clone, Serialize)]
pub struct BuildReport {
    /// Style sources folded into the compiled stylesheet.
    pub styles_compiled: usize,
    /// Partials staged into the output partials directory.
    pub partials_copied: usize,
    /// Top-level files staged into the output root.
    pub top_level_copied: usize,
}

/// Run the full pipeline for a loaded site.
pub fn run(config: &Config, site: &Site, engine: &ThemeEngine) -> AppResult<BuildReport> {
    clean(&config.output_dir)?;

    let report = BuildReport {
        styles_compiled: compile_styles(&config.source_dir, &config.output_dir)?,
        partials_copied: copy_partials(&config.source_dir, &config.output_dir)?,
        top_level_copied: copy_top_level(config)?,
    };
    render_shell(config, site, engine)?;

    info!(
        styles = report.styles_compiled,
        partials = report.partials_copied,
        top_level = report.top_level_copied,
        output = %config.output_dir.display(),
        "build complete"
    );

    Ok(report)
}

/// Remove and recreate the output directory.
fn clean(output_dir: &Path) -> AppResult<()> {
    if output_dir.exists() {
        fs::remove_dir_all(output_dir).map_err(|e| AppError::io(output_dir, e))?;
    }
    fs::create_dir_all(output_dir).map_err(|e| AppError::io(output_dir, e))?;

    debug!(path = %output_dir.display(), "cleaned output directory");
    Ok(())
}

/// Fold all style sources into a single compiled stylesheet.
///
/// Sources are concatenated in sorted traversal order so the output is
/// stable across runs. An empty styles directory produces an empty
/// stylesheet; a missing one is an error.
fn compile_styles(source_dir: &Path, output_dir: &Path) -> AppResult<usize> {
    let styles_src = source_dir.join(STYLES_DIR);
    if !styles_src.is_dir() {
        return Err(AppError::io(
            &styles_src,
            std::io::Error::new(std::io::ErrorKind::NotFound, "styles directory not found"),
        ));
    }

    let mut compiled = String::new();
    let mut count = 0;

    for entry in WalkDir::new(&styles_src)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "css"))
    {
        let path = entry.path();
        let source = fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;

        compiled.push_str(&source);
        if !source.ends_with('\n') {
            compiled.push('\n');
        }
        count += 1;
    }

    let styles_out = output_dir.join(STYLES_DIR);
    fs::create_dir_all(&styles_out).map_err(|e| AppError::io(&styles_out, e))?;

    let target = styles_out.join(COMPILED_STYLESHEET);
    fs::write(&target, compiled).map_err(|e| AppError::io(&target, e))?;

    debug!(count, target = %target.display(), "compiled styles");
    Ok(count)
}

/// Stage view partials into the output partials directory, preserving their
/// relative layout.
fn copy_partials(source_dir: &Path, output_dir: &Path) -> AppResult<usize> {
    let partials_src = source_dir.join(PARTIALS_DIR);
    if !partials_src.is_dir() {
        return Err(AppError::io(
            &partials_src,
            std::io::Error::new(std::io::ErrorKind::NotFound, "partials directory not found"),
        ));
    }

    let partials_out = output_dir.join(PARTIALS_DIR);
    let mut count = 0;

    for entry in WalkDir::new(&partials_src)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let path = entry.path();
        // Files are enumerated under partials_src, so the prefix always strips.
        let relative = path.strip_prefix(&partials_src).unwrap_or(path);
        let target = partials_out.join(relative);

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| AppError::io(parent, e))?;
        }
        fs::copy(path, &target).map_err(|e| AppError::io(path, e))?;
        count += 1;
    }

    debug!(count, "copied partials");
    Ok(count)
}

/// Stage regular files at the source root into the output root.
///
/// The site file itself is skipped: it is configuration, not content.
fn copy_top_level(config: &Config) -> AppResult<usize> {
    let source_dir = &config.source_dir;
    if !source_dir.is_dir() {
        return Err(AppError::io(
            source_dir,
            std::io::Error::new(std::io::ErrorKind::NotFound, "source directory not found"),
        ));
    }

    let site_file_name = config.site_file.file_name();
    let mut count = 0;

    let mut names: Vec<_> = fs::read_dir(source_dir)
        .map_err(|e| AppError::io(source_dir, e))?
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .collect();
    names.sort_by_key(|e| e.file_name());

    for entry in names {
        let path = entry.path();
        if path.file_name() == site_file_name {
            continue;
        }

        let target = config.output_dir.join(entry.file_name());
        fs::copy(&path, &target).map_err(|e| AppError::io(&path, e))?;
        count += 1;
    }

    debug!(count, "copied top-level files");
    Ok(count)
}

/// Render the shell page into the output root.
fn render_shell(config: &Config, site: &Site, engine: &ThemeEngine) -> AppResult<()> {
    let nav = engine.render_menu(&site.menu, "main")?;
    let default_view = &site.routes.default_entry().view_template;
    let html = engine.render_page(&site.title, &nav, default_view)?;

    let target = config.output_dir.join("index.html");
    fs::write(&target, html).map_err(|e| AppError::io(&target, e))?;

    debug!(target = %target.display(), "rendered shell page");
    Ok(())
}
