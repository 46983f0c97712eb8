//! Vetrina Brochure-Site Kernel Library
//!
//! This library exposes kernel internals for integration testing.
//! The main entry point for building a site is the `vetrina` binary.

pub mod build;
pub mod config;
pub mod error;
pub mod menu;
pub mod routing;
pub mod site;
pub mod theme;
