//! color-debterator
//!
//! Reduces color debt in Android projects: literal colors in a resources file
//! that sit within a perceptual tolerance of a target palette color are
//! replaced by `@color/` references to it.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod resources;
pub mod services;
