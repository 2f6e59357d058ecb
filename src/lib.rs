//! tonewheel — rotation-distinct binary pitch patterns and scale comparison.
//!
//! The `core` module holds the enumeration and comparison engine; `plot`
//! renders its results as PNG figures; `config` carries render settings.

pub mod config;
pub mod core;
pub mod plot;
