//! Painting laid-out chips
//!
//! The traversal in [`paint`] is independent of the output format; it only
//! talks to a [`Surface`]. [`SvgSurface`] turns the calls into an SVG document.

pub mod config;
pub mod paint;
pub mod surface;
pub mod svg;

pub use config::SvgConfig;
pub use paint::{paint, render_chip};
pub use surface::Surface;
pub use svg::SvgSurface;
