//! Frameblend Core
//!
//! Shared vocabulary for sub-tick visual interpolation:
//!
//! - **Geometry**: points, vectors and bounding rects in stage coordinates
//! - **Targets**: read-only view of runtime sprites via the [`Target`] trait
//! - **Renderer**: the drawable command surface via the [`Renderer`] trait
//! - **Config**: thresholds loaded from TOML
//!
//! The interpolation algorithm itself lives in `frameblend_interpolate`.

pub mod config;
pub mod error;
pub mod geometry;
pub mod renderer;
pub mod target;

pub use config::InterpolationConfig;
pub use error::{ConfigError, Result};
pub use geometry::{Point, Rect, Size, Vec2};
pub use renderer::{DrawableId, Renderer};
pub use target::{is_interpolatable, CostumeId, Effect, RenderedTransform, Target, TargetId};
