//! Frameblend Interpolation
//!
//! Smooth sub-tick motion for targets that update once per simulation tick.
//!
//! # Protocol
//!
//! - **Capture**: at the start of each tick, record every visible sprite's
//!   rendered state ([`Interpolator::capture_baseline`])
//! - **Render**: for each display frame during the tick, blend from the
//!   snapshot toward the post-tick state and push it to the renderer
//!   ([`Interpolator::render_frame`])
//!
//! Position, ghost, direction and scale are blended. Large jumps are assumed
//! to be intentional and are left for the renderer to show as-is. Targets are
//! never mutated; only drawables are updated.

pub mod blend;
pub mod interpolate;
pub mod interpolator;
pub mod snapshot;

pub use blend::{blend_direction, blend_ghost, blend_position, blend_scale, blend_transform};
pub use interpolate::interpolate;
pub use interpolator::Interpolator;
pub use snapshot::{capture_baseline, InterpolationSnapshot, SnapshotStore};
