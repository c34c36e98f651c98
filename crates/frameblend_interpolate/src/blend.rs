//! Per-property blend rules
//!
//! Each rule takes the start-of-tick value, the current value and the frame
//! fraction `t`, and returns the value to draw, or `None` when the renderer
//! should be left alone (no change, or a change large enough to be treated
//! as instantaneous).

use crate::snapshot::InterpolationSnapshot;
use frameblend_core::geometry::sign;
use frameblend_core::{InterpolationConfig, Point, Rect, RenderedTransform, Vec2};

/// Blend a position
///
/// `bounds` is only queried once the movement exceeds the sub-pixel epsilon.
/// Without bounds the teleport tolerance cannot be computed and the position
/// is left alone.
pub fn blend_position(
    start: Point,
    now: Point,
    t: f32,
    config: &InterpolationConfig,
    bounds: impl FnOnce() -> Option<Rect>,
) -> Option<Point> {
    let delta = now.delta_from(start);
    let distance = delta.abs();
    if distance.x <= config.position_epsilon && distance.y <= config.position_epsilon {
        return None;
    }

    let bounds = bounds()?;
    let tolerance_x = config.tolerance_for(bounds.width());
    let tolerance_y = config.tolerance_for(bounds.height());
    if distance.x >= tolerance_x || distance.y >= tolerance_y {
        tracing::debug!(
            dx = delta.x,
            dy = delta.y,
            tolerance_x,
            tolerance_y,
            "position jump treated as teleport"
        );
        return None;
    }

    Some(start.offset_by(delta, t))
}

/// Blend the ghost effect
pub fn blend_ghost(start: f32, now: f32, t: f32, config: &InterpolationConfig) -> Option<f32> {
    let change = now - start;
    let distance = change.abs();
    if distance > 0.0 && distance < config.ghost_jump_limit {
        Some(start + change * t)
    } else {
        if distance >= config.ghost_jump_limit {
            tracing::trace!(start, now, "ghost jump applied instantly");
        }
        None
    }
}

/// Shortest-arc blend between two directions in degrees
///
/// Works on the weighted sum of unit vectors, so 350 -> 10 passes through 0
/// rather than 180. Result is in (-180, 180].
pub fn blend_direction(start: f32, now: f32, t: f32) -> f32 {
    let t = t as f64;
    let start = (start as f64).to_radians();
    let now = (now as f64).to_radians();
    let y = now.sin() * t + start.sin() * (1.0 - t);
    let x = now.cos() * t + start.cos() * (1.0 - t);
    y.atan2(x).to_degrees() as f32
}

/// Blend a non-uniform scale
///
/// A sign change on either axis is a mirror flip and snaps. So does a change
/// of `scale_jump_limit` percent or more on either axis.
pub fn blend_scale(start: Vec2, now: Vec2, t: f32, config: &InterpolationConfig) -> Option<Vec2> {
    if start == now {
        return None;
    }
    if sign(start.x) != sign(now.x) || sign(start.y) != sign(now.y) {
        tracing::trace!(?start, ?now, "scale sign flip, not interpolating");
        return None;
    }

    let change = Vec2::new(now.x - start.x, now.y - start.y);
    let distance = change.abs();
    if distance.x < config.scale_jump_limit && distance.y < config.scale_jump_limit {
        Some(Vec2::new(start.x + change.x * t, start.y + change.y * t))
    } else {
        None
    }
}

/// Blend direction and scale together
///
/// Only valid while the costume is unchanged; the caller checks that.
/// Returns the pair to push when either component was interpolated. A scale
/// that could not be interpolated keeps its current value in the result.
pub fn blend_transform(
    snapshot: &InterpolationSnapshot,
    current: RenderedTransform,
    t: f32,
    config: &InterpolationConfig,
) -> Option<RenderedTransform> {
    let mut result = current;
    let mut changed = false;

    if current.direction != snapshot.direction {
        // No jump guard on direction; large turns blend along the short arc too.
        result.direction = blend_direction(snapshot.direction, current.direction, t);
        changed = true;
    }

    if let Some(scale) = blend_scale(snapshot.scale, current.scale, t, config) {
        result.scale = scale;
        changed = true;
    }

    changed.then_some(result)
}
