//! Interpolation step
//!
//! Pushes blended values for every snapshotted target to the renderer.
//! Targets and snapshots are only read.

use crate::blend::{blend_ghost, blend_position, blend_transform};
use crate::snapshot::SnapshotStore;
use frameblend_core::{Effect, InterpolationConfig, Renderer, Target};

/// Render one interpolated frame at fraction `t` of the current tick
///
/// `t` is clamped into `[0, 1]`. A missing renderer, a disabled config or a
/// non-finite `t` make this a no-op.
pub fn interpolate<'a, T, I, R>(
    store: &SnapshotStore,
    targets: I,
    renderer: Option<&mut R>,
    t: f32,
    config: &InterpolationConfig,
) where
    T: Target + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
    R: Renderer + ?Sized,
{
    let Some(renderer) = renderer else {
        return;
    };
    if !config.enabled || store.is_empty() {
        return;
    }
    if !t.is_finite() {
        tracing::warn!(t, "non-finite interpolation fraction, skipping frame");
        return;
    }
    let t = t.clamp(0.0, 1.0);

    for target in targets {
        let Some(snapshot) = store.get(target.id()) else {
            continue;
        };
        let drawable = target.drawable_id();

        if let Some(position) = blend_position(snapshot.position, target.position(), t, config, || {
            renderer.drawable_bounds(drawable)
        }) {
            renderer.update_drawable_position(drawable, position);
        }

        if let Some(ghost) = blend_ghost(snapshot.ghost, target.effect(Effect::Ghost), t, config) {
            renderer.update_drawable_effect(drawable, Effect::Ghost, ghost);
        }

        // Direction and scale rules can depend on costume geometry.
        if target.current_costume() != snapshot.costume {
            continue;
        }
        if let Some(transform) = blend_transform(snapshot, target.rendered_transform(), t, config) {
            renderer.update_drawable_direction_scale(drawable, transform.direction, transform.scale);
        }
    }
}
