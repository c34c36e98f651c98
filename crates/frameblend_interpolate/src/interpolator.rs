//! Interpolator
//!
//! Owns the snapshot table and configuration and exposes the two operations
//! a host scheduler calls: capture once per tick, render per frame.

use crate::interpolate::interpolate;
use crate::snapshot::{capture_baseline, InterpolationSnapshot, SnapshotStore};
use frameblend_core::{Effect, InterpolationConfig, Renderer, Target, TargetId};

/// Sub-tick interpolation for a target collection
///
/// # Example
///
/// ```ignore
/// let mut interpolator = Interpolator::new();
///
/// // start of every tick, before any target moves
/// interpolator.capture_baseline(runtime.targets());
/// runtime.step();
///
/// // each display frame during the tick
/// interpolator.render_frame(runtime.targets(), renderer.as_mut(), fraction);
/// ```
#[derive(Debug, Default)]
pub struct Interpolator {
    store: SnapshotStore,
    config: InterpolationConfig,
}

impl Interpolator {
    pub fn new() -> Self {
        Self::with_config(InterpolationConfig::default())
    }

    pub fn with_config(config: InterpolationConfig) -> Self {
        Self {
            store: SnapshotStore::new(),
            config,
        }
    }

    pub fn config(&self) -> &InterpolationConfig {
        &self.config
    }

    /// Replace the configuration. Disabling drops all snapshots.
    pub fn set_config(&mut self, config: InterpolationConfig) {
        if !config.enabled {
            self.store.clear();
        }
        self.config = config;
    }

    /// Record the start-of-tick state of every target
    ///
    /// Must run before the tick mutates any target.
    pub fn capture_baseline<'a, T, I>(&mut self, targets: I)
    where
        T: Target + ?Sized + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        if !self.config.enabled {
            self.store.clear();
            return;
        }
        capture_baseline(&mut self.store, targets);
    }

    /// Push the blended state at fraction `t` of the tick to the renderer
    ///
    /// Safe to call any number of times per tick; nothing is consumed.
    pub fn render_frame<'a, T, I, R>(&self, targets: I, renderer: Option<&mut R>, t: f32)
    where
        T: Target + ?Sized + 'a,
        I: IntoIterator<Item = &'a T>,
        R: Renderer + ?Sized,
    {
        interpolate(&self.store, targets, renderer, t, &self.config);
    }

    /// Put every snapshotted drawable back at its target's logical state
    ///
    /// Used when interpolation is switched off mid-tick. Clears the snapshots.
    pub fn restore_drawables<'a, T, I, R>(&mut self, targets: I, renderer: &mut R)
    where
        T: Target + ?Sized + 'a,
        I: IntoIterator<Item = &'a T>,
        R: Renderer + ?Sized,
    {
        let mut restored = 0usize;
        for target in targets {
            if !self.store.contains(target.id()) {
                continue;
            }
            let drawable = target.drawable_id();
            let transform = target.rendered_transform();
            renderer.update_drawable_position(drawable, target.position());
            renderer.update_drawable_effect(drawable, Effect::Ghost, target.effect(Effect::Ghost));
            renderer.update_drawable_direction_scale(drawable, transform.direction, transform.scale);
            restored += 1;
        }
        tracing::debug!(restored, "restored drawables to logical state");
        self.store.clear();
    }

    /// Drop every snapshot
    pub fn clear(&mut self) {
        self.store.clear();
    }

    pub fn snapshot(&self, id: TargetId) -> Option<&InterpolationSnapshot> {
        self.store.get(id)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
