//! Start-of-tick snapshots
//!
//! Snapshots are kept in a side table keyed by [`TargetId`] so targets never
//! carry render-only state. The table is rebuilt on every capture.

use frameblend_core::{is_interpolatable, CostumeId, Effect, Point, Target, TargetId, Vec2};
use slotmap::SecondaryMap;

/// Rendered state of one target at the start of a tick
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InterpolationSnapshot {
    pub position: Point,
    pub direction: f32,
    pub scale: Vec2,
    pub costume: CostumeId,
    pub ghost: f32,
}

impl InterpolationSnapshot {
    /// Record a target's current rendered state
    pub fn capture<T: Target + ?Sized>(target: &T) -> Self {
        let transform = target.rendered_transform();
        Self {
            position: target.position(),
            direction: transform.direction,
            scale: transform.scale,
            costume: target.current_costume(),
            ghost: target.effect(Effect::Ghost),
        }
    }
}

/// Snapshots for the current tick
#[derive(Debug, Default)]
pub struct SnapshotStore {
    snapshots: SecondaryMap<TargetId, InterpolationSnapshot>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self {
            snapshots: SecondaryMap::new(),
        }
    }

    pub fn get(&self, id: TargetId) -> Option<&InterpolationSnapshot> {
        self.snapshots.get(id)
    }

    pub fn contains(&self, id: TargetId) -> bool {
        self.snapshots.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}

/// Capture the start-of-tick baseline for every target
///
/// Visible sprites get a fresh snapshot. Everything else, including targets
/// that left the collection since the last tick, ends up without one.
pub fn capture_baseline<'a, T, I>(store: &mut SnapshotStore, targets: I)
where
    T: Target + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    store.clear();

    let mut skipped = 0usize;
    for target in targets {
        if is_interpolatable(target) {
            store
                .snapshots
                .insert(target.id(), InterpolationSnapshot::capture(target));
        } else {
            skipped += 1;
        }
    }

    tracing::trace!(
        captured = store.len(),
        skipped,
        "captured interpolation baseline"
    );
}
