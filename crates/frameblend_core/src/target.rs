//! Target model
//!
//! A target is a sprite (or the stage) owned by the host runtime. The
//! interpolation layer only reads targets through the [`Target`] trait and
//! never mutates them.

use crate::geometry::{Point, Vec2};
use crate::renderer::DrawableId;
use slotmap::new_key_type;

new_key_type! {
    /// Stable identifier of a target for as long as it exists in the runtime
    pub struct TargetId;
}

/// Costume identifier, compared for equality only
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CostumeId(pub u32);

/// Graphic effects the interpolation layer drives on a drawable
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Effect {
    /// Transparency, 0 (opaque) to 100 (invisible)
    Ghost,
}

impl Effect {
    /// Name the renderer uses for this effect
    pub fn as_str(&self) -> &'static str {
        match self {
            Effect::Ghost => "ghost",
        }
    }
}

impl std::fmt::Display for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction and scale as the renderer draws them
///
/// May differ from the logical values: rotation styles can pin the direction
/// to 90 and mirror the sprite through a negative x scale instead.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderedTransform {
    /// Degrees, Scratch convention (0 = up, 90 = right)
    pub direction: f32,
    /// Percent per axis, 100 = natural size
    pub scale: Vec2,
}

impl RenderedTransform {
    pub const fn new(direction: f32, scale: Vec2) -> Self {
        Self { direction, scale }
    }
}

impl Default for RenderedTransform {
    fn default() -> Self {
        Self {
            direction: 90.0,
            scale: Vec2::new(100.0, 100.0),
        }
    }
}

/// Read-only view of a runtime target
pub trait Target {
    fn id(&self) -> TargetId;

    /// Renderer handle for this target's drawable
    fn drawable_id(&self) -> DrawableId;

    /// Logical position after the most recent tick
    fn position(&self) -> Point;

    /// Current value of a graphic effect (0 when unset)
    fn effect(&self, effect: Effect) -> f32;

    fn current_costume(&self) -> CostumeId;

    fn is_visible(&self) -> bool;

    fn is_stage(&self) -> bool;

    /// Direction and scale as currently rendered. Pure function of logical state.
    fn rendered_transform(&self) -> RenderedTransform;
}

/// Whether a target takes part in interpolation: visible sprites only
pub fn is_interpolatable<T: Target + ?Sized>(target: &T) -> bool {
    target.is_visible() && !target.is_stage()
}
