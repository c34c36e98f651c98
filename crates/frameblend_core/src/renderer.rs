//! Renderer boundary
//!
//! The renderer owns drawables. The interpolation layer issues update
//! commands against them by id and queries a cheap bounding box; it never
//! touches drawable storage directly.

use crate::geometry::{Point, Rect, Vec2};
use crate::target::Effect;
use slotmap::new_key_type;

new_key_type! {
    /// Opaque handle of a renderer-side drawable
    pub struct DrawableId;
}

/// Commands the interpolation layer sends to a renderer
pub trait Renderer {
    /// Fast axis-aligned bounding box of a drawable, `None` if the id is unknown
    ///
    /// Precision is less important than speed; this is called once per moving
    /// target per frame.
    fn drawable_bounds(&self, id: DrawableId) -> Option<Rect>;

    fn update_drawable_position(&mut self, id: DrawableId, position: Point);

    fn update_drawable_effect(&mut self, id: DrawableId, effect: Effect, value: f32);

    fn update_drawable_direction_scale(&mut self, id: DrawableId, direction: f32, scale: Vec2);
}
