//! Test fixtures: a minimal sprite runtime and a renderer that records commands

#![allow(dead_code)]

use frameblend_core::{
    CostumeId, DrawableId, Effect, Point, Rect, RenderedTransform, Renderer, Target, TargetId,
    Vec2,
};
use rustc_hash::FxHashMap;
use slotmap::SlotMap;
use smallvec::SmallVec;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RotationStyle {
    AllAround,
    LeftRight,
    DontRotate,
}

#[derive(Clone, Debug)]
pub struct Sprite {
    pub id: TargetId,
    pub drawable: DrawableId,
    pub x: f32,
    pub y: f32,
    pub direction: f32,
    pub size: f32,
    pub rotation_style: RotationStyle,
    pub costume: CostumeId,
    pub visible: bool,
    pub is_stage: bool,
    pub effects: FxHashMap<Effect, f32>,
}

impl Target for Sprite {
    fn id(&self) -> TargetId {
        self.id
    }

    fn drawable_id(&self) -> DrawableId {
        self.drawable
    }

    fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    fn effect(&self, effect: Effect) -> f32 {
        self.effects.get(&effect).copied().unwrap_or(0.0)
    }

    fn current_costume(&self) -> CostumeId {
        self.costume
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn is_stage(&self) -> bool {
        self.is_stage
    }

    fn rendered_transform(&self) -> RenderedTransform {
        match self.rotation_style {
            RotationStyle::AllAround => {
                RenderedTransform::new(self.direction, Vec2::new(self.size, self.size))
            }
            RotationStyle::LeftRight => {
                let flip = if self.direction < 0.0 { -1.0 } else { 1.0 };
                RenderedTransform::new(90.0, Vec2::new(flip * self.size, self.size))
            }
            RotationStyle::DontRotate => {
                RenderedTransform::new(90.0, Vec2::new(self.size, self.size))
            }
        }
    }
}

/// Host runtime owning targets, plus the renderer they draw into
pub struct Runtime {
    pub targets: SlotMap<TargetId, Sprite>,
    pub renderer: RecordingRenderer,
}

impl Runtime {
    pub fn new() -> Self {
        Self {
            targets: SlotMap::with_key(),
            renderer: RecordingRenderer::new(),
        }
    }

    /// Add a visible sprite at `(x, y)` whose drawable is `extent` wide and tall
    pub fn add_sprite(&mut self, x: f32, y: f32, extent: f32) -> TargetId {
        self.add_sprite_sized(x, y, extent, extent)
    }

    /// Add a visible sprite whose drawable is `width` by `height`
    pub fn add_sprite_sized(&mut self, x: f32, y: f32, width: f32, height: f32) -> TargetId {
        let drawable = self.renderer.add_drawable(width, height);
        self.targets.insert_with_key(|id| Sprite {
            id,
            drawable,
            x,
            y,
            direction: 90.0,
            size: 100.0,
            rotation_style: RotationStyle::AllAround,
            costume: CostumeId(0),
            visible: true,
            is_stage: false,
            effects: FxHashMap::default(),
        })
    }

    pub fn add_stage(&mut self) -> TargetId {
        let id = self.add_sprite(0.0, 0.0, 480.0);
        self.targets[id].is_stage = true;
        id
    }

    pub fn sprite(&self, id: TargetId) -> &Sprite {
        &self.targets[id]
    }

    pub fn sprite_mut(&mut self, id: TargetId) -> &mut Sprite {
        &mut self.targets[id]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sprite> {
        self.targets.values()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum RenderCommand {
    Position(DrawableId, Point),
    Effect(DrawableId, Effect, f32),
    DirectionScale(DrawableId, f32, Vec2),
}

#[derive(Clone, Debug)]
pub struct DrawableState {
    pub width: f32,
    pub height: f32,
    pub position: Point,
    pub direction: f32,
    pub scale: Vec2,
    pub effects: FxHashMap<Effect, f32>,
}

#[derive(Default)]
pub struct RecordingRenderer {
    pub drawables: SlotMap<DrawableId, DrawableState>,
    pub commands: SmallVec<[RenderCommand; 8]>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_drawable(&mut self, width: f32, height: f32) -> DrawableId {
        self.drawables.insert(DrawableState {
            width,
            height,
            position: Point::ZERO,
            direction: 90.0,
            scale: Vec2::new(100.0, 100.0),
            effects: FxHashMap::default(),
        })
    }

    pub fn drawable(&self, id: DrawableId) -> &DrawableState {
        &self.drawables[id]
    }

    pub fn positions(&self) -> Vec<Point> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                RenderCommand::Position(_, p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    pub fn effects(&self) -> Vec<(Effect, f32)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                RenderCommand::Effect(_, e, v) => Some((*e, *v)),
                _ => None,
            })
            .collect()
    }

    pub fn direction_scales(&self) -> Vec<(f32, Vec2)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                RenderCommand::DirectionScale(_, d, s) => Some((*d, *s)),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn drawable_bounds(&self, id: DrawableId) -> Option<Rect> {
        let drawable = self.drawables.get(id)?;
        let half_width = drawable.width / 2.0;
        let half_height = drawable.height / 2.0;
        Some(Rect::from_edges(
            drawable.position.x - half_width,
            drawable.position.x + half_width,
            drawable.position.y - half_height,
            drawable.position.y + half_height,
        ))
    }

    fn update_drawable_position(&mut self, id: DrawableId, position: Point) {
        if let Some(drawable) = self.drawables.get_mut(id) {
            drawable.position = position;
        }
        self.commands.push(RenderCommand::Position(id, position));
    }

    fn update_drawable_effect(&mut self, id: DrawableId, effect: Effect, value: f32) {
        if let Some(drawable) = self.drawables.get_mut(id) {
            drawable.effects.insert(effect, value);
        }
        self.commands.push(RenderCommand::Effect(id, effect, value));
    }

    fn update_drawable_direction_scale(&mut self, id: DrawableId, direction: f32, scale: Vec2) {
        if let Some(drawable) = self.drawables.get_mut(id) {
            drawable.direction = direction;
            drawable.scale = scale;
        }
        self.commands
            .push(RenderCommand::DirectionScale(id, direction, scale));
    }
}

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

/// Compare angles modulo 360
pub fn same_angle(a: f32, b: f32) -> bool {
    let diff = (a - b).rem_euclid(360.0);
    diff < 1e-3 || diff > 360.0 - 1e-3
}
