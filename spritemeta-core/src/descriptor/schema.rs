use serde::{Deserialize, Serialize};

/// Metadata record written next to each sprite image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpriteDescriptor {
    pub path: String,
    pub frame_size: Vec2i,
    pub states: Vec<SpriteState>,
    pub internal: bool,
    pub batched: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Vec2i {
    pub x: i32,
    pub y: i32,
}

impl Vec2i {
    pub const fn new(x: i32, y: i32) -> Self { Self { x, y } }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpriteState {
    pub pos: Vec2i,
    pub frames: Vec2i,
}

impl Default for SpriteState {
    fn default() -> Self {
        Self { pos: Vec2i::new(0, 0), frames: Vec2i::new(1, 1) }
    }
}

pub const DEFAULT_FRAME_SIZE: Vec2i = Vec2i::new(100, 98);

impl Default for SpriteDescriptor {
    fn default() -> Self {
        Self {
            path: String::new(),
            frame_size: DEFAULT_FRAME_SIZE,
            states: vec![SpriteState::default()],
            internal: false,
            batched: false,
        }
    }
}

impl SpriteDescriptor {
    /// Built-in template with `path` filled in.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into(), ..Self::default() }
    }

    /// True when every field except `path` matches `other`.
    pub fn same_shape(&self, other: &SpriteDescriptor) -> bool {
        self.frame_size == other.frame_size
            && self.states == other.states
            && self.internal == other.internal
            && self.batched == other.batched
    }
}

/// The single reused record. Only `path` changes between stamps.
#[derive(Debug, Clone, Default)]
pub struct Template {
    current: SpriteDescriptor,
}

impl Template {
    pub fn new(base: SpriteDescriptor) -> Self {
        Self { current: base }
    }

    /// Overwrite `path` in place and hand back the record to serialize.
    pub fn stamp(&mut self, path: &str) -> &SpriteDescriptor {
        self.current.path.clear();
        self.current.path.push_str(path);
        &self.current
    }
}
