/// A 2D displacement in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector {
    /// The X component of the [`Vector`]
    pub x: f32,

    /// The Y component of the [`Vector`]
    pub y: f32,
}

impl Vector {
    /// Creates a new [`Vector`] with the given components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
