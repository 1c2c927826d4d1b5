use crate::shape::{ShapeColor, ShapeDef};

/// Smallest accepted board side.
pub const MIN_BOARD_DIM: usize = 1;
/// Largest accepted board side.
pub const MAX_BOARD_DIM: usize = 15;

/// Initial values of the setup form.
pub const DEFAULT_HEIGHT: usize = 6;
pub const DEFAULT_WIDTH: usize = 4;

pub const NUM_SHAPES: usize = 6;
/// Shape catalog, indexed by `ShapeColor as usize`.
pub const SHAPES: [ShapeDef; NUM_SHAPES] = [
    ShapeDef::new(ShapeColor::Yellow, "Yellow Diamond", 2, 1, false),
    ShapeDef::new(ShapeColor::Blue, "Blue Rod", 3, 1, false),
    ShapeDef::new(ShapeColor::Green, "Green Rod", 4, 1, false),
    ShapeDef::new(ShapeColor::Orange, "Orange Diamond", 2, 2, false),
    ShapeDef::new(ShapeColor::Purple, "Purple Diamond", 2, 3, true),
    ShapeDef::new(ShapeColor::Red, "Red Decagon", 3, 3, false),
];

/// Returns `true` when `height`×`width` is an accepted board size.
pub fn valid_dimensions(height: usize, width: usize) -> bool {
    let range = MIN_BOARD_DIM..=MAX_BOARD_DIM;
    range.contains(&height) && range.contains(&width)
}
