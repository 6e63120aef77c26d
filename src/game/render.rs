//! Render-path extraction
//!
//! The core never touches the canvas. It extracts the snake's geometry
//! as a polyline of slot pixel centers plus stroke style; the facade
//! (or any other host) paints it.

use crate::board::Board;
use crate::snake::Snake;

/// One stroked path: the whole chain, head to tail.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPath {
    /// Pixel centers of the joints, head first.
    pub points: Vec<(f64, f64)>,
    /// Stroke width in pixels.
    pub width: f64,
    /// Canvas stroke color.
    pub color: String,
}

pub fn extract_path(snake: &Snake, board: &Board) -> RenderPath {
    let mut points: Vec<(f64, f64)> = snake
        .locations()
        .into_iter()
        .map(|loc| board.slot_at(loc).coords())
        .collect();

    // A single-joint chain still renders: round caps turn a zero-length
    // segment into a dot.
    if points.len() == 1 {
        points.push(points[0]);
    }

    RenderPath {
        points,
        width: snake.width(),
        color: snake.color().to_string(),
    }
}
