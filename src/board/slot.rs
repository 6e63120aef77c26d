//! Grid slot
//!
//! One addressable cell of the board. Location, pixel-center coords and
//! neighbor indices are fixed at board construction; only the occupant
//! back-reference changes afterwards.

use crate::core::GameError;
use crate::snake::JointId;

/// Column/row indices of a slot on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    pub col: u32,
    pub row: u32,
}

impl Location {
    #[inline]
    pub fn new(col: u32, row: u32) -> Self {
        Location { col, row }
    }
}

/// Edge shared with a neighbor slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    pub fn parse(edge: &str) -> Result<Edge, GameError> {
        match edge.to_ascii_lowercase().as_str() {
            "left" => Ok(Edge::Left),
            "right" => Ok(Edge::Right),
            "top" => Ok(Edge::Top),
            "bottom" => Ok(Edge::Bottom),
            _ => Err(GameError::InvalidEdge(edge.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Slot {
    location: Location,
    /// Pixel coordinates of the slot center.
    x: f64,
    y: f64,
    /// Neighbor indices per edge. None on a board boundary.
    neighbors: [Option<Location>; 4],
    /// Joint currently occupying this slot, if any. Back-reference only;
    /// the snake owns the joint.
    occupant: Option<JointId>,
}

impl Slot {
    pub(super) fn new(
        location: Location,
        x: f64,
        y: f64,
        columns: u32,
        rows: u32,
    ) -> Self {
        let Location { col, row } = location;
        let neighbors = [
            // Left
            (col != 0).then(|| Location::new(col - 1, row)),
            // Right
            (col != columns - 1).then(|| Location::new(col + 1, row)),
            // Top
            (row != 0).then(|| Location::new(col, row - 1)),
            // Bottom
            (row != rows - 1).then(|| Location::new(col, row + 1)),
        ];
        Slot {
            location,
            x,
            y,
            neighbors,
            occupant: None,
        }
    }

    #[inline]
    pub fn location(&self) -> Location {
        self.location
    }

    /// Pixel coordinates of the slot center.
    #[inline]
    pub fn coords(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Neighbor indices along the given edge, or None on a board boundary.
    #[inline]
    pub fn neighbor(&self, edge: Edge) -> Option<Location> {
        self.neighbors[edge as usize]
    }

    /// Neighbor lookup by edge name ("left", "right", "top", "bottom").
    pub fn neighbor_by_name(&self, edge: &str) -> Result<Option<Location>, GameError> {
        Ok(self.neighbor(Edge::parse(edge)?))
    }

    #[inline]
    pub fn occupant(&self) -> Option<JointId> {
        self.occupant
    }

    #[inline]
    pub(super) fn set_occupant(&mut self, joint: Option<JointId>) {
        self.occupant = joint;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot_at(col: u32, row: u32) -> Slot {
        Slot::new(Location::new(col, row), 0.0, 0.0, 32, 24)
    }

    #[test]
    fn interior_slot_has_four_neighbors() {
        let slot = slot_at(5, 5);
        assert_eq!(slot.neighbor(Edge::Left), Some(Location::new(4, 5)));
        assert_eq!(slot.neighbor(Edge::Right), Some(Location::new(6, 5)));
        assert_eq!(slot.neighbor(Edge::Top), Some(Location::new(5, 4)));
        assert_eq!(slot.neighbor(Edge::Bottom), Some(Location::new(5, 6)));
    }

    #[test]
    fn corner_slot_loses_boundary_neighbors() {
        let slot = slot_at(0, 0);
        assert_eq!(slot.neighbor(Edge::Left), None);
        assert_eq!(slot.neighbor(Edge::Top), None);
        assert_eq!(slot.neighbor(Edge::Right), Some(Location::new(1, 0)));
        assert_eq!(slot.neighbor(Edge::Bottom), Some(Location::new(0, 1)));

        let slot = slot_at(31, 23);
        assert_eq!(slot.neighbor(Edge::Right), None);
        assert_eq!(slot.neighbor(Edge::Bottom), None);
    }

    #[test]
    fn neighbor_by_name_rejects_bad_edges() {
        let slot = slot_at(5, 5);
        assert!(slot.neighbor_by_name("LEFT").unwrap().is_some());
        assert!(matches!(
            slot.neighbor_by_name("diagonal"),
            Err(GameError::InvalidEdge(_))
        ));
    }
}
