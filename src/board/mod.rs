//! Game board
//!
//! Fixed columns x rows grid of slots, built eagerly at construction.
//! Per-slot pixel size is derived from the canvas pixel dimensions, and
//! each slot's pixel center and neighbors are precomputed once.

mod slot;

pub use slot::{Edge, Location, Slot};

use crate::core::GameError;
use crate::domain::BoardSettings;
use crate::snake::JointId;

/// Upper bound on the slot matrix. Host-supplied dimensions beyond this
/// are rejected at construction instead of attempting the allocation.
pub const MAX_SLOTS: u64 = 1 << 20;

pub struct Board {
    columns: u32,
    rows: u32,
    slot_width: f64,
    slot_height: f64,
    /// Row-major slot matrix; every in-range (col, row) maps to exactly
    /// one entry.
    slots: Vec<Slot>,
}

impl Board {
    pub fn new(
        canvas_width: f64,
        canvas_height: f64,
        settings: &BoardSettings,
    ) -> Result<Board, GameError> {
        if canvas_width <= 0.0 || canvas_height <= 0.0 {
            return Err(GameError::Config(format!(
                "canvas size must be positive, got {}x{}",
                canvas_width, canvas_height
            )));
        }
        if settings.columns < 2 || settings.rows < 2 {
            return Err(GameError::Config(format!(
                "board must be at least 2x2, got {}x{}",
                settings.columns, settings.rows
            )));
        }

        let slot_count = settings.columns as u64 * settings.rows as u64;
        if slot_count > MAX_SLOTS {
            return Err(GameError::Config(format!(
                "board {}x{} exceeds the {} slot limit",
                settings.columns, settings.rows, MAX_SLOTS
            )));
        }

        let columns = settings.columns;
        let rows = settings.rows;
        let slot_width = canvas_width / columns as f64;
        let slot_height = canvas_height / rows as f64;

        let mut slots = Vec::with_capacity(slot_count as usize);
        for row in 0..rows {
            for col in 0..columns {
                let x = (col as f64 + 0.5) * slot_width;
                let y = (row as f64 + 0.5) * slot_height;
                slots.push(Slot::new(Location::new(col, row), x, y, columns, rows));
            }
        }

        Ok(Board {
            columns,
            rows,
            slot_width,
            slot_height,
            slots,
        })
    }

    #[inline]
    pub fn columns(&self) -> u32 {
        self.columns
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Pixel size of a single slot.
    #[inline]
    pub fn slot_size(&self) -> (f64, f64) {
        (self.slot_width, self.slot_height)
    }

    #[inline]
    pub fn in_columns(&self, col: i32) -> bool {
        col >= 0 && (col as u32) < self.columns
    }

    #[inline]
    pub fn in_rows(&self, row: i32) -> bool {
        row >= 0 && (row as u32) < self.rows
    }

    #[inline]
    fn index(&self, loc: Location) -> usize {
        (loc.row * self.columns + loc.col) as usize
    }

    /// Slot lookup. Fails on out-of-range indices.
    pub fn slot(&self, col: i32, row: i32) -> Result<&Slot, GameError> {
        self.try_slot(col, row)
            .ok_or(GameError::OutOfRange { col, row })
    }

    /// Suppressed slot lookup for lookahead checks: out-of-range yields
    /// None instead of an error.
    pub fn try_slot(&self, col: i32, row: i32) -> Option<&Slot> {
        if !self.in_columns(col) || !self.in_rows(row) {
            return None;
        }
        let idx = self.index(Location::new(col as u32, row as u32));
        Some(&self.slots[idx])
    }

    #[inline]
    pub fn slot_at(&self, loc: Location) -> &Slot {
        &self.slots[self.index(loc)]
    }

    /// Marks a joint as the occupant of a slot.
    pub(crate) fn set_occupant(&mut self, loc: Location, joint: JointId) {
        let idx = self.index(loc);
        self.slots[idx].set_occupant(Some(joint));
    }

    /// Clears a vacated slot's occupant back-reference.
    pub(crate) fn clear_occupant(&mut self, loc: Location) {
        let idx = self.index(loc);
        self.slots[idx].set_occupant(None);
    }

    /// Locations of all currently occupied slots, in grid order.
    pub fn occupied_locations(&self) -> Vec<Location> {
        self.slots
            .iter()
            .filter(|s| s.occupant().is_some())
            .map(|s| s.location())
            .collect()
    }
}
