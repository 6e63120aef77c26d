//! Snake body joint
//!
//! One segment of the snake, stored in an index arena owned by `Snake`.
//! `next` points toward the head, `prev` toward the tail; the two chain
//! ends are exactly the head (next == None) and tail (prev == None).

use crate::board::Location;
use crate::domain::Direction;

/// Arena index of a joint.
pub type JointId = usize;

#[derive(Debug, Clone)]
pub struct Joint {
    next: Option<JointId>,
    prev: Option<JointId>,
    slot: Location,
    direction: Direction,
}

impl Joint {
    pub(super) fn new(slot: Location, direction: Direction) -> Self {
        Joint {
            next: None,
            prev: None,
            slot,
            direction,
        }
    }

    #[inline]
    pub fn next(&self) -> Option<JointId> {
        self.next
    }

    #[inline]
    pub(super) fn set_next(&mut self, joint: Option<JointId>) {
        self.next = joint;
    }

    #[inline]
    pub fn prev(&self) -> Option<JointId> {
        self.prev
    }

    #[inline]
    pub(super) fn set_prev(&mut self, joint: Option<JointId>) {
        self.prev = joint;
    }

    /// Location of the slot this joint occupies.
    #[inline]
    pub fn slot(&self) -> Location {
        self.slot
    }

    #[inline]
    pub(super) fn set_slot(&mut self, slot: Location) {
        self.slot = slot;
    }

    /// Where this joint moves next.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub(super) fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }
}
