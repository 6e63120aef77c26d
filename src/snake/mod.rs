//! Snake: joint chain and per-step movement
//!
//! The snake owns a doubly-linked chain of joints in an index arena.
//! A grid step reuses the tail node as the new head (relink, no
//! allocation). Time accumulates against the per-step duration; the
//! heading staged by input is committed when a step actually happens.
//!
//! Occupancy invariant: the board's occupied set equals the set of
//! distinct joint slots at all times. The chain may self-overlap, so a
//! slot's occupant back-reference names the most recent joint to enter
//! it, and only that joint clears it on the way out.

mod joint;

pub use joint::{Joint, JointId};

use crate::board::{Board, Location};
use crate::core::random;
use crate::core::GameError;
use crate::domain::{Direction, SnakeSettings};

pub struct Snake {
    /// Joint arena; rebuilt on `init`, relinked (never grown) by `step`.
    joints: Vec<Joint>,
    head: Option<JointId>,
    tail: Option<JointId>,
    length: u32,

    /// Heading staged for the head's next step.
    head_direction: Direction,
    /// Heading committed on the last step; perpendicular filtering for
    /// incoming direction changes runs against this one.
    last_direction: Direction,

    /// Elapsed time since the last grid step.
    accumulator_ms: f64,
    /// Per-step duration, `1000 / speed`.
    step_ms: f64,

    // Stroke style.
    width: f64,
    color: String,

    // Start configuration for (re)building the chain.
    start_length: u32,
    start_col: u32,
    start_row: u32,
    start_direction: Direction,
}

impl Snake {
    pub fn new(settings: &SnakeSettings, board: &Board) -> Result<Snake, GameError> {
        if settings.speed <= 0.0 || !settings.speed.is_finite() {
            return Err(GameError::Config(format!(
                "snake speed must be positive, got {}",
                settings.speed
            )));
        }
        if settings.start_length == 0 {
            return Err(GameError::Config("snake start_length must be at least 1".into()));
        }
        if !board.in_columns(settings.start_col as i32) || !board.in_rows(settings.start_row as i32) {
            return Err(GameError::Config(format!(
                "snake start ({}, {}) is outside the {}x{} board",
                settings.start_col,
                settings.start_row,
                board.columns(),
                board.rows()
            )));
        }
        if settings.width <= 0.0 || !settings.width.is_finite() {
            return Err(GameError::Config(format!(
                "snake width must be positive, got {}",
                settings.width
            )));
        }
        let start_direction = Direction::parse(&settings.start_direction)?;

        Ok(Snake {
            joints: Vec::with_capacity(settings.start_length as usize),
            head: None,
            tail: None,
            length: 0,
            head_direction: start_direction,
            last_direction: start_direction,
            accumulator_ms: 0.0,
            step_ms: 1000.0 / settings.speed,
            width: settings.width,
            color: settings.color.clone(),
            start_length: settings.start_length,
            start_col: settings.start_col,
            start_row: settings.start_row,
            start_direction,
        })
    }

    /// (Re)builds the chain: `start_length` joints from head to tail,
    /// the head at the start slot and each following joint one step
    /// behind along the start heading.
    pub fn init(&mut self, board: &mut Board) -> Result<(), GameError> {
        self.clear_joints(board);
        for _ in 0..self.start_length {
            self.add_joint(board)?;
        }
        Ok(())
    }

    /// Appends one joint at the tail, one step behind it along the
    /// tail's heading, inheriting that heading.
    pub fn add_joint(&mut self, board: &mut Board) -> Result<JointId, GameError> {
        let id = self.joints.len();

        match self.tail {
            None => {
                // First joint becomes both head and tail.
                let loc = board
                    .slot(self.start_col as i32, self.start_row as i32)?
                    .location();
                self.joints.push(Joint::new(loc, self.start_direction));
                self.head = Some(id);
                board.set_occupant(loc, id);
            }
            Some(tail_id) => {
                let tail_dir = self.joints[tail_id].direction();
                let (col, row) = location_behind(self.joints[tail_id].slot(), tail_dir);
                let loc = board.slot(col, row)?.location();

                self.joints.push(Joint::new(loc, tail_dir));
                self.joints[id].set_next(Some(tail_id));
                self.joints[tail_id].set_prev(Some(id));
                board.set_occupant(loc, id);
            }
        }

        self.tail = Some(id);
        self.length += 1;
        Ok(id)
    }

    /// Stages a heading for the next step. Only changes perpendicular to
    /// the last committed heading are accepted; parallel and
    /// anti-parallel requests are dropped. Returns whether the change
    /// was accepted.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if !direction.is_perpendicular_to(self.last_direction) {
            return false;
        }
        self.head_direction = direction;
        if let Some(head_id) = self.head {
            self.joints[head_id].set_direction(direction);
        }
        true
    }

    /// Accumulates elapsed time and performs at most one grid step per
    /// call. The remainder is carried over to avoid tempo drift; a
    /// backlog of more than one whole step (host stall) is dropped
    /// rather than replayed as a burst. Returns whether a step occurred.
    pub fn advance(
        &mut self,
        delta_ms: f64,
        board: &mut Board,
        rng: &mut u32,
    ) -> Result<bool, GameError> {
        if delta_ms.is_finite() && delta_ms > 0.0 {
            self.accumulator_ms += delta_ms;
        }
        if self.accumulator_ms < self.step_ms {
            return Ok(false);
        }
        self.accumulator_ms -= self.step_ms;
        if self.accumulator_ms >= self.step_ms {
            self.accumulator_ms %= self.step_ms;
        }
        self.step(board, rng)?;
        Ok(true)
    }

    /// One discrete grid step: wall pre-check, then tail-to-head relink.
    pub fn step(&mut self, board: &mut Board, rng: &mut u32) -> Result<(), GameError> {
        let head_id = self
            .head
            .ok_or(GameError::BrokenChain("step on an empty chain"))?;
        let head_loc = self.joints[head_id].slot();

        // Wall pre-check: if the slot ahead is off the board, turn onto a
        // random perpendicular heading that stays in range.
        let (col, row) = location_ahead(head_loc, self.head_direction);
        if board.try_slot(col, row).is_none() {
            self.head_direction = escape_direction(board, head_loc, self.head_direction, rng)?;
        }

        let (col, row) = location_ahead(head_loc, self.head_direction);
        let new_loc = board.slot(col, row)?.location();

        let tail_id = self
            .tail
            .ok_or(GameError::BrokenChain("chain has a head but no tail"))?;

        // Vacate the old tail slot before occupying the new head slot;
        // the two may coincide when the chain doubles back tightly.
        // When the chain self-overlaps a later joint may have taken over
        // the slot's back-reference, so only the registered occupant
        // clears it.
        let tail_slot = self.joints[tail_id].slot();
        if board.slot_at(tail_slot).occupant() == Some(tail_id) {
            board.clear_occupant(tail_slot);
        }

        if tail_id != head_id {
            // Current tail becomes the new head.
            let new_tail_id = self.joints[tail_id]
                .next()
                .ok_or(GameError::BrokenChain("tail has no link toward the head"))?;

            self.joints[head_id].set_next(Some(tail_id));
            self.joints[tail_id].set_prev(Some(head_id));
            self.joints[tail_id].set_next(None);
            self.joints[new_tail_id].set_prev(None);

            self.head = Some(tail_id);
            self.tail = Some(new_tail_id);
        }

        let new_head_id = self.head.unwrap_or(head_id);
        self.joints[new_head_id].set_slot(new_loc);
        self.joints[new_head_id].set_direction(self.head_direction);
        board.set_occupant(new_loc, new_head_id);

        self.last_direction = self.head_direction;
        Ok(())
    }

    /// Joint locations from head to tail.
    pub fn locations(&self) -> Vec<Location> {
        let mut out = Vec::with_capacity(self.length as usize);
        let mut current = self.head;
        while let Some(id) = current {
            out.push(self.joints[id].slot());
            current = self.joints[id].prev();
        }
        out
    }

    #[inline]
    pub fn len(&self) -> u32 {
        self.length
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn head_location(&self) -> Option<Location> {
        self.head.map(|id| self.joints[id].slot())
    }

    pub fn tail_location(&self) -> Option<Location> {
        self.tail.map(|id| self.joints[id].slot())
    }

    /// Heading staged for the next step.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.head_direction
    }

    /// Heading committed on the last step.
    #[inline]
    pub fn last_direction(&self) -> Direction {
        self.last_direction
    }

    #[inline]
    pub fn step_ms(&self) -> f64 {
        self.step_ms
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn color(&self) -> &str {
        &self.color
    }

    fn clear_joints(&mut self, board: &mut Board) {
        for (id, joint) in self.joints.iter().enumerate() {
            let loc = joint.slot();
            if board.slot_at(loc).occupant() == Some(id) {
                board.clear_occupant(loc);
            }
        }
        self.joints.clear();
        self.head = None;
        self.tail = None;
        self.length = 0;
        self.head_direction = self.start_direction;
        self.last_direction = self.start_direction;
        self.accumulator_ms = 0.0;
    }
}

#[inline]
fn location_ahead(loc: Location, direction: Direction) -> (i32, i32) {
    let (dc, dr) = direction.offset();
    (loc.col as i32 + dc, loc.row as i32 + dr)
}

#[inline]
fn location_behind(loc: Location, direction: Direction) -> (i32, i32) {
    let (dc, dr) = direction.offset();
    (loc.col as i32 - dc, loc.row as i32 - dr)
}

/// Uniform choice among the perpendicular headings whose next slot is
/// in range. Empty on a >= 2x2 board would mean a corrupted chain.
fn escape_direction(
    board: &Board,
    head_loc: Location,
    heading: Direction,
    rng: &mut u32,
) -> Result<Direction, GameError> {
    let candidates: Vec<Direction> = heading
        .perpendiculars()
        .into_iter()
        .filter(|d| {
            let (col, row) = location_ahead(head_loc, *d);
            board.try_slot(col, row).is_some()
        })
        .collect();

    if candidates.is_empty() {
        return Err(GameError::BrokenChain("no in-range perpendicular escape from wall"));
    }
    Ok(candidates[random::pick(rng, candidates.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BoardSettings;
    use std::collections::HashSet;

    fn board(columns: u32, rows: u32) -> Board {
        Board::new(640.0, 480.0, &BoardSettings { columns, rows }).unwrap()
    }

    fn settings(length: u32, col: u32, row: u32, dir: &str, speed: f64) -> SnakeSettings {
        SnakeSettings {
            speed,
            start_length: length,
            start_col: col,
            start_row: row,
            start_direction: dir.to_string(),
            ..SnakeSettings::default()
        }
    }

    fn snake_on(board: &mut Board, s: &SnakeSettings) -> Snake {
        let mut snake = Snake::new(s, board).unwrap();
        snake.init(board).unwrap();
        snake
    }

    #[test]
    fn init_builds_contiguous_chain_behind_the_head() {
        let mut board = board(32, 24);
        let snake = snake_on(&mut board, &settings(5, 12, 18, "right", 3.0));

        assert_eq!(snake.len(), 5);
        assert_eq!(snake.head_location(), Some(Location::new(12, 18)));
        assert_eq!(snake.tail_location(), Some(Location::new(8, 18)));
        // Joints sit opposite the start heading, head first.
        let expected: Vec<Location> = (0..5)
            .map(|i| Location::new(12 - i, 18))
            .collect();
        assert_eq!(snake.locations(), expected);
        // Occupancy back-references agree.
        let occupied: HashSet<Location> = board.occupied_locations().into_iter().collect();
        assert_eq!(occupied, expected.into_iter().collect());
    }

    #[test]
    fn init_is_idempotent_on_occupancy() {
        let mut board = board(32, 24);
        let mut snake = snake_on(&mut board, &settings(5, 12, 18, "right", 3.0));
        snake.init(&mut board).unwrap();
        assert_eq!(snake.len(), 5);
        assert_eq!(board.occupied_locations().len(), 5);
    }

    #[test]
    fn init_fails_when_chain_does_not_fit() {
        // Head at column 2 heading right: joint 4 would land at column -1.
        let mut board = board(32, 24);
        let mut snake = Snake::new(&settings(5, 2, 18, "right", 3.0), &board).unwrap();
        assert!(matches!(
            snake.init(&mut board),
            Err(GameError::OutOfRange { .. })
        ));
    }

    #[test]
    fn step_moves_head_one_slot_along_heading() {
        let mut board = board(32, 24);
        let mut snake = snake_on(&mut board, &settings(5, 12, 18, "right", 3.0));
        let mut rng = 1;

        snake.step(&mut board, &mut rng).unwrap();
        assert_eq!(snake.head_location(), Some(Location::new(13, 18)));
        assert_eq!(snake.len(), 5);
        let expected: Vec<Location> = (0..5)
            .map(|i| Location::new(13 - i, 18))
            .collect();
        assert_eq!(snake.locations(), expected);
    }

    #[test]
    fn step_swaps_exactly_one_occupied_slot() {
        let mut board = board(32, 24);
        let mut snake = snake_on(&mut board, &settings(5, 12, 18, "right", 3.0));
        let mut rng = 1;

        let before: HashSet<Location> = board.occupied_locations().into_iter().collect();
        snake.step(&mut board, &mut rng).unwrap();
        let after: HashSet<Location> = board.occupied_locations().into_iter().collect();

        let vacated: Vec<_> = before.difference(&after).collect();
        let occupied: Vec<_> = after.difference(&before).collect();
        assert_eq!(vacated, vec![&Location::new(8, 18)]);
        assert_eq!(occupied, vec![&Location::new(13, 18)]);
    }

    #[test]
    fn single_joint_snake_steps() {
        let mut board = board(8, 6);
        let mut snake = snake_on(&mut board, &settings(1, 3, 3, "down", 8.0));
        let mut rng = 1;

        snake.step(&mut board, &mut rng).unwrap();
        assert_eq!(snake.head_location(), Some(Location::new(3, 4)));
        assert_eq!(snake.tail_location(), Some(Location::new(3, 4)));
        assert_eq!(board.occupied_locations(), vec![Location::new(3, 4)]);
    }

    #[test]
    fn perpendicular_direction_changes_are_staged_and_applied() {
        let mut board = board(32, 24);
        let mut snake = snake_on(&mut board, &settings(5, 12, 18, "right", 3.0));
        let mut rng = 1;

        assert!(snake.set_direction(Direction::UP));
        // Staged, not yet observable on the grid.
        assert_eq!(snake.head_location(), Some(Location::new(12, 18)));
        snake.step(&mut board, &mut rng).unwrap();
        assert_eq!(snake.head_location(), Some(Location::new(12, 17)));
        assert_eq!(snake.last_direction(), Direction::UP);
    }

    #[test]
    fn parallel_and_reverse_direction_changes_are_dropped() {
        let mut board = board(32, 24);
        let mut snake = snake_on(&mut board, &settings(5, 12, 18, "right", 3.0));

        assert!(!snake.set_direction(Direction::LEFT));
        assert!(!snake.set_direction(Direction::RIGHT));
        assert_eq!(snake.direction(), Direction::RIGHT);
    }

    #[test]
    fn reversal_is_blocked_against_committed_heading_not_staged_one() {
        let mut board = board(32, 24);
        let mut snake = snake_on(&mut board, &settings(5, 12, 18, "right", 3.0));

        // Two inputs between steps: up is staged, then down is still
        // perpendicular to the committed "right" and replaces it.
        assert!(snake.set_direction(Direction::UP));
        assert!(snake.set_direction(Direction::DOWN));
        assert_eq!(snake.direction(), Direction::DOWN);
    }

    #[test]
    fn wall_collision_turns_perpendicular_and_stays_in_range() {
        for seed in 1..20u32 {
            let mut board = board(8, 6);
            let mut snake = snake_on(&mut board, &settings(2, 7, 3, "right", 8.0));
            let mut rng = seed;

            snake.step(&mut board, &mut rng).unwrap();
            let head = snake.head_location().unwrap();
            // Turned up or down off the wall, never through it.
            assert_eq!(head.col, 7);
            assert!(head.row == 2 || head.row == 4);
            assert!(snake.last_direction().is_perpendicular_to(Direction::RIGHT));
        }
    }

    #[test]
    fn wall_collision_in_corner_has_one_escape() {
        let mut board = board(8, 6);
        let mut snake = snake_on(&mut board, &settings(1, 7, 0, "right", 8.0));
        let mut rng = 99;

        // Top-right corner heading right: only "down" stays in range.
        snake.step(&mut board, &mut rng).unwrap();
        assert_eq!(snake.head_location(), Some(Location::new(7, 1)));
        assert_eq!(snake.last_direction(), Direction::DOWN);
    }

    #[test]
    fn advance_steps_only_at_the_step_boundary() {
        let mut board = board(32, 24);
        // speed 3 => 333.33 ms per step
        let mut snake = snake_on(&mut board, &settings(5, 12, 18, "right", 3.0));
        let mut rng = 1;

        assert!(!snake.advance(100.0, &mut board, &mut rng).unwrap());
        assert!(!snake.advance(200.0, &mut board, &mut rng).unwrap());
        assert_eq!(snake.head_location(), Some(Location::new(12, 18)));

        // Crosses 1000/3 ms exactly once.
        assert!(snake.advance(1000.0 / 3.0 - 300.0, &mut board, &mut rng).unwrap());
        assert_eq!(snake.head_location(), Some(Location::new(13, 18)));
    }

    #[test]
    fn advance_carries_the_remainder() {
        let mut board = board(32, 24);
        // speed 10 => 100 ms per step
        let mut snake = snake_on(&mut board, &settings(3, 10, 10, "right", 10.0));
        let mut rng = 1;

        assert!(snake.advance(150.0, &mut board, &mut rng).unwrap());
        // 50 ms carried over: another 50 ms completes the next step.
        assert!(snake.advance(50.0, &mut board, &mut rng).unwrap());
        assert_eq!(snake.head_location(), Some(Location::new(12, 10)));
    }

    #[test]
    fn advance_drops_stall_backlog_instead_of_bursting() {
        let mut board = board(32, 24);
        // speed 10 => 100 ms per step
        let mut snake = snake_on(&mut board, &settings(3, 10, 10, "right", 10.0));
        let mut rng = 1;

        // A 1-second stall still yields a single step.
        assert!(snake.advance(1000.0, &mut board, &mut rng).unwrap());
        assert_eq!(snake.head_location(), Some(Location::new(11, 10)));
        // Backlog was clamped below one step.
        assert!(!snake.advance(0.0, &mut board, &mut rng).unwrap());
    }

    #[test]
    fn occupancy_tracks_the_chain_through_self_overlap() {
        let mut board = board(32, 24);
        // A length-8 chain steered around a 2x2 loop coils onto 4 slots.
        let mut snake = snake_on(&mut board, &settings(8, 12, 18, "right", 10.0));
        let mut rng = 1;

        let cycle = [Direction::UP, Direction::LEFT, Direction::DOWN, Direction::RIGHT];
        for i in 0..16 {
            assert!(snake.set_direction(cycle[i % 4]));
            snake.step(&mut board, &mut rng).unwrap();

            let distinct: HashSet<Location> = snake.locations().into_iter().collect();
            let occupied: HashSet<Location> = board.occupied_locations().into_iter().collect();
            assert_eq!(occupied, distinct, "occupancy diverged at step {}", i);
        }

        assert_eq!(snake.len(), 8);
        assert_eq!(board.occupied_locations().len(), 4);
    }

    #[test]
    fn init_after_coiling_restores_clean_occupancy() {
        let mut board = board(32, 24);
        let mut snake = snake_on(&mut board, &settings(8, 12, 18, "right", 10.0));
        let mut rng = 1;

        let cycle = [Direction::UP, Direction::LEFT, Direction::DOWN, Direction::RIGHT];
        for i in 0..10 {
            snake.set_direction(cycle[i % 4]);
            snake.step(&mut board, &mut rng).unwrap();
        }

        snake.init(&mut board).unwrap();
        let expected: HashSet<Location> = (0..8)
            .map(|i| Location::new(12 - i, 18))
            .collect();
        let occupied: HashSet<Location> = board.occupied_locations().into_iter().collect();
        assert_eq!(occupied, expected);
    }

    #[test]
    fn add_joint_extends_the_tail_along_its_heading() {
        let mut board = board(32, 24);
        let mut snake = snake_on(&mut board, &settings(3, 12, 18, "right", 3.0));

        snake.add_joint(&mut board).unwrap();
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.tail_location(), Some(Location::new(9, 18)));
    }

    #[test]
    fn new_rejects_invalid_settings() {
        let board_ok = board(32, 24);
        assert!(Snake::new(&settings(0, 12, 18, "right", 3.0), &board_ok).is_err());
        assert!(Snake::new(&settings(5, 40, 18, "right", 3.0), &board_ok).is_err());
        assert!(Snake::new(&settings(5, 12, 18, "right", 0.0), &board_ok).is_err());
        assert!(Snake::new(&settings(5, 12, 18, "sideways", 3.0), &board_ok).is_err());
    }

    #[test]
    fn new_rejects_nonpositive_width() {
        let board = board(32, 24);
        let mut s = settings(5, 12, 18, "right", 3.0);
        s.width = 0.0;
        assert!(matches!(Snake::new(&s, &board), Err(GameError::Config(_))));
    }
}
