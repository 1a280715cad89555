/**
 * The per-cabin state machine.
 *
 * A `Cabin` advances at most one floor per call to `advance()`, which is the
 * only operation the dispatcher invokes once per tick per cabin. Every other
 * method here is a pure read of cabin state, used by the dispatcher to decide
 * whether a pool pickup can be absorbed and where the cabin is currently headed.
 *
 * # Fields
 * - `id`:               stable index of this cabin within the fleet.
 * - `floor`:             current integer floor.
 * - `direction`:         current travel heading, or `None` while idle/unassigned.
 * - `status`:            `Idle`, `Moving`, or `Stopped`.
 * - `drop_offs`:         floors selected from inside the cabin, awaiting a visit.
 * - `assigned_pickup`:   at most one hall call this cabin is dedicated to.
 */

/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::cmp::Ordering;
use std::collections::BTreeSet;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{Direction, FloorLimits, PickupTask, Status};

/***************************************/
/*             Public API              */
/***************************************/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cabin {
    pub id: usize,
    pub floor: i32,
    pub direction: Option<Direction>,
    pub status: Status,
    pub drop_offs: BTreeSet<i32>,
    pub assigned_pickup: Option<PickupTask>,
}

impl Cabin {
    /// A freshly reset, idle cabin at the given floor.
    pub fn new(id: usize, floor: i32) -> Cabin {
        Cabin {
            id,
            floor,
            direction: None,
            status: Status::Idle,
            drop_offs: BTreeSet::new(),
            assigned_pickup: None,
        }
    }

    /// The floor this cabin is currently headed toward, per the current-destination
    /// rule: assigned pickup first, then the drop-off furthest along the current
    /// direction, then any remaining drop-off, then the current floor if there is
    /// nothing left to do.
    pub fn current_destination(&self) -> i32 {
        if let Some(pickup) = self.assigned_pickup {
            return pickup.floor;
        }

        match self.direction {
            Some(Direction::Up) if !self.drop_offs.is_empty() => *self.drop_offs.iter().next_back().unwrap(),
            Some(Direction::Down) if !self.drop_offs.is_empty() => *self.drop_offs.iter().next().unwrap(),
            _ if !self.drop_offs.is_empty() => *self.drop_offs.iter().next().unwrap(),
            _ => self.floor,
        }
    }

    /// Advances the cabin by exactly one tick. Called once per tick per cabin by
    /// the dispatcher, before it considers this cabin for pool absorption.
    pub fn advance(&mut self) {
        match self.status {
            Status::Idle => self.advance_idle(),
            Status::Stopped => self.advance_stopped(),
            Status::Moving => self.advance_moving(),
        }
    }

    fn advance_idle(&mut self) {
        if self.drop_offs.is_empty() && self.assigned_pickup.is_none() {
            return;
        }

        if self.drop_offs.remove(&self.floor) {
            self.status = Status::Stopped;
        } else {
            self.status = Status::Moving;
            let destination = self.current_destination();
            self.direction = Some(direction_toward(self.floor, destination));
        }
    }

    fn advance_stopped(&mut self) {
        if self.drop_offs.is_empty() && self.assigned_pickup.is_none() {
            self.status = Status::Idle;
            self.direction = None;
            return;
        }

        self.status = Status::Moving;
        let destination = self.current_destination();
        match self.direction {
            Some(direction) if points_away(direction, self.floor, destination) => {
                self.direction = Some(direction.opposite());
            }
            None => {
                self.direction = Some(direction_toward(self.floor, destination));
            }
            _ => {}
        }
    }

    fn advance_moving(&mut self) {
        let destination = self.current_destination();
        match destination.cmp(&self.floor) {
            Ordering::Greater => self.floor += 1,
            Ordering::Less => self.floor -= 1,
            Ordering::Equal => {}
        }

        let mut stopped = false;

        if self.drop_offs.remove(&self.floor) {
            stopped = true;
        }

        if let Some(pickup) = self.assigned_pickup {
            if pickup.floor == self.floor {
                self.direction = Some(pickup.direction);
                self.assigned_pickup = None;
                stopped = true;
            }
        }

        if stopped {
            self.status = Status::Stopped;
        }
    }

    /// Whether this cabin, at its current floor, may absorb `task` from the pool —
    /// asked by the dispatcher about every pool task against every moving/stopped
    /// cabin, once per tick.
    pub fn can_clear(&self, task: &PickupTask, limits: Option<&FloorLimits>, sole_mode: bool) -> bool {
        if task.floor != self.floor {
            return false;
        }

        if sole_mode {
            return true;
        }

        let Some(direction) = self.direction else {
            return false;
        };
        if direction != task.direction {
            return false;
        }

        match self.assigned_pickup {
            Some(pickup) => {
                if let Some(limits) = limits {
                    if pickup.floor == limits.top && task.direction == Direction::Up {
                        return true;
                    }
                    if pickup.floor == limits.bottom && task.direction == Direction::Down {
                        return true;
                    }
                }
                pickup.direction == task.direction
            }
            None => true,
        }
    }
}

/// Direction from `floor` toward `destination`. Panics if they're equal — every
/// call site within the cabin's own transitions is guarded so that this never
/// happens (see the current-destination rule's construction).
fn direction_toward(floor: i32, destination: i32) -> Direction {
    match destination.cmp(&floor) {
        Ordering::Greater => Direction::Up,
        Ordering::Less => Direction::Down,
        Ordering::Equal => unreachable!("current destination equals current floor"),
    }
}

fn points_away(direction: Direction, floor: i32, destination: i32) -> bool {
    match direction {
        Direction::Up => destination < floor,
        Direction::Down => destination > floor,
    }
}
