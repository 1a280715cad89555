/**
 * Coordinates a fleet of cabins against a shared pool of unassigned hall calls.
 *
 * The dispatcher owns the fleet, the pool, and the fleet-wide configuration
 * (floor limits, sole-elevator mode). It never reassigns a pickup once a cabin
 * has claimed it, and it never preempts a moving cabin's work. Its only unit of
 * simulated time is `step()` — nothing here consults a clock.
 *
 * # Fields
 * - `fleet`:      the cabins, indexed by id.
 * - `pool`:       FIFO queue of hall calls not yet claimed by any cabin.
 * - `limits`:     optional floor range; `None` means every floor is legal.
 * - `sole_mode`:  when set, every moving/stopped cabin absorbs every pool
 *                 pickup at its floor regardless of direction.
 */

/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::collections::VecDeque;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::cabin::Cabin;
use crate::config::FleetConfig;
use crate::error::DispatcherError;
use crate::shared::{CabinStatus, Direction, FloorLimits, PickupTask, Status};

/***************************************/
/*             Public API              */
/***************************************/
pub struct Dispatcher {
    fleet: Vec<Cabin>,
    pool: VecDeque<PickupTask>,
    limits: Option<FloorLimits>,
    sole_mode: bool,
}

impl Dispatcher {
    /// A fresh dispatcher with `n_elevators` idle cabins at floor 0, no floor
    /// limits, and sole mode off.
    pub fn new(n_elevators: usize) -> Dispatcher {
        Dispatcher {
            fleet: (0..n_elevators).map(|id| Cabin::new(id, 0)).collect(),
            pool: VecDeque::new(),
            limits: None,
            sole_mode: false,
        }
    }

    /// Builds a dispatcher from a loaded fleet configuration.
    pub fn from_config(config: &FleetConfig) -> Dispatcher {
        let mut dispatcher = Dispatcher::new(config.n_elevators);
        dispatcher.limits = config.floor_limits();
        dispatcher.sole_mode = config.sole_mode;
        dispatcher
    }

    /// Registers a hall call. Rejected if `floor` lies outside the configured
    /// limits; otherwise added to the pool unless an identical (floor, direction)
    /// pair is already pooled. An identical pair already held as some cabin's
    /// assigned pickup does not block this — see the ledger for why that's kept.
    pub fn pickup(&mut self, floor: i32, direction: Direction) -> Result<(), DispatcherError> {
        self.check_floor(floor)?;

        let already_pooled = self.pool.iter().any(|task| task.floor == floor && task.direction == direction);
        if !already_pooled {
            self.pool.push_back(PickupTask::new(floor, direction));
            log::debug!("pickup queued: floor {} direction {}", floor, direction);
        }

        Ok(())
    }

    /// Registers a cabin destination selection. Rejected if `floor` lies outside
    /// the configured limits or `cabin_id` is unknown; idempotent otherwise.
    pub fn select_floor(&mut self, cabin_id: usize, floor: i32) -> Result<(), DispatcherError> {
        self.check_floor(floor)?;

        let cabin = self.fleet.get_mut(cabin_id).ok_or_else(|| {
            log::warn!("selectFloor rejected: no cabin with id {}", cabin_id);
            DispatcherError::BadCabinId(cabin_id)
        })?;

        cabin.drop_offs.insert(floor);
        log::debug!("drop-off queued: cabin {} floor {}", cabin_id, floor);
        Ok(())
    }

    /// Advances simulated time by exactly one tick: every cabin advances, moving
    /// and stopped cabins get first refusal at matching pool pickups, and any
    /// pickups still unclaimed are handed to the closest idle cabin.
    pub fn step(&mut self) {
        for cabin in self.fleet.iter_mut() {
            cabin.advance();

            if cabin.status == Status::Idle {
                continue;
            }

            if let Some(index) = self
                .pool
                .iter()
                .position(|task| cabin.can_clear(task, self.limits.as_ref(), self.sole_mode))
            {
                let task = self.pool.remove(index).unwrap();
                cabin.status = Status::Stopped;
                log::debug!("cabin {} absorbed pool pickup at floor {} direction {}", cabin.id, task.floor, task.direction);
            }
        }

        while let Some(task) = self.pool.front().copied() {
            let Some(idle_id) = self.closest_idle(task.floor) else {
                break;
            };

            self.pool.pop_front();
            let cabin = &mut self.fleet[idle_id];
            cabin.assigned_pickup = Some(task);
            cabin.status = Status::Moving;
            cabin.direction = Some(toward(cabin.floor, task.floor));
            log::debug!("cabin {} assigned pickup at floor {} direction {}", idle_id, task.floor, task.direction);
        }
    }

    /// Replaces the cabin at `id` with a fresh idle cabin at `floor`. Any pickup
    /// the old cabin was dedicated to is returned to the pool.
    pub fn set_elevator(&mut self, id: usize, floor: i32) -> Result<(), DispatcherError> {
        let cabin = self.fleet.get_mut(id).ok_or_else(|| {
            log::warn!("setElevator rejected: no cabin with id {}", id);
            DispatcherError::BadCabinId(id)
        })?;

        if let Some(pickup) = cabin.assigned_pickup.take() {
            self.pool.push_back(pickup);
        }

        *cabin = Cabin::new(id, floor);
        log::debug!("cabin {} reset to floor {}", id, floor);
        Ok(())
    }

    /// Grows the fleet by appending idle cabins at floor 0, or shrinks it by
    /// truncating the tail. Truncation silently discards any assigned pickups
    /// of the dropped cabins — see the design ledger for why this mirrors the
    /// reference system's behaviour instead of `set_elevator`'s pool return.
    pub fn set_elevator_count(&mut self, n: usize) {
        if n > self.fleet.len() {
            for id in self.fleet.len()..n {
                self.fleet.push(Cabin::new(id, 0));
            }
        } else {
            self.fleet.truncate(n);
        }
        log::info!("fleet resized to {} cabins", n);
    }

    /// Replaces the configured floor range. `None` disables floor checking.
    pub fn set_floor_limits(&mut self, limits: Option<FloorLimits>) {
        self.limits = limits;
        log::info!("floor limits set to {:?}", self.limits);
    }

    /// Enables or disables sole-elevator mode, taking effect from the next `step`.
    pub fn set_sole_elevator_mode(&mut self, sole_mode: bool) {
        self.sole_mode = sole_mode;
        log::info!("sole elevator mode set to {}", sole_mode);
    }

    /// A snapshot of every cabin's id, floor, destination, status, and drop-offs.
    pub fn status(&self) -> Vec<CabinStatus> {
        self.fleet
            .iter()
            .map(|cabin| CabinStatus {
                id: cabin.id,
                floor: cabin.floor,
                destination: cabin.current_destination(),
                status: cabin.status,
                drop_offs: cabin.drop_offs.clone(),
            })
            .collect()
    }

    /// The union of pooled pickups and every cabin's assigned pickup.
    pub fn tasks(&self) -> Vec<PickupTask> {
        let mut tasks: Vec<PickupTask> = self.pool.iter().copied().collect();
        tasks.extend(self.fleet.iter().filter_map(|cabin| cabin.assigned_pickup));
        tasks
    }

    /// The idle cabin closest to `floor`, ties broken by lowest id.
    fn closest_idle(&self, floor: i32) -> Option<usize> {
        self.fleet
            .iter()
            .filter(|cabin| cabin.status == Status::Idle)
            .min_by_key(|cabin| ((cabin.floor - floor).abs(), cabin.id))
            .map(|cabin| cabin.id)
    }

    fn check_floor(&self, floor: i32) -> Result<(), DispatcherError> {
        if let Some(limits) = &self.limits {
            if !limits.contains(floor) {
                log::warn!("call rejected: floor {} is outside limits {:?}", floor, limits);
                return Err(DispatcherError::BadFloor(floor));
            }
        }
        Ok(())
    }
}

/// Direction from `floor` toward `destination`, treating equality as `Up`. Used
/// only for the assignment phase's initial heading: if the pickup is already at
/// the idle cabin's floor, the cabin's very next `advance()` immediately adopts
/// the pickup's declared direction and stops, so the placeholder is never
/// observable between `step()` calls.
fn toward(floor: i32, destination: i32) -> Direction {
    if destination >= floor {
        Direction::Up
    } else {
        Direction::Down
    }
}
