/*
 * Unit tests for the cabin state machine.
 *
 * The unit tests follow the Arrange, Act, Assert pattern.
 */

/***************************************/
/*             Unit tests              */
/***************************************/
use super::Cabin;
use crate::shared::{Direction::{Down, Up}, FloorLimits, PickupTask, Status};

#[test]
fn new_cabin_is_idle_with_no_direction() {
    let cabin = Cabin::new(0, 3);

    assert_eq!(cabin.status, Status::Idle);
    assert_eq!(cabin.direction, None);
    assert!(cabin.drop_offs.is_empty());
    assert_eq!(cabin.assigned_pickup, None);
    assert_eq!(cabin.current_destination(), 3);
}

#[test]
fn idle_with_dropoff_at_current_floor_stops_for_exactly_one_tick() {
    // Arrange
    let mut cabin = Cabin::new(0, 5);
    cabin.drop_offs.insert(5);

    // Act: first advance consumes the drop-off without moving.
    cabin.advance();

    // Assert
    assert_eq!(cabin.status, Status::Stopped);
    assert_eq!(cabin.floor, 5);
    assert!(cabin.drop_offs.is_empty());
    // Open question 3: direction stays unassigned through the Stopped tick.
    assert_eq!(cabin.direction, None);
}

#[test]
fn idle_with_dropoff_elsewhere_starts_moving_toward_it() {
    let mut cabin = Cabin::new(0, 0);
    cabin.drop_offs.insert(4);

    cabin.advance();

    assert_eq!(cabin.status, Status::Moving);
    assert_eq!(cabin.direction, Some(Up));
    assert_eq!(cabin.floor, 0);
}

#[test]
fn moving_cabin_arrives_at_dropoff_and_stops() {
    let mut cabin = Cabin::new(0, 0);
    cabin.drop_offs.insert(1);
    cabin.status = Status::Moving;
    cabin.direction = Some(Up);

    cabin.advance();

    assert_eq!(cabin.floor, 1);
    assert_eq!(cabin.status, Status::Stopped);
    assert!(cabin.drop_offs.is_empty());
}

#[test]
fn moving_cabin_passes_floor_without_matching_work_keeps_moving() {
    let mut cabin = Cabin::new(0, 0);
    cabin.drop_offs.insert(3);
    cabin.status = Status::Moving;
    cabin.direction = Some(Up);

    cabin.advance();

    assert_eq!(cabin.floor, 1);
    assert_eq!(cabin.status, Status::Moving);
}

#[test]
fn moving_cabin_arrives_at_assigned_pickup_adopts_its_direction() {
    let mut cabin = Cabin::new(0, 4);
    cabin.assigned_pickup = Some(PickupTask::new(5, Down));
    cabin.status = Status::Moving;
    cabin.direction = Some(Up);

    cabin.advance();

    assert_eq!(cabin.floor, 5);
    assert_eq!(cabin.status, Status::Stopped);
    assert_eq!(cabin.assigned_pickup, None);
    assert_eq!(cabin.direction, Some(Down));
}

#[test]
fn moving_cabin_can_clear_dropoff_and_pickup_on_the_same_tick() {
    let mut cabin = Cabin::new(0, 4);
    cabin.drop_offs.insert(5);
    cabin.assigned_pickup = Some(PickupTask::new(5, Down));
    cabin.status = Status::Moving;
    cabin.direction = Some(Up);

    cabin.advance();

    assert_eq!(cabin.floor, 5);
    assert_eq!(cabin.status, Status::Stopped);
    assert!(cabin.drop_offs.is_empty());
    assert_eq!(cabin.assigned_pickup, None);
    assert_eq!(cabin.direction, Some(Down));
}

#[test]
fn stopped_with_nothing_left_becomes_idle() {
    let mut cabin = Cabin::new(0, 2);
    cabin.status = Status::Stopped;
    cabin.direction = Some(Up);

    cabin.advance();

    assert_eq!(cabin.status, Status::Idle);
    assert_eq!(cabin.direction, None);
}

#[test]
fn stopped_flips_direction_when_current_heading_points_away() {
    let mut cabin = Cabin::new(0, 5);
    cabin.drop_offs.insert(0);
    cabin.status = Status::Stopped;
    cabin.direction = Some(Up);

    cabin.advance();

    assert_eq!(cabin.status, Status::Moving);
    assert_eq!(cabin.direction, Some(Down));
    // The stop consumes the whole tick: no movement yet.
    assert_eq!(cabin.floor, 5);
}

#[test]
fn stopped_resolves_unassigned_direction_toward_destination() {
    let mut cabin = Cabin::new(0, 5);
    cabin.drop_offs.insert(8);
    cabin.status = Status::Stopped;
    cabin.direction = None;

    cabin.advance();

    assert_eq!(cabin.status, Status::Moving);
    assert_eq!(cabin.direction, Some(Up));
    assert_eq!(cabin.floor, 5);
}

#[test]
fn current_destination_prefers_assigned_pickup_over_dropoffs() {
    let mut cabin = Cabin::new(0, 0);
    cabin.drop_offs.insert(2);
    cabin.assigned_pickup = Some(PickupTask::new(9, Up));

    assert_eq!(cabin.current_destination(), 9);
}

#[test]
fn current_destination_picks_max_dropoff_when_heading_up() {
    let mut cabin = Cabin::new(0, 0);
    cabin.direction = Some(Up);
    cabin.drop_offs.insert(2);
    cabin.drop_offs.insert(7);
    cabin.drop_offs.insert(4);

    assert_eq!(cabin.current_destination(), 7);
}

#[test]
fn current_destination_picks_min_dropoff_when_heading_down() {
    let mut cabin = Cabin::new(0, 0);
    cabin.direction = Some(Down);
    cabin.drop_offs.insert(2);
    cabin.drop_offs.insert(-7);
    cabin.drop_offs.insert(4);

    assert_eq!(cabin.current_destination(), -7);
}

#[test]
fn can_clear_rejects_task_at_a_different_floor() {
    let mut cabin = Cabin::new(0, 3);
    cabin.direction = Some(Up);
    cabin.status = Status::Moving;

    assert!(!cabin.can_clear(&PickupTask::new(4, Up), None, false));
}

#[test]
fn can_clear_accepts_matching_direction_with_no_assigned_pickup() {
    let mut cabin = Cabin::new(0, 3);
    cabin.direction = Some(Up);
    cabin.status = Status::Moving;

    assert!(cabin.can_clear(&PickupTask::new(3, Up), None, false));
}

#[test]
fn can_clear_rejects_mismatched_direction_outside_sole_mode() {
    let mut cabin = Cabin::new(0, 3);
    cabin.direction = Some(Up);
    cabin.status = Status::Moving;

    assert!(!cabin.can_clear(&PickupTask::new(3, Down), None, false));
}

#[test]
fn can_clear_accepts_any_direction_in_sole_mode() {
    let mut cabin = Cabin::new(0, 3);
    cabin.direction = Some(Up);
    cabin.status = Status::Moving;

    assert!(cabin.can_clear(&PickupTask::new(3, Down), None, true));
}

#[test]
fn can_clear_rejects_opposite_direction_assigned_pickup_away_from_terminal() {
    let mut cabin = Cabin::new(0, 3);
    cabin.direction = Some(Up);
    cabin.status = Status::Moving;
    cabin.assigned_pickup = Some(PickupTask::new(6, Down));

    let limits = FloorLimits::new(-1, 10);
    assert!(!cabin.can_clear(&PickupTask::new(3, Up), Some(&limits), false));
}

#[test]
fn can_clear_accepts_opposite_direction_when_assigned_pickup_is_at_top_floor() {
    let mut cabin = Cabin::new(0, 3);
    cabin.direction = Some(Up);
    cabin.status = Status::Moving;
    cabin.assigned_pickup = Some(PickupTask::new(10, Down));

    let limits = FloorLimits::new(-1, 10);
    assert!(cabin.can_clear(&PickupTask::new(3, Up), Some(&limits), false));
}

#[test]
fn can_clear_accepts_opposite_direction_when_assigned_pickup_is_at_bottom_floor() {
    let mut cabin = Cabin::new(0, 3);
    cabin.direction = Some(Down);
    cabin.status = Status::Moving;
    cabin.assigned_pickup = Some(PickupTask::new(-1, Up));

    let limits = FloorLimits::new(-1, 10);
    assert!(cabin.can_clear(&PickupTask::new(3, Down), Some(&limits), false));
}

#[test]
fn can_clear_rejects_when_unassigned_direction_outside_sole_mode() {
    let cabin = Cabin::new(0, 3);

    assert!(!cabin.can_clear(&PickupTask::new(3, Up), None, false));
}
