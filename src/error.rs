/**
 * Typed caller errors for the dispatcher's public operations.
 *
 * Both variants are rejections of a single call — the dispatcher's state is
 * left untouched when either is returned, and there is no retry or recovery
 * performed by the core itself (see the dispatcher's own doc comments).
 */

/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::fmt;

/***************************************/
/*             Public API              */
/***************************************/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatcherError {
    /// A floor outside the configured `FloorLimits` was referenced by `pickup`
    /// or `selectFloor`.
    BadFloor(i32),
    /// `selectFloor` or `setElevator` referenced a cabin id outside the fleet.
    BadCabinId(usize),
}

impl fmt::Display for DispatcherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatcherError::BadFloor(floor) => write!(f, "floor {} is outside the configured limits", floor),
            DispatcherError::BadCabinId(id) => write!(f, "no cabin with id {}", id),
        }
    }
}

impl std::error::Error for DispatcherError {}
