/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/***************************************/
/*       Public data structures        */
/***************************************/

/// A hall call's declared direction of travel. Two-valued by contract — callers
/// never see an "unassigned" direction; that transient state lives on `Cabin`
/// as `Option<Direction>` instead of as a third variant here.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// A cabin's current work status.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Idle,
    Moving,
    Stopped,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Idle => write!(f, "idle"),
            Status::Moving => write!(f, "moving"),
            Status::Stopped => write!(f, "stopped"),
        }
    }
}

/// An immutable hall call: a floor plus the direction the caller wants to travel.
/// Two tasks are the same pickup when both fields match.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PickupTask {
    pub floor: i32,
    pub direction: Direction,
}

impl PickupTask {
    pub fn new(floor: i32, direction: Direction) -> PickupTask {
        PickupTask { floor, direction }
    }
}

/// The legal floor range for a fleet, if bounded. `bottom` must not exceed `top`.
/// `new` is for trusted call sites (configuration loading) where a violation is
/// a programmer/config-author bug worth panicking on; `try_new` is for call
/// sites fed by untrusted input (e.g. the driver program's `limits` command),
/// which must report a malformed pair as an ordinary error instead of aborting.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloorLimits {
    pub bottom: i32,
    pub top: i32,
}

impl FloorLimits {
    pub fn new(bottom: i32, top: i32) -> FloorLimits {
        assert!(bottom <= top, "floor limits require bottom <= top");
        FloorLimits { bottom, top }
    }

    /// Fallible counterpart to `new`, for untrusted input. `Err` when `bottom > top`.
    pub fn try_new(bottom: i32, top: i32) -> Result<FloorLimits, String> {
        if bottom > top {
            return Err("bottom must not exceed top".to_string());
        }
        Ok(FloorLimits { bottom, top })
    }

    pub fn contains(&self, floor: i32) -> bool {
        floor >= self.bottom && floor <= self.top
    }
}

/// A point-in-time summary of one cabin, independent of the dispatcher's
/// internal state — the shape returned by `Dispatcher::status`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CabinStatus {
    pub id: usize,
    pub floor: i32,
    pub destination: i32,
    pub status: Status,
    #[serde(rename = "dropOffs")]
    pub drop_offs: BTreeSet<i32>,
}
