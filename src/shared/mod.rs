pub mod structs;

pub use structs::CabinStatus;
pub use structs::Direction;
pub use structs::FloorLimits;
pub use structs::PickupTask;
pub use structs::Status;
