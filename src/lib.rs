/***************************************/
/*              Modules                */
/***************************************/
pub mod cabin;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod shared;

/***************************************/
/*             Re-exports              */
/***************************************/
pub use cabin::Cabin;
pub use config::{Config, FleetConfig};
pub use dispatcher::Dispatcher;
pub use error::DispatcherError;
pub use shared::{CabinStatus, Direction, FloorLimits, PickupTask, Status};
