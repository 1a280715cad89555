/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fs;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::FloorLimits;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    pub fleet: FleetConfig,
}

#[derive(Deserialize, Clone, Debug)]
pub struct FleetConfig {
    pub n_elevators: usize,
    pub bottom_floor: Option<i32>,
    pub top_floor: Option<i32>,
    #[serde(default)]
    pub sole_mode: bool,
}

impl FleetConfig {
    /// Combines `bottom_floor`/`top_floor` into a `FloorLimits`, or `None` if both
    /// are absent. Having exactly one of the pair present is a malformed config.
    pub fn floor_limits(&self) -> Option<FloorLimits> {
        match (self.bottom_floor, self.top_floor) {
            (Some(bottom), Some(top)) => Some(FloorLimits::new(bottom, top)),
            (None, None) => None,
            _ => panic!("fleet.bottom_floor and fleet.top_floor must both be set or both be absent"),
        }
    }
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn load_config(path: &str) -> Config {
    let config_str = fs::read_to_string(path).expect("Failed to read configuration file");
    toml::from_str(&config_str).expect("Failed to parse configuration file")
}
