//! carom: bouncing-circle simulation (wall reflection, pairwise elastic contacts, hit testing)

pub mod types;
pub mod api;
pub mod config;
pub mod motion;
pub mod broadphase;
pub mod narrowphase;
pub mod scene;
pub mod world;

pub use crate::types::*;
pub use crate::api::*;
pub use crate::broadphase::Broadphase;
pub use crate::config::{ConfigError, SimConfig};
pub use crate::narrowphase::Narrowphase;
pub use crate::world::Simulation;
