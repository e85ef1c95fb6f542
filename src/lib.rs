//! In-memory book catalog and regional vehicle factory.
//!
//! The catalog is an ordered list of book records behind the [`Catalog`]
//! capability. The vehicle module builds cars and motorcycles for a US or EU
//! configuration.

pub mod domain;
pub use domain::{
    Catalog, Config, ConfigError, Factory, Library, Manager, Record, Region, Vehicle, VehicleKind,
};
