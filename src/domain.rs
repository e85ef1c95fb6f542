//! Domain models for the catalog and the vehicle factory.
//!
//! This module contains the book record, the catalog capability and its
//! in-memory implementation, the manager that depends on that capability,
//! the vehicle factory, and configuration.

/// Book records.
pub mod record;
pub use record::Record;

/// The catalog capability and its in-memory implementation.
pub mod catalog;
pub use catalog::{Catalog, Library};

mod manager;
pub use manager::Manager;

/// Regional vehicle construction.
pub mod vehicle;
pub use vehicle::{Factory, Region, Vehicle, VehicleKind};

mod config;
pub use config::{Config, Error as ConfigError};
