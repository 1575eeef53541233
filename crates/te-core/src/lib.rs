//! Core types for TodayEcho.
//!
//! Holds the substat table and settings loaded from the config file, the
//! rolled-stat records that end up in the ledger, and the reward generator
//! that turns a config plus an RNG into one Echo roll.

pub mod config;
pub mod error;
pub mod generator;
pub mod stat;

pub use config::{Config, ConfigStore, Rgb, Settings};
pub use error::{CoreError, CoreResult};
pub use generator::{generate_roll, generate_rolls};
pub use stat::{RollRecord, RolledStat, StatDefinition};
