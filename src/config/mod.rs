//! Configuration management for the simulation

pub mod settings;

pub use settings::{
    Settings, GridConfig, SeedConfig, PatternConfig, DisplayConfig,
    EdgePolicy, RendererKind, CliOverrides
};
