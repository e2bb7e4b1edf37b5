pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod report;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliArgs;

pub use crate::adapters::{HeadHunterSource, SuperJobSource};
pub use crate::config::{Settings, SourceSelection};
pub use crate::core::report::{ReportEngine, ReportSection};
pub use crate::core::statistics::collect_statistics;
pub use crate::utils::error::{Result, StatsError};
