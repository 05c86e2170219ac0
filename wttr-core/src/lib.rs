//! Core library for the `wttr-bar` status-bar module.
//!
//! This crate defines:
//! - The wttr.in `j1` response schema and the widget output record
//! - The weather-code icon table and tooltip formatters
//! - The report builder and the HTTP provider that feeds it
//! - Optional file configuration
//!
//! It is used by `wttr-cli`, but the report builder has no I/O and can be
//! driven from any decoded response.

pub mod config;
pub mod error;
pub mod format;
pub mod icons;
pub mod model;
pub mod provider;
pub mod report;

pub use config::Config;
pub use error::WeatherError;
pub use model::{Chances, WidgetOutput, WttrResponse};
pub use provider::{WeatherProvider, provider_from_config, wttr::WttrProvider};
pub use report::{ReportOptions, build_report, fetch_report};
