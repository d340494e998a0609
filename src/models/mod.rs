pub mod config;

pub use config::{ReportFormat, Settings};
