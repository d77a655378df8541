//! Command-line and environment configuration.
//!
//! | Flag / argument  | Variable                 | Default   |
//! |------------------|--------------------------|-----------|
//! | `[STOCK]`        | `GILDED_ROSE_STOCK`      | fixture   |
//! | `--output`       | `GILDED_ROSE_OUTPUT`     | `table`   |
//! | `--log-format`   | `GILDED_ROSE_LOG_FORMAT` | `json`    |
//!
//! Flags and arguments take precedence over the environment.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use gildedrose_observability::LogFormat;

/// Report format written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Advance the Gilded Rose stock by one day and print it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Parser)]
#[command(name = "gildedrose", version)]
pub struct Config {
    /// JSON stock list to load. The built-in stock is used when omitted.
    #[arg(value_name = "STOCK", env = "GILDED_ROSE_STOCK")]
    pub stock_path: Option<PathBuf>,

    /// Report format.
    #[arg(long, value_enum, env = "GILDED_ROSE_OUTPUT", default_value = "table")]
    pub output: OutputFormat,

    /// Log line format (`json` or `text`).
    #[arg(long, env = "GILDED_ROSE_LOG_FORMAT", default_value = "json")]
    pub log_format: LogFormat,
}
