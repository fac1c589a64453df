//! Utils

use clap::{Parser, ValueEnum};

/// Log output format for the demos
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable single-line output
    #[default]
    Compact,

    /// Structured JSON output
    Json,
}

/// Arguments for the checkout example
#[derive(Debug, Parser)]
pub struct ExampleCheckoutArgs {
    /// Number of items to ring up
    #[clap(short, long)]
    pub n: Option<usize>,

    /// Fixture set to use for the catalog & items
    #[clap(short, long, default_value = "cafe")]
    pub fixture: String,

    /// Pay in cash, handing over this many minor units (cashless if omitted)
    #[clap(short, long)]
    pub cash: Option<i64>,

    /// Settings file (defaults to JPY with 10% tax charged)
    #[clap(short, long)]
    pub settings: Option<String>,

    /// Have the order book refuse the order
    #[clap(long)]
    pub reject: bool,

    /// Log output format
    #[clap(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}
