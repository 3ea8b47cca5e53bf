//! Sliding-window search: scan state, scale explorers and the multi-scale
//! scanner.

pub mod config;
pub mod context;
pub mod explorer;
pub mod scanner;
pub mod stats;

pub use config::{Configurable, ExhaustiveConfig, OptionValue, ScanConfig};
pub use context::ScanContext;
pub use explorer::{ExhaustiveExplorer, ScaleExplorer, ScaleReport};
pub use scanner::{ScaleFailure, ScanReport, Scanner};
pub use stats::ScanStats;
