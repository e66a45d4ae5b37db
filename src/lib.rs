pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::{HeadHunterClient, LocalStorage, SuperJobClient};
pub use app::{run_sources, RunSummary, SourceFailure};
pub use crate::core::{
    aggregate::{aggregate, SalaryAggregator},
    etl::StatsEngine,
    export::StatsExporter,
    salary::predict_rub_salary,
    table::render_table,
};
pub use domain::model::{LanguageStats, Listing, SalaryStatistics, SourceKind};
pub use utils::error::{ErrorSeverity, Result, StatsError};
