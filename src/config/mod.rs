#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use crate::domain::model::{SourceKind, DEFAULT_LANGUAGES};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, StatsError};
use crate::utils::validation::{
    require_field, validate_at_least, validate_not_blank, validate_path, validate_range,
    validate_url,
};

/// HH 的 period 參數上限為 30 天
pub const MAX_PERIOD_DAYS: u32 = 30;
pub const MAX_PER_PAGE: u32 = 100;

pub fn default_languages() -> Vec<String> {
    DEFAULT_LANGUAGES.iter().map(|l| l.to_string()).collect()
}

pub fn default_sources() -> Vec<SourceKind> {
    vec![SourceKind::HeadHunter, SourceKind::SuperJob]
}

/// CLI 與 TOML 共用的設定檢查，在送出任何請求前執行
pub fn validate_settings<C: ConfigProvider + ?Sized>(config: &C) -> Result<()> {
    if config.languages().is_empty() {
        return Err(StatsError::ConfigValidationError {
            field: "languages".to_string(),
            message: "At least one language is required".to_string(),
        });
    }
    for language in config.languages() {
        validate_not_blank("languages", language)?;
    }

    if config.sources().is_empty() {
        return Err(StatsError::ConfigValidationError {
            field: "sources".to_string(),
            message: "At least one source is required".to_string(),
        });
    }

    let search = config.search();
    validate_range("period_days", search.period_days, 1..=MAX_PERIOD_DAYS)?;
    if let Some(max_pages) = search.max_pages {
        validate_at_least("max_pages", max_pages, 1)?;
    }

    let http = config.http();
    validate_at_least("retry_attempts", http.retry.attempts, 1)?;
    validate_not_blank("user_agent", &http.user_agent)?;

    if config.sources().contains(&SourceKind::HeadHunter) {
        let headhunter = config.headhunter();
        validate_url("headhunter.base_url", &headhunter.base_url)?;
        validate_range("headhunter.per_page", headhunter.per_page, 1..=MAX_PER_PAGE)?;
    }

    if config.sources().contains(&SourceKind::SuperJob) {
        let superjob = config.superjob();
        validate_url("superjob.base_url", &superjob.base_url)?;
        validate_range("superjob.per_page", superjob.per_page, 1..=MAX_PER_PAGE)?;
        let token = require_field("superjob.token", &superjob.token)?;
        validate_not_blank("superjob.token", token)?;
    }

    match config.output_path() {
        Some(path) => validate_path("output_path", path)?,
        None if !config.export_formats().is_empty() => {
            return Err(StatsError::MissingConfigError {
                field: "output_path".to_string(),
            });
        }
        None => {}
    }

    Ok(())
}
