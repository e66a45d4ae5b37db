use crate::config::{default_languages, default_sources, validate_settings};
use crate::domain::model::{
    ExportFormat, HeadHunterSettings, HttpSettings, RetryPolicy, SearchSettings, SourceKind,
    SuperJobSettings, DEFAULT_HH_BASE_URL, DEFAULT_SJ_BASE_URL,
};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "salary-stats")]
#[command(about = "Average programmer salaries per language from HeadHunter and SuperJob")]
pub struct CliConfig {
    /// Programming languages to search for
    #[arg(long, value_delimiter = ',', default_values_t = default_languages())]
    pub languages: Vec<String>,

    /// Job boards to query
    #[arg(long, value_enum, value_delimiter = ',', default_values_t = default_sources())]
    pub sources: Vec<SourceKind>,

    /// Only vacancies published within this many days
    #[arg(long, default_value = "30")]
    pub period: u32,

    /// Stop paginating after this many pages per language
    #[arg(long)]
    pub max_pages: Option<u32>,

    #[arg(long, default_value = DEFAULT_HH_BASE_URL)]
    pub hh_base_url: String,

    #[arg(long, default_value = DEFAULT_SJ_BASE_URL)]
    pub sj_base_url: String,

    /// SuperJob application secret key
    #[arg(long, env = "SJ_TOKEN", hide_env_values = true)]
    pub sj_token: Option<String>,

    #[arg(long, default_value = "3")]
    pub retry_attempts: u32,

    #[arg(long, default_value = "1000")]
    pub retry_delay_ms: u64,

    #[arg(long, default_value = "30")]
    pub timeout_secs: u64,

    /// Directory for exported statistics
    #[arg(long)]
    pub output_path: Option<String>,

    /// Export formats written to --output-path
    #[arg(long = "export", value_enum, value_delimiter = ',')]
    pub export_formats: Vec<ExportFormat>,

    /// TOML configuration file; replaces the search and source options above
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl ConfigProvider for CliConfig {
    fn languages(&self) -> &[String] {
        &self.languages
    }

    fn sources(&self) -> &[SourceKind] {
        &self.sources
    }

    fn search(&self) -> SearchSettings {
        SearchSettings {
            period_days: self.period,
            max_pages: self.max_pages,
        }
    }

    fn http(&self) -> HttpSettings {
        HttpSettings {
            retry: RetryPolicy {
                attempts: self.retry_attempts,
                delay: Duration::from_millis(self.retry_delay_ms),
            },
            timeout: Duration::from_secs(self.timeout_secs),
            ..HttpSettings::default()
        }
    }

    fn headhunter(&self) -> HeadHunterSettings {
        HeadHunterSettings {
            base_url: self.hh_base_url.clone(),
            ..HeadHunterSettings::default()
        }
    }

    fn superjob(&self) -> SuperJobSettings {
        SuperJobSettings {
            base_url: self.sj_base_url.clone(),
            token: self.sj_token.clone(),
            ..SuperJobSettings::default()
        }
    }

    fn output_path(&self) -> Option<&str> {
        self.output_path.as_deref()
    }

    fn export_formats(&self) -> &[ExportFormat] {
        &self.export_formats
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_settings(self)
    }
}
