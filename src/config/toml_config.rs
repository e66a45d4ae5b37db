use crate::config::{default_languages, default_sources, validate_settings};
use crate::domain::model::{
    ExportFormat, HeadHunterSettings, HttpSettings, RetryPolicy, SearchSettings, SourceKind,
    SuperJobSettings, DEFAULT_HH_BASE_URL, DEFAULT_SJ_BASE_URL,
};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, StatsError};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub search: SearchSection,
    #[serde(default)]
    pub sources: SourcesSection,
    #[serde(default)]
    pub http: HttpSection,
    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSection {
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
    pub period_days: Option<u32>,
    pub max_pages: Option<u32>,
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            languages: default_languages(),
            period_days: None,
            max_pages: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcesSection {
    #[serde(default = "default_sources")]
    pub enabled: Vec<SourceKind>,
    pub headhunter: Option<HeadHunterSection>,
    pub superjob: Option<SuperJobSection>,
}

impl Default for SourcesSection {
    fn default() -> Self {
        Self {
            enabled: default_sources(),
            headhunter: None,
            superjob: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeadHunterSection {
    pub base_url: Option<String>,
    pub area: Option<u32>,
    pub professional_role: Option<u32>,
    pub per_page: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SuperJobSection {
    pub base_url: Option<String>,
    pub token: Option<String>,
    pub town: Option<u32>,
    pub catalogue: Option<u32>,
    pub per_page: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HttpSection {
    pub retry_attempts: Option<u32>,
    pub retry_delay_ms: Option<u64>,
    pub timeout_seconds: Option<u64>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSection {
    pub path: Option<String>,
    #[serde(default)]
    pub formats: Vec<ExportFormat>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(StatsError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| StatsError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SJ_TOKEN})；找不到的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| StatsError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for TomlConfig {
    fn languages(&self) -> &[String] {
        &self.search.languages
    }

    fn sources(&self) -> &[SourceKind] {
        &self.sources.enabled
    }

    fn search(&self) -> SearchSettings {
        let defaults = SearchSettings::default();
        SearchSettings {
            period_days: self.search.period_days.unwrap_or(defaults.period_days),
            max_pages: self.search.max_pages,
        }
    }

    fn http(&self) -> HttpSettings {
        let defaults = HttpSettings::default();
        HttpSettings {
            retry: RetryPolicy {
                attempts: self.http.retry_attempts.unwrap_or(defaults.retry.attempts),
                delay: self
                    .http
                    .retry_delay_ms
                    .map(Duration::from_millis)
                    .unwrap_or(defaults.retry.delay),
            },
            timeout: self
                .http
                .timeout_seconds
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            user_agent: self.http.user_agent.clone().unwrap_or(defaults.user_agent),
        }
    }

    fn headhunter(&self) -> HeadHunterSettings {
        let defaults = HeadHunterSettings::default();
        let section = self.sources.headhunter.clone().unwrap_or_default();
        HeadHunterSettings {
            base_url: section
                .base_url
                .unwrap_or_else(|| DEFAULT_HH_BASE_URL.to_string()),
            area: section.area.unwrap_or(defaults.area),
            professional_role: section
                .professional_role
                .unwrap_or(defaults.professional_role),
            per_page: section.per_page.unwrap_or(defaults.per_page),
        }
    }

    fn superjob(&self) -> SuperJobSettings {
        let defaults = SuperJobSettings::default();
        let section = self.sources.superjob.clone().unwrap_or_default();
        SuperJobSettings {
            base_url: section
                .base_url
                .unwrap_or_else(|| DEFAULT_SJ_BASE_URL.to_string()),
            // 未展開的 ${VAR} 視為沒有設定
            token: section
                .token
                .filter(|token| !token.trim().is_empty() && !token.contains("${")),
            town: section.town.unwrap_or(defaults.town),
            catalogue: section.catalogue.unwrap_or(defaults.catalogue),
            per_page: section.per_page.unwrap_or(defaults.per_page),
        }
    }

    fn output_path(&self) -> Option<&str> {
        self.output.path.as_deref()
    }

    fn export_formats(&self) -> &[ExportFormat] {
        &self.output.formats
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_settings(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[search]
languages = ["Rust", "Go"]
period_days = 14
max_pages = 3

[sources]
enabled = ["hh", "sj"]

[sources.headhunter]
base_url = "http://localhost:9000"
area = 2

[sources.superjob]
token = "v3.static"
town = 14

[http]
retry_attempts = 5
retry_delay_ms = 250

[output]
path = "./reports"
formats = ["csv", "json"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.languages(), &["Rust", "Go"]);
        assert_eq!(config.search().period_days, 14);
        assert_eq!(config.search().max_pages, Some(3));
        assert_eq!(config.headhunter().base_url, "http://localhost:9000");
        assert_eq!(config.headhunter().area, 2);
        assert_eq!(config.headhunter().professional_role, 96);
        assert_eq!(config.superjob().token.as_deref(), Some("v3.static"));
        assert_eq!(config.superjob().town, 14);
        assert_eq!(config.superjob().catalogue, 48);
        assert_eq!(config.http().retry.attempts, 5);
        assert_eq!(config.http().retry.delay, Duration::from_millis(250));
        assert_eq!(config.output_path(), Some("./reports"));
        assert_eq!(
            config.export_formats(),
            &[ExportFormat::Csv, ExportFormat::Json]
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.languages().len(), 14);
        assert_eq!(
            config.sources(),
            &[SourceKind::HeadHunter, SourceKind::SuperJob]
        );
        assert_eq!(config.search().period_days, 30);
        assert_eq!(config.superjob().base_url, "https://api.superjob.ru");
        assert!(config.superjob().token.is_none());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SALARY_STATS_TEST_TOKEN", "v3.from-env");
        let toml_content = r#"
[sources]
enabled = ["sj"]

[sources.superjob]
token = "${SALARY_STATS_TEST_TOKEN}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.superjob().token.as_deref(), Some("v3.from-env"));
        std::env::remove_var("SALARY_STATS_TEST_TOKEN");
    }

    #[test]
    fn test_unresolved_token_counts_as_missing() {
        let toml_content = r#"
[sources]
enabled = ["sj"]

[sources.superjob]
token = "${SALARY_STATS_UNSET_VARIABLE}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.superjob().token.is_none());
        assert!(matches!(
            config.validate(),
            Err(StatsError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[search]
languages = ["Kotlin"]

[sources]
enabled = ["headhunter"]
"#
        )
        .unwrap();

        let config = TomlConfig::from_file(file.path()).unwrap();
        assert_eq!(config.languages(), &["Kotlin"]);
        assert_eq!(config.sources(), &[SourceKind::HeadHunter]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_toml() {
        let result = TomlConfig::from_toml_str("[search\nlanguages = ");
        assert!(matches!(
            result,
            Err(StatsError::ConfigValidationError { .. })
        ));
    }
}
