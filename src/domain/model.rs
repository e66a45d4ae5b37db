use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// 職缺來源 (求職網站 API)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[cfg_attr(feature = "cli", value(name = "hh"))]
    #[serde(alias = "hh")]
    HeadHunter,
    #[cfg_attr(feature = "cli", value(name = "sj"))]
    #[serde(alias = "sj")]
    SuperJob,
}

impl SourceKind {
    pub fn title(&self) -> &'static str {
        match self {
            SourceKind::HeadHunter => "HeadHunter Moscow",
            SourceKind::SuperJob => "SuperJob Moscow",
        }
    }

    /// 匯出檔名前綴
    pub fn slug(&self) -> &'static str {
        match self {
            SourceKind::HeadHunter => "hh",
            SourceKind::SuperJob => "sj",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::HeadHunter => write!(f, "HeadHunter"),
            SourceKind::SuperJob => write!(f, "SuperJob"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HeadHunterSalary {
    #[serde(default)]
    pub from: Option<f64>,
    #[serde(default)]
    pub to: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HeadHunterListing {
    #[serde(default)]
    pub salary: Option<HeadHunterSalary>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Town {
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SuperJobListing {
    #[serde(default)]
    pub payment_from: Option<f64>,
    #[serde(default)]
    pub payment_to: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub town: Option<Town>,
}

/// 單筆職缺，依來源區分欄位配置
#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    HeadHunter(HeadHunterListing),
    SuperJob(SuperJobListing),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageStats {
    pub vacancies_found: u64,
    pub vacancies_processed: u64,
    pub average_salary: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageRow {
    pub language: String,
    #[serde(flatten)]
    pub stats: LanguageStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryStatistics {
    pub source: SourceKind,
    pub title: String,
    pub generated_at: DateTime<Utc>,
    pub languages: Vec<LanguageRow>,
}

impl SalaryStatistics {
    pub fn new(source: SourceKind) -> Self {
        Self {
            source,
            title: source.title().to_string(),
            generated_at: Utc::now(),
            languages: Vec::new(),
        }
    }

    pub fn push(&mut self, language: impl Into<String>, stats: LanguageStats) {
        self.languages.push(LanguageRow {
            language: language.into(),
            stats,
        });
    }

    pub fn get(&self, language: &str) -> Option<&LanguageStats> {
        self.languages
            .iter()
            .find(|row| row.language == language)
            .map(|row| &row.stats)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 3,
            delay: Duration::from_millis(1000),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpSettings {
    pub retry: RetryPolicy,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            retry: RetryPolicy::default(),
            timeout: Duration::from_secs(30),
            user_agent: format!("salary-stats/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

pub const DEFAULT_HH_BASE_URL: &str = "https://api.hh.ru";
pub const DEFAULT_SJ_BASE_URL: &str = "https://api.superjob.ru";

#[derive(Debug, Clone, PartialEq)]
pub struct HeadHunterSettings {
    pub base_url: String,
    /// 1 = 莫斯科
    pub area: u32,
    /// 96 = 「程式設計師、開發者」
    pub professional_role: u32,
    pub per_page: u32,
}

impl Default for HeadHunterSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_HH_BASE_URL.to_string(),
            area: 1,
            professional_role: 96,
            per_page: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SuperJobSettings {
    pub base_url: String,
    pub token: Option<String>,
    /// 4 = 莫斯科
    pub town: u32,
    /// 48 = 「開發、程式設計」
    pub catalogue: u32,
    pub per_page: u32,
}

impl Default for SuperJobSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SJ_BASE_URL.to_string(),
            token: None,
            town: 4,
            catalogue: 48,
            per_page: 100,
        }
    }
}

/// 搜尋期間 (天) 與分頁上限
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSettings {
    pub period_days: u32,
    pub max_pages: Option<u32>,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            period_days: 30,
            max_pages: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

pub const DEFAULT_LANGUAGES: [&str; 14] = [
    "TypeScript",
    "Swift",
    "Scala",
    "Objective-C",
    "Shell",
    "Go",
    "C",
    "C#",
    "C++",
    "PHP",
    "Ruby",
    "Python",
    "Java",
    "JavaScript",
];
