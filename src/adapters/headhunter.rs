use crate::adapters::http::{build_client, get_json};
use crate::domain::model::{
    HeadHunterListing, HeadHunterSettings, HttpSettings, Listing, RetryPolicy, SearchSettings,
    SourceKind,
};
use crate::domain::ports::VacancySource;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

#[derive(Debug, Deserialize)]
struct VacanciesPage {
    #[serde(default)]
    items: Vec<serde_json::Value>,
    #[serde(default)]
    found: u64,
    #[serde(default)]
    pages: u32,
}

fn parse_listing(item: serde_json::Value) -> Listing {
    let listing = serde_json::from_value::<HeadHunterListing>(item).unwrap_or_else(|e| {
        tracing::debug!("Malformed HeadHunter vacancy, salary ignored: {}", e);
        HeadHunterListing::default()
    });
    Listing::HeadHunter(listing)
}

pub struct HeadHunterClient {
    client: Client,
    endpoint: Url,
    settings: HeadHunterSettings,
    search: SearchSettings,
    retry: RetryPolicy,
}

impl HeadHunterClient {
    pub fn new(
        settings: HeadHunterSettings,
        search: SearchSettings,
        http: &HttpSettings,
    ) -> Result<Self> {
        let endpoint = Url::parse(&settings.base_url)?.join("vacancies")?;
        Ok(Self {
            client: build_client(http)?,
            endpoint,
            settings,
            search,
            retry: http.retry,
        })
    }

    fn page_query(&self, language: &str, page: u32) -> Vec<(&'static str, String)> {
        vec![
            ("professional_role", self.settings.professional_role.to_string()),
            ("area", self.settings.area.to_string()),
            ("period", self.search.period_days.to_string()),
            ("text", format!("Программист {}", language)),
            ("per_page", self.settings.per_page.to_string()),
            ("page", page.to_string()),
        ]
    }
}

#[async_trait]
impl VacancySource for HeadHunterClient {
    fn kind(&self) -> SourceKind {
        SourceKind::HeadHunter
    }

    async fn fetch_listings(&self, language: &str) -> Result<Vec<Listing>> {
        let mut listings = Vec::new();
        let mut page = 0u32;

        loop {
            let body: VacanciesPage = get_json(
                &self.client,
                SourceKind::HeadHunter,
                &self.endpoint,
                &self.page_query(language, page),
                &[],
                self.retry,
            )
            .await?;

            tracing::debug!(
                "HeadHunter {}: page {}/{}, {} items, {} found",
                language,
                page + 1,
                body.pages,
                body.items.len(),
                body.found
            );
            listings.extend(body.items.into_iter().map(parse_listing));

            page += 1;
            if page >= body.pages {
                break;
            }
            if self.search.max_pages.is_some_and(|max| page >= max) {
                tracing::debug!("HeadHunter {}: stopping at page limit {}", language, page);
                break;
            }
        }

        Ok(listings)
    }
}
