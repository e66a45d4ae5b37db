use crate::adapters::http::{build_client, get_json};
use crate::domain::model::{
    HttpSettings, Listing, RetryPolicy, SearchSettings, SourceKind, SuperJobListing,
    SuperJobSettings,
};
use crate::domain::ports::VacancySource;
use crate::utils::error::Result;
use crate::utils::validation::require_field;
use async_trait::async_trait;
use chrono::{Duration, Utc};
use reqwest::Client;
use serde::Deserialize;
use url::Url;

const APP_ID_HEADER: &str = "X-Api-App-Id";

#[derive(Debug, Deserialize)]
struct VacanciesPage {
    #[serde(default)]
    objects: Vec<serde_json::Value>,
    #[serde(default)]
    total: u64,
    #[serde(default)]
    more: bool,
}

fn parse_listing(item: serde_json::Value) -> Listing {
    let listing = serde_json::from_value::<SuperJobListing>(item).unwrap_or_else(|e| {
        tracing::debug!("Malformed SuperJob vacancy, salary ignored: {}", e);
        SuperJobListing::default()
    });
    Listing::SuperJob(listing)
}

pub struct SuperJobClient {
    client: Client,
    endpoint: Url,
    token: String,
    settings: SuperJobSettings,
    search: SearchSettings,
    retry: RetryPolicy,
}

impl SuperJobClient {
    pub fn new(
        settings: SuperJobSettings,
        search: SearchSettings,
        http: &HttpSettings,
    ) -> Result<Self> {
        let token = require_field("superjob.token", &settings.token)?.clone();
        let endpoint = Url::parse(&settings.base_url)?.join("2.0/vacancies/")?;
        Ok(Self {
            client: build_client(http)?,
            endpoint,
            token,
            settings,
            search,
            retry: http.retry,
        })
    }

    fn page_query(&self, language: &str, page: u32) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("t", self.settings.town.to_string()),
            ("catalogues", self.settings.catalogue.to_string()),
            ("keyword", format!("Программист {}", language)),
            ("count", self.settings.per_page.to_string()),
            ("page", page.to_string()),
        ];
        if self.search.period_days > 0 {
            let published_from = Utc::now() - Duration::days(i64::from(self.search.period_days));
            query.push(("date_published_from", published_from.timestamp().to_string()));
        }
        query
    }
}

#[async_trait]
impl VacancySource for SuperJobClient {
    fn kind(&self) -> SourceKind {
        SourceKind::SuperJob
    }

    async fn fetch_listings(&self, language: &str) -> Result<Vec<Listing>> {
        let headers = [(APP_ID_HEADER, self.token.as_str())];
        let mut listings = Vec::new();
        let mut page = 0u32;

        loop {
            let body: VacanciesPage = get_json(
                &self.client,
                SourceKind::SuperJob,
                &self.endpoint,
                &self.page_query(language, page),
                &headers,
                self.retry,
            )
            .await?;

            tracing::debug!(
                "SuperJob {}: page {}, {} objects, {} total, more={}",
                language,
                page + 1,
                body.objects.len(),
                body.total,
                body.more
            );
            listings.extend(body.objects.into_iter().map(parse_listing));

            page += 1;
            if !body.more {
                break;
            }
            if self.search.max_pages.is_some_and(|max| page >= max) {
                tracing::debug!("SuperJob {}: stopping at page limit {}", language, page);
                break;
            }
        }

        Ok(listings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::aggregate::aggregate;
    use crate::utils::error::StatsError;
    use httpmock::prelude::*;

    fn client_for(server: &MockServer, token: Option<&str>) -> Result<SuperJobClient> {
        client_with_search(server, token, SearchSettings::default())
    }

    fn client_with_search(
        server: &MockServer,
        token: Option<&str>,
        search: SearchSettings,
    ) -> Result<SuperJobClient> {
        let settings = SuperJobSettings {
            base_url: server.base_url(),
            token: token.map(str::to_string),
            ..SuperJobSettings::default()
        };
        let http = HttpSettings {
            retry: RetryPolicy {
                attempts: 1,
                delay: std::time::Duration::from_millis(1),
            },
            ..HttpSettings::default()
        };
        SuperJobClient::new(settings, search, &http)
    }

    #[tokio::test]
    async fn test_fetch_until_no_more() {
        let server = MockServer::start();
        let first = server.mock(|when, then| {
            when.method(GET)
                .path("/2.0/vacancies/")
                .query_param("page", "0")
                .query_param("t", "4")
                .query_param("catalogues", "48")
                .query_param("count", "100")
                .query_param_exists("date_published_from")
                .header("x-api-app-id", "v3.test");
            then.status(200).json_body(serde_json::json!({
                "total": 3,
                "more": true,
                "objects": [
                    {"payment_from": 100000, "payment_to": 200000, "currency": "rub", "town": {"title": "Москва"}},
                    {"payment_from": 0, "payment_to": 0, "currency": "rub", "town": {"title": "Москва"}}
                ]
            }));
        });
        let second = server.mock(|when, then| {
            when.method(GET)
                .path("/2.0/vacancies/")
                .query_param("page", "1")
                .header("x-api-app-id", "v3.test");
            then.status(200).json_body(serde_json::json!({
                "total": 3,
                "more": false,
                "objects": [
                    {"payment_from": 0, "payment_to": 100000, "currency": "rub"}
                ]
            }));
        });

        let client = client_for(&server, Some("v3.test")).unwrap();
        let listings = client.fetch_listings("Python").await.unwrap();

        first.assert();
        second.assert();
        assert_eq!(listings.len(), 3);

        let stats = aggregate(&listings);
        assert_eq!(stats.vacancies_found, 3);
        assert_eq!(stats.vacancies_processed, 2);
        assert_eq!(stats.average_salary, 115000);
    }

    #[tokio::test]
    async fn test_max_pages_stops_even_when_more() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/2.0/vacancies/");
            then.status(200).json_body(serde_json::json!({
                "total": 10000,
                "more": true,
                "objects": [
                    {"payment_from": 100000, "payment_to": 0, "currency": "rub"},
                    {"payment_from": 0, "payment_to": 0, "currency": "rub"}
                ]
            }));
        });

        let search = SearchSettings {
            period_days: 30,
            max_pages: Some(2),
        };
        let client = client_with_search(&server, Some("v3.test"), search).unwrap();
        let listings = client.fetch_listings("Go").await.unwrap();

        api_mock.assert_hits(2);
        assert_eq!(listings.len(), 4);
    }

    #[tokio::test]
    async fn test_foreign_currency_is_skipped() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/2.0/vacancies/");
            then.status(200).json_body(serde_json::json!({
                "total": 1,
                "more": false,
                "objects": [{"payment_from": 3000, "payment_to": 5000, "currency": "usd"}]
            }));
        });

        let client = client_for(&server, Some("v3.test")).unwrap();
        let stats = aggregate(&client.fetch_listings("Swift").await.unwrap());

        assert_eq!(stats.vacancies_found, 1);
        assert_eq!(stats.vacancies_processed, 0);
        assert_eq!(stats.average_salary, 0);
    }

    #[tokio::test]
    async fn test_invalid_token_is_fatal() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/2.0/vacancies/");
            then.status(403)
                .json_body(serde_json::json!({"error": {"code": 403, "message": "Invalid app_key"}}));
        });

        let client = client_for(&server, Some("wrong")).unwrap();
        let result = client.fetch_listings("Go").await;

        api_mock.assert_hits(1);
        assert!(matches!(
            result,
            Err(StatsError::HttpStatusError { status: 403, .. })
        ));
    }

    #[test]
    fn test_missing_token_is_rejected() {
        let server = MockServer::start();
        let result = client_for(&server, None);
        assert!(matches!(result, Err(StatsError::MissingConfigError { .. })));
    }
}
