use crate::domain::model::{HttpSettings, RetryPolicy, SourceKind};
use crate::utils::error::{Result, StatsError};
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

pub fn build_client(settings: &HttpSettings) -> Result<Client> {
    let client = Client::builder()
        .timeout(settings.timeout)
        .user_agent(settings.user_agent.as_str())
        .build()?;
    Ok(client)
}

async fn send_once<T: DeserializeOwned>(
    client: &Client,
    source: SourceKind,
    url: &Url,
    query: &[(&str, String)],
    headers: &[(&str, &str)],
) -> Result<T> {
    let mut request = client.get(url.clone()).query(query);
    for (name, value) in headers {
        request = request.header(*name, *value);
    }

    let response = request.send().await?;
    tracing::debug!("{} response status: {}", source, response.status());

    let status = response.status();
    if !status.is_success() {
        return Err(StatsError::HttpStatusError {
            source_name: source.to_string(),
            status: status.as_u16(),
            url: response.url().to_string(),
        });
    }

    Ok(response.json::<T>().await?)
}

/// GET 並解析 JSON；網路錯誤、429 與 5xx 依 retry 設定重試，其他狀態碼直接失敗
pub async fn get_json<T: DeserializeOwned>(
    client: &Client,
    source: SourceKind,
    url: &Url,
    query: &[(&str, String)],
    headers: &[(&str, &str)],
    retry: RetryPolicy,
) -> Result<T> {
    let attempts = retry.attempts.max(1);
    let mut attempt = 1;

    loop {
        tracing::debug!("Making {} request to: {} (attempt {})", source, url, attempt);
        match send_once(client, source, url, query, headers).await {
            Ok(body) => return Ok(body),
            Err(e) if e.is_retryable() && attempt < attempts => {
                tracing::warn!(
                    "⚠️ {} request failed (attempt {}/{}): {}; retrying in {:?}",
                    source,
                    attempt,
                    attempts,
                    e,
                    retry.delay
                );
                tokio::time::sleep(retry.delay).await;
                attempt += 1;
            }
            Err(e) if e.is_retryable() => {
                return Err(StatsError::RetryExhaustedError {
                    url: url.to_string(),
                    attempts,
                    last_error: e.to_string(),
                });
            }
            Err(e) => return Err(e),
        }
    }
}
