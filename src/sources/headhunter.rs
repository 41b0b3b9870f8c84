use async_trait::async_trait;
use serde::Deserialize;

use crate::error::AppError;
use crate::models::raw::RawVacancy;
use crate::sources::VacancySource;

/// The API expects a recognizable User-Agent; anonymous requests are
/// throttled aggressively.
const USER_AGENT: &str = "HH-User-Agent";

/// Client for the HeadHunter vacancy search API (api.hh.ru and its
/// regional mirrors).
pub struct HeadHunter {
    client: reqwest::Client,
    base_url: String,
    per_page: u32,
}

#[derive(Debug, Default, Deserialize)]
struct SearchPage {
    #[serde(default)]
    items: Vec<RawVacancy>,
}

impl HeadHunter {
    pub fn new(base_url: &str, per_page: u32) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            per_page,
        })
    }

    async fn fetch_page(&self, keyword: &str, page: u32) -> Result<SearchPage, AppError> {
        let url = format!("{}/vacancies", self.base_url);
        let resp = self
            .client
            .get(&url)
            .query(&[
                ("text", keyword),
                ("page", &page.to_string()),
                ("per_page", &self.per_page.to_string()),
                ("only_with_salary", "true"),
            ])
            .send()
            .await
            .map_err(|e| AppError::Internal(format!("HeadHunter request failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(AppError::Internal(format!(
                "HeadHunter returned {}",
                resp.status()
            )));
        }

        resp.json()
            .await
            .map_err(|e| AppError::Internal(format!("Failed to parse response: {e}")))
    }
}

#[async_trait]
impl VacancySource for HeadHunter {
    fn name(&self) -> &str {
        "headhunter"
    }

    async fn fetch(&self, keyword: &str, pages: u32) -> Vec<RawVacancy> {
        let mut collected = Vec::new();

        for page in 0..pages {
            match self.fetch_page(keyword, page).await {
                Ok(search_page) => {
                    if search_page.items.is_empty() {
                        // Past the last result page
                        break;
                    }
                    collected.extend(search_page.items);
                }
                Err(e) => {
                    tracing::warn!("Fetch of page {page} failed, returning what we have: {e}");
                    break;
                }
            }
        }

        tracing::info!(
            "Fetched {} raw vacancies for '{keyword}' from {}",
            collected.len(),
            self.name()
        );
        collected
    }
}
