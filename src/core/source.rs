use crate::core::fallback::fallback_data;
use crate::domain::model::{PortfolioData, ProjectsResponse, ResumeResponse};
use crate::domain::ports::{ConfigProvider, ContentSource};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

pub const PROJECTS_PATH: &str = "/api/projects";
pub const RESUME_PATH: &str = "/api/resume";

/// 從後端抓取 projects 與 resume；任一失敗即整批改用內建資料
pub struct HttpContentSource {
    base_url: String,
    client: Client,
}

impl HttpContentSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.api_base_url())
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path);
        tracing::debug!("Making API request to: {}", url);

        let response = self.client.get(&url).send().await?;
        tracing::debug!("API response status for {}: {}", path, response.status());

        // 非 2xx 一律視為失敗
        let body = response.error_for_status()?.text().await?;
        let parsed = serde_json::from_str(&body)?;
        Ok(parsed)
    }

    /// 兩個請求同時送出，兩者都完成後才回傳
    pub async fn fetch_network(&self) -> Result<PortfolioData> {
        let (projects, resume) = tokio::join!(
            self.fetch::<ProjectsResponse>(PROJECTS_PATH),
            self.fetch::<ResumeResponse>(RESUME_PATH)
        );
        Ok(PortfolioData::from_network(projects?, resume?))
    }
}

#[async_trait]
impl ContentSource for HttpContentSource {
    async fn load(&self) -> PortfolioData {
        match self.fetch_network().await {
            Ok(data) => {
                tracing::info!(
                    "📡 Loaded {} projects, {} jobs, {} schools from {}",
                    data.projects.len(),
                    data.experience.len(),
                    data.education.len(),
                    self.base_url
                );
                data
            }
            Err(e) => {
                tracing::warn!("⚠️ Error loading portfolio data: {} (Category: {:?})", e, e.category());
                tracing::warn!("Using built-in fallback content");
                fallback_data()
            }
        }
    }
}

/// 離線模式：永遠使用內建資料
#[derive(Debug, Clone, Default)]
pub struct StaticContentSource;

#[async_trait]
impl ContentSource for StaticContentSource {
    async fn load(&self) -> PortfolioData {
        tracing::info!("Offline mode, using built-in content");
        fallback_data()
    }
}
