use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{strip_tags, validate_email, validate_length, Validate};
use reqwest::Client;
use serde::Deserialize;

pub const CONTACT_PATH: &str = "/api/contact";
pub const DEFAULT_CONTACT_EMAIL: &str = "samuelrinconm@yahoo.com";

/// `#contactForm` 的欄位
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }

    /// 與後端相同的清理：移除 HTML 標籤與前後空白
    pub fn sanitized(&self) -> Self {
        Self {
            name: strip_tags(&self.name),
            email: self.email.trim().to_string(),
            message: strip_tags(&self.message),
        }
    }
}

impl Validate for ContactForm {
    fn validate(&self) -> Result<()> {
        validate_length("Name", &self.name, 2, 100)?;
        validate_email(&self.email)?;
        validate_length("Message", &self.message, 10, 2000)?;
        Ok(())
    }
}

/// `POST /api/contact` 的回應；FastAPI 的錯誤格式使用 `detail`
#[derive(Debug, Clone, Deserialize)]
pub struct ContactResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, alias = "detail")]
    pub message: Option<String>,
}

impl ContactResponse {
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some("success")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactOutcome {
    Sent,
    /// 後端有回應但不是 success
    Rejected { message: String },
    /// 傳輸或解析失敗，不對使用者揭露細節
    Failed,
}

pub struct ContactClient {
    base_url: String,
    client: Client,
}

impl ContactClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.api_base_url())
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), CONTACT_PATH)
    }

    async fn post(&self, form: &ContactForm) -> Result<ContactResponse> {
        let url = self.endpoint();
        tracing::debug!("Posting contact form to: {}", url);

        let params = [
            ("name", form.name.as_str()),
            ("email", form.email.as_str()),
            ("message", form.message.as_str()),
        ];
        let response = self.client.post(&url).form(&params).send().await?;
        tracing::debug!("Contact response status: {}", response.status());

        // 錯誤狀態碼也帶 JSON，交給 status 欄位判斷
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn submit(&self, form: &ContactForm) -> ContactOutcome {
        match self.post(form).await {
            Ok(response) if response.is_success() => {
                tracing::info!("✅ Contact form submitted");
                ContactOutcome::Sent
            }
            Ok(response) => {
                let message = response
                    .message
                    .unwrap_or_else(|| "Unable to send message".to_string());
                tracing::warn!("Contact form rejected: {}", message);
                ContactOutcome::Rejected { message }
            }
            Err(e) => {
                tracing::error!("❌ Contact form submission failed: {}", e);
                ContactOutcome::Failed
            }
        }
    }
}
