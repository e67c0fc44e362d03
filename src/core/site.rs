use crate::core::contact::ContactClient;
use crate::core::controller::PageController;
use crate::core::source::{HttpContentSource, StaticContentSource};
use crate::core::Storage;
use crate::domain::ports::{ConfigProvider, ContentSource};
use crate::page::{HostPage, PageView};
use crate::utils::error::Result;

pub const OUTPUT_FILE: &str = "index.html";

/// 執行一次完整的頁面建置：載入 → 渲染 → 寫出
pub struct SiteEngine<S: Storage> {
    storage: S,
    output_path: String,
}

impl<S: Storage> SiteEngine<S> {
    pub fn new(storage: S, output_path: impl Into<String>) -> Self {
        Self {
            storage,
            output_path: output_path.into(),
        }
    }

    pub async fn run<C: ContentSource>(&self, controller: &mut PageController<C>) -> Result<String> {
        tracing::info!("Starting page build...");

        let origin = controller.on_ready().await?;
        tracing::info!("Content loaded ({:?})", origin);

        let page = controller.compose()?;
        tracing::debug!("Writing {} ({} bytes) to storage", OUTPUT_FILE, page.len());
        self.storage.write_file(OUTPUT_FILE, page.as_bytes()).await?;

        let output_path = format!("{}/{}", self.output_path.trim_end_matches('/'), OUTPUT_FILE);
        tracing::info!("Output saved to: {}", output_path);
        Ok(output_path)
    }
}

/// 依配置組出 host page 與內容來源，建置一次頁面
pub async fn render_site<C: ConfigProvider, S: Storage>(config: &C, storage: S) -> Result<String> {
    let host = match config.host_page() {
        Some(path) => {
            tracing::info!("📄 Using host page: {}", path);
            HostPage::from_file(path)?
        }
        None => HostPage::builtin()?,
    };

    let view = PageView::new(host);
    let contact = ContactClient::from_config(config);
    let engine = SiteEngine::new(storage, config.output_path());

    if config.offline() {
        tracing::info!("📴 Offline mode, rendering built-in content");
        let mut controller = PageController::new(StaticContentSource, contact, view)
            .with_contact_email(config.contact_email());
        engine.run(&mut controller).await
    } else {
        tracing::info!("🌐 Loading content from {}", config.api_base_url());
        let mut controller =
            PageController::new(HttpContentSource::from_config(config), contact, view)
                .with_contact_email(config.contact_email());
        engine.run(&mut controller).await
    }
}
