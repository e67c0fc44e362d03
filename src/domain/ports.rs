use crate::domain::model::PortfolioData;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn output_path(&self) -> &str;
    /// 未設定時使用內建的 host page
    fn host_page(&self) -> Option<&str>;
    fn contact_email(&self) -> &str;
    fn offline(&self) -> bool;
}

/// 頁面內容來源。`load` 永遠回傳完整可渲染的資料，失敗在內部處理。
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn load(&self) -> PortfolioData;
}
