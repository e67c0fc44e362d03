use crate::page::ElementId;
use crate::utils::error::{PortfolioError, Result};
use regex::Regex;
use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

const BUILTIN_HOST_PAGE: &str = include_str!("../../assets/index.html");

fn id_attribute_regex() -> &'static Regex {
    static ID_ATTR: OnceLock<Regex> = OnceLock::new();
    ID_ATTR.get_or_init(|| {
        Regex::new(r#"\sid\s*=\s*["']([^"']+)["']"#).expect("id attribute pattern is valid")
    })
}

/// 已驗證過 DOM 契約的 host page markup
#[derive(Debug, Clone)]
pub struct HostPage {
    markup: String,
    ids: HashSet<String>,
}

impl HostPage {
    /// 綁定 markup；缺少任何必要元素即失敗
    pub fn bind(markup: impl Into<String>) -> Result<Self> {
        let markup = markup.into();
        let ids: HashSet<String> = id_attribute_regex()
            .captures_iter(&markup)
            .map(|caps| caps[1].to_string())
            .collect();

        for element in ElementId::ALL {
            if !ids.contains(element.as_str()) {
                tracing::error!("❌ Host page is missing #{}", element);
                return Err(PortfolioError::MissingElementError {
                    id: element.as_str().to_string(),
                });
            }
        }

        tracing::debug!("Host page bound with {} element ids", ids.len());
        Ok(Self { markup, ids })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let markup = std::fs::read_to_string(&path).map_err(PortfolioError::IoError)?;
        Self::bind(markup)
    }

    pub fn builtin() -> Result<Self> {
        Self::bind(BUILTIN_HOST_PAGE)
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn has_id(&self, id: &str) -> bool {
        self.ids.contains(id)
    }
}
