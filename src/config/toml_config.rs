use crate::core::contact::DEFAULT_CONTACT_EMAIL;
use crate::core::ConfigProvider;
use crate::utils::error::{PortfolioError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub api: ApiConfig,
    pub render: RenderConfig,
    pub contact: Option<ContactConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSection {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    pub output_path: String,
    pub host_page: Option<String>,
    pub offline: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub format: Option<LogFormat>,
    pub verbose: Option<bool>,
}

impl SiteConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PortfolioError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| PortfolioError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PORTFOLIO_API_URL})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        let re = Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid");

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn log_format(&self) -> LogFormat {
        self.logging
            .as_ref()
            .and_then(|l| l.format)
            .unwrap_or_default()
    }

    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }
}

impl ConfigProvider for SiteConfig {
    fn api_base_url(&self) -> &str {
        &self.api.base_url
    }

    fn output_path(&self) -> &str {
        &self.render.output_path
    }

    fn host_page(&self) -> Option<&str> {
        self.render.host_page.as_deref()
    }

    fn contact_email(&self) -> &str {
        self.contact
            .as_ref()
            .map(|c| c.email.as_str())
            .unwrap_or(DEFAULT_CONTACT_EMAIL)
    }

    fn offline(&self) -> bool {
        self.render.offline.unwrap_or(false)
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("site.name", &self.site.name)?;
        // 環境變數未設定時 ${...} 會原樣留下
        if self.api.base_url.contains("${") {
            return Err(PortfolioError::MissingConfigError {
                field: "api.base_url".to_string(),
            });
        }
        validate_url("api.base_url", &self.api.base_url)?;
        validate_path("render.output_path", &self.render.output_path)?;
        if let Some(host_page) = &self.render.host_page {
            validate_path("render.host_page", host_page)?;
        }
        if let Some(contact) = &self.contact {
            crate::utils::validation::validate_email(&contact.email).map_err(|_| {
                PortfolioError::InvalidConfigValueError {
                    field: "contact.email".to_string(),
                    value: contact.email.clone(),
                    reason: "Not a valid email address".to_string(),
                }
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[site]
name = "portfolio"

[api]
base_url = "https://www.samuelrincon.com"

[render]
output_path = "./dist"
offline = true

[logging]
format = "json"
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.site.name, "portfolio");
        assert_eq!(config.api_base_url(), "https://www.samuelrincon.com");
        assert!(config.offline());
        assert!(config.host_page().is_none());
        assert_eq!(config.contact_email(), DEFAULT_CONTACT_EMAIL);
        assert_eq!(config.log_format(), LogFormat::Json);
        assert!(!config.verbose());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PORTFOLIO_TEST_API_URL", "https://test.api.com");

        let toml_content = r#"
[site]
name = "test"

[api]
base_url = "${PORTFOLIO_TEST_API_URL}"

[render]
output_path = "./output"
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.api.base_url, "https://test.api.com");

        std::env::remove_var("PORTFOLIO_TEST_API_URL");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[site]
name = "test"

[api]
base_url = "invalid-url"

[render]
output_path = "./output"

[contact]
email = "me@example.com"
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.contact_email(), "me@example.com");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_a_config_error() {
        let err = SiteConfig::from_toml_str("[site\nname = ").unwrap_err();
        assert!(matches!(err, PortfolioError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[site]
name = "file-test"

[api]
base_url = "http://localhost:8000"

[render]
output_path = "./output"
host_page = "templates/index.html"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = SiteConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.site.name, "file-test");
        assert_eq!(config.host_page(), Some("templates/index.html"));
    }

    #[test]
    fn test_bundled_config_parses() {
        let config = SiteConfig::from_toml_str(include_str!("../../portfolio.toml")).unwrap();
        assert_eq!(config.site.name, "portfolio");
        assert_eq!(config.output_path(), "./dist");
        assert_eq!(config.log_format(), LogFormat::Compact);
        assert!(!config.offline());
    }

    #[test]
    fn test_unresolved_env_var_is_missing_config() {
        let toml_content = r#"
[site]
name = "test"

[api]
base_url = "${PORTFOLIO_TEST_UNSET_VAR}"

[render]
output_path = "./output"
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.api.base_url, "${PORTFOLIO_TEST_UNSET_VAR}");
        assert!(matches!(
            config.validate(),
            Err(PortfolioError::MissingConfigError { .. })
        ));
    }
}
