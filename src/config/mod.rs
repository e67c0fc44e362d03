pub mod cli;
pub mod toml_config;

use crate::core::contact::DEFAULT_CONTACT_EMAIL;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_url, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "portfolio-content"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Render the portfolio page sections from the backend API")
)]
pub struct CliConfig {
    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_API_BASE_URL))]
    pub api_base_url: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = "./dist"))]
    pub output_path: String,

    #[cfg_attr(feature = "cli", arg(long, help = "Host page markup (defaults to the built-in page)"))]
    pub host_page: Option<String>,

    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_CONTACT_EMAIL))]
    pub contact_email: String,

    #[cfg_attr(feature = "cli", arg(long, help = "Skip the backend and render the built-in content"))]
    pub offline: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn host_page(&self) -> Option<&str> {
        self.host_page.as_deref()
    }

    fn contact_email(&self) -> &str {
        &self.contact_email
    }

    fn offline(&self) -> bool {
        self.offline
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_base_url", &self.api_base_url)?;
        validate_path("output_path", &self.output_path)?;
        if let Some(host_page) = &self.host_page {
            validate_path("host_page", host_page)?;
        }
        Ok(())
    }
}
