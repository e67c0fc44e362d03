pub mod config;
pub mod core;
pub mod domain;
pub mod page;
pub mod render;
pub mod utils;

pub use config::{cli::LocalStorage, toml_config::SiteConfig, CliConfig};

pub use core::{
    contact::ContactClient,
    controller::PageController,
    site::SiteEngine,
    source::{HttpContentSource, StaticContentSource},
};
pub use page::{HostPage, PageView};
pub use utils::error::{PortfolioError, Result};
