pub mod contact;
pub mod controller;
pub mod fallback;
pub mod site;
pub mod source;
pub mod typing;

pub use crate::domain::model::{DataOrigin, PortfolioData};
pub use crate::domain::ports::{ConfigProvider, ContentSource, Storage};
pub use crate::utils::error::Result;
