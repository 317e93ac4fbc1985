pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod nav;

pub use config::{AppConfig, EasingType, HeaderConfig, ScrollConfig};
pub use content::Portfolio;
pub use error::{Error, Result};
