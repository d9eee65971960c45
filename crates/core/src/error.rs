use thiserror::Error;

use crate::config::ConfigError;
use crate::effects::ProviderError;
use crate::filter::FilterError;

#[derive(Debug, Error)]
pub enum FolioError {
    #[error("config: {0}")]
    Config(#[from] ConfigError),
    #[error("filter: {0}")]
    Filter(#[from] FilterError),
    #[error("effect provider: {0}")]
    Provider(#[from] ProviderError),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}
