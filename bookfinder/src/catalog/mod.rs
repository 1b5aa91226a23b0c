pub mod client;
pub mod covers;
pub mod query;
pub mod response;

use crate::catalog::{query::SearchQuery, response::ResultSet};
use async_trait::async_trait;
use derive_more::Display;
use reqwest::Error as ReqwestError;

#[derive(Clone, Debug, Display, Eq, PartialEq)]
pub enum FetchError {
    #[display(fmt = "HTTP {_0}")]
    Http(u16),

    #[display(fmt = "{_0}")]
    Network(String),

    #[display(fmt = "{_0}")]
    Decode(String),
}

impl FetchError {
    const GENERIC_MESSAGE: &'static str = "Failed to fetch";

    pub fn network(message: String) -> Self {
        if message.trim().is_empty() {
            Self::Network(Self::GENERIC_MESSAGE.into())
        } else {
            Self::Network(message)
        }
    }
}

impl From<ReqwestError> for FetchError {
    fn from(reqwest_err: ReqwestError) -> Self {
        if let Some(status) = reqwest_err.status() {
            Self::Http(status.as_u16())
        } else if reqwest_err.is_decode() {
            Self::Decode(reqwest_err.to_string())
        } else {
            Self::network(reqwest_err.to_string())
        }
    }
}

#[async_trait]
pub trait Catalog: Send + Sync {
    async fn search(&self, query: &SearchQuery) -> Result<ResultSet, FetchError>;
}


#[cfg(test)]
mod tests {
    use super::FetchError;

    #[test]
    fn http_failures_render_their_status() {
        assert_eq!(FetchError::Http(500).to_string(), "HTTP 500");
    }

    #[test]
    fn blank_network_messages_fall_back_to_generic_text() {
        assert_eq!(FetchError::network("  ".into()).to_string(), "Failed to fetch");
        assert_eq!(
            FetchError::network("connection refused".into()).to_string(),
            "connection refused"
        );
    }
}
