use crate::{
    catalog::{
        query::SearchQuery,
        response::{ResultSet, SearchResponse},
        Catalog, FetchError,
    },
    config::CatalogConfig,
    error::Error,
    utils::any::Any,
};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use url::Url;

pub struct CatalogClient {
    http: ReqwestClient,
    search_url: Url,
}

impl CatalogClient {
    const USER_AGENT: &'static str = std::concat!(std::env!("CARGO_PKG_NAME"), "/", std::env!("CARGO_PKG_VERSION"));

    pub fn new(config: &CatalogConfig) -> Result<Self, Error> {
        let mut builder = ReqwestClient::builder().user_agent(Self::USER_AGENT);

        // NOTE: no timeout unless configured; a hung request leaves the finder loading
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Self {
            http: builder.build()?,
            search_url: config.search_url.clone(),
        }
        .ok()
    }
}

#[async_trait]
impl Catalog for CatalogClient {
    async fn search(&self, query: &SearchQuery) -> Result<ResultSet, FetchError> {
        let url = query.url(&self.search_url);

        tracing::info!(fetching_url = %url);

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            tracing::warn!(%status, title = query.title(), page = query.page());

            return FetchError::Http(status.as_u16()).err();
        }

        response.json::<SearchResponse>().await?.convert::<ResultSet>().ok()
    }
}
