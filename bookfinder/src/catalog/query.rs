use crate::utils::any::Any;
use serde::Serialize;
use url::Url;

#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct SearchQuery {
    title: String,
    page: u32,
}

impl SearchQuery {
    const TITLE_PARAM: &'static str = "title";
    const PAGE_PARAM: &'static str = "page";

    pub fn new(term: &str, page: u32) -> Option<Self> {
        let title = term.trim();

        if title.is_empty() {
            return None;
        }

        Self {
            title: title.to_owned(),
            page: page.max(1),
        }
        .some()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn url(&self, search_url: &Url) -> Url {
        let mut url = search_url.clone();

        url.query_pairs_mut()
            .append_pair(Self::TITLE_PARAM, &self.title)
            .append_pair(Self::PAGE_PARAM, &self.page.to_string());

        url
    }
}
