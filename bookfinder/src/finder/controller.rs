use crate::{
    catalog::{query::SearchQuery, response::ResultSet},
    finder::message::FetchCompleted,
    utils::any::Any,
};

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Error(String),
}

#[derive(Debug, Eq, PartialEq)]
pub struct FetchRequest {
    pub generation: u64,
    pub query: SearchQuery,
}

// NOTE: performs no I/O; operations that start a fetch cycle return the request to issue and the outcome comes
// back through complete()
pub struct SearchController {
    search_input: String,
    debounced_term: String,
    page: u32,
    results: ResultSet,
    status: RequestStatus,
    generation: u64,
    mounted: bool,
    evaluated: Option<(String, u32)>,
}

impl SearchController {
    pub const FIRST_PAGE: u32 = 1;
    pub const EMPTY_SUMMARY: &'static str = "No results yet.";

    pub fn new(initial_term: String, initial_page: u32) -> Self {
        Self {
            search_input: initial_term.clone(),
            debounced_term: initial_term,
            page: initial_page.max(Self::FIRST_PAGE),
            results: ResultSet::default(),
            status: RequestStatus::Idle,
            generation: 0,
            mounted: false,
            evaluated: None,
        }
    }

    // NOTE: the first evaluation cycle does not reset the page
    pub fn mount(&mut self) -> Option<FetchRequest> {
        let request = self.evaluate();

        self.mounted = true;

        request
    }

    pub fn set_search_input(&mut self, text: String) {
        self.search_input = text;
    }

    pub fn settle(&mut self, term: String) -> Option<FetchRequest> {
        if term == self.debounced_term {
            return None;
        }

        tracing::info!(debounced_term = %term);

        self.debounced_term = term;

        if self.mounted {
            self.page = Self::FIRST_PAGE;
        }

        self.evaluate()
    }

    pub fn go_to_previous_page(&mut self) -> Option<FetchRequest> {
        if !self.can_go_to_previous_page() {
            return None;
        }

        self.page -= 1;

        tracing::info!(page = self.page);

        self.evaluate()
    }

    pub fn go_to_next_page(&mut self) -> Option<FetchRequest> {
        self.page = self.page.saturating_add(1);

        tracing::info!(page = self.page);

        self.evaluate()
    }

    // NOTE: a fetch cycle runs whenever the derived query (trimmed term, page) differs from the last one evaluated,
    // so a term change that also resets the page is a single cycle
    fn evaluate(&mut self) -> Option<FetchRequest> {
        let derived = (self.debounced_term.trim().to_owned(), self.page);

        if self.evaluated.as_ref() == Some(&derived) {
            return None;
        }

        self.evaluated = derived.some();

        self.begin_fetch_cycle()
    }

    fn begin_fetch_cycle(&mut self) -> Option<FetchRequest> {
        // NOTE: bumped on the empty path too, so a response still in flight for an older term can't land afterwards
        self.generation += 1;

        let Some(query) = SearchQuery::new(&self.debounced_term, self.page) else {
            self.results = ResultSet::default();
            self.status = RequestStatus::Idle;

            return None;
        };

        self.status = RequestStatus::Loading;

        FetchRequest {
            generation: self.generation,
            query,
        }
        .some()
    }

    pub fn complete(&mut self, completed: FetchCompleted) -> bool {
        let FetchCompleted { generation, outcome } = completed;

        if generation != self.generation {
            tracing::info!(discarded_stale_generation = generation, latest_generation = self.generation);

            return false;
        }

        match outcome {
            Ok(results) => {
                tracing::info!(total_found = results.total_found, documents = results.documents.len());

                self.results = results;
                self.status = RequestStatus::Idle;
            }
            Err(fetch_error) => {
                tracing::warn!(%fetch_error);

                self.status = RequestStatus::Error(fetch_error.to_string());
            }
        }

        true
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn debounced_term(&self) -> &str {
        &self.debounced_term
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    pub fn status(&self) -> &RequestStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status() == &RequestStatus::Loading
    }

    pub fn error(&self) -> Option<&str> {
        let RequestStatus::Error(message) = self.status() else {
            return None;
        };

        message.as_str().some()
    }

    pub fn can_go_to_previous_page(&self) -> bool {
        self.page > Self::FIRST_PAGE
    }

    pub fn shows_pager(&self) -> bool {
        !self.results.is_empty()
    }

    pub fn summary(&self) -> String {
        if self.results.is_empty() {
            return Self::EMPTY_SUMMARY.into();
        }

        std::format!(
            "Found {total_found} results, showing page {page}",
            total_found = self.results.total_found,
            page = self.page
        )
    }
}
