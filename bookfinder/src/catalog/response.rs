use serde::{Deserialize, Serialize};

// NOTE: only docs[].title, docs[].cover_i and numFound are read; every other field is ignored
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub docs: Vec<Doc>,

    #[serde(default, rename = "numFound")]
    pub num_found: u64,
}

#[derive(Debug, Deserialize)]
pub struct Doc {
    #[serde(default)]
    pub title: String,

    #[serde(rename = "cover_i")]
    pub cover_id: Option<i64>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct BookRecord {
    pub title: String,
    pub cover_id: Option<i64>,
}

impl From<Doc> for BookRecord {
    fn from(doc: Doc) -> Self {
        // NOTE: the catalog reports a missing cover as -1 on some documents
        let cover_id = doc.cover_id.filter(|cover_id| cover_id.is_positive());

        Self {
            title: doc.title,
            cover_id,
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ResultSet {
    pub documents: Vec<BookRecord>,
    pub total_found: u64,
}

impl ResultSet {
    pub fn is_empty(&self) -> bool {
        self.total_found == 0
    }
}

impl From<SearchResponse> for ResultSet {
    fn from(response: SearchResponse) -> Self {
        Self {
            documents: response.docs.into_iter().map(BookRecord::from).collect(),
            total_found: response.num_found,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BookRecord, ResultSet, SearchResponse};

    #[test]
    fn only_title_cover_and_count_are_kept() {
        let body = r#"{
            "numFound": 2,
            "start": 0,
            "docs": [
                {"title": "The Alchemist", "cover_i": 12345, "author_name": ["Paulo Coelho"]},
                {"title": "The Alchemist's Apprentice", "edition_count": 3}
            ]
        }"#;
        let response = serde_json::from_str::<SearchResponse>(body).unwrap();
        let results = ResultSet::from(response);

        assert_eq!(results.total_found, 2);
        assert_eq!(
            results.documents,
            std::vec![
                BookRecord {
                    title: "The Alchemist".into(),
                    cover_id: Some(12345),
                },
                BookRecord {
                    title: "The Alchemist's Apprentice".into(),
                    cover_id: None,
                },
            ]
        );
    }

    #[test]
    fn negative_cover_ids_count_as_missing() {
        let body = r#"{"numFound": 1, "docs": [{"title": "Untitled", "cover_i": -1}]}"#;
        let results = ResultSet::from(serde_json::from_str::<SearchResponse>(body).unwrap());

        assert_eq!(results.documents[0].cover_id, None);
    }
}
