use url::Url;

#[derive(Clone, Debug)]
pub struct Covers {
    base_url: Url,
}

impl Covers {
    const SIZE: &'static str = "M";

    pub fn new(base_url: Url) -> Self {
        Self { base_url }
    }

    pub fn url(&self, cover_id: i64) -> String {
        let base_url = self.base_url.as_str().trim_end_matches('/');

        std::format!("{base_url}/b/id/{cover_id}-{size}.jpg", size = Self::SIZE)
    }
}
