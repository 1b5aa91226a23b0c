use crate::{
    catalog::{covers::Covers, Catalog},
    config::Config,
    error::Error,
    finder::{
        controller::{FetchRequest, SearchController},
        message::FetchCompleted,
    },
    utils::any::Any,
};
use clap::Args;
use std::io::Write;

#[derive(Args, Clone)]
pub struct SearchArgs {
    /// Book title to search for
    pub title: String,

    /// Print the page of results as JSON
    #[arg(long)]
    pub json: bool,
}

impl SearchArgs {
    const NO_IMAGE: &'static str = "[No Image]";

    // NOTE: a failed fetch is returned as an error rather than printed
    async fn search<C: Catalog>(&self, page: u32, catalog: &C) -> Result<SearchController, Error> {
        let mut controller = SearchController::new(self.title.clone(), page);
        let Some(FetchRequest { generation, query }) = controller.mount() else {
            return controller.ok();
        };
        let outcome = catalog.search(&query).await;
        let fetch_err_opt = outcome.as_ref().err().cloned();

        controller.complete(FetchCompleted { generation, outcome });

        if let Some(fetch_err) = fetch_err_opt {
            return fetch_err.convert::<Error>().err();
        }

        controller.ok()
    }

    fn write_report<W: Write>(&self, controller: &SearchController, covers: &Covers, mut writer: W) -> Result<(), Error> {
        if self.json {
            serde_json::to_writer_pretty(&mut writer, controller.results())?;
            writeln!(writer)?;

            return ().ok();
        }

        writeln!(writer, "{}", controller.summary())?;

        for (index, book_record) in controller.results().documents.iter().enumerate() {
            let cover = book_record
                .cover_id
                .map_or_else(|| Self::NO_IMAGE.to_owned(), |cover_id| covers.url(cover_id));

            writeln!(writer, "{number}. {title}  {cover}", number = index + 1, title = book_record.title)?;
        }

        ().ok()
    }

    pub async fn run<C: Catalog>(&self, config: &Config, page: u32, catalog: &C) -> Result<(), Error> {
        let controller = self.search(page, catalog).await?;
        let covers = Covers::new(config.catalog.covers_url.clone());

        self.write_report(&controller, &covers, std::io::stdout().lock())
    }
}

#[cfg(test)]
mod tests {
    use super::SearchArgs;
    use crate::{
        catalog::{
            covers::Covers,
            fake::FakeCatalog,
            query::SearchQuery,
            response::{BookRecord, ResultSet},
            FetchError,
        },
        error::Error,
    };
    use url::Url;

    fn search_args(title: &str, json: bool) -> SearchArgs {
        SearchArgs {
            title: title.into(),
            json,
        }
    }

    fn covers() -> Covers {
        Covers::new(Url::parse("https://covers.openlibrary.org/").unwrap())
    }

    fn alchemist() -> ResultSet {
        ResultSet {
            documents: std::vec![
                BookRecord {
                    title: "The Alchemist".into(),
                    cover_id: Some(12345),
                },
                BookRecord {
                    title: "The Alchemist (Graphic Novel)".into(),
                    cover_id: None,
                },
            ],
            total_found: 2,
        }
    }

    async fn report(search_args: &SearchArgs, page: u32, catalog: &FakeCatalog) -> String {
        let controller = search_args.search(page, catalog).await.unwrap();
        let mut output = Vec::new();

        search_args.write_report(&controller, &covers(), &mut output).unwrap();

        String::from_utf8(output).unwrap()
    }

    #[tokio::test]
    async fn prints_the_summary_and_one_line_per_book() {
        let catalog = FakeCatalog::default().reply("The Alchemist", 1, Ok(alchemist()));
        let output = report(&search_args(" The Alchemist ", false), 1, &catalog).await;

        assert_eq!(
            output,
            "Found 2 results, showing page 1\n\
             1. The Alchemist  https://covers.openlibrary.org/b/id/12345-M.jpg\n\
             2. The Alchemist (Graphic Novel)  [No Image]\n"
        );
        assert_eq!(catalog.queries(), std::vec![SearchQuery::new("The Alchemist", 1).unwrap()]);
    }

    #[tokio::test]
    async fn json_output_is_the_result_set() {
        let catalog = FakeCatalog::default().reply("The Alchemist", 3, Ok(alchemist()));
        let output = report(&search_args("The Alchemist", true), 3, &catalog).await;
        let value = serde_json::from_str::<serde_json::Value>(&output).unwrap();

        assert_eq!(value["total_found"], 2);
        assert_eq!(value["documents"][0]["title"], "The Alchemist");
        assert_eq!(value["documents"][0]["cover_id"], 12345);
        assert!(value["documents"][1]["cover_id"].is_null());
    }

    #[tokio::test]
    async fn blank_titles_skip_the_catalog() {
        let catalog = FakeCatalog::default();
        let output = report(&search_args("   ", false), 1, &catalog).await;

        assert_eq!(output, "No results yet.\n");
        assert!(catalog.queries().is_empty());
    }

    #[tokio::test]
    async fn failed_fetches_are_errors() {
        let catalog = FakeCatalog::default().reply("dune", 1, Err(FetchError::Http(500)));
        let result = search_args("dune", false).search(1, &catalog).await;

        assert!(std::matches!(result, Err(Error::Fetch(FetchError::Http(500)))));
    }
}
