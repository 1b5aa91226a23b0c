use crate::{
    catalog::client::CatalogClient, config::Config, error::Error, finder::finder::Finder, search::SearchArgs,
    utils::any::Any,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use url::Url;

#[derive(Clone, Subcommand)]
pub enum Command {
    /// Run one search without the interactive finder and print the page of results
    Search(SearchArgs),
}

#[derive(Clone, Parser)]
#[command(about, version)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[arg(global = true, long = "config")]
    pub config_filepath: Option<PathBuf>,

    #[arg(global = true, long = "logs")]
    pub log_filepath: Option<PathBuf>,

    /// Quiet period after the last keystroke before the search term is queried
    #[arg(global = true, long)]
    pub debounce_ms: Option<u64>,

    /// Address of the catalog's search endpoint
    #[arg(global = true, long)]
    pub catalog_url: Option<Url>,

    /// Page to open on, or to fetch with the search subcommand
    #[arg(default_value_t = 1, global = true, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Book title the finder opens with
    pub title: Option<String>,
}

impl CliArgs {
    fn init_tracing(&self) -> Result<(), Error> {
        let Some(log_filepath) = &self.log_filepath else {
            return ().ok();
        };
        let log_file = log_filepath.create()?;

        tracing_subscriber::fmt().with_writer(log_file).json().init();

        ().ok()
    }

    fn config(&self) -> Result<Config, Error> {
        let mut config = Config::load(self.config_filepath.as_deref())?;

        if let Some(debounce_ms) = self.debounce_ms {
            config.debounce_ms = debounce_ms;
        }

        if let Some(catalog_url) = &self.catalog_url {
            config.catalog.search_url = catalog_url.clone();
        }

        config.ok()
    }

    pub async fn run(self) -> Result<(), Error> {
        self.init_tracing()?;

        let config = self.config()?;
        let catalog = CatalogClient::new(&config.catalog)?;

        match self.command {
            Some(Command::Search(search_args)) => search_args.run(&config, self.page, &catalog).await?,
            None => {
                let initial_term = self.title.unwrap_or_default();

                Finder::new(config, initial_term, self.page, catalog).run().await?;
            }
        }

        ().ok()
    }
}
