use crate::catalog::{response::ResultSet, FetchError};
use bookfinder_macros::expand;
use crossterm::event::Event;

#[expand]
#[derive(Debug)]
pub enum Message {
    Input { event: Event },
    Settled { term: String },
    FetchCompleted {
        generation: u64,
        outcome: Result<ResultSet, FetchError>,
    },
    Tick,
}
