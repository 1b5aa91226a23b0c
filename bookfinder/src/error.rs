use crate::catalog::FetchError;
use derive_more::{Display, From};
use reqwest::Error as ReqwestError;
use serde_json::Error as SerdeJsonError;
use serde_yaml::Error as SerdeYamlError;
use std::io::Error as IoError;

// NOTE:
// - Error must implement Debug to be used as E in fn main() -> Result<(), E>
// - Error must implement Display for Any::error()
#[derive(Debug, Display, From)]
pub enum Error {
    Fetch(FetchError),
    Io(IoError),
    Reqwest(ReqwestError),
    SerdeJson(SerdeJsonError),
    SerdeYaml(SerdeYamlError),
}
