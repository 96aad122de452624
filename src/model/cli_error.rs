use reqwest::header::InvalidHeaderValue;
use reqwest::StatusCode;
use thiserror::Error;

use super::collection::CollectionDecodeError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO Error")]
    Io(#[from] std::io::Error),
    #[error("Request Error")]
    Request(#[from] reqwest::Error),
    #[error("Header error")]
    InvalidHeader(#[from] InvalidHeaderValue),
    #[error("API Auth Error")]
    APIAuthError,
    #[error("Unexpected response from API: {0}")]
    UnexpectedResponse(StatusCode),
    #[error("Malformed server response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
    #[error("Malformed server response: {0}")]
    CollectionDecode(#[from] CollectionDecodeError),
    #[error("Your current OS is not supported, please use Linux, MacOS, or Windows")]
    UnsupportedSystem,
}
