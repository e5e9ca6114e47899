use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("gauge API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),
}
