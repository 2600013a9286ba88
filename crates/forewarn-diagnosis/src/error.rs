use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("no JSON object found in narrative")]
    NoJson,

    #[error("narrative JSON did not parse: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("narrative JSON missing required field: {0}")]
    MissingField(&'static str),
}
