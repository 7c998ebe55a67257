use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlybyError {
    #[error("HTTP ureq error: {0}")]
    UreqHttpError(#[from] ureq::Error),

    #[error("JSON decoding error: {0}")]
    JsonDecodeError(#[from] serde_json::Error),

    #[error("CSV deserialization error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid close approach date: {0}")]
    InvalidApproachDate(String),

    #[error("Required CAD field not found in API response: {0}")]
    MissingCadField(String),

    #[error("Malformed close approach record: {0}")]
    MalformedRecord(String),

    #[error("Horizons response parsing failed: {0}")]
    HorizonsParseError(String),
}
