use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RelayErrorResponse {
    pub error: String,
}
