use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ModalGenerateResponse {
    pub call_id: String,
}
