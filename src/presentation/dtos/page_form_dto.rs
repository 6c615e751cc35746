use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct PageFormDto {
    pub prompt: Option<String>,
    pub theme: Option<String>,
    pub seed: Option<u64>,
    pub surprise: Option<bool>,
}
