use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct PageQueryDto {
    pub theme: Option<String>,
    pub seed: Option<u64>,
    pub prompt: Option<String>,
}
