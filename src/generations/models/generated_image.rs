use serde::{Deserialize, Serialize};

use crate::generations::util::data_uri;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedImage {
    pub image: String,
    pub elapsed_time: Option<String>,
}

impl GeneratedImage {
    pub fn from_png_bytes(bytes: &[u8], elapsed_time: Option<String>) -> Self {
        Self {
            image: data_uri::encode_png(bytes),
            elapsed_time,
        }
    }
}
