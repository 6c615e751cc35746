use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct GenerateImageDto {
    #[validate(length(min = 2, message = "Prompt must be at least 2 characters."))]
    pub prompt: String,
}

impl GenerateImageDto {
    pub fn new(prompt: &str) -> Self {
        Self {
            prompt: prompt.to_string(),
        }
    }

    /// Validates the dto and flattens any failure into the first field message.
    pub fn check(&self) -> Result<(), String> {
        let Err(errors) = self.validate()
        else {
            return Ok(());
        };

        let message = errors
            .field_errors()
            .values()
            .flat_map(|errors| errors.iter())
            .find_map(|error| error.message.as_ref().map(|message| message.to_string()))
            .unwrap_or_else(|| errors.to_string());

        Err(message)
    }
}
