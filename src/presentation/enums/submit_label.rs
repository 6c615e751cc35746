#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitLabel {
    SurpriseMe,
    Generating,
    Generate,
}

impl SubmitLabel {
    pub fn value(&self) -> &str {
        match *self {
            Self::SurpriseMe => "Surprise me",
            Self::Generating => "Generating...",
            Self::Generate => "Generate",
        }
    }

    pub fn tooltip(&self) -> &str {
        match *self {
            Self::SurpriseMe => "Get a random prompt",
            Self::Generating => "Generating...",
            Self::Generate => "Generate image",
        }
    }
}
