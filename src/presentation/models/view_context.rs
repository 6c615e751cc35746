use crate::presentation::{enums::theme::Theme, surprise};

/// Per-session context handed to the renderer instead of global ui state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewContext {
    pub theme: Theme,
    pub seed: u64,
    pub surprise_prompt: &'static str,
}

impl ViewContext {
    pub fn new(theme: Theme, seed: u64) -> Self {
        Self {
            theme,
            seed,
            surprise_prompt: surprise::pick_surprise_prompt(seed),
        }
    }
}
