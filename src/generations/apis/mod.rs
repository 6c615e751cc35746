pub mod generation_client;
pub mod modal;
