pub mod data_uri;
pub mod poll_policy;
