pub mod lifecycle_state;
pub mod notification_variant;
