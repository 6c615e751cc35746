pub mod notification;
pub mod relay_error_response;
