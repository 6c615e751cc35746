pub mod api_error;
pub mod form_from_request;
