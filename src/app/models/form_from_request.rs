use axum::Form;
use axum_macros::FromRequest;

use super::api_error::ApiError;

#[derive(FromRequest)]
#[from_request(via(Form), rejection(ApiError))]
pub struct FormFromRequest<T>(pub T);
