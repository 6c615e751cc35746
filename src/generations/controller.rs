use axum::{extract::State, Json};
use tracing::Instrument;
use uuid::Uuid;

use crate::{
    app::models::{api_error::ApiError, form_from_request::FormFromRequest},
    AppState,
};

use super::{
    dtos::generate_image_dto::GenerateImageDto, models::generated_image::GeneratedImage, service,
};

pub async fn generate_image(
    State(state): State<AppState>,
    FormFromRequest(dto): FormFromRequest<GenerateImageDto>,
) -> Result<Json<GeneratedImage>, ApiError> {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("generate_image", %request_id);

    match service::generate_image(&dto, state.client.as_ref(), &state.poll_policy)
        .instrument(span)
        .await
    {
        Ok(image) => Ok(Json(image)),
        Err(e) => Err(e.value()),
    }
}
