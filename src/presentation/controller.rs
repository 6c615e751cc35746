use axum::{
    extract::{Query, State},
    response::Html,
    Form,
};
use tracing::Instrument;
use uuid::Uuid;

use crate::AppState;

use super::{
    dtos::{page_form_dto::PageFormDto, page_query_dto::PageQueryDto},
    enums::theme::Theme,
    models::view_context::ViewContext,
    session::Session,
};

pub async fn get_page(Query(dto): Query<PageQueryDto>) -> Html<String> {
    let seed = dto.seed.unwrap_or_else(rand::random);
    let mut session = Session::new(ViewContext::new(
        Theme::from_param(dto.theme.as_deref()),
        seed,
    ));

    if let Some(prompt) = &dto.prompt {
        session.edit(prompt);
    }

    Html(session.render_page())
}

pub async fn submit_page(
    State(state): State<AppState>,
    Form(dto): Form<PageFormDto>,
) -> Html<String> {
    let seed = dto.seed.unwrap_or_else(rand::random);
    let mut session = Session::new(ViewContext::new(
        Theme::from_param(dto.theme.as_deref()),
        seed,
    ));

    let prompt = dto.prompt.as_deref().unwrap_or_default();
    session.edit(prompt);

    // the surprise button only fills an empty prompt, typed text is submitted
    if dto.surprise == Some(true) && prompt.is_empty() {
        session.surprise_me();
        return Html(session.render_page());
    }

    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("submit_page", %request_id);

    session.submit(state.relay.as_ref()).instrument(span).await;

    Html(session.render_page())
}
