use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::{rejection::FormRejection, ConnectInfo, State},
    http::StatusCode,
    response::{Html, Response},
    Form, Json,
};

use crate::{
    domain::{PredictForm, PredictionLabel, PredictionResponse},
    http::{
        error::{protocol_error, ApiError},
        routes::AppState,
    },
    text::normalize,
};

const INDEX_HTML: &str = include_str!("../../assets/index.html");

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// `POST /predict`: validate the form message, normalize it, run the
/// classifier on a one-element batch and map the first label.
pub async fn predict(
    State(state): State<Arc<AppState>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    form: Result<Form<PredictForm>, FormRejection>,
) -> Result<Json<PredictionResponse>, ApiError> {
    let Form(form) = form.map_err(ApiError::Form)?;

    let message = form.message.unwrap_or_default();
    if message.is_empty() {
        return Err(ApiError::MissingMessage);
    }

    tracing::info!(target: "http", client = %addr.ip(), "received prediction request");

    let normalized = normalize(&message, &state.stopwords)?;

    let labels = state
        .classifier
        .predict(std::slice::from_ref(&normalized))?;
    let raw = labels
        .first()
        .copied()
        .ok_or(crate::classifier::ClassifierError::EmptyOutput)?;

    let prediction = PredictionLabel::from_raw(raw);
    tracing::info!(target: "http", ?prediction, "prediction made");

    Ok(Json(PredictionResponse { prediction }))
}

pub async fn not_found() -> Response {
    protocol_error(StatusCode::NOT_FOUND)
}

pub async fn method_not_allowed() -> Response {
    protocol_error(StatusCode::METHOD_NOT_ALLOWED)
}
