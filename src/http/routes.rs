use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{classifier::Classifier, text::StopWords};

use super::{
    handlers,
    rate_limit::{self, ClientRateLimits},
};

/// Read-only state shared across requests. The classifier and stop-word set
/// are initialized once at startup; the rate limiters hold their own
/// per-client counters.
pub struct AppState {
    pub classifier: Arc<dyn Classifier>,
    pub stopwords: Arc<StopWords>,
    pub limits: ClientRateLimits,
}

pub fn router(state: Arc<AppState>) -> Router {
    let predict = Router::new()
        .route("/predict", post(handlers::predict))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit::predict_limit,
        ));

    Router::new()
        .route("/", get(handlers::index))
        .merge(predict)
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit::service_limit,
        ))
        .with_state(state)
}
