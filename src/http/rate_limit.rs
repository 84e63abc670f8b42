use std::{
    net::{IpAddr, SocketAddr},
    num::NonZeroU32,
    sync::Arc,
    time::Duration,
};

use axum::{
    extract::{ConnectInfo, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use governor::{
    clock::DefaultClock, state::keyed::DefaultKeyedStateStore, Quota, RateLimiter,
};

use crate::{
    config::RateLimitConfig,
    http::{error::ErrorBody, routes::AppState},
};

const SECONDS_PER_DAY: u64 = 86_400;

type KeyedLimiter = RateLimiter<IpAddr, DefaultKeyedStateStore<IpAddr>, DefaultClock>;

/// Per-client request ceilings keyed by remote address. The keyed stores are
/// the only mutable shared state in the process; governor updates them
/// atomically under concurrent access.
pub struct ClientRateLimits {
    predict: KeyedLimiter,
    hourly: KeyedLimiter,
    daily: KeyedLimiter,
}

impl ClientRateLimits {
    pub fn new(cfg: RateLimitConfig) -> Self {
        Self {
            predict: RateLimiter::keyed(Quota::per_minute(nonzero(cfg.predict_per_minute))),
            hourly: RateLimiter::keyed(Quota::per_hour(nonzero(cfg.per_hour))),
            daily: RateLimiter::keyed(daily_quota(cfg.per_day)),
        }
    }

    /// Service-wide ceilings, checked on every route.
    pub fn check_service(&self, client: IpAddr) -> bool {
        self.daily.check_key(&client).is_ok() && self.hourly.check_key(&client).is_ok()
    }

    /// Tighter per-minute ceiling on the prediction endpoint.
    pub fn check_predict(&self, client: IpAddr) -> bool {
        self.predict.check_key(&client).is_ok()
    }
}

fn nonzero(value: u32) -> NonZeroU32 {
    NonZeroU32::new(value.max(1)).expect("clamped to at least 1")
}

fn daily_quota(per_day: u32) -> Quota {
    let per_day = nonzero(per_day);
    let period = Duration::from_secs(SECONDS_PER_DAY / u64::from(per_day.get()));
    Quota::with_period(period)
        .expect("non-zero replenish period")
        .allow_burst(per_day)
}

pub async fn service_limit(
    State(state): State<Arc<AppState>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request,
    next: Next,
) -> Response {
    if !state.limits.check_service(addr.ip()) {
        return rejected(addr.ip());
    }
    next.run(request).await
}

pub async fn predict_limit(
    State(state): State<Arc<AppState>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request,
    next: Next,
) -> Response {
    if !state.limits.check_predict(addr.ip()) {
        return rejected(addr.ip());
    }
    next.run(request).await
}

fn rejected(client: IpAddr) -> Response {
    tracing::warn!(target: "http", %client, "rate limit exceeded");
    let body = ErrorBody {
        error: "Rate limit exceeded".to_string(),
        code: Some(StatusCode::TOO_MANY_REQUESTS.as_u16()),
    };
    (StatusCode::TOO_MANY_REQUESTS, Json(body)).into_response()
}
