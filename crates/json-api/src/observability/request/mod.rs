//! Request-level logging and request IDs.

mod request_ids;
mod spans;

use std::time::{Duration, Instant};

use salvo::{
    Request, handler,
    prelude::{Depot, FlowCtrl, Response},
};
use tracing::Instrument as _;
use tracing::{error, info, warn};

use crate::config::observability::LoggingConfig;

const REQUEST_ID_DEPOT_KEY: &str = "request_id";

/// Hoop that wraps every request in an `http.request` span and logs its outcome.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RequestLogging {
    slow_request_threshold: Duration,
}

impl RequestLogging {
    pub(crate) fn new(slow_request_threshold: Duration) -> Self {
        Self {
            slow_request_threshold,
        }
    }

    pub(crate) fn from_config(config: &LoggingConfig) -> Self {
        Self::new(Duration::from_millis(config.slow_request_threshold_ms))
    }
}

#[handler]
impl RequestLogging {
    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        ctrl: &mut FlowCtrl,
    ) {
        let started = Instant::now();

        let request_id =
            request_ids::resolve_request_id(req.header::<String>(request_ids::REQUEST_ID_HEADER));

        depot.insert(REQUEST_ID_DEPOT_KEY, request_id.clone());

        request_ids::set_request_id_header(res, &request_id);

        let method = req.method().to_string();
        let path = req.uri().path().to_owned();

        let span = tracing::info_span!(
            parent: None,
            "http.request",
            request_id = %request_id,
            method = %method,
            path = %path,
            route = %spans::route_label(&path),
            remote_addr = %req.remote_addr(),
            status = tracing::field::Empty,
            duration_ms = tracing::field::Empty
        );

        ctrl.call_next(req, depot, res)
            .instrument(span.clone())
            .await;

        let elapsed = started.elapsed();
        let duration_ms = elapsed.as_millis();
        let status = request_ids::response_status_or_ok(res.status_code);

        span.record("status", status.as_u16());
        span.record("duration_ms", duration_ms);

        let _entered = span.enter();

        info!(status = status.as_u16(), duration_ms, "request.completed");

        if status.is_server_error() {
            error!(status = status.as_u16(), %method, %path, "server error response");
        } else if status.is_client_error() {
            warn!(status = status.as_u16(), %method, %path, "client error response");
        }

        if elapsed > self.slow_request_threshold {
            warn!(
                %method,
                %path,
                duration_ms,
                threshold_ms = self.slow_request_threshold.as_millis(),
                "slow request detected"
            );
        }
    }
}
