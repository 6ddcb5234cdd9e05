//! Error response rendering.

use salvo::{
    catcher::Catcher,
    http::{ResBody, StatusCode},
    oapi::ToSchema,
    prelude::*,
};
use serde::{Deserialize, Serialize};

/// Error body returned by every failing request.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorResponse {
    /// Human readable error description
    pub message: String,
}

/// Catcher that renders every error status as an [`ErrorResponse`].
pub(crate) fn catcher() -> Catcher {
    Catcher::default().hoop(render_error)
}

#[salvo::handler]
async fn render_error(res: &mut Response, ctrl: &mut FlowCtrl) {
    let status = res.status_code.unwrap_or(StatusCode::NOT_FOUND);

    if !status.is_client_error() && !status.is_server_error() {
        return;
    }

    let message = match res.take_body() {
        ResBody::Error(error) if !error.brief.is_empty() && !status.is_server_error() => {
            error.brief
        }
        _ => status
            .canonical_reason()
            .unwrap_or("Unknown Error")
            .to_lowercase(),
    };

    res.status_code(status);
    res.render(Json(ErrorResponse { message }));

    ctrl.skip_rest();
}
