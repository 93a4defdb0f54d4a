//! Two-stage error handling wrapped around every route.
//!
//! 1. `log_error_kind` records what kind of failure a response carries and
//!    passes the response on unchanged.
//! 2. `render_error` makes sure the client gets the status and a plain-text
//!    message. `AppError` responses already look like that; anything else
//!    raised inside actix (payload limits, middleware failures) is rewritten
//!    into the same shape. An `Err` out of the inner service is passed on
//!    and rendered by actix from its `ResponseError`.
//!
//! `log_error_kind` must be registered before `render_error` so it is the
//! inner of the two and sees the original error.

use crate::error::{plain_text, AppError};
use actix_web::body::{BoxBody, MessageBody};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::middleware::Next;
use actix_web::Error;
use log::error;

pub async fn log_error_kind(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let method = req.method().clone();
    let path = req.path().to_string();

    match next.call(req).await {
        Ok(res) => {
            if let Some(err) = res.response().error() {
                error!("{} on {method} {path}: {err}", kind_of(err));
            }
            Ok(res)
        }
        Err(err) => {
            error!("{} on {method} {path}: {err}", kind_of(&err));
            Err(err)
        }
    }
}

pub async fn render_error(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<BoxBody>, Error> {
    // Routing further in needs sole ownership of the request, so no handle
    // to it is kept across this call.
    let res = next.call(req).await?;

    let rewrite = res
        .response()
        .error()
        .filter(|err| err.as_error::<AppError>().is_none())
        .map(|err| (res.status(), err.to_string()));

    match rewrite {
        Some((status, message)) => {
            let (request, _) = res.into_parts();
            Ok(ServiceResponse::new(request, plain_text(status, &message)))
        }
        None => Ok(res.map_into_boxed_body()),
    }
}

fn kind_of(err: &Error) -> &'static str {
    err.as_error::<AppError>()
        .map(AppError::kind)
        .unwrap_or("Error")
}
