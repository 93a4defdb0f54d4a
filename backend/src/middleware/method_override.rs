//! Lets HTML forms, which can only send GET and POST, reach PUT, PATCH and
//! DELETE routes.
//!
//! A `POST` is re-dispatched with another method when it carries either a
//! `_method` query parameter (`<form method="POST" action="/products/1?_method=DELETE">`)
//! or an `X-HTTP-Method-Override` header. The query parameter wins when both
//! are present. Requests with any other method pass through untouched.

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::Method;
use actix_web::middleware::Next;
use actix_web::{web, Error};
use log::debug;

pub const QUERY_KEY: &str = "_method";
pub const HEADER: &str = "x-http-method-override";

pub async fn method_override(
    mut req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    if req.method() == Method::POST {
        if let Some(method) = requested_method(&req) {
            debug!("Dispatching POST {} as {}", req.path(), method);
            req.head_mut().method = method;
        }
    }
    next.call(req).await
}

fn requested_method(req: &ServiceRequest) -> Option<Method> {
    let from_query = web::Query::<Vec<(String, String)>>::from_query(req.query_string())
        .ok()
        .and_then(|q| {
            q.into_inner()
                .into_iter()
                .find(|(key, _)| key == QUERY_KEY)
                .map(|(_, value)| value)
        });
    let raw = from_query.or_else(|| {
        req.headers()
            .get(HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    })?;

    match raw.trim().to_ascii_uppercase().as_str() {
        "PUT" => Some(Method::PUT),
        "PATCH" => Some(Method::PATCH),
        "DELETE" => Some(Method::DELETE),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::middleware::from_fn;
    use actix_web::{test, App, HttpResponse};

    async fn deleted() -> HttpResponse {
        HttpResponse::Ok().body("deleted")
    }

    async fn created() -> HttpResponse {
        HttpResponse::Ok().body("created")
    }

    #[actix_web::test]
    async fn query_parameter_overrides_post() {
        let app = test::init_service(
            App::new()
                .wrap(from_fn(method_override))
                .route("/items/1", web::delete().to(deleted)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/items/1?{QUERY_KEY}=DELETE"))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "deleted");
    }

    #[actix_web::test]
    async fn header_overrides_post() {
        let app = test::init_service(
            App::new()
                .wrap(from_fn(method_override))
                .route("/items/1", web::delete().to(deleted)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/items/1")
            .insert_header((HEADER, "delete"))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "deleted");
    }

    #[actix_web::test]
    async fn only_post_is_overridden() {
        let app = test::init_service(
            App::new()
                .wrap(from_fn(method_override))
                .route("/items/1", web::delete().to(deleted)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/items/1?_method=DELETE")
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_ne!(res.status(), StatusCode::OK);
        assert_ne!(test::read_body(res).await, "deleted");
    }

    #[actix_web::test]
    async fn unknown_methods_leave_the_post_alone() {
        let app = test::init_service(
            App::new()
                .wrap(from_fn(method_override))
                .route("/items", web::post().to(created)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/items?_method=TRACE")
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "created");
    }
}
