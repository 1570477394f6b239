use actix_web::{
    http::{header, StatusCode},
    web, HttpResponse, ResponseError,
};

use crate::{http::Webhook, queue::Queue, SERVER_HEADER};

pub const PING_RESPONSE: &str = "200 OK";

#[derive(Debug, Clone, thiserror::Error)]
pub enum RouteError {
    #[error("404 Not Found")]
    NotFound,
    #[error("405 Method Not Allowed")]
    MethodNotAllowed,
}

impl ResponseError for RouteError {
    fn status_code(&self) -> StatusCode {
        match self {
            RouteError::NotFound => StatusCode::NOT_FOUND,
            RouteError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

pub async fn ping() -> HttpResponse {
    HttpResponse::Ok().body(PING_RESPONSE)
}

pub async fn not_found() -> Result<HttpResponse, RouteError> {
    Err(RouteError::NotFound)
}

pub async fn method_not_allowed() -> Result<HttpResponse, RouteError> {
    Err(RouteError::MethodNotAllowed)
}

pub async fn receive(
    Webhook(event): Webhook,
    queue: web::Data<Queue>,
) -> Result<HttpResponse, actix_web::Error> {
    let event_type = event.event_type().to_owned();
    let repository = event.repository().map(|r| r.full_name.clone());

    queue.push(event).await.map_err(|err| {
        tracing::debug!(event_type = %event_type, "failed to queue event: {}", err);
        err
    })?;
    tracing::debug!(
        event_type = %event_type,
        repository = repository.as_deref().unwrap_or("-"),
        "queued event"
    );

    Ok(HttpResponse::Ok()
        .insert_header((header::SERVER, SERVER_HEADER))
        .content_type("application/json")
        .body("{}"))
}
