use actix_web::{
    dev::Payload, error::ResponseError, http::StatusCode, web::Bytes, FromRequest, HttpRequest,
};
use futures::future::{self, FutureExt, LocalBoxFuture};
use secstr::SecStr;

use crate::{
    event::{DecodeError, Event},
    signature::{self, SIGNATURE_HEADER},
};

pub const EVENT_HEADER: &str = "X-GitHub-Event";

/// A delivery that passed signature verification and decoding.
#[derive(Debug, Clone)]
pub struct Webhook(pub Event);

#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    #[error("400 Bad Request - Missing X-GitHub-Event Header")]
    MissingEventType,
    #[error("500 Internal Server Error - Failed reading request body: {0}")]
    BodyRead(actix_web::Error),
    #[error(transparent)]
    Signature(#[from] signature::Error),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl ResponseError for WebhookError {
    fn status_code(&self) -> StatusCode {
        match self {
            WebhookError::MissingEventType => StatusCode::BAD_REQUEST,
            WebhookError::BodyRead(_) => StatusCode::INTERNAL_SERVER_ERROR,
            WebhookError::Signature(err) => err.status_code(),
            WebhookError::Decode(err) => err.status_code(),
        }
    }
}

/// Extractor settings. Without an instance in app data, deliveries are
/// accepted unsigned and unsupported kinds are refused.
#[derive(Debug, Clone, Default)]
pub struct WebhookConfig {
    pub secret: Option<SecStr>,
    pub accept_unknown: bool,
}

/// Non-ASCII header values are kept (lossily) so they reach the unsupported-kind check.
fn event_type(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(EVENT_HEADER)
        .filter(|value| !value.is_empty())
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
}

impl FromRequest for Webhook {
    type Error = WebhookError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let event_type = match event_type(req) {
            Some(event_type) => event_type,
            None => {
                tracing::debug!("rejecting delivery without {} header", EVENT_HEADER);
                return Box::pin(future::err(WebhookError::MissingEventType));
            }
        };
        let req = req.clone();

        Box::pin(Bytes::from_request(&req, payload).map(
            move |bytes| -> Result<Self, Self::Error> {
                let (secret, accept_unknown) = match req.app_data::<WebhookConfig>() {
                    Some(config) => (
                        config.secret.as_ref().map(SecStr::unsecure).unwrap_or_default(),
                        config.accept_unknown,
                    ),
                    None => (&[][..], false),
                };

                let result = bytes.map_err(WebhookError::BodyRead).and_then(|bytes| {
                    let header = req.headers().get(SIGNATURE_HEADER).map(|v| v.as_bytes());
                    signature::verify(secret, &bytes, header)?;

                    let event = if accept_unknown {
                        Event::decode_or_unknown(&event_type, &bytes)?
                    } else {
                        Event::decode(&event_type, &bytes)?
                    };
                    Ok(Self(event))
                });

                if let Err(err) = &result {
                    tracing::debug!(
                        event_type = %event_type,
                        status = err.status_code().as_u16(),
                        "rejecting delivery: {}",
                        err
                    );
                }
                result
            },
        ))
    }
}
