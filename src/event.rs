use std::{fmt, str::FromStr};

use actix_web::{http::StatusCode, ResponseError};
use serde::de::DeserializeOwned;

use crate::github::{
    CreateEvent, DeleteEvent, PingEvent, PullRequestEvent, PushEvent, Repository, User,
};

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("501 Not Implemented - Unknown event type {0}")]
    Unsupported(String),
    #[error("500 Internal Server Error - Failed to decode {event_type} event: {source}")]
    Json {
        event_type: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ResponseError for DecodeError {
    fn status_code(&self) -> StatusCode {
        match self {
            DecodeError::Unsupported(_) => StatusCode::NOT_IMPLEMENTED,
            DecodeError::Json { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Event kinds with a native decoding schema, keyed by their `X-GitHub-Event` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    Push,
    PullRequest,
    Ping,
    Create,
    Delete,
}

impl EventType {
    pub const ALL: [EventType; 5] = [
        EventType::Push,
        EventType::PullRequest,
        EventType::Ping,
        EventType::Create,
        EventType::Delete,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EventType::Push => "push",
            EventType::PullRequest => "pull_request",
            EventType::Ping => "ping",
            EventType::Create => "create",
            EventType::Delete => "delete",
        }
    }
}

impl FromStr for EventType {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| DecodeError::Unsupported(s.to_owned()))
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An event kind without a schema, kept as raw JSON for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownEvent {
    pub event_type: String,
    pub payload: serde_json::Value,
}

/// A decoded webhook delivery. The variant is fixed by the discriminator
/// header at decode time.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Push(PushEvent),
    PullRequest(PullRequestEvent),
    Ping(PingEvent),
    Create(CreateEvent),
    Delete(DeleteEvent),
    Unknown(UnknownEvent),
}

fn parse<T: DeserializeOwned>(event_type: EventType, body: &[u8]) -> Result<T, DecodeError> {
    serde_json::from_slice(body).map_err(|source| DecodeError::Json {
        event_type: event_type.to_string(),
        source,
    })
}

impl Event {
    /// Decodes `body` with the schema registered for `event_type`.
    ///
    /// Discriminators outside [`EventType::ALL`] fail with
    /// [`DecodeError::Unsupported`] without looking at the body.
    pub fn decode(event_type: &str, body: &[u8]) -> Result<Self, DecodeError> {
        let event = match event_type.parse::<EventType>()? {
            t @ EventType::Push => Event::Push(parse(t, body)?),
            t @ EventType::PullRequest => Event::PullRequest(parse(t, body)?),
            t @ EventType::Ping => Event::Ping(parse(t, body)?),
            t @ EventType::Create => Event::Create(parse(t, body)?),
            t @ EventType::Delete => Event::Delete(parse(t, body)?),
        };
        Ok(event)
    }

    /// Like [`Event::decode`], but unsupported kinds become [`Event::Unknown`]
    /// as long as the body is valid JSON.
    pub fn decode_or_unknown(event_type: &str, body: &[u8]) -> Result<Self, DecodeError> {
        match Self::decode(event_type, body) {
            Err(DecodeError::Unsupported(event_type)) => match serde_json::from_slice(body) {
                Ok(payload) => Ok(Event::Unknown(UnknownEvent {
                    event_type,
                    payload,
                })),
                Err(source) => Err(DecodeError::Json { event_type, source }),
            },
            other => other,
        }
    }

    pub fn event_type(&self) -> &str {
        match self {
            Event::Push(_) => EventType::Push.as_str(),
            Event::PullRequest(_) => EventType::PullRequest.as_str(),
            Event::Ping(_) => EventType::Ping.as_str(),
            Event::Create(_) => EventType::Create.as_str(),
            Event::Delete(_) => EventType::Delete.as_str(),
            Event::Unknown(e) => &e.event_type,
        }
    }

    pub fn repository(&self) -> Option<&Repository> {
        match self {
            Event::Push(e) => Some(&e.repository),
            Event::PullRequest(e) => Some(&e.repository),
            Event::Ping(e) => e.repository.as_ref(),
            Event::Create(e) => Some(&e.repository),
            Event::Delete(e) => Some(&e.repository),
            Event::Unknown(_) => None,
        }
    }

    pub fn sender(&self) -> Option<&User> {
        match self {
            Event::Push(e) => Some(&e.sender),
            Event::PullRequest(e) => Some(&e.sender),
            Event::Ping(e) => Some(&e.sender),
            Event::Create(e) => Some(&e.sender),
            Event::Delete(e) => Some(&e.sender),
            Event::Unknown(_) => None,
        }
    }
}
