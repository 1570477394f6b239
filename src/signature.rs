use std::fmt;

use actix_web::{http::StatusCode, ResponseError};
use hmac::{Hmac, Mac};
use sha1::Sha1;

pub const SIGNATURE_HEADER: &str = "X-Hub-Signature";

const PREFIX: &[u8] = b"sha1=";
const DIGEST_LEN: usize = 20;

type HmacSha1 = Hmac<Sha1>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("403 Forbidden - Missing X-Hub-Signature required for HMAC verification")]
    HeaderNotFound,
    #[error("403 Forbidden - `X-Hub-Signature` has invalid length")]
    InvalidLength,
    #[error("403 Forbidden - `X-Hub-Signature` must start with `sha1=`")]
    InvalidPrefix,
    #[error("403 Forbidden - signature must be 40 lowercase hex digits")]
    NotHex,
    #[error("403 Forbidden - HMAC verification failed")]
    Mismatch,
    #[error("500 Internal Server Error - HMAC key is unusable")]
    InvalidKey,
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidKey => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::FORBIDDEN,
        }
    }
}

/// A parsed `sha1=<hex>` signature header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature(pub [u8; DIGEST_LEN]);

impl Signature {
    pub fn parse(value: &[u8]) -> Result<Self, Error> {
        if value.len() != PREFIX.len() + DIGEST_LEN * 2 {
            return Err(Error::InvalidLength);
        }
        let (prefix, digits) = value.split_at(PREFIX.len());
        if prefix != PREFIX {
            return Err(Error::InvalidPrefix);
        }
        // `hex` accepts uppercase too, the header is expected in lowercase only.
        if !digits.iter().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
            return Err(Error::NotHex);
        }

        hex::FromHex::from_hex(digits)
            .map(Self)
            .map_err(|_| Error::NotHex)
    }

    pub fn compute(secret: &[u8], body: &[u8]) -> Result<Self, Error> {
        let mut mac = keyed(secret)?;
        mac.update(body);
        let mut digest = [0; DIGEST_LEN];
        digest.copy_from_slice(&mac.finalize().into_bytes());
        Ok(Self(digest))
    }

    /// Constant-time check of this signature against `body`.
    pub fn matches(&self, secret: &[u8], body: &[u8]) -> Result<bool, Error> {
        let mut mac = keyed(secret)?;
        mac.update(body);
        Ok(mac.verify_slice(&self.0).is_ok())
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sha1={}", hex::encode(self.0))
    }
}

fn keyed(secret: &[u8]) -> Result<HmacSha1, Error> {
    HmacSha1::new_from_slice(secret).map_err(|_| Error::InvalidKey)
}

/// Authenticates a raw request body.
///
/// An empty `secret` disables verification and accepts every request. Otherwise
/// `header` must hold `sha1=` followed by the hex HMAC-SHA1 of `body`.
pub fn verify(secret: &[u8], body: &[u8], header: Option<&[u8]>) -> Result<(), Error> {
    if secret.is_empty() {
        return Ok(());
    }

    let header = header
        .filter(|h| !h.is_empty())
        .ok_or(Error::HeaderNotFound)?;
    let signature = Signature::parse(header).map_err(|err| {
        tracing::debug!("malformed signature header: {}", err);
        Error::Mismatch
    })?;

    if signature.matches(secret, body)? {
        Ok(())
    } else {
        Err(Error::Mismatch)
    }
}
