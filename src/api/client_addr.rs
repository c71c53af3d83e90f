//! Extractor for the raw participant address of a request.

use std::net::SocketAddr;

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::request::Parts;

use crate::app_state::AppState;
use crate::error::DrawError;

/// Header consulted when [`AppState::trust_forwarded_for`] is set.
pub const FORWARDED_FOR: &str = "x-forwarded-for";

/// Raw, unvalidated client address.
///
/// Taken from the first `X-Forwarded-For` entry when forwarding is
/// trusted and the header is present, otherwise from the socket peer.
/// Validation happens in [`crate::domain::Identity::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientAddress(pub String);

impl FromRequestParts<AppState> for ClientAddress {
    type Rejection = DrawError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if state.trust_forwarded_for
            && let Some(forwarded) = first_forwarded(parts)
        {
            return Ok(Self(forwarded));
        }

        let ConnectInfo(peer) = ConnectInfo::<SocketAddr>::from_request_parts(parts, state)
            .await
            .map_err(|_| DrawError::Internal("peer address unavailable".to_string()))?;
        Ok(Self(peer.ip().to_string()))
    }
}

fn first_forwarded(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get(FORWARDED_FOR)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
