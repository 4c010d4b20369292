//! Per-request base URL derivation.
//!
//! Short URLs are built from the address the client actually used rather than
//! a statically configured domain: scheme, host and an optional deployment
//! stage prefix, e.g. `https://links.example.com/prod`.

use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, header, request::Parts};

use crate::config::Config;
use crate::error::AppError;
use crate::state::AppState;

const X_FORWARDED_HOST: &str = "x-forwarded-host";
const X_FORWARDED_PROTO: &str = "x-forwarded-proto";
const X_FORWARDED_PREFIX: &str = "x-forwarded-prefix";

/// Process-wide defaults for building a [`RequestContext`].
#[derive(Debug, Clone)]
pub struct ContextSettings {
    /// Trust `X-Forwarded-*` headers.
    pub behind_proxy: bool,
    pub default_scheme: String,
    pub default_stage: Option<String>,
}

impl Default for ContextSettings {
    fn default() -> Self {
        Self {
            behind_proxy: false,
            default_scheme: "https".to_string(),
            default_stage: None,
        }
    }
}

impl From<&Config> for ContextSettings {
    fn from(config: &Config) -> Self {
        Self {
            behind_proxy: config.behind_proxy,
            default_scheme: config.default_scheme.clone(),
            default_stage: config.deployment_stage.clone(),
        }
    }
}

/// The externally visible address of the service for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    base_url: String,
}

impl RequestContext {
    /// Builds a context from an already known base URL. A trailing `/` is dropped.
    pub fn from_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Builds a context from scheme, host and an optional stage segment.
    pub fn new(scheme: &str, host: &str, stage: Option<&str>) -> Self {
        let stage = stage.map(|s| s.trim_matches('/')).filter(|s| !s.is_empty());
        let base_url = match stage {
            Some(stage) => format!("{}://{}/{}", scheme, host, stage),
            None => format!("{}://{}", scheme, host),
        };
        Self { base_url }
    }

    /// Derives the context from request headers.
    ///
    /// The host comes from `X-Forwarded-Host` (behind a proxy), then `Host`,
    /// then `authority` (HTTP/2 requests without a `Host` header).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if no host can be determined.
    pub fn from_headers(
        headers: &HeaderMap,
        authority: Option<&str>,
        settings: &ContextSettings,
    ) -> Result<Self, AppError> {
        let forwarded = |name: &str| {
            settings
                .behind_proxy
                .then(|| first_header_value(headers, name))
                .flatten()
        };

        let host = forwarded(X_FORWARDED_HOST)
            .or_else(|| first_header_value(headers, header::HOST.as_str()))
            .or(authority)
            .filter(|h| !h.is_empty())
            .ok_or_else(|| AppError::bad_request("Missing Host header"))?;

        let scheme = forwarded(X_FORWARDED_PROTO).unwrap_or(settings.default_scheme.as_str());

        let stage = if settings.behind_proxy && headers.contains_key(X_FORWARDED_PREFIX) {
            first_header_value(headers, X_FORWARDED_PREFIX)
        } else {
            settings.default_stage.as_deref()
        };

        Ok(Self::new(scheme, host, stage))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns `base_url + "/" + suffix`.
    pub fn short_url(&self, suffix: &str) -> String {
        format!("{}/{}", self.base_url, suffix)
    }
}

/// First comma-separated element of a header, trimmed.
fn first_header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
}

impl FromRequestParts<AppState> for RequestContext {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let authority = parts.uri.authority().map(|a| a.as_str());
        Self::from_headers(&parts.headers, authority, &state.context)
    }
}
