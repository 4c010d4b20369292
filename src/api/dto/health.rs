//! Health check response body.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Healthy,
    Degraded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeStatus {
    Ok,
    Error,
}

/// `GET /_/health` body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: ServiceStatus,
    pub version: &'static str,
    pub checks: HealthChecks,
}

/// The mapping store is the only dependency worth probing.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub store: StoreProbe,
}

#[derive(Debug, Serialize)]
pub struct StoreProbe {
    pub status: ProbeStatus,
    pub backend: &'static str,
    pub message: String,
}

impl StoreProbe {
    pub fn new(backend: &'static str, reachable: bool) -> Self {
        let (status, verdict) = if reachable {
            (ProbeStatus::Ok, "reachable")
        } else {
            (ProbeStatus::Error, "unreachable")
        };

        Self {
            status,
            backend,
            message: format!("{} {}", backend, verdict),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == ProbeStatus::Ok
    }
}
