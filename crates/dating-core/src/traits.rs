//! Traits shared across layers.

use async_trait::async_trait;

/// Converts a domain value into another shape, typically a DTO.
pub trait Mapper<From, To> {
    fn map(from: From) -> To;
}

/// A dependency the readiness endpoint can probe.
#[async_trait]
pub trait HealthCheck: Send + Sync {
    /// Short name reported alongside the status, e.g. `mysql`.
    fn name(&self) -> &str;

    async fn check(&self) -> HealthStatus;
}

/// Outcome of a health probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    Healthy,
    /// Serving, with a reason worth reporting.
    Degraded(String),
    Unhealthy(String),
}

impl HealthStatus {
    #[must_use]
    pub const fn is_healthy(&self) -> bool {
        matches!(self, Self::Healthy)
    }

    /// Whether the service should be taken out of rotation.
    #[must_use]
    pub const fn is_unhealthy(&self) -> bool {
        matches!(self, Self::Unhealthy(_))
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Degraded(_) => "degraded",
            Self::Unhealthy(_) => "unhealthy",
        }
    }

    /// The reason attached to a degraded or unhealthy status.
    #[must_use]
    pub fn into_detail(self) -> Option<String> {
        match self {
            Self::Healthy => None,
            Self::Degraded(reason) | Self::Unhealthy(reason) => Some(reason),
        }
    }
}
