//! User-facing notifications.

use tracing::{error, info};

/// Shows short notifications to the user.
pub trait AlertService: Send + Sync {
    fn success(&self, message: &str);

    fn error(&self, message: &str);

    fn message(&self, message: &str);
}

/// Alert service that writes notifications to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogAlertService;

impl AlertService for LogAlertService {
    fn success(&self, message: &str) {
        info!(target: "alert", kind = "success", "{}", message);
    }

    fn error(&self, message: &str) {
        error!(target: "alert", kind = "error", "{}", message);
    }

    fn message(&self, message: &str) {
        info!(target: "alert", kind = "message", "{}", message);
    }
}
