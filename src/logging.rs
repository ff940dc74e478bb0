use std::time::Instant;
use uuid::Uuid;

/// Generate a correlation ID for tracing one normalization through the logs
pub fn generate_correlation_id() -> String {
    Uuid::new_v4().to_string()
}

/// Timer for measuring operation duration
pub struct OperationTimer {
    start: Instant,
    operation: String,
    req_id: String,
}

impl OperationTimer {
    pub fn new(operation: &str, req_id: &str) -> Self {
        Self {
            start: Instant::now(),
            operation: operation.to_string(),
            req_id: req_id.to_string(),
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    pub fn log_completion(&self, level: LogLevel, category: &str, message: &str) {
        let duration = self.elapsed_ms();
        match level {
            LogLevel::Debug => {
                tracing::debug!(
                    "{}:{} [{}:{}ms] [req_id:{}] {}",
                    self.get_layer(),
                    self.operation,
                    category,
                    duration,
                    self.req_id,
                    message
                );
            }
            LogLevel::Info => {
                tracing::info!(
                    "{}:{} [{}:{}ms] [req_id:{}] {}",
                    self.get_layer(),
                    self.operation,
                    category,
                    duration,
                    self.req_id,
                    message
                );
            }
            LogLevel::Warn => {
                tracing::warn!(
                    "{}:{} [{}:{}ms] [req_id:{}] {}",
                    self.get_layer(),
                    self.operation,
                    category,
                    duration,
                    self.req_id,
                    message
                );
            }
            LogLevel::Error => {
                tracing::error!(
                    "{}:{} [{}:{}ms] [req_id:{}] {}",
                    self.get_layer(),
                    self.operation,
                    category,
                    duration,
                    self.req_id,
                    message
                );
            }
        }
    }

    fn get_layer(&self) -> &str {
        if self.operation.starts_with("NORMALIZE:") {
            "NORMALIZE"
        } else if self.operation.starts_with("TABLE:") {
            "TABLE"
        } else {
            "UNKNOWN"
        }
    }
}

pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Standard error codes
pub mod error_codes {
    // Validation Errors
    pub const VAL_INVALID_FORMAT: &str = "VAL001";
    pub const VAL_MISSING_FIELD: &str = "VAL002";
    pub const VAL_LENGTH_VIOLATION: &str = "VAL003";

    // Business Logic Errors
    pub const BIZ_NOT_FOUND: &str = "BIZ001";
}
