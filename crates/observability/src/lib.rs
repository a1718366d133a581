//! Tracing/logging setup shared by binaries.

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use self::tracing::LogFormat;

/// Initialize process-wide human-readable logging.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(LogFormat::Text);
}

/// Initialize process-wide JSON logging.
pub fn init_json() {
    tracing::init(LogFormat::Json);
}
