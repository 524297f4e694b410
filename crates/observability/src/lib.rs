//! Tracing/logging setup shared by catalog embedders.

/// Initialize process-wide tracing with the `info` default filter.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init("info");
}

/// Tracing configuration (filters, layers).
pub mod tracing;
