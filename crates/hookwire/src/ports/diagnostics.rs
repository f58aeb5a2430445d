//! Diagnostics Port
//!
//! Where the lenient metadata decoders report what they swallowed.
//! The sink is passed in explicitly so callers and tests pick it.

use tracing::error;
use uuid::Uuid;

use crate::domain::value_objects::HookType;

/// Receiver for non-fatal decode failures
///
/// Implementations are shared between concurrent dispatches and must
/// neither block nor fail.
pub trait DiagnosticSink: Send + Sync {
    /// Stored meta of `hook_id` could not be decoded
    fn metadata_decode_failed(
        &self,
        hook_id: Uuid,
        hook_type: HookType,
        error: &serde_json::Error,
    );
}

/// Sink that emits a `tracing` error event
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn metadata_decode_failed(
        &self,
        hook_id: Uuid,
        hook_type: HookType,
        error: &serde_json::Error,
    ) {
        error!(
            hook_id = %hook_id,
            hook_type = %hook_type,
            error = %error,
            "Failed to decode webhook meta"
        );
    }
}
