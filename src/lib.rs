//! Purpose: Client bridge for the Forge toolchain engine's FFI service.
//! Exports: `api` (client, errors, registry), `proto` (message shapes).
//! Role: Marshal/unmarshal discipline around the engine's byte-buffer entry
//! point; the engine's operations themselves live behind the boundary.
//! Invariants: The `ERROR` sentinel convention is the only failure channel
//! on the wire and is preserved bit-exactly.
//! Invariants: Dispatch is synchronous; no retry, timeout, or cancellation.
pub mod api;
pub mod core;
pub mod proto;

#[cfg(feature = "native")]
pub mod native;
