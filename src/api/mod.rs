//! Purpose: Define the stable public Rust API boundary for forgelink.
//! Exports: Client, transport seam, errors, and registry lookups.
//! Role: Public, additive-only surface; hides internal module layout.
//! Invariants: This module is the only public path to the dispatch bridge.
//! Invariants: Message shapes stay reachable through `crate::proto`.

mod client;

pub use crate::core::boundary::{BoundaryReply, ERROR_SENTINEL};
pub use crate::core::error::{Error, ErrorKind};
pub use crate::core::registry::{
    MessageFactory, SERVICE_NAME, method_names, resolve_request, resolve_response,
};
pub use crate::proto::AnyMessage;
pub use client::{ApiResult, EngineClient, EngineTransport};
