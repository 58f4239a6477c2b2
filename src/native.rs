//! Purpose: Transport over the engine's exported C symbols (libforge_service).
//! Exports: `NativeEngine`.
//! Role: Production `EngineTransport`; bindings link the engine cdylib.
//! Invariants: Reply buffers are copied out and released through the engine's
//! own free function before returning.
//! Invariants: A null reply is folded into the `ERROR` sentinel convention;
//! the transport contract stays infallible bytes-in/bytes-out.

use crate::api::EngineTransport;

#[link(name = "forge_service")]
unsafe extern "C" {
    /// Single exported entry point: `(method, request) -> reply`.
    ///
    /// The engine owns the returned buffer; it must be released with
    /// `forge_service_free_buffer` after copying.
    fn forge_service_call_with_length(
        method: *const u8,
        method_len: usize,
        request: *const u8,
        request_len: usize,
        reply_len: *mut usize,
    ) -> *mut u8;

    fn forge_service_free_buffer(ptr: *mut u8, len: usize);
}

/// Transport backed by the linked engine library.
///
/// Calls block the invoking thread for the full duration of the engine call
/// (whole-program compilation can be long-running). The engine's reentrancy
/// is its own contract; see [`crate::api::EngineClient`] for the caller-side
/// serialization requirement.
#[derive(Clone, Copy, Debug, Default)]
pub struct NativeEngine {
    _priv: (),
}

impl NativeEngine {
    pub fn new() -> Self {
        Self { _priv: () }
    }
}

impl EngineTransport for NativeEngine {
    fn invoke(&self, method: &[u8], request: &[u8]) -> Vec<u8> {
        let mut reply_len = 0usize;
        let ptr = unsafe {
            forge_service_call_with_length(
                method.as_ptr(),
                method.len(),
                request.as_ptr(),
                request.len(),
                &mut reply_len,
            )
        };
        if ptr.is_null() {
            return b"ERROR: engine returned no reply".to_vec();
        }
        let reply = unsafe { std::slice::from_raw_parts(ptr, reply_len) }.to_vec();
        unsafe {
            forge_service_free_buffer(ptr, reply_len);
        }
        reply
    }
}
