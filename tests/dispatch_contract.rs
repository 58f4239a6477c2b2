//! Purpose: End-to-end dispatch coverage against stub engine transports.
//! Exports: Integration tests only.
//! Role: Verify the call lifecycle (resolve, encode, invoke, classify,
//! decode) and the failure taxonomy from the caller's point of view.
//! Invariants: Stub transports record invocations so tests can observe
//! whether the boundary was crossed.

use forgelink::api::{EngineClient, EngineTransport, ErrorKind};
use forgelink::proto::{
    ExecProgramArgs, ExecProgramResult, ListOptionsResult, ParseProgramArgs, PingArgs, PingResult,
};
use prost::Message;
use std::sync::Arc;
use std::sync::Mutex;

struct StubEngine {
    reply: Vec<u8>,
    calls: Mutex<Vec<(Vec<u8>, Vec<u8>)>>,
}

impl StubEngine {
    fn new(reply: Vec<u8>) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.lock().expect("lock").len()
    }
}

impl EngineTransport for StubEngine {
    fn invoke(&self, method: &[u8], request: &[u8]) -> Vec<u8> {
        self.calls
            .lock()
            .expect("lock")
            .push((method.to_vec(), request.to_vec()));
        self.reply.clone()
    }
}

fn client_with(stub: Arc<StubEngine>) -> EngineClient {
    struct Shared(Arc<StubEngine>);
    impl EngineTransport for Shared {
        fn invoke(&self, method: &[u8], request: &[u8]) -> Vec<u8> {
            self.0.invoke(method, request)
        }
    }
    EngineClient::with_transport(Box::new(Shared(stub)))
}

#[test]
fn ping_round_trip_returns_typed_result() {
    let reply = PingResult {
        value: "pong".to_string(),
    };
    let stub = Arc::new(StubEngine::new(reply.encode_to_vec()));
    let client = client_with(stub.clone());

    let result = client
        .ping(&PingArgs {
            value: "pong".to_string(),
        })
        .expect("ping");
    assert_eq!(result.value, "pong");
    assert_eq!(stub.call_count(), 1);
}

#[test]
fn request_bytes_and_method_name_reach_the_engine() {
    let stub = Arc::new(StubEngine::new(ExecProgramResult::default().encode_to_vec()));
    let client = client_with(stub.clone());

    let args = ExecProgramArgs {
        work_dir: "/work".to_string(),
        file_list: vec!["main.fg".to_string()],
        ..Default::default()
    };
    client.exec_program(&args).expect("exec");

    let calls = stub.calls.lock().expect("lock");
    let (method, request) = &calls[0];
    assert_eq!(method.as_slice(), b"ForgeService.ExecProgram");
    let seen = ExecProgramArgs::decode(request.as_slice()).expect("decode request");
    assert_eq!(seen, args);
}

#[test]
fn engine_error_payload_surfaces_verbatim() {
    let stub = Arc::new(StubEngine::new(b"ERROR: file not found".to_vec()));
    let client = client_with(stub);

    let err = client
        .exec_program(&ExecProgramArgs::default())
        .expect_err("err");
    assert_eq!(err.kind(), ErrorKind::EngineError);
    let message = err.message().expect("message");
    assert!(message.contains("file not found"));
    // The sentinel itself stays in the diagnostic; the payload is opaque text.
    assert!(message.starts_with("ERROR"));
}

#[test]
fn bare_sentinel_reply_is_an_engine_error() {
    let stub = Arc::new(StubEngine::new(b"ERROR".to_vec()));
    let client = client_with(stub);

    let err = client.ping(&PingArgs::default()).expect_err("err");
    assert_eq!(err.kind(), ErrorKind::EngineError);
}

#[test]
fn unknown_method_fails_before_any_invocation() {
    let stub = Arc::new(StubEngine::new(PingResult::default().encode_to_vec()));
    let client = client_with(stub.clone());

    let err = client
        .call_dynamic("NoSuchOp", &PingArgs::default())
        .expect_err("err");
    assert_eq!(err.kind(), ErrorKind::UnknownMethod);
    assert_eq!(err.method(), Some("NoSuchOp"));
    assert_eq!(stub.call_count(), 0);
}

#[test]
fn truncated_reply_is_malformed_not_partial() {
    // Length-delimited field claiming five bytes with two present.
    let stub = Arc::new(StubEngine::new(vec![0x0a, 0x05, b'p', b'o']));
    let client = client_with(stub);

    let err = client.ping(&PingArgs::default()).expect_err("err");
    assert_eq!(err.kind(), ErrorKind::MalformedResponse);
}

#[test]
fn dynamic_path_uses_registry_shapes() {
    let reply = ListOptionsResult::default();
    let stub = Arc::new(StubEngine::new(reply.encode_to_vec()));
    let client = client_with(stub);

    // ListOptions borrows ParseProgram's request shape.
    let request = (forgelink::api::resolve_request("ListOptions").expect("factory"))();
    assert!(request.as_any().is::<ParseProgramArgs>());

    let response = client
        .call_dynamic("ForgeService.ListOptions", request.as_ref())
        .expect("call");
    assert!(response.as_any().is::<ListOptionsResult>());
}

#[test]
fn client_is_usable_from_multiple_threads() {
    let stub = Arc::new(StubEngine::new(PingResult::default().encode_to_vec()));
    let client = client_with(stub.clone());

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                client.ping(&PingArgs::default()).expect("ping");
            });
        }
    });
    assert_eq!(stub.call_count(), 4);
}
