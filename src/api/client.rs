//! Purpose: Dispatch bridge executing one engine call end to end.
//! Exports: `EngineTransport`, `EngineClient`, `ApiResult`.
//! Role: Translate the boundary's byte-buffer ambiguity into typed results.
//! Invariants: Unknown names fail before the transport is touched.
//! Invariants: Reply bytes are classified exactly once, via `BoundaryReply`.
//! Invariants: No retry, recovery, or fallback; failures surface as-is.

use crate::core::boundary::BoundaryReply;
use crate::core::error::{Error, ErrorKind};
use crate::core::registry;
use crate::proto::*;
use bstr::ByteSlice;
use tracing::debug;

pub type ApiResult<T> = Result<T, Error>;

/// The engine's single exported entry point.
///
/// `invoke` is synchronous and blocking; it returns only when the engine has
/// produced a complete reply buffer (either a serialized response or an
/// `ERROR`-prefixed failure payload). There is no partial-result, progress,
/// or cancellation channel. A call that never returns blocks its caller
/// indefinitely; bounded latency has to be imposed outside this layer.
pub trait EngineTransport: Send + Sync {
    fn invoke(&self, method: &[u8], request: &[u8]) -> Vec<u8>;
}

/// Client for the Forge engine service.
///
/// Each call is independent and stateless apart from reading the immutable
/// method registry, so one client may be shared across threads freely.
/// Whether the engine itself tolerates concurrent entry is an external
/// contract: if the linked engine is not reentrant, callers must serialize
/// `call` invocations themselves (e.g. behind a mutex).
pub struct EngineClient {
    transport: Box<dyn EngineTransport>,
}

impl EngineClient {
    /// Client backed by the linked engine library.
    #[cfg(feature = "native")]
    pub fn new() -> Self {
        Self::with_transport(Box::new(crate::native::NativeEngine::new()))
    }

    pub fn with_transport(transport: Box<dyn EngineTransport>) -> Self {
        Self { transport }
    }

    /// Execute one call: encode, invoke, classify, decode.
    ///
    /// The request must already be an instance of the shape registered for
    /// `name` (typically built via [`registry::resolve_request`] or the typed
    /// methods below); shape compatibility beyond what encoding enforces is
    /// the caller's responsibility.
    pub fn call_dynamic(&self, name: &str, args: &dyn AnyMessage) -> ApiResult<Box<dyn AnyMessage>> {
        // Resolving first makes UnknownMethod observable before any foreign
        // invocation side effect.
        let response_factory = registry::resolve_response(name)?;
        let request = args.encode_bytes();
        debug!(method = name, request_len = request.len(), "dispatching engine call");
        let reply = self.transport.invoke(name.as_bytes(), &request);
        match BoundaryReply::classify(reply) {
            BoundaryReply::Failure(payload) => {
                debug!(method = name, "engine reported failure");
                Err(Error::new(ErrorKind::EngineError)
                    .with_message(payload.to_str_lossy())
                    .with_method(name))
            }
            BoundaryReply::Success(bytes) => {
                let mut response = response_factory();
                response.merge_bytes(&bytes).map_err(|err| {
                    Error::new(ErrorKind::MalformedResponse)
                        .with_message("failed to decode engine reply")
                        .with_method(name)
                        .with_source(err)
                })?;
                Ok(response)
            }
        }
    }

    fn call<R>(&self, name: &str, args: &dyn AnyMessage) -> ApiResult<R>
    where
        R: prost::Message + Default + 'static,
    {
        let response = self.call_dynamic(name, args)?;
        response
            .into_any()
            .downcast::<R>()
            .map(|response| *response)
            .map_err(|_| {
                Error::new(ErrorKind::MalformedResponse)
                    .with_message("response did not match the registered shape")
                    .with_method(name)
            })
    }

    pub fn ping(&self, args: &PingArgs) -> ApiResult<PingResult> {
        self.call("ForgeService.Ping", args)
    }

    pub fn parse_program(&self, args: &ParseProgramArgs) -> ApiResult<ParseProgramResult> {
        self.call("ForgeService.ParseProgram", args)
    }

    pub fn exec_program(&self, args: &ExecProgramArgs) -> ApiResult<ExecProgramResult> {
        self.call("ForgeService.ExecProgram", args)
    }

    pub fn build_program(&self, args: &BuildProgramArgs) -> ApiResult<BuildProgramResult> {
        self.call("ForgeService.BuildProgram", args)
    }

    /// Same result record as [`exec_program`](Self::exec_program); only the
    /// invocation path differs.
    pub fn exec_artifact(&self, args: &ExecArtifactArgs) -> ApiResult<ExecProgramResult> {
        self.call("ForgeService.ExecArtifact", args)
    }

    pub fn parse_file(&self, args: &ParseFileArgs) -> ApiResult<ParseFileResult> {
        self.call("ForgeService.ParseFile", args)
    }

    pub fn load_package(&self, args: &LoadPackageArgs) -> ApiResult<LoadPackageResult> {
        self.call("ForgeService.LoadPackage", args)
    }

    pub fn list_options(&self, args: &ParseProgramArgs) -> ApiResult<ListOptionsResult> {
        self.call("ForgeService.ListOptions", args)
    }

    pub fn list_variables(&self, args: &ListVariablesArgs) -> ApiResult<ListVariablesResult> {
        self.call("ForgeService.ListVariables", args)
    }

    pub fn format_code(&self, args: &FormatCodeArgs) -> ApiResult<FormatCodeResult> {
        self.call("ForgeService.FormatCode", args)
    }

    pub fn format_path(&self, args: &FormatPathArgs) -> ApiResult<FormatPathResult> {
        self.call("ForgeService.FormatPath", args)
    }

    pub fn lint_path(&self, args: &LintPathArgs) -> ApiResult<LintPathResult> {
        self.call("ForgeService.LintPath", args)
    }

    pub fn override_file(&self, args: &OverrideFileArgs) -> ApiResult<OverrideFileResult> {
        self.call("ForgeService.OverrideFile", args)
    }

    pub fn get_schema_type(&self, args: &GetSchemaTypeArgs) -> ApiResult<GetSchemaTypeResult> {
        self.call("ForgeService.GetSchemaType", args)
    }

    pub fn get_full_schema_type(
        &self,
        args: &GetFullSchemaTypeArgs,
    ) -> ApiResult<GetSchemaTypeResult> {
        self.call("ForgeService.GetFullSchemaType", args)
    }

    pub fn validate_code(&self, args: &ValidateCodeArgs) -> ApiResult<ValidateCodeResult> {
        self.call("ForgeService.ValidateCode", args)
    }

    pub fn list_dep_files(&self, args: &ListDepFilesArgs) -> ApiResult<ListDepFilesResult> {
        self.call("ForgeService.ListDepFiles", args)
    }

    pub fn load_settings_files(
        &self,
        args: &LoadSettingsFilesArgs,
    ) -> ApiResult<LoadSettingsFilesResult> {
        self.call("ForgeService.LoadSettingsFiles", args)
    }

    pub fn rename(&self, args: &RenameArgs) -> ApiResult<RenameResult> {
        self.call("ForgeService.Rename", args)
    }

    pub fn rename_code(&self, args: &RenameCodeArgs) -> ApiResult<RenameCodeResult> {
        self.call("ForgeService.RenameCode", args)
    }

    pub fn test(&self, args: &TestArgs) -> ApiResult<TestResult> {
        self.call("ForgeService.Test", args)
    }
}

#[cfg(feature = "native")]
impl Default for EngineClient {
    fn default() -> Self {
        Self::new()
    }
}
