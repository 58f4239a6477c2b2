//! Purpose: Message shapes for every registered engine operation.
//! Exports: `AnyMessage` plus the `*Args` / `*Result` structs.
//! Role: Generated-style protobuf surface; the bridge treats each shape as
//! opaque except for encode/decode.
//! Invariants: Encoding is prost's canonical field-tagged binary format.
//! Invariants: Every operation has exactly one request and one response shape;
//! aliased shapes (ExecArtifact, ListOptions, GetFullSchemaType) are shared,
//! not duplicated.

use prost::Message;
use std::any::Any;
use std::collections::HashMap;
use std::fmt;

/// Object-safe view of a schema message, for registry factories and the
/// dynamic dispatch path. Blanket-implemented for every prost message.
pub trait AnyMessage: fmt::Debug + Send {
    fn encode_bytes(&self) -> Vec<u8>;
    fn merge_bytes(&mut self, bytes: &[u8]) -> Result<(), prost::DecodeError>;
    fn as_any(&self) -> &dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<M> AnyMessage for M
where
    M: Message + Default + 'static,
{
    fn encode_bytes(&self) -> Vec<u8> {
        self.encode_to_vec()
    }

    fn merge_bytes(&mut self, bytes: &[u8]) -> Result<(), prost::DecodeError> {
        self.merge(bytes)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

// Shared submessages.

#[derive(Clone, PartialEq, prost::Message)]
pub struct Diagnostic {
    #[prost(string, tag = "1")]
    pub level: String,
    #[prost(string, tag = "2")]
    pub message: String,
    #[prost(string, tag = "3")]
    pub file: String,
    #[prost(int64, tag = "4")]
    pub line: i64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct KvPair {
    #[prost(string, tag = "1")]
    pub key: String,
    #[prost(string, tag = "2")]
    pub value: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct PingArgs {
    #[prost(string, tag = "1")]
    pub value: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct PingResult {
    #[prost(string, tag = "1")]
    pub value: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ParseProgramArgs {
    #[prost(string, repeated, tag = "1")]
    pub paths: Vec<String>,
    #[prost(string, repeated, tag = "2")]
    pub sources: Vec<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ParseProgramResult {
    /// Program AST serialized as JSON text.
    #[prost(string, tag = "1")]
    pub ast_json: String,
    /// Files touched during the parse, in load order.
    #[prost(string, repeated, tag = "2")]
    pub paths: Vec<String>,
    #[prost(message, repeated, tag = "3")]
    pub errors: Vec<Diagnostic>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ParseFileArgs {
    #[prost(string, tag = "1")]
    pub path: String,
    /// Inline source; when empty the engine reads `path` from disk.
    #[prost(string, tag = "2")]
    pub source: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ParseFileResult {
    #[prost(string, tag = "1")]
    pub ast_json: String,
    #[prost(string, repeated, tag = "2")]
    pub deps: Vec<String>,
    #[prost(message, repeated, tag = "3")]
    pub errors: Vec<Diagnostic>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ExecProgramArgs {
    #[prost(string, tag = "1")]
    pub work_dir: String,
    #[prost(string, repeated, tag = "2")]
    pub file_list: Vec<String>,
    #[prost(message, repeated, tag = "3")]
    pub args: Vec<KvPair>,
    #[prost(string, repeated, tag = "4")]
    pub overrides: Vec<String>,
    #[prost(bool, tag = "5")]
    pub disable_none: bool,
    #[prost(bool, tag = "6")]
    pub sort_keys: bool,
}

/// Execution result record. Shared by ExecProgram and ExecArtifact, which
/// differ only in invocation path.
#[derive(Clone, PartialEq, prost::Message)]
pub struct ExecProgramResult {
    #[prost(string, tag = "1")]
    pub json_result: String,
    #[prost(string, tag = "2")]
    pub yaml_result: String,
    #[prost(string, tag = "3")]
    pub log_message: String,
    #[prost(string, tag = "4")]
    pub err_message: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct BuildProgramArgs {
    #[prost(message, optional, tag = "1")]
    pub exec_args: Option<ExecProgramArgs>,
    #[prost(string, tag = "2")]
    pub output: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct BuildProgramResult {
    /// Path of the built artifact.
    #[prost(string, tag = "1")]
    pub path: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ExecArtifactArgs {
    #[prost(string, tag = "1")]
    pub path: String,
    #[prost(message, optional, tag = "2")]
    pub exec_args: Option<ExecProgramArgs>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct LoadPackageArgs {
    #[prost(message, optional, tag = "1")]
    pub parse_args: Option<ParseProgramArgs>,
    #[prost(bool, tag = "2")]
    pub resolve_ast: bool,
    #[prost(bool, tag = "3")]
    pub with_ast_index: bool,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct LoadPackageResult {
    #[prost(string, tag = "1")]
    pub program_json: String,
    #[prost(string, repeated, tag = "2")]
    pub paths: Vec<String>,
    #[prost(message, repeated, tag = "3")]
    pub parse_errors: Vec<Diagnostic>,
    #[prost(message, repeated, tag = "4")]
    pub type_errors: Vec<Diagnostic>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct OptionHelp {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub type_name: String,
    #[prost(bool, tag = "3")]
    pub required: bool,
    #[prost(string, tag = "4")]
    pub default_value: String,
    #[prost(string, tag = "5")]
    pub help: String,
}

/// ListOptions reuses [`ParseProgramArgs`] as its request shape.
#[derive(Clone, PartialEq, prost::Message)]
pub struct ListOptionsResult {
    #[prost(message, repeated, tag = "1")]
    pub options: Vec<OptionHelp>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ListVariablesArgs {
    #[prost(string, repeated, tag = "1")]
    pub files: Vec<String>,
    #[prost(string, repeated, tag = "2")]
    pub specs: Vec<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Variable {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub value: String,
    #[prost(string, tag = "3")]
    pub type_name: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ListVariablesResult {
    #[prost(message, repeated, tag = "1")]
    pub variables: Vec<Variable>,
    #[prost(string, repeated, tag = "2")]
    pub unsupported_codes: Vec<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct FormatCodeArgs {
    #[prost(string, tag = "1")]
    pub source: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct FormatCodeResult {
    #[prost(string, tag = "1")]
    pub formatted: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct FormatPathArgs {
    #[prost(string, tag = "1")]
    pub path: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct FormatPathResult {
    #[prost(string, repeated, tag = "1")]
    pub changed_paths: Vec<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct LintPathArgs {
    #[prost(string, repeated, tag = "1")]
    pub paths: Vec<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct LintPathResult {
    #[prost(string, repeated, tag = "1")]
    pub results: Vec<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct OverrideFileArgs {
    #[prost(string, tag = "1")]
    pub file: String,
    #[prost(string, repeated, tag = "2")]
    pub specs: Vec<String>,
    #[prost(string, repeated, tag = "3")]
    pub import_paths: Vec<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct OverrideFileResult {
    #[prost(bool, tag = "1")]
    pub result: bool,
    #[prost(message, repeated, tag = "2")]
    pub parse_errors: Vec<Diagnostic>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct SchemaType {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub doc: String,
    #[prost(string, repeated, tag = "3")]
    pub field_names: Vec<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GetSchemaTypeArgs {
    #[prost(string, tag = "1")]
    pub file: String,
    #[prost(string, tag = "2")]
    pub code: String,
    /// Empty means all schemas in scope.
    #[prost(string, tag = "3")]
    pub schema_name: String,
}

/// Shared by GetSchemaType and GetFullSchemaType.
#[derive(Clone, PartialEq, prost::Message)]
pub struct GetSchemaTypeResult {
    #[prost(message, repeated, tag = "1")]
    pub schema_type_list: Vec<SchemaType>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GetFullSchemaTypeArgs {
    #[prost(message, optional, tag = "1")]
    pub exec_args: Option<ExecProgramArgs>,
    #[prost(string, tag = "2")]
    pub schema_name: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ValidateCodeArgs {
    #[prost(string, tag = "1")]
    pub datafile: String,
    #[prost(string, tag = "2")]
    pub data: String,
    #[prost(string, tag = "3")]
    pub file: String,
    #[prost(string, tag = "4")]
    pub code: String,
    #[prost(string, tag = "5")]
    pub schema: String,
    #[prost(string, tag = "6")]
    pub attribute_name: String,
    #[prost(string, tag = "7")]
    pub format: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ValidateCodeResult {
    #[prost(bool, tag = "1")]
    pub success: bool,
    #[prost(string, tag = "2")]
    pub err_message: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ListDepFilesArgs {
    #[prost(string, tag = "1")]
    pub work_dir: String,
    #[prost(bool, tag = "2")]
    pub use_abs_path: bool,
    #[prost(bool, tag = "3")]
    pub include_all: bool,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ListDepFilesResult {
    #[prost(string, tag = "1")]
    pub pkg_root: String,
    #[prost(string, tag = "2")]
    pub pkg_path: String,
    #[prost(string, repeated, tag = "3")]
    pub files: Vec<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct CliConfig {
    #[prost(string, repeated, tag = "1")]
    pub files: Vec<String>,
    #[prost(string, tag = "2")]
    pub output: String,
    #[prost(string, repeated, tag = "3")]
    pub overrides: Vec<String>,
    #[prost(bool, tag = "4")]
    pub disable_none: bool,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct LoadSettingsFilesArgs {
    #[prost(string, tag = "1")]
    pub work_dir: String,
    #[prost(string, repeated, tag = "2")]
    pub files: Vec<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct LoadSettingsFilesResult {
    #[prost(message, optional, tag = "1")]
    pub cli_config: Option<CliConfig>,
    #[prost(message, repeated, tag = "2")]
    pub cli_options: Vec<KvPair>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct RenameArgs {
    #[prost(string, tag = "1")]
    pub package_root: String,
    #[prost(string, tag = "2")]
    pub symbol_path: String,
    #[prost(string, repeated, tag = "3")]
    pub file_paths: Vec<String>,
    #[prost(string, tag = "4")]
    pub new_name: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct RenameResult {
    #[prost(string, repeated, tag = "1")]
    pub changed_files: Vec<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct RenameCodeArgs {
    #[prost(string, tag = "1")]
    pub package_root: String,
    #[prost(string, tag = "2")]
    pub symbol_path: String,
    #[prost(map = "string, string", tag = "3")]
    pub source_codes: HashMap<String, String>,
    #[prost(string, tag = "4")]
    pub new_name: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct RenameCodeResult {
    #[prost(map = "string, string", tag = "1")]
    pub changed_codes: HashMap<String, String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct TestArgs {
    #[prost(message, optional, tag = "1")]
    pub exec_args: Option<ExecProgramArgs>,
    #[prost(string, repeated, tag = "2")]
    pub pkg_list: Vec<String>,
    #[prost(string, tag = "3")]
    pub run_regexp: String,
    #[prost(bool, tag = "4")]
    pub fail_fast: bool,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct TestCaseInfo {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub error: String,
    #[prost(uint64, tag = "3")]
    pub duration_us: u64,
    #[prost(string, tag = "4")]
    pub log_message: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct TestResult {
    #[prost(message, repeated, tag = "1")]
    pub info: Vec<TestCaseInfo>,
}
