//! Purpose: Static method table mapping operation names to message factories.
//! Exports: `SERVICE_NAME`, `resolve_request`, `resolve_response`, `method_names`.
//! Role: Leaf lookup layer consulted by the dispatch bridge before any
//! foreign invocation.
//! Invariants: Built once, read-only, safe for unsynchronized concurrent reads.
//! Invariants: Matching is exact and case-sensitive; an unregistered name is
//! `UnknownMethod`, never a silent default shape.

use crate::core::error::{Error, ErrorKind};
use crate::proto::*;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Namespace accepted in the qualified operation form, e.g.
/// `"ForgeService.Ping"`. The bare form (`"Ping"`) is equivalent.
pub const SERVICE_NAME: &str = "ForgeService";

/// Zero-argument constructor of an empty message of the registered shape.
pub type MessageFactory = fn() -> Box<dyn AnyMessage>;

struct MethodEntry {
    name: &'static str,
    request: MessageFactory,
    response: MessageFactory,
}

fn empty<M>() -> Box<dyn AnyMessage>
where
    M: prost::Message + Default + 'static,
{
    Box::new(M::default())
}

// Aliased shapes are intentional: ListOptions takes ParseProgram's request,
// ExecArtifact returns ExecProgram's result, GetFullSchemaType returns
// GetSchemaType's result.
static METHODS: &[MethodEntry] = &[
    MethodEntry {
        name: "Ping",
        request: empty::<PingArgs>,
        response: empty::<PingResult>,
    },
    MethodEntry {
        name: "ParseProgram",
        request: empty::<ParseProgramArgs>,
        response: empty::<ParseProgramResult>,
    },
    MethodEntry {
        name: "ExecProgram",
        request: empty::<ExecProgramArgs>,
        response: empty::<ExecProgramResult>,
    },
    MethodEntry {
        name: "BuildProgram",
        request: empty::<BuildProgramArgs>,
        response: empty::<BuildProgramResult>,
    },
    MethodEntry {
        name: "ExecArtifact",
        request: empty::<ExecArtifactArgs>,
        response: empty::<ExecProgramResult>,
    },
    MethodEntry {
        name: "ParseFile",
        request: empty::<ParseFileArgs>,
        response: empty::<ParseFileResult>,
    },
    MethodEntry {
        name: "LoadPackage",
        request: empty::<LoadPackageArgs>,
        response: empty::<LoadPackageResult>,
    },
    MethodEntry {
        name: "ListOptions",
        request: empty::<ParseProgramArgs>,
        response: empty::<ListOptionsResult>,
    },
    MethodEntry {
        name: "ListVariables",
        request: empty::<ListVariablesArgs>,
        response: empty::<ListVariablesResult>,
    },
    MethodEntry {
        name: "FormatCode",
        request: empty::<FormatCodeArgs>,
        response: empty::<FormatCodeResult>,
    },
    MethodEntry {
        name: "FormatPath",
        request: empty::<FormatPathArgs>,
        response: empty::<FormatPathResult>,
    },
    MethodEntry {
        name: "LintPath",
        request: empty::<LintPathArgs>,
        response: empty::<LintPathResult>,
    },
    MethodEntry {
        name: "OverrideFile",
        request: empty::<OverrideFileArgs>,
        response: empty::<OverrideFileResult>,
    },
    MethodEntry {
        name: "GetSchemaType",
        request: empty::<GetSchemaTypeArgs>,
        response: empty::<GetSchemaTypeResult>,
    },
    MethodEntry {
        name: "GetFullSchemaType",
        request: empty::<GetFullSchemaTypeArgs>,
        response: empty::<GetSchemaTypeResult>,
    },
    MethodEntry {
        name: "ValidateCode",
        request: empty::<ValidateCodeArgs>,
        response: empty::<ValidateCodeResult>,
    },
    MethodEntry {
        name: "ListDepFiles",
        request: empty::<ListDepFilesArgs>,
        response: empty::<ListDepFilesResult>,
    },
    MethodEntry {
        name: "LoadSettingsFiles",
        request: empty::<LoadSettingsFilesArgs>,
        response: empty::<LoadSettingsFilesResult>,
    },
    MethodEntry {
        name: "Rename",
        request: empty::<RenameArgs>,
        response: empty::<RenameResult>,
    },
    MethodEntry {
        name: "RenameCode",
        request: empty::<RenameCodeArgs>,
        response: empty::<RenameCodeResult>,
    },
    MethodEntry {
        name: "Test",
        request: empty::<TestArgs>,
        response: empty::<TestResult>,
    },
];

static BY_NAME: LazyLock<HashMap<&'static str, &'static MethodEntry>> = LazyLock::new(|| {
    METHODS.iter().map(|entry| (entry.name, entry)).collect()
});

fn lookup(name: &str) -> Result<&'static MethodEntry, Error> {
    let bare = name
        .strip_prefix(SERVICE_NAME)
        .and_then(|rest| rest.strip_prefix('.'))
        .unwrap_or(name);
    BY_NAME.get(bare).copied().ok_or_else(|| {
        Error::new(ErrorKind::UnknownMethod)
            .with_message("unknown method")
            .with_method(name)
    })
}

/// Resolve the request-message constructor for `name` (bare or namespaced).
pub fn resolve_request(name: &str) -> Result<MessageFactory, Error> {
    lookup(name).map(|entry| entry.request)
}

/// Resolve the response-message constructor for `name` (bare or namespaced).
pub fn resolve_response(name: &str) -> Result<MessageFactory, Error> {
    lookup(name).map(|entry| entry.response)
}

/// Canonical names of every registered operation, in table order.
pub fn method_names() -> impl Iterator<Item = &'static str> {
    METHODS.iter().map(|entry| entry.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::{ExecProgramResult, GetSchemaTypeResult, ParseProgramArgs};

    #[test]
    fn every_registered_name_resolves_in_both_forms() {
        for name in method_names() {
            resolve_request(name).expect("request factory");
            resolve_response(name).expect("response factory");
            let qualified = format!("{SERVICE_NAME}.{name}");
            resolve_request(&qualified).expect("request factory");
            resolve_response(&qualified).expect("response factory");
        }
    }

    #[test]
    fn unknown_name_fails_in_both_resolvers() {
        for name in ["NoSuchOp", "ForgeService.NoSuchOp", "ping", ""] {
            let err = resolve_request(name).expect_err("err");
            assert_eq!(err.kind(), ErrorKind::UnknownMethod);
            let err = resolve_response(name).expect_err("err");
            assert_eq!(err.kind(), ErrorKind::UnknownMethod);
            assert_eq!(err.method(), Some(name));
        }
    }

    #[test]
    fn foreign_namespace_does_not_resolve() {
        let err = resolve_response("OtherService.Ping").expect_err("err");
        assert_eq!(err.kind(), ErrorKind::UnknownMethod);
    }

    #[test]
    fn namespaced_and_bare_forms_share_the_schema() {
        let bare = (resolve_response("Ping").expect("factory"))();
        let qualified = (resolve_response("ForgeService.Ping").expect("factory"))();
        assert!(bare.as_any().is::<crate::proto::PingResult>());
        assert!(qualified.as_any().is::<crate::proto::PingResult>());
    }

    #[test]
    fn exec_artifact_shares_exec_program_result() {
        let response = (resolve_response("ExecArtifact").expect("factory"))();
        assert!(response.as_any().is::<ExecProgramResult>());
    }

    #[test]
    fn list_options_shares_parse_program_request() {
        let request = (resolve_request("ListOptions").expect("factory"))();
        assert!(request.as_any().is::<ParseProgramArgs>());
    }

    #[test]
    fn get_full_schema_type_shares_schema_result() {
        let response = (resolve_response("GetFullSchemaType").expect("factory"))();
        assert!(response.as_any().is::<GetSchemaTypeResult>());
    }

    #[test]
    fn registry_covers_the_documented_operation_set() {
        let names: Vec<_> = method_names().collect();
        assert_eq!(names.len(), 21);
        assert!(names.contains(&"Ping"));
        assert!(names.contains(&"Test"));
    }
}
