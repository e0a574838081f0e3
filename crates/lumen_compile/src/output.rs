//! Output bundle produced by a successful component compilation.

use lumen_diagnostics::Diagnostic;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One half of a compiled component: generated code with its source map
/// and the files it depends on.
///
/// A compilation produces two of these, one for the program logic and one
/// for the styles. The source map is kept as untyped JSON; the cache and
/// pipeline stages pass it through to the bundler without interpreting it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratedOutput {
    /// The generated JavaScript or CSS code.
    pub code: String,

    /// Source map for the generated code, if the compiler produced one.
    pub map: Option<serde_json::Value>,

    /// Files whose content influenced this output (e.g. imported style
    /// sheets), used by watchers to trigger recompilation.
    pub dependencies: Vec<PathBuf>,
}

impl GeneratedOutput {
    /// Creates an output block from generated code with no map and no
    /// dependencies.
    pub fn from_code(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            map: None,
            dependencies: Vec::new(),
        }
    }
}

/// Metadata about one reactive variable or export of a compiled component.
///
/// Reported by the compiler for every top-level binding; hot-update stages
/// compare binding lists across generations to decide whether a component
/// can be patched in place or must be fully reloaded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    /// The variable name inside the component.
    pub name: String,

    /// The name it is exported under, if exported.
    pub export_name: Option<String>,

    /// Whether the generated code references this binding.
    pub referenced: bool,

    /// Whether the binding is mutated in place.
    pub mutated: bool,

    /// Whether the binding is reassigned.
    pub reassigned: bool,

    /// Whether consumers of the component may write to this binding.
    pub writable: bool,
}

impl Binding {
    /// Creates a binding with the given name and all flags cleared.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            export_name: None,
            referenced: false,
            mutated: false,
            reassigned: false,
            writable: false,
        }
    }
}

/// The complete raw result of compiling one component.
///
/// This is what a [`ComponentCompiler`](crate::ComponentCompiler) returns
/// on success. The descriptor cache copies these fields into a descriptor
/// without interpreting them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CompiledComponent {
    /// Generated program code, map, and dependencies.
    pub js: GeneratedOutput,

    /// Generated style code, map, and dependencies.
    pub css: GeneratedOutput,

    /// Warnings emitted during compilation.
    pub warnings: Vec<Diagnostic>,

    /// Binding metadata for the component's reactive variables and exports.
    pub bindings: Vec<Binding>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_code() {
        let out = GeneratedOutput::from_code("export default class App {}");
        assert!(out.map.is_none());
        assert!(out.dependencies.is_empty());
    }

    #[test]
    fn binding_new_clears_flags() {
        let b = Binding::new("count");
        assert_eq!(b.name, "count");
        assert!(b.export_name.is_none());
        assert!(!b.mutated && !b.reassigned && !b.referenced && !b.writable);
    }

    #[test]
    fn serde_roundtrip_with_map() {
        let compiled = CompiledComponent {
            js: GeneratedOutput {
                code: "console.log(1)".to_string(),
                map: Some(serde_json::json!({ "version": 3, "mappings": "AAAA" })),
                dependencies: vec![PathBuf::from("src/theme.css")],
            },
            ..CompiledComponent::default()
        };
        let json = serde_json::to_string(&compiled).unwrap();
        let back: CompiledComponent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, compiled);
    }
}
