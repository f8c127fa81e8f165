//! Module composition engine.
//!
//! Merges an ordered selection of contract modules into one syntactically
//! valid source unit: each module body is cleaned of comments, the capability
//! traits declared by the modules are collected into a single composite
//! contract header, and the cleaned bodies are appended in selection order.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::{ContractModule, Error};

static BLOCK_COMMENTS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("regex: block comments"));
static LINE_COMMENTS: Lazy<Regex> = Lazy::new(|| Regex::new(r"//.*").expect("regex: line comments"));
static BLANK_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").expect("regex: blank runs"));
static CAPABILITY_DECL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"pub trait ([A-Za-z_][A-Za-z0-9_]*)").expect("regex: capability"));

/// Base capability inherited when no module declares one.
const BASE_CAPABILITY: &str = "Clone";

/// Contract emitted for an empty selection.
const PLACEHOLDER_CONTRACT: &str = r#"// No modules selected
#[multiversx_sc::contract]
pub trait EmptyContract {
    #[init]
    fn init(&self) {
        // Initialize contract
    }
}"#;

const HEADER_PREFIX: &str = r#"// MultiversX Smart Contract
// Composed with mxcraft

#[multiversx_sc::contract]
pub trait ComposedContract: "#;

const HEADER_BODY: &str = r#"{
    #[init]
    fn init(&self) {
        // Initialize contract state
    }

    #[view(getContractInfo)]
    fn get_contract_info(&self) -> ManagedBuffer {
        ManagedBuffer::from(b"MultiversX contract composed with mxcraft")
    }
}"#;

/// A contract assembled from an ordered module selection.
///
/// Value object: created fresh on every composition, identical id sequences
/// always produce byte-identical source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssembledContract {
    pub ordered_module_ids: Vec<String>,
    pub generated_source: String,
}

/// An ordered selection of contract modules.
///
/// Order is insertion/drag order and is load-bearing: it determines both the
/// composite header's inheritance list and the order of the appended bodies.
#[derive(Debug, Clone, Default, derive_more::Deref, derive_more::DerefMut, derive_more::From)]
pub struct Selection(Vec<ContractModule>);

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a module to the end of the selection.
    pub fn add(&mut self, module: ContractModule) {
        self.0.push(module);
    }

    /// Remove and return the module at `index`.
    pub fn remove(&mut self, index: usize) -> Result<ContractModule, Error> {
        if index >= self.0.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.0.len(),
            });
        }
        Ok(self.0.remove(index))
    }

    /// Relocate the module at `drag` to position `hover`.
    ///
    /// All other modules keep their relative order. Fails when either index
    /// is outside the selection.
    pub fn move_module(&mut self, drag: usize, hover: usize) -> Result<(), Error> {
        let len = self.0.len();
        for index in [drag, hover] {
            if index >= len {
                return Err(Error::IndexOutOfRange { index, len });
            }
        }
        let module = self.0.remove(drag);
        self.0.insert(hover, module);
        Ok(())
    }

    /// Compose the selection into a single contract source unit.
    ///
    /// An empty selection yields a fixed placeholder contract. A module whose
    /// template declares no `pub trait` capability contributes no identifier
    /// to the composite header, but its cleaned body is still appended; a
    /// malformed module never aborts composition for the rest of the batch.
    pub fn compose(&self) -> AssembledContract {
        let ordered_module_ids = self.0.iter().map(|module| module.id.clone()).collect();

        if self.0.is_empty() {
            return AssembledContract {
                ordered_module_ids,
                generated_source: PLACEHOLDER_CONTRACT.to_string(),
            };
        }

        let mut capabilities: Vec<&str> = Vec::new();
        for module in &self.0 {
            match capability_ident(&module.source_template) {
                Some(ident) => {
                    if !capabilities.contains(&ident) {
                        capabilities.push(ident);
                    }
                }
                None => {
                    tracing::debug!(
                        module = %module.id,
                        "template declares no capability; body appended without inheritance"
                    );
                }
            }
        }

        let inherits = if capabilities.is_empty() {
            BASE_CAPABILITY.to_string()
        } else {
            capabilities.join(" + ")
        };

        let bodies: Vec<String> = self
            .0
            .iter()
            .map(|module| clean_template(&module.source_template))
            .collect();

        let generated_source = format!(
            "{HEADER_PREFIX}{inherits}\n{HEADER_BODY}\n\n// Composed contract modules\n{}",
            bodies.join("\n\n")
        );

        AssembledContract {
            ordered_module_ids,
            generated_source,
        }
    }
}

/// Strip block and line comments and collapse blank-line runs.
fn clean_template(template: &str) -> String {
    let cleaned = BLOCK_COMMENTS.replace_all(template, "");
    let cleaned = LINE_COMMENTS.replace_all(&cleaned, "");
    let cleaned = BLANK_RUNS.replace_all(&cleaned, "\n");
    cleaned.trim().to_string()
}

/// Extract the capability identifier from the first `pub trait` declaration.
fn capability_ident(template: &str) -> Option<&str> {
    CAPABILITY_DECL
        .captures(template)
        .map(|captures| captures.get(1).expect("capability capture group").as_str())
}
