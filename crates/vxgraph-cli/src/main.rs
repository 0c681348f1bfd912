//! OpenVX graph document CLI.
//!
//! Provides the `vxgraph` binary. Every subcommand goes through the same
//! [`EditorService`] the editor uses, so documents are fixed up and built
//! exactly as they would be in an editing session.
//!
//! Exit codes: 0 = success, 1 = validation or usage error, 3 = I/O error.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use vxgraph_core::{KernelRegistry, KernelSignature, ParamState, TypeRegistry};
use vxgraph_editor::{BuildDiagnostic, EditError, EditorConfig, EditorService, ErrorKind};

/// OpenVX graph document tools.
#[derive(Parser)]
#[command(name = "vxgraph", about = "OpenVX graph document tools")]
struct Cli {
    /// Number of undo checkpoints kept (overrides VXGRAPH_MAX_UNDO).
    #[arg(long, global = true)]
    max_undo: Option<usize>,

    /// Keep graph-local pass-through objects in the derived graphs.
    #[arg(long, global = true)]
    show_virtuals: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Create the default document and print its summary.
    New {
        /// Write the new document to this path.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Open a document, build it and print its summary with diagnostics.
    Summary {
        /// Path to the XML document.
        path: PathBuf,
    },

    /// List the known kernels with their parameter signatures.
    Kernels,

    /// Resolve a numeric value (decimal or 0x-prefixed hex) to its label.
    Label {
        value: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = EditorConfig::from_env();
    if let Some(depth) = cli.max_undo {
        config.max_undo = depth;
    }
    if cli.show_virtuals {
        config.show_virtuals = true;
    }

    tracing::debug!(max_undo = config.max_undo, show_virtuals = config.show_virtuals, "editor config");

    let exit_code = match cli.command.unwrap_or(Commands::New { output: None }) {
        Commands::New { output } => run_new(config, output),
        Commands::Summary { path } => run_summary(config, &path),
        Commands::Kernels => run_kernels(),
        Commands::Label { value } => run_label(&value),
    };
    process::exit(exit_code);
}

// ---------------------------------------------------------------------------
// Subcommands
// ---------------------------------------------------------------------------

/// Execute the `new` subcommand.
fn run_new(config: EditorConfig, output: Option<PathBuf>) -> i32 {
    let mut service = match EditorService::new(config) {
        Ok(s) => s,
        Err(e) => return report(&e),
    };
    tracing::info!(references = service.document().reference_count(), "created default document");
    if let Some(path) = output {
        if let Err(e) = service.save(&path) {
            eprintln!("Error: failed to save '{}'", path.display());
            return report(&e);
        }
        tracing::info!(path = %path.display(), "wrote new document");
    }
    print_json(&DocumentSummary::of(&service, false));
    0
}

/// Execute the `summary` subcommand.
fn run_summary(config: EditorConfig, path: &Path) -> i32 {
    let service = match EditorService::open(path, config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: failed to open '{}'", path.display());
            return report(&e);
        }
    };
    tracing::info!(
        path = %path.display(),
        graphs = service.graphs().len(),
        diagnostics = service.diagnostics().len(),
        "built document"
    );
    print_json(&DocumentSummary::of(&service, true));
    0
}

/// Execute the `kernels` subcommand.
fn run_kernels() -> i32 {
    let types = TypeRegistry::new();
    let kernels = KernelRegistry::new(&types);
    tracing::debug!(kernels = kernels.len(), types = types.len(), "loaded registries");
    for kernel in kernels.list() {
        println!("{}", signature_line(kernel));
    }
    0
}

/// Execute the `label` subcommand.
fn run_label(raw: &str) -> i32 {
    let value = match parse_value(raw) {
        Ok(v) => v,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            return 1;
        }
    };
    let label = TypeRegistry::new().value_label(value);
    tracing::debug!(value, type_name = %label.type_name, "resolved value label");
    print_json(&label);
    0
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Machine-readable description of a built document.
#[derive(Debug, Serialize)]
struct DocumentSummary {
    references: u32,
    graphs: Vec<GraphSummary>,
    nodes: usize,
    objects: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    diagnostics: Option<Vec<BuildDiagnostic>>,
}

#[derive(Debug, Serialize)]
struct GraphSummary {
    name: String,
    vertices: usize,
    edges: usize,
}

impl DocumentSummary {
    fn of(service: &EditorService, with_diagnostics: bool) -> Self {
        let xref = service.xref();
        DocumentSummary {
            references: service.document().reference_count(),
            graphs: service
                .graphs()
                .iter()
                .map(|g| GraphSummary {
                    name: g.name().to_string(),
                    vertices: g.vertex_count(),
                    edges: g.edge_count(),
                })
                .collect(),
            nodes: xref
                .iter()
                .filter(|(_, e)| e.kind == vxgraph_core::ElementKind::Node)
                .count(),
            objects: xref.iter().filter(|(_, e)| e.is_data()).count(),
            diagnostics: with_diagnostics.then(|| service.diagnostics().to_vec()),
        }
    }
}

fn print_json<T: Serialize>(value: &T) {
    let json = serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize result: {}\"}}", e));
    println!("{}", json);
}

/// Prints the error and returns its exit code.
fn report(err: &EditError) -> i32 {
    tracing::error!(kind = ?err.kind(), "{}", err);
    eprintln!("Error: {}", err);
    exit_code(err)
}

fn exit_code(err: &EditError) -> i32 {
    match err.kind() {
        ErrorKind::Io => 3,
        ErrorKind::Validation | ErrorKind::Reference | ErrorKind::Cycle => 1,
    }
}

/// Parse a decimal or `0x`-prefixed hexadecimal `u32`.
fn parse_value(s: &str) -> Result<u32, String> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse::<u32>(),
    };
    parsed.map_err(|_| format!("invalid value '{}', expected a decimal or 0x-prefixed u32", s))
}

/// `name(direction type param, ...)`; optional parameters are bracketed,
/// immutable ones marked with `=`.
fn signature_line(kernel: &KernelSignature) -> String {
    let params: Vec<String> = kernel
        .params
        .iter()
        .map(|p| {
            let text = format!("{} {} {}", p.direction, p.type_name, p.name);
            match p.state {
                ParamState::Required => text,
                ParamState::Optional => format!("[{}]", text),
                ParamState::Immutable => format!("={}", text),
            }
        })
        .collect();
    format!("{}({})", kernel.name, params.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use vxgraph_storage::StorageError;

    #[test]
    fn parse_value_decimal_and_hex() {
        assert_eq!(parse_value("2063"), Ok(2063));
        assert_eq!(parse_value("0x80F"), Ok(0x80F));
        assert_eq!(parse_value(" 0X9004 "), Ok(0x9004));
        assert!(parse_value("VX_TYPE_IMAGE").is_err());
        assert!(parse_value("0x").is_err());
        assert!(parse_value("-1").is_err());
    }

    #[test]
    fn exit_codes_follow_error_kind() {
        assert_eq!(exit_code(&EditError::validation("no")), 1);
        assert_eq!(exit_code(&EditError::reference("gone")), 1);
        let io = EditError::Io(StorageError::Malformed {
            reason: "truncated".into(),
        });
        assert_eq!(exit_code(&io), 3);
    }

    #[test]
    fn signature_lists_every_parameter() {
        let types = TypeRegistry::new();
        let kernels = KernelRegistry::new(&types);
        let kernel = kernels.get("org.khronos.openvx.box_3x3").unwrap();
        let line = signature_line(kernel);
        assert!(line.starts_with("org.khronos.openvx.box_3x3(input vx_image "));
        assert_eq!(line.matches(", ").count(), kernel.params.len() - 1);
        assert!(line.contains("output vx_image"));
    }

    #[test]
    fn optional_and_immutable_parameters_are_marked() {
        let types = TypeRegistry::new();
        let kernels = KernelRegistry::new(&types);
        let marked = kernels
            .list()
            .map(signature_line)
            .filter(|line| line.contains("[") || line.contains("="))
            .count();
        assert!(marked > 0);
    }

    #[test]
    fn summary_of_default_document() {
        let service = EditorService::new(EditorConfig::default()).unwrap();
        let summary = DocumentSummary::of(&service, false);
        assert_eq!(summary.references, 1);
        assert_eq!(summary.nodes, 0);
        assert_eq!(summary.objects, 0);
        assert!(summary.graphs.iter().any(|g| g.name == "graph"));
        assert!(summary.diagnostics.is_none());
    }

    #[test]
    fn new_writes_a_loadable_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("new.xml");
        assert_eq!(run_new(EditorConfig::default(), Some(path.clone())), 0);
        assert_eq!(run_summary(EditorConfig::default(), &path), 0);
    }

    #[test]
    fn missing_file_is_an_io_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.xml");
        assert_eq!(run_summary(EditorConfig::default(), &path), 3);
    }

    #[test]
    fn unparseable_label_is_a_usage_error() {
        assert_eq!(run_label("image"), 1);
        assert_eq!(run_label("0x80F"), 0);
    }
}
