//! Offline token build pipeline.
//!
//! Reads a design-token JSON document and emits three artifacts: a CSS
//! variables file, a TypeScript constant module, and a normalized JSON copy.
//! Output is byte-stable for identical input so the artifacts can be
//! committed and diffed. Concurrent runs against the same output directory
//! race on the artifact files; callers must not run two builds at once.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::css::{CssVariableDocument, channels};
use crate::error::PipelineError;

pub const SOURCE_PATH: &str = "design/tokens.json";
pub const OUT_DIR: &str = "design/generated";
pub const CSS_FILE: &str = "tokens.css";
pub const TS_FILE: &str = "tokens.ts";
pub const JSON_FILE: &str = "tokens.json";

const GENERATED_HEADER: &str = "Generated by harborui-tokens. Do not edit.";

/// A token leaf carries its value in a `$value` property.
#[derive(Debug, Clone, Deserialize)]
struct TokenLeaf {
    #[serde(rename = "$value")]
    value: String,
}

fn leaf_value(node: &Value) -> Option<String> {
    TokenLeaf::deserialize(node).ok().map(|leaf| leaf.value)
}

/// A parsed token source document. Group accessors return entries in source
/// order (the JSON maps preserve insertion order).
#[derive(Debug, Clone)]
pub struct TokenDocument {
    root: Value,
}

impl TokenDocument {
    pub fn parse(raw: &str) -> Result<Self, PipelineError> {
        let root: Value = serde_json::from_str(raw)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    fn group(&self, path: &[&str]) -> Option<&Map<String, Value>> {
        let mut node = self.root.as_object()?;
        for segment in path {
            node = node.get(*segment)?.as_object()?;
        }
        Some(node)
    }

    fn flat_entries(&self, path: &[&str]) -> Vec<(String, String)> {
        let Some(group) = self.group(path) else {
            return Vec::new();
        };
        group
            .iter()
            .filter_map(|(key, node)| leaf_value(node).map(|value| (key.clone(), value)))
            .collect()
    }

    /// `global.colors.<family>.<shade>` leaves as (family, shade, value).
    pub fn color_entries(&self) -> Vec<(String, String, String)> {
        let Some(colors) = self.group(&["global", "colors"]) else {
            return Vec::new();
        };
        let mut entries = Vec::new();
        for (family, shades) in colors {
            let Some(shades) = shades.as_object() else {
                continue;
            };
            for (shade, node) in shades {
                if let Some(value) = leaf_value(node) {
                    entries.push((family.clone(), shade.clone(), value));
                }
            }
        }
        entries
    }

    /// `global.spacing.<key>` leaves.
    pub fn spacing_entries(&self) -> Vec<(String, String)> {
        self.flat_entries(&["global", "spacing"])
    }

    /// `global.typography.fontSize.<key>` leaves.
    pub fn font_size_entries(&self) -> Vec<(String, String)> {
        self.flat_entries(&["global", "typography", "fontSize"])
    }
}

/// The three rendered artifacts, held in memory until all succeed.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Artifacts {
    pub css: String,
    pub typescript: String,
    pub json: String,
}

pub fn render(doc: &TokenDocument) -> Result<Artifacts, PipelineError> {
    let mut variables = CssVariableDocument::new();
    for (family, shade, value) in doc.color_entries() {
        variables.declare(format!("--color-{family}-{shade}"), channels(&value));
    }
    for (key, value) in doc.spacing_entries() {
        variables.declare(format!("--spacing-{key}"), value);
    }
    for (key, value) in doc.font_size_entries() {
        variables.declare(format!("--font-size-{key}"), value);
    }

    let css = format!("/* {GENERATED_HEADER} */\n{}", variables.to_stylesheet());

    let tree = serde_json::to_string_pretty(doc.root())?;
    let typescript = format!(
        "// {GENERATED_HEADER}\nexport const designTokens = {tree} as const;\n\nexport type DesignTokens = typeof designTokens;\n"
    );
    let json = format!("{tree}\n");

    Ok(Artifacts {
        css,
        typescript,
        json,
    })
}

/// Run the pipeline: read the source document, render every artifact in
/// memory, then write all three files. Nothing is written unless the source
/// parses, so a failed run leaves no partial output behind.
pub fn run(source: &Path, out_dir: &Path) -> Result<(), PipelineError> {
    let raw = fs::read_to_string(source).map_err(|err| PipelineError::SourceUnreadable {
        path: source.to_path_buf(),
        source: err,
    })?;
    let doc = TokenDocument::parse(&raw)?;
    debug!(
        colors = doc.color_entries().len(),
        spacing = doc.spacing_entries().len(),
        font_sizes = doc.font_size_entries().len(),
        "parsed token source"
    );

    let artifacts = render(&doc)?;

    fs::create_dir_all(out_dir)?;
    fs::write(out_dir.join(CSS_FILE), &artifacts.css)?;
    fs::write(out_dir.join(TS_FILE), &artifacts.typescript)?;
    fs::write(out_dir.join(JSON_FILE), &artifacts.json)?;
    info!(out_dir = %out_dir.display(), "wrote token artifacts");
    Ok(())
}
