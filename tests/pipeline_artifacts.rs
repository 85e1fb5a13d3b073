use std::fs;
use std::path::Path;

use harborui::pipeline::{self, CSS_FILE, JSON_FILE, TS_FILE};
use pretty_assertions::assert_eq;

const SOURCE: &str = r##"{
    "global": {
        "colors": {
            "primary": {
                "600": { "$value": "#9E1B32" },
                "700": { "$value": "#85172B" }
            },
            "gray": {
                "100": { "$value": "#F2F4F7" },
                "900": { "$value": "#101828" }
            }
        },
        "spacing": {
            "sm": { "$value": "0.5rem" },
            "md": { "$value": "1rem" },
            "lg": { "$value": "1.5rem" }
        },
        "typography": {
            "fontSize": {
                "sm": { "$value": "0.875rem" },
                "md": { "$value": "1rem" }
            }
        }
    }
}"##;

fn artifact(out_dir: &Path, name: &str) -> String {
    fs::read_to_string(out_dir.join(name))
        .unwrap_or_else(|err| panic!("missing artifact {name}: {err}"))
}

#[test]
fn build_writes_three_stable_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("tokens.json");
    let out_dir = dir.path().join("generated");
    fs::write(&source, SOURCE).unwrap();

    pipeline::run(&source, &out_dir).unwrap();

    let css = artifact(&out_dir, CSS_FILE);
    assert!(css.contains(":root {"));
    assert!(css.contains("--color-primary-600: 158 27 50;"));
    assert!(css.contains("--color-gray-900: 16 24 40;"));
    assert!(css.contains("--spacing-lg: 1.5rem;"));
    assert!(css.contains("--font-size-sm: 0.875rem;"));

    let typescript = artifact(&out_dir, TS_FILE);
    assert!(typescript.contains("export const designTokens = {"));
    assert!(typescript.contains("export type DesignTokens = typeof designTokens;"));

    let json = artifact(&out_dir, JSON_FILE);
    let reparsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    let original: serde_json::Value = serde_json::from_str(SOURCE).unwrap();
    assert_eq!(reparsed, original);

    // A second run over the same source reproduces every artifact byte for byte.
    pipeline::run(&source, &out_dir).unwrap();
    assert_eq!(artifact(&out_dir, CSS_FILE), css);
    assert_eq!(artifact(&out_dir, TS_FILE), typescript);
    assert_eq!(artifact(&out_dir, JSON_FILE), json);
}

#[test]
fn missing_typography_group_omits_font_size_lines() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("tokens.json");
    let out_dir = dir.path().join("generated");
    let trimmed: serde_json::Value = serde_json::from_str(SOURCE).unwrap();
    let mut trimmed = trimmed;
    trimmed["global"]
        .as_object_mut()
        .unwrap()
        .remove("typography");
    fs::write(&source, serde_json::to_string(&trimmed).unwrap()).unwrap();

    pipeline::run(&source, &out_dir).unwrap();

    let css = artifact(&out_dir, CSS_FILE);
    assert!(css.contains("--color-primary-600: 158 27 50;"));
    assert!(css.contains("--spacing-md: 1rem;"));
    assert!(!css.contains("--font-size-"));
}

#[test]
fn unreadable_source_fails_without_writing_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("missing.json");
    let out_dir = dir.path().join("generated");

    let err = pipeline::run(&source, &out_dir).unwrap_err();
    assert!(matches!(
        err,
        harborui::PipelineError::SourceUnreadable { .. }
    ));
    assert!(!out_dir.exists());
}

#[test]
fn invalid_source_fails_without_writing_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("tokens.json");
    let out_dir = dir.path().join("generated");
    fs::write(&source, "{ not json").unwrap();

    let err = pipeline::run(&source, &out_dir).unwrap_err();
    assert!(matches!(err, harborui::PipelineError::SourceInvalid(_)));
    assert!(!out_dir.exists());
}
