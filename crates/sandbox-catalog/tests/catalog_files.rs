use sandbox_catalog::{CatalogError, ScenarioCatalog, StepKind};
use std::io::Write;

fn write_file(dir: &tempfile::TempDir, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(body.as_bytes()).unwrap();
    path
}

#[test]
fn test_builtin_roundtrips_through_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let json = serde_json::to_string_pretty(ScenarioCatalog::builtin()).unwrap();
    let path = write_file(&dir, "catalog.json", &json);

    let loaded = ScenarioCatalog::load(&path).unwrap();
    assert_eq!(&loaded, ScenarioCatalog::builtin());
}

#[test]
fn test_yaml_file_with_consequence_gate() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        &dir,
        "catalog.yml",
        r#"
deepfake:
  title: Synthetic Media
  steps:
    - title: Who is harmed
      content: A cloned voice calls a parent
      task: Decide
      kind: consequence_gate
      affected:
        - emoji: "👩"
          name: Ana, 51
          story: Gets a call from her "son"
          impact: Wires her savings
"#,
    );

    let catalog = ScenarioCatalog::load(&path).unwrap();
    let step = &catalog.get("deepfake").unwrap().steps[0];
    match &step.kind {
        StepKind::ConsequenceGate { affected } => {
            assert_eq!(affected.len(), 1);
            assert_eq!(affected[0].name, "Ana, 51");
        }
        other => panic!("unexpected kind {other:?}"),
    }
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ScenarioCatalog::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
}

#[test]
fn test_unknown_extension_rejected_before_read() {
    let err = ScenarioCatalog::load("catalog.ini").unwrap_err();
    assert!(matches!(err, CatalogError::UnsupportedFormat(_)));
}

#[test]
fn test_stepless_scenario_rejected_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "empty.json", r#"{"empty": {"title": "Empty", "steps": []}}"#);
    let err = ScenarioCatalog::load(&path).unwrap_err();
    assert!(matches!(err, CatalogError::EmptyScenario(_)));
}
