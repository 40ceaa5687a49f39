use std::fs;

use rolldown_testing::{
  BuildOutput, Workspace, WorkspaceConfig, chunk_names, ensure_layout, project_dir, tests_dir,
  verify_layout,
};
use tempfile::tempdir;

#[test]
fn harness_flow_against_checkout() {
  let temp = tempdir().expect("failed to create temp dir");
  let root = temp.path().join("rolldown");
  let tests = root.join("packages").join("rolldown").join("tests");
  fs::create_dir_all(tests.join("fixtures")).expect("failed to create tests dir");
  fs::write(root.join("pnpm-workspace.yaml"), "packages:\n  - packages/*\n")
    .expect("failed to write marker");

  let workspace = Workspace::discover(&tests.join("fixtures"), &WorkspaceConfig::default())
    .expect("workspace root should be found");
  verify_layout(&workspace).expect("checkout layout should verify");

  assert_eq!(tests_dir(&workspace, &[]), tests);
  assert_eq!(
    project_dir(&workspace, &["package.json"]),
    root.join("packages").join("rolldown").join("package.json")
  );

  let output_path = tests_dir(&workspace, &["fixtures", "output.json"]);
  fs::write(
    &output_path,
    r#"{"output": [{"type": "chunk", "fileName": "main.js"}, {"type": "asset", "fileName": "a.css"}]}"#,
  )
  .expect("failed to write manifest");
  let output = rolldown_testing::load_build_output(&output_path).expect("manifest should load");
  assert_eq!(chunk_names(&output), vec!["main.js"]);
}

#[test]
fn mismatched_checkout_fails_verification() {
  let temp = tempdir().expect("failed to create temp dir");
  let workspace = Workspace::from_root(temp.path().join("not-rolldown"));
  assert!(verify_layout(&workspace).is_err());
}

#[test]
fn ensure_layout_is_memoised() {
  let first = ensure_layout().map(|workspace| workspace as *const Workspace);
  let second = ensure_layout().map(|workspace| workspace as *const Workspace);
  match (first, second) {
    (Ok(a), Ok(b)) => assert_eq!(a, b),
    (Err(a), Err(b)) => assert!(std::ptr::eq(a, b)),
    _ => panic!("layout check outcome changed between calls"),
  }
}

#[test]
fn empty_build_output_has_no_chunks() {
  assert!(chunk_names(&BuildOutput::default()).is_empty());
}
