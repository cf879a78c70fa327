use branchguard_event::{EventError, EventGate, gate_event, read_pull_request};
use camino::Utf8PathBuf;

fn fixture(name: &str) -> Utf8PathBuf {
    Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .expect("workspace root")
        .join("tests")
        .join("fixtures")
        .join("events")
        .join(name)
}

#[test]
fn reads_pull_request_fixture() {
    let pr = read_pull_request(&fixture("pr_feature.json")).expect("parse fixture");
    assert_eq!(pr.number, 13);
    assert_eq!(pr.base_ref.as_str(), "main");
    assert_eq!(pr.head_ref.as_str(), "feature/x");
}

#[test]
fn every_pull_request_fixture_parses() {
    for name in [
        "pr_develop.json",
        "pr_feature.json",
        "pr_hotfix.json",
        "pr_main.json",
    ] {
        let pr = read_pull_request(&fixture(name));
        assert!(pr.is_ok(), "{name}: {:?}", pr.err());
    }
}

#[test]
fn malformed_fixture_is_a_payload_error() {
    let err = read_pull_request(&fixture("malformed.json")).unwrap_err();
    assert!(matches!(err, EventError::Payload(_)), "{err}");
}

#[test]
fn push_payload_is_not_a_pull_request() {
    assert!(matches!(gate_event("push"), EventGate::Skip(_)));
    assert!(read_pull_request(&fixture("push.json")).is_err());
}

#[test]
fn payload_written_to_tempdir_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = Utf8PathBuf::from_path_buf(dir.path().join("event.json")).unwrap();
    std::fs::write(
        &path,
        r#"{"number": 99, "pull_request": {"base": {"ref": "DEVELOP"}, "head": {"ref": "Release/2.0"}}}"#,
    )
    .unwrap();

    let pr = read_pull_request(&path).unwrap();
    assert_eq!(pr.number, 99);
    assert_eq!(pr.base_ref.as_str(), "develop");
    assert_eq!(pr.head_ref.as_str(), "release/2.0");
}
