//! Integration tests for CLI commands.

use std::process::Command;
use tempfile::TempDir;

fn valid_request() -> serde_json::Value {
    serde_json::json!({
        "resume": {
            "version": 1,
            "basics": {
                "fullName": "Ada Lovelace",
                "email": "ada@example.com",
                "phone": "+1 555 0100",
                "location": "London"
            }
        },
        "jd": { "type": "text", "text": "We are hiring a backend engineer." }
    })
}

fn write_request(dir: &TempDir, name: &str, value: &serde_json::Value) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    path.to_string_lossy().into_owned()
}

fn tailor() -> Command {
    Command::new(env!("CARGO_BIN_EXE_tailor"))
}

#[test]
fn validate_accepts_a_valid_request() {
    let dir = TempDir::new().unwrap();
    let path = write_request(&dir, "request.json", &valid_request());

    let output = tailor().args(["validate", &path]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("valid compile request"));
}

#[test]
fn validate_reports_all_issues_and_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    let mut request = valid_request();
    request["jd"] = serde_json::json!({ "type": "text", "text": "short" });
    request["resume"]["basics"]["email"] = serde_json::json!("not-an-email");
    let path = write_request(&dir, "request.json", &request);

    let output = tailor().args(["validate", &path]).output().unwrap();
    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("jd.text"));
    assert!(stdout.contains("resume.basics.email"));
}

#[test]
fn validate_json_flag_emits_machine_readable_report() {
    let dir = TempDir::new().unwrap();
    let mut request = valid_request();
    request["prefs"] = serde_json::json!({ "scoringModel": "keyword_alignment_v2" });
    let path = write_request(&dir, "request.json", &request);

    let output = tailor().args(["validate", &path, "--json"]).output().unwrap();
    assert!(!output.status.success());
    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert!(report["issues"]["prefs.scoringModel"].is_array());
}

#[test]
fn hash_is_stable_across_runs() {
    let dir = TempDir::new().unwrap();
    let path = write_request(&dir, "request.json", &valid_request());

    let first = tailor().args(["hash", &path]).output().unwrap();
    let second = tailor().args(["hash", &path]).output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    let digest = String::from_utf8_lossy(&first.stdout);
    assert_eq!(digest.trim().len(), 64);
}

#[test]
fn submit_prints_accepted_envelope_with_fresh_job_ids() {
    let dir = TempDir::new().unwrap();
    let path = write_request(&dir, "request.json", &valid_request());

    let first = tailor().args(["submit", &path, "--compact"]).output().unwrap();
    let second = tailor().args(["submit", &path, "--compact"]).output().unwrap();
    assert!(first.status.success());

    let a: serde_json::Value = serde_json::from_slice(&first.stdout).unwrap();
    let b: serde_json::Value = serde_json::from_slice(&second.stdout).unwrap();
    assert_eq!(a["ok"], serde_json::json!(true));
    assert_eq!(a["job"]["status"], "queued");
    assert_eq!(a["job"]["artifacts"], serde_json::json!([]));
    assert_eq!(a["job"]["inputHash"], b["job"]["inputHash"]);
    assert_ne!(a["job"]["jobId"], b["job"]["jobId"]);
}

#[test]
fn submit_rejection_prints_envelope_and_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    let path = write_request(&dir, "request.json", &serde_json::json!({}));

    let output = tailor().args(["submit", &path, "--compact"]).output().unwrap();
    assert!(!output.status.success());
    let envelope: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(envelope["ok"], serde_json::json!(false));
    assert!(envelope["error"]["issues"].is_object());
}

#[test]
fn canonicalize_sorts_object_members() {
    let dir = TempDir::new().unwrap();
    let path = write_request(&dir, "value.json", &serde_json::json!({"b": 1, "a": 2}));

    let output = tailor().args(["canonicalize", &path]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), r#"{"a":2,"b":1}"#);
}
