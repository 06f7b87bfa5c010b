use serde_json::{json, Value};
use tailor_core::{
    accept_compile_request, compute_input_hash, create_job, AcceptResponse, CoreError,
    JobError, JobStatus,
};
use tailor_schemas::CompileRequest;

fn minimal_request() -> Value {
    json!({
        "resume": {
            "version": 1,
            "basics": {
                "fullName": "Ada Lovelace",
                "email": "ada@example.com",
                "phone": "+1 555 0100",
                "location": "London"
            }
        },
        "jd": { "type": "text", "text": "x".repeat(20) }
    })
}

#[test]
fn accepted_descriptor_starts_queued_and_clean() {
    let job = accept_compile_request(&minimal_request()).unwrap();
    assert_eq!(job.status, JobStatus::Queued);
    assert!(job.artifacts.is_empty());
    assert!(job.error.is_none());
    assert_eq!(job.created_at, job.updated_at);
    assert!(job.verify().is_ok());
}

#[test]
fn identical_requests_get_fresh_job_ids_but_equal_hashes() {
    let first = accept_compile_request(&minimal_request()).unwrap();
    let second = accept_compile_request(&minimal_request()).unwrap();
    assert_ne!(first.job_id, second.job_id);
    assert_eq!(first.input_hash, second.input_hash);
}

#[test]
fn rejection_reports_every_field_and_creates_no_job() {
    let raw = json!({
        "resume": { "version": 1 },
        "jd": { "type": "text", "text": "too short" }
    });
    let err = match accept_compile_request(&raw) {
        Err(CoreError::Validation(err)) => err,
        other => panic!("expected validation rejection, got {:?}", other.map(|j| j.job_id)),
    };
    assert!(err.issues.contains_key("resume.basics"));
    assert!(err.issues.contains_key("jd.text"));
}

#[test]
fn input_hash_is_deterministic_and_idempotent() {
    let request = CompileRequest::parse(&minimal_request()).unwrap();
    let first = compute_input_hash(&request).unwrap();
    let second = compute_input_hash(&request).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.as_ref().len(), 64);
    assert!(first.as_ref().chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
}

#[test]
fn input_hash_ignores_member_order() {
    let reordered = json!({
        "jd": { "text": "x".repeat(20), "type": "text" },
        "resume": {
            "basics": {
                "location": "London",
                "phone": "+1 555 0100",
                "email": "ada@example.com",
                "fullName": "Ada Lovelace"
            },
            "version": 1
        }
    });
    let a = CompileRequest::parse(&minimal_request()).unwrap();
    let b = CompileRequest::parse(&reordered).unwrap();
    assert_eq!(
        compute_input_hash(&a).unwrap(),
        compute_input_hash(&b).unwrap()
    );
}

#[test]
fn explicit_defaults_hash_like_absent_prefs() {
    let mut explicit = minimal_request();
    explicit["prefs"] = json!({
        "scoringModel": "keyword_alignment_v1",
        "template": "one_page_v1"
    });
    let a = CompileRequest::parse(&minimal_request()).unwrap();
    let b = CompileRequest::parse(&explicit).unwrap();
    assert_eq!(
        compute_input_hash(&a).unwrap(),
        compute_input_hash(&b).unwrap()
    );
}

#[test]
fn differing_inputs_hash_differently() {
    let mut other = minimal_request();
    other["jd"] = json!({ "type": "text", "text": "y".repeat(20) });
    let a = CompileRequest::parse(&minimal_request()).unwrap();
    let b = CompileRequest::parse(&other).unwrap();
    assert_ne!(
        compute_input_hash(&a).unwrap(),
        compute_input_hash(&b).unwrap()
    );

    // Requests differing only in prefs are distinct for caching purposes.
    let mut prefs_only = minimal_request();
    prefs_only["prefs"] = json!({ "targetRole": "Backend Engineer" });
    let c = CompileRequest::parse(&prefs_only).unwrap();
    assert_ne!(
        compute_input_hash(&a).unwrap(),
        compute_input_hash(&c).unwrap()
    );
}

#[test]
fn status_machine_permits_only_forward_transitions() {
    use JobStatus::*;
    assert!(Queued.can_transition_to(Processing));
    assert!(Processing.can_transition_to(Done));
    assert!(Processing.can_transition_to(Failed));

    assert!(!Queued.can_transition_to(Done));
    assert!(!Queued.can_transition_to(Failed));
    assert!(!Processing.can_transition_to(Queued));
    for terminal in [Done, Failed] {
        assert!(terminal.is_terminal());
        for next in [Queued, Processing, Done, Failed] {
            assert!(!terminal.can_transition_to(next));
        }
    }
    assert!(!Queued.is_terminal());
    assert!(!Processing.is_terminal());
}

#[test]
fn verify_requires_error_exactly_on_failed() {
    let request = CompileRequest::parse(&minimal_request()).unwrap();
    let mut job = create_job(compute_input_hash(&request).unwrap());

    job.status = JobStatus::Failed;
    assert!(job.verify().is_err());

    job.error = Some(JobError {
        message: "render crashed".to_string(),
        code: Some("RENDER_FAILURE".to_string()),
    });
    assert!(job.verify().is_ok());

    job.status = JobStatus::Done;
    assert!(job.verify().is_err());
}

#[test]
fn accept_response_envelope_matches_wire_shape() {
    let job = accept_compile_request(&minimal_request()).unwrap();
    let ok = serde_json::to_value(AcceptResponse::accepted(job.clone())).unwrap();
    assert_eq!(ok["ok"], json!(true));
    assert_eq!(ok["job"]["status"], "queued");
    assert_eq!(ok["job"]["jobId"], json!(job.job_id.to_string()));
    assert_eq!(ok["job"]["inputHash"], json!(job.input_hash.as_ref()));
    assert_eq!(ok["job"]["artifacts"], json!([]));
    assert!(ok["job"].get("error").is_none());

    let err = CompileRequest::parse(&json!({})).unwrap_err();
    let rejected = serde_json::to_value(AcceptResponse::rejected(err)).unwrap();
    assert_eq!(rejected["ok"], json!(false));
    assert!(rejected["error"]["issues"].is_object());
}

#[test]
fn descriptor_round_trips_through_the_wire_format() {
    let job = accept_compile_request(&minimal_request()).unwrap();
    let value = serde_json::to_value(&job).unwrap();
    assert!(value.get("createdAt").is_some());
    assert!(value.get("updatedAt").is_some());
    let back: tailor_core::JobDescriptor = serde_json::from_value(value).unwrap();
    assert_eq!(back, job);
}
