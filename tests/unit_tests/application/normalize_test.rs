use clinical_gateway::application::services::{normalize_status_body, JobStatusError};
use serde_json::json;

#[test]
fn given_flat_and_wrapped_bodies_when_normalizing_then_snapshots_are_identical() {
    let flat = json!({
        "jobId": "123",
        "status": "running",
        "progress": 50,
        "message": "Processing data..."
    });
    let wrapped = json!({ "data": flat.clone() });

    let from_flat = normalize_status_body("123", &flat).expect("flat body accepted");
    let from_wrapped = normalize_status_body("123", &wrapped).expect("wrapped body accepted");

    assert_eq!(from_flat, from_wrapped);
    assert_eq!(from_flat.job_id, "123");
    assert_eq!(from_flat.status, "running");
    assert_eq!(from_flat.progress, 50);
    assert_eq!(from_flat.message.as_deref(), Some("Processing data..."));
}

#[test]
fn given_missing_job_id_when_normalizing_then_falls_back_to_requested_id() {
    let body = json!({ "status": "queued" });
    let snapshot = normalize_status_body("abc-1", &body).expect("body accepted");
    assert_eq!(snapshot.job_id, "abc-1");
    assert_eq!(snapshot.progress, 0);
    assert!(snapshot.message.is_none());
}

#[test]
fn given_id_field_instead_of_job_id_when_normalizing_then_it_is_used() {
    let body = json!({ "id": "worker-7", "status": "completed", "progress": 100 });
    let snapshot = normalize_status_body("other", &body).expect("body accepted");
    assert_eq!(snapshot.job_id, "worker-7");
}

#[test]
fn given_missing_status_when_normalizing_then_malformed() {
    let body = json!({ "jobId": "123", "progress": 10 });
    assert!(matches!(
        normalize_status_body("123", &body),
        Err(JobStatusError::MalformedUpstreamResponse)
    ));
}

#[test]
fn given_non_numeric_progress_when_normalizing_then_malformed() {
    let body = json!({ "jobId": "123", "status": "running", "progress": "half done" });
    assert!(matches!(
        normalize_status_body("123", &body),
        Err(JobStatusError::MalformedUpstreamResponse)
    ));

    let body = json!({ "jobId": "123", "status": "running", "progress": true });
    assert!(matches!(
        normalize_status_body("123", &body),
        Err(JobStatusError::MalformedUpstreamResponse)
    ));
}

#[test]
fn given_numeric_string_progress_when_normalizing_then_coerced() {
    let body = json!({ "jobId": "123", "status": "running", "progress": "75" });
    let snapshot = normalize_status_body("123", &body).expect("body accepted");
    assert_eq!(snapshot.progress, 75);
}

#[test]
fn given_out_of_range_progress_when_normalizing_then_clamped() {
    let body = json!({ "jobId": "123", "status": "running", "progress": 150 });
    let snapshot = normalize_status_body("123", &body).expect("body accepted");
    assert_eq!(snapshot.progress, 100);

    let body = json!({ "jobId": "123", "status": "running", "progress": -3 });
    let snapshot = normalize_status_body("123", &body).expect("body accepted");
    assert_eq!(snapshot.progress, 0);
}

#[test]
fn given_non_object_data_field_when_normalizing_then_treated_as_flat() {
    let body = json!({ "data": "nothing", "jobId": "123", "status": "queued" });
    let snapshot = normalize_status_body("123", &body).expect("body accepted");
    assert_eq!(snapshot.status, "queued");
}
