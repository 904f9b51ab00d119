use clinical_gateway::domain::{Job, JobStatus};

#[test]
fn given_new_job_when_created_then_starts_pending_with_no_error() {
    let job = Job::new("data.csv".to_string(), Some("STUDY001".to_string()));

    assert_eq!(job.status, JobStatus::Pending);
    assert_eq!(job.filename, "data.csv");
    assert_eq!(job.study_id.as_deref(), Some("STUDY001"));
    assert!(job.error_message.is_none());
    assert!(job.completed_at.is_none());
    assert_eq!(job.created_at, job.updated_at);
}

#[test]
fn given_two_jobs_when_created_then_identifiers_differ() {
    let a = Job::new("a.csv".to_string(), None);
    let b = Job::new("a.csv".to_string(), None);
    assert_ne!(a.id, b.id);
}
