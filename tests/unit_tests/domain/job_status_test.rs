use clinical_gateway::domain::JobStatus;

#[test]
fn given_status_strings_when_parsing_then_roundtrip_matches() {
    for status in [
        JobStatus::Pending,
        JobStatus::Running,
        JobStatus::Completed,
        JobStatus::Failed,
    ] {
        let parsed: JobStatus = status.as_str().parse().expect("valid status string");
        assert_eq!(parsed, status);
    }
}

#[test]
fn given_unknown_string_when_parsing_then_error() {
    assert!("QUEUED".parse::<JobStatus>().is_err());
    assert!("".parse::<JobStatus>().is_err());
}

#[test]
fn given_pending_status_when_transitioning_then_only_forward_moves_allowed() {
    assert!(JobStatus::Pending.can_transition_to(JobStatus::Running));
    assert!(JobStatus::Pending.can_transition_to(JobStatus::Failed));
    assert!(!JobStatus::Pending.can_transition_to(JobStatus::Pending));
    assert!(!JobStatus::Pending.can_transition_to(JobStatus::Completed));
}

#[test]
fn given_running_status_when_transitioning_then_only_terminal_allowed() {
    assert!(JobStatus::Running.can_transition_to(JobStatus::Completed));
    assert!(JobStatus::Running.can_transition_to(JobStatus::Failed));
    assert!(!JobStatus::Running.can_transition_to(JobStatus::Pending));
    assert!(!JobStatus::Running.can_transition_to(JobStatus::Running));
}

#[test]
fn given_terminal_status_when_transitioning_then_nothing_allowed() {
    for terminal in [JobStatus::Completed, JobStatus::Failed] {
        assert!(terminal.is_terminal());
        for next in [
            JobStatus::Pending,
            JobStatus::Running,
            JobStatus::Completed,
            JobStatus::Failed,
        ] {
            assert!(!terminal.can_transition_to(next));
        }
    }
}
