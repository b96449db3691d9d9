//! Integration tests for the generated test-case and reporter tables

use std::collections::{HashMap, HashSet};

use fixture_gen_rs::{Fixtures, JobStatus, TestState, default_model, generate};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn default_fixtures(seed: u64) -> Fixtures {
    generate(&default_model(), &mut StdRng::seed_from_u64(seed))
}

#[test]
fn every_test_case_and_reporter_references_an_emitted_job() {
    let fixtures = default_fixtures(10);

    let job_ids: HashSet<_> = fixtures.jobs.iter().map(|j| j.id).collect();
    assert_eq!(job_ids.len(), fixtures.jobs.len(), "job ids are unique");

    for case in &fixtures.tests {
        assert!(job_ids.contains(&case.job_id));
    }
    for reporter in &fixtures.reporters {
        assert!(job_ids.contains(&reporter.job_id));
    }
}

#[test]
fn pending_jobs_have_no_test_cases_or_reporters() {
    let fixtures = default_fixtures(11);

    let pending_ids: HashSet<_> = fixtures
        .jobs
        .iter()
        .filter(|j| j.status == JobStatus::Pending)
        .map(|j| j.id)
        .collect();
    assert_eq!(pending_ids.len(), 8);

    assert!(!fixtures.tests.iter().any(|t| pending_ids.contains(&t.job_id)));
    assert!(
        !fixtures
            .reporters
            .iter()
            .any(|r| pending_ids.contains(&r.job_id))
    );
}

#[test]
fn non_pending_jobs_expand_every_test_case_of_their_application() {
    let model = default_model();
    let fixtures = generate(&model, &mut StdRng::seed_from_u64(12));

    // expected test cases per application, keyed by requester
    let expected: HashMap<&str, usize> = model
        .applications()
        .iter()
        .map(|app| (app.requester(), app.num_test_cases()))
        .collect();

    let mut per_job: HashMap<_, usize> = HashMap::new();
    for case in &fixtures.tests {
        *per_job.entry(case.job_id).or_default() += 1;
    }

    for job in &fixtures.jobs {
        if job.status == JobStatus::Pending {
            continue;
        }
        let count = per_job.get(&job.id).copied().unwrap_or_default();
        assert_eq!(count, expected[job.requester.as_str()]);
    }
}

#[test]
fn complete_jobs_push_their_outcome_down_to_every_test_case() {
    let fixtures = default_fixtures(13);

    for job in &fixtures.jobs {
        let expected_state = match job.status {
            JobStatus::Pass => TestState::Pass,
            JobStatus::Fail => TestState::Fail,
            _ => continue,
        };
        let expected_url = format!("https://guts.ubuntu.com/artifacts/{}/", job.id);
        for case in fixtures.tests.iter().filter(|t| t.job_id == job.id) {
            assert_eq!(case.state, expected_state);
            assert_eq!(case.results_url.as_deref(), Some(expected_url.as_str()));
        }
    }
}

#[test]
fn running_jobs_have_in_flight_cases_without_results() {
    let fixtures = default_fixtures(14);

    for job in &fixtures.jobs {
        if job.status != JobStatus::Running {
            continue;
        }
        for case in fixtures.tests.iter().filter(|t| t.job_id == job.id) {
            assert!(matches!(
                case.state,
                TestState::Requested | TestState::Spawning | TestState::Spawned | TestState::Running
            ));
            assert_eq!(case.results_url, None);
        }
    }
}

#[test]
fn vnc_addresses_point_at_localhost_display_ports() {
    let fixtures = default_fixtures(15);

    for case in &fixtures.tests {
        assert!((5900..6000).contains(&case.vnc_port));
        assert_eq!(case.vnc_address(), format!("127.0.0.1:{}", case.vnc_port));
    }
}

#[test]
fn reporter_urls_target_the_test_executions_endpoint() {
    let fixtures = default_fixtures(16);

    for reporter in &fixtures.reporters {
        let suffix = reporter
            .base_reporting_url
            .strip_prefix("https://tests-api.ubuntu.com/v1/test-executions/")
            .expect("reporting url prefix");
        let execution: u32 = suffix.parse().expect("numeric execution id");
        assert!(execution < 1000);
    }
}
