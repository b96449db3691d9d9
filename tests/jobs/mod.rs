//! Integration tests for the generated job table

use std::collections::HashMap;

use fixture_gen_rs::{Fixtures, JobStatus, default_model, generate};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn default_fixtures(seed: u64) -> Fixtures {
    generate(&default_model(), &mut StdRng::seed_from_u64(seed))
}

#[test]
fn status_distribution_follows_the_bucket_counts() {
    let fixtures = default_fixtures(1);

    let mut by_status: HashMap<&str, usize> = HashMap::new();
    for job in &fixtures.jobs {
        *by_status.entry(job.status.as_str()).or_default() += 1;
    }

    // 4 applications, buckets (3, 10, 2)
    assert_eq!(by_status.get("running"), Some(&12));
    assert_eq!(by_status.get("pending"), Some(&8));
    let complete = by_status.get("pass").copied().unwrap_or_default()
        + by_status.get("fail").copied().unwrap_or_default();
    assert_eq!(complete, 40);
}

#[test]
fn every_application_gets_the_full_bucket_total() {
    let fixtures = default_fixtures(2);

    let mut by_requester: HashMap<&str, usize> = HashMap::new();
    for job in &fixtures.jobs {
        *by_requester.entry(job.requester.as_str()).or_default() += 1;
    }

    assert_eq!(by_requester.len(), 4);
    for (requester, count) in by_requester {
        assert_eq!(count, 15, "requester {requester}");
    }
}

#[test]
fn all_statuses_are_within_the_allowed_domain() {
    let fixtures = default_fixtures(3);

    for job in &fixtures.jobs {
        assert!(matches!(
            job.status,
            JobStatus::Running | JobStatus::Pass | JobStatus::Fail | JobStatus::Pending
        ));
        assert!(job.priority <= 9);
    }
}

#[test]
fn firefox_jobs_list_both_plan_paths() {
    let fixtures = default_fixtures(4);

    let firefox_jobs: Vec<_> = fixtures
        .jobs
        .iter()
        .filter(|j| j.requester == "andersson123")
        .collect();
    assert_eq!(firefox_jobs.len(), 15);

    for job in firefox_jobs {
        assert_eq!(
            job.tests_plans,
            vec![
                "tests/firefox-example/plans/extended.yaml",
                "tests/firefox-example/plans/regular.yaml",
            ]
        );
    }
}

#[test]
fn jobs_carry_the_shared_template_defaults() {
    let fixtures = default_fixtures(5);

    for job in &fixtures.jobs {
        assert_eq!(job.artifact_url, "");
        assert_eq!(
            job.tests_repo,
            "https://github.com/canonical/ubuntu-gui-testing.git"
        );
        assert_eq!(job.tests_repo_branch, "main");
        assert_eq!(job.reporter, "test_observer");
        assert!(!job.debug);
    }
}
