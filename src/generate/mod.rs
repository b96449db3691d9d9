//! Module for the core expansion logic: turning the declarative fixture model
//! into ordered sequences of job, test-case, reporter, and user records.
//!
//! Generation is pure apart from the injected random source and the wall
//! clock; serialization to CSV happens later, in the output module.

use rand::Rng;
use rand::seq::IndexedRandom;
use sha2::{Digest, Sha256};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::{Application, Bucket, JobStatus, JobTemplate, Model, TestState};


const VNC_HOST: &str = "127.0.0.1";
const VNC_PORT_RANGE: std::ops::Range<u16> = 5900..6000;
const PRIORITY_RANGE: std::ops::Range<u8> = 0..10;
const REPORTING_EXECUTION_RANGE: std::ops::Range<u32> = 0..1000;
const MAX_USER_PRIORITY: u8 = 10;

const COMPLETE_OUTCOMES: [JobStatus; 2] = [JobStatus::Pass, JobStatus::Fail];
const IN_FLIGHT_STATES: [TestState; 4] = [
    TestState::Requested,
    TestState::Spawning,
    TestState::Spawned,
    TestState::Running,
];

/// One synthetic job row, immutable once generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRecord {
    pub id: Uuid,
    pub artifact_url: String,
    pub tests_repo: String,
    pub tests_repo_branch: String,
    pub tests_plans: Vec<String>,
    pub image_url: String,
    pub reporter: String,
    pub status: JobStatus,
    pub submitted_at: OffsetDateTime,
    pub requester: String,
    pub debug: bool,
    pub priority: u8,
}

/// One synthetic test-case run belonging to a job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestRecord {
    pub job_id: Uuid,
    pub test_case: String,
    pub vnc_port: u16,
    pub state: TestState,
    pub results_url: Option<String>,
    pub updated_at: OffsetDateTime,
}

impl TestRecord {
    pub fn vnc_address(&self) -> String {
        format!("{VNC_HOST}:{}", self.vnc_port)
    }
}

/// Reporting endpoint assigned to a job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReporterRecord {
    pub job_id: Uuid,
    pub base_reporting_url: String,
}

/// One configured user with its derived API key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub username: String,
    pub key: String,
    pub maximum_priority: u8,
}

/// The four record sequences produced by one run, in emission order.
#[derive(Debug, Default)]
pub struct Fixtures {
    pub jobs: Vec<JobRecord>,
    pub tests: Vec<TestRecord>,
    pub reporters: Vec<ReporterRecord>,
    pub users: Vec<UserRecord>,
}

pub(crate) fn generate_fixtures(model: &Model, rng: &mut impl Rng) -> Fixtures {
    let mut fixtures = Fixtures::default();

    for username in model.usernames() {
        fixtures.users.push(user_record(username));
    }

    for application in model.applications() {
        for bucket in Bucket::ALL {
            for _ in 0..model.counts().for_bucket(bucket) {
                emit_job(application, bucket, rng, &mut fixtures);
            }
        }
    }

    fixtures
}

/// Appends one job and, for non-pending buckets, its test-case and reporter
/// records.
fn emit_job(application: &Application, bucket: Bucket, rng: &mut impl Rng, out: &mut Fixtures) {
    let template = JobTemplate::default().merged(application.overrides());
    let id = job_id(rng);
    let status = job_status(bucket, rng);

    if bucket.expands_test_cases() {
        for plan in application.test_plans() {
            for case in plan.cases() {
                out.tests.push(TestRecord {
                    job_id: id,
                    test_case: case.clone(),
                    vnc_port: rng.random_range(VNC_PORT_RANGE),
                    state: test_state(bucket, status, rng),
                    results_url: results_url(bucket, id),
                    updated_at: OffsetDateTime::now_utc(),
                });
            }
        }
        out.reporters.push(ReporterRecord {
            job_id: id,
            base_reporting_url: reporting_url(rng),
        });
    }

    out.jobs.push(JobRecord {
        id,
        artifact_url: template.artifact_url,
        tests_repo: template.tests_repo,
        tests_repo_branch: template.tests_repo_branch,
        tests_plans: application.plan_paths().map(str::to_string).collect(),
        image_url: template.image_url,
        reporter: template.reporter,
        status,
        submitted_at: OffsetDateTime::now_utc(),
        requester: application.requester().to_string(),
        debug: template.debug,
        priority: rng.random_range(PRIORITY_RANGE),
    });
}

/// Random v4 UUID drawn from the injected source, so a seeded run is fully
/// reproducible.
fn job_id(rng: &mut impl Rng) -> Uuid {
    uuid::Builder::from_random_bytes(rng.random()).into_uuid()
}

fn job_status(bucket: Bucket, rng: &mut impl Rng) -> JobStatus {
    match bucket {
        Bucket::InProgress => JobStatus::Running,
        Bucket::Complete => *COMPLETE_OUTCOMES
            .choose(rng)
            .expect("outcome slice is non-empty"),
        Bucket::Pending => JobStatus::Pending,
    }
}

/// Complete jobs push their own outcome down to every test case; in-progress
/// jobs draw an in-flight state per case.
fn test_state(bucket: Bucket, job_status: JobStatus, rng: &mut impl Rng) -> TestState {
    match bucket {
        Bucket::Complete => match job_status {
            JobStatus::Fail => TestState::Fail,
            _ => TestState::Pass,
        },
        _ => *IN_FLIGHT_STATES
            .choose(rng)
            .expect("state slice is non-empty"),
    }
}

/// Complete jobs get a results URL keyed by their id; in-progress jobs have
/// no results yet.
fn results_url(bucket: Bucket, job_id: Uuid) -> Option<String> {
    match bucket {
        Bucket::Complete => Some(format!("https://guts.ubuntu.com/artifacts/{job_id}/")),
        _ => None,
    }
}

fn reporting_url(rng: &mut impl Rng) -> String {
    let execution = rng.random_range(REPORTING_EXECUTION_RANGE);
    format!("https://tests-api.ubuntu.com/v1/test-executions/{execution}")
}

fn user_record(username: &str) -> UserRecord {
    let mut hasher = Sha256::new();
    hasher.update(username.as_bytes());
    UserRecord {
        username: username.to_string(),
        key: hex::encode(hasher.finalize()),
        maximum_priority: MAX_USER_PRIORITY,
    }
}
