//! Module for the types defining the fixture model: the static declarative
//! description of applications, test plans, users, and bucket counts that the
//! generator expands into records.

/// The full input of one generator run: what to expand and how much of it.
#[derive(Debug, Clone)]
pub struct Model {
    applications: Vec<Application>,
    usernames: Vec<String>,
    counts: Counts,
}

impl Model {
    pub fn new(
        applications: Vec<Application>,
        usernames: impl IntoIterator<Item = impl Into<String>>,
        counts: Counts,
    ) -> Self {
        Self {
            applications,
            usernames: usernames.into_iter().map(Into::into).collect(),
            counts,
        }
    }

    pub fn applications(&self) -> &[Application] {
        &self.applications
    }

    pub fn usernames(&self) -> &[String] {
        &self.usernames
    }

    pub fn counts(&self) -> &Counts {
        &self.counts
    }
}

/// One application fixture: its test plans plus the per-application values
/// overlaid onto the default job template.
#[derive(Debug, Clone)]
pub struct Application {
    name: String,
    requester: String,
    test_plans: Vec<TestPlan>,
    overrides: JobOverrides,
}

impl Application {
    pub fn new(
        name: impl Into<String>,
        requester: impl Into<String>,
        test_plans: Vec<TestPlan>,
        overrides: JobOverrides,
    ) -> Self {
        Self {
            name: name.into(),
            requester: requester.into(),
            test_plans,
            overrides,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn requester(&self) -> &str {
        &self.requester
    }

    pub fn test_plans(&self) -> &[TestPlan] {
        &self.test_plans
    }

    pub fn overrides(&self) -> &JobOverrides {
        &self.overrides
    }

    /// Plan paths in declaration order.
    pub fn plan_paths(&self) -> impl Iterator<Item = &str> {
        self.test_plans.iter().map(TestPlan::path)
    }

    /// Total number of test cases across all plans of this application.
    pub fn num_test_cases(&self) -> usize {
        self.test_plans.iter().map(|plan| plan.cases().len()).sum()
    }
}

/// Ordered sequence of test-case names grouped under one plan path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestPlan {
    path: String,
    cases: Vec<String>,
}

impl TestPlan {
    pub fn new(
        path: impl Into<String>,
        cases: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            path: path.into(),
            cases: cases.into_iter().map(Into::into).collect(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn cases(&self) -> &[String] {
        &self.cases
    }
}

/// Per-application values overlaid onto a [`JobTemplate`]. A field that is
/// `Some` replaces the template value; a field that is `None` keeps it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobOverrides {
    pub artifact_url: Option<String>,
}

/// Field values shared by every generated job unless overridden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobTemplate {
    pub artifact_url: String,
    pub tests_repo: String,
    pub tests_repo_branch: String,
    pub image_url: String,
    pub reporter: String,
    pub debug: bool,
}

impl Default for JobTemplate {
    fn default() -> Self {
        Self {
            artifact_url: String::new(),
            tests_repo: "https://github.com/canonical/ubuntu-gui-testing.git".to_string(),
            tests_repo_branch: "main".to_string(),
            image_url: "https://cdimage.ubuntu.com/daily-live/current/questing-desktop-amd64.iso"
                .to_string(),
            reporter: "test_observer".to_string(),
            debug: false,
        }
    }
}

impl JobTemplate {
    /// Merges the overrides onto this template, field by field: a present
    /// override wins, an absent one keeps the template value.
    pub fn merged(&self, overrides: &JobOverrides) -> JobTemplate {
        JobTemplate {
            artifact_url: overrides
                .artifact_url
                .clone()
                .unwrap_or_else(|| self.artifact_url.clone()),
            ..self.clone()
        }
    }
}

/// How many jobs to generate per application, per bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counts {
    pub in_progress: usize,
    pub complete: usize,
    pub pending: usize,
}

impl Counts {
    pub fn new(in_progress: usize, complete: usize, pending: usize) -> Self {
        Self {
            in_progress,
            complete,
            pending,
        }
    }

    pub fn total(&self) -> usize {
        self.in_progress + self.complete + self.pending
    }

    pub(crate) fn for_bucket(&self, bucket: Bucket) -> usize {
        match bucket {
            Bucket::InProgress => self.in_progress,
            Bucket::Complete => self.complete,
            Bucket::Pending => self.pending,
        }
    }
}

/// The three job groups, each with its own randomization policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    InProgress,
    Complete,
    Pending,
}

impl Bucket {
    pub const ALL: [Bucket; 3] = [Bucket::InProgress, Bucket::Complete, Bucket::Pending];

    /// Pending jobs carry no test-case or reporter records.
    pub fn expands_test_cases(&self) -> bool {
        !matches!(self, Bucket::Pending)
    }
}

/// Lifecycle status of a generated job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    Running,
    Pass,
    Fail,
    Pending,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Running => "running",
            JobStatus::Pass => "pass",
            JobStatus::Fail => "fail",
            JobStatus::Pending => "pending",
        }
    }
}

/// Lifecycle state of a generated test-case run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestState {
    Requested,
    Spawning,
    Spawned,
    Running,
    Pass,
    Fail,
}

impl TestState {
    pub fn as_str(&self) -> &'static str {
        match self {
            TestState::Requested => "requested",
            TestState::Spawning => "spawning",
            TestState::Spawned => "spawned",
            TestState::Running => "running",
            TestState::Pass => "pass",
            TestState::Fail => "fail",
        }
    }
}
