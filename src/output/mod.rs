//! Module for converting generated records into CSV rows and writing the four
//! fixture tables.

use std::path::Path;

use serde::Serialize;
use time::format_description::well_known::Rfc3339;

use crate::error::Error;
use crate::generate::{Fixtures, JobRecord, ReporterRecord, TestRecord, UserRecord};


pub const JOBS_FILE: &str = "jobs.csv";
pub const TESTS_FILE: &str = "tests.csv";
pub const REPORTERS_FILE: &str = "reporters.csv";
pub const USERS_FILE: &str = "users.csv";

/// A serializable CSV row with a fixed header.
///
/// The header is written explicitly so that a table with zero data rows still
/// carries its column names.
pub trait CsvRow: Serialize {
    const COLUMNS: &'static [&'static str];
}

/// CSV row mirroring the columns of `jobs.csv`.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct JobRow {
    pub uuid: String,
    pub artifact_url: String,
    pub tests_repo: String,
    pub tests_repo_branch: String,
    pub tests_plans: String,
    pub image_url: String,
    pub reporter: String,
    pub status: String,
    pub submitted_at: String,
    pub requester: String,
    pub debug: bool,
    pub priority: u8,
}

impl CsvRow for JobRow {
    const COLUMNS: &'static [&'static str] = &[
        "uuid",
        "artifact_url",
        "tests_repo",
        "tests_repo_branch",
        "tests_plans",
        "image_url",
        "reporter",
        "status",
        "submitted_at",
        "requester",
        "debug",
        "priority",
    ];
}

impl JobRow {
    fn from_record(record: &JobRecord) -> Result<Self, Error> {
        Ok(Self {
            uuid: record.id.to_string(),
            artifact_url: record.artifact_url.clone(),
            tests_repo: record.tests_repo.clone(),
            tests_repo_branch: record.tests_repo_branch.clone(),
            tests_plans: brace_join(&record.tests_plans),
            image_url: record.image_url.clone(),
            reporter: record.reporter.clone(),
            status: record.status.as_str().to_string(),
            submitted_at: record.submitted_at.format(&Rfc3339)?,
            requester: record.requester.clone(),
            debug: record.debug,
            priority: record.priority,
        })
    }
}

/// CSV row mirroring the columns of `tests.csv`. The `uuid` column holds the
/// id of the owning job.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct TestRow {
    pub uuid: String,
    pub test_case: String,
    pub vnc_address: String,
    pub state: String,
    pub results_url: String,
    pub updated_at: String,
}

impl CsvRow for TestRow {
    const COLUMNS: &'static [&'static str] = &[
        "uuid",
        "test_case",
        "vnc_address",
        "state",
        "results_url",
        "updated_at",
    ];
}

impl TestRow {
    fn from_record(record: &TestRecord) -> Result<Self, Error> {
        Ok(Self {
            uuid: record.job_id.to_string(),
            test_case: record.test_case.clone(),
            vnc_address: record.vnc_address(),
            state: record.state.as_str().to_string(),
            // The consuming table stores a literal `null` for missing results.
            results_url: record
                .results_url
                .clone()
                .unwrap_or_else(|| "null".to_string()),
            updated_at: record.updated_at.format(&Rfc3339)?,
        })
    }
}

/// CSV row mirroring the columns of `reporters.csv`.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct ReporterRow {
    pub uuid: String,
    pub base_reporting_url: String,
}

impl CsvRow for ReporterRow {
    const COLUMNS: &'static [&'static str] = &["uuid", "base_reporting_url"];
}

impl ReporterRow {
    fn from_record(record: &ReporterRecord) -> Self {
        Self {
            uuid: record.job_id.to_string(),
            base_reporting_url: record.base_reporting_url.clone(),
        }
    }
}

/// CSV row mirroring the columns of `users.csv`.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct UserRow {
    pub username: String,
    pub key: String,
    pub maximum_priority: u8,
}

impl CsvRow for UserRow {
    const COLUMNS: &'static [&'static str] = &["username", "key", "maximum_priority"];
}

impl UserRow {
    fn from_record(record: &UserRecord) -> Self {
        Self {
            username: record.username.clone(),
            key: record.key.clone(),
            maximum_priority: record.maximum_priority,
        }
    }
}

/// The four rendered CSV blocks of one run, header row included.
#[derive(Debug)]
pub struct RenderedTables {
    pub jobs: String,
    pub tests: String,
    pub reporters: String,
    pub users: String,
}

pub fn render_tables(fixtures: &Fixtures) -> Result<RenderedTables, Error> {
    let jobs = fixtures
        .jobs
        .iter()
        .map(JobRow::from_record)
        .collect::<Result<Vec<_>, _>>()?;
    let tests = fixtures
        .tests
        .iter()
        .map(TestRow::from_record)
        .collect::<Result<Vec<_>, _>>()?;
    let reporters: Vec<_> = fixtures
        .reporters
        .iter()
        .map(ReporterRow::from_record)
        .collect();
    let users: Vec<_> = fixtures.users.iter().map(UserRow::from_record).collect();

    Ok(RenderedTables {
        jobs: render(&jobs)?,
        tests: render(&tests)?,
        reporters: render(&reporters)?,
        users: render(&users)?,
    })
}

/// Renders one table to CSV text. Fields containing the delimiter (only
/// `tests_plans`, a brace-joined set) are quoted by the writer; all other
/// fields are delimiter-free by construction.
pub fn render<T: CsvRow>(rows: &[T]) -> Result<String, Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    wtr.write_record(T::COLUMNS)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    let buf = wtr.into_inner().map_err(|e| Error::Io(e.into_error()))?;
    Ok(String::from_utf8(buf).expect("csv writer emits valid utf-8"))
}

/// Writes the four tables into `dir`, overwriting existing files.
pub fn write_files(tables: &RenderedTables, dir: &Path) -> Result<(), Error> {
    std::fs::write(dir.join(JOBS_FILE), &tables.jobs)?;
    std::fs::write(dir.join(TESTS_FILE), &tables.tests)?;
    std::fs::write(dir.join(REPORTERS_FILE), &tables.reporters)?;
    std::fs::write(dir.join(USERS_FILE), &tables.users)?;
    Ok(())
}

/// Serializes a set of plan paths the way the consuming table expects:
/// `{path,path,...}`.
fn brace_join(paths: &[String]) -> String {
    format!("{{{}}}", paths.join(","))
}
