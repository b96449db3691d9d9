mod catalog;
mod domain;
mod error;
mod generate;
mod output;
mod telemetry;

pub use catalog::default_model;
pub use domain::{
    Application, Bucket, Counts, JobOverrides, JobStatus, JobTemplate, Model, TestPlan, TestState,
};
pub use error::Error;
pub use generate::{Fixtures, JobRecord, ReporterRecord, TestRecord, UserRecord};
pub use output::{
    CsvRow, JOBS_FILE, JobRow, REPORTERS_FILE, RenderedTables, ReporterRow, TESTS_FILE, TestRow,
    USERS_FILE, UserRow, render, render_tables, write_files,
};
pub use telemetry::setup_logging;

use rand::Rng;

/// Expands a fixture [`Model`] into the four record tables.
///
/// This is the single public entry point of the crate's logic. It walks every
/// application and bucket of the model and produces [`Fixtures`]: ordered
/// sequences of job, test-case, reporter, and user records ready for CSV
/// serialization via [`render_tables`].
///
/// # Randomness
///
/// UUIDs, priorities, VNC ports, complete-job outcomes, and in-flight test
/// states are drawn from the caller-supplied `rng`. The shipped binary passes
/// the unseeded thread-local generator so successive runs differ; tests can
/// pass a seeded `StdRng` instead.
///
/// # Example
///
/// ```no_run
/// use fixture_gen_rs::{default_model, generate, render_tables, write_files};
///
/// let model = default_model();
/// let fixtures = generate(&model, &mut rand::rng());
/// let tables = render_tables(&fixtures).unwrap();
/// write_files(&tables, std::path::Path::new(".")).unwrap();
/// ```
pub fn generate(model: &Model, rng: &mut impl Rng) -> Fixtures {
    generate::generate_fixtures(model, rng)
}
