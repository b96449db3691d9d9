use std::path::Path;

use anyhow::Result;
use fixture_gen_rs::{
    RenderedTables, default_model, generate, render_tables, setup_logging, write_files,
};

fn main() -> Result<()> {
    setup_logging()?;

    let model = default_model();
    let fixtures = generate(&model, &mut rand::rng());

    let tables = render_tables(&fixtures)?;
    echo(&tables);
    write_files(&tables, Path::new("."))?;

    tracing::info!(
        jobs = fixtures.jobs.len(),
        tests = fixtures.tests.len(),
        reporters = fixtures.reporters.len(),
        users = fixtures.users.len(),
        "fixture tables written"
    );

    Ok(())
}

// Echoes all four blocks to stdout so a run can be eyeballed without opening
// the files.
fn echo(tables: &RenderedTables) {
    let blocks = [
        ("JOBS", &tables.jobs),
        ("TESTS", &tables.tests),
        ("REPORTERS", &tables.reporters),
        ("USERS", &tables.users),
    ];
    for (title, block) in blocks {
        println!("{}", "*".repeat(100));
        println!("{title}:");
        println!("{}", "*".repeat(100));
        println!("{block}");
    }
}
