//! Module holding the compiled-in fixture model. There is deliberately no
//! configuration surface: the applications, usernames, and bucket counts are
//! part of the binary and changed by editing this file.

use crate::domain::{Application, Counts, JobOverrides, Model, TestPlan};

/// The model the shipped binary expands: four desktop applications under
/// test, their requesters as users, and a bucket mix of 3 in-progress,
/// 10 complete, and 2 pending jobs per application.
pub fn default_model() -> Model {
    Model::new(
        vec![
            firefox_example(),
            firmware_updater(),
            gnome_shell(),
            multipass(),
        ],
        ["andersson123", "dloose", "ashuntu", "hk21702"],
        Counts::new(3, 10, 2),
    )
}

fn firefox_example() -> Application {
    Application::new(
        "firefox-example",
        "andersson123",
        vec![
            TestPlan::new(
                "tests/firefox-example/plans/extended.yaml",
                ["Firefox-Example-Basic", "Firefox-Example-New-Tab"],
            ),
            TestPlan::new(
                "tests/firefox-example/plans/regular.yaml",
                ["Firefox-Example-Basic"],
            ),
        ],
        empty_artifact(),
    )
}

fn firmware_updater() -> Application {
    Application::new(
        "firmware-updater",
        "dloose",
        vec![TestPlan::new(
            "tests/firmware-updater/plans/tpm-fde.yaml",
            ["Firmware-Updater-Tpm-Fde"],
        )],
        empty_artifact(),
    )
}

fn gnome_shell() -> Application {
    Application::new(
        "gnome-shell",
        "ashuntu",
        vec![TestPlan::new(
            "tests/gnome-shell/plans/regular.yaml",
            ["Gnome-Shell-Basic"],
        )],
        empty_artifact(),
    )
}

fn multipass() -> Application {
    Application::new(
        "multipass",
        "hk21702",
        vec![TestPlan::new(
            "tests/multipass/plans/regular.yaml",
            ["Multipass-Basic"],
        )],
        empty_artifact(),
    )
}

// Every current application pins artifact_url to the empty string; no
// artifact store exists yet.
fn empty_artifact() -> JobOverrides {
    JobOverrides {
        artifact_url: Some(String::new()),
    }
}
