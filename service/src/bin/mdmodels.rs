//! `mdmodels` command-line interface
//!
//! This binary renders `mdmodels` data models into Markdown documentation or
//! Python classes.

use mdmodels_service::cli::MdModelsApp;
use std::process::ExitCode;

fn main() -> ExitCode {
    MdModelsApp::from_args().run()
}
