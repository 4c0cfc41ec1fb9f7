//! Black-box behavior of the sweep CLI.
//!
//! These tests are black-box: they invoke the CLI binary against a
//! throwaway state directory and target folder, and verify stdout,
//! stderr, exit codes and what is left on disk.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

#[path = "specs/prelude.rs"]
mod prelude;

// cli/
#[path = "specs/cli/help.rs"]
mod cli_help;

// cleanup/
#[path = "specs/cleanup/extensions.rs"]
mod cleanup_extensions;
#[path = "specs/cleanup/run.rs"]
mod cleanup_run;

// config/
#[path = "specs/config/settings.rs"]
mod config_settings;

// service/
#[path = "specs/service/registration.rs"]
mod service_registration;
