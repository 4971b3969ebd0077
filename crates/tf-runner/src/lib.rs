//! # tf-runner
//!
//! Executes a driver script's steps in-process instead of through a host
//! shell.
//!
//! Steps run strictly in script order inside the script's directory:
//!
//! | Step | Action |
//! |------|--------|
//! | `InitOutput` | copy header over the generated header |
//! | `Substitute` | run the engine (`--options <opt> -f <template> -o <body>`) |
//! | `AppendBody` | append the body file to the generated header |
//! | `AppendFooter` | append the footer to the generated header |
//!
//! Every failure is fatal. Files written before the failure are left alone.

pub mod error;
pub mod runner;

pub use error::RunnerError;
pub use runner::{RunReport, RunnerConfig, ScriptRunner};
