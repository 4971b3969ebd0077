//! Driver step execution.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use serde::Serialize;
use tf_core::Arity;
use tf_emit::{DriverScript, DriverStep};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, info};

use crate::error::RunnerError;

/// Configuration for the runner.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Timeout per engine invocation
    pub timeout: Duration,
    /// Delete the transient body file once the script completes
    pub remove_body: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(60),
            remove_body: false,
        }
    }
}

impl RunnerConfig {
    /// Config with a custom engine timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Default::default()
        }
    }
}

/// Outcome of a completed run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Generated header that was assembled
    pub output: PathBuf,
    /// Size of the generated header in bytes
    pub output_bytes: u64,
    /// Steps executed, including the two fixed ones
    pub steps_executed: u64,
    /// Arities the engine ran for, in order
    pub engine_runs: Vec<Arity>,
    /// Wall-clock duration in milliseconds
    pub duration_ms: u64,
}

impl RunReport {
    /// Format as a summary string.
    pub fn format_summary(&self) -> String {
        format!(
            "Assembled {} ({} bytes) in {} ms\n  Engine runs: {}\n  Steps: {}\n",
            self.output.display(),
            self.output_bytes,
            self.duration_ms,
            self.engine_runs.len(),
            self.steps_executed,
        )
    }
}

/// Executes driver scripts without a host shell.
pub struct ScriptRunner {
    config: RunnerConfig,
}

impl ScriptRunner {
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(RunnerConfig::default())
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Run every step of `script`, resolving its relative paths against
    /// `work_dir` (the directory the script was written to).
    pub async fn run(&self, script: &DriverScript, work_dir: &Path) -> Result<RunReport, RunnerError> {
        let start = Instant::now();
        // The engine runs with `work_dir` as its cwd, so a relative engine path
        // must be joined onto an absolute directory.
        let work_dir = absolute_dir(work_dir)?;
        let work_dir = work_dir.as_path();
        let layout = script.layout();
        let target = resolve(work_dir, &script.target());
        let body = resolve(work_dir, &layout.body);

        info!(
            module = %script.module(),
            target = %target.display(),
            "running driver steps"
        );

        let mut engine_runs = Vec::new();
        let mut steps_executed = 0;

        for step in script.steps() {
            debug!(?step, "executing step");
            match step {
                DriverStep::InitOutput => {
                    let header = read_input(&resolve(work_dir, &layout.header)).await?;
                    tokio::fs::write(&target, header)
                        .await
                        .map_err(|source| RunnerError::Io {
                            path: target.clone(),
                            source,
                        })?;
                }
                DriverStep::Substitute { arity } => {
                    self.run_engine(script, *arity, work_dir).await?;
                    engine_runs.push(*arity);
                }
                DriverStep::AppendBody => append(&body, &target).await?,
                DriverStep::AppendFooter => {
                    append(&resolve(work_dir, &layout.footer), &target).await?
                }
            }
            steps_executed += 1;
        }

        if self.config.remove_body && !engine_runs.is_empty() {
            tokio::fs::remove_file(&body)
                .await
                .map_err(|source| RunnerError::Io {
                    path: body.clone(),
                    source,
                })?;
        }

        let output_bytes = tokio::fs::metadata(&target)
            .await
            .map_err(|source| RunnerError::Io {
                path: target.clone(),
                source,
            })?
            .len();

        let report = RunReport {
            output: target,
            output_bytes,
            steps_executed,
            engine_runs,
            duration_ms: start.elapsed().as_millis() as u64,
        };
        info!(bytes = report.output_bytes, "generated header assembled");
        Ok(report)
    }

    /// Invoke the engine for one arity and wait for it, bounded by the timeout.
    async fn run_engine(
        &self,
        script: &DriverScript,
        arity: Arity,
        work_dir: &Path,
    ) -> Result<(), RunnerError> {
        let layout = script.layout();
        let engine = engine_program(work_dir, &layout.engine);
        let descriptor = script.descriptor_for(arity);
        let template = native(&script.template());
        let body = native(&layout.body);

        debug!(
            engine = %engine.display(),
            %arity,
            descriptor = %descriptor,
            "invoking substitution engine"
        );

        let result = tokio::time::timeout(
            self.config.timeout,
            Command::new(&engine)
                .arg("--options")
                .arg(&descriptor)
                .arg("-f")
                .arg(&template)
                .arg("-o")
                .arg(&body)
                .current_dir(work_dir)
                .kill_on_drop(true)
                .output(),
        )
        .await;

        match result {
            Ok(Ok(output)) if output.status.success() => Ok(()),
            Ok(Ok(output)) => Err(RunnerError::EngineFailed {
                arity,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }),
            Ok(Err(source)) => Err(RunnerError::Spawn { engine, source }),
            Err(_) => Err(RunnerError::Timeout {
                arity,
                timeout: self.config.timeout,
            }),
        }
    }
}

/// Layout paths may carry either separator; normalize to `/`.
fn native(path: &str) -> PathBuf {
    PathBuf::from(path.replace('\\', "/"))
}

fn resolve(work_dir: &Path, path: &str) -> PathBuf {
    work_dir.join(native(path))
}

fn absolute_dir(work_dir: &Path) -> Result<PathBuf, RunnerError> {
    if work_dir.is_absolute() {
        return Ok(work_dir.to_path_buf());
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(work_dir))
        .map_err(|source| RunnerError::Io {
            path: work_dir.to_path_buf(),
            source,
        })
}

/// A bare program name is looked up on `PATH`; anything with a separator is
/// relative to the script directory.
fn engine_program(work_dir: &Path, engine: &str) -> PathBuf {
    if engine.contains('/') || engine.contains('\\') {
        resolve(work_dir, engine)
    } else {
        PathBuf::from(engine)
    }
}

async fn read_input(path: &Path) -> Result<Vec<u8>, RunnerError> {
    tokio::fs::read(path)
        .await
        .map_err(|source| RunnerError::reading(path.to_path_buf(), source))
}

async fn append(source_path: &Path, target: &Path) -> Result<(), RunnerError> {
    let content = read_input(source_path).await?;
    let io_err = |source: std::io::Error| RunnerError::Io {
        path: target.to_path_buf(),
        source,
    };

    let mut file = tokio::fs::OpenOptions::new()
        .append(true)
        .create(true)
        .open(target)
        .await
        .map_err(io_err)?;
    file.write_all(&content).await.map_err(io_err)?;
    file.flush().await.map_err(io_err)?;
    Ok(())
}
