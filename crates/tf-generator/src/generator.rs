//! Generation orchestration.
//!
//! Writes every descriptor for arities `0..=N` first, then the driver script,
//! then optionally runs the script's steps. The first failure ends the run;
//! files written before it stay on disk.

use std::path::PathBuf;
use std::time::Instant;

use serde::Serialize;
use tf_core::{Arity, CoreError, ModuleName, ScriptDialect};
use tf_emit::{DriverScript, EmitError, ScriptLayout};
use tf_runner::{RunReport, RunnerConfig, RunnerError, ScriptRunner};
use tracing::info;

/// Generator configuration.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory descriptors and the driver script are written to
    pub output_dir: PathBuf,
    /// Paths and dialect of the driver script
    pub layout: ScriptLayout,
    /// Run the driver steps after writing (None = write only)
    pub run: Option<RunnerConfig>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            layout: ScriptLayout::default(),
            run: None,
        }
    }
}

impl GeneratorConfig {
    /// Windows batch driver in `output_dir`.
    pub fn batch(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Default::default()
        }
    }

    /// POSIX shell driver in `output_dir`.
    pub fn shell(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            layout: ScriptLayout::shell(),
            ..Default::default()
        }
    }
}

/// Result of a generation run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub module: ModuleName,
    pub max_arity: Arity,
    pub dialect: ScriptDialect,
    /// Descriptor files written, in arity order
    pub descriptors: Vec<PathBuf>,
    /// Driver script written
    pub driver_script: PathBuf,
    /// Driver steps: two fixed plus two per arity
    pub step_count: u64,
    /// Present when the driver steps were executed
    pub run: Option<RunReport>,
    /// Wall-clock duration in milliseconds
    pub duration_ms: u64,
}

impl GenerationReport {
    /// Format as a summary string.
    pub fn format_summary(&self) -> String {
        let mut summary = format!(
            "[OK] {} arities 0..={} generated in {} ms\n",
            self.module, self.max_arity, self.duration_ms,
        );

        summary.push_str(&format!("  Descriptors: {}\n", self.descriptors.len()));
        for path in &self.descriptors {
            summary.push_str(&format!("    {}\n", path.display()));
        }
        summary.push_str(&format!(
            "  Driver script ({:?}, {} steps): {}\n",
            self.dialect,
            self.step_count,
            self.driver_script.display()
        ));

        if let Some(ref run) = self.run {
            summary.push_str(&run.format_summary());
        }

        summary
    }
}

/// Writes descriptors and the driver script for a module.
pub struct ScriptGenerator {
    config: GeneratorConfig,
}

impl ScriptGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Write all descriptors and the driver script. Never runs the script.
    pub fn generate(&self, module: &str, max_arity: Arity) -> Result<GenerationReport, GeneratorError> {
        let (report, _) = self.write_files(module, max_arity)?;
        Ok(report)
    }

    /// Write all files, then run the driver steps if the config asks for it.
    pub async fn generate_and_run(
        &self,
        module: &str,
        max_arity: Arity,
    ) -> Result<GenerationReport, GeneratorError> {
        let start = Instant::now();
        let (mut report, script) = self.write_files(module, max_arity)?;

        if let Some(ref run_config) = self.config.run {
            let runner = ScriptRunner::new(run_config.clone());
            report.run = Some(runner.run(&script, &self.config.output_dir).await?);
            report.duration_ms = start.elapsed().as_millis() as u64;
        }

        Ok(report)
    }

    fn write_files(
        &self,
        module: &str,
        max_arity: Arity,
    ) -> Result<(GenerationReport, DriverScript), GeneratorError> {
        let start = Instant::now();
        let module = ModuleName::new(module)?;
        let dir = &self.config.output_dir;

        info!(
            %module,
            %max_arity,
            dir = %dir.display(),
            "generating template family"
        );

        let mut descriptors = Vec::new();
        for arity in Arity::up_to(max_arity) {
            let path = tf_emit::generate(&module, arity).write_to(dir)?;
            descriptors.push(path);
        }

        let script = tf_emit::emit(&module, max_arity, &self.config.layout);
        let driver_script = script.write_to(dir)?;

        info!(
            descriptors = descriptors.len(),
            script = %driver_script.display(),
            "generation complete"
        );

        let report = GenerationReport {
            module,
            max_arity,
            dialect: self.config.layout.dialect,
            descriptors,
            driver_script,
            step_count: script.steps().len() as u64,
            run: None,
            duration_ms: start.elapsed().as_millis() as u64,
        };
        Ok((report, script))
    }
}

/// Generator errors.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error(transparent)]
    InvalidInput(#[from] CoreError),

    #[error(transparent)]
    Emit(#[from] EmitError),

    #[error(transparent)]
    Run(#[from] RunnerError),
}
