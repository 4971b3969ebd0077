use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use tf_core::{Arity, ScriptDialect};
use tf_emit::ScriptLayout;
use tf_runner::RunnerConfig;

use crate::generator::GeneratorConfig;

/// Generate substitution descriptors and a driver script for an
/// arity-parameterized C++ template family.
#[derive(Parser, Debug)]
#[command(name = "tf-make-script", version, about, long_about = None)]
pub struct Args {
    /// The module (template family) to generate.
    #[arg(long, value_name = "NAME")]
    pub module: String,

    /// The maximum number of parameters the template will support.
    #[arg(long = "maxparam", value_name = "NUMBER")]
    pub max_param: u32,

    /// Directory the descriptors and the driver script are written to.
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Shell dialect of the driver script.
    #[arg(long, value_enum, default_value_t = DialectArg::Batch)]
    pub dialect: DialectArg,

    /// Substitution engine, relative to the output directory or on PATH.
    #[arg(long, value_name = "PATH")]
    pub engine: Option<String>,

    /// Header text copied to the start of the generated header.
    #[arg(long, value_name = "PATH")]
    pub header: Option<String>,

    /// Footer text appended to the end of the generated header.
    #[arg(long, value_name = "PATH")]
    pub footer: Option<String>,

    /// Transient file each engine run writes its body to.
    #[arg(long, value_name = "PATH")]
    pub body: Option<String>,

    /// Template file passed to the engine (default: <module>.txt).
    #[arg(long, value_name = "PATH")]
    pub template: Option<String>,

    /// Generated header the script assembles (default: ../<module>.hpp).
    #[arg(long, value_name = "PATH")]
    pub target: Option<String>,

    /// Execute the driver steps after generating.
    #[arg(long)]
    pub run: bool,

    /// Timeout per engine invocation when running.
    #[arg(long, value_name = "SECS", default_value_t = 60)]
    pub timeout_secs: u64,

    /// Delete the body file after a successful run.
    #[arg(long, requires = "run")]
    pub remove_body: bool,

    /// Format of the summary printed on success.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub report: ReportFormat,

    /// Enable debug logging (RUST_LOG overrides).
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DialectArg {
    /// Windows batch file (MakeFoo.bat)
    Batch,
    /// POSIX shell script (MakeFoo.sh)
    Shell,
}

impl From<DialectArg> for ScriptDialect {
    fn from(arg: DialectArg) -> Self {
        match arg {
            DialectArg::Batch => ScriptDialect::Batch,
            DialectArg::Shell => ScriptDialect::Shell,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

impl Args {
    pub fn max_arity(&self) -> Arity {
        Arity::new(self.max_param)
    }

    /// Default tracing filter when RUST_LOG is unset.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }

    /// Script layout with command-line overrides applied.
    pub fn layout(&self) -> ScriptLayout {
        let mut layout = ScriptLayout {
            dialect: self.dialect.into(),
            template: self.template.clone(),
            target: self.target.clone(),
            ..Default::default()
        };

        if let Some(ref engine) = self.engine {
            layout.engine = engine.clone();
        }
        if let Some(ref header) = self.header {
            layout.header = header.clone();
        }
        if let Some(ref footer) = self.footer {
            layout.footer = footer.clone();
        }
        if let Some(ref body) = self.body {
            layout.body = body.clone();
        }

        layout
    }

    pub fn config(&self) -> GeneratorConfig {
        let run = self.run.then(|| RunnerConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            remove_body: self.remove_body,
        });

        GeneratorConfig {
            output_dir: self.output_dir.clone(),
            layout: self.layout(),
            run,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tf_emit::config::ENGINE_PATH_DEFAULT;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("tf-make-script").chain(args.iter().copied()))
    }

    #[test]
    fn test_required_arguments() {
        let args = parse(&["--module", "Spawn", "--maxparam", "4"]).unwrap();
        assert_eq!(args.module, "Spawn");
        assert_eq!(args.max_arity(), Arity::new(4));
        assert_eq!(args.output_dir, PathBuf::from("."));
        assert_eq!(args.report, ReportFormat::Text);
        assert!(!args.run);

        assert!(parse(&["--module", "Spawn"]).is_err());
        assert!(parse(&["--maxparam", "4"]).is_err());
    }

    #[test]
    fn test_rejects_negative_and_non_numeric_maxparam() {
        assert!(parse(&["--module", "Spawn", "--maxparam", "-1"]).is_err());
        assert!(parse(&["--module", "Spawn", "--maxparam=-1"]).is_err());
        assert!(parse(&["--module", "Spawn", "--maxparam", "three"]).is_err());
        assert!(parse(&["--module", "Spawn", "--maxparam", "2.5"]).is_err());
    }

    #[test]
    fn test_default_layout_matches_batch_preset() {
        let args = parse(&["--module", "Spawn", "--maxparam", "1"]).unwrap();
        assert_eq!(args.layout(), ScriptLayout::batch());
        assert!(args.config().run.is_none());
    }

    #[test]
    fn test_layout_overrides() {
        let args = parse(&[
            "--module", "Spawn", "--maxparam", "1",
            "--dialect", "shell",
            "--engine", "ssr",
            "--header", "h.txt",
            "--footer", "f.txt",
            "--body", "b.txt",
            "--template", "t.txt",
            "--target", "include/Spawn.hpp",
        ])
        .unwrap();

        let layout = args.layout();
        assert_eq!(layout.dialect, ScriptDialect::Shell);
        assert_eq!(layout.engine, "ssr");
        assert_ne!(layout.engine, ENGINE_PATH_DEFAULT);
        assert_eq!(layout.header, "h.txt");
        assert_eq!(layout.footer, "f.txt");
        assert_eq!(layout.body, "b.txt");
        assert_eq!(layout.template.as_deref(), Some("t.txt"));
        assert_eq!(layout.target.as_deref(), Some("include/Spawn.hpp"));
    }

    #[test]
    fn test_run_config() {
        let args = parse(&[
            "--module", "Spawn", "--maxparam", "1", "--run", "--timeout-secs", "5", "--remove-body",
        ])
        .unwrap();

        let run = args.config().run.unwrap();
        assert_eq!(run.timeout, Duration::from_secs(5));
        assert!(run.remove_body);

        assert!(parse(&["--module", "Spawn", "--maxparam", "1", "--remove-body"]).is_err());
    }

    #[test]
    fn test_verbose_selects_debug_filter() {
        let args = parse(&["--module", "Spawn", "--maxparam", "1", "-v"]).unwrap();
        assert_eq!(args.log_filter(), "debug");
    }
}
