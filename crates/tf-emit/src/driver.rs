//! Driver script emission.
//!
//! The script initializes the generated header from the header file, then for
//! every arity in increasing order runs the engine on that arity's descriptor
//! and appends the resulting body, and finally appends the footer.

use std::path::{Path, PathBuf};

use tf_core::naming::{descriptor_file_name, driver_script_name};
use tf_core::{Arity, ModuleName};
use tracing::debug;

use crate::config::ScriptLayout;
use crate::error::{write_file, EmitError};

/// One step of the driver script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverStep {
    /// Copy the header over the generated header, truncating it
    InitOutput,
    /// Run the engine on one arity's descriptor, writing the body file
    Substitute { arity: Arity },
    /// Append the body file to the generated header
    AppendBody,
    /// Append the footer to the generated header
    AppendFooter,
}

/// Ordered driver steps for one module, plus the layout they refer to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverScript {
    module: ModuleName,
    max_arity: Arity,
    layout: ScriptLayout,
    steps: Vec<DriverStep>,
}

/// Build the driver script for arities `0..=max_arity`.
#[must_use]
pub fn emit(module: &ModuleName, max_arity: Arity, layout: &ScriptLayout) -> DriverScript {
    let mut steps = vec![DriverStep::InitOutput];
    for arity in Arity::up_to(max_arity) {
        steps.push(DriverStep::Substitute { arity });
        steps.push(DriverStep::AppendBody);
    }
    steps.push(DriverStep::AppendFooter);

    DriverScript {
        module: module.clone(),
        max_arity,
        layout: layout.clone(),
        steps,
    }
}

impl DriverScript {
    pub fn module(&self) -> &ModuleName {
        &self.module
    }

    pub fn max_arity(&self) -> Arity {
        self.max_arity
    }

    pub fn layout(&self) -> &ScriptLayout {
        &self.layout
    }

    pub fn steps(&self) -> &[DriverStep] {
        &self.steps
    }

    /// Arities the script runs the engine for, in script order.
    pub fn substitution_arities(&self) -> Vec<Arity> {
        self.steps
            .iter()
            .filter_map(|step| match step {
                DriverStep::Substitute { arity } => Some(*arity),
                _ => None,
            })
            .collect()
    }

    /// Descriptor file the script passes to the engine for `arity`.
    pub fn descriptor_for(&self, arity: Arity) -> String {
        descriptor_file_name(&self.module, arity)
    }

    /// Template file handed to the engine.
    pub fn template(&self) -> String {
        self.layout.template_for(&self.module)
    }

    /// Generated header the script assembles.
    pub fn target(&self) -> String {
        self.layout.target_for(&self.module)
    }

    /// `Make<module>.<ext>`
    pub fn file_name(&self) -> String {
        driver_script_name(&self.module, self.layout.dialect)
    }

    /// Command line for a single step in the layout's dialect.
    #[must_use]
    pub fn render_step(&self, step: &DriverStep) -> String {
        let dialect = self.layout.dialect;
        let cat = dialect.cat_command();
        let target = dialect.render_path(&self.target());

        match step {
            DriverStep::InitOutput => {
                format!("{} {} >{}", cat, dialect.render_path(&self.layout.header), target)
            }
            DriverStep::Substitute { arity } => format!(
                "{} --options {} -f {} -o {}",
                dialect.render_path(&self.layout.engine),
                self.descriptor_for(*arity),
                dialect.render_path(&self.template()),
                dialect.render_path(&self.layout.body),
            ),
            DriverStep::AppendBody => {
                format!("{} {} >>{}", cat, dialect.render_path(&self.layout.body), target)
            }
            DriverStep::AppendFooter => {
                format!("{} {} >>{}", cat, dialect.render_path(&self.layout.footer), target)
            }
        }
    }

    /// Full script text, newline-terminated.
    #[must_use]
    pub fn render(&self) -> String {
        let mut script = String::new();
        for line in self.layout.dialect.prologue() {
            script.push_str(line);
            script.push('\n');
        }
        for step in &self.steps {
            script.push_str(&self.render_step(step));
            script.push('\n');
        }
        script
    }

    /// Write into `dir`, overwriting any previous script of the same name.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, EmitError> {
        let path = dir.join(self.file_name());
        write_file(&path, &self.render())?;
        debug!(path = %path.display(), steps = self.steps.len(), "wrote driver script");
        Ok(path)
    }
}
