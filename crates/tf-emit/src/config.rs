//! Driver script layout.
//!
//! Paths are stored with `/` separators and converted to the dialect's
//! separator when rendered. They are relative to the directory the driver
//! script runs in.

use tf_core::naming::{generated_header_name, template_file_name};
use tf_core::{ModuleName, ScriptDialect};

/// Default location of the substitution engine, relative to the script.
pub const ENGINE_PATH_DEFAULT: &str = "../../../../wintools/ssr/ssr";

/// Paths and dialect used by the driver script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLayout {
    /// Shell dialect the script is written in
    pub dialect: ScriptDialect,
    /// External substitution engine executable
    pub engine: String,
    /// Text copied verbatim to the start of the generated header
    pub header: String,
    /// Text appended verbatim to the end of the generated header
    pub footer: String,
    /// Transient file each engine run writes its body fragment to
    pub body: String,
    /// Template override (default: `<module>.txt`)
    pub template: Option<String>,
    /// Generated header override (default: `../<module>.hpp`)
    pub target: Option<String>,
}

impl Default for ScriptLayout {
    fn default() -> Self {
        Self {
            dialect: ScriptDialect::Batch,
            engine: ENGINE_PATH_DEFAULT.to_string(),
            header: "Header.txt".to_string(),
            footer: "Footer.txt".to_string(),
            body: "body.txt".to_string(),
            template: None,
            target: None,
        }
    }
}

impl ScriptLayout {
    /// Windows batch layout.
    pub fn batch() -> Self {
        Self::default()
    }

    /// POSIX shell layout.
    pub fn shell() -> Self {
        Self {
            dialect: ScriptDialect::Shell,
            ..Default::default()
        }
    }

    /// Template file for `module`.
    pub fn template_for(&self, module: &ModuleName) -> String {
        self.template
            .clone()
            .unwrap_or_else(|| template_file_name(module))
    }

    /// Generated header for `module`.
    pub fn target_for(&self, module: &ModuleName) -> String {
        self.target
            .clone()
            .unwrap_or_else(|| format!("../{}", generated_header_name(module)))
    }
}
