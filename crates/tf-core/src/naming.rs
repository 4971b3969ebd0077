//! File naming contract shared by the descriptor generator and the driver
//! emitter.
//!
//! | File | Name |
//! |------|------|
//! | Descriptor | `<module>Opt<n>.txt` |
//! | Driver script | `Make<module>.<ext>` |
//! | Template | `<module>.txt` |
//! | Generated header | `<module>.hpp` |

use std::fmt;

use serde::Serialize;

use crate::arity::Arity;
use crate::dialect::ScriptDialect;
use crate::error::CoreError;

/// A validated module name.
///
/// Module names are spliced into file names and into driver script command
/// lines unquoted, so they are restricted to `[A-Za-z_][A-Za-z0-9_]*`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ModuleName(String);

impl ModuleName {
    /// Validate and wrap a module name.
    pub fn new(name: impl Into<String>) -> Result<Self, CoreError> {
        let name = name.into();
        let mut chars = name.chars();

        let first = match chars.next() {
            Some(c) => c,
            None => {
                return Err(CoreError::InvalidModuleName {
                    name,
                    reason: "must not be empty",
                })
            }
        };

        if !(first.is_ascii_alphabetic() || first == '_') {
            return Err(CoreError::InvalidModuleName {
                name,
                reason: "must start with an ASCII letter or underscore",
            });
        }

        if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(CoreError::InvalidModuleName {
                name,
                reason: "may only contain ASCII letters, digits and underscores",
            });
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Descriptor file for one arity: `<module>Opt<n>.txt`.
#[must_use]
pub fn descriptor_file_name(module: &ModuleName, arity: Arity) -> String {
    format!("{}Opt{}.txt", module, arity)
}

/// Driver script for a module: `Make<module>.bat` or `Make<module>.sh`.
#[must_use]
pub fn driver_script_name(module: &ModuleName, dialect: ScriptDialect) -> String {
    format!("Make{}.{}", module, dialect.extension())
}

/// Template file handed to the substitution engine: `<module>.txt`.
#[must_use]
pub fn template_file_name(module: &ModuleName) -> String {
    format!("{}.txt", module)
}

/// Generated header assembled by the driver script: `<module>.hpp`.
#[must_use]
pub fn generated_header_name(module: &ModuleName) -> String {
    format!("{}.hpp", module)
}
