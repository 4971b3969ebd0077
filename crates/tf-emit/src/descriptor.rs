//! Descriptor generation.
//!
//! A descriptor lists, for one arity, the replacement text of every
//! placeholder. Each list-style replacement is a fixed prefix followed by one
//! fragment per parameter index `1..=n`:
//!
//! | Placeholder | Prefix | Fragment for `i` |
//! |-------------|--------|------------------|
//! | `arg_count` | `n` | none |
//! | `template_args` | `class F` | `, class Pi` |
//! | `function_args` | `F f, Context context` | `, Pi pi` |
//! | `init_list` | `f(f)` | `, pi(pi)` |
//! | `func_call_args` | empty | `, pi` |
//! | `member_def` | `F f;` | ` Pi pi;` |
//! | `template_call_args` | `F` | `, Pi` |
//!
//! `func_call_args` keeps the leading `, ` on its first fragment; template
//! files splice it directly after another argument.

use std::path::{Path, PathBuf};

use tf_core::naming::descriptor_file_name;
use tf_core::{Arity, ModuleName, Placeholder, SubstitutionRule};
use tracing::debug;

use crate::error::{write_file, EmitError};

/// The substitution rules for one arity of a module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorFile {
    module: ModuleName,
    arity: Arity,
    rules: Vec<SubstitutionRule>,
}

/// Build the descriptor for `module` at `arity`.
///
/// Pure: the result depends on the arguments only.
#[must_use]
pub fn generate(module: &ModuleName, arity: Arity) -> DescriptorFile {
    let rules = Placeholder::ALL
        .iter()
        .map(|&placeholder| SubstitutionRule::new(placeholder, replacement(placeholder, arity)))
        .collect();

    DescriptorFile {
        module: module.clone(),
        arity,
        rules,
    }
}

/// Replacement text of `placeholder` at `arity`.
#[must_use]
pub fn replacement(placeholder: Placeholder, arity: Arity) -> String {
    match placeholder {
        Placeholder::ArgCount => arity.to_string(),
        Placeholder::TemplateArgs => prefixed("class F", arity, |i| format!(", class P{i}")),
        Placeholder::FunctionArgs => {
            prefixed("F f, Context context", arity, |i| format!(", P{i} p{i}"))
        }
        Placeholder::InitList => prefixed("f(f)", arity, |i| format!(", p{i}(p{i})")),
        Placeholder::FuncCallArgs => prefixed("", arity, |i| format!(", p{i}")),
        Placeholder::MemberDef => prefixed("F f;", arity, |i| format!(" P{i} p{i};")),
        Placeholder::TemplateCallArgs => prefixed("F", arity, |i| format!(", P{i}")),
    }
}

fn prefixed(prefix: &str, arity: Arity, fragment: impl Fn(u32) -> String) -> String {
    let params: String = arity.param_indices().map(fragment).collect();
    format!("{prefix}{params}")
}

impl DescriptorFile {
    pub fn module(&self) -> &ModuleName {
        &self.module
    }

    pub fn arity(&self) -> Arity {
        self.arity
    }

    /// Rules in placeholder order.
    pub fn rules(&self) -> &[SubstitutionRule] {
        &self.rules
    }

    /// Rule for a specific placeholder.
    pub fn rule(&self, placeholder: Placeholder) -> Option<&SubstitutionRule> {
        self.rules.iter().find(|r| r.placeholder == placeholder)
    }

    /// `<module>Opt<n>.txt`
    pub fn file_name(&self) -> String {
        descriptor_file_name(&self.module, self.arity)
    }

    /// File content: one engine option line per rule, each newline-terminated.
    #[must_use]
    pub fn render(&self) -> String {
        let mut content = String::new();
        for rule in &self.rules {
            content.push_str(&rule.render_line());
            content.push('\n');
        }
        content
    }

    /// Write into `dir`, overwriting any previous file of the same name.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, EmitError> {
        let path = dir.join(self.file_name());
        write_file(&path, &self.render())?;
        debug!(path = %path.display(), arity = %self.arity, "wrote descriptor");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module() -> ModuleName {
        ModuleName::new("AsyncCall").unwrap()
    }

    fn text(arity: u32, placeholder: Placeholder) -> String {
        generate(&module(), Arity::new(arity))
            .rule(placeholder)
            .map(|r| r.replacement.clone())
            .unwrap()
    }

    #[test]
    fn test_arity_zero_reduces_to_prefixes() {
        assert_eq!(text(0, Placeholder::ArgCount), "0");
        assert_eq!(text(0, Placeholder::TemplateArgs), "class F");
        assert_eq!(text(0, Placeholder::FunctionArgs), "F f, Context context");
        assert_eq!(text(0, Placeholder::InitList), "f(f)");
        assert_eq!(text(0, Placeholder::FuncCallArgs), "");
        assert_eq!(text(0, Placeholder::MemberDef), "F f;");
        assert_eq!(text(0, Placeholder::TemplateCallArgs), "F");
    }

    #[test]
    fn test_arity_three() {
        assert_eq!(text(3, Placeholder::ArgCount), "3");
        assert_eq!(
            text(3, Placeholder::TemplateArgs),
            "class F, class P1, class P2, class P3"
        );
        assert_eq!(
            text(3, Placeholder::FunctionArgs),
            "F f, Context context, P1 p1, P2 p2, P3 p3"
        );
        assert_eq!(text(3, Placeholder::InitList), "f(f), p1(p1), p2(p2), p3(p3)");
        assert_eq!(text(3, Placeholder::FuncCallArgs), ", p1, p2, p3");
        assert_eq!(text(3, Placeholder::MemberDef), "F f; P1 p1; P2 p2; P3 p3;");
        assert_eq!(text(3, Placeholder::TemplateCallArgs), "F, P1, P2, P3");
    }

    #[test]
    fn test_arg_count_is_decimal_arity() {
        for n in [0, 1, 9, 10, 42, 1000] {
            assert_eq!(text(n, Placeholder::ArgCount), n.to_string());
        }
    }

    #[test]
    fn test_func_call_args_leading_separator() {
        assert_eq!(text(1, Placeholder::FuncCallArgs), ", p1");
    }

    #[test]
    fn test_rules_in_placeholder_order() {
        let descriptor = generate(&module(), Arity::new(2));
        let order: Vec<Placeholder> = descriptor.rules().iter().map(|r| r.placeholder).collect();
        assert_eq!(order, Placeholder::ALL.to_vec());
    }

    #[test]
    fn test_render_arity_one() {
        let rendered = generate(&module(), Arity::new(1)).render();
        let expected = "\
-s \"#arg_count#\" -r \"1\"
-s \"#template_args#\" -r \"class F, class P1\"
-s \"#function_args#\" -r \"F f, Context context, P1 p1\"
-s \"#init_list#\" -r \"f(f), p1(p1)\"
-s \"#func_call_args#\" -r \", p1\"
-s \"#member_def#\" -r \"F f; P1 p1;\"
-s \"#template_call_args#\" -r \"F, P1\"
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_generation_is_deterministic() {
        for n in 0..8 {
            let a = generate(&module(), Arity::new(n)).render();
            let b = generate(&module(), Arity::new(n)).render();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_write_to_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let stale = dir.path().join("AsyncCallOpt2.txt");
        std::fs::write(&stale, "stale content that is longer than nothing\n".repeat(50)).unwrap();

        let descriptor = generate(&module(), Arity::new(2));
        let path = descriptor.write_to(dir.path()).unwrap();

        assert_eq!(path, stale);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), descriptor.render());
    }

    #[test]
    fn test_write_to_missing_dir_fails_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");

        let err = generate(&module(), Arity::ZERO).write_to(&missing).unwrap_err();
        assert!(err.to_string().contains("AsyncCallOpt0.txt"));
    }
}
