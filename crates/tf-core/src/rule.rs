//! Substitution placeholders and rules.

/// The fixed placeholder tokens of the template pattern, in descriptor order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    /// Number of extra parameters
    ArgCount,
    /// `class F, class P1, ...`
    TemplateArgs,
    /// `F f, Context context, P1 p1, ...`
    FunctionArgs,
    /// `f(f), p1(p1), ...`
    InitList,
    /// `, p1, p2, ...`
    FuncCallArgs,
    /// `F f; P1 p1; ...`
    MemberDef,
    /// `F, P1, ...`
    TemplateCallArgs,
}

impl Placeholder {
    /// Every placeholder, in the order rules appear in a descriptor file.
    pub const ALL: [Placeholder; 7] = [
        Placeholder::ArgCount,
        Placeholder::TemplateArgs,
        Placeholder::FunctionArgs,
        Placeholder::InitList,
        Placeholder::FuncCallArgs,
        Placeholder::MemberDef,
        Placeholder::TemplateCallArgs,
    ];

    /// Bare token name.
    pub fn token(&self) -> &'static str {
        match self {
            Placeholder::ArgCount => "arg_count",
            Placeholder::TemplateArgs => "template_args",
            Placeholder::FunctionArgs => "function_args",
            Placeholder::InitList => "init_list",
            Placeholder::FuncCallArgs => "func_call_args",
            Placeholder::MemberDef => "member_def",
            Placeholder::TemplateCallArgs => "template_call_args",
        }
    }

    /// Token as it appears in the template file, e.g. `#arg_count#`.
    pub fn marker(&self) -> String {
        format!("#{}#", self.token())
    }
}

/// One placeholder and the literal text that replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionRule {
    pub placeholder: Placeholder,
    pub replacement: String,
}

impl SubstitutionRule {
    pub fn new(placeholder: Placeholder, replacement: impl Into<String>) -> Self {
        Self {
            placeholder,
            replacement: replacement.into(),
        }
    }

    /// Render as an engine option line: `-s "#token#" -r "replacement"`.
    ///
    /// No trailing newline.
    #[must_use]
    pub fn render_line(&self) -> String {
        format!("-s \"{}\" -r \"{}\"", self.placeholder.marker(), self.replacement)
    }
}
