//! Fixed text templates keyed by operator name.
//!
//! Patterns carry 1-based positional placeholders `[!1]`, `[!2]`, ... and one
//! reusable key placeholder `[!!]`. A placeholder with no matching argument
//! stays in the output as literal text; that behavior is relied on elsewhere
//! and covered by a regression test, so it must not be "fixed".

/// A substitution pattern over positional placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pattern: &'static str,
}

/// Rendering for `(reverse f) x` applications: `"<f's argument> of <x>"`.
pub const REVERSE_APPLICATION: Template = Template {
    pattern: "[!1] of [!2]",
};

/// Fallback rendering for unmodeled prefix operators.
pub const JUXTAPOSITION: Template = Template {
    pattern: "[!1] [!2]",
};

impl Template {
    pub fn pattern(&self) -> &'static str {
        self.pattern
    }

    /// Substitute positional arguments, leaving the key placeholder alone.
    pub fn render(&self, args: &[String]) -> String {
        self.render_with_key(args, "[!!]")
    }

    /// Substitute positional arguments and the `[!!]` key placeholder.
    pub fn render_with_key(&self, args: &[String], key: &str) -> String {
        let mut text = self.pattern.to_string();
        for (idx, arg) in args.iter().enumerate() {
            let token = format!("[!{}]", idx + 1);
            text = text.replace(&token, arg);
        }
        text.replace("[!!]", key)
    }
}

/// Template for a known operator name, or `None` for everything else.
pub fn for_operator(op: &str) -> Option<Template> {
    let pattern = match op {
        "argmax" => "[!3] with the greatest [!4]",
        "argmin" => "[!3] with the smallest [!4]",
        ">=" => "greater than or equal to [!1]",
        ">" => "greater than [!1]",
        "<=" => "less than or equal to [!1]",
        "<" => "less than [!1]",
        "-" => "difference between [!1] and [!2]",
        "count" => "number of [!1]",
        "sum" => "sum of [!1]",
        "min" => "minimum [!1]",
        "max" => "maximum [!1]",
        "avg" => "average of [!1]",
        "or" => "[!1] or [!2]",
        "and" => "[!1] and [!2]",
        "number" => "[!1]",
        "lambda" => "[!2]",
        "reverse" => "[!1]",
        _ => return None,
    };
    Some(Template { pattern })
}
