//! Recursive template renderer over expression trees.
//!
//! Produces templated English interleaved with raw provenance tokens, which
//! the resolver binds to table fields and values afterwards. Nothing in here
//! is fatal: unbound variables render empty and unmodeled forms fall back to
//! the tree's printed form.

use crate::sexpr::{writer, Expr};
use crate::template;

/// Environment for one lambda application.
///
/// Holds at most one binding; lambdas never nest. The intended behavior of
/// nested lambdas is unspecified, so this stays a single slot on purpose.
#[derive(Debug, Clone, Default)]
pub struct LambdaEnv {
    binding: Option<(String, String)>,
}

impl LambdaEnv {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Environment with a single binding of `name` to rendered text.
    pub fn bind(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            binding: Some((name.into(), value.into())),
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&str> {
        match &self.binding {
            Some((bound, value)) if bound == name => Some(value),
            _ => None,
        }
    }
}

/// Render a tree into templated text under the given lambda environment.
pub fn evaluate(expr: &Expr, env: &LambdaEnv) -> String {
    let children = match expr {
        Expr::Leaf(value) => return value.clone().unwrap_or_default(),
        Expr::List(children) => children,
    };
    let Some(op) = children.first() else {
        return writer::write(expr);
    };
    match op {
        Expr::Leaf(Some(name)) if name == "var" => children
            .get(1)
            .and_then(Expr::leaf_text)
            .and_then(|n| env.lookup(n))
            .unwrap_or_default()
            .to_string(),
        Expr::Leaf(Some(name)) => {
            if let Some(tpl) = template::for_operator(name) {
                let args: Vec<String> = children[1..]
                    .iter()
                    .map(|child| evaluate(child, env))
                    .collect();
                tpl.render(&args)
            } else if let Some(arg) = children.get(1) {
                template::JUXTAPOSITION.render(&[name.clone(), evaluate(arg, env)])
            } else {
                writer::write(expr)
            }
        }
        Expr::Leaf(None) => writer::write(expr),
        Expr::List(op_children) => match op_children.first().and_then(Expr::leaf_text) {
            Some("lambda") => apply_lambda(expr, op_children, children, env),
            Some("reverse") => match (op_children.get(1), children.get(1)) {
                (Some(inner), Some(arg)) => template::REVERSE_APPLICATION
                    .render(&[evaluate(inner, env), evaluate(arg, env)]),
                _ => writer::write(expr),
            },
            _ => writer::write(expr),
        },
    }
}

/// `((lambda x body) arg)`: call-by-value, the argument rendered under the
/// outer environment, the body under a fresh single-binding one.
fn apply_lambda(expr: &Expr, op_children: &[Expr], children: &[Expr], env: &LambdaEnv) -> String {
    let (Some(param), Some(body)) = (
        op_children.get(1).and_then(Expr::leaf_text),
        op_children.get(2),
    ) else {
        return writer::write(expr);
    };
    let arg_text = children
        .get(1)
        .map(|arg| evaluate(arg, env))
        .unwrap_or_default();
    evaluate(body, &LambdaEnv::bind(param, arg_text))
}
