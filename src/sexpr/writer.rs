//! Width-aware pretty-printer, the inverse of the reader.
//!
//! A list is laid out on one line when its compact width fits the budget;
//! otherwise one child per line, indented two spaces, with a leading leaf
//! child (typically the operator) kept on the opening line.

use super::Expr;

/// Line width used by `write` and the `Display` impl.
pub const DEFAULT_MAX_WIDTH: usize = 180;

/// Render with the default width.
pub fn write(expr: &Expr) -> String {
    write_wrapped(expr, DEFAULT_MAX_WIDTH, DEFAULT_MAX_WIDTH)
}

/// Render with an explicit line width and per-child sub-width.
pub fn write_wrapped(expr: &Expr, max_width: usize, sub_max_width: usize) -> String {
    let mut out = String::new();
    render(expr, max_width, sub_max_width, "", &mut out);
    out
}

/// Single-line width estimate, short-circuited once it exceeds the budget.
fn compact_width(expr: &Expr, budget: usize) -> usize {
    match expr {
        Expr::Leaf(value) => value.as_ref().map_or(0, |v| v.chars().count()),
        Expr::List(children) => {
            // Parens count as one, plus one separator per child
            let mut total = 1 + children.len();
            for child in children {
                total += compact_width(child, budget.saturating_sub(total));
                if total >= budget {
                    break;
                }
            }
            total
        }
    }
}

fn render(expr: &Expr, max_width: usize, sub_max_width: usize, indent: &str, out: &mut String) {
    match expr {
        Expr::Leaf(value) => {
            out.push_str(indent);
            render_leaf(value.as_deref(), out);
        }
        Expr::List(children) => {
            if compact_width(expr, max_width) <= max_width {
                // Fits; layout is committed, so children get unlimited width
                out.push_str(indent);
                out.push('(');
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        out.push(' ');
                    }
                    render(child, usize::MAX, usize::MAX, "", out);
                }
                out.push(')');
            } else {
                out.push_str(indent);
                out.push('(');
                let child_indent = format!("{}  ", indent);
                for (i, child) in children.iter().enumerate() {
                    if i == 0 && child.is_leaf() {
                        render(child, usize::MAX, usize::MAX, "", out);
                    } else {
                        out.push('\n');
                        render(child, sub_max_width, sub_max_width, &child_indent, out);
                    }
                }
                out.push('\n');
                out.push_str(indent);
                out.push(')');
            }
        }
    }
}

fn render_leaf(value: Option<&str>, out: &mut String) {
    let Some(value) = value else {
        out.push_str("\\0");
        return;
    };
    let should_quote = value.is_empty()
        || value
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '(' | ')' | '#'));
    if should_quote {
        out.push('"');
    }
    for c in value.chars() {
        match c {
            '"' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    if should_quote {
        out.push('"');
    }
}
