//! # Vexplain
//!
//! **Provenance formulas, explained in plain English**
//!
//! Vexplain turns the s-expression provenance formulas emitted by a
//! natural-language chart question-answering pipeline into readable
//! explanations of how an answer was computed, worded for the chart the
//! question was asked about.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vexplain::{ChartContext, ChartType, Explainer, ExplainResult, TableView};
//!
//! fn main() -> ExplainResult<()> {
//!     let table = TableView::from_strs(
//!         &["Team", "Goals"],
//!         &[&["Arsenal", "12"], &["Chelsea", "9"]],
//!     )?;
//!     let chart = ChartContext::new(ChartType::VerticalBar, "Team")
//!         .with_length_field("Goals");
//!
//!     let mut explainer = Explainer::new();
//!     let text = explainer.explain("(max (number Goals))", &chart, &table, &table)?;
//!     println!("{}", text);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! ### Formulas
//! A formula is an s-expression tree read by [`sexpr::read_all`]. Leaves
//! carry atom text (or null); lists nest operator applications.
//!
//! ### Templating
//! [`evaluator::evaluate`] walks the tree and renders each operator
//! through a fixed English template, leaving provenance tokens
//! (`fb:row.row.*`, `fb:cell_*.*`) in place.
//!
//! ### Resolution
//! [`resolver::resolve`] binds those tokens to table fields, values and
//! legend colors over several ordered passes, then lexicalizes the result
//! for the chart type.

pub mod chart;
pub mod color;
pub mod engine;
pub mod error;
pub mod evaluator;
pub mod resolver;
pub mod sexpr;
pub mod table;
pub mod template;

pub use chart::{ChartContext, ChartType, ColorMap};
pub use engine::{explain, Explainer, Explanation};
pub use error::{ExplainError, ParseErrorKind, Span};
pub use evaluator::{evaluate, LambdaEnv};
pub use resolver::{resolve, Resolution};
pub use sexpr::{read_all, Expr};
pub use table::TableView;

/// Result type for explanation operations
pub type ExplainResult<T> = Result<T, ExplainError>;

#[cfg(test)]
mod tests;
