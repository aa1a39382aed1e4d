//! Front door tying the stages together: parse the formula, template it
//! into raw English, then resolve provenance tokens against the chart.
//!
//! Only the templating stage is chart-independent, so that is the one the
//! [`Explainer`] memoizes per formula string.

use crate::chart::ChartContext;
use crate::error::ExplainError;
use crate::evaluator::{self, LambdaEnv};
use crate::resolver;
use crate::sexpr;
use crate::table::TableView;
use crate::ExplainResult;
use serde::Serialize;
use std::collections::HashMap;

/// Final sentence plus any non-fatal notes from resolution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Explanation {
    pub text: String,
    pub warnings: Vec<String>,
}

/// Stateful entry point that caches templated formulas across calls.
#[derive(Debug, Default)]
pub struct Explainer {
    templated: HashMap<String, String>,
}

impl Explainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Explain a formula against a chart and its raw/runtime tables.
    pub fn explain(
        &mut self,
        formula: &str,
        chart: &ChartContext,
        raw: &TableView,
        runtime: &TableView,
    ) -> ExplainResult<String> {
        self.explain_detailed(formula, chart, raw, runtime)
            .map(|explanation| explanation.text)
    }

    /// Like [`Explainer::explain`] but keeps resolution warnings.
    pub fn explain_detailed(
        &mut self,
        formula: &str,
        chart: &ChartContext,
        raw: &TableView,
        runtime: &TableView,
    ) -> ExplainResult<Explanation> {
        let templated = match self.templated.get(formula) {
            Some(text) => text.clone(),
            None => {
                let text = template_formula(formula)?;
                self.templated.insert(formula.to_string(), text.clone());
                text
            }
        };
        let resolution = resolver::resolve(&templated, chart, raw, runtime);
        Ok(Explanation {
            text: resolution.text,
            warnings: resolution.warnings,
        })
    }

    /// Number of formulas with a cached templating.
    pub fn cached_formulas(&self) -> usize {
        self.templated.len()
    }
}

fn template_formula(formula: &str) -> ExplainResult<String> {
    let exprs = sexpr::read_all(formula)?;
    let expr = exprs
        .first()
        .ok_or_else(|| ExplainError::input("formula contains no expressions"))?;
    Ok(evaluator::evaluate(expr, &LambdaEnv::empty()))
}

/// One-shot convenience over [`Explainer`].
pub fn explain(
    formula: &str,
    chart: &ChartContext,
    raw: &TableView,
    runtime: &TableView,
) -> ExplainResult<String> {
    Explainer::new().explain(formula, chart, raw, runtime)
}
