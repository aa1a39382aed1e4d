//! Visual-encoding facts handed over by the spec-ingestion collaborator.
//!
//! The core never reads visualization specs itself; it receives the reduced
//! facts it needs for lexicalization: chart type, the field driving bar
//! length or line height, and the color legend.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Chart classification the resolver lexicalizes against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartType {
    #[serde(rename = "vertical-bar-simple")]
    VerticalBar,
    VerticalBarGrouped,
    VerticalBarStacked,
    #[serde(rename = "horizontal-bar-simple")]
    HorizontalBar,
    HorizontalBarGrouped,
    HorizontalBarStacked,
    Line,
    Unclassified,
}

impl ChartType {
    pub fn is_bar(&self) -> bool {
        self.is_vertical_bar() || self.is_horizontal_bar()
    }

    pub fn is_vertical_bar(&self) -> bool {
        matches!(
            self,
            ChartType::VerticalBar | ChartType::VerticalBarGrouped | ChartType::VerticalBarStacked
        )
    }

    pub fn is_horizontal_bar(&self) -> bool {
        matches!(
            self,
            ChartType::HorizontalBar
                | ChartType::HorizontalBarGrouped
                | ChartType::HorizontalBarStacked
        )
    }

    pub fn is_line(&self) -> bool {
        matches!(self, ChartType::Line)
    }

    /// Noun for one mark, used in color phrases ("the red bar").
    pub fn mark_noun(&self) -> Option<&'static str> {
        if self.is_bar() {
            Some("bar")
        } else if self.is_line() {
            Some("line")
        } else {
            None
        }
    }

    /// Plural noun replacing generic data placeholders.
    pub fn data_noun(&self) -> Option<&'static str> {
        if self.is_bar() {
            Some("bars")
        } else if self.is_line() {
            Some("data points")
        } else {
            None
        }
    }

    /// Singular form used in the "data after the data" pairing.
    pub fn data_noun_singular(&self) -> Option<&'static str> {
        if self.is_bar() {
            Some("bar")
        } else if self.is_line() {
            Some("data point")
        } else {
            None
        }
    }
}

/// Bidirectional color legend: hex color to field value and back.
///
/// The two directions are two synchronized maps, always updated together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorMap {
    hex_to_value: HashMap<String, String>,
    value_to_hex: HashMap<String, String>,
}

impl ColorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate a hex color with a value, replacing any pair either side
    /// was previously part of.
    pub fn insert(&mut self, hex: impl Into<String>, value: impl Into<String>) {
        let hex = hex.into();
        let value = value.into();
        if let Some(old_value) = self.hex_to_value.remove(&hex) {
            self.value_to_hex.remove(&old_value);
        }
        if let Some(old_hex) = self.value_to_hex.remove(&value) {
            self.hex_to_value.remove(&old_hex);
        }
        self.hex_to_value.insert(hex.clone(), value.clone());
        self.value_to_hex.insert(value, hex);
    }

    pub fn value_of(&self, hex: &str) -> Option<&str> {
        self.hex_to_value.get(hex).map(String::as_str)
    }

    pub fn hex_of(&self, value: &str) -> Option<&str> {
        self.value_to_hex.get(value).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.hex_to_value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hex_to_value.is_empty()
    }
}

/// Read-only chart context for one explanation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartContext {
    pub chart_type: ChartType,

    /// Field carrying the categorical axis (or the line's series)
    pub primary_field: String,

    /// Field encoded as bar length / bar height / line height
    #[serde(default)]
    pub length_field: Option<String>,

    /// Field driving the color legend
    #[serde(default)]
    pub color_field: Option<String>,

    /// Color legend for `color_field`
    #[serde(default)]
    pub colors: ColorMap,
}

impl ChartContext {
    pub fn new(chart_type: ChartType, primary_field: impl Into<String>) -> Self {
        Self {
            chart_type,
            primary_field: primary_field.into(),
            length_field: None,
            color_field: None,
            colors: ColorMap::new(),
        }
    }

    pub fn with_length_field(mut self, field: impl Into<String>) -> Self {
        self.length_field = Some(field.into());
        self
    }

    pub fn with_color_field(mut self, field: impl Into<String>, colors: ColorMap) -> Self {
        self.color_field = Some(field.into());
        self.colors = colors;
        self
    }
}
