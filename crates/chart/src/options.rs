//! Display options forwarded to the charting service.

use quire_types::{Color, Margins};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LegendPosition {
    #[default]
    None,
    Top,
    Bottom,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AxisTextStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    /// One series color per number column, in column order.
    pub series_colors: Vec<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gridline_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gridline_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_text: Option<AxisTextStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_margins: Option<Margins>,
    pub width: f32,
    pub height: f32,
    pub legend: LegendPosition,
    /// Number format pattern for the value axis, e.g. `"#,##0"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_format: Option<String>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            series_colors: Vec::new(),
            gridline_count: None,
            gridline_color: None,
            axis_text: None,
            area_margins: None,
            width: 600.0,
            height: 400.0,
            legend: LegendPosition::default(),
            number_format: None,
        }
    }
}

impl ChartOptions {
    pub fn series_color(mut self, color: Color) -> Self {
        self.series_colors.push(color);
        self
    }

    pub fn gridlines(mut self, count: u32, color: Color) -> Self {
        self.gridline_count = Some(count);
        self.gridline_color = Some(color);
        self
    }

    pub fn axis_text(mut self, style: AxisTextStyle) -> Self {
        self.axis_text = Some(style);
        self
    }

    pub fn area_margins(mut self, margins: Margins) -> Self {
        self.area_margins = Some(margins);
        self
    }

    pub fn dimensions(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn legend(mut self, position: LegendPosition) -> Self {
        self.legend = position;
        self
    }

    pub fn number_format(mut self, pattern: &str) -> Self {
        self.number_format = Some(pattern.to_string());
        self
    }
}
