//! Character-level styling applied to ranges of a block's text.

use quire_types::Color;
use serde::{Deserialize, Serialize};

/// Attributes for a run of characters. Every field is optional; `None` means
/// "leave the backend's current value alone". Assigning a field twice keeps
/// the later value.
#[derive(Deserialize, Serialize, Default, Clone, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strikethrough: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_assignment_is_last_write_wins() {
        let mut style = TextStyle::default();
        style.color = Some(Color::gray(34));
        style.color = Some(Color::rgb(255, 0, 0));
        style.bold = Some(true);

        assert_eq!(style.color, Some(Color::rgb(255, 0, 0)));
        assert_eq!(style.bold, Some(true));
        assert_eq!(style.italic, None);
    }

    #[test]
    fn unset_fields_are_skipped_when_serialized() {
        let style = TextStyle {
            bold: Some(true),
            ..Default::default()
        };
        let json = serde_json::to_value(&style).unwrap();
        assert_eq!(json, serde_json::json!({ "bold": true }));
    }
}
