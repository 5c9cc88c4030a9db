//! Filtered response view

use serde_json::Value;

use crate::types::{FilterSelection, ServerResponse};

/// What the response panel shows
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayedData {
    /// No filter is set: the whole response body
    Full(Value),
    /// Concatenation of the selected parts, always in
    /// alphabets → numbers → highest_alphabet order
    Selected(Vec<Value>),
}

impl DisplayedData {
    pub fn to_value(&self) -> Value {
        match self {
            DisplayedData::Full(body) => body.clone(),
            DisplayedData::Selected(items) => Value::Array(items.clone()),
        }
    }

    /// Pretty JSON with two-space indentation
    pub fn to_pretty_json(&self) -> String {
        let rendered = match self {
            DisplayedData::Full(body) => serde_json::to_string_pretty(body),
            DisplayedData::Selected(items) => serde_json::to_string_pretty(items),
        };
        // Serializing a Value cannot fail: map keys are always strings
        rendered.unwrap_or_default()
    }
}

/// Compute the displayed data from the last response and the filter toggles.
///
/// Returns `None` when there is no response yet.
pub fn compute_displayed_data(
    response: Option<&ServerResponse>,
    selection: &FilterSelection,
) -> Option<DisplayedData> {
    let response = response?;

    if !selection.any() {
        return Some(DisplayedData::Full(response.body.clone()));
    }

    let mut items = Vec::new();
    if selection.alphabets {
        items.extend(response.alphabets.iter().cloned().map(Value::String));
    }
    if selection.numbers {
        items.extend(response.numbers.iter().cloned());
    }
    if selection.highest_alphabet {
        items.push(response.highest_alphabet.clone());
    }

    Some(DisplayedData::Selected(items))
}
