//! Small text normalisation helpers shared by the value types.

/// Drop values that are empty once trimmed; keep the original text otherwise.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}
