/// Parse the comma-separated legal-action list sent with a `state` prompt.
///
/// Entries are trimmed and empty entries dropped, so `""`, `"  "` and `", ,"`
/// all yield an empty list. Order is preserved.
pub fn parse_legal(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|choice| !choice.is_empty())
        .map(str::to_owned)
        .collect()
}
