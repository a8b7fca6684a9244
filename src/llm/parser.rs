use crate::error::{Error, Result};

/// Extract the label from a raw reply. The label is trusted as-is apart from
/// stripping whitespace, wrapping quotes and periods.
pub fn parse_label(response: &str) -> Result<String> {
    let label = response
        .trim_matches(|c: char| c.is_whitespace() || matches!(c, '"' | '\'' | '`' | '.'));

    if label.is_empty() {
        return Err(Error::ParseError("Empty label in response".to_string()));
    }

    Ok(label.to_string())
}
