//! Per-record tolerant list decoding for upstream responses.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// A list element kept only when it decodes as `T`.
#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Valid(T),
    Invalid(IgnoredAny),
}

/// Decode a JSON array, dropping elements that do not fit `T`.
///
/// One record with an out-of-range number or a wrong type costs only that
/// record. Elements are buffered in document order, so order-sensitive
/// fields (the abstract inverted index) decode the same as without this.
pub fn skip_invalid<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let items = Vec::<Lenient<T>>::deserialize(deserializer)?;
    let total = items.len();

    let kept: Vec<T> = items
        .into_iter()
        .filter_map(|item| match item {
            Lenient::Valid(value) => Some(value),
            Lenient::Invalid(_) => None,
        })
        .collect();

    if kept.len() < total {
        tracing::debug!(skipped = total - kept.len(), kept = kept.len(), "Skipped malformed records");
    }

    Ok(kept)
}
