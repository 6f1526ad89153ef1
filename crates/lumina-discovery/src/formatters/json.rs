//! Compact JSON output.

use serde_json::{Value, json};

use crate::models::{Book, TopicData, UnifiedResult};
use crate::slug::generate_slug;

/// Serialize a result with its computed score and slug attached.
#[must_use]
pub fn result_json(result: &UnifiedResult) -> Value {
    let mut obj = serde_json::to_value(result).unwrap_or(Value::Null);
    if let Value::Object(ref mut map) = obj {
        map.insert("score".to_string(), json!(result.score()));
        map.insert("slug".to_string(), json!(generate_slug(result.id(), result.title())));
    }
    obj
}

/// Results plus the topic graph, as one document.
#[must_use]
pub fn search_json(query: &str, results: &[&UnifiedResult], topics: &TopicData) -> Value {
    json!({
        "query": query,
        "total": results.len(),
        "results": results.iter().map(|r| result_json(r)).collect::<Vec<_>>(),
        "topics": topics,
    })
}

/// Featured shelf as JSON.
#[must_use]
pub fn featured_json(subject: &str, books: &[Book], remaining: usize) -> Value {
    json!({
        "subject": subject,
        "books": books,
        "remaining": remaining,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Paper;

    #[test]
    fn test_result_json_has_score_and_slug() {
        let result = UnifiedResult::from(Paper {
            id: "W7".into(),
            title: "Sparse Models".into(),
            citation_count: 10,
            year: Some(2023),
            ..Default::default()
        });
        let json = result_json(&result);
        assert_eq!(json["type"], "paper");
        assert_eq!(json["score"], 55.0);
        assert_eq!(json["slug"], "sparse-models-W7");
    }

    #[test]
    fn test_search_json_shape() {
        let result = UnifiedResult::from(Paper::default());
        let json = search_json("q", &[&result], &TopicData::default());
        assert_eq!(json["total"], 1);
        assert!(json["topics"]["nodes"].as_array().unwrap().is_empty());
    }
}
