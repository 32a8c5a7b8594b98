//! Field-level change summaries for audit entries

use serde_json::Value;

const MAX_STRING_CHARS: usize = 40;

/// Summarize the top-level differences between two snapshots
///
/// Returns `None` when nothing changed.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    let (Value::Object(old), Value::Object(new)) = (before, after) else {
        return (before != after).then(|| format!("{} -> {}", render(before), render(after)));
    };

    let mut changes: Vec<String> = old
        .iter()
        .filter_map(|(key, old_val)| match new.get(key) {
            Some(new_val) if new_val == old_val => None,
            Some(new_val) => Some(format!("{}: {} -> {}", key, render(old_val), render(new_val))),
            None => Some(format!("{}: {} -> (removed)", key, render(old_val))),
        })
        .collect();

    changes.extend(
        new.iter()
            .filter(|(key, _)| !old.contains_key(*key))
            .map(|(key, val)| format!("{}: (added) -> {}", key, render(val))),
    );

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) if s.chars().count() > MAX_STRING_CHARS => {
            let head: String = s.chars().take(MAX_STRING_CHARS - 3).collect();
            format!("\"{}...\"", head)
        }
        Value::String(s) => format!("\"{}\"", s),
        Value::Array(items) => format!("[{} items]", items.len()),
        Value::Object(fields) => format!("{{{} fields}}", fields.len()),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_no_change() {
        let state = json!({"remaining_income": 80000, "needs": []});
        assert_eq!(generate_diff(&state, &state), None);
    }

    #[test]
    fn test_changed_added_removed() {
        let before = json!({"remaining_income": 80000, "monthly_income": 200000});
        let after = json!({"remaining_income": 50000, "updated_at": "2024-10-01"});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("remaining_income: 80000 -> 50000"));
        assert!(diff.contains("monthly_income: 200000 -> (removed)"));
        assert!(diff.contains("updated_at: (added) -> \"2024-10-01\""));
    }

    #[test]
    fn test_lists_are_summarized_by_length() {
        let before = json!({"wants": [{"name": "laptop"}]});
        let after = json!({"wants": [{"name": "laptop"}, {"name": "bike"}]});

        assert_eq!(
            generate_diff(&before, &after).unwrap(),
            "wants: [1 items] -> [2 items]"
        );
    }

    #[test]
    fn test_long_multibyte_strings_are_truncated() {
        let before = json!({"name": "é".repeat(60)});
        let after = json!({"name": "short"});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("...\" -> \"short\""));
    }

    #[test]
    fn test_scalar_values() {
        assert_eq!(generate_diff(&json!(1), &json!(2)).unwrap(), "1 -> 2");
        assert_eq!(generate_diff(&json!("a"), &json!("a")), None);
    }
}
