use serde_json::Value;

/// Print just the headline number from the output.
///
/// Heuristic: prefer the EMI, then the totals, then fall back to the first
/// field of the summary object.
pub fn print_minimal(value: &Value) {
    let summary = value
        .as_object()
        .and_then(|m| m.get("summary"))
        .unwrap_or(value);

    let priority_keys = ["emi", "total_interest", "total_payable"];

    if let Value::Object(map) = summary {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", format_minimal(val));
                    return;
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    println!("{}", format_minimal(summary));
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
