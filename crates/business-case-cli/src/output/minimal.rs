use serde_json::Value;

/// Print just the key answer value from the output.
///
/// Looks for well-known result fields in priority order, then falls back to
/// the first field of the result object.
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    // An evaluation's headline answer is its validity
    let result_obj = result_obj
        .as_object()
        .and_then(|m| m.get("validation"))
        .unwrap_or(result_obj);

    let priority_keys = ["riskScore", "isValid", "totals"];

    if let Value::Object(map) = result_obj {
        if let Some(Value::Array(options)) = map.get("options") {
            for option in options {
                let name = option.get("name").map(format_minimal).unwrap_or_default();
                let net = option
                    .get("_calc")
                    .and_then(|c| c.get("netBenefit"))
                    .map(format_minimal)
                    .unwrap_or_else(|| "null".to_string());
                println!("{name}: {net}");
            }
            return;
        }

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

    if let Value::Array(rows) = result_obj {
        for row in rows {
            let name = row.get("name").map(format_minimal).unwrap_or_default();
            let summary = row.get("summary").map(format_minimal).unwrap_or_default();
            println!("{name}: {summary}");
        }
        return;
    }

    println!("{}", format_minimal(result_obj));
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
