use serde_json::{Map, Value};
use std::io;

type CsvWriter<'a> = csv::Writer<io::StdoutLock<'a>>;

/// Write output as CSV to stdout.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    match value {
        Value::Object(map) => {
            if let Some(Value::Array(rows)) = map.get("rows") {
                write_array_csv(&mut wtr, rows);
            } else if map.contains_key("isValid") {
                write_findings_csv(&mut wtr, map);
            } else if let Some(Value::Object(result)) = map.get("result") {
                match result.get("validation") {
                    Some(Value::Object(validation)) => write_findings_csv(&mut wtr, validation),
                    _ => write_fields_csv(&mut wtr, result),
                }
            } else {
                write_fields_csv(&mut wtr, map);
            }
        }
        Value::Array(arr) => {
            write_array_csv(&mut wtr, arr);
        }
        _ => {
            let _ = wtr.write_record([&format_csv_value(value)]);
        }
    }

    let _ = wtr.flush();
}

fn write_fields_csv(wtr: &mut CsvWriter<'_>, map: &Map<String, Value>) {
    let _ = wtr.write_record(["field", "value"]);
    for (key, val) in map {
        let _ = wtr.write_record([key.as_str(), &format_csv_value(val)]);
    }
}

/// One line per finding: severity, field, message, code or recommendation.
fn write_findings_csv(wtr: &mut CsvWriter<'_>, map: &Map<String, Value>) {
    let _ = wtr.write_record(["severity", "field", "message", "detail"]);
    let text = |v: &Value, key: &str| v.get(key).map(format_csv_value).unwrap_or_default();

    if let Some(Value::Array(errors)) = map.get("errors") {
        for e in errors {
            let _ = wtr.write_record([
                "error".to_string(),
                text(e, "field"),
                text(e, "message"),
                text(e, "code"),
            ]);
        }
    }
    if let Some(Value::Array(warnings)) = map.get("warnings") {
        for w in warnings {
            let _ = wtr.write_record([
                "warning".to_string(),
                text(w, "field"),
                text(w, "message"),
                text(w, "recommendation"),
            ]);
        }
    }
}

fn write_array_csv(wtr: &mut CsvWriter<'_>, arr: &[Value]) {
    if arr.is_empty() {
        return;
    }

    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
        let _ = wtr.write_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(*h).map(format_csv_value).unwrap_or_default())
                    .collect();
                let _ = wtr.write_record(&row);
            }
        }
    } else {
        for item in arr {
            let _ = wtr.write_record([&format_csv_value(item)]);
        }
    }
}

fn format_csv_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
