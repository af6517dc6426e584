use colored::Colorize;
use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

/// Format output as a table using the tabled crate.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(result) = map.get("result") {
                print_result_table(result, map);
            } else if map.contains_key("isValid") {
                print_validation(map);
            } else if let Some(Value::Array(options)) = map.get("options") {
                print_options(options);
            } else if let Some(Value::Array(rows)) = map.get("rows") {
                print_scalars(map);
                println!();
                print_array_table(rows);
            } else {
                print_scalars(map);
            }
        }
        Value::Array(arr) => {
            print_array_table(arr);
        }
        _ => {
            println!("{}", value);
        }
    }
}

fn print_result_table(result: &Value, envelope: &Map<String, Value>) {
    match result {
        Value::Object(res_map) => {
            if let Some(Value::Object(validation)) = res_map.get("validation") {
                print_validation(validation);
            }
            if let Some(Value::Object(model)) = res_map.get("model") {
                if let Some(Value::Array(options)) = model.get("options") {
                    println!();
                    print_options(options);
                }
            }
            if !res_map.contains_key("validation") && !res_map.contains_key("model") {
                print_scalars(res_map);
            }
        }
        _ => print_scalars(envelope),
    }

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nCaveats:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn print_validation(map: &Map<String, Value>) {
    let valid = map.get("isValid").and_then(Value::as_bool).unwrap_or(false);
    if valid {
        println!("{}", "VALID".green().bold());
    } else {
        println!("{}", "INVALID".red().bold());
    }

    if let Some(Value::Array(errors)) = map.get("errors") {
        if !errors.is_empty() {
            println!("\nErrors:");
            print_findings(errors, &["field", "message", "code"]);
        }
    }
    if let Some(Value::Array(warnings)) = map.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            print_findings(warnings, &["field", "message", "recommendation"]);
        }
    }
}

fn print_findings(items: &[Value], columns: &[&str]) {
    let mut builder = Builder::default();
    builder.push_record(columns.iter().copied());
    for item in items {
        let row: Vec<String> = columns
            .iter()
            .map(|c| item.get(*c).map(format_cell).unwrap_or_default())
            .collect();
        builder.push_record(row);
    }
    println!("{}", Table::from(builder));
}

fn print_options(options: &[Value]) {
    let metrics = [
        "totalCosts",
        "totalBenefits",
        "netBenefit",
        "roiPct",
        "paybackMonths",
        "npv",
        "mirrPct",
    ];
    let mut builder = Builder::default();
    let mut header = vec!["option".to_string()];
    header.extend(metrics.iter().map(|m| m.to_string()));
    builder.push_record(header);

    for option in options {
        let name = option.get("name").map(format_cell).unwrap_or_default();
        let calc = option.get("_calc");
        let mut row = vec![name];
        row.extend(metrics.iter().map(|m| {
            calc.and_then(|c| c.get(*m)).map(format_cell).unwrap_or_default()
        }));
        builder.push_record(row);
    }
    println!("{}", Table::from(builder));
}

fn print_scalars(map: &Map<String, Value>) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in map {
        if matches!(val, Value::Array(_)) && key == "rows" {
            continue;
        }
        builder.push_record([key.as_str(), &format_cell(val)]);
    }
    println!("{}", Table::from(builder));
}

fn print_array_table(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<String> = first.keys().cloned().collect();
        let mut builder = Builder::default();
        builder.push_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(h.as_str()).map(format_cell).unwrap_or_default())
                    .collect();
                builder.push_record(row);
            }
        }

        println!("{}", Table::from(builder));
    } else {
        for item in arr {
            println!("{}", format_cell(item));
        }
    }
}

fn format_cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "-".to_string(),
        Value::Array(arr) => arr.iter().map(format_cell).collect::<Vec<_>>().join(", "),
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
