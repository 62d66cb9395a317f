use serde_json::Value;
use std::io;

/// Write output as CSV to stdout: the schedule as rows when present,
/// otherwise field/value pairs.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    match value.get("schedule") {
        Some(Value::Array(entries)) => write_schedule_csv(&mut wtr, entries),
        _ => write_fields_csv(&mut wtr, value),
    }

    let _ = wtr.flush();
}

fn write_schedule_csv(wtr: &mut csv::Writer<io::StdoutLock<'_>>, entries: &[Value]) {
    let Some(Value::Object(first)) = entries.first() else {
        return;
    };

    let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
    let _ = wtr.write_record(&headers);

    for entry in entries {
        if let Value::Object(map) = entry {
            let row: Vec<String> = headers
                .iter()
                .map(|h| map.get(*h).map(format_csv_value).unwrap_or_default())
                .collect();
            let _ = wtr.write_record(&row);
        }
    }
}

fn write_fields_csv(wtr: &mut csv::Writer<io::StdoutLock<'_>>, value: &Value) {
    let Value::Object(map) = value else {
        let _ = wtr.write_record([format_csv_value(value)]);
        return;
    };

    let _ = wtr.write_record(["field", "value"]);
    for (key, val) in map {
        let _ = wtr.write_record([key.as_str(), &format_csv_value(val)]);
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
