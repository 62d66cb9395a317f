use rust_decimal::Decimal;
use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::money::format_money;
use super::MONEY_FIELDS;

/// Render engine output as tables: a Field/Value block for the summary and
/// one row per installment for the schedule.
pub fn print_table(value: &Value) {
    match (value.get("summary"), value.get("schedule")) {
        (Some(summary), Some(schedule)) => {
            print_field_table(summary);
            if let Value::Array(entries) = schedule {
                println!();
                print_schedule_table(entries);
            }
        }
        _ => print_field_table(value),
    }
}

fn print_field_table(value: &Value) {
    let Value::Object(map) = value else {
        println!("{value}");
        return;
    };

    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in map {
        builder.push_record([key.as_str(), &display_value(key, val)]);
    }
    println!("{}", Table::from(builder));
}

fn print_schedule_table(entries: &[Value]) {
    let Some(Value::Object(first)) = entries.first() else {
        println!("(empty schedule)");
        return;
    };

    let headers: Vec<String> = first.keys().cloned().collect();
    let mut builder = Builder::default();
    builder.push_record(&headers);

    for entry in entries {
        if let Value::Object(map) = entry {
            let row: Vec<String> = headers
                .iter()
                .map(|h| {
                    map.get(h.as_str())
                        .map(|v| display_value(h, v))
                        .unwrap_or_default()
                })
                .collect();
            builder.push_record(row);
        }
    }

    println!("{}", Table::from(builder));
}

/// Money fields get currency formatting; everything else prints as-is.
fn display_value(key: &str, value: &Value) -> String {
    if MONEY_FIELDS.contains(&key) {
        if let Some(amount) = as_decimal(value) {
            return format_money(amount);
        }
    }
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn as_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::String(s) => s.parse().ok(),
        Value::Number(n) => n.to_string().parse().ok(),
        _ => None,
    }
}
