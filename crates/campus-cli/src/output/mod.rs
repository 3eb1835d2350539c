use serde::Serialize;
use serde_json::Value;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Table => {
            let prefs = ui::prefs();
            let options = table::TableOptions {
                max_width: prefs.term_width,
                color: prefs.table_color,
            };
            Ok(render_table(serde_json::to_value(value)?, options))
        }
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Print a human hint on stderr unless `--quiet`.
pub fn notice(message: &str, flags: &GlobalFlags) {
    if !flags.quiet {
        eprintln!("{message}");
    }
}

/// Objects become a field/value table followed by one titled table per list
/// of records; arrays become one row per element.
fn render_table(value: Value, options: table::TableOptions) -> String {
    match value {
        Value::Array(items) => render_rows(&items, options),
        Value::Object(map) => {
            let mut fields = Vec::new();
            let mut sections = Vec::new();
            for (key, value) in map {
                match value {
                    Value::Array(items) if items.iter().any(Value::is_object) => {
                        sections.push((key, items));
                    }
                    other => flatten_into(&key, &other, &mut fields),
                }
            }

            let mut parts = Vec::new();
            if !fields.is_empty() {
                let rows = fields
                    .into_iter()
                    .map(|(key, value)| vec![key, value])
                    .collect::<Vec<_>>();
                parts.push(table::render_table(&["field", "value"], &rows, options));
            }
            for (key, items) in sections {
                parts.push(format!("{key}:\n{}", render_rows(&items, options)));
            }
            parts.join("\n\n")
        }
        scalar => cell(&scalar),
    }
}

fn render_rows(items: &[Value], options: table::TableOptions) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let rows = items.iter().map(|item| vec![cell(item)]).collect::<Vec<_>>();
        return table::render_table(&["value"], &rows, options);
    }

    let records = items
        .iter()
        .map(|item| {
            let mut fields = Vec::new();
            if let Value::Object(map) = item {
                for (key, value) in map {
                    flatten_into(key, value, &mut fields);
                }
            }
            fields
        })
        .collect::<Vec<_>>();

    let mut headers = Vec::<String>::new();
    for (key, _) in records.iter().flatten() {
        if !headers.contains(key) {
            headers.push(key.clone());
        }
    }

    let rows = records
        .iter()
        .map(|fields| {
            headers
                .iter()
                .map(|header| {
                    fields
                        .iter()
                        .find(|(key, _)| key == header)
                        .map_or_else(|| String::from("-"), |(_, value)| value.clone())
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    table::render_table(&header_refs, &rows, options)
}

/// Nested objects expand to dotted keys (`program.title`).
fn flatten_into(prefix: &str, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) if !map.is_empty() => {
            for (key, nested) in map {
                flatten_into(&format!("{prefix}.{key}"), nested, out);
            }
        }
        other => out.push((prefix.to_string(), cell(other))),
    }
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) if items.iter().any(Value::is_object) => {
            format!("[{} items]", items.len())
        }
        Value::Array(items) => items.iter().map(cell).collect::<Vec<_>>().join(", "),
        Value::Object(_) => String::from("{}"),
    }
}
