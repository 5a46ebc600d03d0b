use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(render_document(&serde_json::to_value(value)?)),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Print one streamed record: a single line in every format.
pub fn output_line<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let value = serde_json::to_value(value)?;
    let line = match (format, &value) {
        (OutputFormat::Table, Value::Object(map)) => map
            .iter()
            .map(|(key, value)| format!("{key}={}", cell(value)))
            .collect::<Vec<_>>()
            .join("  "),
        _ => serde_json::to_string(&value)?,
    };
    println!("{line}");
    Ok(())
}

fn options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

/// Scalars of an object as a key/value table, then each list or nested
/// object as its own titled section.
fn render_document(value: &Value) -> String {
    match value {
        Value::Array(items) => render_rows(items),
        Value::Object(map) => render_object(map),
        scalar => table::render_table(&["value"], &[vec![cell(scalar)]], options()),
    }
}

fn render_object(map: &Map<String, Value>) -> String {
    let fields = map
        .iter()
        .filter(|(_, value)| !value.is_array() && !value.is_object())
        .map(|(key, value)| vec![key.clone(), cell(value)])
        .collect::<Vec<_>>();

    let mut blocks = Vec::new();
    if !fields.is_empty() {
        blocks.push(table::render_table(&["key", "value"], &fields, options()));
    }
    for (key, value) in map {
        let body = match value {
            Value::Array(items) => render_rows(items),
            Value::Object(inner) => {
                let rows = inner
                    .iter()
                    .map(|(key, value)| vec![key.clone(), cell(value)])
                    .collect::<Vec<_>>();
                table::render_table(&["key", "value"], &rows, options())
            }
            _ => continue,
        };
        blocks.push(format!("{key}:\n{body}"));
    }
    blocks.join("\n\n")
}

fn render_rows(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(none)");
    }

    if !items.iter().all(Value::is_object) {
        let rows = items.iter().map(|item| vec![cell(item)]).collect::<Vec<_>>();
        return table::render_table(&["value"], &rows, options());
    }

    // Columns in first-seen order across rows.
    let mut headers = Vec::<&str>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(&key.as_str()) {
                headers.push(key);
            }
        }
    }

    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(*header).map_or_else(|| String::from("-"), cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_table(&headers, &rows, options())
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;
    use serde_json::json;

    use super::{cell, render, render_document};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        id: &'static str,
        total: u32,
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&Example { id: "x", total: 7 }, OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["id"], "x");
        assert_eq!(parsed["total"], 7);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&Example { id: "x", total: 7 }, OutputFormat::Raw).unwrap();
        assert!(!out.contains('\n'));
    }

    #[test]
    fn object_lists_become_sections() {
        let out = render_document(&json!({
            "id": "u-1",
            "groups": [{"id": "g-1", "name": "admins"}],
            "sessions": [],
        }));
        assert!(out.starts_with("key"));
        assert!(out.contains("groups:\nid"));
        assert!(out.contains("admins"));
        assert!(out.contains("sessions:\n(none)"));
    }

    #[test]
    fn later_rows_append_columns() {
        let out = render_document(&json!([{"id": "1", "name": "a"}, {"id": "2", "email": "e"}]));
        let header = out.lines().next().unwrap();
        assert!(header.find("name").unwrap() < header.find("email").unwrap());
        assert!(out.lines().nth(2).unwrap().trim_end().ends_with('-'));
    }

    #[test]
    fn string_lists_join_into_one_cell() {
        assert_eq!(cell(&json!(["admins", "ops"])), "admins, ops");
        assert_eq!(cell(&json!(null)), "-");
    }
}
