use serde_json::{Value, json};

/// Wrap a single node into a one-page document.
pub fn page(node: Value) -> String {
    json!({ "pages": [node] }).to_string()
}

/// An element node with text content.
pub fn element_with_text(tag: &str, text: &str, modifiers: Value) -> Value {
    json!({
        "type": "element",
        "tag": tag,
        "children": [{ "type": "text", "content": text }],
        "modifiers": modifiers
    })
}

/// A component whose body is a bare `div` containing text.
pub fn card(text: &str, modifiers: Value) -> Value {
    json!({
        "type": "component",
        "name": "Card",
        "body": element_with_text("div", text, json!([])),
        "modifiers": modifiers
    })
}

/// A responsive grid row: one column per width.
pub fn grid_row(widths: &[Value]) -> Value {
    let columns: Vec<Value> = widths
        .iter()
        .enumerate()
        .map(|(i, width)| {
            json!({
                "type": "text",
                "content": format!("cell {i}"),
                "modifiers": [{ "responsiveClass": { "prefix": "col", "values": width } }]
            })
        })
        .collect();
    json!({
        "type": "element",
        "tag": "div",
        "attributes": { "classes": ["row"] },
        "children": columns
    })
}
