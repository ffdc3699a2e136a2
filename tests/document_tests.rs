mod common;

use common::fixtures::{card, element_with_text, grid_row, page};
use common::{TestResult, render_json, render_json_with_config, render_single_page};
use serde_json::json;
use trellis::{DocumentError, RenderConfig};

#[test]
fn test_chained_classes_and_id_render_on_one_tag() -> TestResult {
    let doc = page(element_with_text(
        "p",
        "Hello",
        json!([{ "class": "foo" }, { "class": "bar" }, { "id": "x" }]),
    ));
    assert_eq!(render_single_page(&doc)?, r#"<p id="x" class="bar foo">Hello</p>"#);
    Ok(())
}

#[test]
fn test_style_collision_keeps_latest_value() -> TestResult {
    let doc = page(element_with_text(
        "span",
        "x",
        json!([
            { "style": { "property": "color", "value": "red" } },
            { "style": { "property": "margin", "value": "0" } },
            { "style": { "property": "color", "value": "blue" } }
        ]),
    ));
    assert_eq!(
        render_single_page(&doc)?,
        r#"<span style="color: blue; margin: 0">x</span>"#
    );
    Ok(())
}

#[test]
fn test_card_modifiers_fold_onto_body_div() -> TestResult {
    let doc = page(card("Body", json!([{ "class": "card" }, { "class": "shadow" }])));
    assert_eq!(render_single_page(&doc)?, r#"<div class="card shadow">Body</div>"#);
    Ok(())
}

#[test]
fn test_card_with_section_body_gets_configured_wrapper() -> TestResult {
    let doc = page(json!({
        "type": "component",
        "name": "Panel",
        "body": element_with_text("section", "Body", json!([])),
        "modifiers": [{ "class": "panel" }]
    }));
    let config = RenderConfig {
        wrapper_tag: "article".to_string(),
        ..RenderConfig::default()
    };
    let pages = render_json_with_config(&doc, &config)?;
    assert_eq!(
        pages,
        vec![r#"<article class="panel"><section>Body</section></article>"#]
    );
    Ok(())
}

#[test]
fn test_repeated_container_modifiers_add_one_wrapper() -> TestResult {
    let doc = page(json!({
        "type": "element",
        "tag": "img",
        "attributes": { "attributes": { "src": "a.png" } },
        "modifiers": [
            { "container": { "styles": [{ "property": "position", "value": "relative" }] } },
            { "container": { "classes": ["frame"] } },
            { "class": "photo" }
        ]
    }));
    assert_eq!(
        render_single_page(&doc)?,
        r#"<div class="frame" style="position: relative"><img class="photo" src="a.png"></div>"#
    );
    Ok(())
}

#[test]
fn test_events_from_separate_modifiers_concatenate() -> TestResult {
    let doc = page(element_with_text(
        "button",
        "Menu",
        json!([
            { "on": { "event": "click", "actions": [{ "action": "script", "code": "track('menu');" }] } },
            { "on": { "event": "Click", "actions": [{ "action": "toggleClass", "target": "nav", "class": "open" }] } }
        ]),
    ));
    assert_eq!(
        render_single_page(&doc)?,
        r#"<button onclick="track('menu'); document.getElementById('nav').classList.toggle('open')">Menu</button>"#
    );
    Ok(())
}

#[test]
fn test_removal_modifiers() -> TestResult {
    let doc = page(json!({
        "type": "element",
        "tag": "button",
        "attributes": {
            "classes": ["btn", "disabled"],
            "attributes": { "disabled": "" },
            "styles": [{ "property": "opacity", "value": "0.5" }]
        },
        "modifiers": [
            { "removeClass": "disabled" },
            { "removeAttribute": "disabled" },
            { "removeStyle": "opacity" }
        ]
    }));
    assert_eq!(render_single_page(&doc)?, r#"<button class="btn"></button>"#);
    Ok(())
}

#[test]
fn test_remove_attribute_clears_reserved_fields() -> TestResult {
    let doc = page(json!({
        "type": "element",
        "tag": "div",
        "attributes": { "identifier": "old", "classes": ["a", "b"] },
        "modifiers": [
            { "style": { "property": "color", "value": "red" } },
            { "removeAttribute": "id" },
            { "removeAttribute": "class" },
            { "removeAttribute": "style" },
            { "class": "fresh" }
        ]
    }));
    assert_eq!(render_single_page(&doc)?, r#"<div class="fresh"></div>"#);
    Ok(())
}

#[test]
fn test_grouped_text_with_attributes_is_wrapped() -> TestResult {
    let doc = page(json!({
        "type": "group",
        "children": [
            { "type": "text", "content": "plain " },
            { "type": "text", "content": "loud", "modifiers": [{ "class": "fw-bold" }] }
        ]
    }));
    assert_eq!(render_single_page(&doc)?, r#"plain <span class="fw-bold">loud</span>"#);
    Ok(())
}

#[test]
fn test_responsive_grid_classes() -> TestResult {
    let doc = page(grid_row(&[
        json!({ "xs": "12", "md": "6" }),
        json!({ "xs": "12", "sm": "12", "lg": "4" }),
    ]));
    assert_eq!(
        render_single_page(&doc)?,
        concat!(
            r#"<div class="row">"#,
            r#"<span class="col-12 col-md-6">cell 0</span>"#,
            r#"<span class="col-12 col-lg-4">cell 1</span>"#,
            "</div>"
        )
    );
    Ok(())
}

#[test]
fn test_aria_and_data_attributes() -> TestResult {
    let doc = page(element_with_text(
        "nav",
        "",
        json!([
            { "aria": { "name": "aria-label", "value": "Main" } },
            { "data": { "name": "sticky", "value": "" } },
            { "attribute": { "name": "role", "value": "navigation" } }
        ]),
    ));
    assert_eq!(
        render_single_page(&doc)?,
        r#"<nav role="navigation" aria-label="Main" data-sticky></nav>"#
    );
    Ok(())
}

#[test]
fn test_raw_markup_passes_through() -> TestResult {
    let doc = page(json!({
        "type": "element",
        "tag": "div",
        "children": [{ "type": "raw", "markup": "<hr>" }, { "type": "text", "content": "<b>" }]
    }));
    assert_eq!(render_single_page(&doc)?, "<div><hr>&lt;b&gt;</div>");
    Ok(())
}

#[test]
fn test_pages_render_independently_in_order() -> TestResult {
    let doc = json!({
        "pages": [
            element_with_text("h1", "One", json!([{ "class": "title" }])),
            element_with_text("h1", "Two", json!([])),
        ]
    })
    .to_string();
    assert_eq!(
        render_json(&doc)?,
        vec![r#"<h1 class="title">One</h1>"#, "<h1>Two</h1>"]
    );
    Ok(())
}

#[test]
fn test_malformed_document_is_a_json_error() {
    assert!(matches!(render_json("{ not json"), Err(DocumentError::Json(_))));
}
