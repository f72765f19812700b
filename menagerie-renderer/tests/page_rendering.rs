//! Page-level rendering: sparse records, empty state, substitution.

use menagerie_core::{AnimalRecord, QueryTerm};
use menagerie_renderer::{
    render, substitute, RenderError, Renderer, Template, TemplateError, PLACEHOLDER,
};
use rstest::rstest;
use serde_json::json;
use tempfile::TempDir;

const MINIMAL: &str = "<ul>__REPLACE_ANIMALS_INFO__</ul>";

fn records(value: serde_json::Value) -> Vec<AnimalRecord> {
    serde_json::from_value(value).expect("list of objects")
}

#[test]
fn fox_scenario_lands_in_placeholder() {
    let recs = records(json!([{
        "name": "Fox",
        "characteristics": { "diet": "Carnivore", "location": "Northern Hemisphere" }
    }]));
    let html = render(&recs, &Template::new(MINIMAL), &QueryTerm::from("Fox")).unwrap();

    assert!(html.starts_with("<ul><li class=\"cards__item\">"));
    assert!(html.ends_with("</li>\n</ul>") || html.ends_with("</li></ul>"));
    for needle in ["Fox", "Carnivore", "Northern Hemisphere"] {
        assert!(html.contains(needle), "missing {needle}: {html}");
    }
    assert!(!html.contains(PLACEHOLDER));
}

#[test]
fn unmatched_query_renders_empty_state() {
    let html = render(&[], &Template::new(MINIMAL), &QueryTerm::from("goadohjasgfas")).unwrap();
    assert!(html.contains("goadohjasgfas"));
    assert!(!html.contains("cards__item"));
    assert!(html.starts_with("<ul><li class=\"cards__empty\">"));
}

#[test]
fn bundled_page_keeps_empty_state_inside_the_list() {
    let html = render(&[], &Template::embedded(), &QueryTerm::from("goadohjasgfas")).unwrap();
    assert!(html.contains("<ul class=\"cards\">\n<li class=\"cards__empty\">"), "{html}");
    assert!(!html.contains("<div class=\"cards__empty\""));
}

#[rstest]
#[case("Fox & Hound")]
#[case("<em>owl</em>")]
#[case("Bär \"Bruno\" 'der' Große")]
#[case("  spaced  ")]
fn empty_state_contains_exact_query(#[case] query: &str) {
    let html = render(&[], &Template::new(MINIMAL), &QueryTerm::from(query)).unwrap();
    assert!(html.contains(query), "query {query:?} not echoed in {html}");
}

#[test]
fn sparse_record_gets_no_fact_lines() {
    let recs = records(json!([{ "name": "Fox" }]));
    let html = render(&recs, &Template::new(MINIMAL), &QueryTerm::from("Fox")).unwrap();
    assert!(html.contains("Fox"));
    for label in ["Diet:", "Location:", "Type:", "Skin type:", "card__fact", "N/A"] {
        assert!(!html.contains(label), "unexpected {label} in {html}");
    }
}

#[test]
fn records_keep_input_order_without_dedup() {
    let recs = records(json!([
        { "name": "Zebra" },
        { "name": "Aardvark" },
        { "name": "Zebra" }
    ]));
    let fragment = Renderer::new()
        .unwrap()
        .render_fragment(&recs, &QueryTerm::from("z"))
        .unwrap();
    let z1 = fragment.find("Zebra").unwrap();
    let a = fragment.find("Aardvark").unwrap();
    let z2 = fragment.rfind("Zebra").unwrap();
    assert!(z1 < a && a < z2);
    assert_eq!(fragment.matches("cards__item").count(), 3);
}

#[test]
fn tolerates_arbitrarily_shaped_records() {
    let recs = records(json!([
        {},
        { "name": 42 },
        { "name": null, "characteristics": null },
        { "characteristics": ["not", "a", "map"] },
        {
            "name": ["Fox", "Vixen"],
            "locations": "Tundra",
            "characteristics": { "diet": { "x": 1 } }
        }
    ]));
    let fragment = Renderer::new()
        .unwrap()
        .render_fragment(&recs, &QueryTerm::from("odd"))
        .unwrap();
    assert!(fragment.contains("<div class=\"card__title\">42</div>"));
    assert!(fragment.contains("Fox, Vixen"));
    assert!(fragment.contains("Tundra"));
    assert!(!fragment.contains("Diet:"));
}

#[test]
fn render_is_pure() {
    let recs = records(json!([
        { "name": "Fox", "characteristics": { "diet": "Carnivore", "type": "Mammal" } },
        { "name": "Owl", "locations": ["Europe"] }
    ]));
    let renderer = Renderer::new().unwrap();
    let template = Template::embedded();
    let query = QueryTerm::from("f");
    let first = renderer.render(&recs, &template, &query).unwrap();
    let second = renderer.render(&recs, &template, &query).unwrap();
    assert_eq!(first.as_bytes(), second.as_bytes());
    assert_eq!(first, render(&recs, &template, &query).unwrap());
}

#[rstest]
#[case(json!([]))]
#[case(json!([{ "name": "Fox" }]))]
#[case(json!([{ "name": "Fox", "characteristics": { "diet": "Carnivore" } }, { "name": "Owl" }]))]
fn output_length_equals_template_minus_placeholder_plus_fragment(#[case] value: serde_json::Value) {
    let recs = records(value);
    let renderer = Renderer::new().unwrap();
    let query = QueryTerm::from("Fox");
    let template = Template::embedded();

    let fragment = renderer.render_fragment(&recs, &query).unwrap();
    let html = renderer.render(&recs, &template, &query).unwrap();
    assert_eq!(
        html.len(),
        template.as_str().len() - PLACEHOLDER.len() + fragment.len()
    );
    assert_eq!(html, substitute(&template, &fragment).unwrap());
}

#[test]
fn template_without_placeholder_fails() {
    let recs = records(json!([{ "name": "Fox" }]));
    let err = render(&recs, &Template::new("<ul></ul>"), &QueryTerm::from("Fox")).unwrap_err();
    assert!(
        matches!(err, RenderError::Template(TemplateError::PlaceholderMissing { .. })),
        "got: {err}"
    );
    assert!(err.to_string().contains(PLACEHOLDER));
}

#[test]
fn template_loaded_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("animals_template.html");
    let page = "<html><body><ul>\n__REPLACE_ANIMALS_INFO__\n</ul></body></html>";
    std::fs::write(&path, page).unwrap();

    let template = Template::load(&path).unwrap();
    let recs = records(json!([{ "name": "Fox" }]));
    let html = render(&recs, &template, &QueryTerm::from("Fox")).unwrap();
    assert!(html.starts_with("<html><body><ul>\n<li class=\"cards__item\">"));
    assert!(html.ends_with("</ul></body></html>"));
}
