//! Integration tests for the DiagramBuilder API
//!
//! These tests verify that the public API works and is usable.

use scrawl::{DiagramBuilder, ScrawlError, config::AppConfig, shape::ShapeKind};

#[test]
fn test_builder_api_exists() {
    let _builder = DiagramBuilder::default();
}

#[test]
fn test_parse_simple_diagram() {
    let source = "
+--------+     +--------+
| client |---->| server |
+--------+     +--------+
";

    let builder = DiagramBuilder::default();
    let diagram = builder.parse(source).expect("Failed to parse diagram");

    let boxes = diagram
        .shapes()
        .iter()
        .filter(|shape| shape.kind() == &ShapeKind::Simple)
        .count();
    assert_eq!(boxes, 2);
    assert_eq!(diagram.composites().len(), 1);

    let texts: Vec<&str> = diagram.texts().iter().map(|text| text.text()).collect();
    assert_eq!(texts, ["client", "server"]);
}

#[test]
fn test_render_simple_diagram() {
    let source = "+------+\n| cGRE |\n| app  |\n+------+\n";

    let builder = DiagramBuilder::default();
    let diagram = builder.parse(source).expect("Failed to parse diagram");
    let svg = builder.render_svg(&diagram).expect("Failed to render");

    assert!(svg.contains("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
    assert!(svg.contains("#99dd99"), "Fill color should be applied");
}

#[test]
fn test_builder_with_config() {
    let config: AppConfig = toml::from_str(
        r#"
        [grid]
        cell_width = 8.0
        cell_height = 16.0
        "#,
    )
    .unwrap();

    let builder = DiagramBuilder::new(config);
    let diagram = builder.parse("ab").expect("Failed to parse");

    assert_eq!(diagram.width(), 6.0 * 8.0);
    assert_eq!(diagram.height(), 5.0 * 16.0);
}

#[test]
fn test_invalid_grid_config_returns_error() {
    let config: AppConfig = toml::from_str("[grid]\ncell_width = -1.0\n").unwrap();

    let result = DiagramBuilder::new(config).parse("+--+");
    assert!(matches!(result, Err(ScrawlError::Config(_))));
}

#[test]
fn test_invalid_style_config_returns_error() {
    let config: AppConfig = toml::from_str("[style]\nbackground_color = \"nope\"\n").unwrap();
    let builder = DiagramBuilder::new(config);

    let diagram = builder.parse("+--+\n|  |\n+--+").expect("Failed to parse");
    let result = builder.render_svg(&diagram);
    assert!(matches!(result, Err(ScrawlError::Export(_))));
}

#[test]
fn test_empty_source() {
    let builder = DiagramBuilder::default();
    let diagram = builder.parse("").expect("Empty input is a valid diagram");

    assert!(diagram.shapes().is_empty());
    assert!(builder.render_svg(&diagram).is_ok());
}

#[test]
fn test_builder_reusability() {
    let builder = DiagramBuilder::default();

    let first = builder.parse("+--+\n|  |\n+--+").expect("Failed to parse first");
    let second = builder.parse("--->").expect("Failed to parse second");

    assert_eq!(first.shapes().len(), 1);
    assert_eq!(second.composites().len(), 1);
    assert!(builder.render_svg(&first).is_ok());
    assert!(builder.render_svg(&second).is_ok());
}
