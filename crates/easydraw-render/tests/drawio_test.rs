use easydraw_core::sanitize;
use easydraw_render::drawio::{
    CURVED_EDGE_STYLE, DECISION_STYLE, EDGE_STYLE, PLACEHOLDER_STYLE, PROCESS_STYLE, escape_xml,
};
use easydraw_render::{LayoutOptions, layout_flowchart, render_drawio, render_placeholder};

fn render(text: &str) -> String {
    let layout = layout_flowchart(text, &LayoutOptions::default()).expect("edges recognized");
    render_drawio(&layout)
}

#[test]
fn chain_document_is_exact() {
    let expected = format!(
        concat!(
            r#"<mxfile host="app.diagrams.net"><diagram name="Generated"><mxGraphModel><root>"#,
            r#"<mxCell id="0"/><mxCell id="1" parent="0"/>"#,
            r#"<mxCell id="2" value="A" style="{p}" vertex="1" parent="1"><mxGeometry x="280" y="80" width="120" height="50" as="geometry"/></mxCell>"#,
            r#"<mxCell id="3" value="B" style="{p}" vertex="1" parent="1"><mxGeometry x="280" y="200" width="120" height="50" as="geometry"/></mxCell>"#,
            r#"<mxCell id="4" edge="1" parent="1" source="2" target="3" value="" style="{e}"><mxGeometry relative="1" as="geometry"/></mxCell>"#,
            r#"</root></mxGraphModel></diagram></mxfile>"#,
        ),
        p = PROCESS_STYLE,
        e = EDGE_STYLE,
    );
    assert_eq!(render("graph TB\nA --> B"), expected);
}

#[test]
fn document_is_well_formed_and_cells_are_numbered_in_order() {
    let xml = render("graph TD\nS[Start] --> D{Check}\nD -->|yes| E[End]\nD -->|no| S");
    let doc = roxmltree::Document::parse(&xml).expect("well-formed XML");

    let cells: Vec<_> = doc
        .descendants()
        .filter(|n| n.has_tag_name("mxCell"))
        .collect();
    let ids: Vec<_> = cells.iter().filter_map(|c| c.attribute("id")).collect();
    assert_eq!(ids, vec!["0", "1", "2", "3", "4", "5", "6", "7"]);

    let vertices: Vec<_> = cells
        .iter()
        .filter(|c| c.attribute("vertex") == Some("1"))
        .collect();
    let labels: Vec<_> = vertices.iter().filter_map(|c| c.attribute("value")).collect();
    assert_eq!(labels, vec!["Start", "Check", "End"]);
    assert_eq!(vertices[1].attribute("style"), Some(DECISION_STYLE));

    let edges: Vec<_> = cells
        .iter()
        .filter(|c| c.attribute("edge") == Some("1"))
        .collect();
    assert_eq!(edges.len(), 3);
    assert_eq!(edges[0].attribute("style"), Some(EDGE_STYLE));
    assert_eq!(edges[1].attribute("value"), Some("yes"));
    assert_eq!(edges[1].attribute("style"), Some(CURVED_EDGE_STYLE));
    assert_eq!(edges[2].attribute("source"), Some("3"));
    assert_eq!(edges[2].attribute("target"), Some("2"));
}

#[test]
fn labels_are_escaped() {
    let xml = render(&sanitize("<a & 'b'> --> 结束"));
    assert!(xml.contains(r#"value="&lt;a &amp; &#39;b&#39;&gt;""#));

    let doc = roxmltree::Document::parse(&xml).expect("well-formed XML");
    let first = doc
        .descendants()
        .find(|n| n.attribute("id") == Some("2"))
        .unwrap();
    assert_eq!(first.attribute("value"), Some("<a & 'b'>"));
}

#[test]
fn escape_covers_the_five_xml_specials() {
    assert_eq!(
        escape_xml(r#"& < > " ' 中"#),
        "&amp; &lt; &gt; &quot; &#39; 中"
    );
}

#[test]
fn placeholder_wraps_the_text() {
    let xml = render_placeholder("graph TB\n%% nothing here");
    let doc = roxmltree::Document::parse(&xml).expect("well-formed XML");
    let cell = doc
        .descendants()
        .find(|n| n.attribute("id") == Some("2"))
        .unwrap();
    assert_eq!(cell.attribute("style"), Some(PLACEHOLDER_STYLE));
    assert_eq!(cell.attribute("vertex"), Some("1"));
    let geometry = cell.first_element_child().unwrap();
    assert_eq!(geometry.attribute("x"), Some("160"));
    assert_eq!(geometry.attribute("y"), Some("120"));
    assert_eq!(geometry.attribute("width"), Some("320"));
    assert_eq!(geometry.attribute("height"), Some("200"));
    assert!(xml.starts_with(r#"<mxfile host="app.diagrams.net">"#));
    assert!(!xml.contains(">\n<"));
}

#[test]
fn blank_placeholder_has_a_notice() {
    let xml = render_placeholder("  ");
    assert!(xml.contains(r#"value="Mermaid content is empty""#));
}
