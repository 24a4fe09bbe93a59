use pyimports::core::graph::{build_graph, EdgeSet, ImportEdge};
use pyimports::core::ModuleName;
use pyimports::formatters::JsonGraphFormatter;
use serde_json::Value;

fn edge(source: &str, imported: &str) -> ImportEdge {
    ImportEdge::new(
        ModuleName::new(source).unwrap(),
        ModuleName::new(imported).unwrap(),
    )
}

#[test]
fn json_formatter_outputs_node_link_document() {
    let edges = EdgeSet::from([edge("a", "b"), edge("a", "c"), edge("b", "a")]);
    let graph = build_graph(&edges);

    let tmp = tempfile::NamedTempFile::new().unwrap();
    let path = tmp.path().with_extension("json");
    JsonGraphFormatter::new().format_to_file(&graph, &path).unwrap();

    let data = std::fs::read_to_string(&path).unwrap();
    let v: Value = serde_json::from_str(&data).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(v["directed"], Value::Bool(false));
    assert_eq!(v["multigraph"], Value::Bool(false));
    assert_eq!(v["nodes"].as_array().unwrap().len(), 3);
    // (a, b) and (b, a) share one undirected edge
    assert_eq!(v["links"].as_array().unwrap().len(), 2);

    let first = &v["nodes"][0];
    assert_eq!(first["id"], first["label"]);
}

#[test]
fn compact_output_has_no_newlines() {
    let graph = build_graph(&EdgeSet::from([edge("x", "y")]));
    let rendered = JsonGraphFormatter::new()
        .with_pretty(false)
        .format_graph(&graph)
        .unwrap();
    assert!(!rendered.contains('\n'));
}
