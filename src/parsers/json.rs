//! JSON graph parser.
//!
//! Two JSON graph layouts are recognized by key presence, checked in order:
//!
//! 1. **Keyed-attribute**: top-level `nodes` and `edges`. Entries carry a
//!    `key` and an `attributes` object which are flattened into the output.
//! 2. **Direct**: top-level `nodes` and `links`, already in the normalized
//!    shape and passed through unchanged.
//!
//! ## Edge merge precedence
//!
//! A keyed-attribute edge becomes a link by merging, lowest precedence first:
//! the edge's `attributes`, then the explicit `source`/`target`/`id` (from
//! `key`), then every raw field of the edge entry. Raw fields are final, so an
//! edge carrying a literal `id` field replaces the id taken from `key`, and
//! the raw `key` and `attributes` fields appear on the link as well.

use crate::model::{Graph, Link, Node, ID_KEY, SOURCE_KEY, TARGET_KEY};
use crate::parsers::traits::{GraphParser, ParseError};
use serde_json::{Map, Value};

/// Message for a top-level value matching neither layout.
const INVALID_JSON_FORMAT: &str = "Invalid JSON format";

/// Name candidates for a keyed-attribute node, checked before `key`.
const NAME_ATTRIBUTES: [&str; 2] = ["legal_name", "trade_name"];

/// JSON graph layout detected from the top-level keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonGraphSchema {
    /// `nodes` + `edges`, entries with `key` and `attributes`
    KeyedAttributes,
    /// `nodes` + `links`, already normalized
    Direct,
}

impl JsonGraphSchema {
    /// Detect the layout of a parsed top-level value.
    ///
    /// Keyed-attribute wins when a document has `nodes`, `edges` and `links`.
    #[must_use]
    pub fn detect(value: &Value) -> Option<Self> {
        let root = value.as_object()?;
        if !root.contains_key("nodes") {
            return None;
        }
        if root.contains_key("edges") {
            Some(Self::KeyedAttributes)
        } else if root.contains_key("links") {
            Some(Self::Direct)
        } else {
            None
        }
    }

    /// Human-readable name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::KeyedAttributes => "keyed-attribute",
            Self::Direct => "direct",
        }
    }
}

/// Parser for JSON graph files
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonGraphParser;

impl JsonGraphParser {
    /// Create a new JSON graph parser
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Convert a `nodes` + `edges` document
    fn convert_keyed(&self, mut root: Map<String, Value>) -> Result<Graph, String> {
        let mut graph = Graph::default();

        for entry in take_array(&mut root, "nodes")? {
            let node = as_entry(&entry, "node")?;
            graph.add_node(self.convert_node(node)?);
        }

        for entry in take_array(&mut root, "edges")? {
            let edge = as_entry(&entry, "edge")?;
            graph.add_link(self.convert_edge(edge)?);
        }

        Ok(graph)
    }

    /// `{id: key, name, ...attributes}`; `id` and `name` are never replaced
    /// by attributes of the same name.
    fn convert_node(&self, node: &Map<String, Value>) -> Result<Node, String> {
        let attributes = attributes_of(node)?;
        let key = node.get("key").cloned().unwrap_or(Value::Null);

        let name = attributes
            .and_then(|attrs| {
                NAME_ATTRIBUTES
                    .iter()
                    .filter_map(|name| attrs.get(*name))
                    .find(|value| is_truthy(value))
            })
            .cloned()
            .unwrap_or_else(|| key.clone());

        let mut converted = Node::new(key, name);
        if let Some(attrs) = attributes {
            converted.extend_attributes(attrs);
        }
        Ok(converted)
    }

    /// Explicit fields over attributes, raw edge fields over everything.
    fn convert_edge(&self, edge: &Map<String, Value>) -> Result<Link, String> {
        let attributes = attributes_of(edge)?;
        let field = |name: &str| edge.get(name).cloned().unwrap_or(Value::Null);

        let mut link = Link::new(field(SOURCE_KEY), field(TARGET_KEY), field("key"));
        if let Some(attrs) = attributes {
            link.fill_missing(attrs);
        }
        link.override_with(edge);

        if edge.contains_key(ID_KEY) {
            tracing::debug!("Edge field 'id' replaces the id taken from 'key'");
        }
        Ok(link)
    }

    /// Pass a `nodes` + `links` document through unchanged
    fn convert_direct(&self, mut root: Map<String, Value>) -> Result<Graph, String> {
        let nodes: Vec<Node> = take_field(&mut root, "nodes")
            .map(serde_json::from_value)
            .transpose()
            .map_err(|e| format!("nodes: {e}"))?
            .unwrap_or_default();
        let links: Vec<Link> = take_field(&mut root, "links")
            .map(serde_json::from_value)
            .transpose()
            .map_err(|e| format!("links: {e}"))?
            .unwrap_or_default();
        Ok(Graph::new(nodes, links))
    }
}

impl GraphParser for JsonGraphParser {
    fn parse_str(&self, content: &str) -> Result<Graph, ParseError> {
        let data: Value = serde_json::from_str(content).map_err(|e| invalid_json(&e))?;

        let schema = JsonGraphSchema::detect(&data);
        let Some(schema) = schema else {
            tracing::warn!("Error parsing JSON: {}", INVALID_JSON_FORMAT);
            return Err(ParseError::InvalidFormat(INVALID_JSON_FORMAT.to_string()));
        };
        let Value::Object(root) = data else {
            return Err(ParseError::InvalidFormat(INVALID_JSON_FORMAT.to_string()));
        };

        tracing::debug!("Detected {} JSON graph layout", schema.name());
        let graph = match schema {
            JsonGraphSchema::KeyedAttributes => self.convert_keyed(root),
            JsonGraphSchema::Direct => self.convert_direct(root),
        }
        .map_err(|detail| invalid_json(&detail))?;

        tracing::debug!(
            "Parsed JSON graph: {} nodes, {} links",
            graph.node_count(),
            graph.link_count()
        );
        Ok(graph)
    }

    fn format_name(&self) -> &str {
        "JSON"
    }

    fn extensions(&self) -> &[&str] {
        &["json"]
    }
}

/// Wrap a failure detail, keeping its message text
fn invalid_json(detail: &dyn std::fmt::Display) -> ParseError {
    tracing::warn!("Error parsing JSON: {}", detail);
    ParseError::InvalidFormat(format!("Invalid JSON file: {detail}"))
}

fn take_field(root: &mut Map<String, Value>, key: &str) -> Option<Value> {
    root.remove(key)
}

/// Remove a top-level field that must hold an array
fn take_array(root: &mut Map<String, Value>, key: &str) -> Result<Vec<Value>, String> {
    match take_field(root, key) {
        Some(Value::Array(items)) => Ok(items),
        Some(other) => Err(format!("'{key}' must be an array, found {}", type_name(&other))),
        None => Err(format!("missing '{key}'")),
    }
}

/// Node and edge entries must be objects
fn as_entry<'a>(entry: &'a Value, what: &str) -> Result<&'a Map<String, Value>, String> {
    entry
        .as_object()
        .ok_or_else(|| format!("{what} entry must be an object, found {}", type_name(entry)))
}

/// The `attributes` object of an entry. Absent is fine; any other non-object
/// value is an error.
fn attributes_of(entry: &Map<String, Value>) -> Result<Option<&Map<String, Value>>, String> {
    match entry.get("attributes") {
        None => Ok(None),
        Some(Value::Object(attrs)) => Ok(Some(attrs)),
        Some(other) => Err(format!(
            "'attributes' must be an object, found {}",
            type_name(other)
        )),
    }
}

/// Whether a name candidate is usable: null, false, zero and empty
/// strings, arrays and objects are skipped.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

const fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: &Value) -> Result<Graph, ParseError> {
        JsonGraphParser::new().parse_str(&value.to_string())
    }

    fn node_names(graph: &Graph) -> Vec<Option<&str>> {
        graph.nodes.iter().map(Node::name).collect()
    }

    #[test]
    fn test_detect_schema() {
        assert_eq!(
            JsonGraphSchema::detect(&json!({"nodes": [], "edges": []})),
            Some(JsonGraphSchema::KeyedAttributes)
        );
        assert_eq!(
            JsonGraphSchema::detect(&json!({"nodes": [], "links": []})),
            Some(JsonGraphSchema::Direct)
        );
        assert_eq!(
            JsonGraphSchema::detect(&json!({"nodes": [], "edges": [], "links": []})),
            Some(JsonGraphSchema::KeyedAttributes)
        );
        assert_eq!(JsonGraphSchema::detect(&json!({"nodes": []})), None);
        assert_eq!(JsonGraphSchema::detect(&json!(["nodes", "links"])), None);
    }

    #[test]
    fn test_direct_schema_is_identity() {
        let doc = json!({
            "nodes": [
                {"id": "a", "name": "A", "division": "north"},
                {"name": "no id here", "id": "b"}
            ],
            "links": [{"source": "a", "target": "b", "color": "red"}]
        });
        let graph = parse(&doc).unwrap();
        assert_eq!(serde_json::to_value(&graph).unwrap(), doc);
    }

    #[test]
    fn test_direct_schema_keeps_float_bits() {
        let text = "1547.8774647008913";
        let doc = format!(r#"{{"nodes":[{{"id":"a","w":{text}}}],"links":[]}}"#);
        let graph = JsonGraphParser::new().parse_str(&doc).unwrap();

        let parsed = graph.nodes[0].get("w").and_then(Value::as_f64).unwrap();
        assert_eq!(parsed.to_bits(), text.parse::<f64>().unwrap().to_bits());
        assert_eq!(graph.to_json().unwrap(), doc);
    }

    #[test]
    fn test_direct_schema_drops_other_top_level_keys() {
        let doc = json!({"meta": {"v": 1}, "nodes": [], "links": []});
        let graph = parse(&doc).unwrap();
        assert_eq!(
            serde_json::to_value(&graph).unwrap(),
            json!({"nodes": [], "links": []})
        );
    }

    #[test]
    fn test_direct_schema_rejects_non_object_entries() {
        let err = parse(&json!({"nodes": [1, 2], "links": []})).unwrap_err();
        assert!(err.message().starts_with("Invalid JSON file: "));
    }

    #[test]
    fn test_legal_name_wins_over_trade_name() {
        let graph = parse(&json!({
            "nodes": [
                {"key": "k1", "attributes": {"legal_name": "X", "trade_name": "T"}},
                {"key": "k2", "attributes": {"trade_name": "Y"}},
                {"key": "k3", "attributes": {"city": "Oslo"}},
                {"key": "k4"}
            ],
            "edges": []
        }))
        .unwrap();

        assert_eq!(
            node_names(&graph),
            vec![Some("X"), Some("Y"), Some("k3"), Some("k4")]
        );
    }

    #[test]
    fn test_empty_legal_name_falls_through() {
        let graph = parse(&json!({
            "nodes": [
                {"key": "k1", "attributes": {"legal_name": "", "trade_name": "Y"}},
                {"key": "k2", "attributes": {"legal_name": null}}
            ],
            "edges": []
        }))
        .unwrap();
        assert_eq!(node_names(&graph), vec![Some("Y"), Some("k2")]);
    }

    #[test]
    fn test_keyed_node_flattens_attributes() {
        let graph = parse(&json!({
            "nodes": [{
                "key": "k1",
                "attributes": {"legal_name": "Acme", "id": "shadow", "name": "shadow", "size": 4}
            }],
            "edges": []
        }))
        .unwrap();

        assert_eq!(
            serde_json::to_value(&graph.nodes[0]).unwrap(),
            json!({"id": "k1", "name": "Acme", "legal_name": "Acme", "size": 4})
        );
    }

    #[test]
    fn test_keyed_node_without_key_has_null_id() {
        let graph = parse(&json!({"nodes": [{"attributes": {}}], "edges": []})).unwrap();
        assert_eq!(graph.nodes[0].get("id"), Some(&Value::Null));
        assert_eq!(graph.nodes[0].get("name"), Some(&Value::Null));
    }

    #[test]
    fn test_keyed_edge_merge_order() {
        let graph = parse(&json!({
            "nodes": [],
            "edges": [{
                "source": "a",
                "target": "b",
                "key": "e1",
                "attributes": {"source": "ignored", "weight": 2, "color": "blue"}
            }]
        }))
        .unwrap();

        let link = &graph.links[0];
        assert_eq!(link.source(), Some(&json!("a")));
        assert_eq!(link.target(), Some(&json!("b")));
        assert_eq!(link.id(), Some("e1"));
        assert_eq!(link.get("weight"), Some(&json!(2)));
        assert_eq!(link.get("color"), Some(&json!("blue")));
        // Raw edge fields are carried too
        assert_eq!(link.get("key"), Some(&json!("e1")));
        assert!(link.get("attributes").is_some());
    }

    #[test]
    fn test_raw_edge_id_overrides_key() {
        let graph = parse(&json!({
            "nodes": [],
            "edges": [{"source": "a", "target": "b", "key": "e1", "id": "raw", "attributes": {}}]
        }))
        .unwrap();
        assert_eq!(graph.links[0].id(), Some("raw"));
    }

    #[test]
    fn test_raw_edge_field_overrides_attribute() {
        let graph = parse(&json!({
            "nodes": [],
            "edges": [{"source": "a", "target": "b", "key": "e1", "weight": 9,
                       "attributes": {"weight": 1}}]
        }))
        .unwrap();
        assert_eq!(graph.links[0].get("weight"), Some(&json!(9)));
    }

    #[test]
    fn test_keyed_order_is_preserved() {
        let graph = parse(&json!({
            "nodes": [{"key": "c"}, {"key": "a"}, {"key": "b"}, {"key": "a"}],
            "edges": []
        }))
        .unwrap();
        let ids: Vec<_> = graph.nodes.iter().filter_map(Node::id).collect();
        assert_eq!(ids, vec!["c", "a", "b", "a"]);
    }

    #[test]
    fn test_malformed_json_is_invalid_format() {
        let err = JsonGraphParser::new().parse_str("{not json").unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(_)));
        assert!(err.message().starts_with("Invalid JSON file: "));
    }

    #[test]
    fn test_unknown_layout_is_invalid_format() {
        let err = parse(&json!({"vertices": []})).unwrap_err();
        assert_eq!(err, ParseError::InvalidFormat("Invalid JSON format".to_string()));

        let err = parse(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(err, ParseError::InvalidFormat("Invalid JSON format".to_string()));
    }

    #[test]
    fn test_traversal_errors_are_invalid_format() {
        let cases = [
            json!({"nodes": {"k": 1}, "edges": []}),
            json!({"nodes": ["k1"], "edges": []}),
            json!({"nodes": [{"key": "k1", "attributes": null}], "edges": []}),
            json!({"nodes": [], "edges": [{"source": "a", "attributes": [1]}]}),
        ];
        for case in &cases {
            let err = parse(case).unwrap_err();
            assert!(
                err.message().starts_with("Invalid JSON file: "),
                "unexpected error for {case}: {err}"
            );
        }
    }

    #[test]
    fn test_is_truthy() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!([])));
        assert!(!is_truthy(&json!({})));
        assert!(is_truthy(&json!("x")));
        assert!(is_truthy(&json!(0.5)));
    }
}
