//! Normalized graph, node and link structures.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key holding a node's or link's identifier.
pub const ID_KEY: &str = "id";
/// Key holding a node's display label.
pub const NAME_KEY: &str = "name";
/// Key holding a link's source node id.
pub const SOURCE_KEY: &str = "source";
/// Key holding a link's target node id.
pub const TARGET_KEY: &str = "target";

/// Normalized graph - the single output shape of every parser.
///
/// Serializes as exactly `{"nodes": [...], "links": [...]}`. Both sequences
/// keep input order. Node id uniqueness and link endpoints are never
/// validated; duplicates and dangling references pass through.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    /// Nodes in input order
    pub nodes: Vec<Node>,
    /// Links in input order
    pub links: Vec<Link>,
}

impl Graph {
    /// Create a graph from already-normalized nodes and links
    #[must_use]
    pub const fn new(nodes: Vec<Node>, links: Vec<Link>) -> Self {
        Self { nodes, links }
    }

    /// Append a node
    pub fn add_node(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// Append a link
    pub fn add_link(&mut self, link: Link) {
        self.links.push(link);
    }

    /// Number of nodes
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of links
    #[must_use]
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// True when the graph has neither nodes nor links
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.links.is_empty()
    }

    /// Serialize to compact JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialize to indented JSON
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Count nodes, links, repeated node ids and links whose endpoints
    /// reference no node.
    ///
    /// Reporting only: the graph itself is left untouched.
    #[must_use]
    pub fn stats(&self) -> GraphStats {
        let mut occurrences: IndexMap<String, usize> = IndexMap::new();
        for node in &self.nodes {
            if let Some(id) = node.get(ID_KEY).and_then(id_key) {
                *occurrences.entry(id).or_default() += 1;
            }
        }

        let duplicate_node_ids: IndexSet<String> = occurrences
            .iter()
            .filter(|(_, count)| **count > 1)
            .map(|(id, _)| id.clone())
            .collect();

        let resolves = |endpoint: Option<&Value>| {
            endpoint
                .and_then(id_key)
                .is_some_and(|id| occurrences.contains_key(&id))
        };
        let dangling_links = self
            .links
            .iter()
            .filter(|link| !resolves(link.source()) || !resolves(link.target()))
            .count();

        GraphStats {
            nodes: self.nodes.len(),
            links: self.links.len(),
            duplicate_node_ids: duplicate_node_ids.into_iter().collect(),
            dangling_links,
        }
    }
}

/// Counts reported by [`Graph::stats`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub nodes: usize,
    pub links: usize,
    /// Node ids seen more than once, in first-seen order
    pub duplicate_node_ids: Vec<String>,
    /// Links with a missing source or target, or one that matches no node id
    pub dangling_links: usize,
}

/// Render an id value as the string a visualization would key on.
///
/// Strings are used verbatim and numbers by their JSON text; any other
/// value cannot act as an id.
fn id_key(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// A graph node: an insertion-ordered mapping from attribute name to value.
///
/// Parsers always populate `id` and `name` (`name` may be null). Any other
/// key is an attribute copied from the source document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Node(Map<String, Value>);

impl Node {
    /// Create a node holding only `id` and `name`
    pub fn new(id: impl Into<Value>, name: impl Into<Value>) -> Self {
        let mut map = Map::new();
        map.insert(ID_KEY.to_string(), id.into());
        map.insert(NAME_KEY.to_string(), name.into());
        Self(map)
    }

    /// Wrap an existing mapping without touching its keys
    #[must_use]
    pub const fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// The node id as a string, if it is one
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.0.get(ID_KEY).and_then(Value::as_str)
    }

    /// The display name, if present and a string
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.0.get(NAME_KEY).and_then(Value::as_str)
    }

    /// Look up any key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Set a key, returning the previous value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Copy attributes onto the node. Existing keys are kept, so `id` and
    /// `name` set at construction are never overwritten.
    pub fn extend_attributes<'a>(
        &mut self,
        attributes: impl IntoIterator<Item = (&'a String, &'a Value)>,
    ) {
        for (key, value) in attributes {
            self.0.entry(key.clone()).or_insert_with(|| value.clone());
        }
    }

    /// Number of keys, including `id` and `name`
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the mapping has no keys
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A graph link: an insertion-ordered mapping with `source`, `target` and
/// `id` plus any attributes copied from the source document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Link(Map<String, Value>);

impl Link {
    /// Create a link holding only `source`, `target` and `id`
    pub fn new(
        source: impl Into<Value>,
        target: impl Into<Value>,
        id: impl Into<Value>,
    ) -> Self {
        let mut map = Map::new();
        map.insert(SOURCE_KEY.to_string(), source.into());
        map.insert(TARGET_KEY.to_string(), target.into());
        map.insert(ID_KEY.to_string(), id.into());
        Self(map)
    }

    /// Raw source endpoint
    #[must_use]
    pub fn source(&self) -> Option<&Value> {
        self.0.get(SOURCE_KEY)
    }

    /// Raw target endpoint
    #[must_use]
    pub fn target(&self) -> Option<&Value> {
        self.0.get(TARGET_KEY)
    }

    /// The link id as a string, if it is one
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.0.get(ID_KEY).and_then(Value::as_str)
    }

    /// Look up any key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Fill keys not already present; existing values win.
    pub fn fill_missing<'a>(&mut self, fields: impl IntoIterator<Item = (&'a String, &'a Value)>) {
        for (key, value) in fields {
            self.0.entry(key.clone()).or_insert_with(|| value.clone());
        }
    }

    /// Overwrite keys with `fields`; incoming values win.
    pub fn override_with<'a>(&mut self, fields: impl IntoIterator<Item = (&'a String, &'a Value)>) {
        for (key, value) in fields {
            self.0.insert(key.clone(), value.clone());
        }
    }
}
