//! The [`ConfigNode`] document tree.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A single `key = value` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigValue {
    /// Key, not necessarily unique within a node.
    pub name: String,
    /// Raw value text.
    pub value: String,
}

/// Named node with ordered values and ordered child nodes.
///
/// Duplicate keys and duplicate child names are allowed. Single-item lookups
/// ([`value`](Self::value), [`node`](Self::node)) return the first match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigNode {
    name: String,
    #[serde(default)]
    values: Vec<ConfigValue>,
    #[serde(default)]
    nodes: Vec<ConfigNode>,
}

impl ConfigNode {
    /// Creates an empty node with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
            nodes: Vec::new(),
        }
    }

    /// Returns the node name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the node.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns a copy of this node under a different name.
    #[must_use]
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        let mut copy = self.clone();
        copy.name = name.into();
        copy
    }

    // ─────────────────────────────────────────────────────────────────────
    // Values
    // ─────────────────────────────────────────────────────────────────────

    /// Returns the first value stored under `key`.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|v| v.name == key)
            .map(|v| v.value.as_str())
    }

    /// Parses the first value stored under `key`.
    ///
    /// Returns `None` if the key is missing or the value does not parse.
    #[must_use]
    pub fn parse_value<T: FromStr>(&self, key: &str) -> Option<T> {
        self.value(key).and_then(|v| v.trim().parse().ok())
    }

    /// Returns `true` if at least one value is stored under `key`.
    #[must_use]
    pub fn has_value(&self, key: &str) -> bool {
        self.values.iter().any(|v| v.name == key)
    }

    /// Iterates every value stored under `key`, in order.
    pub fn values<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.values
            .iter()
            .filter(move |v| v.name == key)
            .map(|v| v.value.as_str())
    }

    /// Iterates all values in order.
    pub fn iter_values(&self) -> impl Iterator<Item = &ConfigValue> {
        self.values.iter()
    }

    /// Appends a value, keeping any existing values with the same key.
    pub fn add_value(&mut self, key: impl Into<String>, value: impl ToString) {
        self.values.push(ConfigValue {
            name: key.into(),
            value: value.to_string(),
        });
    }

    /// Replaces the first value stored under `key`, or appends one.
    pub fn set_value(&mut self, key: &str, value: impl ToString) {
        match self.values.iter_mut().find(|v| v.name == key) {
            Some(existing) => existing.value = value.to_string(),
            None => self.add_value(key, value),
        }
    }

    /// Removes the first value stored under `key` and returns it.
    pub fn remove_value(&mut self, key: &str) -> Option<String> {
        let idx = self.values.iter().position(|v| v.name == key)?;
        Some(self.values.remove(idx).value)
    }

    /// Returns the number of values.
    #[must_use]
    pub fn count_values(&self) -> usize {
        self.values.len()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Child nodes
    // ─────────────────────────────────────────────────────────────────────

    /// Returns the first child named `name`.
    #[must_use]
    pub fn node(&self, name: &str) -> Option<&ConfigNode> {
        self.nodes.iter().find(|n| n.name == name)
    }

    /// Returns the first child named `name` mutably.
    pub fn node_mut(&mut self, name: &str) -> Option<&mut ConfigNode> {
        self.nodes.iter_mut().find(|n| n.name == name)
    }

    /// Returns `true` if a child named `name` exists.
    #[must_use]
    pub fn has_node(&self, name: &str) -> bool {
        self.nodes.iter().any(|n| n.name == name)
    }

    /// Iterates every child named `name`, in order.
    pub fn nodes<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a ConfigNode> + 'a {
        self.nodes.iter().filter(move |n| n.name == name)
    }

    /// Iterates every child named `name` mutably, in order.
    pub fn nodes_mut<'a>(
        &'a mut self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a mut ConfigNode> + 'a {
        self.nodes.iter_mut().filter(move |n| n.name == name)
    }

    /// Iterates all children in order.
    pub fn iter_nodes(&self) -> impl Iterator<Item = &ConfigNode> {
        self.nodes.iter()
    }

    /// Returns the first child whose value `key` equals `value`, among children named `name`.
    #[must_use]
    pub fn find_node(&self, name: &str, key: &str, value: &str) -> Option<&ConfigNode> {
        self.nodes
            .iter()
            .find(|n| n.name == name && n.value(key) == Some(value))
    }

    /// Appends a child and returns a mutable reference to it.
    pub fn add_node(&mut self, node: ConfigNode) -> &mut ConfigNode {
        self.nodes.push(node);
        let last = self.nodes.len() - 1;
        &mut self.nodes[last]
    }

    /// Removes every child named `name` and returns how many were removed.
    pub fn remove_nodes(&mut self, name: &str) -> usize {
        let before = self.nodes.len();
        self.nodes.retain(|n| n.name != name);
        before - self.nodes.len()
    }

    /// Returns the number of child nodes.
    #[must_use]
    pub fn count_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the node has no values and no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(name: &str) -> ConfigNode {
        let mut node = ConfigNode::new("Body");
        node.add_value("Name", name);
        node
    }

    #[test]
    fn first_value_wins() {
        let mut node = ConfigNode::new("Data");
        node.add_value("Deposit", 1);
        node.add_value("Deposit", 2);

        assert_eq!(node.value("Deposit"), Some("1"));
        assert_eq!(node.values("Deposit").collect::<Vec<_>>(), vec!["1", "2"]);
        assert_eq!(node.count_values(), 2);
    }

    #[test]
    fn set_value_replaces_first_or_appends() {
        let mut node = ConfigNode::new("Data");
        node.set_value("Seed", 1);
        node.add_value("Seed", 2);
        node.set_value("Seed", 3);

        assert_eq!(node.values("Seed").collect::<Vec<_>>(), vec!["3", "2"]);
    }

    #[test]
    fn remove_value_takes_first() {
        let mut node = ConfigNode::new("Data");
        node.add_value("Seed", "a");
        node.add_value("Seed", "b");

        assert_eq!(node.remove_value("Seed").as_deref(), Some("a"));
        assert_eq!(node.value("Seed"), Some("b"));
        assert_eq!(node.remove_value("Missing"), None);
    }

    #[test]
    fn parse_value_handles_bad_input() {
        let mut node = ConfigNode::new("Data");
        node.add_value("Seed", " 42 ");
        node.add_value("Other", "forty-two");

        assert_eq!(node.parse_value::<i32>("Seed"), Some(42));
        assert_eq!(node.parse_value::<i32>("Other"), None);
        assert_eq!(node.parse_value::<i32>("Missing"), None);
    }

    #[test]
    fn find_node_by_value() {
        let mut root = ConfigNode::new("Resource");
        root.add_node(body("Kerbin"));
        root.add_node(body("Mun"));
        root.add_node(body("Mun"));

        let found = root.find_node("Body", "Name", "Mun").unwrap();
        assert!(core::ptr::eq(found, root.nodes("Body").nth(1).unwrap()));
        assert!(root.find_node("Body", "Name", "Duna").is_none());
    }

    #[test]
    fn found_node_outlives_lookup_strings() {
        let mut root = ConfigNode::new("Resource");
        root.add_node(body("Minmus"));

        let found = {
            let name = String::from("Body");
            let wanted = format!("Min{}", "mus");
            root.find_node(&name, "Name", &wanted)
        };
        assert_eq!(found.and_then(|n| n.value("Name")), Some("Minmus"));
    }

    #[test]
    fn add_node_returns_inserted_child() {
        let mut root = ConfigNode::default();
        root.add_node(ConfigNode::new("Body")).add_value("Name", "Minmus");

        assert_eq!(root.node("Body").unwrap().value("Name"), Some("Minmus"));
    }

    #[test]
    fn remove_nodes_removes_all_matches() {
        let mut root = ConfigNode::new("Body");
        root.add_node(ConfigNode::new("Deposit"));
        root.add_node(ConfigNode::new("GeneratorData"));
        root.add_node(ConfigNode::new("Deposit"));

        assert_eq!(root.remove_nodes("Deposit"), 2);
        assert_eq!(root.count_nodes(), 1);
        assert!(root.has_node("GeneratorData"));
    }

    #[test]
    fn renamed_copies_contents() {
        let mut node = ConfigNode::new("Generator");
        node.add_value("name", "Empty");

        let copy = node.renamed("GeneratorData");
        assert_eq!(copy.name(), "GeneratorData");
        assert_eq!(copy.value("name"), Some("Empty"));
        assert_eq!(node.name(), "Generator");
    }

    #[test]
    fn default_node_is_empty() {
        let node = ConfigNode::default();
        assert!(node.is_empty());
        assert_eq!(node.name(), "");
    }
}
