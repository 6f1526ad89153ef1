//! Topic co-occurrence graph types.

use serde::{Deserialize, Serialize};

/// A topic or subject tag in the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicNode {
    /// Tag text, unique per graph.
    pub id: String,

    /// Rendering group.
    pub group: u32,

    /// Visual weight.
    pub val: u32,
}

/// Undirected co-occurrence edge between two tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicLink {
    /// Tag ID.
    pub source: String,

    /// Tag ID.
    pub target: String,
}

/// Graph handed to the force-directed view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicData {
    /// Nodes in first-sighting order.
    pub nodes: Vec<TopicNode>,

    /// Links in generation order; parallel links allowed.
    pub links: Vec<TopicLink>,
}

impl TopicData {
    /// Look up a node by tag.
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&TopicNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Check whether a link joins `a` and `b` in either direction.
    #[must_use]
    pub fn has_link(&self, a: &str, b: &str) -> bool {
        self.links
            .iter()
            .any(|l| (l.source == a && l.target == b) || (l.source == b && l.target == a))
    }

    /// Check if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
