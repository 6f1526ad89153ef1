//! Topic co-occurrence graph derived from a result set.

use std::collections::HashMap;

use crate::models::{TopicData, TopicLink, TopicNode, UnifiedResult};

/// Tags considered per result.
pub const TAGS_PER_RESULT: usize = 4;

/// Links kept, in generation order.
pub const MAX_LINKS: usize = 50;

/// Weight of a node on first sighting.
pub const NODE_BASE_VAL: u32 = 5;

/// Weight added per further sighting.
pub const NODE_VAL_STEP: u32 = 2;

/// Group assigned to every node.
pub const DEFAULT_GROUP: u32 = 1;

/// Build the topic graph for `results`.
///
/// Every sighting of a tag after the first adds [`NODE_VAL_STEP`] to its
/// node, including repeats inside one result. Each pair of distinct tags
/// within one result yields one link, so pairs recurring across results give
/// parallel links. Only the first [`MAX_LINKS`] links are kept.
#[must_use]
pub fn generate_topic_data(results: &[UnifiedResult]) -> TopicData {
    let mut nodes: Vec<TopicNode> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut links = Vec::new();

    for result in results {
        let tags = result.tags();
        let tags = &tags[..tags.len().min(TAGS_PER_RESULT)];

        for tag in tags {
            match index.get(tag.as_str()) {
                Some(&i) => nodes[i].val += NODE_VAL_STEP,
                None => {
                    index.insert(tag, nodes.len());
                    nodes.push(TopicNode {
                        id: tag.clone(),
                        group: DEFAULT_GROUP,
                        val: NODE_BASE_VAL,
                    });
                }
            }
        }

        for (i, source) in tags.iter().enumerate() {
            for target in &tags[i + 1..] {
                if links.len() < MAX_LINKS && source != target {
                    links.push(TopicLink { source: source.clone(), target: target.clone() });
                }
            }
        }
    }

    tracing::debug!(nodes = nodes.len(), links = links.len(), "Built topic graph");

    TopicData { nodes, links }
}
