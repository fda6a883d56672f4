//! Nested cookie category tree and depth-first flattening.

use serde::{Deserialize, Serialize};

/// A node in the configured category tree.
///
/// Nesting is grouping only and carries no meaning beyond the order in
/// which leaves are encountered. Leaf identifiers double as form field keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryNode {
    /// A single category identifier.
    Leaf(String),
    /// A nested group of categories.
    Group(Vec<CategoryNode>),
}

impl CategoryNode {
    pub fn leaf(id: impl Into<String>) -> Self {
        Self::Leaf(id.into())
    }

    pub fn group(children: Vec<CategoryNode>) -> Self {
        Self::Group(children)
    }
}

/// Collect all leaf identifiers depth-first, left to right.
///
/// Duplicate and empty identifiers pass through unchanged; no sorting, no
/// deduplication. An empty tree yields an empty list.
pub fn flatten(nodes: &[CategoryNode]) -> Vec<String> {
    let mut flat = Vec::new();
    collect(nodes, &mut flat);
    flat
}

fn collect(nodes: &[CategoryNode], flat: &mut Vec<String>) {
    for node in nodes {
        match node {
            CategoryNode::Leaf(id) => flat.push(id.clone()),
            CategoryNode::Group(children) => collect(children, flat),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(id: &str) -> CategoryNode {
        CategoryNode::leaf(id)
    }

    #[test]
    fn test_flatten_preserves_depth_first_order() {
        let tree = vec![
            leaf("a"),
            CategoryNode::group(vec![
                leaf("b"),
                CategoryNode::group(vec![leaf("c"), leaf("d")]),
            ]),
            leaf("e"),
        ];
        assert_eq!(flatten(&tree), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_flatten_flat_input_unchanged() {
        let tree = vec![leaf("a"), leaf("b")];
        assert_eq!(flatten(&tree), vec!["a", "b"]);
    }

    #[test]
    fn test_flatten_empty() {
        assert_eq!(flatten(&[]), Vec::<String>::new());
    }

    #[test]
    fn test_flatten_ignores_depth() {
        let shallow = vec![leaf("x"), leaf("y")];
        let deep = vec![CategoryNode::group(vec![CategoryNode::group(vec![
            CategoryNode::group(vec![leaf("x")]),
            leaf("y"),
        ])])];
        assert_eq!(flatten(&deep), flatten(&shallow));
    }

    #[test]
    fn test_flatten_keeps_duplicates() {
        let tree = vec![leaf("ads"), CategoryNode::group(vec![leaf("ads")])];
        assert_eq!(flatten(&tree), vec!["ads", "ads"]);
    }

    #[test]
    fn test_deserialize_nested_json() {
        let tree: Vec<CategoryNode> =
            serde_json::from_str(r#"["ads", ["stats", ["heatmaps"]], "social"]"#).unwrap();
        assert_eq!(flatten(&tree), vec!["ads", "stats", "heatmaps", "social"]);
    }
}
