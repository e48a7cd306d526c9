//! Explicit hierarchy view over `parent:child` category codes.
//!
//! # Responsibility
//! - Turn one domain's flat category codes into parent/child nodes.
//! - Answer traversal queries without re-splitting strings at call sites.
//!
//! # Invariants
//! - Node id is the full category code.
//! - A node's parent is the longest proper `:`-prefix of its code.
//! - Child listing is deterministic: lexical order of codes.
//! - Every non-root node's parent exists in the same tree.

use crate::model::taxonomy::{parent_code, CategoryMap, TaxonomyDomain, TaxonomyIcon};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One category in the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxonomyNode {
    pub code: String,
    /// `None` for top-level codes.
    pub parent: Option<String>,
    /// Number of ancestors; top-level codes have depth 0.
    pub depth: usize,
    pub children: Vec<String>,
    pub icon: TaxonomyIcon,
}

/// Errors from building a taxonomy tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// Child code whose parent code is not present in the domain.
    OrphanCategory {
        domain: TaxonomyDomain,
        code: String,
        parent: String,
    },
}

impl Display for TreeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OrphanCategory {
                domain,
                code,
                parent,
            } => write!(
                f,
                "taxonomy `{domain}` category `{code}` has no parent `{parent}`"
            ),
        }
    }
}

impl Error for TreeError {}

/// Category hierarchy for one taxonomy domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxonomyTree {
    domain: TaxonomyDomain,
    nodes: BTreeMap<String, TaxonomyNode>,
    roots: Vec<String>,
}

impl TaxonomyTree {
    /// Builds the hierarchy from one domain's category map.
    ///
    /// # Errors
    /// - `OrphanCategory` when a `parent:child` code has no `parent` entry.
    pub fn build(domain: TaxonomyDomain, categories: &CategoryMap) -> Result<Self, TreeError> {
        let mut nodes: BTreeMap<String, TaxonomyNode> = categories
            .iter()
            .map(|(code, icon)| {
                let node = TaxonomyNode {
                    code: code.clone(),
                    parent: parent_code(code).map(str::to_string),
                    depth: 0,
                    children: Vec::new(),
                    icon: icon.clone(),
                };
                (code.clone(), node)
            })
            .collect();

        let mut roots = Vec::new();
        let links: Vec<(String, Option<String>)> = nodes
            .values()
            .map(|node| (node.code.clone(), node.parent.clone()))
            .collect();
        // BTreeMap iteration keeps children and roots in lexical order.
        for (code, parent) in links {
            match parent {
                None => roots.push(code),
                Some(parent) => match nodes.get_mut(&parent) {
                    Some(parent_node) => parent_node.children.push(code),
                    None => {
                        return Err(TreeError::OrphanCategory {
                            domain,
                            code,
                            parent,
                        })
                    }
                },
            }
        }

        let mut tree = Self {
            domain,
            nodes,
            roots,
        };
        tree.assign_depths();
        Ok(tree)
    }

    fn assign_depths(&mut self) {
        let mut stack: Vec<(String, usize)> =
            self.roots.iter().map(|code| (code.clone(), 0)).collect();
        while let Some((code, depth)) = stack.pop() {
            if let Some(node) = self.nodes.get_mut(&code) {
                node.depth = depth;
                stack.extend(node.children.iter().map(|child| (child.clone(), depth + 1)));
            }
        }
    }

    pub fn domain(&self) -> TaxonomyDomain {
        self.domain
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, code: &str) -> Option<&TaxonomyNode> {
        self.nodes.get(code)
    }

    /// Top-level nodes in lexical order.
    pub fn roots(&self) -> Vec<&TaxonomyNode> {
        self.roots
            .iter()
            .filter_map(|code| self.nodes.get(code))
            .collect()
    }

    /// Direct children of `code` in lexical order.
    pub fn children(&self, code: &str) -> Vec<&TaxonomyNode> {
        let Some(node) = self.nodes.get(code) else {
            return vec![];
        };
        node.children
            .iter()
            .filter_map(|child| self.nodes.get(child))
            .collect()
    }

    pub fn parent(&self, code: &str) -> Option<&TaxonomyNode> {
        self.nodes
            .get(code)
            .and_then(|node| node.parent.as_deref())
            .and_then(|parent| self.nodes.get(parent))
    }

    /// Ancestors of `code`, nearest first.
    pub fn ancestors(&self, code: &str) -> Vec<&TaxonomyNode> {
        let mut result = Vec::new();
        let mut cursor = self.parent(code);
        while let Some(node) = cursor {
            result.push(node);
            cursor = self.parent(&node.code);
        }
        result
    }

    /// Every node below `code`, depth-first in lexical order.
    pub fn descendants(&self, code: &str) -> Vec<&TaxonomyNode> {
        let mut result = Vec::new();
        let mut stack: Vec<&TaxonomyNode> = self.children(code).into_iter().rev().collect();
        while let Some(node) = stack.pop() {
            result.push(node);
            stack.extend(self.children(&node.code).into_iter().rev());
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::{TaxonomyTree, TreeError};
    use crate::model::taxonomy::{CategoryMap, TaxonomyDomain, TaxonomyIcon};

    fn categories(codes: &[&str]) -> CategoryMap {
        codes
            .iter()
            .map(|code| (code.to_string(), TaxonomyIcon::unknown()))
            .collect()
    }

    #[test]
    fn links_children_to_parents_in_lexical_order() {
        let tree = TaxonomyTree::build(
            TaxonomyDomain::Explore,
            &categories(&["legal", "legal:privacy", "legal:court", "money"]),
        )
        .unwrap();

        let roots: Vec<&str> = tree.roots().iter().map(|n| n.code.as_str()).collect();
        assert_eq!(roots, vec!["legal", "money"]);
        let children: Vec<&str> = tree
            .children("legal")
            .iter()
            .map(|n| n.code.as_str())
            .collect();
        assert_eq!(children, vec!["legal:court", "legal:privacy"]);
        assert_eq!(tree.parent("legal:court").unwrap().code, "legal");
        assert_eq!(tree.get("legal:court").unwrap().depth, 1);
    }

    #[test]
    fn walks_multi_level_codes() {
        let tree = TaxonomyTree::build(
            TaxonomyDomain::Explore,
            &categories(&["a", "a:b", "a:b:c", "a:d"]),
        )
        .unwrap();

        let ancestors: Vec<&str> = tree
            .ancestors("a:b:c")
            .iter()
            .map(|n| n.code.as_str())
            .collect();
        assert_eq!(ancestors, vec!["a:b", "a"]);
        let descendants: Vec<&str> = tree
            .descendants("a")
            .iter()
            .map(|n| n.code.as_str())
            .collect();
        assert_eq!(descendants, vec!["a:b", "a:b:c", "a:d"]);
        assert_eq!(tree.get("a:b:c").unwrap().depth, 2);
    }

    #[test]
    fn rejects_orphan_child() {
        let err = TaxonomyTree::build(
            TaxonomyDomain::Explore,
            &categories(&["legalOrImmigration", "legal:court"]),
        )
        .unwrap_err();
        assert_eq!(
            err,
            TreeError::OrphanCategory {
                domain: TaxonomyDomain::Explore,
                code: "legal:court".to_string(),
                parent: "legal".to_string(),
            }
        );
    }

    #[test]
    fn unknown_code_has_no_children() {
        let tree = TaxonomyTree::build(TaxonomyDomain::Age, &categories(&["over_65"])).unwrap();
        assert!(tree.children("missing").is_empty());
        assert!(tree.ancestors("over_65").is_empty());
    }
}
