//! The declarative description of what a command generates.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A node of a generation tree.
///
/// In configuration files a plain string is a template reference and a mapping
/// is a directory:
///
/// ```yaml
/// "{{ module_name }}":
///   "index.js": "index.js.hbs"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    /// Identifier of the template whose rendered content becomes the file
    File(String),
    /// Child name template to child node, in declaration order
    Directory(IndexMap<String, TreeNode>),
}

impl TreeNode {
    pub fn file<S: Into<String>>(template: S) -> Self {
        Self::File(template.into())
    }

    /// Builds a directory node from `(name, node)` pairs, keeping their order.
    pub fn dir<K, I>(children: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, TreeNode)>,
    {
        Self::Directory(children.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Template identifiers referenced anywhere below this node, depth first.
    pub fn templates(&self) -> Vec<&str> {
        match self {
            Self::File(template) => vec![template.as_str()],
            Self::Directory(children) => {
                children.values().flat_map(TreeNode::templates).collect()
            }
        }
    }
}
