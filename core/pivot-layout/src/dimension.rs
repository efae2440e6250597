//! FILENAME: core/pivot-layout/src/dimension.rs
//! Dimension nodes as supplied by the aggregation engine.
//!
//! A dimension is one distinct value along an axis at some nesting depth.
//! Depth counts the levels below and including the node itself, so
//! `depth == 1` means nothing is nested under it.

use serde::{Deserialize, Serialize};

/// Identity of a dimension node, assigned by the aggregation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DimensionId(pub u32);

/// Sub-total settings of a row/column field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubTotalConfig {
    /// Whether the field shows a sub-total row/column for each group.
    pub visible: bool,
    /// Whether the field's groups start collapsed.
    pub collapsed: bool,
}

impl Default for SubTotalConfig {
    fn default() -> Self {
        SubTotalConfig {
            visible: true,
            collapsed: false,
        }
    }
}

impl SubTotalConfig {
    pub fn hidden() -> Self {
        SubTotalConfig {
            visible: false,
            collapsed: false,
        }
    }
}

/// The field a dimension value belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionField {
    pub name: String,
    #[serde(default)]
    pub sub_total: SubTotalConfig,
}

impl DimensionField {
    pub fn new(name: impl Into<String>) -> Self {
        DimensionField {
            name: name.into(),
            sub_total: SubTotalConfig::default(),
        }
    }

    pub fn with_sub_total(mut self, visible: bool, collapsed: bool) -> Self {
        self.sub_total = SubTotalConfig { visible, collapsed };
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub id: DimensionId,
    pub value: String,
    /// Levels at and below this node (>= 1).
    pub depth: u32,
    pub is_root: bool,
    pub is_leaf: bool,
    pub field: DimensionField,
}

impl Dimension {
    /// Creates a non-root dimension value. Leaf status follows from depth.
    pub fn new(
        id: DimensionId,
        value: impl Into<String>,
        depth: u32,
        field: DimensionField,
    ) -> Self {
        Dimension {
            id,
            value: value.into(),
            depth,
            is_root: false,
            is_leaf: depth == 1,
            field,
        }
    }

    /// Creates the root of an axis. Root nodes have no field of their own,
    /// so their sub-total is never shown.
    pub fn root(id: DimensionId, depth: u32) -> Self {
        Dimension {
            id,
            value: String::new(),
            depth,
            is_root: true,
            is_leaf: false,
            field: DimensionField {
                name: String::new(),
                sub_total: SubTotalConfig::hidden(),
            },
        }
    }

    pub fn with_leaf(mut self, is_leaf: bool) -> Self {
        self.is_leaf = is_leaf;
        self
    }

    pub fn with_root(mut self, is_root: bool) -> Self {
        self.is_root = is_root;
        self
    }

    /// Whether this node's field shows a sub-total.
    pub fn shows_sub_total(&self) -> bool {
        self.field.sub_total.visible
    }
}
