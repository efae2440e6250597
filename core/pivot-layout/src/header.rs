//! FILENAME: core/pivot-layout/src/header.rs
//! Header Tree - row and column header nodes of a pivot grid.
//!
//! Nodes live in an arena (`HeaderTree`) and refer to each other by
//! `HeaderId`. Parent and sub-total links are plain ids, so the tree holds
//! no reference cycles.
//!
//! Derived state:
//! - Spans: one direction is fixed at construction, the other is computed
//!   from the subtree (`calc_span`).
//! - Visibility: derived from the `expanded` flags of sub-total headers up
//!   the ancestor chain.
//!
//! Neither is cached. Every read walks the current tree, so a read that
//! follows `expand`/`collapse` observes it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cell::{Cell, CellValue, CellView, Span, Template, Visibility};
use crate::dimension::Dimension;
use crate::error::{LayoutError, Result};
use crate::header_type::{class_body_for_header, Axis, HeaderKind};

const LOG_TARGET: &str = "LAYOUT";

/// Label of the grand-total header.
pub const GRAND_TOTAL_LABEL: &str = "Grand Total";

/// Prefix of sub-total header labels.
pub const SUB_TOTAL_PREFIX: &str = "Total ";

/// Index of a node within its `HeaderTree`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HeaderId(pub u32);

impl HeaderId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

// ============================================================================
// HEADER NODE
// ============================================================================

/// A row or column header.
#[derive(Debug, Clone)]
pub struct HeaderNode {
    /// Rendering data. `hspan`/`vspan`/`visibility` point back at this node
    /// where they are derived.
    pub cell: Cell,

    /// The dimension value this header stands for.
    pub dim: Dimension,

    axis: Axis,

    parent: Option<HeaderId>,

    /// Child headers in construction order.
    children: SmallVec<[HeaderId; 4]>,

    /// Sub-total header governing this node's collapse state.
    subtotal_header: Option<HeaderId>,

    expanded: bool,

    data_fields_count: u32,
}

impl HeaderNode {
    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn kind(&self) -> HeaderKind {
        self.cell.kind
    }

    pub fn value(&self) -> &CellValue {
        &self.cell.value
    }

    /// Display label (dimension value, or the synthetic total label).
    pub fn label(&self) -> &str {
        self.cell.value.as_text().unwrap_or("")
    }

    pub fn parent(&self) -> Option<HeaderId> {
        self.parent
    }

    pub fn children(&self) -> &[HeaderId] {
        &self.children
    }

    pub fn subtotal_header(&self) -> Option<HeaderId> {
        self.subtotal_header
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn data_fields_count(&self) -> u32 {
        self.data_fields_count
    }
}

// ============================================================================
// HEADER TREE
// ============================================================================

/// Arena holding the header nodes of both axes of one grid.
///
/// The tree is built once per data/field configuration and discarded as a
/// whole; nodes are never removed individually.
#[derive(Debug, Clone, Default)]
pub struct HeaderTree {
    nodes: Vec<HeaderNode>,
}

impl HeaderTree {
    pub fn new() -> Self {
        HeaderTree { nodes: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: HeaderId) -> Option<&HeaderNode> {
        self.nodes.get(id.index())
    }

    /// Returns the node for `id`.
    ///
    /// # Panics
    /// Panics if `id` was not issued by this tree.
    pub fn node(&self, id: HeaderId) -> &HeaderNode {
        &self.nodes[id.index()]
    }

    fn node_mut(&mut self, id: HeaderId) -> &mut HeaderNode {
        &mut self.nodes[id.index()]
    }

    /// Adds a header node and registers it among its parent's children.
    ///
    /// `kind` defaults to `Inner` for depth-1 dimensions and `Wrapper`
    /// otherwise. Spans and labels are chosen by role:
    ///
    /// | role        | label            | rows (h, v)          | columns (h, v)       |
    /// |-------------|------------------|----------------------|----------------------|
    /// | GrandTotal  | "Grand Total"    | max(depth-1,1), n    | n, max(depth-1,1)    |
    /// | SubTotal    | "Total " + value | depth, n             | n, depth             |
    /// | other       | value            | 1, computed          | computed, 1          |
    ///
    /// where `n` is `data_fields_count`.
    pub fn add_header(
        &mut self,
        axis: Axis,
        kind: Option<HeaderKind>,
        dim: Dimension,
        parent: Option<HeaderId>,
        data_fields_count: u32,
        subtotal_header: Option<HeaderId>,
    ) -> Result<HeaderId> {
        if data_fields_count == 0 {
            return Err(LayoutError::NoDataFields);
        }
        if dim.depth == 0 {
            return Err(LayoutError::InvalidDepth(dim.value));
        }

        let kind = kind.unwrap_or(if dim.depth == 1 {
            HeaderKind::Inner
        } else {
            HeaderKind::Wrapper
        });
        if !kind.is_header_role() {
            return Err(LayoutError::InvalidHeaderKind(kind));
        }

        if let Some(parent_id) = parent {
            let parent_node = self.get(parent_id).ok_or(LayoutError::UnknownHeader(parent_id))?;
            if parent_node.axis() != axis {
                return Err(LayoutError::AxisMismatch {
                    parent: parent_node.axis(),
                    child: axis,
                });
            }
        }

        if let Some(subtotal_id) = subtotal_header {
            let subtotal = self.get(subtotal_id).ok_or(LayoutError::UnknownHeader(subtotal_id))?;
            if subtotal.kind() != HeaderKind::SubTotal || subtotal.axis() != axis {
                return Err(LayoutError::NotASubTotal(subtotal_id));
            }
        } else if kind != HeaderKind::SubTotal
            && !dim.is_root
            && !dim.is_leaf
            && dim.shows_sub_total()
        {
            return Err(LayoutError::MissingSubTotalHeader(dim.value));
        }

        let id = HeaderId(self.nodes.len() as u32);
        let is_rows = axis.is_rows();
        let n = data_fields_count;

        let (label, hspan, vspan) = match kind {
            HeaderKind::GrandTotal => {
                let outer = dim.depth.saturating_sub(1).max(1);
                let (h, v) = if is_rows { (outer, n) } else { (n, outer) };
                (GRAND_TOTAL_LABEL.to_string(), Span::Fixed(h), Span::Fixed(v))
            }
            HeaderKind::SubTotal => {
                let (h, v) = if is_rows { (dim.depth, n) } else { (n, dim.depth) };
                (format!("{}{}", SUB_TOTAL_PREFIX, dim.value), Span::Fixed(h), Span::Fixed(v))
            }
            _ => {
                let (h, v) = if is_rows {
                    (Span::Fixed(1), Span::Computed(id))
                } else {
                    (Span::Computed(id), Span::Fixed(1))
                };
                (dim.value.clone(), h, v)
            }
        };

        let expanded = kind != HeaderKind::SubTotal || !dim.field.sub_total.collapsed;

        let cell = Cell::new(
            Some(axis),
            kind,
            Template::for_axis(axis),
            CellValue::Text(label),
            class_body_for_header(kind, Some(axis)),
        )
        .with_hspan(hspan)
        .with_vspan(vspan)
        .with_visibility(Visibility::Header(id));

        log::debug!(
            target: LOG_TARGET,
            "add_header {:?} {:?} '{}' parent={:?} subtotal={:?}",
            axis, kind, dim.value, parent, subtotal_header
        );

        self.nodes.push(HeaderNode {
            cell,
            dim,
            axis,
            parent,
            children: SmallVec::new(),
            subtotal_header,
            expanded,
            data_fields_count,
        });

        if let Some(parent_id) = parent {
            self.node_mut(parent_id).children.push(id);
        }

        Ok(id)
    }

    // ========================================================================
    // EXPAND / COLLAPSE
    // ========================================================================

    /// Marks the node expanded.
    ///
    /// # Panics
    /// Panics if `id` was not issued by this tree.
    pub fn expand(&mut self, id: HeaderId) {
        log::debug!(target: LOG_TARGET, "expand {:?}", id);
        self.node_mut(id).expanded = true;
    }

    /// Marks the node collapsed.
    ///
    /// # Panics
    /// Panics if `id` was not issued by this tree.
    pub fn collapse(&mut self, id: HeaderId) {
        log::debug!(target: LOG_TARGET, "collapse {:?}", id);
        self.node_mut(id).expanded = false;
    }

    /// Flips the expanded flag. Returns the new state.
    ///
    /// # Panics
    /// Panics if `id` was not issued by this tree.
    pub fn toggle(&mut self, id: HeaderId) -> bool {
        let node = self.node_mut(id);
        node.expanded = !node.expanded;
        let expanded = node.expanded;
        log::debug!(target: LOG_TARGET, "toggle {:?} -> expanded={}", id, expanded);
        expanded
    }

    // ========================================================================
    // SPANS
    // ========================================================================

    /// Horizontal extent of the node in logical cells.
    ///
    /// # Panics
    /// Panics if `id` was not issued by this tree.
    pub fn hspan(&self, id: HeaderId) -> u32 {
        self.resolve_span(self.node(id).cell.hspan)
    }

    /// Vertical extent of the node in logical cells.
    ///
    /// # Panics
    /// Panics if `id` was not issued by this tree.
    pub fn vspan(&self, id: HeaderId) -> u32 {
        self.resolve_span(self.node(id).cell.vspan)
    }

    pub fn cell_hspan(&self, cell: &Cell) -> u32 {
        self.resolve_span(cell.hspan)
    }

    pub fn cell_vspan(&self, cell: &Cell) -> u32 {
        self.resolve_span(cell.vspan)
    }

    fn resolve_span(&self, span: Span) -> u32 {
        match span {
            Span::Fixed(n) => n,
            Span::Computed(id) => self.calc_span(id),
        }
    }

    /// Extent of a node along its computed direction (vertical for rows,
    /// horizontal for columns).
    fn calc_span(&self, id: HeaderId) -> u32 {
        if !self.is_visible(id) {
            return 0;
        }

        let node = self.node(id);
        if node.dim.is_leaf {
            return node.data_fields_count;
        }

        let is_rows = node.axis().is_rows();
        let mut total = 0;
        let mut add_one = false;

        for (i, &child_id) in node.children.iter().enumerate() {
            let child = self.node(child_id);
            if child.dim.is_leaf {
                total += node.data_fields_count;
                continue;
            }

            let sub_span = if is_rows {
                self.vspan(child_id)
            } else {
                self.hspan(child_id)
            };
            total += sub_span;

            // A degenerate first slot still reserves one line.
            if i == 0
                && (sub_span == 0
                    || (is_rows && child.kind() == HeaderKind::SubTotal && !child.expanded))
            {
                add_one = true;
            }
        }

        total + u32::from(add_one)
    }

    // ========================================================================
    // VISIBILITY
    // ========================================================================

    /// Whether the node is rendered under the current expand/collapse state.
    ///
    /// # Panics
    /// Panics if `id` was not issued by this tree.
    pub fn is_visible(&self, id: HeaderId) -> bool {
        let node = self.node(id);

        if node.kind() == HeaderKind::SubTotal {
            // Hidden only when an enclosing group is collapsed.
            let mut current = node.parent;
            while let Some(parent_id) = current {
                let parent = self.node(parent_id);
                if let Some(subtotal_id) = parent.subtotal_header {
                    if !self.node(subtotal_id).expanded {
                        return false;
                    }
                }
                current = parent.parent;
            }
            return true;
        }

        let own_expanded = node.dim.is_root
            || node.dim.is_leaf
            || !node.dim.shows_sub_total()
            || node
                .subtotal_header
                .map_or(true, |subtotal_id| self.node(subtotal_id).expanded);
        if !own_expanded {
            return false;
        }

        // Skip ancestors that either show no sub-total or whose sub-total is
        // expanded; stop at the nearest collapsed group.
        let mut current = node.parent;
        while let Some(parent_id) = current {
            let parent = self.node(parent_id);
            let passes = !parent.dim.shows_sub_total()
                || parent
                    .subtotal_header
                    .map_or(false, |subtotal_id| self.node(subtotal_id).expanded);
            if !passes {
                break;
            }
            current = parent.parent;
        }

        match current.and_then(|parent_id| self.node(parent_id).subtotal_header) {
            Some(subtotal_id) => self.node(subtotal_id).expanded,
            None => own_expanded,
        }
    }

    pub fn cell_visible(&self, cell: &Cell) -> bool {
        match cell.visibility {
            Visibility::Always => true,
            Visibility::Fixed(visible) => visible,
            Visibility::Header(id) => self.is_visible(id),
            Visibility::Both(row, column) => self.is_visible(row) && self.is_visible(column),
        }
    }

    /// Resolves a cell's derived state against the current tree.
    pub fn view(&self, cell: &Cell) -> CellView {
        CellView {
            axis: cell.axis,
            kind: cell.kind,
            template: cell.template,
            value: cell.value.clone(),
            class: cell.class.clone(),
            hspan: self.cell_hspan(cell),
            vspan: self.cell_vspan(cell),
            visible: self.cell_visible(cell),
        }
    }

    // ========================================================================
    // TRAVERSAL
    // ========================================================================

    /// # Panics
    /// Panics if `id` was not issued by this tree. The same holds for
    /// `children`, `subtotal_header` and `descendants`.
    pub fn parent(&self, id: HeaderId) -> Option<HeaderId> {
        self.node(id).parent
    }

    pub fn children(&self, id: HeaderId) -> &[HeaderId] {
        &self.node(id).children
    }

    pub fn subtotal_header(&self, id: HeaderId) -> Option<HeaderId> {
        self.node(id).subtotal_header
    }

    /// Top-level headers of an axis, in construction order.
    pub fn roots(&self, axis: Axis) -> impl Iterator<Item = HeaderId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(move |(_, n)| n.parent.is_none() && n.axis() == axis)
            .map(|(i, _)| HeaderId(i as u32))
    }

    /// All nodes below `id`, pre-order.
    pub fn descendants(&self, id: HeaderId) -> Vec<HeaderId> {
        let mut out = Vec::new();
        let mut stack: Vec<HeaderId> = self.children(id).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev().copied());
        }
        out
    }

    /// Visible headers of an axis, pre-order over all roots.
    pub fn visible_headers(&self, axis: Axis) -> Vec<HeaderId> {
        let mut out = Vec::new();
        for root in self.roots(axis) {
            if self.is_visible(root) {
                out.push(root);
            }
            out.extend(self.descendants(root).into_iter().filter(|&id| self.is_visible(id)));
        }
        out
    }
}
