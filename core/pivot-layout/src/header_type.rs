//! FILENAME: core/pivot-layout/src/header_type.rs
//! Cell roles and the presentation classes derived from them.
//!
//! Classification is pure: given a role (and for data cells, the pair of
//! row/column roles) it returns the class tag the renderer attaches.

use serde::{Deserialize, Serialize};

// ============================================================================
// AXIS
// ============================================================================

/// The two independent header hierarchies of a pivot grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Rows,
    Columns,
}

impl Axis {
    pub fn is_rows(self) -> bool {
        self == Axis::Rows
    }
}

// ============================================================================
// HEADER KIND
// ============================================================================

/// The role a cell plays in the grid layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeaderKind {
    /// Layout filler.
    Empty,
    /// Label of a data field (only when several data fields exist).
    DataHeader,
    /// Aggregated value at a row/column intersection.
    DataValue,
    /// Field selector button.
    FieldButton,
    /// Header of an innermost dimension value.
    Inner,
    /// Header of a dimension value that has nested values below it.
    Wrapper,
    /// Synthetic sub-total header for a group.
    SubTotal,
    /// Synthetic grand-total header for a whole axis.
    GrandTotal,
}

impl HeaderKind {
    /// Whether this kind may be used for a node of a header tree.
    pub fn is_header_role(self) -> bool {
        matches!(
            self,
            HeaderKind::Inner | HeaderKind::Wrapper | HeaderKind::SubTotal | HeaderKind::GrandTotal
        )
    }

    pub fn is_total(self) -> bool {
        matches!(self, HeaderKind::SubTotal | HeaderKind::GrandTotal)
    }
}

// ============================================================================
// CLASSIFIERS
// ============================================================================

/// Presentation class for a header-like cell.
///
/// The axis only matters for `Wrapper`, and both axes currently map to the
/// same class.
pub fn class_body_for_header(kind: HeaderKind, axis: Option<Axis>) -> &'static str {
    match kind {
        HeaderKind::Empty | HeaderKind::FieldButton => "empty",
        HeaderKind::Inner => "header",
        HeaderKind::Wrapper => match axis {
            Some(Axis::Rows) => "header",
            Some(Axis::Columns) => "header",
            None => "",
        },
        HeaderKind::SubTotal => "header header-sub-total",
        HeaderKind::GrandTotal => "header header-grand-total",
        HeaderKind::DataHeader | HeaderKind::DataValue => "",
    }
}

/// Presentation class for a data cell at the intersection of a row header
/// of kind `row` and a column header of kind `col`.
///
/// The row role wins, except that a grand-total column always yields the
/// grand-total class.
pub fn class_body_for_cell(row: HeaderKind, col: HeaderKind) -> &'static str {
    match row {
        HeaderKind::GrandTotal => "cell-grand-total",
        HeaderKind::SubTotal => {
            if col == HeaderKind::GrandTotal {
                "cell-grand-total"
            } else {
                "cell-sub-total"
            }
        }
        _ => match col {
            HeaderKind::GrandTotal => "cell-grand-total",
            HeaderKind::SubTotal => "cell-sub-total",
            _ => "cell",
        },
    }
}
