//! FILENAME: core/pivot-layout/src/cells.rs
//! Non-tree cells: data field headers, data values, field buttons, fillers.

use crate::cell::{Cell, CellValue, FieldDescriptor, Span, Template, Visibility};
use crate::config::{DataHeadersLocation, GridConfig};
use crate::error::{LayoutError, Result};
use crate::header::{HeaderId, HeaderNode, HeaderTree};
use crate::header_type::{class_body_for_cell, class_body_for_header, Axis, HeaderKind};
use crate::source::DataSource;

const LOG_TARGET: &str = "LAYOUT";

// ============================================================================
// DATA HEADER
// ============================================================================

/// Label of one data field under a header, used when the grid shows more
/// than one data field. It is not one of the parent's children.
#[derive(Debug, Clone, PartialEq)]
pub struct DataHeader {
    pub cell: Cell,
    pub parent: HeaderId,
}

impl DataHeader {
    /// Visibility follows `parent`; the class is the parent role's header class.
    pub fn new(tree: &HeaderTree, field: FieldDescriptor, parent: HeaderId) -> Result<Self> {
        let parent_node = tree.get(parent).ok_or(LayoutError::UnknownHeader(parent))?;
        let cell = Cell::new(
            None,
            HeaderKind::DataHeader,
            Template::DataHeader,
            CellValue::Field(field),
            class_body_for_header(parent_node.kind(), None),
        )
        .with_visibility(Visibility::Header(parent));

        Ok(DataHeader { cell, parent })
    }

    pub fn field(&self) -> Option<&FieldDescriptor> {
        self.cell.value.as_field()
    }
}

// ============================================================================
// DATA CELL
// ============================================================================

/// One side (row or column) of a data cell.
#[derive(Debug, Clone, Copy)]
pub enum AxisCell<'a> {
    Header(HeaderId),
    DataHeader(&'a DataHeader),
}

/// The header node a side stands for, plus the value the side displays.
struct ResolvedSide<'a> {
    node: &'a HeaderNode,
    value: &'a CellValue,
}

fn resolve_side<'a>(
    tree: &'a HeaderTree,
    side: AxisCell<'a>,
    expected: Axis,
) -> Result<ResolvedSide<'a>> {
    let (node, value) = match side {
        AxisCell::Header(id) => {
            let node = tree.get(id).ok_or(LayoutError::UnknownHeader(id))?;
            (node, &node.cell.value)
        }
        AxisCell::DataHeader(data_header) => {
            let node = tree
                .get(data_header.parent)
                .ok_or(LayoutError::UnknownHeader(data_header.parent))?;
            (node, &data_header.cell.value)
        }
    };

    if node.axis() != expected {
        return Err(LayoutError::WrongAxis {
            expected,
            found: node.axis(),
        });
    }
    Ok(ResolvedSide { node, value })
}

/// Aggregated value at the intersection of a row and a column header.
#[derive(Debug, Clone, PartialEq)]
pub struct DataCell {
    pub cell: Cell,
    /// The data field the value was looked up for.
    pub data_field: Option<FieldDescriptor>,
    pub row_kind: HeaderKind,
    pub column_kind: HeaderKind,
}

impl DataCell {
    /// Builds the data cell for `row` x `column`.
    ///
    /// Data header sides stand for their parent header. With several data
    /// fields the field is taken from the side that carries the data
    /// headers; otherwise the single configured field is used.
    pub fn new<S>(
        tree: &HeaderTree,
        config: &GridConfig,
        source: &S,
        visibility: Visibility,
        row: AxisCell<'_>,
        column: AxisCell<'_>,
    ) -> Result<Self>
    where
        S: DataSource + ?Sized,
    {
        let row = resolve_side(tree, row, Axis::Rows)?;
        let column = resolve_side(tree, column, Axis::Columns)?;

        let data_field = if config.data_fields_count() > 1 {
            let side_value = match config.data_headers_location {
                DataHeadersLocation::Rows => row.value,
                DataHeadersLocation::Columns => column.value,
            };
            let field = side_value.as_field().cloned();
            if field.is_none() {
                log::warn!(
                    target: LOG_TARGET,
                    "data cell side on {:?} carries no data field ({:?})",
                    config.data_headers_location,
                    side_value
                );
            }
            field
        } else {
            config.single_data_field().cloned()
        };

        let value = source.get_data(
            data_field.as_ref().map(|f| f.name.as_str()),
            &row.node.dim,
            &column.node.dim,
        );

        let row_kind = row.node.kind();
        let column_kind = column.node.kind();
        let class = format!("cell {}", class_body_for_cell(row_kind, column_kind));

        let cell = Cell::new(None, HeaderKind::DataValue, Template::DataValue, value, class)
            .with_visibility(visibility);

        Ok(DataCell {
            cell,
            data_field,
            row_kind,
            column_kind,
        })
    }
}

// ============================================================================
// BUTTON / EMPTY
// ============================================================================

/// Field selector button.
pub fn button_cell(field: FieldDescriptor) -> Cell {
    Cell::new(
        None,
        HeaderKind::FieldButton,
        Template::FieldButton,
        CellValue::Field(field),
        class_body_for_header(HeaderKind::FieldButton, None),
    )
}

/// Filler covering a `hspan` x `vspan` gap in the header area.
pub fn empty_cell(hspan: u32, vspan: u32) -> Cell {
    Cell::new(
        None,
        HeaderKind::Empty,
        Template::Empty,
        CellValue::Empty,
        class_body_for_header(HeaderKind::Empty, None),
    )
    .with_hspan(Span::Fixed(hspan))
    .with_vspan(Span::Fixed(vspan))
}
