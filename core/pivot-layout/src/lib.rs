//! FILENAME: core/pivot-layout/src/lib.rs
//! Pivot grid layout model.
//!
//! Computes the header/cell tree behind a pivot grid's visual layout:
//! nested row and column headers, synthetic sub-total and grand-total
//! headers, expand/collapse state, spans in logical grid cells, and the
//! aggregated value shown in each data cell.
//!
//! Layers:
//! - `header_type`: Cell roles and presentation classes
//! - `dimension`: Dimension nodes supplied by the aggregation engine
//! - `cell`: The shared cell shape and its renderable snapshot
//! - `header`: Header tree arena (spans, visibility, expand/collapse)
//! - `cells`: Data headers, data cells, buttons, fillers
//! - `source`: Aggregated value lookup
//! - `config`: Grid configuration

pub mod cell;
pub mod cells;
pub mod config;
pub mod dimension;
pub mod error;
pub mod header;
pub mod header_type;
pub mod source;

pub use cell::{Cell, CellValue, CellView, FieldDescriptor, Span, Template, Visibility};
pub use cells::{button_cell, empty_cell, AxisCell, DataCell, DataHeader};
pub use config::{DataHeadersLocation, GridConfig};
pub use dimension::{Dimension, DimensionField, DimensionId, SubTotalConfig};
pub use error::{LayoutError, Result};
pub use header::{HeaderId, HeaderNode, HeaderTree, GRAND_TOTAL_LABEL, SUB_TOTAL_PREFIX};
pub use header_type::{class_body_for_cell, class_body_for_header, Axis, HeaderKind};
pub use source::{AggregateTable, DataSource};
