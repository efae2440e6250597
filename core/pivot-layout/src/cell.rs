//! FILENAME: core/pivot-layout/src/cell.rs
//! The shape shared by every cell of the pivot grid layout.
//!
//! A `Cell` is plain data. Its spans and visibility are described by
//! `Span` and `Visibility`, which either hold a constant or point at a
//! header node whose tree state decides the answer. They are resolved
//! against the `HeaderTree` on every read, so expand/collapse toggles are
//! reflected immediately.

use serde::{Deserialize, Serialize};

use crate::header::HeaderId;
use crate::header_type::{Axis, HeaderKind};

// ============================================================================
// VALUES
// ============================================================================

/// Descriptor of a configured field (data field or field button).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(default)]
    pub caption: Option<String>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        FieldDescriptor {
            name: name.into(),
            caption: None,
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Caption if set, otherwise the field name.
    pub fn display_name(&self) -> &str {
        self.caption.as_deref().unwrap_or(&self.name)
    }
}

/// Display value of a cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Empty,
    Number(f64),
    Text(String),
    Boolean(bool),
    Error(String),
    Field(FieldDescriptor),
}

impl CellValue {
    pub fn text(s: impl Into<String>) -> Self {
        CellValue::Text(s.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_field(&self) -> Option<&FieldDescriptor> {
        match self {
            CellValue::Field(f) => Some(f),
            _ => None,
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

// ============================================================================
// TEMPLATE
// ============================================================================

/// Rendering fragment selector. Opaque to layout, passed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Template {
    #[serde(rename = "cell-template-row-header")]
    RowHeader,
    #[serde(rename = "cell-template-column-header")]
    ColumnHeader,
    #[serde(rename = "cell-template-dataheader")]
    DataHeader,
    #[serde(rename = "cell-template-datavalue")]
    DataValue,
    #[serde(rename = "cell-template-fieldbutton")]
    FieldButton,
    #[serde(rename = "cell-template-empty")]
    Empty,
}

impl Template {
    pub fn as_str(self) -> &'static str {
        match self {
            Template::RowHeader => "cell-template-row-header",
            Template::ColumnHeader => "cell-template-column-header",
            Template::DataHeader => "cell-template-dataheader",
            Template::DataValue => "cell-template-datavalue",
            Template::FieldButton => "cell-template-fieldbutton",
            Template::Empty => "cell-template-empty",
        }
    }

    /// Header template for nodes of the given axis.
    pub fn for_axis(axis: Axis) -> Self {
        match axis {
            Axis::Rows => Template::RowHeader,
            Axis::Columns => Template::ColumnHeader,
        }
    }
}

// ============================================================================
// DERIVED STATE
// ============================================================================

/// Extent of a cell along one direction, in logical grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Span {
    Fixed(u32),
    /// Computed from the subtree of the given header node.
    Computed(HeaderId),
}

/// Whether a cell is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    Always,
    Fixed(bool),
    /// Follows the visibility of the given header node.
    Header(HeaderId),
    /// Visible only while both header nodes are, typically the row and
    /// column headers a data cell sits under.
    Both(HeaderId, HeaderId),
}

// ============================================================================
// CELL
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// Owning axis. `None` for cells that belong to neither header tree.
    pub axis: Option<Axis>,
    pub kind: HeaderKind,
    pub template: Template,
    pub value: CellValue,
    /// Presentation class tag.
    pub class: String,
    pub hspan: Span,
    pub vspan: Span,
    pub visibility: Visibility,
}

impl Cell {
    pub fn new(
        axis: Option<Axis>,
        kind: HeaderKind,
        template: Template,
        value: CellValue,
        class: impl Into<String>,
    ) -> Self {
        Cell {
            axis,
            kind,
            template,
            value,
            class: class.into(),
            hspan: Span::Fixed(1),
            vspan: Span::Fixed(1),
            visibility: Visibility::Always,
        }
    }

    pub fn with_hspan(mut self, span: Span) -> Self {
        self.hspan = span;
        self
    }

    pub fn with_vspan(mut self, span: Span) -> Self {
        self.vspan = span;
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }
}

/// Snapshot of a cell with its derived state resolved, for the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellView {
    pub axis: Option<Axis>,
    pub kind: HeaderKind,
    pub template: Template,
    pub value: CellValue,
    pub class: String,
    pub hspan: u32,
    pub vspan: u32,
    pub visible: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_defaults() {
        let cell = Cell::new(None, HeaderKind::Empty, Template::Empty, CellValue::Empty, "empty");
        assert_eq!(cell.hspan, Span::Fixed(1));
        assert_eq!(cell.vspan, Span::Fixed(1));
        assert_eq!(cell.visibility, Visibility::Always);
        assert_eq!(cell.class, "empty");
    }

    #[test]
    fn test_template_serializes_as_tag() {
        let json = serde_json::to_string(&Template::RowHeader).unwrap();
        assert_eq!(json, format!("\"{}\"", Template::RowHeader.as_str()));
        assert_eq!(Template::for_axis(Axis::Columns), Template::ColumnHeader);
    }

    #[test]
    fn test_field_display_name() {
        assert_eq!(FieldDescriptor::new("amount").display_name(), "amount");
        let field = FieldDescriptor::new("amount").with_caption("Sum of Amount");
        assert_eq!(field.display_name(), "Sum of Amount");
    }
}
