//! FILENAME: core/pivot-layout/tests/common/mod.rs
//! Fixtures for pivot layout integration tests.

#![allow(dead_code)]

use pivot_layout::{
    AggregateTable, Axis, DataHeader, DataHeadersLocation, Dimension, DimensionField,
    DimensionId, FieldDescriptor, GridConfig, HeaderId, HeaderKind, HeaderTree,
};

/// Region > State on rows, Year on columns, two data fields shown on the
/// column axis.
///
/// ```text
///             | 2023        | 2024        | Grand Total |
///             | sales | qty | sales | qty | sales | qty |
/// West   CA   |
///        OR   |
/// Total West  |
/// East   NY   |
/// Total East  |
/// Grand Total |
/// ```
pub struct SalesGrid {
    pub tree: HeaderTree,
    pub config: GridConfig,
    pub table: AggregateTable,
    pub rows: RowHeaders,
    pub columns: ColumnHeaders,
    pub data_headers: Vec<DataHeader>,
}

pub struct RowHeaders {
    pub total_west: HeaderId,
    pub west: HeaderId,
    pub ca: HeaderId,
    pub or: HeaderId,
    pub total_east: HeaderId,
    pub east: HeaderId,
    pub ny: HeaderId,
    pub grand: HeaderId,
}

pub struct ColumnHeaders {
    pub y2023: HeaderId,
    pub y2024: HeaderId,
    pub grand: HeaderId,
}

pub const ROW_ROOT: DimensionId = DimensionId(0);
pub const WEST: DimensionId = DimensionId(1);
pub const CA: DimensionId = DimensionId(2);
pub const OR: DimensionId = DimensionId(3);
pub const EAST: DimensionId = DimensionId(4);
pub const NY: DimensionId = DimensionId(5);
pub const COL_ROOT: DimensionId = DimensionId(100);
pub const Y2023: DimensionId = DimensionId(101);
pub const Y2024: DimensionId = DimensionId(102);

impl SalesGrid {
    pub fn new() -> Self {
        Self::with_region_collapsed(false)
    }

    pub fn with_region_collapsed(collapsed: bool) -> Self {
        let config = GridConfig::new(
            vec![FieldDescriptor::new("sales"), FieldDescriptor::new("qty")],
            DataHeadersLocation::Columns,
        );
        // Only the axis hosting data headers multiplies its leaves.
        let row_fields = 1;
        let col_fields = config.data_fields_count();

        let region = DimensionField::new("Region").with_sub_total(true, collapsed);
        let state = DimensionField::new("State");
        let year = DimensionField::new("Year");

        let mut tree = HeaderTree::new();

        let west_dim = Dimension::new(WEST, "West", 2, region.clone());
        let total_west = tree
            .add_header(
                Axis::Rows,
                Some(HeaderKind::SubTotal),
                west_dim.clone(),
                None,
                row_fields,
                None,
            )
            .unwrap();
        let west = tree
            .add_header(Axis::Rows, None, west_dim, None, row_fields, Some(total_west))
            .unwrap();
        let ca = tree
            .add_header(
                Axis::Rows,
                None,
                Dimension::new(CA, "CA", 1, state.clone()),
                Some(west),
                row_fields,
                None,
            )
            .unwrap();
        let or = tree
            .add_header(
                Axis::Rows,
                None,
                Dimension::new(OR, "OR", 1, state.clone()),
                Some(west),
                row_fields,
                None,
            )
            .unwrap();

        let east_dim = Dimension::new(EAST, "East", 2, region);
        let total_east = tree
            .add_header(
                Axis::Rows,
                Some(HeaderKind::SubTotal),
                east_dim.clone(),
                None,
                row_fields,
                None,
            )
            .unwrap();
        let east = tree
            .add_header(Axis::Rows, None, east_dim, None, row_fields, Some(total_east))
            .unwrap();
        let ny = tree
            .add_header(
                Axis::Rows,
                None,
                Dimension::new(NY, "NY", 1, state),
                Some(east),
                row_fields,
                None,
            )
            .unwrap();

        let grand = tree
            .add_header(
                Axis::Rows,
                Some(HeaderKind::GrandTotal),
                Dimension::root(ROW_ROOT, 3),
                None,
                row_fields,
                None,
            )
            .unwrap();

        let y2023 = tree
            .add_header(
                Axis::Columns,
                None,
                Dimension::new(Y2023, "2023", 1, year.clone()),
                None,
                col_fields,
                None,
            )
            .unwrap();
        let y2024 = tree
            .add_header(
                Axis::Columns,
                None,
                Dimension::new(Y2024, "2024", 1, year),
                None,
                col_fields,
                None,
            )
            .unwrap();
        let col_grand = tree
            .add_header(
                Axis::Columns,
                Some(HeaderKind::GrandTotal),
                Dimension::root(COL_ROOT, 2),
                None,
                col_fields,
                None,
            )
            .unwrap();

        let mut data_headers = Vec::new();
        for column in [y2023, y2024, col_grand] {
            for field in &config.data_fields {
                data_headers.push(DataHeader::new(&tree, field.clone(), column).unwrap());
            }
        }

        SalesGrid {
            tree,
            config,
            table: sales_table(),
            rows: RowHeaders { total_west, west, ca, or, total_east, east, ny, grand },
            columns: ColumnHeaders { y2023, y2024, grand: col_grand },
            data_headers,
        }
    }

    /// Row headers that carry a line of data cells.
    pub fn data_rows(&self) -> Vec<HeaderId> {
        self.tree
            .visible_headers(Axis::Rows)
            .into_iter()
            .filter(|&id| {
                let node = self.tree.node(id);
                node.dim.is_leaf || node.kind().is_total()
            })
            .collect()
    }
}

fn sales_table() -> AggregateTable {
    let mut table = AggregateTable::new();
    let rows = [
        (CA, 10.0, 1.0),
        (OR, 20.0, 2.0),
        (WEST, 30.0, 3.0),
        (NY, 40.0, 4.0),
        (EAST, 40.0, 4.0),
        (ROW_ROOT, 70.0, 7.0),
    ];
    for (row, sales, qty) in rows {
        for (column, factor) in [(Y2023, 1.0), (Y2024, 2.0), (COL_ROOT, 3.0)] {
            table.insert(Some("sales"), row, column, sales * factor);
            table.insert(Some("qty"), row, column, qty * factor);
        }
    }
    table
}
