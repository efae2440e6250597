//! FILENAME: core/pivot-layout/src/source.rs
//! Aggregated values for data cells.
//!
//! Aggregation itself happens elsewhere; layout only asks for the value at
//! a (data field, row dimension, column dimension) triple.

use rustc_hash::FxHashMap;

use crate::cell::CellValue;
use crate::dimension::{Dimension, DimensionId};

/// Supplier of aggregated values.
pub trait DataSource {
    /// Value for `field` (or the only field when `None`) at the
    /// intersection of `row` and `column`. Returns a sentinel such as
    /// `CellValue::Empty` when there is no data.
    fn get_data(&self, field: Option<&str>, row: &Dimension, column: &Dimension) -> CellValue;
}

impl<F> DataSource for F
where
    F: Fn(Option<&str>, &Dimension, &Dimension) -> CellValue,
{
    fn get_data(&self, field: Option<&str>, row: &Dimension, column: &Dimension) -> CellValue {
        self(field, row, column)
    }
}

type AggregateKey = (Option<String>, DimensionId, DimensionId);

/// Precomputed aggregates keyed by field and dimension ids.
#[derive(Debug, Clone, Default)]
pub struct AggregateTable {
    values: FxHashMap<AggregateKey, CellValue>,
}

impl AggregateTable {
    pub fn new() -> Self {
        AggregateTable {
            values: FxHashMap::default(),
        }
    }

    pub fn insert(
        &mut self,
        field: Option<&str>,
        row: DimensionId,
        column: DimensionId,
        value: impl Into<CellValue>,
    ) {
        self.values
            .insert((field.map(str::to_string), row, column), value.into());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl DataSource for AggregateTable {
    fn get_data(&self, field: Option<&str>, row: &Dimension, column: &Dimension) -> CellValue {
        let key = (field.map(str::to_string), row.id, column.id);
        self.values.get(&key).cloned().unwrap_or(CellValue::Empty)
    }
}
