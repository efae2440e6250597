//! FILENAME: core/pivot-layout/src/error.rs

use thiserror::Error;

use crate::header::HeaderId;
use crate::header_type::{Axis, HeaderKind};

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Unknown header node: {0:?}")]
    UnknownHeader(HeaderId),

    #[error("Header on {child:?} axis cannot attach to a {parent:?} parent")]
    AxisMismatch { parent: Axis, child: Axis },

    #[error("{0:?} is not a header role")]
    InvalidHeaderKind(HeaderKind),

    #[error("Sub-total reference {0:?} does not point at a sub-total header")]
    NotASubTotal(HeaderId),

    #[error("Header for '{0}' shows sub-totals but has no sub-total header")]
    MissingSubTotalHeader(String),

    #[error("Data field count must be at least 1")]
    NoDataFields,

    #[error("Dimension '{0}' has depth 0")]
    InvalidDepth(String),

    #[error("Expected a {expected:?} header, found one on {found:?}")]
    WrongAxis { expected: Axis, found: Axis },

    #[error("Invalid grid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
