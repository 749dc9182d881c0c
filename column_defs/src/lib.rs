//! Column definition resolution for data grids.
//!
//! A grid is configured with a list of column definitions. Before the grid
//! can use them, every column needs a unique identifier and an effective
//! definition built from the grid's defaults, any column types it names and
//! its own properties. This crate implements those two rules:
//!
//! - [`resolve_column_ids`] assigns identifiers (`colId`, then `field`, then
//!   the column's position, with `_n` suffixes for uniqueness);
//! - [`merge_column_definition`] layers default, type and explicit
//!   properties, later layers winning.
//!
//! On top of them sit the column tree builder ([`build_columns`]), column
//! state save/restore ([`ColumnState`]), definition change reconciliation
//! ([`ColumnModel`]) and options file loading ([`load_grid_options`]).
//!
//! # Example
//!
//! ```rust
//! use column_defs::{ColumnDefinition, ColumnTypeRegistry, merge_column_definition, resolve_column_ids};
//! use serde_json::json;
//!
//! let defs: Vec<ColumnDefinition> = serde_json::from_value(json!([
//!     {"field": "athlete"},
//!     {"field": "age", "type": "numericColumn"}
//! ]))?;
//! assert_eq!(resolve_column_ids(&defs), vec!["athlete", "age"]);
//!
//! let defaults: ColumnDefinition = serde_json::from_value(json!({"width": 100}))?;
//! let types = ColumnTypeRegistry::with_provided();
//! let age = merge_column_definition(&defaults, &types, &defs[1]);
//! assert_eq!(age.get("cellClass"), Some(&json!("ag-right-aligned-cell")));
//! # Ok::<_, serde_json::Error>(())
//! ```

mod changes;
mod definition;
mod error;
mod file;
mod ids;
pub mod merge;
mod options;
mod registry;
mod result_ext;
mod state;
mod tree;

pub use changes::{ColumnChanges, ColumnModel, diff_column_ids};
pub use definition::{CHILDREN_KEY, ColumnDefinition, ColumnGroupDefinition, ColumnNode};
pub use error::{AggregatedErrors, ColumnError};
pub use file::{
    GridOptionOverrides, load_column_state, load_grid_options, load_grid_options_with,
    parse_column_state,
};
pub use ids::{ColumnIdResolver, resolve_column_ids, unique_id};
pub use merge::{explain_column_definition, merge_column_definition, merge_group_definition};
pub use options::GridColumnOptions;
pub use registry::{
    ColumnTypeRegistry, PROVIDED_COLUMN_TYPES, RIGHT_ALIGNED_CELL_CLASS,
    RIGHT_ALIGNED_HEADER_CLASS,
};
pub use result_ext::{ColumnResult, ColumnResultExt};
pub use state::{
    ColumnGroupState, ColumnState, DEFAULT_MIN_WIDTH, DEFAULT_WIDTH, Pinned, SortDirection,
    StateApplication,
};
pub use tree::{Column, ColumnGroup, ColumnRef, ColumnTree, build_columns};

pub use serde_json;
