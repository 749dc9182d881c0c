//! Resolved column trees.
//!
//! [`build_columns`] walks the definition tree once, resolving identifiers
//! and merging definitions for every node. Leaf positions and group
//! positions are counted depth-first across the whole tree, so the numeric
//! placeholder of a column without `colId` or `field` is its index among
//! all leaves, not among its siblings.

mod column;

use crate::ids::ColumnIdResolver;
use crate::merge::{merge_column_definition, merge_group_definition};
use crate::state::assign_flagged_indices;
use crate::{ColumnDefinition, ColumnGroupDefinition, ColumnNode, ColumnTypeRegistry, GridColumnOptions};

pub use column::{Column, ColumnGroup};

/// Reference to a child of a group, or to a root of the tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ColumnRef {
    /// A leaf column, by column id.
    Column(String),
    /// A group, by group id.
    Group(String),
}

/// The resolved columns and groups of one grid.
///
/// Columns are held in display order, which starts out as definition order
/// and changes when state is applied. Groups and roots keep definition
/// order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColumnTree {
    pub(crate) columns: Vec<Column>,
    pub(crate) groups: Vec<ColumnGroup>,
    pub(crate) roots: Vec<ColumnRef>,
}

impl ColumnTree {
    /// Leaf columns in display order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Groups in depth-first definition order.
    #[must_use]
    pub fn groups(&self) -> &[ColumnGroup] {
        &self.groups
    }

    /// Top-level entries in definition order.
    #[must_use]
    pub fn roots(&self) -> &[ColumnRef] {
        &self.roots
    }

    /// Find a column by id.
    #[must_use]
    pub fn column(&self, id: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.id() == id)
    }

    /// Find a column by id for mutation.
    pub fn column_mut(&mut self, id: &str) -> Option<&mut Column> {
        self.columns.iter_mut().find(|column| column.id() == id)
    }

    /// Find a group by id.
    #[must_use]
    pub fn group(&self, id: &str) -> Option<&ColumnGroup> {
        self.groups.iter().find(|group| group.id() == id)
    }

    /// Column ids in display order.
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        self.columns.iter().map(Column::id).collect()
    }

    /// Column ids in definition order, regardless of display order.
    #[must_use]
    pub fn definition_order(&self) -> Vec<&str> {
        let mut order = Vec::with_capacity(self.columns.len());
        self.collect_leaves(&self.roots, &mut order);
        order
    }

    fn collect_leaves<'a>(&'a self, refs: &'a [ColumnRef], order: &mut Vec<&'a str>) {
        for entry in refs {
            match entry {
                ColumnRef::Column(id) => order.push(id.as_str()),
                ColumnRef::Group(id) => {
                    if let Some(group) = self.group(id) {
                        self.collect_leaves(group.children(), order);
                    }
                }
            }
        }
    }

    /// Number of leaf columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the tree holds no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Move the columns named in `order` to the front, in that order.
    ///
    /// Columns not named keep their relative order after the named ones;
    /// names without a column are ignored.
    pub(crate) fn reorder(&mut self, order: &[&str]) {
        let mut remaining = std::mem::take(&mut self.columns);
        let mut ordered = Vec::with_capacity(remaining.len());
        for id in order {
            if let Some(index) = remaining.iter().position(|column| column.id() == *id) {
                ordered.push(remaining.remove(index));
            }
        }
        ordered.append(&mut remaining);
        self.columns = ordered;
    }
}

struct TreeBuilder<'a> {
    default_col_def: &'a ColumnDefinition,
    default_col_group_def: &'a ColumnGroupDefinition,
    types: ColumnTypeRegistry,
    column_ids: ColumnIdResolver,
    group_ids: ColumnIdResolver,
    columns: Vec<Column>,
    groups: Vec<ColumnGroup>,
}

impl TreeBuilder<'_> {
    fn visit(&mut self, node: &ColumnNode, parent: Option<&str>) -> ColumnRef {
        match node {
            ColumnNode::Column(definition) => {
                let id = self.column_ids.resolve(definition, self.columns.len());
                let effective =
                    merge_column_definition(self.default_col_def, &self.types, definition);
                self.columns.push(Column::new(
                    id.clone(),
                    effective,
                    parent.map(str::to_owned),
                ));
                ColumnRef::Column(id)
            }
            ColumnNode::Group {
                definition,
                children,
            } => {
                let slot = self.groups.len();
                let id = self.group_ids.resolve_group(definition, slot);
                let effective = merge_group_definition(self.default_col_group_def, definition);
                self.groups
                    .push(ColumnGroup::new(id.clone(), effective, parent.map(str::to_owned)));
                let refs: Vec<ColumnRef> = children
                    .iter()
                    .map(|child| self.visit(child, Some(&id)))
                    .collect();
                if let Some(group) = self.groups.get_mut(slot) {
                    group.children = refs;
                }
                ColumnRef::Group(id)
            }
        }
    }
}

/// Resolve and merge every node of `options.columnDefs`.
///
/// # Examples
///
/// ```
/// use column_defs::{GridColumnOptions, build_columns};
/// use serde_json::json;
///
/// let options: GridColumnOptions = serde_json::from_value(json!({
///     "defaultColDef": {"width": 120},
///     "columnDefs": [
///         {"field": "athlete"},
///         {"headerName": "Details", "children": [{"field": "age", "type": "numericColumn"}, {}]}
///     ]
/// }))?;
/// let tree = build_columns(&options);
/// assert_eq!(tree.ids(), vec!["athlete", "age", "2"]);
/// assert_eq!(tree.groups().len(), 1);
/// # Ok::<_, serde_json::Error>(())
/// ```
#[must_use]
pub fn build_columns(options: &GridColumnOptions) -> ColumnTree {
    let mut builder = TreeBuilder {
        default_col_def: &options.default_col_def,
        default_col_group_def: &options.default_col_group_def,
        types: options.type_registry(),
        column_ids: ColumnIdResolver::new(),
        group_ids: ColumnIdResolver::new(),
        columns: Vec::new(),
        groups: Vec::new(),
    };
    let roots: Vec<ColumnRef> = options
        .column_defs
        .iter()
        .map(|node| builder.visit(node, None))
        .collect();
    let mut columns = builder.columns;
    assign_flagged_indices(&mut columns);
    tracing::debug!(
        columns = columns.len(),
        groups = builder.groups.len(),
        "column tree built"
    );
    ColumnTree {
        columns,
        groups: builder.groups,
        roots,
    }
}
