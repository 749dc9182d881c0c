//! Replacing the column definitions of a live grid.
//!
//! New definitions are matched against the current columns by column id.
//! Matching columns are kept together with their user-held state; the rest
//! are added or removed.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::state::renumber_flagged_indices;
use crate::{ColumnTree, GridColumnOptions, build_columns};

/// Column ids grouped by what a definition change did to them.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
pub struct ColumnChanges {
    /// Ids present before and after, in new definition order.
    pub kept: Vec<String>,
    /// Ids only present after, in new definition order.
    pub added: Vec<String>,
    /// Ids only present before, in previous display order.
    pub removed: Vec<String>,
}

impl ColumnChanges {
    /// Whether the change neither added nor removed a column.
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Compare two id sequences.
///
/// # Examples
///
/// ```
/// use column_defs::diff_column_ids;
///
/// let changes = diff_column_ids(&["athlete", "age", "year"], &["year", "country", "athlete"]);
/// assert_eq!(changes.kept, vec!["year", "athlete"]);
/// assert_eq!(changes.added, vec!["country"]);
/// assert_eq!(changes.removed, vec!["age"]);
/// ```
#[must_use]
pub fn diff_column_ids(previous: &[&str], next: &[&str]) -> ColumnChanges {
    let before: HashSet<&str> = previous.iter().copied().collect();
    let after: HashSet<&str> = next.iter().copied().collect();
    let (kept, added): (Vec<&str>, Vec<&str>) =
        next.iter().copied().partition(|id| before.contains(id));
    ColumnChanges {
        kept: kept.into_iter().map(str::to_owned).collect(),
        added: added.into_iter().map(str::to_owned).collect(),
        removed: previous
            .iter()
            .copied()
            .filter(|id| !after.contains(id))
            .map(str::to_owned)
            .collect(),
    }
}

/// The column set of one grid instance across definition changes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColumnModel {
    tree: ColumnTree,
}

impl ColumnModel {
    /// Build the initial columns from `options`.
    #[must_use]
    pub fn new(options: &GridColumnOptions) -> Self {
        Self {
            tree: build_columns(options),
        }
    }

    /// The current columns.
    #[must_use]
    pub const fn tree(&self) -> &ColumnTree {
        &self.tree
    }

    /// Mutable access to the current columns, for state changes.
    pub const fn tree_mut(&mut self) -> &mut ColumnTree {
        &mut self.tree
    }

    /// Replace the column definitions.
    ///
    /// Kept columns always keep their sort and filter model, and kept groups
    /// their expanded state. Removed columns take theirs away with them.
    /// Unless `options.immutable_columns` is set, kept columns also keep
    /// their order, width, pinning, aggregation function, row group and
    /// pivot position; added columns follow them in definition order, and
    /// added `rowGroup`/`pivot` columns are numbered after every index the
    /// kept columns hold. With immutable columns all of these come from the
    /// new definitions.
    pub fn set_column_defs(&mut self, options: &GridColumnOptions) -> ColumnChanges {
        let mut next = build_columns(options);
        let changes = diff_column_ids(&self.tree.ids(), &next.definition_order());

        for column in &mut next.columns {
            if let Some(previous) = self.tree.column(column.id()) {
                column.carry_over(previous, options.immutable_columns);
            }
        }
        for group in &mut next.groups {
            if let Some(previous) = self.tree.group(group.id()) {
                group.open = previous.is_open();
            }
        }
        if !options.immutable_columns {
            let added: HashSet<&str> = changes.added.iter().map(String::as_str).collect();
            renumber_flagged_indices(&mut next.columns, &|column| added.contains(column.id()));
            next.reorder(&self.tree.ids());
        }

        tracing::debug!(
            kept = changes.kept.len(),
            added = changes.added.len(),
            removed = changes.removed.len(),
            immutable = options.immutable_columns,
            "column definitions replaced"
        );
        self.tree = next;
        changes
    }
}

impl From<ColumnTree> for ColumnModel {
    fn from(tree: ColumnTree) -> Self {
        Self { tree }
    }
}
