//! Binds the feature files to the step registry.

use crate::fixtures::{ColumnsContext, ModelContext, columns_context, model_context};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/column_ids.feature",
    fixtures = [columns_context: ColumnsContext]
);
scenarios!(
    "tests/features/column_merge.feature",
    fixtures = [columns_context: ColumnsContext]
);
scenarios!(
    "tests/features/column_changes.feature",
    fixtures = [model_context: ModelContext]
);
