//! `rstest-bdd` behavioural suite for `column_defs`.
//!
//! Fixtures hold per-scenario state, [`steps`] registers the step
//! implementations and [`scenarios`] binds the `.feature` files to them.

mod fixtures;
mod scenarios;
mod steps;
