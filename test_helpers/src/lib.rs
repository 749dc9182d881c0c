//! Test helpers shared across crates in the `column_defs` workspace.
//!
//! The helpers cover three recurring needs: running file-based tests inside a
//! [`figment::Jail`], turning behavioural step placeholders into clean values,
//! and building JSON definition objects without `expect` noise.

pub mod figment;
pub mod json;
pub mod text;
