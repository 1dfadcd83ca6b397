//! # Block segmentation
//!
//! Two-phase, line-based segmentation of a document body:
//!
//! 1. **Line classification** (`classify`): each line is classified into a
//!    [`LineClass`] of local facts (indentation, markers, fence signature,
//!    blank status), with no reference to surrounding context.
//! 2. **Block construction** (`builder`): a [`BlockBuilder`] maintains the
//!    structural context stack and heading/indent registers, groups lines into
//!    [`Block`]s and assigns each its outline level.
//!
//! Invariants:
//!
//! - Every line lands in some block; malformed syntax degrades to paragraph
//!   content and at most produces a [`Warning`](crate::warning::Warning).
//! - Fenced code blocks are raw zones: no classification or inline rewriting
//!   inside, and blank lines are data.
//! - Blocks come out in document order and are terminal once emitted.

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{INDENT_WIDTH, LineClass, LineClassifier};
pub use types::{Block, BlockKind, OutlineDocument};
