//! CSS selector rendering.
//!
//! This module folds a parsed location path into the equivalent CSS
//! selector string. Rendering is a pure, single-pass fold over the steps;
//! all the decisions are local to one step.

pub mod selector;

pub use selector::to_selector;
