//! Helpers for compile-time constant selectors and patterns.

mod selector;

pub use selector::{compile_regex_unsafe, parse_selector_unsafe};
