//! Core integration tests
//!
//! Formatter, semantic logger table, banners and outcome helpers driven
//! through the public API.

mod formatter;
mod loggers;
mod outcome;
