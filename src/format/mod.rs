//! Edge-list input: plain text and JSON snapshots.

pub mod reader;

pub use reader::EdgeListReader;
