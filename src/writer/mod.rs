//! Renderers for a finished `TableLoader`. Output goes to any `Write`
//! (stdout from the binary); nothing is persisted.
pub mod json;
pub mod summary;
