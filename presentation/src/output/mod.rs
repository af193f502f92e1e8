//! Console output for debates

pub mod console;
