//! Reusable view components.

pub mod link_table;
