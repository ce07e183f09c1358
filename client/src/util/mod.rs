//! Browser helpers shared by components.

pub mod notice;
