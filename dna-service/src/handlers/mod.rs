//! HTTP handlers for the DNA utilities service.

pub mod explain;
pub mod health;
pub mod sequence;
