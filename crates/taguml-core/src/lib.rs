//! taguml Core Types and Definitions
//!
//! This crate provides the foundational types for the taguml diagram
//! generator. It includes:
//!
//! - **Kinds**: The classification of tag entries ([`kind::TagKind`])
//! - **Records**: One parsed tag entry ([`record::TagRecord`])
//! - **Model**: The insertion-ordered grouping of records used for
//!   diagram emission ([`model::DiagramModel`])

pub mod kind;
pub mod model;
pub mod record;
