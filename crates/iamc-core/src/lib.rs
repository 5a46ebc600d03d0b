//! # iamc-core
//!
//! Core types shared across the iamc console crates.
//!
//! This crate provides:
//! - Read-models for the entities owned by the IAM and Events services
//! - Identity references and display-identifier resolution
//! - Paging math (pagination widget, empty-page reconciliation)
//! - The generic paged remote collection used by every list view
//! - Client-side routes and their query parameters
//! - Session credentials and the session state enum
//! - Cross-cutting error types

pub mod collection;
pub mod credentials;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod identity;
pub mod paging;
pub mod route;
pub mod topics;

pub use collection::{LoadError, LoadedPage, PagedCollection};
pub use credentials::Credentials;
pub use errors::CoreError;
pub use identity::{IdentityKind, IdentityRecord, IdentityRef};
pub use paging::{ListQuery, Page, Pagination};
pub use route::{Route, View};
