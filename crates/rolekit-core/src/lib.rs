//! Core composition engine used by the `rolekit` facade crate.
//!
//! Most users should depend on `rolekit`, which re-exports this crate and
//! provides the `host!` / `#[derive(Role)]` / `#[derive(Attribute)]` macro
//! entry points.
//!
//! ## Layering
//!
//! - `token` / `catalog` describe component shapes (pure metadata, no
//!   storage).
//! - `record` is the typed heterogeneous container contract; concrete
//!   records are generated per host by `host!`.
//! - `role` / `attribute` define the component protocol and dependency
//!   declarations.
//! - `validate` certifies a host shape once; `registry` caches the verdict
//!   per host type so instantiation never re-validates.
//! - `composition` owns the two records and exposes the query surface.
//!
//! The default flow is: host declaration → registry → validator →
//! certificate → construction → typed/opportunistic access.

pub mod attribute;
pub mod catalog;
pub mod composition;
pub mod error;
pub mod host;
pub mod record;
pub mod registry;
pub mod role;
pub mod token;
pub mod validate;

pub use attribute::{Attribute, AttributeSpec};
pub use catalog::{CatalogError, TypeCatalog};
pub use composition::Composition;
pub use error::{CatalogKind, CompositionError};
pub use host::{Host, HostSpec};
pub use record::{Record, RecordExt, Slot};
pub use registry::HostRegistry;
pub use role::{DependencyRule, Role, RoleSpec};
pub use token::TypeToken;
pub use validate::{
    Certificate, CertificationIssue, CertificationReport, CompositionValidator,
};

///
/// Crate Version
///

pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
