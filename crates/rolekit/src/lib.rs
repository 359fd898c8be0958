//! Rolekit facade crate.
//!
//! Rolekit builds concrete entities ("hosts") out of two disjoint kinds of
//! typed parts: **roles** (behavior providers) and **attributes** (plain
//! data holders). A host declares both sets once; the shape is certified
//! before any instance can exist, so a role placed on a host that lacks a
//! required attribute is a definition-time failure, never a latent runtime
//! one. Certification runs once per host type and the verdict is cached.
//!
//! ```
//! use rolekit::prelude::*;
//!
//! #[derive(Attribute, Default)]
//! struct Transform {
//!     x: f32,
//! }
//!
//! #[derive(Role)]
//! #[role(requires(Transform))]
//! struct Mover;
//!
//! impl Mover {
//!     fn nudge<A: Slot<Transform>>(&self, attributes: &mut A, dx: f32) {
//!         attributes.get_mut::<Transform>().x += dx;
//!     }
//! }
//!
//! rolekit::host! {
//!     struct Probe {
//!         roles: { mover: Mover },
//!         attributes: { transform: Transform },
//!     }
//! }
//!
//! # fn main() -> Result<(), rolekit::CompositionError> {
//! let mut probe = Probe::compose(Mover, Transform::default())?;
//!
//! let (roles, attributes) = probe.composition_mut().parts_mut();
//! roles.get::<Mover>().nudge(attributes, 5.0);
//!
//! assert_eq!(probe.attribute::<Transform>().x, 5.0);
//! assert!(probe.has_attribute::<Transform>());
//! # Ok(())
//! # }
//! ```
//!
//! Typed access to a type outside a host's catalogs does not exist: there
//! is no `Slot` impl for it, so the call fails to compile instead of
//! failing at runtime.
//!
//! ```compile_fail
//! use rolekit::prelude::*;
//!
//! #[derive(Attribute, Default)]
//! struct Transform {
//!     x: f32,
//! }
//!
//! #[derive(Attribute, Default)]
//! struct Category {
//!     name: String,
//! }
//!
//! rolekit::host! {
//!     struct Probe {
//!         roles: {},
//!         attributes: { transform: Transform },
//!     }
//! }
//!
//! fn demo(probe: &Probe) -> &Category {
//!     probe.attribute::<Category>() // no `Slot<Category>` impl for this host
//! }
//! ```
//!
//! Likewise `compose` takes exactly one initializer per declared component;
//! any other argument count fails to compile:
//!
//! ```compile_fail
//! use rolekit::prelude::*;
//!
//! #[derive(Attribute, Default)]
//! struct Transform {
//!     x: f32,
//! }
//!
//! #[derive(Role)]
//! struct Mover;
//!
//! rolekit::host! {
//!     struct Probe {
//!         roles: { mover: Mover },
//!         attributes: { transform: Transform },
//!     }
//! }
//!
//! fn demo() -> Result<Probe, CompositionError> {
//!     Probe::compose(Mover) // one initializer short
//! }
//! ```

mod macros; // `catalog!`

// -----------------------------------------------------------------------------
// Re-exports
// -----------------------------------------------------------------------------

pub use rolekit_core::{
    Attribute, AttributeSpec, CatalogError, CatalogKind, Certificate, CertificationIssue,
    CertificationReport, Composition, CompositionError, CompositionValidator, DependencyRule,
    Host, HostRegistry, HostSpec, Record, RecordExt, Role, RoleSpec, Slot, TypeCatalog,
    TypeToken,
};

pub use rolekit_macros::{Attribute, Role, host};

// -----------------------------------------------------------------------------
// Constants
// -----------------------------------------------------------------------------

pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// -----------------------------------------------------------------------------
// Prelude
// -----------------------------------------------------------------------------

///
/// Opinionated prelude for crates that define roles, attributes, and hosts.
/// Library code interacting only with the validator or registry should
/// import specific paths instead.
///

pub mod prelude {
    pub use crate::{
        Attribute, Composition, CompositionError, Host, Record, RecordExt, Role, Slot, host,
    };
}
