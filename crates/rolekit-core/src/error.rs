use crate::catalog::CatalogError;
use derive_more::Display;
use thiserror::Error as ThisError;

///
/// CompositionError
///
/// Definition-time failure of a host type. Every variant is a logic error:
/// it is decided once, when the host type is first certified, and the cached
/// verdict is returned for every later construction attempt. There is no
/// recoverable class; a failed host shape can never produce an instance.
///
/// Arity mismatches and unknown-type access have no variants here: both are
/// made unrepresentable by the generated `compose` signature and the `Slot`
/// bounds respectively.
///

#[remain::sorted]
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum CompositionError {
    #[error("certificate for host `{host}` does not match the composed records")]
    CertificateMismatch { host: &'static str },

    #[error("role `{role}` on host `{host}` repeats required attribute `{type_name}`")]
    DuplicateRequirement {
        host: &'static str,
        role: &'static str,
        type_name: &'static str,
    },

    #[error("attribute `{attribute}` on host `{host}` is not plain data")]
    InvalidAttributeShape {
        host: &'static str,
        attribute: &'static str,
    },

    #[error("invalid {kind} catalog for host `{host}`: {source}")]
    InvalidCatalog {
        host: &'static str,
        kind: CatalogKind,
        source: CatalogError,
    },

    #[error("role `{role}` on host `{host}` is missing required attribute(s): {}", .missing.join(", "))]
    MissingDependency {
        host: &'static str,
        role: &'static str,
        missing: Vec<&'static str>,
    },
}

impl CompositionError {
    /// Stable identifier used in certification reports.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::CertificateMismatch { .. } => "certificate_mismatch",
            Self::DuplicateRequirement { .. } => "duplicate_requirement",
            Self::InvalidAttributeShape { .. } => "invalid_attribute_shape",
            Self::InvalidCatalog { .. } => "invalid_catalog",
            Self::MissingDependency { .. } => "missing_dependency",
        }
    }

    #[must_use]
    pub const fn host(&self) -> &'static str {
        match self {
            Self::CertificateMismatch { host }
            | Self::DuplicateRequirement { host, .. }
            | Self::InvalidAttributeShape { host, .. }
            | Self::InvalidCatalog { host, .. }
            | Self::MissingDependency { host, .. } => host,
        }
    }
}

///
/// CatalogKind
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum CatalogKind {
    #[display("attribute")]
    Attributes,

    #[display("role")]
    Roles,
}

///
/// TESTS
///
