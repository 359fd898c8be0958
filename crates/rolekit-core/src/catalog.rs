use crate::token::TypeToken;
use std::any::TypeId;
use thiserror::Error as ThisError;

///
/// CatalogError
///
/// Rejection raised while building a catalog. Surfaces through
/// `CompositionError` with the owning host attached.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum CatalogError {
    #[error("duplicate type `{type_name}`")]
    DuplicateType { type_name: &'static str },
}

impl CatalogError {
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::DuplicateType { type_name } => type_name,
        }
    }
}

///
/// TypeCatalog
///
/// Ordered, duplicate-free list of type tokens. Describes the shape of a
/// role or attribute set; holds no values.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TypeCatalog {
    tokens: Vec<TypeToken>,
}

impl TypeCatalog {
    #[must_use]
    pub const fn empty() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Build a catalog, rejecting repeated type identifiers.
    pub fn new(tokens: impl IntoIterator<Item = TypeToken>) -> Result<Self, CatalogError> {
        let mut catalog = Self::empty();
        for token in tokens {
            catalog.push(token)?;
        }

        Ok(catalog)
    }

    /// Infallible constructor for callers whose distinctness is already
    /// enforced structurally (one `Slot` impl per type per record).
    #[doc(hidden)]
    #[must_use]
    pub fn from_distinct(tokens: impl IntoIterator<Item = TypeToken>) -> Self {
        Self {
            tokens: tokens.into_iter().collect(),
        }
    }

    fn push(&mut self, token: TypeToken) -> Result<(), CatalogError> {
        if self.contains(&token) {
            return Err(CatalogError::DuplicateType {
                type_name: token.short_name(),
            });
        }
        self.tokens.push(token);

        Ok(())
    }

    #[must_use]
    pub fn contains(&self, token: &TypeToken) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    #[must_use]
    pub fn contains_id(&self, id: TypeId) -> bool {
        self.tokens.iter().any(|t| t.id() == id)
    }

    #[must_use]
    pub fn contains_type<T: 'static>(&self) -> bool {
        self.contains_id(TypeId::of::<T>())
    }

    #[must_use]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.missing_from(other).is_empty()
    }

    /// Tokens of `self` absent from `other`, in declared order.
    #[must_use]
    pub fn missing_from(&self, other: &Self) -> Vec<TypeToken> {
        self.tokens
            .iter()
            .filter(|token| !other.contains(token))
            .copied()
            .collect()
    }

    /// Concatenate two catalogs; overlap is a duplicate and is rejected.
    pub fn concat(&self, other: &Self) -> Result<Self, CatalogError> {
        Self::new(self.tokens.iter().chain(other.tokens.iter()).copied())
    }

    #[must_use]
    pub fn tokens(&self) -> &[TypeToken] {
        &self.tokens
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

///
/// TESTS
///
