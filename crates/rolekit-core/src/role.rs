use crate::{
    attribute::Attribute,
    catalog::{CatalogError, TypeCatalog},
    token::TypeToken,
};

///
/// Role
///
/// A behavior unit. A role may carry private state and methods; it declares
/// the attribute types it needs through its `DependencyRule`, which is empty
/// unless the role opts in.
///

pub trait Role: 'static {
    fn dependency_rule() -> DependencyRule {
        DependencyRule::empty()
    }
}

///
/// DependencyRule
///
/// The attribute types a role requires on any host it is attached to.
/// Declared at the role's own definition, independent of any host; it only
/// becomes meaningful once the role is placed into a host's role set.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DependencyRule {
    required: Vec<TypeToken>,
}

impl DependencyRule {
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            required: Vec::new(),
        }
    }

    #[must_use]
    pub fn new() -> Self {
        Self::empty()
    }

    /// Add a required attribute type. Only types that have opted into the
    /// attribute contract can be named.
    #[must_use]
    pub fn with<A: Attribute>(mut self) -> Self {
        self.required.push(TypeToken::of::<A>());
        self
    }

    #[must_use]
    pub fn required(&self) -> &[TypeToken] {
        &self.required
    }

    pub(crate) fn to_catalog(&self) -> Result<TypeCatalog, CatalogError> {
        TypeCatalog::new(self.required.iter().copied())
    }
}

///
/// RoleSpec
///
/// A role type as seen by the validator: its token plus its declared rule.
///

#[derive(Clone, Debug)]
pub struct RoleSpec {
    token: TypeToken,
    rule: DependencyRule,
}

impl RoleSpec {
    #[must_use]
    pub fn of<R: Role>() -> Self {
        Self {
            token: TypeToken::of::<R>(),
            rule: R::dependency_rule(),
        }
    }

    #[must_use]
    pub const fn token(&self) -> TypeToken {
        self.token
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.token.short_name()
    }

    #[must_use]
    pub const fn rule(&self) -> &DependencyRule {
        &self.rule
    }
}

///
/// TESTS
///
