use crate::{
    attribute::{Attribute, AttributeSpec},
    composition::Composition,
    error::CompositionError,
    record::{Record, Slot},
    registry::HostRegistry,
    role::{Role, RoleSpec},
    validate::Certificate,
};

///
/// HostSpec
///
/// Declaration of a host type: its name plus its role and attribute sets,
/// in declared order. Built by `host!` expansion, or by hand when a check
/// over a dynamically assembled shape is wanted.
///

#[derive(Clone, Debug)]
pub struct HostSpec {
    name: &'static str,
    roles: Vec<RoleSpec>,
    attributes: Vec<AttributeSpec>,
}

impl HostSpec {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            roles: Vec::new(),
            attributes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_role<R: Role>(mut self) -> Self {
        self.roles.push(RoleSpec::of::<R>());
        self
    }

    #[must_use]
    pub fn with_attribute<A: Attribute>(mut self) -> Self {
        self.attributes.push(AttributeSpec::of::<A>());
        self
    }

    #[must_use]
    pub fn with_opaque_attribute<T: 'static>(mut self) -> Self {
        self.attributes.push(AttributeSpec::opaque::<T>());
        self
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn roles(&self) -> &[RoleSpec] {
        &self.roles
    }

    #[must_use]
    pub fn attributes(&self) -> &[AttributeSpec] {
        &self.attributes
    }
}

///
/// Host
///
/// Implemented by concrete hosts, normally through `host!`. A host embeds a
/// `Composition` as a field and forwards the query surface to it
/// (composition over a self-referencing base). Certification is routed
/// through the process-wide `HostRegistry` cache, so validation runs once
/// per host type, never per instance.
///

pub trait Host: Sized + 'static {
    type Roles: Record;
    type Attributes: Record;

    const NAME: &'static str;

    /// The declared shape, in declared order.
    fn spec() -> HostSpec;

    fn composition(&self) -> &Composition<Self::Roles, Self::Attributes>;

    fn composition_mut(&mut self) -> &mut Composition<Self::Roles, Self::Attributes>;

    /// Cached certification verdict for this host type.
    fn certificate() -> Result<Certificate, CompositionError> {
        HostRegistry::certify::<Self>()
    }

    /// Eagerly certify, e.g. at program start-up, instead of on first
    /// construction.
    fn certify() -> Result<(), CompositionError> {
        Self::certificate().map(|_| ())
    }

    fn has_role<T: 'static>(&self) -> bool {
        self.composition().has_role::<T>()
    }

    fn has_attribute<T: 'static>(&self) -> bool {
        self.composition().has_attribute::<T>()
    }

    fn role<T>(&self) -> &T
    where
        Self::Roles: Slot<T>,
    {
        self.composition().role()
    }

    fn role_mut<T>(&mut self) -> &mut T
    where
        Self::Roles: Slot<T>,
    {
        self.composition_mut().role_mut()
    }

    fn attribute<T>(&self) -> &T
    where
        Self::Attributes: Slot<T>,
    {
        self.composition().attribute()
    }

    fn attribute_mut<T>(&mut self) -> &mut T
    where
        Self::Attributes: Slot<T>,
    {
        self.composition_mut().attribute_mut()
    }

    fn try_role<T: 'static>(&self) -> Option<&T> {
        self.composition().try_role()
    }

    fn try_role_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.composition_mut().try_role_mut()
    }

    fn try_attribute<T: 'static>(&self) -> Option<&T> {
        self.composition().try_attribute()
    }

    fn try_attribute_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.composition_mut().try_attribute_mut()
    }
}

///
/// TESTS
///
