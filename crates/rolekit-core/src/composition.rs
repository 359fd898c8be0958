use crate::{
    error::CompositionError,
    record::{Record, Slot},
    validate::Certificate,
};
use std::any::TypeId;

///
/// Composition
///
/// The assembled entity core: one record of roles and one of attributes,
/// exclusively owned by a single logical owner. Construction demands a
/// `Certificate`, so an uncertified shape can never become an instance.
/// The composition itself never mutates component state; role behavior
/// does, through the accessors below.
///

pub struct Composition<R: Record, A: Record> {
    roles: R,
    attributes: A,
}

impl<R: Record, A: Record> Composition<R, A> {
    /// Build from certified parts. The certificate must have been minted for
    /// exactly these record shapes; one certified for a different shape is
    /// rejected, so a failing shape cannot borrow another host's proof.
    pub fn from_parts(
        certificate: &Certificate,
        roles: R,
        attributes: A,
    ) -> Result<Self, CompositionError> {
        if *certificate.roles() != R::catalog() || *certificate.attributes() != A::catalog() {
            return Err(CompositionError::CertificateMismatch {
                host: certificate.host(),
            });
        }

        Ok(Self { roles, attributes })
    }

    #[must_use]
    pub fn has_role<T: 'static>(&self) -> bool {
        R::catalog().contains_type::<T>()
    }

    #[must_use]
    pub fn has_attribute<T: 'static>(&self) -> bool {
        A::catalog().contains_type::<T>()
    }

    #[must_use]
    pub fn role<T>(&self) -> &T
    where
        R: Slot<T>,
    {
        self.roles.slot()
    }

    pub fn role_mut<T>(&mut self) -> &mut T
    where
        R: Slot<T>,
    {
        self.roles.slot_mut()
    }

    #[must_use]
    pub fn attribute<T>(&self) -> &T
    where
        A: Slot<T>,
    {
        self.attributes.slot()
    }

    pub fn attribute_mut<T>(&mut self) -> &mut T
    where
        A: Slot<T>,
    {
        self.attributes.slot_mut()
    }

    /// Opportunistic lookup: `None` when `T` is not in the role catalog.
    #[must_use]
    pub fn try_role<T: 'static>(&self) -> Option<&T> {
        self.roles
            .slot_any(TypeId::of::<T>())
            .and_then(|any| any.downcast_ref::<T>())
    }

    pub fn try_role_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.roles
            .slot_any_mut(TypeId::of::<T>())
            .and_then(|any| any.downcast_mut::<T>())
    }

    #[must_use]
    pub fn try_attribute<T: 'static>(&self) -> Option<&T> {
        self.attributes
            .slot_any(TypeId::of::<T>())
            .and_then(|any| any.downcast_ref::<T>())
    }

    pub fn try_attribute_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.attributes
            .slot_any_mut(TypeId::of::<T>())
            .and_then(|any| any.downcast_mut::<T>())
    }

    #[must_use]
    pub const fn roles(&self) -> &R {
        &self.roles
    }

    #[must_use]
    pub const fn attributes(&self) -> &A {
        &self.attributes
    }

    #[must_use]
    pub const fn parts(&self) -> (&R, &A) {
        (&self.roles, &self.attributes)
    }

    /// Split borrow so role behavior can mutate sibling attributes while the
    /// role itself stays borrowed.
    pub const fn parts_mut(&mut self) -> (&mut R, &mut A) {
        (&mut self.roles, &mut self.attributes)
    }
}

///
/// TESTS
///
