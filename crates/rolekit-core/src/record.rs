use crate::catalog::TypeCatalog;
use std::any::{Any, TypeId};

///
/// Record
///
/// Fixed-shape container holding exactly one value for each type in its
/// catalog, in declared order. Concrete records are generated by `host!` as
/// plain structs with one field per declared type, so there is no boxing,
/// no hashing, and no missing-slot state.
///

pub trait Record: 'static {
    /// Catalog of the stored types, in declared order.
    fn catalog() -> TypeCatalog;

    /// Untyped lookup for opportunistic access. `None` iff `id` is not in
    /// the catalog.
    fn slot_any(&self, id: TypeId) -> Option<&dyn Any>;

    fn slot_any_mut(&mut self, id: TypeId) -> Option<&mut dyn Any>;
}

///
/// Slot
///
/// Typed access to one record slot. A record implements `Slot<T>` for each
/// type it stores and nothing else, so requesting an absent type is a
/// definition-time (compile) error, never a runtime miss.
///

pub trait Slot<T>: Record {
    fn slot(&self) -> &T;

    fn slot_mut(&mut self) -> &mut T;
}

///
/// RecordExt
///
/// Turbofish-friendly sugar over `Slot`.
///

pub trait RecordExt: Record {
    fn get<T>(&self) -> &T
    where
        Self: Slot<T>,
    {
        <Self as Slot<T>>::slot(self)
    }

    fn get_mut<T>(&mut self) -> &mut T
    where
        Self: Slot<T>,
    {
        <Self as Slot<T>>::slot_mut(self)
    }
}

impl<R: Record> RecordExt for R {}

// the empty record
impl Record for () {
    fn catalog() -> TypeCatalog {
        TypeCatalog::empty()
    }

    fn slot_any(&self, _id: TypeId) -> Option<&dyn Any> {
        None
    }

    fn slot_any_mut(&mut self, _id: TypeId) -> Option<&mut dyn Any> {
        None
    }
}

///
/// TESTS
///
