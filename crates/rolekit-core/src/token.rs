use std::{
    any::{TypeId, type_name},
    fmt,
    hash::{Hash, Hasher},
};

///
/// TypeToken
///
/// Stable identifier for a component type: its `TypeId` plus the full type
/// name for diagnostics. Two tokens are equal iff they name the same Rust
/// type.
///

#[derive(Clone, Copy, Debug)]
pub struct TypeToken {
    id: TypeId,
    name: &'static str,
}

impl TypeToken {
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// Full path as produced by `core::any::type_name`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Trailing path segment, used in error messages and reports.
    #[must_use]
    pub fn short_name(&self) -> &'static str {
        short_type_name(self.name)
    }
}

impl PartialEq for TypeToken {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeToken {}

impl Hash for TypeToken {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

// Trims the module path of the outermost type; generic arguments are kept
// verbatim.
pub(crate) fn short_type_name(full: &'static str) -> &'static str {
    let head_end = full.find('<').unwrap_or(full.len());

    match full[..head_end].rfind("::") {
        Some(idx) => &full[idx + 2..],
        None => full,
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    struct Plain;

    mod nested {
        pub struct Deep;
    }

    #[test]
    fn tokens_compare_by_type_identity() {
        assert_eq!(TypeToken::of::<Plain>(), TypeToken::of::<Plain>());
        assert_ne!(TypeToken::of::<Plain>(), TypeToken::of::<nested::Deep>());
    }

    #[test]
    fn short_name_trims_the_module_path() {
        assert_eq!(TypeToken::of::<Plain>().short_name(), "Plain");
        assert_eq!(TypeToken::of::<nested::Deep>().short_name(), "Deep");
        assert_eq!(TypeToken::of::<u32>().short_name(), "u32");
        assert!(
            TypeToken::of::<Vec<nested::Deep>>()
                .short_name()
                .starts_with("Vec<")
        );
    }

    #[test]
    fn display_uses_the_short_name() {
        assert_eq!(TypeToken::of::<Plain>().to_string(), "Plain");
    }
}
