use crate::token::TypeToken;

///
/// Attribute
///
/// A plain data unit. `Default` is the plain-data marker: an attribute must
/// be constructible with no required external input, and it never carries a
/// dependency of its own. Attributes do not know about roles.
///

pub trait Attribute: Default + 'static {}

///
/// AttributeSpec
///
/// An attribute type as seen by the validator: its token plus whether it
/// satisfies the plain-data contract.
///

#[derive(Clone, Debug)]
pub struct AttributeSpec {
    token: TypeToken,
    plain: bool,
}

impl AttributeSpec {
    /// Describe a type that has opted into the plain-data contract.
    #[must_use]
    pub fn of<A: Attribute>() -> Self {
        Self {
            token: TypeToken::of::<A>(),
            plain: true,
        }
    }

    /// Describe a type that has NOT opted in. Certification rejects it with
    /// `InvalidAttributeShape`; this exists so dynamically assembled specs
    /// can name foreign types and still fail loudly.
    #[must_use]
    pub fn opaque<T: 'static>() -> Self {
        Self {
            token: TypeToken::of::<T>(),
            plain: false,
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
    pub const fn is_plain(&self) -> bool {
        self.plain
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Health(u32);
    impl Attribute for Health {}

    #[test]
    fn opted_in_attributes_are_plain() {
        let spec = AttributeSpec::of::<Health>();
        assert!(spec.is_plain());
        assert_eq!(spec.name(), "Health");
    }

    #[test]
    fn opaque_attributes_are_not() {
        let spec = AttributeSpec::opaque::<String>();
        assert!(!spec.is_plain());
        assert_eq!(spec.name(), "String");
    }
}
