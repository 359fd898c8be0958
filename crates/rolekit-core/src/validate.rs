use crate::{
    catalog::TypeCatalog,
    error::{CatalogKind, CompositionError},
    host::HostSpec,
};
use serde::{Deserialize, Serialize};

///
/// CompositionValidator
///
/// One-shot certification of a host shape. Pure: the same spec always
/// produces the same verdict. Callers go through `HostRegistry::certify`,
/// which memoizes the result per host type; this type never caches
/// anything itself.
///

pub struct CompositionValidator;

impl CompositionValidator {
    /// Certify a host shape:
    ///
    /// 1. both catalogs must be duplicate-free;
    /// 2. every role's dependency rule must be a subset of the attribute
    ///    catalog (first violation wins, naming the role and every missing
    ///    attribute; the role is never silently dropped);
    /// 3. every attribute must satisfy the plain-data contract.
    pub fn certify(spec: &HostSpec) -> Result<Certificate, CompositionError> {
        let host = spec.name();

        let attribute_catalog = TypeCatalog::new(spec.attributes().iter().map(|a| a.token()))
            .map_err(|source| CompositionError::InvalidCatalog {
                host,
                kind: CatalogKind::Attributes,
                source,
            })?;

        let role_catalog = TypeCatalog::new(spec.roles().iter().map(|r| r.token())).map_err(
            |source| CompositionError::InvalidCatalog {
                host,
                kind: CatalogKind::Roles,
                source,
            },
        )?;

        for role in spec.roles() {
            let rule = role.rule().to_catalog().map_err(|source| {
                CompositionError::DuplicateRequirement {
                    host,
                    role: role.name(),
                    type_name: source.type_name(),
                }
            })?;

            let missing = rule.missing_from(&attribute_catalog);
            if !missing.is_empty() {
                return Err(CompositionError::MissingDependency {
                    host,
                    role: role.name(),
                    missing: missing.iter().map(|token| token.short_name()).collect(),
                });
            }
        }

        for attribute in spec.attributes() {
            if !attribute.is_plain() {
                return Err(CompositionError::InvalidAttributeShape {
                    host,
                    attribute: attribute.name(),
                });
            }
        }

        tracing::debug!(target: "rolekit::certify", host, "host certified");

        Ok(Certificate {
            host,
            roles: role_catalog,
            attributes: attribute_catalog,
        })
    }
}

///
/// Certificate
///
/// Proof that a host shape passed certification. Only the validator mints
/// one, and it records the exact catalogs it certified;
/// `Composition::from_parts` demands a certificate whose catalogs match the
/// records, so an uncertified shape can never become an instance.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Certificate {
    host: &'static str,
    roles: TypeCatalog,
    attributes: TypeCatalog,
}

impl Certificate {
    #[must_use]
    pub const fn host(&self) -> &'static str {
        self.host
    }

    /// The certified role catalog, in declared order.
    #[must_use]
    pub const fn roles(&self) -> &TypeCatalog {
        &self.roles
    }

    /// The certified attribute catalog, in declared order.
    #[must_use]
    pub const fn attributes(&self) -> &TypeCatalog {
        &self.attributes
    }
}

///
/// CertificationReport
///
/// Serializable projection of a verdict, for diagnostics and tooling.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CertificationReport {
    pub host: String,
    pub ok: bool,
    pub issues: Vec<CertificationIssue>,
}

///
/// CertificationIssue
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CertificationIssue {
    pub code: String,
    pub message: String,
}

impl CertificationReport {
    #[must_use]
    pub fn from_verdict(host: &str, verdict: &Result<Certificate, CompositionError>) -> Self {
        match verdict {
            Ok(_) => Self {
                host: host.to_string(),
                ok: true,
                issues: Vec::new(),
            },
            Err(err) => Self {
                host: host.to_string(),
                ok: false,
                issues: vec![CertificationIssue {
                    code: err.code().to_string(),
                    message: err.to_string(),
                }],
            },
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        attribute::Attribute,
        role::{DependencyRule, Role},
    };
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    #[derive(Default)]
    struct Transform;
    impl Attribute for Transform {}

    #[derive(Default)]
    struct Category;
    impl Attribute for Category {}

    struct Logger;
    impl Role for Logger {}

    struct Mover;
    impl Role for Mover {
        fn dependency_rule() -> DependencyRule {
            DependencyRule::new().with::<Transform>()
        }
    }

    struct Greedy;
    impl Role for Greedy {
        fn dependency_rule() -> DependencyRule {
            DependencyRule::new().with::<Transform>().with::<Transform>()
        }
    }

    #[test]
    fn certifies_a_complete_host() {
        let spec = HostSpec::new("Player")
            .with_role::<Logger>()
            .with_role::<Mover>()
            .with_attribute::<Transform>()
            .with_attribute::<Category>();

        let certificate = CompositionValidator::certify(&spec).unwrap();
        assert_eq!(certificate.host(), "Player");
        assert!(certificate.roles().contains_type::<Mover>());
        assert!(certificate.attributes().contains_type::<Transform>());
        assert_eq!(certificate.roles().len(), 2);
        assert_eq!(certificate.attributes().len(), 2);
    }

    #[test]
    fn missing_dependency_names_role_and_attribute() {
        let spec = HostSpec::new("Wanderer")
            .with_role::<Mover>()
            .with_attribute::<Category>();

        let err = CompositionValidator::certify(&spec).unwrap_err();
        assert_eq!(
            err,
            CompositionError::MissingDependency {
                host: "Wanderer",
                role: "Mover",
                missing: vec!["Transform"],
            }
        );
    }

    #[test]
    fn duplicate_attribute_is_rejected() {
        let spec = HostSpec::new("Echo")
            .with_attribute::<Transform>()
            .with_attribute::<Transform>();

        let err = CompositionValidator::certify(&spec).unwrap_err();
        assert_eq!(err.code(), "invalid_catalog");
        assert!(err.to_string().contains("attribute catalog"));
    }

    #[test]
    fn duplicate_role_is_rejected() {
        let spec = HostSpec::new("Echo").with_role::<Logger>().with_role::<Logger>();

        let err = CompositionValidator::certify(&spec).unwrap_err();
        assert!(err.to_string().contains("role catalog"));
    }

    #[test]
    fn duplicate_requirement_is_rejected() {
        let spec = HostSpec::new("Echo")
            .with_role::<Greedy>()
            .with_attribute::<Transform>();

        let err = CompositionValidator::certify(&spec).unwrap_err();
        assert_eq!(
            err,
            CompositionError::DuplicateRequirement {
                host: "Echo",
                role: "Greedy",
                type_name: "Transform",
            }
        );
    }

    #[test]
    fn opaque_attribute_fails_the_shape_check() {
        let spec = HostSpec::new("Echo").with_opaque_attribute::<String>();

        let err = CompositionValidator::certify(&spec).unwrap_err();
        assert_eq!(
            err,
            CompositionError::InvalidAttributeShape {
                host: "Echo",
                attribute: "String",
            }
        );
    }

    #[test]
    fn dependency_check_runs_before_shape_check() {
        let spec = HostSpec::new("Echo")
            .with_role::<Mover>()
            .with_opaque_attribute::<String>();

        let err = CompositionValidator::certify(&spec).unwrap_err();
        assert_eq!(err.code(), "missing_dependency");
    }

    #[test]
    fn report_serializes_the_verdict() {
        let verdict = CompositionValidator::certify(
            &HostSpec::new("Wanderer")
                .with_role::<Mover>()
                .with_attribute::<Category>(),
        );

        let report = CertificationReport::from_verdict("Wanderer", &verdict);
        assert!(!report.ok);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["issues"][0]["code"], "missing_dependency");

        let back: CertificationReport = serde_json::from_value(json).unwrap();
        assert_eq!(back, report);
    }

    // property 1: a host is certifiable iff its attribute set covers every
    // role's rule

    mod pool {
        use crate::attribute::Attribute;

        #[derive(Default)]
        pub struct P0;
        impl Attribute for P0 {}

        #[derive(Default)]
        pub struct P1;
        impl Attribute for P1 {}

        #[derive(Default)]
        pub struct P2;
        impl Attribute for P2 {}

        #[derive(Default)]
        pub struct P3;
        impl Attribute for P3 {}

        #[derive(Default)]
        pub struct P4;
        impl Attribute for P4 {}

        #[derive(Default)]
        pub struct P5;
        impl Attribute for P5 {}
    }

    struct Needy;
    impl Role for Needy {
        fn dependency_rule() -> DependencyRule {
            DependencyRule::new()
                .with::<pool::P0>()
                .with::<pool::P1>()
                .with::<pool::P2>()
        }
    }

    fn add<A: Attribute>(spec: HostSpec) -> HostSpec {
        spec.with_attribute::<A>()
    }

    fn spec_with(present: &BTreeSet<usize>) -> HostSpec {
        let adders: [fn(HostSpec) -> HostSpec; 6] = [
            add::<pool::P0>,
            add::<pool::P1>,
            add::<pool::P2>,
            add::<pool::P3>,
            add::<pool::P4>,
            add::<pool::P5>,
        ];

        present
            .iter()
            .fold(HostSpec::new("Needy").with_role::<Needy>(), |spec, &i| {
                adders[i](spec)
            })
    }

    proptest! {
        #[test]
        fn dependency_subset_law(present in proptest::collection::btree_set(0usize..6, 0..=6usize)) {
            let verdict = CompositionValidator::certify(&spec_with(&present));
            let satisfied = (0..3).all(|i| present.contains(&i));

            prop_assert_eq!(verdict.is_ok(), satisfied);
        }
    }
}
