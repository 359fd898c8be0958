mod common;

use common::{Category, Mover};
use rolekit::{CompositionError, Host, HostRegistry};

// Mover requires Transform, which this host does not carry. The shape is
// rejected the first time the host type reaches the registry, and the
// verdict sticks.
rolekit::host! {
    struct Wanderer {
        roles: { mover: Mover },
        attributes: { category: Category },
    }
}

#[test]
fn missing_dependency_is_rejected() {
    // hosts carry no `Debug` impl, so destructure instead of `unwrap_err`
    let Err(err) = Wanderer::compose(Mover::default(), Category::default()) else {
        panic!("expected rejection");
    };

    match err {
        CompositionError::MissingDependency {
            host,
            role,
            missing,
        } => {
            assert_eq!(host, "Wanderer");
            assert_eq!(role, "Mover");
            assert_eq!(missing, vec!["Transform"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn failed_verdict_is_cached() {
    let first = Wanderer::compose(Mover::default(), Category::default()).err().unwrap();
    let second = Wanderer::compose(Mover::default(), Category::default()).err().unwrap();
    assert_eq!(first, second);

    assert!(Wanderer::certify().is_err());
    assert!(matches!(HostRegistry::verdict::<Wanderer>(), Some(Err(_))));

    let report = HostRegistry::export()
        .into_iter()
        .find(|report| report.host == "Wanderer")
        .unwrap();
    assert!(!report.ok);
    assert_eq!(report.issues[0].code, "missing_dependency");
}
