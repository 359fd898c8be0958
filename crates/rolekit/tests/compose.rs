mod common;

use common::{Category, Logger, Mover, Player, Transform};
use rolekit::{HostRegistry, prelude::*};

// a host that carries no attributes at all
rolekit::host! {
    struct Ghost {
        roles: { logger: Logger },
        attributes: {},
    }
}

#[test]
fn valid_composition_moves_and_logs() {
    let mut player = Player::named("Test").unwrap();

    let line = player.update();
    assert_eq!(player.attribute::<Transform>().x, 105.0);
    assert_eq!(line, "[Test] update finished");
}

#[test]
fn lookups_alias_the_same_storage() {
    let mut player = Player::named("Alias").unwrap();

    player.attribute_mut::<Transform>().y = 7.0;
    assert_eq!(player.attribute::<Transform>().y, 7.0);

    let first = std::ptr::from_ref(player.attribute::<Transform>());
    let second = std::ptr::from_ref(player.attribute::<Transform>());
    assert_eq!(first, second);
}

#[test]
fn dependency_free_role_composes_anywhere() {
    let ghost = Ghost::compose(Logger::new("fallback")).unwrap();

    assert!(!ghost.has_attribute::<Category>());
    assert!(ghost.has_role::<Logger>());
    assert_eq!(ghost.role::<Logger>().log(&ghost, "hello"), "[fallback] hello");
}

#[test]
fn logger_prefers_the_host_category() {
    let player = Player::named("Named").unwrap();

    assert!(player.has_attribute::<Category>());
    assert_eq!(
        player.role::<Logger>().log(&player, "hello"),
        "[Named] hello"
    );
}

#[test]
fn roles_are_reachable_and_membership_is_exact() {
    let player = Player::named("Query").unwrap();

    assert!(player.has_role::<Mover>());
    assert!(!player.has_role::<Transform>());
    assert!(player.try_role::<Mover>().is_some());
    assert!(player.try_attribute::<Mover>().is_none());
}

#[test]
fn registry_reports_certified_hosts() {
    let _player = Player::named("Report").unwrap();

    let reports = HostRegistry::export();
    assert!(reports.iter().any(|report| report.host == "Player" && report.ok));
}
