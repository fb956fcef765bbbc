use invaders::compute::init_state;
use invaders::config::Config;
use invaders::entities::*;

// ── Rect ──────────────────────────────────────────────────────────────────────

#[test]
fn rects_overlapping_intersect() {
    let a = Rect { x: 0, y: 0, width: 10, height: 10 };
    let b = Rect { x: 5, y: 5, width: 10, height: 10 };
    assert!(a.intersects(&b));
    assert!(b.intersects(&a));
}

#[test]
fn rect_containment_intersects() {
    let outer = Rect { x: 0, y: 0, width: 100, height: 100 };
    let inner = Rect { x: 40, y: 40, width: 5, height: 5 };
    assert!(outer.intersects(&inner));
    assert!(inner.intersects(&outer));
}

#[test]
fn edge_touching_rects_do_not_intersect() {
    let a = Rect { x: 0, y: 0, width: 10, height: 10 };
    let right_neighbour = Rect { x: 10, y: 0, width: 10, height: 10 };
    let below_neighbour = Rect { x: 0, y: 10, width: 10, height: 10 };
    assert!(!a.intersects(&right_neighbour));
    assert!(!a.intersects(&below_neighbour));
}

#[test]
fn disjoint_rects_do_not_intersect() {
    let a = Rect { x: 0, y: 0, width: 10, height: 10 };
    let b = Rect { x: 50, y: 50, width: 10, height: 10 };
    assert!(!a.intersects(&b));
}

// ── entity bounding boxes ─────────────────────────────────────────────────────

#[test]
fn entity_rects_use_config_dimensions() {
    let config = Config::default();
    let player = Player { x: 10, y: 20 };
    assert_eq!(
        player.rect(&config),
        Rect { x: 10, y: 20, width: 50, height: 40 }
    );

    let projectile = Projectile { x: 1, y: 2 };
    assert_eq!(
        projectile.rect(&config),
        Rect { x: 1, y: 2, width: 5, height: 10 }
    );

    let enemy = Enemy { x: 3, y: 4 };
    assert_eq!(
        enemy.rect(&config),
        Rect { x: 3, y: 4, width: 40, height: 30 }
    );
}

#[test]
fn projectile_off_screen_only_above_top() {
    assert!(!Projectile { x: 0, y: 0 }.is_off_screen());
    assert!(!Projectile { x: 0, y: 100 }.is_off_screen());
    assert!(Projectile { x: 0, y: -1 }.is_off_screen());
}

// ── game state ────────────────────────────────────────────────────────────────

#[test]
fn game_state_clone_is_independent() {
    let original = init_state(Config::default());
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.x = 99;
    cloned.score = 999;
    cloned.formation.members.clear();
    cloned.projectiles.push(Projectile { x: 5, y: 5 });

    assert_eq!(original.player.x, 375);
    assert_eq!(original.score, 0);
    assert_eq!(original.formation.len(), 50);
    assert!(original.projectiles.is_empty());
}

#[test]
fn config_derived_values() {
    let config = Config::default();
    assert_eq!(config.player_spawn(), (375, 520));
    assert_eq!(config.floor_line(), 500);
}
