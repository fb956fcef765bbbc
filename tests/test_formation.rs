use invaders::config::Config;
use invaders::entities::Enemy;
use invaders::formation::Formation;

fn cfg() -> Config {
    Config::default()
}

// ── construction ──────────────────────────────────────────────────────────────

#[test]
fn new_formation_is_full_grid() {
    let f = Formation::new(&cfg());
    assert_eq!(f.len(), 50); // 5 rows x 10 cols
    assert_eq!(f.direction, 1);
}

#[test]
fn new_formation_canonical_coordinates() {
    let f = Formation::new(&cfg());
    // Row-major: member i is (row = i/10, col = i%10).
    assert_eq!((f.members[0].x, f.members[0].y), (50, 50));
    assert_eq!((f.members[9].x, f.members[9].y), (9 * 60 + 50, 50));
    assert_eq!((f.members[23].x, f.members[23].y), (3 * 60 + 50, 2 * 50 + 50));
    assert_eq!((f.members[49].x, f.members[49].y), (9 * 60 + 50, 4 * 50 + 50));
}

// ── marching ──────────────────────────────────────────────────────────────────

#[test]
fn advance_shifts_every_member_by_speed() {
    let f = Formation::new(&cfg());
    let f2 = f.advance(&cfg());
    for (before, after) in f.members.iter().zip(&f2.members) {
        assert_eq!(after.x, before.x + 1);
        assert_eq!(after.y, before.y);
    }
    assert_eq!(f2.direction, 1);
}

#[test]
fn advance_respects_direction_sign() {
    let mut f = Formation::new(&cfg());
    f.direction = -1;
    let f2 = f.advance(&cfg());
    assert_eq!(f2.members[0].x, 49);
    assert_eq!(f2.direction, -1);
}

// ── edge drop ─────────────────────────────────────────────────────────────────

#[test]
fn right_edge_drops_whole_formation_and_reverses() {
    let config = cfg();
    let f = Formation {
        members: vec![Enemy { x: 759, y: 50 }, Enemy { x: 100, y: 150 }],
        direction: 1,
    };
    // 759 + 1 = 760 = screen_width - enemy_width → edge hit.
    let f2 = f.advance(&config);
    assert_eq!(f2.direction, -1);
    assert_eq!(f2.members[0].y, 70);
    assert_eq!(f2.members[1].y, 170); // the far member drops too
    assert_eq!(f2.members[0].x, 760); // horizontal move still applied
    assert_eq!(f2.members[1].x, 101);
}

#[test]
fn left_edge_drops_whole_formation_and_reverses() {
    let config = cfg();
    let f = Formation {
        members: vec![Enemy { x: 1, y: 50 }, Enemy { x: 300, y: 50 }],
        direction: -1,
    };
    let f2 = f.advance(&config);
    assert_eq!(f2.direction, 1);
    assert!(f2.members.iter().all(|e| e.y == 70));
}

#[test]
fn no_drop_away_from_edges() {
    let config = cfg();
    let f = Formation {
        members: vec![Enemy { x: 400, y: 50 }],
        direction: 1,
    };
    let f2 = f.advance(&config);
    assert_eq!(f2.members[0].y, 50);
    assert_eq!(f2.direction, 1);
}

#[test]
fn full_grid_marches_to_right_edge_then_drops_in_lockstep() {
    let config = cfg();
    let mut f = Formation::new(&config);
    let mut steps = 0;
    while f.direction == 1 {
        f = f.advance(&config);
        steps += 1;
        assert!(steps < 1000, "formation never reached an edge");
    }
    // Rightmost column starts at 590 and triggers at 760.
    assert_eq!(steps, 170);
    // Synchrony: one atomic drop, every member down by exactly 20.
    for (i, e) in f.members.iter().enumerate() {
        let row = (i / 10) as i32;
        assert_eq!(e.y, row * 50 + 50 + 20);
    }
}

#[test]
fn len_and_is_empty() {
    let config = cfg();
    let f = Formation::new(&config);
    assert!(!f.is_empty());
    assert_eq!(f.len(), 50);
    let empty = Formation {
        members: Vec::new(),
        direction: 1,
    };
    assert!(empty.is_empty());
    assert_eq!(empty.len(), 0);
}
