/// Pure simulation functions.
///
/// Every public function takes an immutable reference to the current
/// [`GameState`] and returns a brand-new `GameState`.  There is no I/O and no
/// randomness anywhere in the core; given the same inputs, a run of ticks is
/// fully deterministic.

use log::debug;

use crate::config::Config;
use crate::entities::{FrameSnapshot, GameState, GameStatus, Player, Projectile};
use crate::formation::Formation;
use crate::input::{InputEvent, InputFrame};

/// Points awarded per enemy destroyed.
const KILL_SCORE: u32 = 10;
const STARTING_LIVES: u32 = 3;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial game state: player at its spawn point, no projectiles,
/// a fresh formation, three lives.
pub fn init_state(config: Config) -> GameState {
    let (px, py) = config.player_spawn();
    let formation = Formation::new(&config);
    GameState {
        player: Player { x: px, y: py },
        projectiles: Vec::new(),
        formation,
        score: 0,
        lives: STARTING_LIVES,
        status: GameStatus::Playing,
        frame: 0,
        config,
    }
}

/// Full re-initialisation from the owned config.  Only honoured while the
/// game is over; a restart request mid-game is ignored.
pub fn restart(state: &GameState) -> GameState {
    if state.status != GameStatus::GameOver {
        return state.clone();
    }
    debug!("restart: score was {}, frame {}", state.score, state.frame);
    init_state(state.config.clone())
}

// ── Input-driven state transitions (pure) ────────────────────────────────────

pub fn move_player_left(state: &GameState) -> GameState {
    let new_x = (state.player.x - state.config.player_speed).max(0);
    GameState {
        player: Player {
            x: new_x,
            ..state.player.clone()
        },
        ..state.clone()
    }
}

pub fn move_player_right(state: &GameState) -> GameState {
    let limit = state.config.screen_width - state.config.player_width;
    let new_x = (state.player.x + state.config.player_speed).min(limit);
    GameState {
        player: Player {
            x: new_x,
            ..state.player.clone()
        },
        ..state.clone()
    }
}

/// Spawn one projectile at the muzzle: horizontally centred on the player,
/// starting level with the player's top edge.
pub fn player_fire(state: &GameState) -> GameState {
    let projectile = Projectile {
        x: state.player.x + state.config.player_width / 2
            - state.config.projectile_width / 2,
        y: state.player.y,
    };
    let mut projectiles = state.projectiles.clone();
    projectiles.push(projectile);
    GameState {
        projectiles,
        ..state.clone()
    }
}

/// Apply one tick's worth of input.
///
/// While playing: held left/right move the player, each `Fire` event spawns
/// one projectile, `Restart` is ignored.  While game over: movement and fire
/// are ignored, `Restart` rebuilds the game.  `Quit` belongs to the adapter's
/// loop and is never interpreted here.
pub fn apply_input(state: &GameState, input: &InputFrame) -> GameState {
    let mut state = state.clone();
    match state.status {
        GameStatus::Playing => {
            if input.left {
                state = move_player_left(&state);
            }
            if input.right {
                state = move_player_right(&state);
            }
            for event in &input.events {
                if *event == InputEvent::Fire {
                    state = player_fire(&state);
                }
            }
        }
        GameStatus::GameOver => {
            if input.events.contains(&InputEvent::Restart) {
                state = restart(&state);
            }
        }
    }
    state
}

// ── Per-frame tick (pure) ────────────────────────────────────────────────────

/// Advance the simulation by one tick.
///
/// Fixed pipeline: projectiles advance and off-screen ones are pruned, the
/// formation steps (or regenerates if the previous tick emptied it),
/// projectile–enemy overlaps are resolved, then enemy–player breaches.  A
/// game-over state does not simulate at all; it waits for restart.
pub fn tick(state: &GameState) -> GameState {
    if state.status == GameStatus::GameOver {
        return state.clone();
    }

    let config = &state.config;
    let frame = state.frame + 1;

    // ── 1. Advance projectiles, prune off-screen ─────────────────────────────
    let projectiles: Vec<Projectile> = state
        .projectiles
        .iter()
        .map(|p| Projectile {
            x: p.x,
            y: p.y - config.projectile_speed,
        })
        .filter(|p| !p.is_off_screen())
        .collect();

    // ── 2. Formation step ────────────────────────────────────────────────────
    // A cleared wave regenerates at its canonical slots and holds still for
    // this tick; otherwise the grid marches (and possibly drops a rank).
    let formation = if state.formation.is_empty() {
        debug!("wave cleared, regenerating formation at frame {}", frame);
        Formation::new(config)
    } else {
        state.formation.advance(config)
    };

    // ── 3. Collision: projectiles ↔ enemies ──────────────────────────────────
    // Mark-then-compact: scan both lists immutably, collect indices, apply
    // removals afterwards.  Breaking after the first not-yet-claimed overlap
    // caps each projectile at one kill per tick.
    let mut killed_enemies: Vec<usize> = Vec::new();
    let mut spent_projectiles: Vec<usize> = Vec::new();

    for (pi, projectile) in projectiles.iter().enumerate() {
        let p_rect = projectile.rect(config);
        for (ei, enemy) in formation.members.iter().enumerate() {
            if killed_enemies.contains(&ei) {
                continue;
            }
            if p_rect.intersects(&enemy.rect(config)) {
                killed_enemies.push(ei);
                spent_projectiles.push(pi);
                break;
            }
        }
    }

    let score = state.score + killed_enemies.len() as u32 * KILL_SCORE;

    let mut formation = Formation {
        members: formation
            .members
            .iter()
            .enumerate()
            .filter(|(i, _)| !killed_enemies.contains(i))
            .map(|(_, e)| e.clone())
            .collect(),
        direction: formation.direction,
    };

    let projectiles: Vec<Projectile> = projectiles
        .iter()
        .enumerate()
        .filter(|(i, _)| !spent_projectiles.contains(i))
        .map(|(_, p)| p.clone())
        .collect();

    // ── 4. Collision: enemies ↔ player / floor line ──────────────────────────
    // An enemy breaches by touching the player or by descending to the floor
    // line; the first breacher ends the matter, so a tick costs at most one
    // life.  Losing a life (but surviving) resets the formation; projectiles
    // and the player stay where they are.
    let player_rect = state.player.rect(config);
    let floor = config.floor_line();
    let breached = formation
        .members
        .iter()
        .any(|e| e.rect(config).intersects(&player_rect) || e.y >= floor);

    let mut lives = state.lives;
    let mut status = state.status;
    if breached {
        lives = lives.saturating_sub(1);
        if lives == 0 {
            debug!("final life lost at frame {}, score {}", frame, score);
            status = GameStatus::GameOver;
        } else {
            debug!("life lost at frame {}, {} remaining", frame, lives);
            formation = Formation::new(config);
        }
    }

    GameState {
        player: state.player.clone(),
        projectiles,
        formation,
        score,
        lives,
        status,
        frame,
        config: state.config.clone(),
    }
}

// ── Render contract ──────────────────────────────────────────────────────────

/// Flatten the state into the read-only view the display layer consumes.
pub fn snapshot(state: &GameState) -> FrameSnapshot {
    let config = &state.config;
    FrameSnapshot {
        player: state.player.rect(config),
        projectiles: state.projectiles.iter().map(|p| p.rect(config)).collect(),
        enemies: state
            .formation
            .members
            .iter()
            .map(|e| e.rect(config))
            .collect(),
        score: state.score,
        lives: state.lives,
        game_over: state.status == GameStatus::GameOver,
        world_width: config.screen_width,
        world_height: config.screen_height,
    }
}
