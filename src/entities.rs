/// Game entity types — position data plus bounding-box queries.
///
/// Entities store only their top-left position; widths, heights and speeds
/// all come from the shared [`Config`](crate::config::Config), so an entity's
/// rect is always asked for with the config in hand.

use crate::config::Config;
use crate::formation::Formation;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned bounding rectangle, top-left anchored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Strict overlap test — rectangles that merely share an edge do not
    /// intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}

// ── Entities ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Player {
    pub x: i32,
    pub y: i32,
}

impl Player {
    pub fn rect(&self, config: &Config) -> Rect {
        Rect {
            x: self.x,
            y: self.y,
            width: config.player_width,
            height: config.player_height,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Projectile {
    pub x: i32,
    pub y: i32,
}

impl Projectile {
    pub fn rect(&self, config: &Config) -> Rect {
        Rect {
            x: self.x,
            y: self.y,
            width: config.projectile_width,
            height: config.projectile_height,
        }
    }

    /// True once the projectile has left the top of the playfield.
    pub fn is_off_screen(&self) -> bool {
        self.y < 0
    }
}

/// One formation member.  Deliberately direction-less: the shared movement
/// direction lives once on the [`Formation`], which keeps the whole grid in
/// lock-step by construction.
#[derive(Clone, Debug)]
pub struct Enemy {
    pub x: i32,
    pub y: i32,
}

impl Enemy {
    pub fn rect(&self, config: &Config) -> Rect {
        Rect {
            x: self.x,
            y: self.y,
            width: config.enemy_width,
            height: config.enemy_height,
        }
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so the pure update functions in
/// [`compute`](crate::compute) can return a new copy without mutating the
/// original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub config: Config,
    pub player: Player,
    pub projectiles: Vec<Projectile>,
    pub formation: Formation,
    pub score: u32,
    pub lives: u32,
    pub status: GameStatus,
    pub frame: u64,
}

// ── Render contract ───────────────────────────────────────────────────────────

/// Read-only view handed to the display layer once per tick: plain rects and
/// counters, no entity types, no config.  The renderer scales `world_width` ×
/// `world_height` units onto its own grid.
#[derive(Clone, Debug)]
pub struct FrameSnapshot {
    pub player: Rect,
    pub projectiles: Vec<Rect>,
    pub enemies: Vec<Rect>,
    pub score: u32,
    pub lives: u32,
    pub game_over: bool,
    pub world_width: i32,
    pub world_height: i32,
}
