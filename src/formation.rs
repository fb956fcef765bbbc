/// The enemy formation — a deterministic grid that marches sideways as one
/// body, drops a rank when it reaches an edge, and regenerates from scratch
/// on a wave clear or a lost life.
///
/// Direction is a single formation-level field.  The lock-step invariant
/// ("every enemy moves the same way on the same tick") therefore cannot be
/// violated by a stray per-enemy write; there is nothing per-enemy to write.

use crate::config::Config;
use crate::entities::Enemy;

/// Grid horizontal pitch in world units (enemy width 40 + 20 gap).
const COL_PITCH: i32 = 60;
/// Grid vertical pitch in world units (enemy height 30 + 20 gap).
const ROW_PITCH: i32 = 50;
/// Top-left slot of the grid.
const GRID_ORIGIN_X: i32 = 50;
const GRID_ORIGIN_Y: i32 = 50;

#[derive(Clone, Debug)]
pub struct Formation {
    pub members: Vec<Enemy>,
    /// +1 marching right, -1 marching left.  Shared by every member.
    pub direction: i32,
}

impl Formation {
    /// Build the full grid at its canonical slots, marching right.
    pub fn new(config: &Config) -> Formation {
        let mut members = Vec::with_capacity(
            (config.formation_rows * config.formation_cols) as usize,
        );
        for row in 0..config.formation_rows {
            for col in 0..config.formation_cols {
                members.push(Enemy {
                    x: col * COL_PITCH + GRID_ORIGIN_X,
                    y: row * ROW_PITCH + GRID_ORIGIN_Y,
                });
            }
        }
        Formation {
            members,
            direction: 1,
        }
    }

    /// One movement step: shift every member sideways, then — if any member
    /// ended on or past an edge — drop the whole grid one rank and reverse.
    ///
    /// The edge predicate is computed over the fully-moved set before any
    /// drop is applied, so the drop-and-flip is a single atomic event: either
    /// every member drops this tick or none does.
    pub fn advance(&self, config: &Config) -> Formation {
        let step = config.enemy_speed * self.direction;
        let mut members: Vec<Enemy> = self
            .members
            .iter()
            .map(|e| Enemy {
                x: e.x + step,
                y: e.y,
            })
            .collect();

        let hit_edge = members
            .iter()
            .any(|e| e.x <= 0 || e.x >= config.screen_width - config.enemy_width);

        let direction = if hit_edge {
            for enemy in &mut members {
                enemy.y += config.drop_distance;
            }
            -self.direction
        } else {
            self.direction
        };

        Formation { members, direction }
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }
}
