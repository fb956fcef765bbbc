/// World configuration — every magic number of the simulation in one
/// immutable struct, owned by the game state instead of floating around as
/// process-wide constants.
///
/// Distances are world units, not terminal cells; the display layer scales
/// them to whatever grid it draws on.

#[derive(Clone, Debug)]
pub struct Config {
    pub screen_width: i32,
    pub screen_height: i32,
    pub player_width: i32,
    pub player_height: i32,
    /// Horizontal units the player moves per tick while a key is held.
    pub player_speed: i32,
    pub projectile_width: i32,
    pub projectile_height: i32,
    /// Upward units a projectile travels per tick.
    pub projectile_speed: i32,
    pub enemy_width: i32,
    pub enemy_height: i32,
    /// Horizontal units the formation shifts per tick.
    pub enemy_speed: i32,
    /// Vertical units the whole formation drops when it reaches an edge.
    pub drop_distance: i32,
    pub formation_rows: i32,
    pub formation_cols: i32,
    /// Enemies whose y reaches `screen_height - floor_margin` breach the
    /// floor line and cost a life even without touching the player.
    pub floor_margin: i32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            screen_width: 800,
            screen_height: 600,
            player_width: 50,
            player_height: 40,
            player_speed: 5,
            projectile_width: 5,
            projectile_height: 10,
            projectile_speed: 7,
            enemy_width: 40,
            enemy_height: 30,
            enemy_speed: 1,
            drop_distance: 20,
            formation_rows: 5,
            formation_cols: 10,
            floor_margin: 100,
        }
    }
}

impl Config {
    /// Top-left corner of the player's spawn position (horizontally centred,
    /// a fixed distance above the bottom edge).
    pub fn player_spawn(&self) -> (i32, i32) {
        (
            self.screen_width / 2 - self.player_width / 2,
            self.screen_height - 80,
        )
    }

    /// Row below which a descending enemy counts as having breached the floor.
    pub fn floor_line(&self) -> i32 {
        self.screen_height - self.floor_margin
    }
}
