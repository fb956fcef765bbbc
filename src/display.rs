/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and the per-tick `FrameSnapshot`.
/// No game logic is performed; this module only scales world-unit rectangles
/// onto the terminal cell grid and translates them into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use invaders::entities::{FrameSnapshot, Rect};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LIVES: Color = Color::Red;
const C_PLAYER: Color = Color::Green;
const C_ENEMY: Color = Color::Red;
const C_PROJECTILE: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;

// ── World → cell scaling ──────────────────────────────────────────────────────

/// Maps world coordinates onto the playfield cells inside the border.
struct CellMap {
    term_width: u16,
    term_height: u16,
    world_width: i32,
    world_height: i32,
}

impl CellMap {
    fn new(term_width: u16, term_height: u16, snap: &FrameSnapshot) -> CellMap {
        CellMap {
            term_width,
            term_height,
            world_width: snap.world_width.max(1),
            world_height: snap.world_height.max(1),
        }
    }

    /// Playfield interior: columns 1..width-1, rows 2..height-2.
    fn play_cols(&self) -> i32 {
        i32::from(self.term_width).saturating_sub(2).max(1)
    }

    fn play_rows(&self) -> i32 {
        i32::from(self.term_height).saturating_sub(4).max(1)
    }

    /// Top-left cell of a world rect, clamped into the playfield.
    fn cell(&self, rect: &Rect) -> (u16, u16) {
        let max_col = i32::from(self.term_width).saturating_sub(2).max(1);
        let max_row = i32::from(self.term_height).saturating_sub(3).max(2);
        let col = 1 + (rect.x.max(0) * self.play_cols()) / self.world_width;
        let row = 2 + (rect.y.max(0) * self.play_rows()) / self.world_height;
        (col.clamp(1, max_col) as u16, row.clamp(2, max_row) as u16)
    }

    /// Width of a world rect in cells, at least one.
    fn cell_width(&self, rect: &Rect) -> u16 {
        ((rect.width * self.play_cols()) / self.world_width).max(1) as u16
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, snap: &FrameSnapshot) -> std::io::Result<()> {
    let (term_width, term_height) = terminal::size()?;
    let map = CellMap::new(term_width, term_height, snap);

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, term_width, term_height)?;
    draw_hud(out, term_width, snap)?;

    for enemy in &snap.enemies {
        draw_span(out, &map, enemy, '▼', C_ENEMY)?;
    }
    for projectile in &snap.projectiles {
        draw_span(out, &map, projectile, '║', C_PROJECTILE)?;
    }
    draw_span(out, &map, &snap.player, '█', C_PLAYER)?;

    draw_controls_hint(out, term_height)?;

    if snap.game_over {
        draw_game_over(out, term_width, term_height, snap.score)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, term_height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, width: u16, height: u16) -> std::io::Result<()> {
    let w = width as usize;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    // Row 1 — top bar
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    // Row h-2 — bottom bar
    out.queue(cursor::MoveTo(0, height.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    // Side walls
    for row in 2..height.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, width: u16, snap: &FrameSnapshot) -> std::io::Result<()> {
    // Score — left
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score: {}", snap.score)))?;

    // Lives — right
    let lives_str = format!("Lives: {}", snap.lives);
    let rx = width.saturating_sub(lives_str.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(&lives_str))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

/// Draw one world rect as a horizontal run of `glyph` at its scaled cell.
fn draw_span<W: Write>(
    out: &mut W,
    map: &CellMap,
    rect: &Rect,
    glyph: char,
    color: Color,
) -> std::io::Result<()> {
    let (col, row) = map.cell(rect);
    // Keep the run inside the right border.
    let room = map.term_width.saturating_sub(1).saturating_sub(col).max(1);
    let span = map.cell_width(rect).min(room);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(glyph.to_string().repeat(span as usize)))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, height: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   SPACE : Shoot   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(
    out: &mut W,
    width: u16,
    height: u16,
    score: u32,
) -> std::io::Result<()> {
    let score_line = format!("Final Score: {:>6}", score);

    let lines: &[(&str, Color)] = &[
        ("╔════════════════════╗", Color::Red),
        ("║     GAME OVER!     ║", Color::Red),
        ("╚════════════════════╝", Color::Red),
    ];

    let cx = width / 2;
    let total_rows = lines.len() + 2; // box + score + hint
    let start_row = (height / 2).saturating_sub(total_rows as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    let score_row = start_row + lines.len() as u16;
    let col = cx.saturating_sub(score_line.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, score_row))?;
    out.queue(style::SetForegroundColor(Color::Yellow))?;
    out.queue(Print(&score_line))?;

    let hint = "Press R to restart   Q - Quit";
    let hint_row = score_row + 1;
    let col = cx.saturating_sub(hint.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, hint_row))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print(hint))?;

    Ok(())
}
