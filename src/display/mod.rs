/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only translates
/// state into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use crate::config::{HEIGHT, WIDTH};
use crate::entities::{Boss, GameState, GameStatus};
use crate::feed::Thumbnail;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::White;
const C_HUD_HEALTH: Color = Color::Green;
const C_DRONE: Color = Color::Cyan;
const C_ROTOR: Color = Color::Grey;
const C_ENEMY: Color = Color::Red;
const C_BOSS: Color = Color::Blue;
const C_BOSS_BAR: Color = Color::Red;
const C_BULLET_PLAYER: Color = Color::Yellow;
const C_BULLET_ENEMY: Color = Color::Magenta;
const C_FEED: Color = Color::DarkGrey;
const C_HINT: Color = Color::DarkGrey;

/// Cells in the boss health bar.
pub const BOSS_BAR_LEN: usize = 30;

const SHADES: [char; 5] = [' ', '░', '▒', '▓', '█'];

// ── Playfield → terminal mapping ─────────────────────────────────────────────

/// Terminal area the playfield is drawn into.
///
/// Layout: row 0 HUD, row 1 top border, rows 2..rows-2 playfield,
/// row rows-2 bottom border, row rows-1 controls hint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16) -> Self {
        Viewport { cols, rows }
    }

    fn inner_cols(&self) -> i32 {
        self.cols.saturating_sub(2) as i32
    }

    fn inner_rows(&self) -> i32 {
        self.rows.saturating_sub(4) as i32
    }

    /// Map playfield `x` onto a column, clamping to the playfield interior.
    fn col_clamped(&self, x: i32) -> u16 {
        let span = self.inner_cols().max(1);
        let c = x.clamp(0, WIDTH) * span / (WIDTH + 1);
        (1 + c) as u16
    }

    /// Map playfield `y` onto a row, clamping to the playfield interior.
    fn row_clamped(&self, y: i32) -> u16 {
        let span = self.inner_rows().max(1);
        let r = y.clamp(0, HEIGHT) * span / (HEIGHT + 1);
        (2 + r) as u16
    }

    /// Cell for a playfield point, or `None` when the point is off-field
    /// (enemies waiting above the top edge, a boss drifting sideways).
    pub fn to_cell(&self, x: i32, y: i32) -> Option<(u16, u16)> {
        if !(0..=WIDTH).contains(&x) || !(0..=HEIGHT).contains(&y) {
            return None;
        }
        if self.inner_cols() <= 0 || self.inner_rows() <= 0 {
            return None;
        }
        Some((self.col_clamped(x), self.row_clamped(y)))
    }
}

/// Filled cells of a `len`-cell bar showing `health` out of `max`.
pub fn health_bar_fill(health: i32, max: i32, len: usize) -> usize {
    if max <= 0 {
        return 0;
    }
    let h = health.clamp(0, max) as usize;
    len * h / max as usize
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    state: &GameState,
    view: Viewport,
    thumb: Option<&Thumbnail>,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, view)?;
    if let Some(t) = thumb {
        draw_feed(out, t, view)?;
    }
    draw_hud(out, state, view)?;

    if state.boss.active {
        draw_boss(out, &state.boss, view)?;
    }
    for enemy in &state.enemies {
        draw_marker(out, enemy.x, enemy.y, "●", C_ENEMY, view)?;
    }
    for b in &state.bullets {
        draw_marker(out, b.x, b.y, "•", C_BULLET_PLAYER, view)?;
    }
    for b in &state.enemy_bullets {
        draw_marker(out, b.x, b.y, "↓", C_BULLET_ENEMY, view)?;
    }

    draw_drone(out, state, view)?;
    draw_controls_hint(out, view)?;

    match state.status {
        GameStatus::Paused => draw_paused(out, view)?,
        GameStatus::GameOver => draw_game_over(out, state, view)?,
        _ => {}
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, view.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, view: Viewport) -> std::io::Result<()> {
    let w = view.cols as usize;
    let h = view.rows;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(view.cols.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState, view: Viewport) -> std::io::Result<()> {
    // Health — left
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_HEALTH))?;
    out.queue(Print(format!("Health: {}", state.health)))?;

    // Boss health bar — centre
    if state.boss.active {
        let fill = health_bar_fill(state.boss.health, state.boss.max_health, BOSS_BAR_LEN);
        let bar = format!(
            "BOSS [{}{}]",
            "█".repeat(fill),
            " ".repeat(BOSS_BAR_LEN - fill)
        );
        let bx = (view.cols / 2).saturating_sub(bar.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(bx, 0))?;
        out.queue(style::SetForegroundColor(C_BOSS_BAR))?;
        out.queue(Print(&bar))?;
    }

    // Score — right
    let score_text = format!("Score: {}", state.score);
    let rx = view
        .cols
        .saturating_sub(score_text.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(&score_text))?;

    Ok(())
}

// ── Feed inset ────────────────────────────────────────────────────────────────

fn draw_feed<W: Write>(out: &mut W, thumb: &Thumbnail, view: Viewport) -> std::io::Result<()> {
    // Skip when the inset would spill over the border.
    if thumb.cols as u16 + 2 >= view.cols || thumb.rows as u16 + 4 >= view.rows {
        return Ok(());
    }

    out.queue(style::SetForegroundColor(C_FEED))?;
    for row in 0..thumb.rows {
        let line: String = (0..thumb.cols)
            .map(|col| SHADES[thumb.at(col, row) as usize * SHADES.len() / 256])
            .collect();
        out.queue(cursor::MoveTo(1, 2 + row as u16))?;
        out.queue(Print(line))?;
    }
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_marker<W: Write>(
    out: &mut W,
    x: i32,
    y: i32,
    glyph: &str,
    color: Color,
    view: Viewport,
) -> std::io::Result<()> {
    if let Some((col, row)) = view.to_cell(x, y) {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(glyph))?;
    }
    Ok(())
}

fn draw_drone<W: Write>(out: &mut W, state: &GameState, view: Viewport) -> std::io::Result<()> {
    // Sprite (3 rows, 3 cols):
    //   \ /     ← rotors
    //    ◉      ← body
    //   / \     ← rotors
    let d = &state.drone;
    let Some((col, row)) = view.to_cell(d.x, d.y) else {
        return Ok(());
    };
    let left = col.saturating_sub(1).max(1);

    out.queue(style::SetForegroundColor(C_ROTOR))?;
    if row > 2 {
        out.queue(cursor::MoveTo(left, row - 1))?;
        out.queue(Print("\\ /"))?;
    }
    if row + 1 < view.rows.saturating_sub(2) {
        out.queue(cursor::MoveTo(left, row + 1))?;
        out.queue(Print("/ \\"))?;
    }

    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(C_DRONE))?;
    out.queue(Print("◉"))?;
    Ok(())
}

/// The boss is a 120×80 box; clip it to the playfield while it flies in.
fn draw_boss<W: Write>(out: &mut W, boss: &Boss, view: Viewport) -> std::io::Result<()> {
    if boss.y + 40 < 0 || boss.x + 60 < 0 || boss.x - 60 > WIDTH {
        return Ok(());
    }
    let (c0, c1) = (view.col_clamped(boss.x - 60), view.col_clamped(boss.x + 60));
    let (r0, r1) = (view.row_clamped(boss.y - 40), view.row_clamped(boss.y + 40));
    let fill = "▓".repeat((c1 - c0 + 1) as usize);

    out.queue(style::SetForegroundColor(C_BOSS))?;
    for row in r0..=r1 {
        out.queue(cursor::MoveTo(c0, row))?;
        out.queue(Print(&fill))?;
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, view: Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("W A S D : Move   Click / SPACE : Shoot   P : Pause   Q : Quit"))?;
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn draw_centered<W: Write>(
    out: &mut W,
    lines: &[(&str, Color)],
    view: Viewport,
) -> std::io::Result<()> {
    let cx = view.cols / 2;
    let start_row = (view.rows / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }
    Ok(())
}

fn draw_paused<W: Write>(out: &mut W, view: Viewport) -> std::io::Result<()> {
    draw_centered(
        out,
        &[
            ("PAUSED", Color::White),
            ("P - Resume", Color::DarkGrey),
        ],
        view,
    )
}

fn draw_game_over<W: Write>(out: &mut W, state: &GameState, view: Viewport) -> std::io::Result<()> {
    let score_line = format!("Final Score: {}", state.score);
    draw_centered(
        out,
        &[
            ("╔══════════════════╗", Color::Red),
            ("║    GAME  OVER    ║", Color::Red),
            ("╚══════════════════╝", Color::Red),
            (score_line.as_str(), Color::Yellow),
        ],
        view,
    )
}
