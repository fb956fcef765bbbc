mod display;

use std::collections::HashMap;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal,
    ExecutableCommand,
};
use log::{error, info};

use invaders::compute::{apply_input, init_state, snapshot, tick};
use invaders::config::Config;
use invaders::entities::{GameState, GameStatus};
use invaders::input::{InputEvent, InputFrame};

const FRAME: Duration = Duration::from_micros(16_667); // 60 ticks/second

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so a window of 8 frames (≈133 ms) is
/// always refreshed before expiry.
const HOLD_WINDOW: u64 = 8;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

// ── Input assembly ────────────────────────────────────────────────────────────

/// Drain the event channel and fold everything into one `InputFrame`.
///
/// Discrete commands (fire, restart, quit) are taken from `Press` events
/// only, so holding Space yields exactly one shot per physical press.
/// Movement is level-triggered: the `key_frame` map records the last frame
/// each key was seen, and a key counts as held while that stamp is fresh.
///
/// Works on two classes of terminal:
/// * **Keyboard-enhancement capable** (kitty protocol): proper
///   `Press` / `Repeat` / `Release` events → keys are removed on release.
/// * **Classic terminals**: only `Press` events (OS key-repeat shows as
///   repeated `Press`).  Keys expire naturally after `HOLD_WINDOW` frames of
///   silence.
fn poll_input(
    rx: &mpsc::Receiver<Event>,
    key_frame: &mut HashMap<KeyCode, u64>,
    frame: u64,
) -> InputFrame {
    let mut events = Vec::new();

    while let Ok(Event::Key(KeyEvent { code, kind, modifiers, .. })) = rx.try_recv() {
        match kind {
            KeyEventKind::Press => {
                key_frame.insert(code, frame);
                match code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                        events.push(InputEvent::Quit);
                    }
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        events.push(InputEvent::Quit);
                    }
                    KeyCode::Char(' ') => events.push(InputEvent::Fire),
                    KeyCode::Char('r') | KeyCode::Char('R') => {
                        events.push(InputEvent::Restart);
                    }
                    _ => {}
                }
            }
            // Repeat: refresh timestamp so the key stays "held"
            KeyEventKind::Repeat => {
                key_frame.insert(code, frame);
            }
            // Release: remove key immediately (keyboard-enhancement path)
            KeyEventKind::Release => {
                key_frame.remove(&code);
            }
        }
    }

    let left = is_held(key_frame, &KeyCode::Left, frame)
        || is_held(key_frame, &KeyCode::Char('a'), frame)
        || is_held(key_frame, &KeyCode::Char('A'), frame);
    let right = is_held(key_frame, &KeyCode::Right, frame)
        || is_held(key_frame, &KeyCode::Char('d'), frame)
        || is_held(key_frame, &KeyCode::Char('D'), frame);

    InputFrame { left, right, events }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// One logical tick = poll input → simulate → render, paced to `FRAME`.
/// Returns once a quit event arrives, after finishing the current tick.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        let input = poll_input(rx, &mut key_frame, frame);
        let quit = input.wants_quit();

        let was_over = state.status == GameStatus::GameOver;
        *state = apply_input(state, &input);
        if was_over && state.status == GameStatus::Playing {
            info!("game restarted");
        }

        if state.status == GameStatus::Playing {
            *state = tick(state);
            if state.status == GameStatus::GameOver {
                info!("game over with score {}", state.score);
            }
        }

        display::render(out, &snapshot(state))?;

        if quit {
            info!("quit requested, final score {}", state.score);
            return Ok(());
        }

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    // Log to a file: stderr would be garbled by the raw-mode UI.
    let _ = simple_logging::log_to_file("invaders.log", log::LevelFilter::Info);
    info!("starting invaders");

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(e) => {
                error!("failed to read terminal event: {}", e);
                break;
            }
        }
    });

    let mut state = init_state(Config::default());
    let result = game_loop(&mut out, &mut state, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
