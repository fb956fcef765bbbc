/// The adapter→core input contract.
///
/// Two channels, kept distinct on purpose: movement is level-triggered (a
/// held-key snapshot, re-read every tick) while fire/restart/quit are
/// edge-triggered (discrete events, each delivered exactly once).  The core
/// never sees physical key codes.

/// A discrete, one-shot command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// Spawn one projectile.  One event per key press — auto-repeat must not
    /// produce a stream of these.
    Fire,
    /// Restart the game.  Only honoured while the game is over.
    Restart,
    /// End the process.  Handled by the adapter's loop, ignored by the core.
    Quit,
}

/// Everything the core needs to know about input for one tick.
#[derive(Clone, Debug, Default)]
pub struct InputFrame {
    /// Left movement key currently held.
    pub left: bool,
    /// Right movement key currently held.
    pub right: bool,
    /// Discrete events that arrived since the previous tick, in order.
    pub events: Vec<InputEvent>,
}

impl InputFrame {
    /// A frame with nothing held and nothing pressed.
    pub fn idle() -> InputFrame {
        InputFrame::default()
    }

    pub fn wants_quit(&self) -> bool {
        self.events.contains(&InputEvent::Quit)
    }
}
