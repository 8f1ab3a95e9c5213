//! Input mapping
//!
//! Turns raw browser events into session commands. Jump debouncing is the
//! session's job; this layer only decides which command an event means.

use crate::sim::{MoveIntent, Session, SessionPhase};

/// Raw input, already stripped of DOM specifics
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// `KeyboardEvent.code`
    KeyDown(String),
    KeyUp(String),
    Touch,
    StartButton,
    PlayAgainButton,
}

/// What the session should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Carries the movement keys already held when the run begins
    Start(MoveIntent),
    Jump,
    Reset,
    Move(MoveIntent),
}

impl Command {
    /// Forward to the session at timestamp `now` (ms)
    pub fn apply(self, session: &mut Session, now: f64) {
        match self {
            Command::Start(intent) => {
                if session.start(now) {
                    session.set_move_intent(intent);
                }
            }
            Command::Jump => {
                session.jump();
            }
            Command::Reset => session.reset(),
            Command::Move(intent) => {
                session.set_move_intent(intent);
            }
        }
    }
}

/// Keys that jump (or start from the title screen)
pub fn is_action_key(code: &str) -> bool {
    matches!(code, "Space" | "ArrowUp")
}

fn is_left_key(code: &str) -> bool {
    matches!(code, "ArrowLeft" | "KeyA")
}

fn is_right_key(code: &str) -> bool {
    matches!(code, "ArrowRight" | "KeyD")
}

/// Whether the page should suppress the browser default (scrolling) for this key
pub fn should_prevent_default(code: &str) -> bool {
    is_action_key(code) || is_left_key(code) || is_right_key(code)
}

/// Tracks held movement keys between events
#[derive(Debug, Clone, Default)]
pub struct InputState {
    intent: MoveIntent,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intent(&self) -> MoveIntent {
        self.intent
    }

    /// Map one event in the given phase to a command, if any
    pub fn handle(&mut self, event: &InputEvent, phase: SessionPhase) -> Option<Command> {
        match event {
            InputEvent::KeyDown(code) if is_action_key(code) => self.primary_action(phase),
            InputEvent::Touch => self.primary_action(phase),
            InputEvent::KeyDown(code) | InputEvent::KeyUp(code) => {
                let held = matches!(event, InputEvent::KeyDown(_));
                let before = self.intent;
                if is_left_key(code) {
                    self.intent.left = held;
                } else if is_right_key(code) {
                    self.intent.right = held;
                }
                (self.intent != before).then_some(Command::Move(self.intent))
            }
            InputEvent::StartButton => {
                (phase != SessionPhase::Running).then_some(Command::Start(self.intent))
            }
            InputEvent::PlayAgainButton => {
                self.intent = MoveIntent::default();
                Some(Command::Reset)
            }
        }
    }

    /// Space/ArrowUp/touch: start from the title screen, jump while running,
    /// nothing on the game-over screen (that one has its own buttons)
    fn primary_action(&self, phase: SessionPhase) -> Option<Command> {
        match phase {
            SessionPhase::Idle => Some(Command::Start(self.intent)),
            SessionPhase::Running => Some(Command::Jump),
            SessionPhase::GameOver => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: &str) -> InputEvent {
        InputEvent::KeyDown(code.to_string())
    }

    #[test]
    fn test_primary_action_by_phase() {
        let mut input = InputState::new();
        assert_eq!(
            input.handle(&key("Space"), SessionPhase::Idle),
            Some(Command::Start(MoveIntent::default()))
        );
        assert_eq!(input.handle(&key("ArrowUp"), SessionPhase::Running), Some(Command::Jump));
        assert_eq!(input.handle(&InputEvent::Touch, SessionPhase::Running), Some(Command::Jump));
        assert_eq!(input.handle(&key("Space"), SessionPhase::GameOver), None);
        assert_eq!(input.handle(&key("KeyQ"), SessionPhase::Running), None);
    }

    #[test]
    fn test_buttons() {
        let mut input = InputState::new();
        assert_eq!(
            input.handle(&InputEvent::StartButton, SessionPhase::Idle),
            Some(Command::Start(MoveIntent::default()))
        );
        assert_eq!(input.handle(&InputEvent::StartButton, SessionPhase::Running), None);
        assert_eq!(
            input.handle(&InputEvent::PlayAgainButton, SessionPhase::GameOver),
            Some(Command::Reset)
        );
    }

    #[test]
    fn test_move_intents() {
        let mut input = InputState::new();
        let cmd = input.handle(&key("ArrowLeft"), SessionPhase::Running);
        assert_eq!(cmd, Some(Command::Move(MoveIntent { left: true, right: false })));

        // Key repeat does not produce a new command
        assert_eq!(input.handle(&key("ArrowLeft"), SessionPhase::Running), None);

        input.handle(&key("KeyD"), SessionPhase::Running);
        assert_eq!(input.intent(), MoveIntent { left: true, right: true });

        let cmd = input.handle(&InputEvent::KeyUp("ArrowLeft".into()), SessionPhase::Running);
        assert_eq!(cmd, Some(Command::Move(MoveIntent { left: false, right: true })));
    }

    #[test]
    fn test_apply_drives_session() {
        use crate::tuning::Tuning;

        let mut session = Session::new(Tuning::classic(), 1);
        let mut input = InputState::new();

        let cmd = input.handle(&key("Space"), session.phase()).unwrap();
        cmd.apply(&mut session, 0.0);
        assert_eq!(session.phase(), SessionPhase::Running);

        let cmd = input.handle(&key("Space"), session.phase()).unwrap();
        cmd.apply(&mut session, 16.0);
        assert!(session.state().actor.is_jumping);

        Command::Reset.apply(&mut session, 32.0);
        assert_eq!(session.phase(), SessionPhase::Idle);
    }

    #[test]
    fn test_held_keys_carry_into_new_run() {
        use crate::tuning::Tuning;

        let mut session = Session::new(Tuning::free_roam(), 1);
        let mut input = InputState::new();

        // Held on the title screen: tracked, but the idle session ignores it
        let cmd = input.handle(&key("ArrowRight"), session.phase()).unwrap();
        cmd.apply(&mut session, 0.0);
        assert_eq!(session.state().actor.intent, MoveIntent::default());

        let cmd = input.handle(&key("Space"), session.phase()).unwrap();
        assert_eq!(cmd, Command::Start(MoveIntent { left: false, right: true }));
        cmd.apply(&mut session, 0.0);

        // Auto-repeat produces nothing new, yet the dog still runs right
        assert_eq!(input.handle(&key("ArrowRight"), session.phase()), None);
        session.tick(16.0);
        session.tick(32.0);
        assert_eq!(session.state().actor.pos.x, crate::consts::ACTOR_START_X + 10.0);
    }

    #[test]
    fn test_prevent_default_keys() {
        assert!(should_prevent_default("Space"));
        assert!(should_prevent_default("ArrowRight"));
        assert!(!should_prevent_default("KeyQ"));
    }
}
