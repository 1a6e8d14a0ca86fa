use serde::Deserialize;

/// Discrete input delivered to the player for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// New horizontal axis value, conventionally in [-1, 1].
    Move(f32),
    Jump,
    ToggleSprint,
    InvertGravity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputAction {
    Move,
    Jump,
    ToggleSprint,
    InvertGravity,
}

/// One timed entry of an input script, as written in the playground file:
///
/// ```toml
/// [[input]]
/// at = 0.5
/// action = "move"
/// value = 1.0
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ScriptedInput {
    /// Seconds since the run started.
    pub at: f32,
    pub action: InputAction,
    /// Axis value for `move`; ignored otherwise.
    #[serde(default)]
    pub value: f32,
}

impl ScriptedInput {
    pub fn new(at: f32, action: InputAction, value: f32) -> Self {
        Self { at, action, value }
    }

    pub fn event(&self) -> InputEvent {
        match self.action {
            InputAction::Move => InputEvent::Move(self.value),
            InputAction::Jump => InputEvent::Jump,
            InputAction::ToggleSprint => InputEvent::ToggleSprint,
            InputAction::InvertGravity => InputEvent::InvertGravity,
        }
    }
}

/// Time-ordered input timeline standing in for a keyboard.
#[derive(Debug, Clone, Default)]
pub struct InputScript {
    entries: Vec<ScriptedInput>,
    cursor: usize,
}

impl InputScript {
    /// Entries are sorted by time; equal times keep file order.
    pub fn new(mut entries: Vec<ScriptedInput>) -> Self {
        entries.sort_by(|a, b| a.at.total_cmp(&b.at));
        Self { entries, cursor: 0 }
    }

    /// Built-in run for the playground scene: hop on the ledge, buffer a
    /// jump on the way down, then sprint over the jump pad into the gravity
    /// flipper and walk back along the ceiling.
    pub fn playground() -> Self {
        use InputAction::*;
        Self::new(vec![
            ScriptedInput::new(0.5, Move, 1.0),
            ScriptedInput::new(1.0, Jump, 0.0),
            ScriptedInput::new(1.45, Jump, 0.0),
            ScriptedInput::new(2.2, ToggleSprint, 0.0),
            ScriptedInput::new(6.0, Move, -1.0),
            ScriptedInput::new(7.0, Move, 0.0),
        ])
    }

    /// Pop every entry due at or before `now`.
    pub fn due(&mut self, now: f32) -> impl Iterator<Item = InputEvent> + '_ {
        let start = self.cursor;
        while self.cursor < self.entries.len() && self.entries[self.cursor].at <= now {
            self.cursor += 1;
        }
        self.entries[start..self.cursor].iter().map(ScriptedInput::event)
    }
}

/// Input collected for the current frame.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub events: Vec<InputEvent>,
    pub move_axis: f32,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, script: &mut InputScript, now: f32) {
        self.events.clear();
        for event in script.due(now) {
            if let InputEvent::Move(axis) = event {
                self.move_axis = axis;
            }
            self.events.push(event);
        }
    }
}
