/// Player commands. The host maps keys to command codes; nothing here knows about keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    MoveForward,
    MoveBackward,
    RotateLeft,
    RotateRight,
    Restart,
    ToggleHitboxes,
}

impl Command {
    pub const ALL: [Command; 6] = [
        Command::MoveForward,
        Command::MoveBackward,
        Command::RotateLeft,
        Command::RotateRight,
        Command::Restart,
        Command::ToggleHitboxes,
    ];

    /// Decode a host command code. Unknown codes yield `None`.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Command::MoveForward),
            1 => Some(Command::MoveBackward),
            2 => Some(Command::RotateLeft),
            3 => Some(Command::RotateRight),
            4 => Some(Command::Restart),
            5 => Some(Command::ToggleHitboxes),
            _ => None,
        }
    }

    pub fn code(self) -> u32 {
        match self {
            Command::MoveForward => 0,
            Command::MoveBackward => 1,
            Command::RotateLeft => 2,
            Command::RotateRight => 3,
            Command::Restart => 4,
            Command::ToggleHitboxes => 5,
        }
    }

    /// Movement commands act every step while held; the rest act once per press.
    pub fn is_held(self) -> bool {
        matches!(
            self,
            Command::MoveForward | Command::MoveBackward | Command::RotateLeft | Command::RotateRight
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Pressed(Command),
    Released(Command),
}

/// A queue of input events.
/// The host writes events into the queue; the simulation reads and drains them each frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Push a press for a raw command code. Returns false for unknown codes.
    pub fn press_code(&mut self, code: u32) -> bool {
        match Command::from_code(code) {
            Some(cmd) => {
                self.push(InputEvent::Pressed(cmd));
                true
            }
            None => false,
        }
    }

    /// Push a release for a raw command code. Returns false for unknown codes.
    pub fn release_code(&mut self, code: u32) -> bool {
        match Command::from_code(code) {
            Some(cmd) => {
                self.push(InputEvent::Released(cmd));
                true
            }
            None => false,
        }
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
