pub mod queue;

pub use queue::{Command, InputEvent, InputQueue};
