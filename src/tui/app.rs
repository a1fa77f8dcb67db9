mod picker;
mod state;

pub use state::{AppState, HandDraft, InputAction, Slot, HAND_SIZE};
