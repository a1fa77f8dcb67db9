use crate::cards::Card;
use crate::showdown::{HandRequest, PlayerHand, Verdict};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::{Duration, Instant};

/// Cards per hand.
pub const HAND_SIZE: usize = 5;

/// A hand being assembled in the picker. Empty slots are `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandDraft {
    pub player: String,
    pub cards: [Option<Card>; HAND_SIZE],
}

impl HandDraft {
    pub fn new(player: impl Into<String>) -> Self {
        Self { player: player.into(), cards: [None; HAND_SIZE] }
    }

    pub fn is_complete(&self) -> bool {
        self.cards.iter().all(Option::is_some)
    }

    /// Cards currently placed, in slot order.
    pub fn placed(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().flatten().copied()
    }

    pub fn to_player_hand(&self) -> PlayerHand {
        PlayerHand::new(self.player.clone(), self.placed().map(|c| c.to_string()))
    }
}

/// A card slot: which hand (0 or 1) and which position (0..5).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub hand: usize,
    pub card: usize,
}

impl Slot {
    const COUNT: usize = 2 * HAND_SIZE;

    fn index(self) -> usize {
        self.hand * HAND_SIZE + self.card
    }

    fn from_index(i: usize) -> Self {
        let i = i % Self::COUNT;
        Self { hand: i / HAND_SIZE, card: i % HAND_SIZE }
    }

    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub fn prev(self) -> Self {
        Self::from_index(self.index() + Self::COUNT - 1)
    }
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    SlotNext,
    SlotPrev,
    SlotSelect(usize),
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    PlaceCard,
    ClearSlot,
    RandomizeHand,
    ResetHand,
    NameOpen,
    NameChar(char),
    NameBackspace,
    NameSubmit,
    NameCancel,
    Evaluate,
    DismissVerdict,
    ToggleHelp,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub hands: [HandDraft; 2],
    /// Slot the next picked card goes into.
    pub slot: Slot,
    /// Picker cursor as (rank column, suit row).
    pub cursor: (usize, usize),
    pub(crate) rng: ChaCha8Rng,
    verdict: Option<Verdict>,
    help_open: bool,
    name_entry: Option<String>,
    error: Option<String>,
    error_at: Option<Instant>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new("Player 1", "Player 2", rand::random())
    }
}

impl AppState {
    pub const NAME_MAX_LEN: usize = 24;
    const ERROR_TTL: Duration = Duration::from_secs(5);

    pub fn new(player1: impl Into<String>, player2: impl Into<String>, seed: u64) -> Self {
        Self {
            hands: [HandDraft::new(player1), HandDraft::new(player2)],
            slot: Slot { hand: 0, card: 0 },
            cursor: (0, 0),
            rng: ChaCha8Rng::seed_from_u64(seed),
            verdict: None,
            help_open: false,
            name_entry: None,
            error: None,
            error_at: None,
        }
    }

    pub fn verdict(&self) -> Option<&Verdict> {
        self.verdict.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn name_entry_active(&self) -> bool {
        self.name_entry.is_some()
    }

    pub fn name_entry_text(&self) -> Option<&str> {
        self.name_entry.as_deref()
    }

    /// Both hands have all five slots filled.
    pub fn is_ready(&self) -> bool {
        self.hands.iter().all(HandDraft::is_complete)
    }

    pub(crate) fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.error_at = Some(Instant::now());
    }

    pub(crate) fn clear_error(&mut self) {
        self.error = None;
        self.error_at = None;
    }

    fn open_name_entry(&mut self) -> bool {
        self.name_entry = Some(self.hands[self.slot.hand].player.clone());
        true
    }

    fn name_entry_push(&mut self, c: char) {
        if let Some(buf) = self.name_entry.as_mut() {
            if buf.chars().count() < Self::NAME_MAX_LEN && !c.is_control() {
                buf.push(c);
            }
        }
    }

    fn name_entry_backspace(&mut self) {
        if let Some(buf) = self.name_entry.as_mut() {
            buf.pop();
        }
    }

    fn name_entry_submit(&mut self) -> bool {
        let Some(name) = self.name_entry.take() else {
            return false;
        };
        self.hands[self.slot.hand].player = name;
        true
    }

    /// Submit both hands for a verdict.
    pub fn evaluate(&mut self) -> bool {
        self.verdict = None;
        if !self.is_ready() {
            self.set_error("Fill all ten card slots before evaluating");
            return false;
        }
        let request =
            HandRequest::new(self.hands[0].to_player_hand(), self.hands[1].to_player_hand());
        match request.evaluate() {
            Ok(verdict) => {
                self.clear_error();
                self.verdict = Some(verdict);
                true
            }
            Err(err) => {
                self.set_error(err.public_message());
                false
            }
        }
    }

    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleHelp => {
                self.help_open = !self.help_open;
                false
            }
            InputAction::DismissVerdict => self.verdict.take().is_some(),
            InputAction::SlotNext => {
                self.slot = self.slot.next();
                false
            }
            InputAction::SlotPrev => {
                self.slot = self.slot.prev();
                false
            }
            InputAction::SlotSelect(card) => {
                if card < HAND_SIZE {
                    self.slot.card = card;
                }
                false
            }
            InputAction::CursorUp => {
                self.move_cursor(0, -1);
                false
            }
            InputAction::CursorDown => {
                self.move_cursor(0, 1);
                false
            }
            InputAction::CursorLeft => {
                self.move_cursor(-1, 0);
                false
            }
            InputAction::CursorRight => {
                self.move_cursor(1, 0);
                false
            }
            InputAction::PlaceCard => self.place_card(),
            InputAction::ClearSlot => self.clear_slot(),
            InputAction::RandomizeHand => self.randomize_hand(self.slot.hand),
            InputAction::ResetHand => {
                self.reset_hand(self.slot.hand);
                true
            }
            InputAction::NameOpen => self.open_name_entry(),
            InputAction::NameChar(c) => {
                self.name_entry_push(c);
                false
            }
            InputAction::NameBackspace => {
                self.name_entry_backspace();
                false
            }
            InputAction::NameSubmit => self.name_entry_submit(),
            InputAction::NameCancel => {
                self.name_entry = None;
                false
            }
            InputAction::Evaluate => self.evaluate(),
        }
    }

    /// Expire stale error messages.
    pub fn on_tick(&mut self) {
        if let Some(at) = self.error_at {
            if at.elapsed() >= Self::ERROR_TTL {
                self.clear_error();
            }
        }
    }
}
