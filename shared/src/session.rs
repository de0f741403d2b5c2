use serde::{Deserialize, Serialize};

use crate::prize::Prize;

/// In-memory state of one hunt session. Lives exactly as long as the page;
/// nothing here is ever persisted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HuntSession {
    /// Discovered discount codes, in discovery order. Grows monotonically.
    found_codes: Vec<String>,
    /// The prize last revealed. Survives closing the dialog and is
    /// overwritten by the next reveal.
    pub current_prize: Option<Prize>,
    pub modal_open: bool,
}

impl HuntSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles a click on an egg: show the prize and record its code.
    /// Clicking an already-discovered egg changes nothing in the set.
    pub fn reveal(&mut self, prize: Prize) {
        if let Some(code) = &prize.code {
            if !self.has_found(code) {
                self.found_codes.push(code.clone());
                log::info!("discount discovered: {}", code);
            }
        }
        self.current_prize = Some(prize);
        self.modal_open = true;
    }

    /// Hides the dialog. The current prize is deliberately kept.
    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    pub fn has_found(&self, code: &str) -> bool {
        self.found_codes.iter().any(|c| c == code)
    }

    pub fn found_count(&self) -> usize {
        self.found_codes.len()
    }

    pub fn found_codes(&self) -> &[String] {
        &self.found_codes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SPOILED_MESSAGE;
    use crate::prize::{EggSize, Rarity};

    fn mug() -> Prize {
        Prize::discount("MUG10", "$10 off the perfect mug", Rarity::Common, EggSize::Medium)
    }

    #[test]
    fn test_reveal_records_code_and_opens_dialog() {
        let mut session = HuntSession::new();
        session.reveal(mug());

        assert!(session.modal_open);
        assert!(session.has_found("MUG10"));
        assert_eq!(session.found_count(), 1);
        assert_eq!(
            session.current_prize.as_ref().unwrap().value,
            "$10 off the perfect mug"
        );
    }

    #[test]
    fn test_repeat_reveal_is_idempotent_for_the_set() {
        let mut session = HuntSession::new();
        session.reveal(mug());
        session.close_modal();
        session.reveal(mug());

        assert_eq!(session.found_count(), 1);
    }

    #[test]
    fn test_spoiled_reveal_leaves_set_unchanged() {
        let mut session = HuntSession::new();
        session.reveal(Prize::spoiled(EggSize::Small));

        assert!(session.modal_open);
        assert_eq!(session.found_count(), 0);
        assert_eq!(session.current_prize.as_ref().unwrap().value, SPOILED_MESSAGE);
    }

    #[test]
    fn test_close_keeps_current_prize() {
        let mut session = HuntSession::new();
        session.reveal(mug());
        session.close_modal();

        assert!(!session.modal_open);
        assert!(session.current_prize.is_some());
    }

    #[test]
    fn test_next_reveal_overwrites_current_prize() {
        let mut session = HuntSession::new();
        session.reveal(mug());
        session.close_modal();
        session.reveal(Prize::spoiled(EggSize::Medium));

        assert!(session.current_prize.as_ref().unwrap().is_spoiled());
        assert_eq!(session.found_count(), 1);
    }
}
