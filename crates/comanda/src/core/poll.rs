//! Guest poll voting.
//!
//! A [`Poll`] shows a question with a fixed set of options. Guests pick
//! exactly one, submit, and the chosen tally bumps by one. Results stay
//! hidden until the vote is cast.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{SubmissionState, SubmitError, SubmitHandler, SubmitResult};

/// One answer a guest can pick
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollOption {
    /// Stable identifier
    pub id: u32,
    /// Text shown next to the option
    pub label: String,
    /// Votes recorded so far
    pub votes: u32,
}

impl PollOption {
    /// Creates an option with an existing tally
    #[must_use]
    pub fn new(id: u32, label: &str, votes: u32) -> Self {
        Self {
            id,
            label: label.to_string(),
            votes,
        }
    }
}

/// The vote handed to the submit handler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ballot {
    /// Id of the chosen option
    pub option_id: u32,
    /// Label of the chosen option
    pub label: String,
}

impl Ballot {
    /// Serializes the ballot to JSON
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Single-choice poll with a one-shot vote
pub struct Poll {
    question: String,
    options: Vec<PollOption>,
    selected: Option<u32>,
    state: SubmissionState,
    handler: Option<SubmitHandler<Ballot>>,
}

impl fmt::Debug for Poll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Poll")
            .field("question", &self.question)
            .field("options", &self.options)
            .field("selected", &self.selected)
            .field("state", &self.state)
            .field("handler", &self.handler.is_some())
            .finish()
    }
}

impl Poll {
    /// Creates a poll over the given options
    #[must_use]
    pub fn new(question: &str, options: Vec<PollOption>) -> Self {
        Self {
            question: question.to_string(),
            options,
            selected: None,
            state: SubmissionState::Editing,
            handler: None,
        }
    }

    /// The poll the demo application ships with
    #[must_use]
    pub fn sample() -> Self {
        Self::new(
            "Which dessert should join the menu next?",
            vec![
                PollOption::new(1, "Churros with dark chocolate", 12),
                PollOption::new(2, "Key lime pie", 9),
                PollOption::new(3, "Affogato", 17),
            ],
        )
    }

    /// Registers a handler invoked once when the vote is cast
    pub fn on_submit<F>(&mut self, handler: F)
    where
        F: FnMut(&Ballot) + 'static,
    {
        self.handler = Some(Box::new(handler));
    }

    /// The question being asked
    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    /// All options, with their current tallies
    #[must_use]
    pub fn options(&self) -> &[PollOption] {
        &self.options
    }

    /// Id of the currently picked option, if any
    #[must_use]
    pub const fn selected(&self) -> Option<u32> {
        self.selected
    }

    /// Current submission state
    #[must_use]
    pub const fn state(&self) -> SubmissionState {
        self.state
    }

    /// Tally for one option, zero for unknown ids
    #[must_use]
    pub fn votes_for(&self, option_id: u32) -> u32 {
        self.options
            .iter()
            .find(|o| o.id == option_id)
            .map_or(0, |o| o.votes)
    }

    /// Sum of all tallies
    #[must_use]
    pub fn total_votes(&self) -> u32 {
        self.options.iter().map(|o| o.votes).sum()
    }

    /// Whether the poll accepts a submit right now
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.state.is_editing() && self.selected.is_some()
    }

    /// Picks an option.
    ///
    /// Picking again moves the selection. Unknown ids and post-submit
    /// picks are ignored.
    pub fn select(&mut self, option_id: u32) {
        if self.state.is_submitted() {
            return;
        }
        if self.options.iter().any(|o| o.id == option_id) {
            self.selected = Some(option_id);
        }
    }

    /// Casts the vote.
    ///
    /// Requires a selection. On success the chosen tally increments,
    /// the handler receives the ballot exactly once, and the poll
    /// freezes.
    ///
    /// # Errors
    /// Returns [`SubmitError::AlreadySubmitted`] after a successful
    /// vote, or [`SubmitError::NoSelection`] while nothing is picked.
    pub fn submit(&mut self) -> SubmitResult<Ballot> {
        if self.state.is_submitted() {
            return Err(SubmitError::AlreadySubmitted);
        }
        let Some(option_id) = self.selected else {
            return Err(SubmitError::NoSelection);
        };
        let Some(option) = self.options.iter_mut().find(|o| o.id == option_id) else {
            return Err(SubmitError::NoSelection);
        };
        option.votes += 1;
        let ballot = Ballot {
            option_id: option.id,
            label: option.label.clone(),
        };
        self.state = SubmissionState::Submitted;
        if let Some(handler) = self.handler.as_mut() {
            handler(&ballot);
        }
        tracing::debug!(option = ballot.option_id, "ballot cast");
        Ok(ballot)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    // ===== Selection tests =====

    #[test]
    fn test_new_poll_has_no_selection() {
        let poll = Poll::sample();
        assert_eq!(poll.selected(), None);
        assert!(!poll.can_submit());
    }

    #[test]
    fn test_select_sets_choice() {
        let mut poll = Poll::sample();
        poll.select(2);
        assert_eq!(poll.selected(), Some(2));
        assert!(poll.can_submit());
    }

    #[test]
    fn test_reselect_moves_choice() {
        let mut poll = Poll::sample();
        poll.select(1);
        poll.select(3);
        assert_eq!(poll.selected(), Some(3));
    }

    #[test]
    fn test_select_unknown_id_ignored() {
        let mut poll = Poll::sample();
        poll.select(99);
        assert_eq!(poll.selected(), None);
    }

    // ===== Tally tests =====

    #[test]
    fn test_sample_tallies() {
        let poll = Poll::sample();
        assert_eq!(poll.votes_for(1), 12);
        assert_eq!(poll.votes_for(3), 17);
        assert_eq!(poll.total_votes(), 38);
    }

    #[test]
    fn test_votes_for_unknown_id_is_zero() {
        let poll = Poll::sample();
        assert_eq!(poll.votes_for(99), 0);
    }

    // ===== Submit tests =====

    #[test]
    fn test_submit_without_selection_refused() {
        let mut poll = Poll::sample();
        assert_eq!(poll.submit(), Err(SubmitError::NoSelection));
        assert_eq!(poll.state(), SubmissionState::Editing);
        assert_eq!(poll.total_votes(), 38);
    }

    #[test]
    fn test_submit_bumps_chosen_tally() {
        let mut poll = Poll::sample();
        poll.select(2);
        let ballot = poll.submit().unwrap();
        assert_eq!(ballot.option_id, 2);
        assert_eq!(ballot.label, "Key lime pie");
        assert_eq!(poll.votes_for(2), 10);
        assert_eq!(poll.total_votes(), 39);
        assert_eq!(poll.state(), SubmissionState::Submitted);
    }

    #[test]
    fn test_submit_invokes_handler_once() {
        let seen: Rc<RefCell<Vec<u32>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut poll = Poll::sample();
        poll.on_submit(move |ballot| sink.borrow_mut().push(ballot.option_id));
        poll.select(1);
        poll.submit().unwrap();
        assert_eq!(poll.submit(), Err(SubmitError::AlreadySubmitted));
        assert_eq!(*seen.borrow(), vec![1]);
    }

    #[test]
    fn test_no_handler_call_on_refusal() {
        let count = Rc::new(RefCell::new(0_u32));
        let sink = Rc::clone(&count);
        let mut poll = Poll::sample();
        poll.on_submit(move |_| *sink.borrow_mut() += 1);
        assert!(poll.submit().is_err());
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn test_vote_is_one_shot() {
        let mut poll = Poll::sample();
        poll.select(3);
        poll.submit().unwrap();
        poll.select(1);
        assert_eq!(poll.selected(), Some(3));
        assert_eq!(poll.submit(), Err(SubmitError::AlreadySubmitted));
        assert_eq!(poll.votes_for(3), 18);
        assert_eq!(poll.votes_for(1), 12);
    }

    // ===== Ballot serialization tests =====

    #[test]
    fn test_ballot_to_json() {
        let ballot = Ballot {
            option_id: 3,
            label: "Affogato".to_string(),
        };
        let json = ballot.to_json().unwrap();
        assert!(json.contains("\"option_id\":3"));
        assert!(json.contains("\"label\":\"Affogato\""));
    }
}
