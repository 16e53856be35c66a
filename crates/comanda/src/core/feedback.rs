//! Guest feedback form.
//!
//! A comment is the only required field; name and star rating are
//! optional. Submission reports a [`FeedbackEntry`] once and locks the
//! form.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{SubmissionState, SubmitError, SubmitHandler, SubmitResult};

/// Star rating, one through five
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rating {
    /// One star
    One,
    /// Two stars
    Two,
    /// Three stars
    Three,
    /// Four stars
    Four,
    /// Five stars
    Five,
}

impl Rating {
    /// All ratings in ascending order
    pub const ALL: [Self; 5] = [Self::One, Self::Two, Self::Three, Self::Four, Self::Five];

    /// The rating as a number of stars
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
        }
    }

    /// Looks up a rating by its star count
    #[must_use]
    pub fn from_value(value: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.value() == value)
    }
}

/// The finalized value reported when feedback is submitted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    /// Guest name, if one was given
    pub name: Option<String>,
    /// Star rating, if one was picked
    pub rating: Option<Rating>,
    /// The comment, trimmed
    pub comment: String,
}

impl FeedbackEntry {
    /// Serializes the entry to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Feedback form state machine
pub struct FeedbackForm {
    name: String,
    comment: String,
    rating: Option<Rating>,
    state: SubmissionState,
    handler: Option<SubmitHandler<FeedbackEntry>>,
}

impl fmt::Debug for FeedbackForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeedbackForm")
            .field("name", &self.name)
            .field("comment", &self.comment)
            .field("rating", &self.rating)
            .field("state", &self.state)
            .field("handler", &self.handler.is_some())
            .finish()
    }
}

impl Default for FeedbackForm {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedbackForm {
    /// Creates an empty form
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: String::new(),
            comment: String::new(),
            rating: None,
            state: SubmissionState::Editing,
            handler: None,
        }
    }

    /// Registers the callback fired with the entry on submission
    pub fn on_submit<F>(&mut self, handler: F)
    where
        F: FnMut(&FeedbackEntry) + 'static,
    {
        self.handler = Some(Box::new(handler));
    }

    /// Current name entry
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current comment entry
    #[must_use]
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Current star rating, if picked
    #[must_use]
    pub const fn rating(&self) -> Option<Rating> {
        self.rating
    }

    /// Lifecycle state
    #[must_use]
    pub const fn state(&self) -> SubmissionState {
        self.state
    }

    /// Replaces the name entry. Ignored after submission.
    pub fn set_name(&mut self, text: &str) {
        if self.state.is_submitted() {
            return;
        }
        self.name = text.to_string();
    }

    /// Replaces the comment entry. Ignored after submission.
    pub fn set_comment(&mut self, text: &str) {
        if self.state.is_submitted() {
            return;
        }
        self.comment = text.to_string();
    }

    /// Picks a star rating; picking again overwrites. Ignored after submission.
    pub fn select_rating(&mut self, rating: Rating) {
        if self.state.is_submitted() {
            return;
        }
        self.rating = Some(rating);
    }

    /// Removes the star rating. Ignored after submission.
    pub fn clear_rating(&mut self) {
        if self.state.is_submitted() {
            return;
        }
        self.rating = None;
    }

    /// Whether a submission would currently be accepted
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.state.is_editing() && !self.comment.trim().is_empty()
    }

    /// Attempts to finalize the feedback.
    ///
    /// The comment must be non-blank after trimming; name and rating pass
    /// through as-is. On success the entry is reported once and the form
    /// locks; on refusal nothing changes.
    pub fn submit(&mut self) -> SubmitResult<FeedbackEntry> {
        if self.state.is_submitted() {
            return Err(SubmitError::AlreadySubmitted);
        }
        let comment = self.comment.trim();
        if comment.is_empty() {
            return Err(SubmitError::EmptyComment);
        }

        let name = self.name.trim();
        let entry = FeedbackEntry {
            name: (!name.is_empty()).then(|| name.to_string()),
            rating: self.rating,
            comment: comment.to_string(),
        };
        self.state = SubmissionState::Submitted;
        if let Some(handler) = self.handler.as_mut() {
            handler(&entry);
        }
        tracing::debug!(rating = ?entry.rating, "feedback submitted");
        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    // ===== Rating tests =====

    #[test]
    fn test_rating_values() {
        let values: Vec<u8> = Rating::ALL.iter().map(|r| r.value()).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_rating_from_value() {
        assert_eq!(Rating::from_value(3), Some(Rating::Three));
        assert_eq!(Rating::from_value(0), None);
        assert_eq!(Rating::from_value(6), None);
    }

    #[test]
    fn test_rating_ordering() {
        assert!(Rating::One < Rating::Five);
    }

    // ===== Form entry tests =====

    #[test]
    fn test_new_form_is_blank() {
        let form = FeedbackForm::new();
        assert!(form.name().is_empty());
        assert!(form.comment().is_empty());
        assert_eq!(form.rating(), None);
        assert!(form.state().is_editing());
        assert!(!form.can_submit());
    }

    #[test]
    fn test_default_matches_new() {
        let form = FeedbackForm::default();
        assert!(form.comment().is_empty());
    }

    #[test]
    fn test_set_fields() {
        let mut form = FeedbackForm::new();
        form.set_name("Ana");
        form.set_comment("Lovely dinner");
        form.select_rating(Rating::Five);
        assert_eq!(form.name(), "Ana");
        assert_eq!(form.comment(), "Lovely dinner");
        assert_eq!(form.rating(), Some(Rating::Five));
    }

    #[test]
    fn test_reselect_rating_overwrites() {
        let mut form = FeedbackForm::new();
        form.select_rating(Rating::Two);
        form.select_rating(Rating::Four);
        assert_eq!(form.rating(), Some(Rating::Four));
    }

    #[test]
    fn test_clear_rating() {
        let mut form = FeedbackForm::new();
        form.select_rating(Rating::Three);
        form.clear_rating();
        assert_eq!(form.rating(), None);
    }

    // ===== Submit tests =====

    #[test]
    fn test_submit_with_comment_only() {
        let mut form = FeedbackForm::new();
        form.set_comment("The risotto was perfect");
        let entry = form.submit().unwrap();
        assert_eq!(entry.comment, "The risotto was perfect");
        assert_eq!(entry.name, None);
        assert_eq!(entry.rating, None);
        assert!(form.state().is_submitted());
    }

    #[test]
    fn test_submit_trims_fields() {
        let mut form = FeedbackForm::new();
        form.set_name("  Luis ");
        form.set_comment("  Great service  ");
        let entry = form.submit().unwrap();
        assert_eq!(entry.name.as_deref(), Some("Luis"));
        assert_eq!(entry.comment, "Great service");
    }

    #[test]
    fn test_submit_blank_name_becomes_none() {
        let mut form = FeedbackForm::new();
        form.set_name("   ");
        form.set_comment("Good");
        let entry = form.submit().unwrap();
        assert_eq!(entry.name, None);
    }

    #[test]
    fn test_submit_refused_without_comment() {
        let mut form = FeedbackForm::new();
        form.set_name("Ana");
        form.select_rating(Rating::Five);
        assert_eq!(form.submit(), Err(SubmitError::EmptyComment));
        assert!(form.state().is_editing());
    }

    #[test]
    fn test_submit_refused_with_blank_comment() {
        let mut form = FeedbackForm::new();
        form.set_comment("   \t ");
        assert_eq!(form.submit(), Err(SubmitError::EmptyComment));
    }

    #[test]
    fn test_second_submit_refused() {
        let mut form = FeedbackForm::new();
        form.set_comment("Tasty");
        form.submit().unwrap();
        assert_eq!(form.submit(), Err(SubmitError::AlreadySubmitted));
    }

    // ===== Callback tests =====

    #[test]
    fn test_callback_fires_once_with_entry() {
        let seen: Rc<RefCell<Vec<FeedbackEntry>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut form = FeedbackForm::new();
        form.on_submit(move |entry| sink.borrow_mut().push(entry.clone()));
        form.set_comment("Encore");
        form.select_rating(Rating::Four);
        form.submit().unwrap();
        let _ = form.submit();

        let entries = seen.borrow();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].rating, Some(Rating::Four));
    }

    #[test]
    fn test_callback_not_invoked_on_refusal() {
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);

        let mut form = FeedbackForm::new();
        form.on_submit(move |_| *sink.borrow_mut() += 1);
        let _ = form.submit();
        assert_eq!(*count.borrow(), 0);
    }

    // ===== Post-submission tests =====

    #[test]
    fn test_edits_after_submit_ignored() {
        let mut form = FeedbackForm::new();
        form.set_comment("Final");
        form.submit().unwrap();

        form.set_comment("Changed my mind");
        form.set_name("Someone");
        form.select_rating(Rating::One);
        form.clear_rating();

        assert_eq!(form.comment(), "Final");
        assert!(form.name().is_empty());
        assert_eq!(form.rating(), None);
    }

    // ===== FeedbackEntry tests =====

    #[test]
    fn test_entry_to_json() {
        let entry = FeedbackEntry {
            name: Some("Ana".to_string()),
            rating: Some(Rating::Five),
            comment: "Wonderful".to_string(),
        };
        let json = entry.to_json().unwrap();
        assert!(json.contains("\"name\":\"Ana\""));
        assert!(json.contains("\"rating\":\"Five\""));
        assert!(json.contains("\"comment\":\"Wonderful\""));
    }

    #[test]
    fn test_entry_round_trip_json() {
        let entry = FeedbackEntry {
            name: None,
            rating: Some(Rating::Two),
            comment: "ok".to_string(),
        };
        let json = entry.to_json().unwrap();
        let restored: FeedbackEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, restored);
    }
}
