//! Headless component cores.
//!
//! Every submitting component follows the same contract: it starts in
//! [`SubmissionState::Editing`], collects transient entry state, and on a
//! valid [`submit`] builds its finalized value, reports it through the
//! registered callback exactly once, and moves irreversibly to
//! [`SubmissionState::Submitted`]. A refused submission is a strict no-op.
//!
//! [`submit`]: tip::TipCalculator::submit

pub mod feedback;
pub mod menu;
pub mod money;
pub mod order;
pub mod poll;
pub mod tip;

pub use feedback::{FeedbackEntry, FeedbackForm, Rating};
pub use menu::{Menu, MenuCategory, MenuItem};
pub use order::{OrderLine, OrderPad, OrderTicket};
pub use poll::{Ballot, Poll, PollOption};
pub use tip::{TipCalculator, TipMode, TipPercent, TipReceipt};

use thiserror::Error;

/// Result type for submission attempts
pub type SubmitResult<T> = Result<T, SubmitError>;

/// Callback invoked with the finalized value when a component submits.
///
/// Handlers are plain boxed closures; the components run on a single
/// thread, so no `Send` bound is required and tests can capture an
/// `Rc<RefCell<..>>` to observe invocations.
pub type SubmitHandler<T> = Box<dyn FnMut(&T)>;

/// Lifecycle of a submitting component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    /// Entry state: fields accept changes, submit is available
    #[default]
    Editing,
    /// Terminal state: the value was reported, nothing mutates anymore
    Submitted,
}

impl SubmissionState {
    /// Returns true while the component still accepts changes
    #[must_use]
    pub const fn is_editing(self) -> bool {
        matches!(self, Self::Editing)
    }

    /// Returns true once the component has submitted
    #[must_use]
    pub const fn is_submitted(self) -> bool {
        matches!(self, Self::Submitted)
    }
}

/// Why a submission was refused.
///
/// A refusal never mutates the component and never invokes the callback.
/// Views decide whether to surface the reason or stay silent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The component already submitted once; the transition is one-way
    #[error("already submitted")]
    AlreadySubmitted,
    /// The tip amount must be greater than zero
    #[error("tip amount must be greater than zero")]
    NoTip,
    /// Feedback requires a non-empty comment
    #[error("comment must not be empty")]
    EmptyComment,
    /// Casting a vote requires a selected option
    #[error("no option selected")]
    NoSelection,
    /// An order must contain at least one item
    #[error("order is empty")]
    EmptyOrder,
}
