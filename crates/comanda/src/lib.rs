//! Comanda - Guest-Facing Restaurant UI Components
//!
//! Presentational components for a restaurant web app: a tip
//! calculator, a feedback form, a menu board, a point-of-sale order
//! pad, and a guest poll. Each component is a plain state machine with
//! a DOM view on top, so the full behavior runs and tests natively;
//! the `wasm` feature adds real browser bindings over the same cores.
//!
//! # Component model
//!
//! - **One-shot submission**: every form moves from editing to
//!   submitted exactly once and freezes there
//! - **Guarded submits**: a refused submit returns a typed error and
//!   changes nothing, observably or otherwise
//! - **Derived display values**: tip amounts and totals are recomputed
//!   from state on every render, never stored
//! - **At-most-once delivery**: each submit handler fires exactly once,
//!   synchronously, on the successful submit
//!
//! # Example
//!
//! ```rust
//! use comanda::prelude::*;
//!
//! let mut calculator = TipCalculator::new(50.0);
//! calculator.select_percentage(TipPercent::P20);
//! assert_eq!(calculator.amount(), 10.0);
//!
//! let receipt = calculator.submit().unwrap();
//! assert_eq!(receipt.tip_display(), "10.00");
//! assert_eq!(receipt.total_display(), "60.00");
//!
//! // The calculator is frozen now
//! assert!(calculator.submit().is_err());
//! ```

// Allow common test patterns in this crate
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;

/// Web module - always available for testing
/// (Mock DOM allows testing without actual browser bindings)
pub mod web;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::feedback::{FeedbackEntry, FeedbackForm, Rating};
    pub use crate::core::menu::{Menu, MenuCategory, MenuItem};
    pub use crate::core::money::{format_amount, parse_amount, round2};
    pub use crate::core::order::{OrderLine, OrderPad, OrderTicket};
    pub use crate::core::poll::{Ballot, Poll, PollOption};
    pub use crate::core::tip::{TipCalculator, TipMode, TipPercent, TipReceipt};
    pub use crate::core::{SubmissionState, SubmitError, SubmitHandler, SubmitResult};
    pub use crate::driver::{
        run_submit_flow_suite, verify_rejects_empty, verify_single_submission,
        verify_terminal_state_is_sticky, FeedbackDriver, OrderDriver, PollDriver,
        SubmitFlowDriver, TipDriver,
    };
    pub use crate::web::{
        DomElement, DomEvent, FeedbackFormView, MenuBoardView, MockDom, OrderPadView, PollView,
        TipCalculatorView,
    };

    #[cfg(feature = "wasm")]
    pub use crate::web::{BrowserFeedbackForm, BrowserTipCalculator};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        // Verify the core exports work end to end
        let mut calculator = TipCalculator::new(50.0);
        calculator.select_percentage(TipPercent::P20);
        let receipt = calculator.submit().unwrap();
        assert_eq!(receipt.tip_display(), "10.00");
        assert_eq!(receipt.total_display(), "60.00");
    }

    #[test]
    fn test_feedback_direct() {
        let mut form = FeedbackForm::new();
        form.select_rating(Rating::Five);
        form.set_comment("Wonderful evening");
        let entry = form.submit().unwrap();
        assert_eq!(entry.rating, Some(Rating::Five));
    }

    #[test]
    fn test_menu_direct() {
        let menu = Menu::sample();
        assert_eq!(menu.item(9).unwrap().name, "Espresso");
        assert!(!menu.in_category(MenuCategory::Drinks).is_empty());
    }

    #[test]
    fn test_order_direct() {
        let mut pad = OrderPad::new(Menu::sample());
        pad.add_item(9);
        pad.add_item(9);
        let ticket = pad.submit().unwrap();
        assert_eq!(ticket.total_display(), "7.50");
    }

    #[test]
    fn test_poll_direct() {
        let mut poll = Poll::sample();
        poll.select(3);
        let ballot = poll.submit().unwrap();
        assert_eq!(ballot.label, "Affogato");
        assert_eq!(poll.votes_for(3), 18);
    }

    #[test]
    fn test_money_helpers() {
        assert_eq!(round2(12.3456), 12.35);
        assert_eq!(format_amount(5.0), "5.00");
        assert_eq!(parse_amount("7"), 7.0);
        assert_eq!(parse_amount("abc"), 0.0);
    }

    #[test]
    fn test_view_flow_through_dom() {
        let mut view = TipCalculatorView::new(32.40);
        view.type_custom_amount("7");
        view.click_submit();
        assert!(view.confirmation_visible());
        assert_eq!(view.total_text(), Some("39.40"));
    }

    #[test]
    fn test_driver_suite_over_all_components() {
        run_submit_flow_suite(TipDriver::new);
        run_submit_flow_suite(FeedbackDriver::new);
        run_submit_flow_suite(OrderDriver::new);
        run_submit_flow_suite(PollDriver::new);
    }
}
