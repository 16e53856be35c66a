//! Unified submit-flow driver.
//!
//! Every submitting component shares the same lifecycle: fill it in,
//! submit through the DOM once, freeze. This module states that
//! lifecycle once as a set of verification functions and lets each
//! component plug in through [`SubmitFlowDriver`].

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::menu::Menu;
use crate::core::poll::Poll;
use crate::core::tip::TipPercent;
use crate::web::{FeedbackFormView, OrderPadView, PollView, TipCalculatorView};

/// Abstract driver trait for submit-flow interactions
///
/// Each submitting view implements this, enabling the same flow
/// specifications to run against every component.
///
/// # Example
///
/// ```rust,ignore
/// fn verify_flow<D: SubmitFlowDriver>(driver: &mut D) {
///     driver.enter_valid_input();
///     driver.click_submit();
///     assert!(driver.is_submitted());
/// }
///
/// verify_flow(&mut TipDriver::new());
/// verify_flow(&mut OrderDriver::new());
/// ```
pub trait SubmitFlowDriver {
    /// Fills the component to a submittable state
    fn enter_valid_input(&mut self);

    /// Clicks the component's submit element
    fn click_submit(&mut self);

    /// Whether the component has reached its submitted state
    fn is_submitted(&self) -> bool;

    /// The confirmation text, if the component is showing one
    fn confirmation_text(&self) -> Option<String>;

    /// How many times the submit handler has fired
    fn submission_count(&self) -> usize;
}

/// Driver for the tip calculator view
#[derive(Debug)]
pub struct TipDriver {
    view: TipCalculatorView,
    submissions: Rc<RefCell<usize>>,
}

impl Default for TipDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl TipDriver {
    /// Creates a driver over a fresh tip calculator with a 50.00 bill
    #[must_use]
    pub fn new() -> Self {
        let mut view = TipCalculatorView::new(50.0);
        let submissions = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&submissions);
        view.on_submit(move |_| *counter.borrow_mut() += 1);
        Self { view, submissions }
    }

    /// Returns a reference to the view
    #[must_use]
    pub fn view(&self) -> &TipCalculatorView {
        &self.view
    }

    /// Returns a mutable reference to the view
    pub fn view_mut(&mut self) -> &mut TipCalculatorView {
        &mut self.view
    }
}

impl SubmitFlowDriver for TipDriver {
    fn enter_valid_input(&mut self) {
        self.view.pick_percentage(TipPercent::P20);
    }

    fn click_submit(&mut self) {
        self.view.click_submit();
    }

    fn is_submitted(&self) -> bool {
        self.view.calculator().state().is_submitted()
    }

    fn confirmation_text(&self) -> Option<String> {
        if self.view.confirmation_visible() {
            self.view
                .dom()
                .get_element_text("tip-confirmation")
                .map(String::from)
        } else {
            None
        }
    }

    fn submission_count(&self) -> usize {
        *self.submissions.borrow()
    }
}

/// Driver for the feedback form view
#[derive(Debug)]
pub struct FeedbackDriver {
    view: FeedbackFormView,
    submissions: Rc<RefCell<usize>>,
}

impl Default for FeedbackDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedbackDriver {
    /// Creates a driver over a fresh feedback form
    #[must_use]
    pub fn new() -> Self {
        let mut view = FeedbackFormView::new();
        let submissions = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&submissions);
        view.on_submit(move |_| *counter.borrow_mut() += 1);
        Self { view, submissions }
    }

    /// Returns a reference to the view
    #[must_use]
    pub fn view(&self) -> &FeedbackFormView {
        &self.view
    }

    /// Returns a mutable reference to the view
    pub fn view_mut(&mut self) -> &mut FeedbackFormView {
        &mut self.view
    }
}

impl SubmitFlowDriver for FeedbackDriver {
    fn enter_valid_input(&mut self) {
        self.view.type_comment("Great service");
    }

    fn click_submit(&mut self) {
        self.view.click_submit();
    }

    fn is_submitted(&self) -> bool {
        self.view.form().state().is_submitted()
    }

    fn confirmation_text(&self) -> Option<String> {
        if self.view.confirmation_visible() {
            self.view
                .dom()
                .get_element_text("feedback-confirmation")
                .map(String::from)
        } else {
            None
        }
    }

    fn submission_count(&self) -> usize {
        *self.submissions.borrow()
    }
}

/// Driver for the order pad view
#[derive(Debug)]
pub struct OrderDriver {
    view: OrderPadView,
    submissions: Rc<RefCell<usize>>,
}

impl Default for OrderDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderDriver {
    /// Creates a driver over a fresh pad selling the sample menu
    #[must_use]
    pub fn new() -> Self {
        let mut view = OrderPadView::new(Menu::sample());
        let submissions = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&submissions);
        view.on_submit(move |_| *counter.borrow_mut() += 1);
        Self { view, submissions }
    }

    /// Returns a reference to the view
    #[must_use]
    pub fn view(&self) -> &OrderPadView {
        &self.view
    }

    /// Returns a mutable reference to the view
    pub fn view_mut(&mut self) -> &mut OrderPadView {
        &mut self.view
    }
}

impl SubmitFlowDriver for OrderDriver {
    fn enter_valid_input(&mut self) {
        if let Some(id) = self.view.pad().menu().items().first().map(|i| i.id) {
            self.view.tap_add(id);
        }
    }

    fn click_submit(&mut self) {
        self.view.click_submit();
    }

    fn is_submitted(&self) -> bool {
        self.view.pad().state().is_submitted()
    }

    fn confirmation_text(&self) -> Option<String> {
        if self.view.confirmation_visible() {
            self.view
                .dom()
                .get_element_text("order-confirmation")
                .map(String::from)
        } else {
            None
        }
    }

    fn submission_count(&self) -> usize {
        *self.submissions.borrow()
    }
}

/// Driver for the poll view
#[derive(Debug)]
pub struct PollDriver {
    view: PollView,
    submissions: Rc<RefCell<usize>>,
}

impl Default for PollDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl PollDriver {
    /// Creates a driver over the sample poll
    #[must_use]
    pub fn new() -> Self {
        let mut view = PollView::new(Poll::sample());
        let submissions = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&submissions);
        view.on_submit(move |_| *counter.borrow_mut() += 1);
        Self { view, submissions }
    }

    /// Returns a reference to the view
    #[must_use]
    pub fn view(&self) -> &PollView {
        &self.view
    }

    /// Returns a mutable reference to the view
    pub fn view_mut(&mut self) -> &mut PollView {
        &mut self.view
    }
}

impl SubmitFlowDriver for PollDriver {
    fn enter_valid_input(&mut self) {
        if let Some(id) = self.view.poll().options().first().map(|o| o.id) {
            self.view.choose(id);
        }
    }

    fn click_submit(&mut self) {
        self.view.click_submit();
    }

    fn is_submitted(&self) -> bool {
        self.view.poll().state().is_submitted()
    }

    fn confirmation_text(&self) -> Option<String> {
        if self.view.confirmation_visible() {
            self.view
                .dom()
                .get_element_text("poll-confirmation")
                .map(String::from)
        } else {
            None
        }
    }

    fn submission_count(&self) -> usize {
        *self.submissions.borrow()
    }
}

// ===== Unified Flow Specifications =====
// These work with ANY SubmitFlowDriver implementation

/// Verifies an unfilled component refuses to submit
pub fn verify_rejects_empty<D: SubmitFlowDriver>(driver: &mut D) {
    driver.click_submit();
    assert!(!driver.is_submitted());
    assert_eq!(driver.submission_count(), 0);
    assert_eq!(driver.confirmation_text(), None);
}

/// Verifies a filled component submits exactly once and confirms
pub fn verify_single_submission<D: SubmitFlowDriver>(driver: &mut D) {
    driver.enter_valid_input();
    driver.click_submit();
    assert!(driver.is_submitted());
    assert_eq!(driver.submission_count(), 1);
    let confirmation = driver.confirmation_text().expect("no confirmation shown");
    assert!(!confirmation.is_empty());
}

/// Verifies the submitted state ignores every later gesture
pub fn verify_terminal_state_is_sticky<D: SubmitFlowDriver>(driver: &mut D) {
    driver.enter_valid_input();
    driver.click_submit();
    assert_eq!(driver.submission_count(), 1);

    driver.enter_valid_input();
    driver.click_submit();
    driver.click_submit();

    assert!(driver.is_submitted());
    assert_eq!(driver.submission_count(), 1);
}

/// Runs every flow specification against fresh drivers.
///
/// Submission is one-shot, so each specification gets its own driver
/// from the factory.
pub fn run_submit_flow_suite<D, F>(mut fresh: F)
where
    D: SubmitFlowDriver,
    F: FnMut() -> D,
{
    verify_rejects_empty(&mut fresh());
    verify_single_submission(&mut fresh());
    verify_terminal_state_is_sticky(&mut fresh());
}
