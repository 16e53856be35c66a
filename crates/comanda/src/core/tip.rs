//! Tip calculator state machine.
//!
//! The calculator is created for a single bill. The guest either taps one
//! of the quick-pick percentages or types a free-form dollar amount; the
//! tip amount is always derived from the current selection and the bill,
//! never stored on its own. Submitting a positive tip builds a
//! [`TipReceipt`], reports it through the registered callback exactly once,
//! and locks the calculator.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::money;
use crate::core::{SubmissionState, SubmitError, SubmitHandler, SubmitResult};

/// Quick-pick tip rates offered by the calculator.
///
/// The rates are a closed set, so an out-of-range percentage is
/// unrepresentable rather than validated at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipPercent {
    /// 15%
    P15,
    /// 18%
    P18,
    /// 20%
    P20,
    /// 25%
    P25,
}

impl TipPercent {
    /// All quick-pick rates in display order
    pub const ALL: [Self; 4] = [Self::P15, Self::P18, Self::P20, Self::P25];

    /// The rate as a whole-number percentage
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::P15 => 15,
            Self::P18 => 18,
            Self::P20 => 20,
            Self::P25 => 25,
        }
    }

    /// Button label, e.g. `"20%"`
    #[must_use]
    pub fn label(self) -> String {
        format!("{}%", self.value())
    }

    /// Looks up a quick-pick rate by its numeric value
    #[must_use]
    pub fn from_value(value: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.value() == value)
    }
}

/// How the tip is currently being chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TipMode {
    /// One of the quick-pick percentage buttons
    Percentage(TipPercent),
    /// Free-form dollar entry, kept as the raw text typed so far
    Custom(String),
}

/// The finalized value reported when a tip is submitted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TipReceipt {
    /// Tip amount in dollars, rounded to cents
    pub tip: f64,
    /// Bill plus tip, rounded to cents
    pub total: f64,
}

impl TipReceipt {
    /// Tip amount with exactly two fractional digits, e.g. `"10.00"`
    #[must_use]
    pub fn tip_display(&self) -> String {
        money::format_amount(self.tip)
    }

    /// Grand total with exactly two fractional digits, e.g. `"60.00"`
    #[must_use]
    pub fn total_display(&self) -> String {
        money::format_amount(self.total)
    }

    /// Serializes the receipt to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Tip entry for a single bill
pub struct TipCalculator {
    /// The bill being tipped, fixed at construction
    bill_total: f64,
    /// Current selection
    mode: TipMode,
    /// Lifecycle state
    state: SubmissionState,
    /// Callback fired once on submission
    handler: Option<SubmitHandler<TipReceipt>>,
}

impl fmt::Debug for TipCalculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TipCalculator")
            .field("bill_total", &self.bill_total)
            .field("mode", &self.mode)
            .field("state", &self.state)
            .field("handler", &self.handler.is_some())
            .finish()
    }
}

impl TipCalculator {
    /// Creates a calculator for the given bill.
    ///
    /// The bill is supplied by the embedding page and is not validated
    /// here; a zero bill simply makes every percentage tip zero. Nothing
    /// is preselected: the calculator starts with an empty custom entry.
    #[must_use]
    pub fn new(bill_total: f64) -> Self {
        Self {
            bill_total,
            mode: TipMode::Custom(String::new()),
            state: SubmissionState::Editing,
            handler: None,
        }
    }

    /// Registers the callback fired with the receipt on submission
    pub fn on_submit<F>(&mut self, handler: F)
    where
        F: FnMut(&TipReceipt) + 'static,
    {
        self.handler = Some(Box::new(handler));
    }

    /// The bill this calculator was created for
    #[must_use]
    pub const fn bill_total(&self) -> f64 {
        self.bill_total
    }

    /// The current selection
    #[must_use]
    pub const fn mode(&self) -> &TipMode {
        &self.mode
    }

    /// Lifecycle state
    #[must_use]
    pub const fn state(&self) -> SubmissionState {
        self.state
    }

    /// The raw custom entry text, if the guest is typing an amount
    #[must_use]
    pub fn custom_text(&self) -> Option<&str> {
        match &self.mode {
            TipMode::Custom(text) => Some(text),
            TipMode::Percentage(_) => None,
        }
    }

    /// The current tip amount in dollars.
    ///
    /// Always derived from the selection and the bill: a percentage of the
    /// bill, or the parsed custom entry (unparseable text counts as zero).
    /// Unrounded; cents rounding happens when the receipt is built.
    #[must_use]
    pub fn amount(&self) -> f64 {
        match &self.mode {
            TipMode::Percentage(p) => self.bill_total * f64::from(p.value()) / 100.0,
            TipMode::Custom(text) => money::parse_amount(text),
        }
    }

    /// Whether a submission would currently be accepted
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.state.is_editing() && self.amount() > 0.0
    }

    /// Selects a quick-pick percentage, discarding any custom entry.
    ///
    /// Ignored after submission.
    pub fn select_percentage(&mut self, percent: TipPercent) {
        if self.state.is_submitted() {
            return;
        }
        self.mode = TipMode::Percentage(percent);
    }

    /// Replaces the custom entry with the given raw text.
    ///
    /// The text is kept as typed; parsing happens on demand in
    /// [`amount`](Self::amount). Ignored after submission.
    pub fn set_custom_amount(&mut self, text: &str) {
        if self.state.is_submitted() {
            return;
        }
        self.mode = TipMode::Custom(text.to_string());
    }

    /// Attempts to finalize the tip.
    ///
    /// Requires the calculator to still be editing and the current amount
    /// to be positive. On success the receipt is built with both figures
    /// rounded to cents, the callback fires synchronously with it, and the
    /// calculator locks. On refusal nothing changes and the callback is
    /// not invoked.
    pub fn submit(&mut self) -> SubmitResult<TipReceipt> {
        if self.state.is_submitted() {
            return Err(SubmitError::AlreadySubmitted);
        }
        let amount = self.amount();
        if amount <= 0.0 {
            return Err(SubmitError::NoTip);
        }

        let receipt = TipReceipt {
            tip: money::round2(amount),
            total: money::round2(self.bill_total + amount),
        };
        self.state = SubmissionState::Submitted;
        if let Some(handler) = self.handler.as_mut() {
            handler(&receipt);
        }
        tracing::debug!(tip = receipt.tip, total = receipt.total, "tip submitted");
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    // ===== TipPercent tests =====

    #[test]
    fn test_percent_values() {
        assert_eq!(TipPercent::P15.value(), 15);
        assert_eq!(TipPercent::P18.value(), 18);
        assert_eq!(TipPercent::P20.value(), 20);
        assert_eq!(TipPercent::P25.value(), 25);
    }

    #[test]
    fn test_percent_all_in_display_order() {
        let values: Vec<u8> = TipPercent::ALL.iter().map(|p| p.value()).collect();
        assert_eq!(values, vec![15, 18, 20, 25]);
    }

    #[test]
    fn test_percent_label() {
        assert_eq!(TipPercent::P18.label(), "18%");
    }

    #[test]
    fn test_percent_from_value() {
        assert_eq!(TipPercent::from_value(20), Some(TipPercent::P20));
        assert_eq!(TipPercent::from_value(10), None);
        assert_eq!(TipPercent::from_value(0), None);
    }

    // ===== Constructor tests =====

    #[test]
    fn test_new_starts_editing_with_empty_entry() {
        let tip = TipCalculator::new(50.0);
        assert_eq!(tip.bill_total(), 50.0);
        assert!(tip.state().is_editing());
        assert_eq!(tip.custom_text(), Some(""));
        assert_eq!(tip.amount(), 0.0);
        assert!(!tip.can_submit());
    }

    #[test]
    fn test_new_accepts_zero_bill() {
        let tip = TipCalculator::new(0.0);
        assert_eq!(tip.bill_total(), 0.0);
    }

    #[test]
    fn test_debug_hides_handler() {
        let mut tip = TipCalculator::new(10.0);
        tip.on_submit(|_| {});
        let debug = format!("{:?}", tip);
        assert!(debug.contains("TipCalculator"));
        assert!(debug.contains("handler: true"));
    }

    // ===== Selection tests =====

    #[test]
    fn test_select_percentage_sets_amount() {
        let mut tip = TipCalculator::new(50.0);
        tip.select_percentage(TipPercent::P20);
        assert_eq!(tip.amount(), 10.0);
        assert_eq!(tip.mode(), &TipMode::Percentage(TipPercent::P20));
    }

    #[test]
    fn test_select_percentage_discards_custom_text() {
        let mut tip = TipCalculator::new(50.0);
        tip.set_custom_amount("7.50");
        tip.select_percentage(TipPercent::P15);
        assert_eq!(tip.custom_text(), None);
        assert_eq!(tip.amount(), 7.5);
    }

    #[test]
    fn test_reselect_percentage_overwrites() {
        let mut tip = TipCalculator::new(100.0);
        tip.select_percentage(TipPercent::P15);
        tip.select_percentage(TipPercent::P25);
        assert_eq!(tip.amount(), 25.0);
    }

    #[test]
    fn test_custom_amount_parses() {
        let mut tip = TipCalculator::new(32.4);
        tip.set_custom_amount("7");
        assert_eq!(tip.amount(), 7.0);
        assert_eq!(tip.custom_text(), Some("7"));
    }

    #[test]
    fn test_custom_amount_garbage_is_zero() {
        let mut tip = TipCalculator::new(20.0);
        tip.set_custom_amount("abc");
        assert_eq!(tip.amount(), 0.0);
        assert!(!tip.can_submit());
    }

    #[test]
    fn test_custom_amount_keeps_raw_text() {
        let mut tip = TipCalculator::new(20.0);
        tip.set_custom_amount("abc");
        assert_eq!(tip.custom_text(), Some("abc"));
    }

    #[test]
    fn test_amount_is_pure() {
        let mut tip = TipCalculator::new(80.0);
        tip.select_percentage(TipPercent::P18);
        assert_eq!(tip.amount(), tip.amount());
    }

    // ===== Submit tests =====

    #[test]
    fn test_submit_twenty_percent_on_fifty() {
        let mut tip = TipCalculator::new(50.0);
        tip.select_percentage(TipPercent::P20);
        let receipt = tip.submit().unwrap();
        assert_eq!(receipt.tip_display(), "10.00");
        assert_eq!(receipt.total_display(), "60.00");
        assert!(tip.state().is_submitted());
    }

    #[test]
    fn test_submit_custom_seven_on_thirty_two_forty() {
        let mut tip = TipCalculator::new(32.4);
        tip.set_custom_amount("7");
        let receipt = tip.submit().unwrap();
        assert_eq!(receipt.tip_display(), "7.00");
        assert_eq!(receipt.total_display(), "39.40");
    }

    #[test]
    fn test_submit_rounds_fractional_cents() {
        let mut tip = TipCalculator::new(10.01);
        tip.select_percentage(TipPercent::P15);
        // Live amount stays unrounded; the receipt is rounded to cents
        assert_eq!(tip.amount(), 10.01 * 15.0 / 100.0);
        let receipt = tip.submit().unwrap();
        assert_eq!(receipt.tip, 1.5);
        assert_eq!(receipt.tip_display(), "1.50");
    }

    #[test]
    fn test_submit_refused_with_empty_entry() {
        let mut tip = TipCalculator::new(50.0);
        assert_eq!(tip.submit(), Err(SubmitError::NoTip));
        assert!(tip.state().is_editing());
    }

    #[test]
    fn test_submit_refused_with_garbage_entry() {
        let mut tip = TipCalculator::new(20.0);
        tip.set_custom_amount("abc");
        assert_eq!(tip.submit(), Err(SubmitError::NoTip));
        assert!(tip.state().is_editing());
        // The entry is untouched by the refusal
        assert_eq!(tip.custom_text(), Some("abc"));
    }

    #[test]
    fn test_submit_refused_with_negative_entry() {
        let mut tip = TipCalculator::new(20.0);
        tip.set_custom_amount("-3");
        assert_eq!(tip.submit(), Err(SubmitError::NoTip));
    }

    #[test]
    fn test_submit_refused_on_zero_bill_percentage() {
        let mut tip = TipCalculator::new(0.0);
        tip.select_percentage(TipPercent::P20);
        assert_eq!(tip.submit(), Err(SubmitError::NoTip));
    }

    #[test]
    fn test_second_submit_refused() {
        let mut tip = TipCalculator::new(50.0);
        tip.select_percentage(TipPercent::P20);
        tip.submit().unwrap();
        assert_eq!(tip.submit(), Err(SubmitError::AlreadySubmitted));
    }

    // ===== Callback tests =====

    #[test]
    fn test_callback_receives_receipt() {
        let seen: Rc<RefCell<Vec<(String, String)>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut tip = TipCalculator::new(50.0);
        tip.on_submit(move |receipt| {
            sink.borrow_mut()
                .push((receipt.tip_display(), receipt.total_display()));
        });
        tip.select_percentage(TipPercent::P20);
        tip.submit().unwrap();

        assert_eq!(
            *seen.borrow(),
            vec![("10.00".to_string(), "60.00".to_string())]
        );
    }

    #[test]
    fn test_callback_not_invoked_on_refusal() {
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);

        let mut tip = TipCalculator::new(20.0);
        tip.on_submit(move |_| *sink.borrow_mut() += 1);
        tip.set_custom_amount("abc");
        let _ = tip.submit();

        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn test_callback_fires_at_most_once() {
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);

        let mut tip = TipCalculator::new(50.0);
        tip.on_submit(move |_| *sink.borrow_mut() += 1);
        tip.select_percentage(TipPercent::P20);
        tip.submit().unwrap();
        let _ = tip.submit();
        let _ = tip.submit();

        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_submit_without_handler_still_locks() {
        let mut tip = TipCalculator::new(50.0);
        tip.select_percentage(TipPercent::P20);
        assert!(tip.submit().is_ok());
        assert!(tip.state().is_submitted());
    }

    // ===== Post-submission tests =====

    #[test]
    fn test_reselect_after_submit_has_no_effect() {
        let mut tip = TipCalculator::new(50.0);
        tip.select_percentage(TipPercent::P20);
        tip.submit().unwrap();

        tip.select_percentage(TipPercent::P25);
        tip.set_custom_amount("99");

        assert_eq!(tip.mode(), &TipMode::Percentage(TipPercent::P20));
        assert_eq!(tip.amount(), 10.0);
    }

    // ===== TipReceipt tests =====

    #[test]
    fn test_receipt_to_json() {
        let receipt = TipReceipt {
            tip: 10.0,
            total: 60.0,
        };
        let json = receipt.to_json().unwrap();
        assert!(json.contains("\"tip\":10.0"));
        assert!(json.contains("\"total\":60.0"));
    }

    #[test]
    fn test_receipt_round_trip_json() {
        let receipt = TipReceipt {
            tip: 7.0,
            total: 39.4,
        };
        let json = receipt.to_json().unwrap();
        let restored: TipReceipt = serde_json::from_str(&json).unwrap();
        assert_eq!(receipt, restored);
    }

    #[test]
    fn test_receipt_clone() {
        let receipt = TipReceipt {
            tip: 1.5,
            total: 11.51,
        };
        assert_eq!(receipt, receipt.clone());
    }
}
