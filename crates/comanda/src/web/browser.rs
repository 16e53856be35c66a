//! Browser WASM bindings for the guest-facing components.
//!
//! This module provides the actual browser integration using
//! wasm-bindgen. The page script owns the real DOM; these types expose
//! component state and display strings for it.

// Note: This module is already conditionally compiled via #[cfg(feature = "wasm")] in mod.rs

use wasm_bindgen::prelude::*;
use web_sys::console;

use crate::core::feedback::{FeedbackForm, Rating};
use crate::core::money;
use crate::core::tip::{TipCalculator, TipPercent};
use crate::core::SubmitError;

/// Browser tip calculator - WASM entry point for the tip widget
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserTipCalculator {
    calculator: TipCalculator,
}

#[wasm_bindgen]
impl BrowserTipCalculator {
    /// Create a calculator for the given bill total
    #[wasm_bindgen(constructor)]
    pub fn new(bill_total: f64) -> Self {
        // Set panic hook for better error messages
        #[cfg(feature = "wasm")]
        console_error_panic_hook::set_once();

        Self {
            calculator: TipCalculator::new(bill_total),
        }
    }

    /// Get the bill total
    #[wasm_bindgen(getter)]
    pub fn bill_total(&self) -> f64 {
        self.calculator.bill_total()
    }

    /// Get the current tip amount as a display string
    #[wasm_bindgen(getter)]
    pub fn amount(&self) -> String {
        money::format_amount(self.calculator.amount())
    }

    /// Get bill plus tip as a display string
    #[wasm_bindgen(getter)]
    pub fn total(&self) -> String {
        money::format_amount(self.calculator.bill_total() + self.calculator.amount())
    }

    /// Whether the tip has been submitted
    #[wasm_bindgen(getter)]
    pub fn submitted(&self) -> bool {
        self.calculator.state().is_submitted()
    }

    /// Select a preset percentage (15, 18, 20 or 25).
    ///
    /// Returns false for any other value.
    pub fn select_percentage(&mut self, value: u8) -> bool {
        match TipPercent::from_value(value) {
            Some(percent) => {
                self.calculator.select_percentage(percent);
                true
            }
            None => false,
        }
    }

    /// Enter a custom tip amount as raw text
    pub fn set_custom_amount(&mut self, text: &str) {
        self.calculator.set_custom_amount(text);
    }

    /// Whether a submit would currently be accepted
    pub fn can_submit(&self) -> bool {
        self.calculator.can_submit()
    }

    /// Submit the tip.
    ///
    /// Returns the receipt as JSON on success, or None if the submit
    /// was refused.
    pub fn submit(&mut self) -> Option<String> {
        let receipt = self.calculator.submit().ok()?;
        receipt.to_json().ok()
    }
}

/// Browser feedback form - WASM entry point for the feedback widget
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserFeedbackForm {
    form: FeedbackForm,
    last_error: Option<SubmitError>,
}

#[wasm_bindgen]
impl BrowserFeedbackForm {
    /// Create an empty feedback form
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        #[cfg(feature = "wasm")]
        console_error_panic_hook::set_once();

        Self {
            form: FeedbackForm::new(),
            last_error: None,
        }
    }

    /// Whether the feedback has been submitted
    #[wasm_bindgen(getter)]
    pub fn submitted(&self) -> bool {
        self.form.state().is_submitted()
    }

    /// Get the refusal message from the last submit, if any
    #[wasm_bindgen(getter)]
    pub fn last_error(&self) -> Option<String> {
        self.last_error.map(|e| e.to_string())
    }

    /// Set the guest name
    pub fn set_name(&mut self, text: &str) {
        self.form.set_name(text);
        self.last_error = None;
    }

    /// Set the comment text
    pub fn set_comment(&mut self, text: &str) {
        self.form.set_comment(text);
        self.last_error = None;
    }

    /// Pick a star rating (1 to 5).
    ///
    /// Returns false for any other value.
    pub fn select_rating(&mut self, value: u8) -> bool {
        match Rating::from_value(value) {
            Some(rating) => {
                self.form.select_rating(rating);
                self.last_error = None;
                true
            }
            None => false,
        }
    }

    /// Submit the feedback.
    ///
    /// Returns the entry as JSON on success. A refusal records its
    /// message in `last_error` and returns None.
    pub fn submit(&mut self) -> Option<String> {
        match self.form.submit() {
            Ok(entry) => {
                self.last_error = None;
                entry.to_json().ok()
            }
            Err(SubmitError::AlreadySubmitted) => None,
            Err(e) => {
                self.last_error = Some(e);
                None
            }
        }
    }
}

impl Default for BrowserFeedbackForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Initialize the components in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "wasm")]
    {
        console_error_panic_hook::set_once();
        console::log_1(&"Comanda components initialized".into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== BrowserTipCalculator tests =====

    #[test]
    fn test_browser_tip_new() {
        let calc = BrowserTipCalculator::new(50.0);
        assert_eq!(calc.bill_total(), 50.0);
        assert_eq!(calc.amount(), "0.00");
        assert_eq!(calc.total(), "50.00");
        assert!(!calc.submitted());
    }

    #[test]
    fn test_browser_tip_select_percentage() {
        let mut calc = BrowserTipCalculator::new(50.0);
        assert!(calc.select_percentage(20));
        assert_eq!(calc.amount(), "10.00");
        assert_eq!(calc.total(), "60.00");
    }

    #[test]
    fn test_browser_tip_select_invalid_percentage() {
        let mut calc = BrowserTipCalculator::new(50.0);
        assert!(!calc.select_percentage(30));
        assert_eq!(calc.amount(), "0.00");
    }

    #[test]
    fn test_browser_tip_custom_amount() {
        let mut calc = BrowserTipCalculator::new(32.40);
        calc.set_custom_amount("7");
        assert_eq!(calc.amount(), "7.00");
        assert_eq!(calc.total(), "39.40");
    }

    #[test]
    fn test_browser_tip_submit_returns_json() {
        let mut calc = BrowserTipCalculator::new(50.0);
        calc.select_percentage(20);
        let json = calc.submit().unwrap();
        assert!(json.contains("\"tip\":10.0"));
        assert!(json.contains("\"total\":60.0"));
        assert!(calc.submitted());
    }

    #[test]
    fn test_browser_tip_submit_refused() {
        let mut calc = BrowserTipCalculator::new(20.0);
        calc.set_custom_amount("abc");
        assert!(!calc.can_submit());
        assert!(calc.submit().is_none());
        assert!(!calc.submitted());
    }

    #[test]
    fn test_browser_tip_one_shot() {
        let mut calc = BrowserTipCalculator::new(50.0);
        calc.select_percentage(15);
        assert!(calc.submit().is_some());
        assert!(calc.submit().is_none());
        calc.select_percentage(25);
        assert_eq!(calc.amount(), "7.50");
    }

    // ===== BrowserFeedbackForm tests =====

    #[test]
    fn test_browser_feedback_new() {
        let form = BrowserFeedbackForm::new();
        assert!(!form.submitted());
        assert!(form.last_error().is_none());
    }

    #[test]
    fn test_browser_feedback_refusal_sets_error() {
        let mut form = BrowserFeedbackForm::new();
        assert!(form.submit().is_none());
        assert_eq!(form.last_error().as_deref(), Some("comment must not be empty"));
    }

    #[test]
    fn test_browser_feedback_editing_clears_error() {
        let mut form = BrowserFeedbackForm::new();
        form.submit();
        form.set_comment("Great service");
        assert!(form.last_error().is_none());
    }

    #[test]
    fn test_browser_feedback_submit_returns_json() {
        let mut form = BrowserFeedbackForm::new();
        form.set_name("Dana");
        assert!(form.select_rating(5));
        form.set_comment("Great service");
        let json = form.submit().unwrap();
        assert!(json.contains("\"name\":\"Dana\""));
        assert!(json.contains("\"comment\":\"Great service\""));
        assert!(form.submitted());
    }

    #[test]
    fn test_browser_feedback_invalid_rating() {
        let mut form = BrowserFeedbackForm::new();
        assert!(!form.select_rating(6));
        assert!(!form.select_rating(0));
    }

    #[test]
    fn test_browser_feedback_repeat_submit_stays_silent() {
        let mut form = BrowserFeedbackForm::new();
        form.set_comment("Great service");
        assert!(form.submit().is_some());
        assert!(form.submit().is_none());
        assert!(form.last_error().is_none());
    }
}
