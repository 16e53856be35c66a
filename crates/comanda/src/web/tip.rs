//! Tip calculator view.
//!
//! Renders a [`TipCalculator`] into a mock DOM and translates DOM
//! events into calculator operations.
//!
//! Element layout:
//! ```text
//! #tip-calculator
//!   #tip-form                 (hidden after submit)
//!     #tip-bill               bill total display
//!     #tip-btn-15 .. #tip-btn-25
//!     #tip-custom-input
//!     #tip-amount             current tip display
//!     #tip-total              bill + tip display
//!     #tip-submit
//!   #tip-confirmation         "Thank you!" (hidden while editing)
//! ```

use super::dom::{DomElement, DomEvent, MockDom};
use crate::core::money;
use crate::core::tip::{TipCalculator, TipMode, TipPercent, TipReceipt};

/// Actions the tip calculator elements can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipAction {
    /// Select a preset percentage
    Pick(TipPercent),
    /// Submit the tip
    Submit,
}

/// Maps a clicked element ID to its action
#[must_use]
pub fn action_for(element_id: &str) -> Option<TipAction> {
    if element_id == "tip-submit" {
        return Some(TipAction::Submit);
    }
    let value = element_id.strip_prefix("tip-btn-")?.parse::<u8>().ok()?;
    TipPercent::from_value(value).map(TipAction::Pick)
}

/// Tip calculator wired to a mock DOM
#[derive(Debug)]
pub struct TipCalculatorView {
    /// The calculator instance
    calculator: TipCalculator,
    /// Mock DOM the view renders into
    dom: MockDom,
}

impl TipCalculatorView {
    /// Creates a view over a fresh calculator for the given bill
    #[must_use]
    pub fn new(bill_total: f64) -> Self {
        let mut view = Self {
            calculator: TipCalculator::new(bill_total),
            dom: build_dom(),
        };
        view.sync_dom();
        view
    }

    /// Registers a handler invoked once when the tip is submitted
    pub fn on_submit<F>(&mut self, handler: F)
    where
        F: FnMut(&TipReceipt) + 'static,
    {
        self.calculator.on_submit(handler);
    }

    /// Returns a reference to the calculator
    #[must_use]
    pub fn calculator(&self) -> &TipCalculator {
        &self.calculator
    }

    /// Returns a mutable reference to the calculator
    pub fn calculator_mut(&mut self) -> &mut TipCalculator {
        &mut self.calculator
    }

    /// Returns a reference to the DOM
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Returns a mutable reference to the DOM
    pub fn dom_mut(&mut self) -> &mut MockDom {
        &mut self.dom
    }

    /// Simulates clicking a preset percentage button
    pub fn pick_percentage(&mut self, percent: TipPercent) {
        self.handle_event(DomEvent::click(&format!("tip-btn-{}", percent.value())));
    }

    /// Simulates typing into the custom amount field
    pub fn type_custom_amount(&mut self, text: &str) {
        self.handle_event(DomEvent::input("tip-custom-input", text));
    }

    /// Simulates clicking the submit button
    pub fn click_submit(&mut self) {
        self.handle_event(DomEvent::click("tip-submit"));
    }

    /// Simulates pressing the Enter key
    pub fn press_enter(&mut self) {
        self.handle_event(DomEvent::key_press("Enter"));
    }

    /// Routes a DOM event to the calculator and re-renders.
    ///
    /// Refused submits leave the view unchanged; there is no error
    /// surface on this component.
    pub fn handle_event(&mut self, event: DomEvent) {
        self.dom.dispatch_event(event.clone());
        match event {
            DomEvent::Click { element_id } => match action_for(&element_id) {
                Some(TipAction::Pick(percent)) => self.calculator.select_percentage(percent),
                Some(TipAction::Submit) => {
                    let _ = self.calculator.submit();
                }
                None => {}
            },
            DomEvent::Input { element_id, value } if element_id == "tip-custom-input" => {
                self.calculator.set_custom_amount(&value);
            }
            DomEvent::KeyPress { key } if key == "Enter" => {
                let _ = self.calculator.submit();
            }
            DomEvent::Submit { element_id } if element_id == "tip-form" => {
                let _ = self.calculator.submit();
            }
            _ => {}
        }
        self.sync_dom();
    }

    /// Gets the tip amount display text
    #[must_use]
    pub fn amount_text(&self) -> Option<&str> {
        self.dom.get_element_text("tip-amount")
    }

    /// Gets the combined total display text
    #[must_use]
    pub fn total_text(&self) -> Option<&str> {
        self.dom.get_element_text("tip-total")
    }

    /// Whether the thank-you message is showing
    #[must_use]
    pub fn confirmation_visible(&self) -> bool {
        self.dom
            .get_element_visible("tip-confirmation")
            .unwrap_or(false)
    }

    /// Synchronizes DOM state with calculator state
    fn sync_dom(&mut self) {
        let bill = self.calculator.bill_total();
        let amount = self.calculator.amount();
        self.dom
            .set_element_text("tip-bill", &money::format_amount(bill));
        self.dom
            .set_element_text("tip-amount", &money::format_amount(amount));
        self.dom
            .set_element_text("tip-total", &money::format_amount(bill + amount));

        for percent in TipPercent::ALL {
            let picked = matches!(
                self.calculator.mode(),
                TipMode::Percentage(p) if *p == percent
            );
            let id = format!("tip-btn-{}", percent.value());
            if let Some(button) = self.dom.get_element_mut(&id) {
                if picked {
                    button.add_class("selected");
                } else {
                    button.remove_class("selected");
                }
            }
        }

        let custom = self.calculator.custom_text().unwrap_or("").to_string();
        if let Some(input) = self.dom.get_element_mut("tip-custom-input") {
            input.set_text(&custom);
            input.attributes.insert("value".to_string(), custom);
        }

        let submitted = self.calculator.state().is_submitted();
        self.dom.set_element_visible("tip-form", !submitted);
        self.dom.set_element_visible("tip-confirmation", submitted);
    }
}

/// Builds the tip calculator DOM structure
fn build_dom() -> MockDom {
    let mut form = DomElement::new("form")
        .with_id("tip-form")
        .with_child(DomElement::new("div").with_id("tip-bill").with_class("bill-display"));

    for percent in TipPercent::ALL {
        form = form.with_child(
            DomElement::new("button")
                .with_id(&format!("tip-btn-{}", percent.value()))
                .with_class("tip-percent-btn")
                .with_text(&percent.label()),
        );
    }

    form = form
        .with_child(
            DomElement::new("input")
                .with_id("tip-custom-input")
                .with_attr("type", "text")
                .with_attr("placeholder", "Custom amount"),
        )
        .with_child(DomElement::new("div").with_id("tip-amount").with_class("amount-display"))
        .with_child(DomElement::new("div").with_id("tip-total").with_class("total-display"))
        .with_child(DomElement::new("button").with_id("tip-submit").with_text("Submit tip"));

    let confirmation = DomElement::new("div")
        .with_id("tip-confirmation")
        .with_class("confirmation")
        .with_text("Thank you!")
        .with_visible(false);

    let root = DomElement::new("div")
        .with_id("tip-calculator")
        .with_class("tip-calculator")
        .with_child(form)
        .with_child(confirmation);

    let mut dom = MockDom::new();
    dom.register_subtree(&root);
    dom.root = root;
    dom
}
