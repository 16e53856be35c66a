//! Order entry for the point-of-sale pad.
//!
//! An [`OrderPad`] accumulates menu items into lines, aggregating
//! repeated taps of the same item into a quantity. Submitting produces
//! an [`OrderTicket`] snapshot for the kitchen and freezes the pad.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::menu::Menu;
use crate::core::money;
use crate::core::{SubmissionState, SubmitError, SubmitHandler, SubmitResult};

/// One line on the order: an item and how many of it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Menu id of the item
    pub item_id: u32,
    /// Item name at the time it was added
    pub name: String,
    /// Price of a single unit
    pub unit_price: f64,
    /// How many were ordered
    pub quantity: u32,
}

impl OrderLine {
    /// Price of the whole line
    #[must_use]
    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

/// Snapshot handed to the kitchen when the order is submitted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderTicket {
    /// Ordered lines, in the order they were first added
    pub lines: Vec<OrderLine>,
    /// Sum of all line totals, rounded to cents
    pub total: f64,
}

impl OrderTicket {
    /// Total with exactly two fractional digits, e.g. `"42.75"`
    #[must_use]
    pub fn total_display(&self) -> String {
        money::format_amount(self.total)
    }

    /// Serializes the ticket to JSON
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Order entry pad backed by a menu
pub struct OrderPad {
    menu: Menu,
    lines: Vec<OrderLine>,
    state: SubmissionState,
    handler: Option<SubmitHandler<OrderTicket>>,
}

impl fmt::Debug for OrderPad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderPad")
            .field("lines", &self.lines)
            .field("state", &self.state)
            .field("handler", &self.handler.is_some())
            .finish_non_exhaustive()
    }
}

impl OrderPad {
    /// Creates an empty pad over the given menu
    #[must_use]
    pub fn new(menu: Menu) -> Self {
        Self {
            menu,
            lines: Vec::new(),
            state: SubmissionState::Editing,
            handler: None,
        }
    }

    /// Registers a handler invoked once when the order is submitted
    pub fn on_submit<F>(&mut self, handler: F)
    where
        F: FnMut(&OrderTicket) + 'static,
    {
        self.handler = Some(Box::new(handler));
    }

    /// The menu this pad sells from
    #[must_use]
    pub const fn menu(&self) -> &Menu {
        &self.menu
    }

    /// Current lines, in the order they were first added
    #[must_use]
    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    /// Returns true if nothing has been added yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Current submission state
    #[must_use]
    pub const fn state(&self) -> SubmissionState {
        self.state
    }

    /// Quantity currently on the order for one item, zero if absent
    #[must_use]
    pub fn quantity_of(&self, item_id: u32) -> u32 {
        self.lines
            .iter()
            .find(|line| line.item_id == item_id)
            .map_or(0, |line| line.quantity)
    }

    /// Running total over all lines
    #[must_use]
    pub fn total(&self) -> f64 {
        // Folded from +0.0 rather than `sum()`: the float `Sum` identity is
        // -0.0 on Rust >= 1.84, which would display an empty pad as "-0.00".
        self.lines
            .iter()
            .map(OrderLine::line_total)
            .fold(0.0, |acc, line| acc + line)
    }

    /// Whether the pad accepts a submit right now
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.state.is_editing() && !self.lines.is_empty()
    }

    /// Adds one unit of a menu item.
    ///
    /// Repeated adds of the same item bump its quantity instead of
    /// growing the line list. Unknown ids and post-submit taps are
    /// ignored.
    pub fn add_item(&mut self, item_id: u32) {
        if self.state.is_submitted() {
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.item_id == item_id) {
            line.quantity += 1;
            return;
        }
        if let Some(item) = self.menu.item(item_id) {
            self.lines.push(OrderLine {
                item_id: item.id,
                name: item.name.clone(),
                unit_price: item.price,
                quantity: 1,
            });
        }
    }

    /// Removes one unit of a menu item.
    ///
    /// A line whose quantity reaches zero disappears from the order.
    /// Absent ids and post-submit taps are ignored.
    pub fn remove_item(&mut self, item_id: u32) {
        if self.state.is_submitted() {
            return;
        }
        if let Some(pos) = self.lines.iter().position(|l| l.item_id == item_id) {
            if self.lines[pos].quantity > 1 {
                self.lines[pos].quantity -= 1;
            } else {
                self.lines.remove(pos);
            }
        }
    }

    /// Sends the order to the kitchen.
    ///
    /// Requires at least one line. On success the handler receives the
    /// ticket exactly once and the pad freezes.
    ///
    /// # Errors
    /// Returns [`SubmitError::AlreadySubmitted`] after a successful
    /// submit, or [`SubmitError::EmptyOrder`] while no lines exist.
    pub fn submit(&mut self) -> SubmitResult<OrderTicket> {
        if self.state.is_submitted() {
            return Err(SubmitError::AlreadySubmitted);
        }
        if self.lines.is_empty() {
            return Err(SubmitError::EmptyOrder);
        }
        let ticket = OrderTicket {
            lines: self.lines.clone(),
            total: money::round2(self.total()),
        };
        self.state = SubmissionState::Submitted;
        if let Some(handler) = self.handler.as_mut() {
            handler(&ticket);
        }
        tracing::debug!(lines = ticket.lines.len(), total = ticket.total, "order submitted");
        Ok(ticket)
    }
}
