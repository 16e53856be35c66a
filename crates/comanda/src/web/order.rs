//! Order entry view.
//!
//! A point-of-sale pad: one tap key per menu item, a running line
//! list, and a send button. The line list is rebuilt from the pad
//! state on every event, the same way the other views re-render.
//!
//! Element layout:
//! ```text
//! #order-pad
//!   #order-form               (hidden after submit)
//!     #order-keys
//!       #order-add-{id}       one per menu item
//!       #order-remove-{id}    one per menu item
//!     #order-lines
//!       #order-line-{id}      "Espresso x2 = 7.50"
//!     #order-total
//!     #order-submit
//!   #order-confirmation       (hidden while editing)
//! ```

use super::dom::{DomElement, DomEvent, MockDom};
use crate::core::menu::Menu;
use crate::core::money;
use crate::core::order::{OrderPad, OrderTicket};

/// Actions the order pad elements can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    /// Add one unit of a menu item
    Add(u32),
    /// Remove one unit of a menu item
    Remove(u32),
    /// Send the order
    Submit,
}

/// Maps a clicked element ID to its action
#[must_use]
pub fn action_for(element_id: &str) -> Option<OrderAction> {
    if element_id == "order-submit" {
        return Some(OrderAction::Submit);
    }
    if let Some(rest) = element_id.strip_prefix("order-add-") {
        return rest.parse().ok().map(OrderAction::Add);
    }
    if let Some(rest) = element_id.strip_prefix("order-remove-") {
        return rest.parse().ok().map(OrderAction::Remove);
    }
    None
}

/// Order pad wired to a mock DOM
#[derive(Debug)]
pub struct OrderPadView {
    /// The pad instance
    pad: OrderPad,
    /// Mock DOM the view renders into
    dom: MockDom,
}

impl OrderPadView {
    /// Creates a view over an empty pad for the given menu
    #[must_use]
    pub fn new(menu: Menu) -> Self {
        let pad = OrderPad::new(menu);
        let dom = build_dom(pad.menu());
        let mut view = Self { pad, dom };
        view.sync_dom();
        view
    }

    /// Registers a handler invoked once when the order is sent
    pub fn on_submit<F>(&mut self, handler: F)
    where
        F: FnMut(&OrderTicket) + 'static,
    {
        self.pad.on_submit(handler);
    }

    /// Returns a reference to the pad
    #[must_use]
    pub fn pad(&self) -> &OrderPad {
        &self.pad
    }

    /// Returns a mutable reference to the pad
    pub fn pad_mut(&mut self) -> &mut OrderPad {
        &mut self.pad
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

    /// Simulates tapping an item key
    pub fn tap_add(&mut self, item_id: u32) {
        self.handle_event(DomEvent::click(&format!("order-add-{item_id}")));
    }

    /// Simulates tapping an item's remove key
    pub fn tap_remove(&mut self, item_id: u32) {
        self.handle_event(DomEvent::click(&format!("order-remove-{item_id}")));
    }

    /// Simulates clicking the send button
    pub fn click_submit(&mut self) {
        self.handle_event(DomEvent::click("order-submit"));
    }

    /// Routes a DOM event to the pad and re-renders.
    ///
    /// Refused submits leave the view unchanged.
    pub fn handle_event(&mut self, event: DomEvent) {
        self.dom.dispatch_event(event.clone());
        match event {
            DomEvent::Click { element_id } => match action_for(&element_id) {
                Some(OrderAction::Add(id)) => self.pad.add_item(id),
                Some(OrderAction::Remove(id)) => self.pad.remove_item(id),
                Some(OrderAction::Submit) => {
                    let _ = self.pad.submit();
                }
                None => {}
            },
            DomEvent::Submit { element_id } if element_id == "order-form" => {
                let _ = self.pad.submit();
            }
            _ => {}
        }
        self.sync_dom();
    }

    /// Gets the rendered text for one line
    #[must_use]
    pub fn line_text(&self, item_id: u32) -> Option<&str> {
        self.dom.get_element_text(&format!("order-line-{item_id}"))
    }

    /// Gets the running total display text
    #[must_use]
    pub fn total_text(&self) -> Option<&str> {
        self.dom.get_element_text("order-total")
    }

    /// Whether the kitchen confirmation is showing
    #[must_use]
    pub fn confirmation_visible(&self) -> bool {
        self.dom
            .get_element_visible("order-confirmation")
            .unwrap_or(false)
    }

    /// Synchronizes DOM state with pad state
    fn sync_dom(&mut self) {
        self.dom.clear_children("order-lines");
        for line in self.pad.lines() {
            let text = format!(
                "{} x{} = {}",
                line.name,
                line.quantity,
                money::format_amount(line.line_total())
            );
            let item = DomElement::new("li")
                .with_id(&format!("order-line-{}", line.item_id))
                .with_class("order-line")
                .with_text(&text);
            self.dom.append_child("order-lines", item);
        }

        self.dom
            .set_element_text("order-total", &money::format_amount(self.pad.total()));

        let submitted = self.pad.state().is_submitted();
        self.dom.set_element_visible("order-form", !submitted);
        self.dom.set_element_visible("order-confirmation", submitted);
    }
}

/// Builds the order pad DOM structure
fn build_dom(menu: &Menu) -> MockDom {
    let mut keys = DomElement::new("div").with_id("order-keys").with_class("order-keys");
    for item in menu.items() {
        keys = keys
            .with_child(
                DomElement::new("button")
                    .with_id(&format!("order-add-{}", item.id))
                    .with_class("item-key")
                    .with_text(&item.name),
            )
            .with_child(
                DomElement::new("button")
                    .with_id(&format!("order-remove-{}", item.id))
                    .with_class("remove-key")
                    .with_text("-"),
            );
    }

    let form = DomElement::new("form")
        .with_id("order-form")
        .with_child(keys)
        .with_child(DomElement::new("ul").with_id("order-lines").with_class("order-lines"))
        .with_child(DomElement::new("div").with_id("order-total").with_class("total-display"))
        .with_child(DomElement::new("button").with_id("order-submit").with_text("Send order"));

    let confirmation = DomElement::new("div")
        .with_id("order-confirmation")
        .with_class("confirmation")
        .with_text("Order sent to the kitchen")
        .with_visible(false);

    let root = DomElement::new("div")
        .with_id("order-pad")
        .with_class("order-pad")
        .with_child(form)
        .with_child(confirmation);

    let mut dom = MockDom::new();
    dom.register_subtree(&root);
    dom.root = root;
    dom
}
