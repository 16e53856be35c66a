//! Menu board view.
//!
//! A read-only rendering of the menu, grouped by section. Every item
//! row carries Edit and Delete buttons for the future admin surface,
//! but no action is wired to them yet: clicking them lands in the
//! event history and nothing else.
//!
//! Element layout:
//! ```text
//! #menu-board
//!   #menu-category-appetizers .. #menu-category-drinks
//!     #menu-item-{id}
//!       #menu-item-{id}-price
//!       #menu-item-{id}-edit
//!       #menu-item-{id}-delete
//! ```
//! Sections with no items are not rendered.

use super::dom::{DomElement, DomEvent, MockDom};
use crate::core::menu::{Menu, MenuItem};

/// Menu board wired to a mock DOM
#[derive(Debug)]
pub struct MenuBoardView {
    /// The menu being displayed
    menu: Menu,
    /// Mock DOM the view renders into
    dom: MockDom,
}

impl MenuBoardView {
    /// Creates a board rendering the given menu
    #[must_use]
    pub fn new(menu: Menu) -> Self {
        let dom = build_dom(&menu);
        Self { menu, dom }
    }

    /// Returns a reference to the menu
    #[must_use]
    pub const fn menu(&self) -> &Menu {
        &self.menu
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

    /// Records a DOM event.
    ///
    /// The board is read-only, so no event changes any state. Edit and
    /// Delete clicks are recorded for the admin surface to pick up
    /// later.
    pub fn handle_event(&mut self, event: DomEvent) {
        self.dom.dispatch_event(event);
    }

    /// Gets the rendered price text for one item
    #[must_use]
    pub fn price_text(&self, item_id: u32) -> Option<&str> {
        self.dom.get_element_text(&format!("menu-item-{item_id}-price"))
    }
}

/// Builds one item row with its admin buttons
fn build_item(item: &MenuItem) -> DomElement {
    DomElement::new("li")
        .with_id(&format!("menu-item-{}", item.id))
        .with_class("menu-item")
        .with_text(&item.name)
        .with_child(DomElement::new("p").with_class("item-description").with_text(&item.description))
        .with_child(
            DomElement::new("span")
                .with_id(&format!("menu-item-{}-price", item.id))
                .with_class("item-price")
                .with_text(&item.price_display()),
        )
        .with_child(
            DomElement::new("button")
                .with_id(&format!("menu-item-{}-edit", item.id))
                .with_class("admin-btn")
                .with_text("Edit"),
        )
        .with_child(
            DomElement::new("button")
                .with_id(&format!("menu-item-{}-delete", item.id))
                .with_class("admin-btn")
                .with_text("Delete"),
        )
}

/// Builds the menu board DOM structure
fn build_dom(menu: &Menu) -> MockDom {
    let mut board = DomElement::new("div").with_id("menu-board").with_class("menu-board");

    for category in menu.categories() {
        let mut section = DomElement::new("section")
            .with_id(&format!("menu-category-{}", category.label().to_lowercase()))
            .with_child(DomElement::new("h2").with_text(category.label()));
        for item in menu.in_category(category) {
            section = section.with_child(build_item(item));
        }
        board = board.with_child(section);
    }

    let mut dom = MockDom::new();
    dom.register_subtree(&board);
    dom.root = board;
    dom
}
