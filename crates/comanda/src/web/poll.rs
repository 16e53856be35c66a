//! Poll voting view.
//!
//! Tallies stay hidden while the guest is choosing and are revealed in
//! place once the vote is cast, instead of swapping the whole widget
//! for a confirmation banner.
//!
//! Element layout:
//! ```text
//! #poll
//!   #poll-question
//!   #poll-option-{id}         one button per option
//!   #poll-votes-{id}          tally, hidden until the vote is cast
//!   #poll-submit              "Vote", hidden after the vote
//!   #poll-confirmation        (hidden while editing)
//! ```

use super::dom::{DomElement, DomEvent, MockDom};
use crate::core::poll::{Ballot, Poll};

/// Actions the poll elements can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollAction {
    /// Pick an option
    Choose(u32),
    /// Cast the vote
    Submit,
}

/// Maps a clicked element ID to its action
#[must_use]
pub fn action_for(element_id: &str) -> Option<PollAction> {
    if element_id == "poll-submit" {
        return Some(PollAction::Submit);
    }
    element_id
        .strip_prefix("poll-option-")?
        .parse()
        .ok()
        .map(PollAction::Choose)
}

/// Poll wired to a mock DOM
#[derive(Debug)]
pub struct PollView {
    /// The poll instance
    poll: Poll,
    /// Mock DOM the view renders into
    dom: MockDom,
}

impl PollView {
    /// Creates a view over the given poll
    #[must_use]
    pub fn new(poll: Poll) -> Self {
        let dom = build_dom(&poll);
        let mut view = Self { poll, dom };
        view.sync_dom();
        view
    }

    /// Registers a handler invoked once when the vote is cast
    pub fn on_submit<F>(&mut self, handler: F)
    where
        F: FnMut(&Ballot) + 'static,
    {
        self.poll.on_submit(handler);
    }

    /// Returns a reference to the poll
    #[must_use]
    pub fn poll(&self) -> &Poll {
        &self.poll
    }

    /// Returns a mutable reference to the poll
    pub fn poll_mut(&mut self) -> &mut Poll {
        &mut self.poll
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

    /// Simulates clicking an option button
    pub fn choose(&mut self, option_id: u32) {
        self.handle_event(DomEvent::click(&format!("poll-option-{option_id}")));
    }

    /// Simulates clicking the vote button
    pub fn click_submit(&mut self) {
        self.handle_event(DomEvent::click("poll-submit"));
    }

    /// Routes a DOM event to the poll and re-renders.
    ///
    /// Refused submits leave the view unchanged.
    pub fn handle_event(&mut self, event: DomEvent) {
        self.dom.dispatch_event(event.clone());
        match event {
            DomEvent::Click { element_id } => match action_for(&element_id) {
                Some(PollAction::Choose(id)) => self.poll.select(id),
                Some(PollAction::Submit) => {
                    let _ = self.poll.submit();
                }
                None => {}
            },
            DomEvent::Submit { element_id } if element_id == "poll" => {
                let _ = self.poll.submit();
            }
            _ => {}
        }
        self.sync_dom();
    }

    /// Gets the rendered tally text for one option
    #[must_use]
    pub fn votes_text(&self, option_id: u32) -> Option<&str> {
        self.dom.get_element_text(&format!("poll-votes-{option_id}"))
    }

    /// Whether the tallies are revealed
    #[must_use]
    pub fn results_visible(&self) -> bool {
        self.poll
            .options()
            .iter()
            .all(|o| self.dom.get_element_visible(&format!("poll-votes-{}", o.id)) == Some(true))
    }

    /// Whether the thanks message is showing
    #[must_use]
    pub fn confirmation_visible(&self) -> bool {
        self.dom
            .get_element_visible("poll-confirmation")
            .unwrap_or(false)
    }

    /// Synchronizes DOM state with poll state
    fn sync_dom(&mut self) {
        let question = self.poll.question().to_string();
        self.dom.set_element_text("poll-question", &question);

        let submitted = self.poll.state().is_submitted();
        let selected = self.poll.selected();
        let tallies: Vec<(u32, u32)> = self
            .poll
            .options()
            .iter()
            .map(|o| (o.id, o.votes))
            .collect();

        for (id, votes) in tallies {
            let option_id = format!("poll-option-{id}");
            if let Some(button) = self.dom.get_element_mut(&option_id) {
                if selected == Some(id) {
                    button.add_class("selected");
                } else {
                    button.remove_class("selected");
                }
            }
            let votes_id = format!("poll-votes-{id}");
            self.dom.set_element_text(&votes_id, &votes.to_string());
            self.dom.set_element_visible(&votes_id, submitted);
        }

        self.dom.set_element_visible("poll-submit", !submitted);
        self.dom.set_element_visible("poll-confirmation", submitted);
    }
}

/// Builds the poll DOM structure
fn build_dom(poll: &Poll) -> MockDom {
    let mut root = DomElement::new("div")
        .with_id("poll")
        .with_class("poll-widget")
        .with_child(DomElement::new("h2").with_id("poll-question"));

    for option in poll.options() {
        root = root
            .with_child(
                DomElement::new("button")
                    .with_id(&format!("poll-option-{}", option.id))
                    .with_class("poll-option")
                    .with_text(&option.label),
            )
            .with_child(
                DomElement::new("span")
                    .with_id(&format!("poll-votes-{}", option.id))
                    .with_class("poll-tally")
                    .with_visible(false),
            );
    }

    root = root
        .with_child(DomElement::new("button").with_id("poll-submit").with_text("Vote"))
        .with_child(
            DomElement::new("div")
                .with_id("poll-confirmation")
                .with_class("confirmation")
                .with_text("Thanks for voting!")
                .with_visible(false),
        );

    let mut dom = MockDom::new();
    dom.register_subtree(&root);
    dom.root = root;
    dom
}
