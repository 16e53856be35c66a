//! Feedback form view.
//!
//! Unlike the other forms, a refused submit here surfaces its reason in
//! an error element instead of staying silent, so guests learn why the
//! comment box is required.
//!
//! Element layout:
//! ```text
//! #feedback
//!   #feedback-form            (hidden after submit)
//!     #feedback-name-input
//!     #feedback-star-1 .. #feedback-star-5
//!     #feedback-rating        "4 of 5" while a rating is picked
//!     #feedback-comment-input
//!     #feedback-error         (visible while a refusal is showing)
//!     #feedback-submit
//!   #feedback-confirmation    (hidden while editing)
//! ```

use super::dom::{DomElement, DomEvent, MockDom};
use crate::core::feedback::{FeedbackEntry, FeedbackForm, Rating};
use crate::core::SubmitError;

/// Actions the feedback elements can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackAction {
    /// Pick a star rating
    Rate(Rating),
    /// Submit the feedback
    Submit,
}

/// Maps a clicked element ID to its action
#[must_use]
pub fn action_for(element_id: &str) -> Option<FeedbackAction> {
    if element_id == "feedback-submit" {
        return Some(FeedbackAction::Submit);
    }
    let value = element_id.strip_prefix("feedback-star-")?.parse::<u8>().ok()?;
    Rating::from_value(value).map(FeedbackAction::Rate)
}

/// Feedback form wired to a mock DOM
#[derive(Debug)]
pub struct FeedbackFormView {
    /// The form instance
    form: FeedbackForm,
    /// Mock DOM the view renders into
    dom: MockDom,
    /// Refusal currently showing, if any
    last_error: Option<SubmitError>,
}

impl Default for FeedbackFormView {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedbackFormView {
    /// Creates a view over a fresh form
    #[must_use]
    pub fn new() -> Self {
        let mut view = Self {
            form: FeedbackForm::new(),
            dom: build_dom(),
            last_error: None,
        };
        view.sync_dom();
        view
    }

    /// Registers a handler invoked once when the feedback is submitted
    pub fn on_submit<F>(&mut self, handler: F)
    where
        F: FnMut(&FeedbackEntry) + 'static,
    {
        self.form.on_submit(handler);
    }

    /// Returns a reference to the form
    #[must_use]
    pub fn form(&self) -> &FeedbackForm {
        &self.form
    }

    /// Returns a mutable reference to the form
    pub fn form_mut(&mut self) -> &mut FeedbackForm {
        &mut self.form
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

    /// Simulates typing into the name field
    pub fn type_name(&mut self, text: &str) {
        self.handle_event(DomEvent::input("feedback-name-input", text));
    }

    /// Simulates typing into the comment field
    pub fn type_comment(&mut self, text: &str) {
        self.handle_event(DomEvent::input("feedback-comment-input", text));
    }

    /// Simulates clicking a star button
    pub fn rate(&mut self, rating: Rating) {
        self.handle_event(DomEvent::click(&format!("feedback-star-{}", rating.value())));
    }

    /// Simulates clicking the submit button
    pub fn click_submit(&mut self) {
        self.handle_event(DomEvent::click("feedback-submit"));
    }

    /// Routes a DOM event to the form and re-renders
    pub fn handle_event(&mut self, event: DomEvent) {
        self.dom.dispatch_event(event.clone());
        match event {
            DomEvent::Click { element_id } => match action_for(&element_id) {
                Some(FeedbackAction::Rate(rating)) => {
                    self.form.select_rating(rating);
                    self.last_error = None;
                }
                Some(FeedbackAction::Submit) => self.submit(),
                None => {}
            },
            DomEvent::Input { element_id, value } => {
                match element_id.as_str() {
                    "feedback-name-input" => self.form.set_name(&value),
                    "feedback-comment-input" => self.form.set_comment(&value),
                    _ => {}
                }
                self.last_error = None;
            }
            DomEvent::Submit { element_id } if element_id == "feedback-form" => self.submit(),
            _ => {}
        }
        self.sync_dom();
    }

    /// Gets the error display text, if a refusal is showing
    #[must_use]
    pub fn error_text(&self) -> Option<&str> {
        self.last_error?;
        self.dom.get_element_text("feedback-error")
    }

    /// Whether the thank-you message is showing
    #[must_use]
    pub fn confirmation_visible(&self) -> bool {
        self.dom
            .get_element_visible("feedback-confirmation")
            .unwrap_or(false)
    }

    fn submit(&mut self) {
        match self.form.submit() {
            // Repeat clicks on a submitted form stay silent
            Ok(_) | Err(SubmitError::AlreadySubmitted) => self.last_error = None,
            Err(e) => self.last_error = Some(e),
        }
    }

    /// Synchronizes DOM state with form state
    fn sync_dom(&mut self) {
        let name = self.form.name().to_string();
        let comment = self.form.comment().to_string();
        if let Some(input) = self.dom.get_element_mut("feedback-name-input") {
            input.set_text(&name);
            input.attributes.insert("value".to_string(), name);
        }
        if let Some(input) = self.dom.get_element_mut("feedback-comment-input") {
            input.set_text(&comment);
            input.attributes.insert("value".to_string(), comment);
        }

        let rating = self.form.rating();
        for candidate in Rating::ALL {
            let filled = rating.is_some_and(|r| candidate.value() <= r.value());
            let id = format!("feedback-star-{}", candidate.value());
            if let Some(star) = self.dom.get_element_mut(&id) {
                if filled {
                    star.add_class("filled");
                } else {
                    star.remove_class("filled");
                }
            }
        }
        let rating_text = rating.map_or(String::new(), |r| format!("{} of 5", r.value()));
        self.dom.set_element_text("feedback-rating", &rating_text);

        let error_text = self.last_error.map_or(String::new(), |e| e.to_string());
        self.dom.set_element_text("feedback-error", &error_text);
        self.dom
            .set_element_visible("feedback-error", self.last_error.is_some());

        let submitted = self.form.state().is_submitted();
        self.dom.set_element_visible("feedback-form", !submitted);
        self.dom.set_element_visible("feedback-confirmation", submitted);
    }
}

/// Builds the feedback form DOM structure
fn build_dom() -> MockDom {
    let mut form = DomElement::new("form").with_id("feedback-form").with_child(
        DomElement::new("input")
            .with_id("feedback-name-input")
            .with_attr("type", "text")
            .with_attr("placeholder", "Your name (optional)"),
    );

    for rating in Rating::ALL {
        form = form.with_child(
            DomElement::new("button")
                .with_id(&format!("feedback-star-{}", rating.value()))
                .with_class("star-btn")
                .with_text("*"),
        );
    }

    form = form
        .with_child(DomElement::new("span").with_id("feedback-rating"))
        .with_child(
            DomElement::new("textarea")
                .with_id("feedback-comment-input")
                .with_attr("placeholder", "Tell us about your visit"),
        )
        .with_child(
            DomElement::new("div")
                .with_id("feedback-error")
                .with_class("error")
                .with_visible(false),
        )
        .with_child(DomElement::new("button").with_id("feedback-submit").with_text("Send feedback"));

    let confirmation = DomElement::new("div")
        .with_id("feedback-confirmation")
        .with_class("confirmation")
        .with_text("Thanks for your feedback!")
        .with_visible(false);

    let root = DomElement::new("div")
        .with_id("feedback")
        .with_class("feedback-widget")
        .with_child(form)
        .with_child(confirmation);

    let mut dom = MockDom::new();
    dom.register_subtree(&root);
    dom.root = root;
    dom
}
