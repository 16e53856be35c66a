//! Web front-end for the guest components.
//!
//! Every view renders into a [`MockDom`], so the full widget behavior
//! is testable without a browser. The `wasm` feature adds real browser
//! bindings on top of the same cores.

#[cfg(feature = "wasm")]
pub mod browser;
pub mod dom;
pub mod feedback;
pub mod menu;
pub mod order;
pub mod poll;
pub mod tip;

#[cfg(feature = "wasm")]
pub use browser::{BrowserFeedbackForm, BrowserTipCalculator};
pub use dom::{DomElement, DomEvent, MockDom};
pub use feedback::{FeedbackAction, FeedbackFormView};
pub use menu::MenuBoardView;
pub use order::{OrderAction, OrderPadView};
pub use poll::{PollAction, PollView};
pub use tip::{TipAction, TipCalculatorView};
