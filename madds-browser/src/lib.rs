//! MADDS Browser - picking a code by hand
//!
//! A drill-down and search state machine over the taxonomy. The caller
//! owns a [`BrowserState`], feeds it [`BrowserAction`]s and renders
//! [`BrowserState::visible_rows`]. Picking a sub without specific items, a
//! specific item or a sub/specific search hit emits a [`Selection`] and
//! resets the state.

pub mod rows;
pub mod selection;
pub mod state;

pub use rows::BrowserRow;
pub use selection::Selection;
pub use state::{BrowserAction, BrowserMode, BrowserState, IgnoreReason, StepOutcome};
