/// Tools a UI calls to drive the tracker
///
/// Each tool maps one UI event (month change, goal add/delete, cell click,
/// redraw, report) to a typed request and response. The stdio server routes
/// tool calls here.

pub mod goal;
pub mod overview;
pub mod select;
pub mod toggle;
pub mod yearly;

// Re-export tool functions for easy access
pub use goal::*;
pub use overview::*;
pub use select::*;
pub use toggle::*;
pub use yearly::*;
