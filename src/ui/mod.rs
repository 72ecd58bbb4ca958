//! Terminal presentation: theme tokens and line output

pub mod output;
pub mod theme;

pub use output::UiContext;
pub use theme::Icon;
