//! Terminal presentation: setup, theme, widgets, and frame composition.
pub mod terminal;
pub mod theme;
pub mod ui;
pub mod widgets;
