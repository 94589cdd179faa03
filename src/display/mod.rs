//! Line oriented status output of a program run: the console, optionally mirrored
//! into an in-game text panel.

mod console_display;
mod display_sink;
mod ui_mirror;
#[cfg(test)]
mod tests;

pub(crate) use console_display::ConsoleDisplay;
pub(crate) use display_sink::{DisplaySink, InlineGuard, MirroredDisplay};
pub(crate) use ui_mirror::{UIMirror, UISetupError};
