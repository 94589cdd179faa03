use super::{ConsoleDisplay, UIMirror};
use std::{io::Stdout, sync::Arc};

/// A line oriented text sink.
///
/// In inline mode [`DisplaySink::write`] replaces the current line instead of
/// appending to it.
pub(crate) trait DisplaySink: Send + Sync {
    fn write(&self, msg: &str);
    fn write_line(&self, msg: &str);
    /// Switches inline mode. Leaving inline mode terminates a pending inline line.
    fn set_inline(&self, inline: bool);
}

/// Keeps a sink in inline mode for its lifetime.
pub(crate) struct InlineGuard {
    sink: Arc<dyn DisplaySink>,
}

impl InlineGuard {
    pub(crate) fn new(sink: Arc<dyn DisplaySink>) -> Self {
        sink.set_inline(true);
        Self { sink }
    }
}

impl Drop for InlineGuard {
    fn drop(&mut self) { self.sink.set_inline(false); }
}

/// The process console, optionally mirrored into the game's UI.
pub(crate) struct MirroredDisplay {
    console: ConsoleDisplay<Stdout>,
    ui: Option<UIMirror>,
}

impl MirroredDisplay {
    pub(crate) fn new(ui: Option<UIMirror>) -> Self {
        Self { console: ConsoleDisplay::new(std::io::stdout()), ui }
    }
}

impl DisplaySink for MirroredDisplay {
    fn write(&self, msg: &str) {
        self.console.write(msg);
        if let Some(ui) = &self.ui {
            ui.show(msg);
        }
    }

    fn write_line(&self, msg: &str) {
        self.console.write_line(msg);
        if let Some(ui) = &self.ui {
            ui.show(msg);
        }
    }

    fn set_inline(&self, inline: bool) { self.console.set_inline(inline); }
}
