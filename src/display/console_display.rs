use super::DisplaySink;
use std::{
    io::Write,
    sync::{Mutex, MutexGuard, PoisonError},
};

struct ConsoleState<W> {
    out: W,
    inline: bool,
    /// Visible width of the message currently on the line.
    last_len: usize,
}

impl<W: Write> ConsoleState<W> {
    fn clear_line(&mut self) {
        if self.inline && self.last_len > 0 {
            let _ = write!(self.out, "\r{}\r", " ".repeat(self.last_len));
        }
    }
}

/// Console sink overwriting its current line with `\r` while inline.
///
/// Output errors are swallowed, a broken console must not end a flight.
pub(crate) struct ConsoleDisplay<W: Write + Send> {
    state: Mutex<ConsoleState<W>>,
}

impl<W: Write + Send> ConsoleDisplay<W> {
    pub(crate) fn new(out: W) -> Self {
        Self { state: Mutex::new(ConsoleState { out, inline: false, last_len: 0 }) }
    }

    fn lock(&self) -> MutexGuard<'_, ConsoleState<W>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Hands back the underlying writer.
    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.state.into_inner().unwrap_or_else(PoisonError::into_inner).out
    }
}

impl<W: Write + Send> DisplaySink for ConsoleDisplay<W> {
    fn write(&self, msg: &str) {
        let mut state = self.lock();
        state.clear_line();
        let _ = write!(state.out, "{msg}");
        let _ = state.out.flush();
        state.last_len = msg.chars().count();
    }

    fn write_line(&self, msg: &str) {
        let mut state = self.lock();
        state.clear_line();
        let _ = writeln!(state.out, "{msg}");
        let _ = state.out.flush();
        state.last_len = 0;
    }

    fn set_inline(&self, inline: bool) {
        let mut state = self.lock();
        if state.inline && !inline && state.last_len > 0 {
            let _ = writeln!(state.out);
            let _ = state.out.flush();
            state.last_len = 0;
        }
        state.inline = inline;
    }
}
