//! Stdin/stdout implementations of the engine's input and output.

use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::thread;
use std::time::Duration;

use colored::Colorize;

use ruin_engine::{InputProvider, OutputSink, Tone};

/// Reads answers from stdin.
pub struct StdinInput {
    reader: StdinLock<'static>,
    buf: Vec<u8>,
}

impl Default for StdinInput {
    fn default() -> Self {
        Self::new()
    }
}

impl StdinInput {
    pub fn new() -> Self {
        Self {
            reader: io::stdin().lock(),
            buf: Vec::new(),
        }
    }
}

impl InputProvider for StdinInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", prompt.bold())?;
        stdout.flush()?;

        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            // EOF
            writeln!(stdout)?;
            return Ok(None);
        }
        // bytes that are not UTF-8 become replacement characters, which no
        // path or answer matches
        let line = String::from_utf8_lossy(&self.buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Split a styled rendering of `text` into the escape codes around it.
///
/// Uncoloured output yields two empty strings.
fn style_bounds<'a>(styled: &'a str, text: &str) -> (&'a str, &'a str) {
    if text.is_empty() {
        return ("", "");
    }
    styled.split_once(text).unwrap_or(("", ""))
}

/// Writes to stdout, narration one character at a time.
pub struct PacedOutput<W: Write = Stdout> {
    out: W,
    delay: Duration,
    last: Option<Tone>,
}

impl PacedOutput {
    pub fn new(delay: Duration) -> Self {
        Self::with_writer(io::stdout(), delay)
    }
}

impl<W: Write> PacedOutput<W> {
    pub fn with_writer(out: W, delay: Duration) -> Self {
        Self {
            out,
            delay,
            last: None,
        }
    }

    /// Write `text` character by character between `open` and `close`,
    /// which are written whole.
    fn paced(&mut self, text: &str, open: &str, close: &str) -> io::Result<()> {
        write!(self.out, "{open}")?;
        if self.delay.is_zero() {
            write!(self.out, "{text}")?;
        } else {
            for c in text.chars() {
                write!(self.out, "{c}")?;
                self.out.flush()?;
                thread::sleep(self.delay);
            }
        }
        writeln!(self.out, "{close}")
    }
}

impl<W: Write> OutputSink for PacedOutput<W> {
    fn emit(&mut self, text: &str, tone: Tone) -> io::Result<()> {
        // blank line between a turn's story and the next stats block
        if tone == Tone::Status && self.last.is_some_and(|t| t != Tone::Status) {
            writeln!(self.out)?;
        }
        self.last = Some(tone);

        match tone {
            Tone::Narration => self.paced(text, "", ""),
            Tone::Status => writeln!(self.out, "{}", text.cyan()),
            Tone::Prompt => writeln!(self.out, "{}", text.bold()),
            Tone::Warning => {
                let styled = text.yellow().to_string();
                let (open, close) = style_bounds(&styled, text);
                self.paced(text, open, close)
            }
        }?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_bounds_around_text() {
        assert_eq!(
            style_bounds("\x1b[33mcareful\x1b[0m", "careful"),
            ("\x1b[33m", "\x1b[0m")
        );
        assert_eq!(style_bounds("careful", "careful"), ("", ""));
        assert_eq!(style_bounds("\x1b[33m\x1b[0m", ""), ("", ""));
    }

    #[test]
    fn escape_codes_stay_whole() {
        let mut sink = PacedOutput::with_writer(Vec::new(), Duration::from_millis(1));
        sink.paced("Not that way.", "\x1b[33m", "\x1b[0m").unwrap();
        let written = String::from_utf8(sink.out).unwrap();
        assert_eq!(written, "\x1b[33mNot that way.\x1b[0m\n");
    }

    #[test]
    fn status_block_is_set_apart() {
        let mut sink = PacedOutput::with_writer(Vec::new(), Duration::ZERO);
        sink.emit("The air hums.", Tone::Narration).unwrap();
        sink.emit("stats", Tone::Status).unwrap();
        sink.emit("inventory", Tone::Status).unwrap();
        let written = String::from_utf8(sink.out).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines[0], "The air hums.");
        assert_eq!(lines[1], "");
        assert_eq!(lines.len(), 4);
    }
}
