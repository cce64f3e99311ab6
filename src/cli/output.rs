//! Terminal output for progress, warnings and errors.

use std::io::{self, IsTerminal, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Writes user-facing lines.
///
/// Progress goes to stdout, warnings and errors to stderr. Color is only used
/// when the target stream is a terminal.
#[derive(Debug, Clone, Copy)]
pub struct OutputManager {
    stdout_color: ColorChoice,
    stderr_color: ColorChoice,
}

impl Default for OutputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputManager {
    /// Creates an output manager for the current process streams
    pub fn new() -> Self {
        Self {
            stdout_color: color_choice(io::stdout().is_terminal()),
            stderr_color: color_choice(io::stderr().is_terminal()),
        }
    }

    /// Progress line on stdout
    pub fn progress(&self, message: &str) -> io::Result<()> {
        writeln!(io::stdout().lock(), "{message}")
    }

    /// Bold section header on stdout
    pub fn section(&self, title: &str) -> io::Result<()> {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan)).set_bold(true);
        write_line(StandardStream::stdout(self.stdout_color), &spec, title)
    }

    /// Yellow warning on stderr
    pub fn warn(&self, message: &str) -> io::Result<()> {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow));
        write_line(StandardStream::stderr(self.stderr_color), &spec, message)
    }

    /// Red error on stderr
    pub fn error(&self, message: &str) -> io::Result<()> {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        write_line(StandardStream::stderr(self.stderr_color), &spec, message)
    }

    /// Verbatim text on stdout, newline-terminated
    pub fn raw(&self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        if !text.ends_with('\n') {
            stdout.write_all(b"\n")?;
        }
        stdout.flush()
    }
}

fn color_choice(is_terminal: bool) -> ColorChoice {
    if is_terminal {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

fn write_line(mut stream: StandardStream, spec: &ColorSpec, message: &str) -> io::Result<()> {
    stream.set_color(spec)?;
    write!(stream, "{message}")?;
    stream.reset()?;
    writeln!(stream)
}
