//! Colored terminal output utilities.

use std::io;

use console::{Style, Term};
use mdocs_tree::Color;

/// Terminal output formatter.
///
/// Results go to stdout, diagnostics to stderr.
pub(crate) struct Output {
    out: Term,
    err: Term,
    red: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            red: Style::new().red(),
        }
    }

    /// Print a result line to stdout.
    ///
    /// A closed pipe (e.g. `mdocs tree | head`) is not an error.
    pub(crate) fn line(&self, msg: &str) -> io::Result<()> {
        ignore_broken_pipe(self.out.write_line(msg))
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.err.write_line(&self.red.apply_to(msg).to_string());
    }
}

fn ignore_broken_pipe(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

/// Paint a label in its node color; uncolored nodes stay plain.
pub(crate) fn paint(label: &str, color: Option<Color>) -> String {
    let Some(color) = color else {
        return label.to_owned();
    };
    let style = Style::new().for_stdout();
    let style = match color {
        Color::Red => style.red(),
        Color::Green => style.green(),
        Color::Yellow => style.yellow(),
        Color::Blue => style.blue(),
        Color::Magenta => style.magenta(),
        Color::Cyan => style.cyan(),
        Color::White => style.white(),
    };
    style.apply_to(label).to_string()
}
