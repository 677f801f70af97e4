//! What the terminal allows: color, unicode, width and output mode.

use std::io::IsTerminal;

use super::mode::{OutputFormat, OutputMode};

/// Width assumed when neither `COLUMNS` nor the terminal reports one.
const FALLBACK_WIDTH: usize = 80;

/// Columns spent on padding between the INPUT and FORMATTED cells.
const GUTTER: usize = 4;

/// Narrowest INPUT column worth showing; shorter cells are truncated to this.
const MIN_INPUT_WIDTH: usize = 8;

/// Resolved display settings for one command.
#[derive(Debug, Clone)]
pub struct UiContext {
    pub color: bool,
    pub unicode: bool,
    /// Columns available on the output stream
    pub width: usize,
    pub mode: OutputMode,
}

/// Facts about the stream a command writes to.
struct Stream {
    tty: bool,
    dumb: bool,
    width: Option<usize>,
}

impl Stream {
    fn stdout() -> Self {
        Self::probe(std::io::stdout().is_terminal(), fd::STDOUT)
    }

    fn stderr() -> Self {
        Self::probe(std::io::stderr().is_terminal(), fd::STDERR)
    }

    fn probe(tty: bool, descriptor: i32) -> Self {
        let dumb = std::env::var("TERM").is_ok_and(|term| term == "dumb");
        let width = columns_env().or_else(|| tty.then(|| window_columns(descriptor)).flatten());
        Self { tty, dumb, width }
    }

    fn allows_color(&self, no_color_flag: bool) -> bool {
        self.tty && !self.dumb && !no_color_flag && std::env::var_os("NO_COLOR").is_none()
    }
}

impl UiContext {
    /// Settings for command output on stdout.
    pub fn for_output(
        json: bool,
        format: Option<OutputFormat>,
        no_color_flag: bool,
        ascii: bool,
    ) -> Self {
        let stream = Stream::stdout();
        Self {
            color: stream.allows_color(no_color_flag),
            unicode: !ascii,
            width: stream.width.unwrap_or(FALLBACK_WIDTH),
            mode: OutputMode::resolve(json, format, stream.tty, stream.dumb),
        }
    }

    /// Settings for error reports on stderr, before any config is read.
    ///
    /// The mode still follows stdout so a piped command reports
    /// `error=...` lines while its stderr stays on the terminal.
    pub fn for_errors(no_color_flag: bool, ascii: bool) -> Self {
        let stream = Stream::stderr();
        let stdout = Stream::stdout();
        Self {
            color: stream.allows_color(no_color_flag),
            unicode: !ascii,
            width: stream.width.unwrap_or(FALLBACK_WIDTH),
            mode: OutputMode::resolve(false, None, stdout.tty, stdout.dumb),
        }
    }

    /// Room left for the INPUT column once the widest formatted amount
    /// (in chars) is placed on the same line.
    pub fn input_column_width(&self, widest_amount: usize) -> usize {
        self.width
            .saturating_sub(widest_amount + GUTTER)
            .max(MIN_INPUT_WIDTH)
    }
}

fn columns_env() -> Option<usize> {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|cols| cols.trim().parse::<usize>().ok())
        .filter(|&cols| cols > 0)
}

#[cfg(unix)]
mod fd {
    pub const STDOUT: i32 = libc::STDOUT_FILENO;
    pub const STDERR: i32 = libc::STDERR_FILENO;
}

#[cfg(not(unix))]
mod fd {
    pub const STDOUT: i32 = 1;
    pub const STDERR: i32 = 2;
}

#[cfg(unix)]
fn window_columns(descriptor: i32) -> Option<usize> {
    let mut size = libc::winsize {
        ws_row: 0,
        ws_col: 0,
        ws_xpixel: 0,
        ws_ypixel: 0,
    };
    // SAFETY: TIOCGWINSZ writes a winsize into `size` and nothing else.
    let status =
        unsafe { libc::ioctl(descriptor, libc::TIOCGWINSZ, &mut size as *mut libc::winsize) };
    (status == 0 && size.ws_col > 0).then_some(size.ws_col as usize)
}

#[cfg(not(unix))]
fn window_columns(_descriptor: i32) -> Option<usize> {
    None
}
