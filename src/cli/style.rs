//! Terminal styling for git-prep output
//!
//! Every colored string goes through [`Stylize`], so the palette lives in one
//! place and color detection (`NO_COLOR`, `CLICOLOR`, `CLICOLOR_FORCE`, TTY)
//! is left to `owo-colors`.
//!
//! | Tone       | Look   | Stream | Used for                              |
//! |------------|--------|--------|---------------------------------------|
//! | `accent`   | Cyan   | stdout | branch names, the pull request URL    |
//! | `success`  | Green  | stdout | check marks, configured values        |
//! | `error`    | Red    | stderr | failed steps, fatal errors            |
//! | `warn`     | Yellow | stderr | instructions the user has to act on   |
//! | `muted`    | Dim    | stdout | steps already finished                |
//! | `emphasis` | Bold   | stdout | headings, the step in progress        |

use indicatif::ProgressStyle;
use owo_colors::{OwoColorize, Style};
use std::fmt::{self, Display};
use std::sync::OnceLock;

pub use owo_colors::Stream;

/// Semantic color of a piece of output
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tone {
    Accent,
    Success,
    Error,
    Warn,
    Muted,
    Emphasis,
}

impl Tone {
    const fn style(self) -> Style {
        match self {
            Self::Accent => Style::new().cyan(),
            Self::Success => Style::new().green(),
            Self::Error => Style::new().red().bold(),
            Self::Warn => Style::new().yellow(),
            Self::Muted => Style::new().dimmed(),
            Self::Emphasis => Style::new().bold(),
        }
    }

    /// Stream whose color support decides whether to emit ANSI codes
    const fn stream(self) -> Stream {
        match self {
            Self::Error | Self::Warn => Stream::Stderr,
            _ => Stream::Stdout,
        }
    }
}

/// A value rendered in a [`Tone`]
#[derive(Clone, Debug)]
pub struct Styled<T> {
    value: T,
    tone: Tone,
    stream: Stream,
}

impl<T> Styled<T> {
    const fn new(value: T, tone: Tone) -> Self {
        Self {
            value,
            tone,
            stream: tone.stream(),
        }
    }

    /// Detect color support on stdout even for stderr-leaning tones.
    #[must_use]
    pub const fn for_stdout(mut self) -> Self {
        self.stream = Stream::Stdout;
        self
    }
}

impl<T: Display> Display for Styled<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = self.tone.style();
        write!(
            f,
            "{}",
            self.value.if_supports_color(self.stream, |v| v.style(style))
        )
    }
}

/// Semantic styling for anything printable
pub trait Stylize: Display {
    /// Cyan: branch names and URLs
    fn accent(&self) -> Styled<&Self> {
        Styled::new(self, Tone::Accent)
    }

    /// Green: success markers and configured values
    fn success(&self) -> Styled<&Self> {
        Styled::new(self, Tone::Success)
    }

    /// Bold red, checked against stderr
    fn error(&self) -> Styled<&Self> {
        Styled::new(self, Tone::Error)
    }

    /// Yellow, checked against stderr
    fn warn(&self) -> Styled<&Self> {
        Styled::new(self, Tone::Warn)
    }

    /// Dimmed secondary text
    fn muted(&self) -> Styled<&Self> {
        Styled::new(self, Tone::Muted)
    }

    /// Bold headings
    fn emphasis(&self) -> Styled<&Self> {
        Styled::new(self, Tone::Emphasis)
    }
}

impl<T: Display + ?Sized> Stylize for T {}

/// Green check mark
pub const fn check() -> Styled<&'static str> {
    Styled::new("✓", Tone::Success)
}

/// Red cross for failed steps
pub const fn cross() -> Styled<&'static str> {
    Styled::new("✗", Tone::Error)
}

/// `url` as an OSC 8 hyperlink when the terminal supports it, else plain text
pub fn hyperlink_url(stream: Stream, url: &str) -> String {
    let stream = match stream {
        Stream::Stdout => supports_hyperlinks::Stream::Stdout,
        Stream::Stderr => supports_hyperlinks::Stream::Stderr,
    };
    if supports_hyperlinks::on(stream) {
        terminal_link::Link::new(url, url).to_string()
    } else {
        url.to_string()
    }
}

/// Spinner shown while the executor runs git
pub fn spinner_style() -> ProgressStyle {
    static STYLE: OnceLock<ProgressStyle> = OnceLock::new();
    STYLE
        .get_or_init(|| {
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("hardcoded spinner template is valid")
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
        })
        .clone()
}
