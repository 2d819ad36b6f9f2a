//! Text stylers
//!
//! A [`Styler`] is a small value describing how a token is decorated on the
//! console (foreground color, bold, italic). Constructors are `const` so the
//! semantic logger table can live in a `static`.

use colored::{Color, Colorize};
use tracing::debug;

/// Decoration applied to a single output token
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Styler {
    color: Option<Color>,
    bold: bool,
    italic: bool,
}

impl Styler {
    /// No decoration at all
    pub const PLAIN: Styler = Styler::new();

    /// Neutral gray, used for timestamps and as the default title style
    pub const GRAY: Styler = Styler::new().color(Color::BrightBlack);

    /// Plain white, the default message style
    pub const WHITE: Styler = Styler::new().color(Color::White);

    pub const fn new() -> Self {
        Self {
            color: None,
            bold: false,
            italic: false,
        }
    }

    pub const fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Decorate `text`. The visible characters are never changed.
    pub fn apply(&self, text: &str) -> String {
        let mut styled = text.normal();
        if let Some(color) = self.color {
            styled = styled.color(color);
        }
        if self.bold {
            styled = styled.bold();
        }
        if self.italic {
            styled = styled.italic();
        }
        styled.to_string()
    }
}

/// Title and message stylers for one kind of log line
///
/// A missing styler falls back to [`Styler::GRAY`] for the title and
/// [`Styler::WHITE`] for the message.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LogStyle {
    pub title: Option<Styler>,
    pub message: Option<Styler>,
}

impl LogStyle {
    pub const DEFAULT: LogStyle = LogStyle::new();

    pub const fn new() -> Self {
        Self {
            title: None,
            message: None,
        }
    }

    pub const fn with_title(mut self, styler: Styler) -> Self {
        self.title = Some(styler);
        self
    }

    pub const fn with_message(mut self, styler: Styler) -> Self {
        self.message = Some(styler);
        self
    }

    pub const fn title_styler(&self) -> Styler {
        match self.title {
            Some(styler) => styler,
            None => Styler::GRAY,
        }
    }

    pub const fn message_styler(&self) -> Styler {
        match self.message {
            Some(styler) => styler,
            None => Styler::WHITE,
        }
    }
}

/// Force styling on or off for the whole process.
///
/// `None` returns to detection from the terminal and the
/// `NO_COLOR` / `CLICOLOR` / `CLICOLOR_FORCE` environment variables.
pub fn set_colors(enabled: Option<bool>) {
    match enabled {
        Some(enabled) => {
            debug!(enabled, "Forcing console colors");
            colored::control::set_override(enabled);
        }
        None => colored::control::unset_override(),
    }
}
