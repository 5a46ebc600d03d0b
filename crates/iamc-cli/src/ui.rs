use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

/// Narrowest `COLUMNS` value honoured for table layout.
const MIN_COLUMNS: usize = 40;

/// Terminal preferences resolved once per process.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiPrefs {
    pub table_color: bool,
    pub term_width: Option<usize>,
}

impl UiPrefs {
    fn detect(flags: &GlobalFlags) -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some();
        let tty = std::io::stdout().is_terminal();
        Self {
            table_color: wants_color(flags.color, flags.format, tty && !no_color),
            term_width: columns(std::env::var("COLUMNS").ok().as_deref()),
        }
    }
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    if UI_PREFS.set(UiPrefs::detect(flags)).is_err() {
        tracing::debug!("ui preferences already initialised");
    }
}

#[must_use]
pub fn prefs() -> UiPrefs {
    UI_PREFS.get().copied().unwrap_or_default()
}

/// Colour only ever applies to tables; `auto` also needs a colour-capable
/// terminal.
fn wants_color(mode: ColorMode, format: OutputFormat, capable: bool) -> bool {
    format == OutputFormat::Table
        && match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => capable,
        }
}

fn columns(raw: Option<&str>) -> Option<usize> {
    raw.and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|width| *width >= MIN_COLUMNS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_is_limited_to_tables() {
        assert!(wants_color(ColorMode::Always, OutputFormat::Table, false));
        assert!(!wants_color(ColorMode::Always, OutputFormat::Json, true));
        assert!(wants_color(ColorMode::Auto, OutputFormat::Table, true));
        assert!(!wants_color(ColorMode::Auto, OutputFormat::Table, false));
        assert!(!wants_color(ColorMode::Never, OutputFormat::Table, true));
    }

    #[test]
    fn narrow_or_invalid_columns_are_ignored() {
        assert_eq!(columns(Some("120")), Some(120));
        assert_eq!(columns(Some("20")), None);
        assert_eq!(columns(Some("wide")), None);
        assert_eq!(columns(None), None);
    }
}
