//! User-facing washmath errors.

use std::error::Error;
use std::io::{self, Write};
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

/// Renders `err` as `error: <message>`, with the prefix in bold red when `color` is set.
pub fn emit_error(err: &dyn Error, color: bool) -> String {
    match render(err, color) {
        Ok(emitted) => emitted,
        Err(_) => format!("error: {}", err),
    }
}

fn render(err: &dyn Error, color: bool) -> io::Result<String> {
    let mut buffer = if color {
        Buffer::ansi()
    } else {
        Buffer::no_color()
    };
    buffer.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write!(buffer, "error")?;
    buffer.reset()?;
    write!(buffer, ": {}", err)?;
    Ok(String::from_utf8_lossy(buffer.as_slice()).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use libwashmath::FractionError;

    #[test]
    fn plain() {
        let emitted = emit_error(&FractionError::DivisionByZero, false);
        assert_eq!(emitted, "error: 0 cannot be the denominator of a fraction.");
    }

    #[test]
    fn colored() {
        let emitted = emit_error(&FractionError::ZeroPowerOfZero, true);
        assert!(emitted.starts_with("\x1b["));
        assert!(emitted.ends_with(": Cannot raise 0 to the zeroth power."));
    }
}
