// ============================================================================
// Converter Shell
// Line-oriented commands around the codec
// ============================================================================
//
// Each line's first whitespace-delimited token (lowercased) is a command or
// something to convert. Decimal text becomes a numeral; anything else is
// parsed as a numeral and printed as a value.

mod config;

pub use config::{ShellConfig, MAX_PROMPT_LEN};

use crate::codec::{encode_fraction, parse, GLYPHS};
use crate::format::{overline, pretty_fraction};
use crate::numeric::{
    Fraction, RomanResult, BASIC_MAX, BASIC_MIN, EXTENDED_MAX, EXTENDED_MIN, ZERO,
};
use rust_decimal::Decimal;
use std::fmt::Write;
use std::str::FromStr;

const HELP: &str = "\
Enter a number to get its numeral, or a numeral to get its value.
  commands: help info ascii pretty ping ave moo quit exit
  numerals: M D C L X V I, _..._ multiplies by 1000, S = 1/2, . = 1/12
  zero:     NULLA";

const MOO: &str = r"
         (__)
         (oo)
   /------\/
  / |    ||
 *  /\---/\
    ~~   ~~
 ..Mugit!";

/// What the caller should do with a line's result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print this text
    Output(String),
    /// Print nothing
    Nothing,
    /// End the session
    Quit,
}

/// Converter session state
#[derive(Debug, Clone, Default)]
pub struct Shell {
    config: ShellConfig,
}

impl Shell {
    pub fn new(config: ShellConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Run one input line.
    pub fn execute(&mut self, line: &str) -> Reply {
        let token = line
            .split_whitespace()
            .next()
            .unwrap_or("")
            .to_lowercase();
        tracing::debug!(token = %token, "shell input");

        match token.as_str() {
            "" => Reply::Nothing,
            "help" => Reply::Output(HELP.to_string()),
            "info" => Reply::Output(info()),
            "ascii" => Reply::Output(glyph_table()),
            "pretty" => {
                self.config.pretty = !self.config.pretty;
                let state = if self.config.pretty { "on" } else { "off" };
                Reply::Output(format!("pretty printing {}", state))
            },
            "ping" => Reply::Output("pong".to_string()),
            "ave" => Reply::Output("Ave, amice!".to_string()),
            "moo" => Reply::Output(MOO.to_string()),
            "quit" | "exit" => Reply::Quit,
            input => match self.convert(input) {
                Ok(text) => Reply::Output(text),
                Err(error) => Reply::Output(format!("error: {}", error)),
            },
        }
    }

    fn convert(&self, input: &str) -> RomanResult<String> {
        match parse_decimal(input) {
            Some(number) => {
                let numeral = encode_fraction(Fraction::from_decimal(number)?);
                if self.config.pretty {
                    Ok(overline(&numeral, self.config.windows_eol)?.to_string())
                } else {
                    Ok(numeral.to_string())
                }
            },
            None => {
                let value = parse(input)?;
                if self.config.pretty {
                    Ok(pretty_fraction(value).to_string())
                } else {
                    Ok(value.to_f64().to_string())
                }
            },
        }
    }
}

/// Decimal text, plain or scientific. Numerals never contain a digit, so
/// the two cannot be confused.
fn parse_decimal(input: &str) -> Option<Decimal> {
    if !input.bytes().any(|c| c.is_ascii_digit()) {
        return None;
    }
    Decimal::from_str(input)
        .or_else(|_| Decimal::from_scientific(input))
        .ok()
}

fn info() -> String {
    format!(
        "basic range:    {} ..= {}\n\
         extended range: {} ..= {}\n\
         real range:     {:.7} ..= {:.7}\n\
         zero:           {}",
        BASIC_MIN,
        BASIC_MAX,
        Fraction::MIN,
        Fraction::MAX,
        EXTENDED_MIN,
        EXTENDED_MAX,
        ZERO
    )
}

fn glyph_table() -> String {
    let mut out = String::from("glyph  value  max repeats");
    for glyph in &GLYPHS {
        let value = if glyph.is_fractional() {
            format!("{}/12", glyph.value)
        } else {
            glyph.value.to_string()
        };
        let _ = write!(out, "\n{:<5}  {:>5}  {}", glyph.chars, value, glyph.max_reps);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(shell: &mut Shell, line: &str) -> String {
        match shell.execute(line) {
            Reply::Output(text) => text,
            other => panic!("expected output for {:?}, got {:?}", line, other),
        }
    }

    #[test]
    fn test_commands() {
        let mut shell = Shell::new(ShellConfig::one_shot());
        assert_eq!(shell.execute(""), Reply::Nothing);
        assert_eq!(shell.execute("   "), Reply::Nothing);
        assert_eq!(shell.execute("quit"), Reply::Quit);
        assert_eq!(shell.execute("EXIT now"), Reply::Quit);
        assert_eq!(output(&mut shell, "ping"), "pong");
        assert!(output(&mut shell, "help").contains("NULLA"));
        assert!(output(&mut shell, "info").contains("-3999999, -11/12"));
        assert!(output(&mut shell, "moo").contains("(oo)"));
        assert!(output(&mut shell, "ave").starts_with("Ave"));
    }

    #[test]
    fn test_ascii_lists_every_glyph() {
        let mut shell = Shell::default();
        let table = output(&mut shell, "ascii");
        assert_eq!(table.lines().count(), GLYPHS.len() + 1);
        assert!(table.contains("6/12"));
    }

    #[test]
    fn test_pretty_toggle() {
        let mut shell = Shell::new(ShellConfig::one_shot());
        assert_eq!(output(&mut shell, "pretty"), "pretty printing on");
        assert!(shell.config().pretty);
        assert_eq!(output(&mut shell, "PRETTY"), "pretty printing off");
        assert!(!shell.config().pretty);
    }

    #[test]
    fn test_plain_conversions() {
        let mut shell = Shell::new(ShellConfig::one_shot());
        assert_eq!(output(&mut shell, "42"), "XLII");
        assert_eq!(output(&mut shell, "-1900051"), "-_MCM_LI");
        assert_eq!(output(&mut shell, "1.5"), "IS");
        assert_eq!(output(&mut shell, "0.000"), "NULLA");
        assert_eq!(output(&mut shell, "-0"), "NULLA");
        assert_eq!(output(&mut shell, "1e3"), "M");
        assert_eq!(output(&mut shell, "xlii"), "42");
        assert_eq!(output(&mut shell, "IS"), "1.5");
        assert_eq!(output(&mut shell, "nulla"), "0");
    }

    #[test]
    fn test_pretty_conversions() {
        let config = ShellConfig::interactive().with_windows_eol(false);
        let mut shell = Shell::new(config);
        assert_eq!(output(&mut shell, "-1900051"), " ___\n-MCMLI");
        assert_eq!(output(&mut shell, "-2.1666"), "-II..");
        assert_eq!(output(&mut shell, "-is.."), "-1, -2/3");
        assert_eq!(output(&mut shell, ".."), "1/6");
    }

    #[test]
    fn test_conversion_errors() {
        let mut shell = Shell::new(ShellConfig::one_shot());
        assert_eq!(
            output(&mut shell, "MMMM"),
            "error: character repeated too many times"
        );
        assert!(output(&mut shell, "5000000").starts_with("error: value out of extended range"));
        assert!(output(&mut shell, "hello").starts_with("error:"));
    }
}
