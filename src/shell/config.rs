// ============================================================================
// Shell Configuration
// Output style of the converter shell
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum prompt length accepted by [`ShellConfig::validate`]
pub const MAX_PROMPT_LEN: usize = 32;

/// How the shell renders its answers
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShellConfig {
    /// Overline vinculum numerals and print values as `N, p/q`
    pub pretty: bool,

    /// End the overline's first line with `\r\n` instead of `\n`
    pub windows_eol: bool,

    /// Printed before each interactive input line
    pub prompt: String,
}

impl ShellConfig {
    /// Create a configuration with plain output and the default prompt
    pub fn new() -> Self {
        Self {
            pretty: false,
            windows_eol: cfg!(windows),
            prompt: "> ".to_string(),
        }
    }

    /// Builder method: Set pretty printing
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Builder method: Set the overline line ending
    pub fn with_windows_eol(mut self, windows_eol: bool) -> Self {
        self.windows_eol = windows_eol;
        self
    }

    /// Builder method: Set the prompt
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.prompt.len() > MAX_PROMPT_LEN {
            return Err(format!(
                "Prompt cannot be longer than {} bytes",
                MAX_PROMPT_LEN
            ));
        }
        if self.prompt.contains(['\n', '\r']) {
            return Err("Prompt cannot contain line breaks".to_string());
        }
        Ok(())
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Presets
// ============================================================================

impl ShellConfig {
    /// Interactive session: pretty printing on
    pub fn interactive() -> Self {
        Self::new().with_pretty(true)
    }

    /// Command-line arguments: plain output, no prompt
    pub fn one_shot() -> Self {
        Self::new().with_pretty(false).with_prompt("")
    }
}
