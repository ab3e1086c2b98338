use std::fmt;

/// Which handler a sidebar window runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    Power,
    Run,
    #[default]
    Desktop,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Power, Mode::Run, Mode::Desktop];

    /// Parse a command line or config value. Case-insensitive.
    pub fn from_arg(arg: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(arg.trim()))
    }

    /// Pick the mode from the command line, then the configured default, then
    /// [`Mode::Desktop`]. Unrecognized values are skipped with a warning.
    pub fn resolve(arg: Option<&str>, configured: Option<&str>) -> Self {
        for (source, value) in [("argument", arg), ("config", configured)] {
            let Some(value) = value else { continue };
            match Self::from_arg(value) {
                Some(mode) => return mode,
                None => log::warn!("unknown mode {value:?} from {source}"),
            }
        }
        Self::default()
    }

    pub fn name(self) -> &'static str {
        match self {
            Mode::Power => "power",
            Mode::Run => "run",
            Mode::Desktop => "desktop",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_names() {
        assert_eq!(Mode::from_arg("power"), Some(Mode::Power));
        assert_eq!(Mode::from_arg("RUN"), Some(Mode::Run));
        assert_eq!(Mode::from_arg("desktop"), Some(Mode::Desktop));
        assert_eq!(Mode::from_arg("launcher"), None);
    }

    #[test]
    fn argument_beats_config() {
        assert_eq!(Mode::resolve(Some("run"), Some("power")), Mode::Run);
    }

    #[test]
    fn unknown_argument_falls_back_to_config_then_default() {
        assert_eq!(Mode::resolve(Some("bogus"), Some("power")), Mode::Power);
        assert_eq!(Mode::resolve(Some("bogus"), Some("also-bogus")), Mode::Desktop);
        assert_eq!(Mode::resolve(None, None), Mode::Desktop);
    }
}
