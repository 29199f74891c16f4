use std::{fs, path::PathBuf, str::FromStr};

use life::{Pattern, pattern::GLIDER};

const DEFAULT_GENERATIONS: u64 = 100;

#[derive(Debug, PartialEq)]
pub struct Options {
    pub generations: u64,
    pub pattern_file: Option<PathBuf>,
}

impl Options {
    /// Parses `[GENERATIONS] [PATTERN_FILE]`.
    pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, String> {
        let mut args = args.into_iter();
        let generations = match args.next() {
            Some(s) => s
                .parse()
                .map_err(|e| format!("Invalid generation count {s:?}: {e}"))?,
            None => DEFAULT_GENERATIONS,
        };
        let pattern_file = args.next().map(PathBuf::from);
        if let Some(extra) = args.next() {
            return Err(format!("Unexpected argument {extra:?}"));
        }
        Ok(Self {
            generations,
            pattern_file,
        })
    }

    pub fn pattern(&self) -> Result<Pattern, String> {
        let Some(path) = &self.pattern_file else {
            return Ok(GLIDER.pattern());
        };
        let text = fs::read_to_string(path)
            .map_err(|e| format!("Cannot read {}: {e}", path.display()))?;
        Pattern::from_str(&text).map_err(|e| format!("{}: {e}", path.display()))
    }
}
