mod consts;
mod prelude;
mod resolve;
mod types;

pub use consts::*;
pub use resolve::{CutoffSide, CutoffStrategy, SlidingWindow};
pub use types::RawYear;

use chrono::{Datelike, Local};
use std::fmt;

/// Resolves possibly-abbreviated years against a cutoff year.
///
/// A year written with [`MAX_SHORT_YEAR_DIGITS`] characters or fewer, and
/// whose value is below [`CUTOFF_RANGE`], is placed in the 100-year window
/// ending at the cutoff year (inclusive). Everything else passes through
/// unchanged: longer spellings such as "0005", values of 100 and above, and
/// negative years.
///
/// # Example
/// ```
/// use year_cutoff::YearCutoff;
///
/// let cutoff = YearCutoff::new(2020);
/// assert_eq!(cutoff.interpret("10").unwrap(), 2010);
/// assert_eq!(cutoff.interpret("20").unwrap(), 2020);
/// assert_eq!(cutoff.interpret("30").unwrap(), 1930);
/// assert_eq!(cutoff.interpret("0005").unwrap(), 5);
/// assert_eq!(cutoff.interpret("1850").unwrap(), 1850);
/// ```
pub struct YearCutoff {
    cutoff_year: i32,
    strategy: Option<Box<dyn CutoffStrategy>>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Input was not a signed decimal integer after trimming.
    #[error("Invalid year: {text}")]
    InvalidYear {
        text: String,
        source: std::num::ParseIntError,
    },

    /// Input was empty or whitespace only.
    #[error("Empty year string")]
    EmptyInput,
}

/// Interprets year text, resolving abbreviated years to full ones.
///
/// [`YearCutoff`] is this crate's implementation; the trait is the seam for
/// hosts that want to swap in another scheme, or a fixed one in tests.
pub trait YearInterpreter {
    /// Interprets `text` as a year, resolving it if abbreviated.
    ///
    /// # Errors
    /// Returns `ParseError` if `text` is empty or not a signed decimal
    /// integer after trimming.
    fn interpret(&self, text: &str) -> Result<i32, ParseError>;
}

impl YearCutoff {
    /// Creates an interpreter with the given cutoff year and the default
    /// [`SlidingWindow`] strategy.
    pub fn new(cutoff_year: i32) -> Self {
        Self {
            cutoff_year,
            strategy: None,
        }
    }

    /// Interprets `text` as a year, resolving it against the cutoff if it
    /// is abbreviated.
    ///
    /// # Errors
    /// Returns `ParseError` if `text` is empty or not a signed decimal
    /// integer after trimming.
    pub fn interpret(&self, text: &str) -> Result<i32, ParseError> {
        let year = text.parse::<RawYear>()?;

        if year.is_short() {
            Ok(self.resolve_short(&year))
        } else {
            Ok(year.value())
        }
    }

    /// Classifies a short year against the cutoff and dispatches to the
    /// matching handler of the active strategy.
    fn resolve_short(&self, short: &RawYear) -> i32 {
        let cutoff = RawYear::from(self.cutoff_year);
        let strategy = self.strategy();

        match CutoffSide::classify(&cutoff, short) {
            CutoffSide::Before => strategy.resolve_before(self, short),
            CutoffSide::On => strategy.resolve_on(self, short),
            CutoffSide::After => strategy.resolve_after(self, short),
        }
    }

    /// Returns the cutoff year: the border the resolution window ends at
    pub const fn cutoff_year(&self) -> i32 {
        self.cutoff_year
    }

    /// Sets the cutoff year directly
    pub fn set_cutoff_year(&mut self, year: i32) {
        self.cutoff_year = year;
    }

    /// Sets the cutoff so that `year` is the latest year short years
    /// resolve to. Same as [`set_cutoff_year`](Self::set_cutoff_year).
    pub fn set_last_valid_year(&mut self, year: i32) {
        self.set_cutoff_year(year);
    }

    /// Sets the cutoff so that `year` is one past the window: short years
    /// spelling its offset resolve a century earlier.
    pub fn set_first_invalid_year(&mut self, year: i32) {
        self.set_cutoff_year(year - 1);
    }

    /// Sets the cutoff so that `year` is one below the window: short years
    /// spelling its offset resolve a century later.
    pub fn set_last_invalid_year(&mut self, year: i32) {
        self.set_cutoff_year(year + CUTOFF_RANGE);
    }

    /// Sets the cutoff so that `year` is the earliest year short years
    /// resolve to.
    pub fn set_first_valid_year(&mut self, year: i32) {
        self.set_cutoff_year(year + CUTOFF_RANGE - 1);
    }

    /// Returns the active resolution strategy
    pub fn strategy(&self) -> &dyn CutoffStrategy {
        match &self.strategy {
            Some(strategy) => strategy.as_ref(),
            None => &SlidingWindow,
        }
    }

    /// Replaces the resolution strategy
    pub fn set_strategy(&mut self, strategy: impl CutoffStrategy + 'static) {
        self.strategy = Some(Box::new(strategy));
    }

    /// Replaces the resolution strategy, consuming and returning `self`
    pub fn with_strategy(mut self, strategy: impl CutoffStrategy + 'static) -> Self {
        self.set_strategy(strategy);
        self
    }

    /// Removes any custom strategy, restoring [`SlidingWindow`]
    pub fn clear_strategy(&mut self) {
        self.strategy = None;
    }
}

impl Default for YearCutoff {
    /// A cutoff of the current year plus [`DEFAULT_CUTOFF_OFFSET`], read
    /// from the local clock once at construction.
    fn default() -> Self {
        Self::new(Local::now().year() + DEFAULT_CUTOFF_OFFSET)
    }
}

impl fmt::Debug for YearCutoff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("YearCutoff")
            .field("cutoff_year", &self.cutoff_year)
            .field("strategy", &self.strategy.as_ref().map(|_| "<custom>"))
            .finish()
    }
}

impl YearInterpreter for YearCutoff {
    fn interpret(&self, text: &str) -> Result<i32, ParseError> {
        YearCutoff::interpret(self, text)
    }
}
