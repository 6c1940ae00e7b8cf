/// Maximum number of characters a year text may have and still count as
/// abbreviated
pub const MAX_SHORT_YEAR_DIGITS: usize = 2;

/// Number of distinct short years, and the width of the resolution window
///
/// Derived from [`MAX_SHORT_YEAR_DIGITS`]: two digits give 100 short years
/// (0 through 99) and a 100-year window to place them in.
pub const CUTOFF_RANGE: i32 = 10i32.pow(MAX_SHORT_YEAR_DIGITS as u32);

/// Years added to the current year to form the default cutoff
pub const DEFAULT_CUTOFF_OFFSET: i32 = 30;
