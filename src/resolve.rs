use std::cmp::Ordering;

use crate::{CUTOFF_RANGE, RawYear, YearCutoff, prelude::*};

/// Where a short year falls relative to the cutoff year's epoch offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum CutoffSide {
    /// The short year is less than the cutoff's offset.
    #[display(fmt = "before")]
    Before,

    /// The short year equals the cutoff's offset.
    #[display(fmt = "on")]
    On,

    /// The short year is greater than the cutoff's offset.
    #[display(fmt = "after")]
    After,
}

impl CutoffSide {
    /// Classifies `short` against the epoch offset of `cutoff`.
    ///
    /// A short year's value is already in `0..CUTOFF_RANGE`, so it compares
    /// directly against the offset.
    pub fn classify(cutoff: &RawYear, short: &RawYear) -> Self {
        match short.value().cmp(&cutoff.epoch_offset()) {
            Ordering::Less => Self::Before,
            Ordering::Equal => Self::On,
            Ordering::Greater => Self::After,
        }
    }
}

/// Resolution scheme for short years, one handler per [`CutoffSide`].
///
/// Each handler receives the interpreter whose cutoff produced the
/// classification, plus the short year to place, and returns the full year.
/// [`YearCutoff::set_strategy`] swaps the whole scheme at once, so the
/// three outcomes always resolve consistently.
pub trait CutoffStrategy: Send + Sync {
    /// Resolves a short year below the cutoff's offset.
    fn resolve_before(&self, cutoff: &YearCutoff, short: &RawYear) -> i32;

    /// Resolves a short year on the cutoff's offset.
    fn resolve_on(&self, cutoff: &YearCutoff, short: &RawYear) -> i32;

    /// Resolves a short year above the cutoff's offset.
    fn resolve_after(&self, cutoff: &YearCutoff, short: &RawYear) -> i32;
}

/// The default strategy: short years land in the 100-year window ending at
/// the cutoff year, inclusive.
///
/// Years on or below the cutoff's offset stay in the cutoff's century;
/// years above it fall back a century. With a cutoff of 2020, "10" becomes
/// 2010, "20" becomes 2020 and "30" becomes 1930.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlidingWindow;

impl CutoffStrategy for SlidingWindow {
    fn resolve_before(&self, cutoff: &YearCutoff, short: &RawYear) -> i32 {
        RawYear::from(cutoff.cutoff_year()).epoch() + short.value()
    }

    fn resolve_on(&self, cutoff: &YearCutoff, short: &RawYear) -> i32 {
        // The cutoff year itself is still inside the window
        self.resolve_before(cutoff, short)
    }

    fn resolve_after(&self, cutoff: &YearCutoff, short: &RawYear) -> i32 {
        RawYear::from(cutoff.cutoff_year()).epoch() - CUTOFF_RANGE + short.value()
    }
}
