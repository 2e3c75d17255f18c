// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search statistics.
//!
//! Counters are stored in a fixed array indexed by the counter enum, and
//! incremented from the search loop.

use std::fmt;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

#[derive(EnumCountMacro, EnumIter, Copy, Clone, Debug)]
#[repr(u8)]
pub enum Counter {
    /// Search nodes entered.
    Nodes,
    /// Tents placed.
    Placements,
    /// Placements undone while backtracking.
    Undos,
    /// Trees found with no legal candidate cell.
    DeadEnds,
}

impl Counter {
    fn label(self) -> &'static str {
        match self {
            Counter::Nodes => "nodes",
            Counter::Placements => "tents placed",
            Counter::Undos => "placements undone",
            Counter::DeadEnds => "dead ends",
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    stats: [u64; Counter::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    pub(crate) fn bump(&mut self, counter: Counter) {
        self.stats[counter as usize] += 1;
    }

    /// Current value of the specified counter.
    pub fn get(&self, counter: Counter) -> u64 {
        self.stats[counter as usize]
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, counter) in Counter::iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", counter.label(), self.get(counter))?;
        }
        Ok(())
    }
}
