// SPDX-License-Identifier: MPL-2.0
//! Wrapping position within a non-empty media list.

/// Current position in a list of `len > 0` items. Always in `[0, len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewIndex {
    current: usize,
    len: usize,
}

impl ViewIndex {
    /// Returns `None` for an empty list. A `start` past the end is clamped
    /// to the last item.
    #[must_use]
    pub fn new(start: usize, len: usize) -> Option<Self> {
        if len == 0 {
            return None;
        }
        if start >= len {
            log::warn!("Start index {start} is out of range for {len} items; showing the last one");
        }
        Some(Self {
            current: start.min(len - 1),
            len,
        })
    }

    #[must_use]
    pub fn current(self) -> usize {
        self.current
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.len
    }

    /// Always `false`; a `ViewIndex` only exists for non-empty lists.
    #[must_use]
    pub fn is_empty(self) -> bool {
        false
    }

    /// Advances by one, wrapping from the last item to the first.
    pub fn next(&mut self) {
        self.current = if self.current + 1 < self.len {
            self.current + 1
        } else {
            0
        };
    }

    /// Goes back by one, wrapping from the first item to the last.
    pub fn previous(&mut self) {
        self.current = if self.current > 0 {
            self.current - 1
        } else {
            self.len - 1
        };
    }

    /// Moves to `index`. Returns `false` and stays put when out of range.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index < self.len {
            self.current = index;
            true
        } else {
            log::warn!("Ignoring jump to {index}; list has {} items", self.len);
            false
        }
    }
}
