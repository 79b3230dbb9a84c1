// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Normalized modifier bits and editor key commands

use bitflags::bitflags;

bitflags! {
    /// Modifier keys relevant to text editing.
    ///
    /// Built once per platform event at the input boundary; everything
    /// downstream reads this instead of platform modifier state.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct ModifierMask: u8 {
        const SHIFT = 0b0000_0001;
        const CONTROL = 0b0000_0010;
    }
}

impl ModifierMask {
    pub fn shift(&self) -> bool {
        self.contains(Self::SHIFT)
    }

    pub fn control(&self) -> bool {
        self.contains(Self::CONTROL)
    }
}

/// Movement and edit keys forwarded to the editor as-is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditKey {
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    Backspace,
    Delete,
    Enter,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_queries() {
        let mods = ModifierMask::SHIFT | ModifierMask::CONTROL;
        assert!(mods.shift());
        assert!(mods.control());
        assert!(!ModifierMask::empty().control());
        assert!(!ModifierMask::CONTROL.shift());
    }
}
