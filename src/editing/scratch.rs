// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Scoped temporary buffers for clipboard text.
//!
//! Selection text is copied out of the editor into a short-lived buffer,
//! handed to the clipboard and released. `ScratchArena` keeps count of the
//! bytes held so the overlay can show whether anything leaked; the buffer
//! itself is a `ScratchText` guard that gives its bytes back on drop.

use crate::model::{Selection, TextEditor};
use std::cell::Cell;

/// Byte accounting for scratch buffers
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScratchStats {
    /// Bytes held by live buffers
    pub used: usize,
    /// High-water mark of `used`
    pub peak: usize,
    /// Number of live buffers
    pub live: usize,
}

/// Single-threaded scratch buffer accounting
#[derive(Debug, Default)]
pub struct ScratchArena {
    used: Cell<usize>,
    peak: Cell<usize>,
    live: Cell<usize>,
}

impl ScratchArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> ScratchStats {
        ScratchStats {
            used: self.used.get(),
            peak: self.peak.get(),
            live: self.live.get(),
        }
    }

    fn reserve(&self, bytes: usize) {
        let used = self.used.get() + bytes;
        self.used.set(used);
        self.peak.set(self.peak.get().max(used));
        self.live.set(self.live.get() + 1);
    }

    fn release(&self, bytes: usize) {
        self.used.set(self.used.get().saturating_sub(bytes));
        self.live.set(self.live.get().saturating_sub(1));
    }

    /// Copy the text of `selection` into a scratch buffer.
    ///
    /// The buffer is sized for the text plus a terminating NUL so it can be
    /// handed to C string clipboard APIs unchanged.
    pub fn selection_text<'a>(
        &'a self,
        editor: &dyn TextEditor,
        selection: Selection,
    ) -> ScratchText<'a> {
        let len = editor.selection_utf8_len(selection);
        let mut text = ScratchText::with_capacity(self, len + 1);
        editor.write_selection_text(selection, &mut text.buf);
        text.terminate();
        text
    }
}

/// A scratch text buffer, released back to its arena on drop
#[derive(Debug)]
pub struct ScratchText<'a> {
    arena: &'a ScratchArena,
    buf: String,
    reserved: usize,
}

impl<'a> ScratchText<'a> {
    fn with_capacity(arena: &'a ScratchArena, bytes: usize) -> Self {
        arena.reserve(bytes);
        Self {
            arena,
            buf: String::with_capacity(bytes),
            reserved: bytes,
        }
    }

    /// Append the NUL terminator, growing the reservation if the editor
    /// wrote more than it reported
    fn terminate(&mut self) {
        self.buf.push('\0');
        if self.buf.len() > self.reserved {
            let extra = self.buf.len() - self.reserved;
            self.arena.used.set(self.arena.used.get() + extra);
            self.arena
                .peak
                .set(self.arena.peak.get().max(self.arena.used.get()));
            self.reserved = self.buf.len();
        }
    }

    /// The text without its terminator
    pub fn as_str(&self) -> &str {
        self.buf.strip_suffix('\0').unwrap_or(&self.buf)
    }

    /// The text including its terminator
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        self.buf.as_bytes()
    }

    /// Bytes held in the arena, terminator included
    pub fn reserved(&self) -> usize {
        self.reserved
    }
}

impl Drop for ScratchText<'_> {
    fn drop(&mut self) {
        self.arena.release(self.reserved);
    }
}
