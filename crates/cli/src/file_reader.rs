// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Raw file bytes and line decoding.
//!
//! Files are read fully into memory, then split into lines on `\n`. The
//! scanner decodes each line as UTF-8 first and falls back to Latin-1 for
//! the whole file on failure; Latin-1 maps every byte to U+0000..=U+00FF,
//! so the fallback pass cannot fail on arbitrary content.

use std::fs;
use std::io;
use std::path::Path;

/// Reads the complete contents of `path`.
pub fn read_bytes(path: &Path) -> io::Result<Vec<u8>> {
    fs::read(path)
}

/// Iterates over the lines of a byte buffer, splitting on `\n`.
///
/// Line content excludes the newline byte; a trailing `\r` from CRLF files
/// is removed later by whitespace trimming. A trailing newline does not
/// produce a final empty line, and an empty buffer has no lines.
pub fn lines(bytes: &[u8]) -> Lines<'_> {
    Lines { rest: if bytes.is_empty() { None } else { Some(bytes) } }
}

pub struct Lines<'a> {
    rest: Option<&'a [u8]>,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        let rest = self.rest.take()?;
        match rest.iter().position(|&b| b == b'\n') {
            Some(pos) => {
                let (line, tail) = rest.split_at(pos);
                let tail = &tail[1..];
                if !tail.is_empty() {
                    self.rest = Some(tail);
                }
                Some(line)
            }
            None => Some(rest),
        }
    }
}

/// Decodes a byte slice as Latin-1 (ISO-8859-1).
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

#[cfg(test)]
#[path = "file_reader_tests.rs"]
mod tests;
