//! Streaming FASTA scanner module
//!
//! This module provides functionality for reassembling discrete FASTA records
//! from an unbounded, line-oriented byte stream. The [`Scanner`] exposes two
//! advance granularities over one shared accumulation state:
//!
//! 1. Line level ([`Scanner::scan_line`]) for byte-accounting use cases
//! 2. Record level ([`Scanner::scan_sequence`]) for the usual pull-based
//!    record loop
//!
//! The scanner reads strictly sequentially with no lookahead beyond the
//! current line, and handles the format's structural ambiguities: empty
//! inputs, header-only records, consecutive headers, and final records whose
//! data is not terminated by a line break.

use std::io::BufRead;
use std::str;

use crate::{error::Result, Sequence};

/// A pull-based reader that scans FASTA records from a byte stream
///
/// A `Scanner` is bound to one input source and advances monotonically. Each
/// successful call to [`scan_sequence`](Scanner::scan_sequence) leaves exactly
/// one fully materialized record retrievable through
/// [`sequence`](Scanner::sequence); retrieval copies the accumulated data and
/// resets the buffer for the next record, so a retrieved [`Sequence`] never
/// aliases subsequent scanner state.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
///
/// use fasta::{Result, Scanner};
///
/// fn main() -> Result<()> {
///     let input = ">seq1\nACGT\nTTAA\n>seq2\nGGCC\n";
///     let mut scanner = Scanner::new(Cursor::new(input));
///
///     let mut headers = Vec::new();
///     while scanner.scan_sequence()? {
///         headers.push(scanner.sequence().header().to_string());
///     }
///     assert_eq!(headers, ["seq1", "seq2"]);
///     Ok(())
/// }
/// ```
pub struct Scanner<R> {
    /// The source of line-oriented bytes
    reader: R,

    /// The last non-empty line scanned, line terminators stripped
    line: Vec<u8>,

    /// Classification of the last scanned line
    is_header: bool,

    /// Set when the last read ended at end-of-input without a terminator
    unterminated: bool,

    /// Set once the terminal record has been emitted
    last_sequence: bool,

    /// Set until the first header line has been seen
    first_sequence: bool,

    /// Header of the record currently being accumulated
    current_header: String,

    /// Header of the most recently completed record
    previous_header: String,

    /// Accumulation buffer for the residues of the record being built
    data: Vec<u8>,
}

impl<R: BufRead> Scanner<R> {
    /// Creates a new scanner reading from the given source.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: Vec::new(),
            is_header: false,
            unterminated: false,
            last_sequence: false,
            first_sequence: true,
            current_header: String::new(),
            previous_header: String::new(),
            data: Vec::new(),
        }
    }

    /// Advances to the next non-empty line of input
    ///
    /// Trailing carriage-return/line-feed bytes are stripped and empty lines
    /// are skipped. On success the line is classified as a header line if its
    /// first byte is `>`, and as a data line otherwise.
    ///
    /// Returns `Ok(false)` once the input is exhausted. When the final line
    /// lacked a terminator its bytes are not silently dropped: they remain
    /// available through [`flush`](Scanner::flush), which should be consulted
    /// once scanning stops if trailing data matters to the caller.
    pub fn scan_line(&mut self) -> Result<bool> {
        loop {
            self.line.clear();
            let n = self.reader.read_until(b'\n', &mut self.line)?;
            if n == 0 {
                return Ok(false);
            }
            let terminated = self.line.last() == Some(&b'\n');
            while let Some(b'\n' | b'\r') = self.line.last() {
                self.line.pop();
            }
            if !terminated {
                self.unterminated = true;
                return Ok(false);
            }
            if self.line.is_empty() {
                continue;
            }
            self.is_header = self.line[0] == b'>';
            return Ok(true);
        }
    }

    /// Returns `true` if the last scanned line was a header line
    #[must_use]
    pub fn is_header(&self) -> bool {
        self.is_header
    }

    /// Returns the last line scanned, without its terminator
    #[must_use]
    pub fn line(&self) -> &[u8] {
        &self.line
    }

    /// Returns the bytes of a final line that ended at end-of-input without a
    /// terminator, or an empty slice if the stream ended cleanly
    #[must_use]
    pub fn flush(&self) -> &[u8] {
        if self.unterminated {
            &self.line
        } else {
            &[]
        }
    }

    /// Advances to the next complete record
    ///
    /// Repeatedly scans lines, appending data lines to the accumulation
    /// buffer. A header line closes the record accumulated so far, except for
    /// the very first header in the stream, which only opens the first
    /// record. Once the input is exhausted the scanner emits the terminal
    /// record, including any unterminated trailing bytes, and every later
    /// call returns `Ok(false)`.
    ///
    /// Returns `Ok(true)` when a record is ready to be retrieved with
    /// [`sequence`](Scanner::sequence), and `Ok(false)` when the input held
    /// no further records. An input with no header at all yields no records.
    pub fn scan_sequence(&mut self) -> Result<bool> {
        if self.last_sequence {
            return Ok(false);
        }
        while self.scan_line()? {
            if self.is_header {
                self.previous_header = std::mem::take(&mut self.current_header);
                self.current_header = str::from_utf8(&self.line[1..])?.to_string();
                if self.first_sequence {
                    self.first_sequence = false;
                } else {
                    return Ok(true);
                }
            } else {
                self.data.extend_from_slice(&self.line);
            }
        }
        self.last_sequence = true;
        if self.unterminated {
            self.data.extend_from_slice(&self.line);
        }
        self.previous_header = std::mem::take(&mut self.current_header);
        Ok(!self.first_sequence)
    }

    /// Returns the last record scanned
    ///
    /// The record owns a private copy of the accumulated data at the default
    /// wrap width; the accumulation buffer is cleared so the next
    /// [`scan_sequence`](Scanner::scan_sequence) call starts clean. Call this
    /// once per successful record advance, before the next one.
    pub fn sequence(&mut self) -> Sequence {
        let sequence = Sequence::new(self.previous_header.clone(), &self.data);
        self.data.clear();
        sequence
    }
}

/// Reads every record from the input and returns them in stream order.
pub fn read_all<R: BufRead>(reader: R) -> Result<Vec<Sequence>> {
    let mut scanner = Scanner::new(reader);
    let mut sequences = Vec::new();
    while scanner.scan_sequence()? {
        sequences.push(scanner.sequence());
    }
    Ok(sequences)
}
