//! Data structures and functions for reading, writing, and manipulating
//! sequences in FASTA format.
//!
//! The crate is built around two cooperating components:
//!
//! - [`Sequence`]: a single record holding a header and its residue data,
//!   with in-place transformations (reversal, complementation, shuffling,
//!   composition statistics, filtering) and a wrap-width text serialization.
//! - [`Scanner`]: a pull-based streaming parser that reassembles records
//!   from any line-oriented byte source, handling empty files, header-only
//!   records, consecutive headers, and files without a final line break.
//!
//! [`read_all`] collects every record of a stream, and [`concatenate`]
//! merges a list of records into one.

mod concat;
mod error;
mod scanner;
mod sequence;

pub use concat::concatenate;
pub use error::{Error, Result};
pub use scanner::{read_all, Scanner};
pub use sequence::{Sequence, DEFAULT_LINE_LENGTH};

#[cfg(test)]
mod testing {

    use super::*;
    use anyhow::Result;
    use std::io::Cursor;

    fn rescan(text: &str) -> Result<Vec<Sequence>> {
        Ok(read_all(Cursor::new(text.as_bytes().to_vec()))?)
    }

    #[test]
    fn test_round_trip_at_any_wrap_width() -> Result<()> {
        let original = Sequence::new("seq1 some description", b"ACCGTTGCAATTGGCCA");

        for width in [1, 4, 5, 16, 17, 70, 0] {
            let mut sequence = original.clone();
            sequence.set_line_length(width);

            let records = rescan(&sequence.to_string())?;
            assert_eq!(records.len(), 1);
            // wrap width is not part of identity and resets to the default
            assert_eq!(records[0], original);
            assert_eq!(records[0].line_length(), Some(DEFAULT_LINE_LENGTH));
        }
        Ok(())
    }

    #[test]
    fn test_round_trip_empty_record() -> Result<()> {
        let original = Sequence::new("", b"");
        let records = rescan(&format!("{original}\n"))?;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0], original);
        Ok(())
    }

    #[test]
    fn test_multi_record_round_trip() -> Result<()> {
        let originals = vec![
            Sequence::new("a", b"ACGTACGTACGT"),
            Sequence::new("b", b""),
            Sequence::new("c gi|123", b"TTTT"),
        ];

        let mut text = String::new();
        for sequence in &originals {
            text.push_str(&sequence.to_string());
            text.push('\n');
        }

        assert_eq!(rescan(&text)?, originals);
        Ok(())
    }

    #[test]
    fn test_scan_transform_concatenate() -> Result<()> {
        let records = rescan(">a\nACCGT\n>b\nAATAT\n")?;
        let mut merged = concatenate(records, b'|')?;
        assert_eq!(merged.header(), "a|b");
        assert_eq!(merged.data(), b"ACCGT|AATAT");

        merged.clean();
        merged.reverse_complement();
        assert_eq!(merged.data(), b"ATATTACGGT");
        Ok(())
    }
}
