use crate::{
    error::{Error, Result},
    Sequence,
};

/// Concatenates a list of sequences into a single record
///
/// Headers and data are glued left to right in list order. The separator byte
/// is inserted between successive pieces when it is non-zero, never at the
/// start or end. A single-element list returns that element unchanged; an
/// empty list is a caller error.
pub fn concatenate(sequences: Vec<Sequence>, separator: u8) -> Result<Sequence> {
    let mut iter = sequences.into_iter();
    let Some(first) = iter.next() else {
        return Err(Error::EmptyConcatenation);
    };

    let mut header = first.header().to_string();
    let mut data = first.data().to_vec();
    let mut merged = false;
    for sequence in iter {
        merged = true;
        if separator != 0 {
            header.push(char::from(separator));
            data.push(separator);
        }
        header.push_str(sequence.header());
        data.extend_from_slice(sequence.data());
    }

    if merged {
        Ok(Sequence::new(header, &data))
    } else {
        Ok(first)
    }
}

#[cfg(test)]
mod testing {
    use super::*;

    #[test]
    fn test_empty_input_is_an_error() {
        assert!(matches!(
            concatenate(Vec::new(), 0),
            Err(Error::EmptyConcatenation)
        ));
    }

    #[test]
    fn test_single_element_returned_unchanged() -> Result<()> {
        let mut sequence = Sequence::new("s1", b"ACGT");
        sequence.set_line_length(3);

        let result = concatenate(vec![sequence], b'|')?;
        assert_eq!(result.header(), "s1");
        assert_eq!(result.data(), b"ACGT");
        // single-element concatenation keeps the record as-is, wrap width included
        assert_eq!(result.line_length(), Some(3));
        Ok(())
    }

    #[test]
    fn test_merge_with_separator() -> Result<()> {
        let sequences = vec![
            Sequence::new("s1", b"ACGT"),
            Sequence::new("s2", b"TGCA"),
            Sequence::new("s3", b"GG"),
        ];
        let result = concatenate(sequences, b'|')?;
        assert_eq!(result.header(), "s1|s2|s3");
        assert_eq!(result.data(), b"ACGT|TGCA|GG");
        Ok(())
    }

    #[test]
    fn test_merge_without_separator() -> Result<()> {
        let sequences = vec![Sequence::new("s1", b"ACGT"), Sequence::new("s2", b"TGCA")];
        let result = concatenate(sequences, 0)?;
        assert_eq!(result.header(), "s1s2");
        assert_eq!(result.data(), b"ACGTTGCA");
        Ok(())
    }

    #[test]
    fn test_merge_with_empty_pieces() -> Result<()> {
        let sequences = vec![Sequence::new("", b""), Sequence::new("s2", b"AC")];
        let result = concatenate(sequences, b'|')?;
        assert_eq!(result.header(), "|s2");
        assert_eq!(result.data(), b"|AC");
        Ok(())
    }
}
