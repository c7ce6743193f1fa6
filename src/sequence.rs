//! Sequence record module
//!
//! This module provides the [`Sequence`] record type holding a header and the
//! residue data of a single FASTA entry, together with the in-place
//! transformations defined over decoded residue data (reversal,
//! complementation, shuffling, composition statistics, filtering) and the
//! wrap-width text serialization used when writing records back out.

use std::fmt;

use rand::{seq::SliceRandom, Rng};

/// Default number of residues per line when serializing a sequence
pub const DEFAULT_LINE_LENGTH: usize = 70;

/// Nucleotide complement substitution table
///
/// Covers the unambiguous codes `A/C/G/T/U` and the IUPAC ambiguity codes
/// (`W,S,M,K,R,Y,B,D,H,V,N`) in both cases; every other byte maps to itself.
const COMPLEMENT: [u8; 256] = complement_table();

const fn complement_table() -> [u8; 256] {
    let forward = *b"ACGTUWSMKRYBDHVNacgtuwsmkrybdhvn";
    let reverse = *b"TGCAAWSKMYRVHDBNtgcaawskmyrvhdbn";
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < table.len() {
        table[i] = i as u8;
        i += 1;
    }
    let mut i = 0;
    while i < forward.len() {
        table[forward[i] as usize] = reverse[i];
        i += 1;
    }
    table
}

/// A single FASTA record: a header line and its residue data
///
/// A `Sequence` owns its residue buffer privately. Construction deep-copies
/// the caller's data, so the in-place transformations never alias a buffer
/// held elsewhere. The wrap width only affects serialization and is not part
/// of record identity.
#[derive(Debug, Clone)]
pub struct Sequence {
    /// Header text, excluding the leading `>` marker
    header: String,

    /// Residue bytes, free of line terminators
    data: Vec<u8>,

    /// Serialization wrap width; `None` disables wrapping
    line_length: Option<usize>,
}

impl Sequence {
    /// Creates a new sequence from a header and residue data
    ///
    /// The data is copied into a fresh buffer and the wrap width is set to
    /// [`DEFAULT_LINE_LENGTH`].
    #[must_use]
    pub fn new(header: impl Into<String>, data: &[u8]) -> Self {
        Self {
            header: header.into(),
            data: data.to_vec(),
            line_length: Some(DEFAULT_LINE_LENGTH),
        }
    }

    /// Returns the header text
    #[must_use]
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Returns the residue data
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the current wrap width, or `None` if wrapping is disabled
    #[must_use]
    pub fn line_length(&self) -> Option<usize> {
        self.line_length
    }

    /// Returns the number of residues in the sequence
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the sequence holds no residues
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Replaces the existing header.
    pub fn set_header(&mut self, header: impl Into<String>) {
        self.header = header.into();
    }

    /// Replaces the existing data.
    pub fn set_data(&mut self, data: Vec<u8>) {
        self.data = data;
    }

    /// Appends the suffix to the header.
    pub fn append_to_header(&mut self, suffix: &str) {
        self.header.push_str(suffix);
    }

    /// Sets the wrap width used by the [`Display`](fmt::Display)
    /// serialization. Any value less than 1 disables wrapping.
    pub fn set_line_length(&mut self, length: usize) {
        self.line_length = if length < 1 { None } else { Some(length) };
    }

    /// Randomizes the order of the residues in place
    ///
    /// Performs an unbiased Fisher-Yates permutation driven by the supplied
    /// generator, so a fixed seed reproduces the same permutation. The
    /// sequence composition remains unchanged.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.data.shuffle(rng);
    }

    /// Reverses the residues in place.
    pub fn reverse(&mut self) {
        self.data.reverse();
    }

    /// Complements a nucleotide sequence in place
    ///
    /// Each residue is mapped through the complement pairing table for the
    /// unambiguous and IUPAC ambiguity codes in both cases; bytes outside the
    /// table pass through unchanged.
    ///
    /// ```
    /// use fasta::Sequence;
    ///
    /// let mut seq = Sequence::new("seq", b"ACGTN-");
    /// seq.complement();
    /// assert_eq!(seq.data(), b"TGCAN-");
    /// ```
    pub fn complement(&mut self) {
        for residue in &mut self.data {
            *residue = COMPLEMENT[*residue as usize];
        }
    }

    /// Reverse-complements the sequence in place.
    pub fn reverse_complement(&mut self) {
        self.reverse();
        self.complement();
    }

    /// Returns the fraction of `G` and `C` nucleotides in the sequence
    ///
    /// Only uppercase residues are counted. An empty sequence divides by
    /// zero and yields a non-finite value.
    #[must_use]
    pub fn gc(&self) -> f64 {
        let gc = self
            .data
            .iter()
            .filter(|&&residue| residue == b'G' || residue == b'C')
            .count();
        gc as f64 / self.data.len() as f64
    }

    /// Removes non-canonical nucleotides, keeping only `ACGT`/`acgt`
    ///
    /// The retained residues keep their relative order and case, and the
    /// buffer shrinks to the retained count.
    pub fn clean(&mut self) {
        self.data.retain(|residue| {
            matches!(
                residue,
                b'A' | b'C' | b'G' | b'T' | b'a' | b'c' | b'g' | b't'
            )
        });
    }

    /// Converts the residue data to uppercase in place.
    pub fn make_uppercase(&mut self) {
        self.data.make_ascii_uppercase();
    }
}

/// Two sequences are equal when their headers and data match; the wrap width
/// is not part of record identity.
impl PartialEq for Sequence {
    fn eq(&self, other: &Self) -> bool {
        self.header == other.header && self.data == other.data
    }
}

impl Eq for Sequence {}

/// Serializes the record as FASTA text
///
/// Emits `>` and the header, then the data in chunks of at most the wrap
/// width, each chunk on its own line. There is no trailing line break after
/// the final chunk, and a record with no data is just its header line.
///
/// ```
/// use fasta::Sequence;
///
/// let mut seq = Sequence::new("seq", b"ACGTA");
/// seq.set_line_length(3);
/// assert_eq!(seq.to_string(), ">seq\nACG\nTA");
/// ```
impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ">{}", self.header)?;
        let width = self.line_length.unwrap_or(usize::MAX);
        for chunk in self.data.chunks(width) {
            write!(f, "\n{}", String::from_utf8_lossy(chunk))?;
        }
        Ok(())
    }
}
