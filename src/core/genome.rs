/// A named base sequence, immutable once constructed.
///
/// Bases are stored as raw bytes. Sequences produced by the FASTA parser are
/// upper case and restricted to `A`, `C`, `G`, `T` and `N`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genome {
    name: String,
    bases: Vec<u8>,
}

impl Genome {
    pub fn new(name: impl Into<String>, bases: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bases: bases.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bases(&self) -> &[u8] {
        &self.bases
    }

    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    /// Extract `length` bases starting at `position`.
    ///
    /// Returns `None` when the requested window runs past the end of the
    /// sequence.
    #[must_use]
    pub fn extract(&self, position: usize, length: usize) -> Option<&[u8]> {
        let end = position.checked_add(length)?;
        self.bases.get(position..end)
    }
}
