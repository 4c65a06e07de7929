use crate::core::Genome;

/// Owned copies of every genome added to a matcher, addressed by insertion
/// index.
///
/// Names need not be unique; each added genome gets its own index.
#[derive(Debug, Default, Clone)]
pub struct GenomeStore {
    genomes: Vec<Genome>,
}

impl GenomeStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a copy of `genome`, returning its index
    pub fn add(&mut self, genome: &Genome) -> usize {
        let index = self.genomes.len();
        self.genomes.push(genome.clone());
        index
    }

    pub fn get(&self, index: usize) -> Option<&Genome> {
        self.genomes.get(index)
    }

    pub fn len(&self) -> usize {
        self.genomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genomes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Genome> {
        self.genomes.iter()
    }
}
