/// Hints a sequence carries for the executor that reduces it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Setup {
    /// Number of parallel workers to reduce the sequence with. Overrides
    /// the worker count the executor was created with.
    pub workers: Option<usize>,
}

impl Setup {
    /// Merge two setups, values set in `other` win.
    pub fn merge(mut self, other: Self) -> Self {
        self.workers = other.workers.or(self.workers);

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge() {
        let none = Setup::default();
        let two = Setup { workers: Some(2) };
        let four = Setup { workers: Some(4) };

        assert_eq!(two, none.merge(two));
        assert_eq!(two, two.merge(none));
        assert_eq!(four, two.merge(four));
    }
}
