//! Sequential block identifiers.

/// Maps a block ordinal (starting at 1) to its identifier.
pub type BlockIdFn = dyn Fn(usize) -> String;

/// Counter assigning one identifier per paragraph container, in document
/// order.
///
/// A counter lives for exactly one conversion.
pub struct BlockCounter<'a> {
    count: usize,
    mapper: Option<&'a BlockIdFn>,
}

impl<'a> BlockCounter<'a> {
    /// Create a counter producing plain numeric identifiers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            count: 0,
            mapper: None,
        }
    }

    /// Create a counter that maps ordinals through `mapper` when given.
    #[must_use]
    pub fn with_mapper(mapper: Option<&'a BlockIdFn>) -> Self {
        Self { count: 0, mapper }
    }

    /// Advance the counter and return the identifier for the new ordinal.
    ///
    /// # Examples
    /// ```
    /// use bills_html::rewrite::BlockCounter;
    ///
    /// let mut counter = BlockCounter::new();
    /// assert_eq!(counter.next_id(), "1");
    /// assert_eq!(counter.next_id(), "2");
    /// ```
    pub fn next_id(&mut self) -> String {
        self.count += 1;
        match self.mapper {
            Some(mapper) => mapper(self.count),
            None => self.count.to_string(),
        }
    }

    /// Number of identifiers handed out so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }
}

impl Default for BlockCounter<'_> {
    fn default() -> Self {
        Self::new()
    }
}
