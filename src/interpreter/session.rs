use crate::util::half::Half;

/// Persistent calculator state shared by every line of a batch.
///
/// Holds the history of results, oldest first, and the single memory cell.
/// Both are stored in half precision. The history only grows, and a line that
/// fails leaves the session exactly as it was.
///
/// ## Usage
///
/// A `Session` is created once per batch and passed by mutable reference to
/// [`evaluate`](crate::evaluate) for each line in order.
///
/// ```
/// use halfrpn::{Session, evaluate};
///
/// let mut session = Session::new();
/// evaluate("3 4 +", &mut session).unwrap();
/// evaluate("(3.5 MEM)", &mut session).unwrap();
///
/// assert_eq!(session.len(), 2);
/// assert_eq!(session.memory(), 3.5);
/// assert_eq!(session.recall(1), Some(7.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    results: Vec<Half>,
    memory:  Half,
}

impl Session {
    /// Creates a session with no results and a memory cell holding `0.0`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded results.
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns `true` if no line has been evaluated successfully yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Iterates over recorded results, oldest first.
    pub fn results(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.results.iter().copied().map(Half::to_f64)
    }

    /// The most recent result, if any.
    #[must_use]
    pub fn last(&self) -> Option<f64> {
        self.results.last().copied().map(Half::to_f64)
    }

    /// The result `back` positions before the most recent one, so `0` is the
    /// most recent result.
    #[must_use]
    pub fn recall(&self, back: usize) -> Option<f64> {
        self.recall_half(back).map(Half::to_f64)
    }

    /// Current content of the memory cell.
    #[must_use]
    pub fn memory(&self) -> f64 {
        self.memory.to_f64()
    }

    pub(crate) fn recall_half(&self, back: usize) -> Option<Half> {
        let index = self.results.len().checked_sub(back.checked_add(1)?)?;
        self.results.get(index).copied()
    }

    pub(crate) const fn memory_half(&self) -> Half {
        self.memory
    }

    /// Commits the outcome of one successful line.
    pub(crate) fn record(&mut self, result: Half, memory: Half) {
        self.results.push(result);
        self.memory = memory;
    }
}
