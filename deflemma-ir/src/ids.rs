/// Hands out the identifiers of the declarations of a compilation run.
///
/// Identifiers start from 1 and grow by one at each call, so lowering the same declarations in
/// the same order always yields the same identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueIdGenerator {
    next: u64,
}

impl UniqueIdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Take the next identifier.
    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Start again from the first identifier.
    pub fn reset(&mut self) {
        self.next = 1;
    }
}

impl Default for UniqueIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
