//! Identifier Sources
//!
//! New items get their id from an injected source so the browser can use
//! clock/random based ids while tests stay deterministic.

/// Produces fresh, unique item ids
pub trait IdSource {
    fn next_id(&mut self) -> String;
}

/// Deterministic ids: `{prefix}-1`, `{prefix}-2`, ...
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into(), next: 1 }
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids() {
        let mut ids = SequentialIds::new("t");
        assert_eq!(ids.next_id(), "t-1");
        assert_eq!(ids.next_id(), "t-2");
    }

    #[test]
    fn test_prefixes_are_independent() {
        let mut a = SequentialIds::new("a");
        let mut b = SequentialIds::new("b");
        a.next_id();
        assert_eq!(b.next_id(), "b-1");
    }
}
