use std::collections::HashSet;

use tracing::warn;

/// A signal name that was seen again after its first occurrence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuplicateSignal {
    /// Message carrying the dropped occurrence.
    pub message: String,
    /// Signal name (exact, case-sensitive).
    pub signal: String,
}

/// Set of signal names already emitted as catalog nodes.
///
/// Owned by the caller so that one set can span several databases.
#[derive(Clone, Debug, Default)]
pub struct SignalNameSet {
    seen: HashSet<String>,
    duplicates: Vec<DuplicateSignal>,
}

impl SignalNameSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `signal` and returns `true` on its first occurrence.
    ///
    /// Later occurrences are logged, remembered as duplicates and return `false`.
    pub fn insert(&mut self, message: &str, signal: &str) -> bool {
        if self.seen.insert(signal.to_string()) {
            return true;
        }
        warn!(signal, message, "duplicate signal name, keeping first occurrence");
        self.duplicates.push(DuplicateSignal {
            message: message.to_string(),
            signal: signal.to_string(),
        });
        false
    }

    pub fn contains(&self, signal: &str) -> bool {
        self.seen.contains(signal)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Dropped occurrences, in the order they were met.
    pub fn duplicates(&self) -> &[DuplicateSignal] {
        &self.duplicates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_occurrence_wins() {
        let mut names = SignalNameSet::new();
        assert!(names.insert("Front", "Speed"));
        assert!(names.insert("Front", "Torque"));
        assert!(!names.insert("Rear", "Speed"));
        assert!(!names.insert("Rear2", "Speed"));

        assert_eq!(names.len(), 2);
        assert!(names.contains("Speed"));
        assert_eq!(
            names.duplicates(),
            &[
                DuplicateSignal {
                    message: "Rear".to_string(),
                    signal: "Speed".to_string()
                },
                DuplicateSignal {
                    message: "Rear2".to_string(),
                    signal: "Speed".to_string()
                }
            ]
        );
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let mut names = SignalNameSet::new();
        assert!(names.insert("A", "speed"));
        assert!(names.insert("B", "Speed"));
        assert!(names.duplicates().is_empty());
    }
}
