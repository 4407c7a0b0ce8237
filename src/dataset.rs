//! Typed, homogeneous item sequences

use crate::config::ItemKind;

/// The items read from one input file. Every item has the same kind, so
/// comparisons never need a runtime cast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dataset {
    Integers(Vec<i64>),
    Texts(Vec<String>),
}

impl Dataset {
    /// An empty sequence ready to collect items of `kind`
    pub fn new(kind: ItemKind) -> Self {
        match kind {
            ItemKind::Integer => Dataset::Integers(Vec::new()),
            ItemKind::Text => Dataset::Texts(Vec::new()),
        }
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            Dataset::Integers(_) => ItemKind::Integer,
            Dataset::Texts(_) => ItemKind::Text,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Dataset::Integers(items) => items.len(),
            Dataset::Texts(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_matches_kind() {
        let ints = Dataset::new(ItemKind::Integer);
        assert_eq!(ints, Dataset::Integers(vec![]));
        assert_eq!(ints.kind(), ItemKind::Integer);
        assert!(ints.is_empty());

        let texts = Dataset::new(ItemKind::Text);
        assert_eq!(texts.kind(), ItemKind::Text);
    }

    #[test]
    fn test_len() {
        let texts = Dataset::Texts(vec!["a".into(), "b".into()]);
        assert_eq!(texts.len(), 2);
        assert!(!texts.is_empty());
    }
}
