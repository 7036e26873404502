/// Outcome of one resolution step for one item
///
/// Keeps "nothing to resolve" apart from "the resolver failed", which a
/// bare empty collection cannot express.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<T> {
    /// At least one item survived resolution and filtering
    Resolved(Vec<T>),
    /// Resolution succeeded but nothing survived
    Empty { reason: String },
    /// The resolver raised an error; the item is isolated from the batch
    Failed { reason: String },
}

impl<T> Resolution<T> {
    pub fn from_items(items: Vec<T>, empty_reason: impl Into<String>) -> Self {
        if items.is_empty() {
            Resolution::Empty {
                reason: empty_reason.into(),
            }
        } else {
            Resolution::Resolved(items)
        }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Resolution::Failed {
            reason: reason.into(),
        }
    }

    /// Items of a successful resolution; empty otherwise
    pub fn items(&self) -> &[T] {
        match self {
            Resolution::Resolved(items) => items,
            _ => &[],
        }
    }

    pub fn into_items(self) -> Vec<T> {
        match self {
            Resolution::Resolved(items) => items,
            _ => Vec::new(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Resolution::Failed { .. })
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_items_non_empty() {
        let resolution = Resolution::from_items(vec![1, 2], "none");
        assert_eq!(resolution.items(), &[1, 2]);
        assert!(!resolution.is_failed());
    }

    #[test]
    fn test_from_items_empty_keeps_reason() {
        let resolution: Resolution<u8> = Resolution::from_items(vec![], "all filtered");
        assert_eq!(
            resolution,
            Resolution::Empty {
                reason: "all filtered".to_string()
            }
        );
        assert!(resolution.is_empty());
        assert!(!resolution.is_failed());
    }

    #[test]
    fn test_failed_has_no_items() {
        let resolution: Resolution<u8> = Resolution::failed("timeout");
        assert!(resolution.is_failed());
        assert_eq!(resolution.len(), 0);
        assert!(resolution.into_items().is_empty());
    }
}
