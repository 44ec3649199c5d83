use crate::document::Indexed;

/// Sorts items ascending by `index`.
///
/// The sort is stable: items sharing an index keep their input order.
/// Indices need not be contiguous.
pub fn sort_by_index<T: Indexed>(items: &mut [T]) {
    items.sort_by_key(Indexed::index);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Item(i64, &'static str);

    impl Indexed for Item {
        fn index(&self) -> i64 {
            self.0
        }
    }

    #[test]
    fn test_sorts_ascending_with_gaps() {
        let mut items = vec![Item(30, "c"), Item(-2, "a"), Item(10, "b")];
        sort_by_index(&mut items);
        assert_eq!(items, vec![Item(-2, "a"), Item(10, "b"), Item(30, "c")]);
    }

    #[test]
    fn test_equal_indices_keep_input_order() {
        let mut items = vec![Item(2, "first"), Item(1, "x"), Item(2, "second"), Item(2, "third")];
        sort_by_index(&mut items);
        let labels: Vec<_> = items.iter().map(|item| item.1).collect();
        assert_eq!(labels, vec!["x", "first", "second", "third"]);
    }

    #[test]
    fn test_empty() {
        let mut items: Vec<Item> = Vec::new();
        sort_by_index(&mut items);
        assert!(items.is_empty());
    }
}
