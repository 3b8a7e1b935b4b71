use std::cell::Cell;

use super::*;

#[test]
fn test_vec_slice_within_bounds() {
    let items = vec![1, 2, 3, 4, 5];

    assert_eq!(items.total_count().unwrap(), 5);
    assert_eq!(items.slice(1, 3).unwrap(), vec![2, 3]);
}

#[test]
fn test_vec_slice_clamps_out_of_range() {
    let items = vec!["a", "b", "c"];

    assert_eq!(items.slice(2, 10).unwrap(), vec!["c"]);
    assert!(items.slice(5, 10).unwrap().is_empty());
    assert!(items.slice(2, 1).unwrap().is_empty());
}

#[test]
fn test_slice_of_array() {
    let items = [10, 20, 30];
    let collection: &[i32] = &items;

    assert_eq!(collection.total_count().unwrap(), 3);
    assert_eq!(collection.slice(0, 2).unwrap(), vec![10, 20]);
    assert!(collection.query_count().is_none());
}

fn query_count_of<C: Collection>(collection: C) -> Option<CollectionResult<usize>> {
    collection.query_count()
}

#[test]
fn test_reference_delegates_query_count() {
    let lazy = LazyCollection::new(|_, _| Ok(vec![1, 2])).with_count(|| Ok(42));

    assert_eq!(query_count_of(&lazy), Some(Ok(42)));
    assert_eq!(query_count_of(&vec![1, 2]), None);
}

#[test]
fn test_lazy_total_count_materializes() {
    let calls = Cell::new(0);
    let data: Vec<u32> = (0..7).collect();
    let lazy = LazyCollection::new(|start: usize, end: usize| {
        calls.set(calls.get() + 1);
        data.slice(start, end)
    });

    assert!(lazy.query_count().is_none());
    assert_eq!(lazy.total_count().unwrap(), 7);
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_lazy_empty_range_skips_fetch() {
    let lazy: LazyCollection<'_, u32> =
        LazyCollection::new(|_, _| Err(CollectionError::Backend("unreachable".to_string())));

    assert!(lazy.slice(3, 3).unwrap().is_empty());
    assert!(lazy.slice(4, 2).unwrap().is_empty());
}

#[test]
fn test_lazy_propagates_backend_error() {
    let lazy: LazyCollection<'_, u32> =
        LazyCollection::new(|_, _| Err(CollectionError::Backend("connection reset".to_string())));

    let result = lazy.slice(0, 10);

    assert_eq!(result, Err(CollectionError::Backend("connection reset".to_string())));
    assert_eq!(
        result.unwrap_err().to_string(),
        "Collection backend error: connection reset"
    );
}
