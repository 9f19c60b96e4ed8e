use super::*;

#[test]
fn emits_in_lex_ascending_order_with_correct_count() {
    // ARRANGE
    let k = 2;
    let n = 3;
    let start = 1;

    // ACT
    let emitted: Vec<Vec<usize>> = IndexMultisets::new(k, n, start).collect();

    // ASSERT
    let expected = vec![
        vec![1, 1],
        vec![1, 2],
        vec![1, 3],
        vec![2, 2],
        vec![2, 3],
        vec![3, 3],
    ];
    assert_eq!(emitted, expected);
    assert_eq!(emitted.len() as u64, multichoose(k, n, start));
}

#[test]
fn never_emits_duplicates() {
    let emitted: Vec<Vec<usize>> = IndexMultisets::new(3, 4, 0).collect();
    let mut dedup = emitted.clone();
    dedup.sort();
    dedup.dedup();
    assert_eq!(emitted.len(), dedup.len());
    assert_eq!(emitted, dedup, "output was not lex-ascending");
}

#[test]
fn k_zero_emits_single_empty_list() {
    let emitted: Vec<Vec<usize>> = IndexMultisets::new(0, 5, 2).collect();
    assert_eq!(emitted, vec![Vec::<usize>::new()]);
}

#[test]
fn start_equals_n_emits_single_list_of_repeated_n() {
    let emitted: Vec<Vec<usize>> = IndexMultisets::new(3, 5, 5).collect();
    assert_eq!(emitted, vec![vec![5, 5, 5]]);
}

#[test]
fn multichoose_matches_emission_count_on_small_cases() {
    for n in 0..6usize {
        for start in 0..=n {
            for k in 0..4usize {
                let count = IndexMultisets::new(k, n, start).count() as u64;
                assert_eq!(count, multichoose(k, n, start), "k={k} n={n} start={start}");
            }
        }
    }
}

#[test]
fn insert_places_copies_at_ascending_positions() {
    let list = vec!["a", "b", "c"];
    let result = insert(&list, &[0, 2, 2, 3], &"X").unwrap();
    assert_eq!(result, vec!["X", "a", "b", "X", "X", "c", "X"]);
}

#[test]
fn insert_result_length_matches_contract() {
    let list = vec![1, 2, 3, 4];
    let indices = vec![1, 1, 4];
    let result = insert(&list, &indices, &9).unwrap();
    assert_eq!(result.len(), list.len() + indices.len());
}

#[test]
fn insert_then_remove_round_trips_to_original() {
    let list = vec![10, 20, 30];
    let indices = vec![0, 1, 3];
    let inserted = insert(&list, &indices, &99).unwrap();
    let removed: Vec<i32> = inserted.into_iter().filter(|&x| x != 99).collect();
    assert_eq!(removed, list);
}

#[test]
fn insert_rejects_non_ascending_indices() {
    let list = vec![1, 2, 3];
    assert!(insert(&list, &[2, 1], &0).is_err());
}

#[test]
fn insert_rejects_out_of_range_indices() {
    let list = vec![1, 2, 3];
    assert!(insert(&list, &[4], &0).is_err());
}

#[test]
fn insert_rejects_empty_indices() {
    let list = vec![1, 2, 3];
    assert!(insert(&list, &[], &0).is_err());
}
