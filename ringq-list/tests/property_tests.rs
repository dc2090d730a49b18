//! # Property Tests
//!
//! Random operation sequences checked against `Vec<String>` models and
//! brute-force references.

use proptest::prelude::*;

use ringq_list::{Queue, QueueChain, SortOrder};

fn queue_of(values: &[String]) -> Queue {
    let mut queue = Queue::new().unwrap();
    queue.extend_tail(values).unwrap();
    queue
}

fn contents(queue: &Queue) -> Vec<String> {
    queue.iter().map(str::to_owned).collect()
}

fn values() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-e]{0,3}", 0..40)
}

/// Keep an element only if every later element is strictly greater.
fn ascend_reference(values: &[String]) -> Vec<String> {
    values
        .iter()
        .enumerate()
        .filter(|(i, v)| values[i + 1..].iter().all(|later| later > *v))
        .map(|(_, v)| v.clone())
        .collect()
}

/// Keep an element only if every later element is strictly smaller.
fn descend_reference(values: &[String]) -> Vec<String> {
    values
        .iter()
        .enumerate()
        .filter(|(i, v)| values[i + 1..].iter().all(|later| later < *v))
        .map(|(_, v)| v.clone())
        .collect()
}

#[derive(Debug, Clone)]
enum Op {
    InsertHead(String),
    InsertTail(String),
    RemoveHead,
    RemoveTail,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        "[a-z]{0,6}".prop_map(Op::InsertHead),
        "[a-z]{0,6}".prop_map(Op::InsertTail),
        Just(Op::RemoveHead),
        Just(Op::RemoveTail),
    ]
}

proptest! {
    #[test]
    fn test_operations_match_deque_model(ops in prop::collection::vec(op(), 0..100)) {
        let mut queue = Queue::new().unwrap();
        let mut model = std::collections::VecDeque::new();

        for op in ops {
            match op {
                Op::InsertHead(s) => {
                    queue.insert_head(&s).unwrap();
                    model.push_front(s);
                }
                Op::InsertTail(s) => {
                    queue.insert_tail(&s).unwrap();
                    model.push_back(s);
                }
                Op::RemoveHead => {
                    let removed = queue.remove_head().map(|e| e.into_value());
                    prop_assert_eq!(removed, model.pop_front());
                }
                Op::RemoveTail => {
                    let removed = queue.remove_tail().map(|e| e.into_value());
                    prop_assert_eq!(removed, model.pop_back());
                }
            }
            prop_assert_eq!(queue.size(), model.len());
        }

        prop_assert!(queue.validate().is_ok());
        prop_assert_eq!(contents(&queue), Vec::from(model));
    }

    #[test]
    fn test_reverse_twice_is_identity(input in values()) {
        let mut queue = queue_of(&input);
        queue.reverse();
        let mut reversed = input.clone();
        reversed.reverse();
        prop_assert_eq!(contents(&queue), reversed);
        queue.reverse();
        prop_assert_eq!(contents(&queue), input);
        prop_assert!(queue.validate().is_ok());
    }

    #[test]
    fn test_sort_orders_every_adjacent_pair(input in values(), descend in any::<bool>()) {
        let mut queue = queue_of(&input);
        queue.sort(SortOrder::from_descend(descend));
        prop_assert!(queue.validate().is_ok());

        let sorted = contents(&queue);
        for pair in sorted.windows(2) {
            if descend {
                prop_assert!(pair[0] >= pair[1]);
            } else {
                prop_assert!(pair[0] <= pair[1]);
            }
        }

        let mut expected = input.clone();
        expected.sort();
        if descend {
            expected.reverse();
        }
        prop_assert_eq!(sorted, expected);
    }

    #[test]
    fn test_delete_dup_keeps_unique_values(input in values()) {
        let mut queue = queue_of(&input);
        queue.sort(SortOrder::Ascending);
        prop_assert!(queue.delete_dup());
        prop_assert!(queue.validate().is_ok());

        let mut expected: Vec<String> = input
            .iter()
            .filter(|v| input.iter().filter(|w| w == v).count() == 1)
            .cloned()
            .collect();
        expected.sort();
        prop_assert_eq!(contents(&queue), expected);
    }

    #[test]
    fn test_ascend_matches_reference(input in values()) {
        let mut queue = queue_of(&input);
        let expected = ascend_reference(&input);
        prop_assert_eq!(queue.ascend(), expected.len());
        prop_assert_eq!(contents(&queue), expected);
        prop_assert!(queue.validate().is_ok());
    }

    #[test]
    fn test_descend_matches_reference(input in values()) {
        let mut queue = queue_of(&input);
        let expected = descend_reference(&input);
        prop_assert_eq!(queue.descend(), expected.len());
        prop_assert_eq!(contents(&queue), expected);
        prop_assert!(queue.validate().is_ok());
    }

    #[test]
    fn test_reverse_k_matches_chunks(input in values(), k in 1usize..8) {
        let mut queue = queue_of(&input);
        queue.reverse_k(k);
        prop_assert!(queue.validate().is_ok());

        let mut expected = Vec::with_capacity(input.len());
        for chunk in input.chunks(k) {
            if chunk.len() == k {
                expected.extend(chunk.iter().rev().cloned());
            } else {
                expected.extend(chunk.iter().cloned());
            }
        }
        prop_assert_eq!(contents(&queue), expected);
    }

    #[test]
    fn test_swap_matches_pairs(input in values()) {
        let mut queue = queue_of(&input);
        queue.swap();
        let mut expected = input.clone();
        for pair in expected.chunks_mut(2) {
            pair.reverse();
        }
        prop_assert_eq!(contents(&queue), expected);
    }

    #[test]
    fn test_delete_mid_removes_upper_middle(input in values()) {
        let mut queue = queue_of(&input);
        let deleted = queue.delete_mid();
        prop_assert_eq!(deleted, !input.is_empty());

        let mut expected = input.clone();
        if !expected.is_empty() {
            expected.remove(expected.len() / 2);
        }
        prop_assert_eq!(contents(&queue), expected);
        prop_assert!(queue.validate().is_ok());
    }

    #[test]
    fn test_merge_yields_sorted_union(
        inputs in prop::collection::vec(values(), 1..5),
        descend in any::<bool>(),
    ) {
        let order = SortOrder::from_descend(descend);
        let mut chain = QueueChain::new();
        for input in &inputs {
            let mut queue = queue_of(input);
            queue.sort(order);
            chain.push(queue);
        }

        let total = chain.merge(order);
        let mut expected: Vec<String> = inputs.concat();
        expected.sort();
        if descend {
            expected.reverse();
        }
        prop_assert_eq!(total, expected.len());

        let first = chain.get(0).unwrap().queue().unwrap();
        prop_assert!(first.validate().is_ok());
        prop_assert_eq!(contents(first), expected);
    }
}
