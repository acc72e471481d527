use ordered_float::OrderedFloat;
use rand::prelude::*;
use weighted_paths::data_structures::{MinPriorityQueue, PriorityEntry};

#[test]
fn test_dequeue_on_empty_queue_returns_none() {
    let mut queue: MinPriorityQueue<&str, f64> = MinPriorityQueue::new();
    assert!(queue.is_empty());
    assert_eq!(queue.dequeue(), None);
    assert_eq!(queue.dequeue(), None);
    assert!(queue.peek().is_none());
}

#[test]
fn test_enqueue_and_dequeue_minimum() {
    let mut queue = MinPriorityQueue::new();
    queue.enqueue("low", 5);
    queue.enqueue("urgent", 1);
    queue.enqueue("medium", 3);
    queue.enqueue("lowest", 9);

    assert_eq!(queue.len(), 4);
    assert_eq!(queue.peek().map(|e| e.value), Some("urgent"));

    assert_eq!(queue.dequeue(), Some(PriorityEntry::new("urgent", 1)));
    assert_eq!(queue.dequeue(), Some(PriorityEntry::new("medium", 3)));
    assert_eq!(queue.dequeue(), Some(PriorityEntry::new("low", 5)));
    assert_eq!(queue.dequeue(), Some(PriorityEntry::new("lowest", 9)));
    assert_eq!(queue.dequeue(), None);
}

#[test]
fn test_same_value_can_be_queued_twice() {
    let mut queue = MinPriorityQueue::new();
    queue.enqueue('B', 4.0);
    queue.enqueue('D', 10.0);
    queue.enqueue('B', 3.0);

    assert_eq!(queue.len(), 3);
    let first = queue.dequeue().unwrap();
    assert_eq!(first.into_parts(), ('B', 3.0));
    let second = queue.dequeue().unwrap();
    assert_eq!(second.into_parts(), ('B', 4.0));
    assert_eq!(queue.dequeue().unwrap().value, 'D');
}

#[test]
fn test_dequeued_priorities_are_non_decreasing() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut queue = MinPriorityQueue::with_capacity(500);

    for i in 0..500 {
        queue.enqueue(i, OrderedFloat(rng.gen_range(0.0..50.0)));
    }
    // Interleave some extractions with more insertions
    for _ in 0..100 {
        queue.dequeue();
    }
    for i in 500..700 {
        queue.enqueue(i, OrderedFloat(rng.gen_range(0.0..50.0)));
    }

    let mut last = OrderedFloat(f64::NEG_INFINITY);
    let mut count = 0;
    while let Some(entry) = queue.dequeue() {
        assert!(entry.priority >= last, "{:?} came after {:?}", entry.priority, last);
        last = entry.priority;
        count += 1;
    }
    assert_eq!(count, 600);
}

#[test]
fn test_equal_priorities_are_all_returned() {
    let queue: MinPriorityQueue<u32, u32> = (0..10).map(|v| (v, 2)).collect();
    let sorted = queue.into_sorted_vec();

    assert_eq!(sorted.len(), 10);
    assert!(sorted.iter().all(|e| e.priority == 2));
    let mut values: Vec<u32> = sorted.iter().map(|e| e.value).collect();
    values.sort();
    assert_eq!(values, (0..10).collect::<Vec<_>>());
}

#[test]
fn test_tied_priorities_dequeue_in_fixed_order() {
    let mut queue = MinPriorityQueue::new();
    for (value, priority) in [(0, 0), (1, 3), (2, 2), (3, 1), (4, 1), (5, 3), (6, 3), (7, 3), (8, 1), (9, 1)] {
        queue.enqueue(value, priority);
    }

    // Sift-down only moves to the right child when it is strictly smaller
    let order: Vec<i32> = queue.into_sorted_vec().into_iter().map(|e| e.value).collect();
    assert_eq!(order, vec![0, 9, 3, 8, 4, 2, 7, 1, 5, 6]);
}

#[test]
fn test_into_sorted_vec_and_clear() {
    let mut queue: MinPriorityQueue<char, i64> = MinPriorityQueue::default();
    queue.extend(vec![('c', 30), ('a', -10), ('b', 20), ('z', 0)]);

    let order: Vec<char> = queue.clone().into_sorted_vec().into_iter().map(|e| e.value).collect();
    assert_eq!(order, vec!['a', 'z', 'b', 'c']);

    queue.clear();
    assert!(queue.is_empty());
    assert_eq!(queue.len(), 0);
    assert_eq!(queue.dequeue(), None);
}
