//! End-to-end scenarios through both the typed and the erased containers.

use std::sync::Arc;
use std::thread;

use bytemuck_derive::{Pod, Zeroable};
use linear_ds::prelude::*;

const STRS: [&str; 10] = [
    "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten",
];

#[derive(Debug, Clone, PartialEq, Element)]
#[element(crate = "linear_ds")]
struct DoubleStr {
    val: f64,
    name: String,
}

fn pair(i: usize) -> DoubleStr {
    DoubleStr {
        val: i as f64 + 0.14159,
        name: STRS[i].to_string(),
    }
}

// ---------------------------------------------------------------------------
// Queue of string references
// ---------------------------------------------------------------------------

#[test]
fn queue_of_string_references() {
    let mut q: Queue<&'static str, Shallow> = Queue::new();
    for s in &STRS {
        q.push_copy(s);
    }
    assert_eq!(q.size(), 10);
    assert_eq!(q.front(), Some(&"One"));
    assert_eq!(q.back(), Some(&"Ten"));

    let popped: Vec<_> = (0..5).map(|_| q.pop().unwrap()).collect();
    assert_eq!(popped, &STRS[..5]);
    assert_eq!(q.size(), 5);
    assert_eq!(q.front(), Some(&"Six"));
    assert_eq!(q.back(), Some(&"Ten"));

    while q.pop_discard() {}
    assert!(q.is_empty());
    assert!(q.front().is_none());
}

#[test]
fn erased_queue_of_string_references() {
    // Elements are the string indices; the queue only ever sees bytes.
    let helper = ErasedHelper::of::<u64>();
    let mut q = ErasedQueue::new(Some(&helper)).unwrap();
    for i in 0..STRS.len() as u64 {
        q.push_pod(&i).unwrap();
    }
    assert_eq!(q.size(), 10);
    assert_eq!(q.front_pod::<u64>().unwrap(), Some(0));
    assert_eq!(q.back_pod::<u64>().unwrap(), Some(9));

    for expected in 0..5u64 {
        let mut out = [0u8; 8];
        assert!(q.pop_into(Some(&mut out)).unwrap());
        assert_eq!(STRS[u64::from_ne_bytes(out) as usize], STRS[expected as usize]);
    }
    assert_eq!(q.size(), 5);
    assert_eq!(STRS[q.front_pod::<u64>().unwrap().unwrap() as usize], "Six");

    while q.pop_into(None).unwrap() {}
    assert!(q.is_empty());
}

// ---------------------------------------------------------------------------
// Stack of (double, string) pairs
// ---------------------------------------------------------------------------

#[test]
fn stack_of_double_string_pairs() {
    let mut s: Stack<DoubleStr> = Stack::new();
    for i in 0..10 {
        s.push_copy(&pair(i));
    }
    assert_eq!(s.top(), Some(&pair(9)));

    for i in (5..10).rev() {
        let mut out = DoubleStr {
            val: 0.0,
            name: String::new(),
        };
        assert!(s.pop_into(Some(&mut out)));
        assert_eq!(out, pair(i));
    }
    assert_eq!(s.size(), 5);
    assert_eq!(s.top().map(|d| d.name.as_str()), Some("Five"));
}

#[test]
fn deep_copies_are_isolated_both_ways() {
    let mut s = Stack::with_helper(Deep).unwrap();
    let mut original = pair(0);
    s.push_copy(&original);

    original.name.push_str("-changed");
    assert_eq!(s.top().map(|d| d.name.as_str()), Some("One"));

    s.top_mut().unwrap().val = -1.0;
    assert_eq!(original.val, 0.14159);
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
struct PackedPair {
    val: f64,
    index: u64,
}

#[test]
fn erased_stack_of_pairs() {
    let mut s = ErasedStack::new(Some(&ErasedHelper::of::<PackedPair>())).unwrap();
    for i in 0..10u64 {
        s.push_pod(&PackedPair {
            val: i as f64 + 0.14159,
            index: i,
        })
        .unwrap();
    }
    let top: PackedPair = s.top_pod().unwrap().unwrap();
    assert_eq!(STRS[top.index as usize], "Ten");

    let popped: Vec<u64> = (0..5)
        .map(|_| s.pop_pod::<PackedPair>().unwrap().unwrap().index)
        .collect();
    assert_eq!(popped, [9, 8, 7, 6, 5]);
    assert_eq!(s.size(), 5);
}

// ---------------------------------------------------------------------------
// Shared containers across threads
// ---------------------------------------------------------------------------

#[test]
fn producer_consumer_over_shared_queue() {
    let shared = Arc::new(Shared::new(Queue::<DoubleStr>::new()));

    let producer = {
        let shared = Arc::clone(&shared);
        thread::spawn(move || {
            for i in 0..10 {
                shared.push(pair(i));
            }
        })
    };

    let received: Vec<String> = (0..10).map(|_| shared.pop().name).collect();
    producer.join().unwrap();

    assert_eq!(received, STRS);
    assert!(shared.is_empty());
}

#[test]
fn linear_container_is_uniform() {
    fn drain<C: LinearContainer<Item = u32>>(mut c: C) -> Vec<u32> {
        for v in 1..=3 {
            c.push(v);
        }
        std::iter::from_fn(|| c.pop()).collect()
    }

    assert_eq!(drain(Queue::<u32>::new()), [1, 2, 3]);
    assert_eq!(drain(Stack::<u32>::new()), [3, 2, 1]);
}
