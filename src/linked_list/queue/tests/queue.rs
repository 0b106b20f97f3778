extern crate std;

use alloc::{collections::VecDeque, vec, vec::Vec};

use rand::{Rng, SeedableRng, rngs::StdRng};

use super::{contents, identities};
use crate::error::QueueError;
use crate::linked_list::queue::{list::StringQueue, traits::Queue};

#[test]
fn test_queue_scenario() {
    let mut queue = StringQueue::new();
    queue.insert_tail("banana").unwrap();
    queue.insert_tail("apple").unwrap();
    queue.insert_head("cherry").unwrap();
    assert_eq!(contents(&queue), vec!["cherry", "banana", "apple"]);
    assert_eq!(queue.size(), 3);

    queue.sort();
    assert_eq!(contents(&queue), vec!["apple", "banana", "cherry"]);

    queue.reverse();
    assert_eq!(contents(&queue), vec!["cherry", "banana", "apple"]);

    let mut buf = [0xffu8; 16];
    queue.remove_head(Some(&mut buf[..])).unwrap();
    assert_eq!(&buf[..7], b"cherry\0");
    assert_eq!(queue.size(), 2);
    queue.check_invariants();
}

#[test]
fn test_queue_new_is_empty() {
    let queue = StringQueue::new();
    assert!(queue.is_empty());
    assert_eq!(queue.size(), 0);
    assert!(queue.head().is_none());
    assert!(queue.tail().is_none());
    assert_eq!(queue.iter().count(), 0);
    queue.check_invariants();
}

#[test]
fn test_queue_single_element_is_head_and_tail() {
    let mut queue = StringQueue::new();
    queue.insert_head("only").unwrap();
    assert_eq!(queue.head(), queue.tail());
    assert_eq!(queue.head().unwrap().as_ptr(), queue.tail().unwrap().as_ptr());
    queue.check_invariants();

    let mut queue = StringQueue::new();
    queue.insert_tail("only").unwrap();
    assert_eq!(queue.head().unwrap().as_ptr(), queue.tail().unwrap().as_ptr());
    queue.check_invariants();
}

#[test]
fn test_queue_remove_from_empty() {
    let mut queue = StringQueue::new();
    let mut buf = [0u8; 4];
    assert_eq!(
        queue.remove_head(Some(&mut buf[..])),
        Err(QueueError::InvalidOperation("remove from an empty queue"))
    );
    assert_eq!(queue.size(), 0);
    assert_eq!(buf, [0u8; 4]);
    assert!(queue.take_head().is_err());
    queue.check_invariants();
}

#[test]
fn test_queue_remove_until_empty_resets_tail() {
    let mut queue = StringQueue::new();
    queue.insert_tail("a").unwrap();
    queue.insert_tail("b").unwrap();

    queue.remove_head(None).unwrap();
    assert_eq!(queue.tail().unwrap().to_bytes(), b"b");
    queue.remove_head(None).unwrap();
    assert!(queue.head().is_none());
    assert!(queue.tail().is_none());
    queue.check_invariants();

    // the queue stays usable after being emptied
    queue.insert_tail("c").unwrap();
    assert_eq!(contents(&queue), vec!["c"]);
    queue.check_invariants();
}

#[test]
fn test_queue_remove_truncates_to_capacity() {
    let mut queue = StringQueue::new();
    queue.insert_tail("truncated").unwrap();
    queue.insert_tail("fits").unwrap();

    let mut buf = [0xffu8; 5];
    queue.remove_head(Some(&mut buf[..])).unwrap();
    assert_eq!(&buf, b"trun\0");

    let mut buf = [0xffu8; 8];
    queue.remove_head(Some(&mut buf[..])).unwrap();
    assert_eq!(&buf, b"fits\0\0\0\0");
    assert!(queue.is_empty());
}

#[test]
fn test_queue_remove_into_tiny_buffers() {
    let mut queue = StringQueue::new();
    queue.insert_tail("abc").unwrap();
    queue.insert_tail("def").unwrap();

    let mut one = [0xffu8; 1];
    queue.remove_head(Some(&mut one[..])).unwrap();
    assert_eq!(one, [0]);

    let mut none: [u8; 0] = [];
    queue.remove_head(Some(&mut none[..])).unwrap();
    assert!(queue.is_empty());
}

#[test]
fn test_queue_insert_then_remove_head_round_trip() {
    let mut queue = StringQueue::new();
    queue.insert_tail("x").unwrap();
    queue.insert_tail("y").unwrap();

    queue.insert_head("pushed").unwrap();
    let value = queue.take_head().unwrap();
    assert_eq!(value.to_bytes(), b"pushed");
    assert_eq!(queue.size(), 2);
    assert_eq!(contents(&queue), vec!["x", "y"]);
}

#[test]
fn test_queue_copies_payload() {
    let mut queue = StringQueue::new();
    let mut text = alloc::string::String::from("original");
    queue.insert_tail(&text).unwrap();
    text.clear();
    text.push_str("changed");
    assert_eq!(contents(&queue), vec!["original"]);
    assert_ne!(queue.head().unwrap().as_ptr().cast::<u8>(), text.as_ptr());
}

#[test]
fn test_queue_payload_stops_at_nul() {
    let mut queue = StringQueue::new();
    queue.insert_tail(b"head\0tail".as_slice()).unwrap();
    queue.insert_tail("").unwrap();
    assert_eq!(queue.head().unwrap().to_bytes_with_nul(), b"head\0");
    assert_eq!(queue.tail().unwrap().to_bytes_with_nul(), b"\0");
}

#[test]
fn test_queue_reverse() {
    let mut queue = StringQueue::new();
    queue.reverse();
    queue.check_invariants();

    queue.insert_tail("1").unwrap();
    queue.reverse();
    assert_eq!(contents(&queue), vec!["1"]);
    queue.check_invariants();

    queue.insert_tail("2").unwrap();
    queue.insert_tail("3").unwrap();
    queue.reverse();
    assert_eq!(contents(&queue), vec!["3", "2", "1"]);
    assert_eq!(queue.tail().unwrap().to_bytes(), b"1");
    queue.check_invariants();

    // the reversed queue links correctly at both ends
    queue.insert_tail("0").unwrap();
    queue.insert_head("4").unwrap();
    assert_eq!(contents(&queue), vec!["4", "3", "2", "1", "0"]);
    queue.check_invariants();
}

#[test]
fn test_queue_reverse_is_involution() {
    let mut queue = StringQueue::new();
    for word in ["one", "two", "three", "four", "five"] {
        queue.insert_tail(word).unwrap();
    }
    let before = identities(&queue);

    queue.reverse();
    let mut reversed = before.clone();
    reversed.reverse();
    assert_eq!(identities(&queue), reversed);

    queue.reverse();
    assert_eq!(identities(&queue), before);
    assert_eq!(contents(&queue), vec!["one", "two", "three", "four", "five"]);
}

#[test]
fn test_queue_clear() {
    let mut queue = StringQueue::new();
    for word in ["a", "b", "c"] {
        queue.insert_head(word).unwrap();
    }
    queue.clear();
    assert!(queue.is_empty());
    queue.check_invariants();
    queue.insert_tail("d").unwrap();
    assert_eq!(contents(&queue), vec!["d"]);
}

#[test]
fn test_queue_iter_size_hint() {
    let mut queue = StringQueue::new();
    for word in ["a", "b", "c"] {
        queue.insert_tail(word).unwrap();
    }
    let mut iter = queue.iter();
    assert_eq!(iter.len(), 3);
    iter.next();
    assert_eq!(iter.len(), 2);
    assert_eq!((&queue).into_iter().count(), 3);
}

#[test]
fn test_queue_debug() {
    let mut queue = StringQueue::new();
    queue.insert_tail("a").unwrap();
    queue.insert_tail("b").unwrap();
    assert_eq!(alloc::format!("{:?}", queue), r#"["a", "b"]"#);
}

#[test]
fn test_queue_random_operations_match_model() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut queue = StringQueue::new();
    let mut model: VecDeque<Vec<u8>> = VecDeque::new();

    for _ in 0..2_000 {
        let len = rng.random_range(0..6);
        let text: Vec<u8> = (0..len).map(|_| rng.random_range(b'a'..=b'e')).collect();
        match rng.random_range(0..6) {
            0 => {
                queue.insert_head(&text).unwrap();
                model.push_front(text);
            }
            1 => {
                queue.insert_tail(&text).unwrap();
                model.push_back(text);
            }
            2 => match model.pop_front() {
                Some(expected) => {
                    let mut buf = [0u8; 8];
                    queue.remove_head(Some(&mut buf[..])).unwrap();
                    assert_eq!(&buf[..expected.len()], expected.as_slice());
                    assert_eq!(buf[expected.len()], 0);
                }
                None => assert!(queue.remove_head(None).is_err()),
            },
            3 => {
                queue.reverse();
                model.make_contiguous().reverse();
            }
            4 => {
                queue.sort();
                model.make_contiguous().sort();
            }
            _ => assert_eq!(queue.size(), model.len()),
        }

        queue.check_invariants();
        assert_eq!(queue.size(), model.len());
    }

    let actual: Vec<&[u8]> = queue.iter().map(|s| s.to_bytes()).collect();
    let expected: Vec<&[u8]> = model.iter().map(|v| v.as_slice()).collect();
    assert_eq!(actual, expected);
}
