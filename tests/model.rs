//! Model-equivalence properties: random operation sequences against
//! the std container with the same semantics.

use std::collections::VecDeque;

use ballast::{BoundedVec, List, Pool};
use proptest::prelude::*;

const CAP: usize = 24;

#[derive(Debug, Clone)]
enum ListOp {
    PushFront(u32),
    PushBack(u32),
    PopFront,
    PopBack,
    InsertAt(usize, u32),
    RemoveAt(usize),
}

fn list_op() -> impl Strategy<Value = ListOp> {
    prop_oneof![
        any::<u32>().prop_map(ListOp::PushFront),
        any::<u32>().prop_map(ListOp::PushBack),
        Just(ListOp::PopFront),
        Just(ListOp::PopBack),
        (any::<usize>(), any::<u32>()).prop_map(|(at, v)| ListOp::InsertAt(at, v)),
        any::<usize>().prop_map(ListOp::RemoveAt),
    ]
}

#[derive(Debug, Clone)]
enum VecOp {
    Push(u32),
    Pop,
    InsertAt(usize, u32),
    RemoveAt(usize),
    SwapRemoveAt(usize),
    Truncate(usize),
}

fn vec_op() -> impl Strategy<Value = VecOp> {
    prop_oneof![
        any::<u32>().prop_map(VecOp::Push),
        Just(VecOp::Pop),
        (any::<usize>(), any::<u32>()).prop_map(|(at, v)| VecOp::InsertAt(at, v)),
        any::<usize>().prop_map(VecOp::RemoveAt),
        any::<usize>().prop_map(VecOp::SwapRemoveAt),
        (0..2 * CAP).prop_map(VecOp::Truncate),
    ]
}

proptest! {
    /// After any operation sequence, forward iteration equals the
    /// VecDeque model, backward iteration is its reverse, and the pool
    /// accounts for exactly the live elements.
    #[test]
    fn list_matches_vecdeque(ops in proptest::collection::vec(list_op(), 0..200)) {
        let mut pool: Pool<u32> = Pool::with_capacity(CAP);
        let mut list: List<u32> = List::new();
        let mut model: VecDeque<u32> = VecDeque::new();

        for op in ops {
            match op {
                ListOp::PushFront(v) => {
                    let pushed = list.try_push_front(&mut pool, v).is_ok();
                    prop_assert_eq!(pushed, model.len() < CAP);
                    if pushed {
                        model.push_front(v);
                    }
                }
                ListOp::PushBack(v) => {
                    let pushed = list.try_push_back(&mut pool, v).is_ok();
                    prop_assert_eq!(pushed, model.len() < CAP);
                    if pushed {
                        model.push_back(v);
                    }
                }
                ListOp::PopFront => {
                    prop_assert_eq!(list.pop_front(&mut pool), model.pop_front());
                }
                ListOp::PopBack => {
                    prop_assert_eq!(list.pop_back(&mut pool), model.pop_back());
                }
                ListOp::InsertAt(at, v) => {
                    if model.is_empty() {
                        continue;
                    }
                    let at = at % model.len();
                    let anchor = list.index_at(&pool, at).unwrap();
                    let inserted = list.try_insert_before(&mut pool, anchor, v).is_ok();
                    prop_assert_eq!(inserted, model.len() < CAP);
                    if inserted {
                        model.insert(at, v);
                    }
                }
                ListOp::RemoveAt(at) => {
                    if model.is_empty() {
                        prop_assert!(list.index_at(&pool, 0).is_none());
                        continue;
                    }
                    let at = at % model.len();
                    let idx = list.index_at(&pool, at).unwrap();
                    prop_assert_eq!(list.remove(&mut pool, idx), model.remove(at));
                }
            }
            prop_assert_eq!(list.len(), model.len());
            prop_assert_eq!(pool.len(), model.len());
        }

        let forward: Vec<u32> = list.iter(&pool).copied().collect();
        let expected: Vec<u32> = model.iter().copied().collect();
        prop_assert_eq!(&forward, &expected);

        let mut backward: Vec<u32> = list.iter(&pool).rev().copied().collect();
        backward.reverse();
        prop_assert_eq!(&backward, &expected);
    }

    /// The pool never hands out a slot that is currently live.
    #[test]
    fn pool_never_reissues_a_live_slot(ops in proptest::collection::vec(any::<u16>(), 0..300)) {
        let mut pool: Pool<u16> = Pool::with_capacity(CAP);
        let mut list: List<u16> = List::new();
        let mut live: Vec<u16> = Vec::new();

        for op in ops {
            if op % 3 != 0 {
                match list.try_push_back(&mut pool, op) {
                    Ok(idx) => {
                        prop_assert!(!live.contains(&idx));
                        live.push(idx);
                    }
                    Err(_) => prop_assert_eq!(live.len(), CAP),
                }
            } else if !live.is_empty() {
                let victim = live.swap_remove(op as usize % live.len());
                prop_assert!(list.remove(&mut pool, victim).is_some());
            }
        }
        prop_assert_eq!(pool.len(), live.len());
        prop_assert_eq!(pool.free_slots(), CAP - live.len());
    }

    /// After any operation sequence, the bounded vector's contents are
    /// exactly the std Vec model's, element for element.
    #[test]
    fn bounded_vec_matches_vec(ops in proptest::collection::vec(vec_op(), 0..200)) {
        let mut ours: BoundedVec<u32> = BoundedVec::with_capacity(CAP);
        let mut model: Vec<u32> = Vec::new();

        for op in ops {
            match op {
                VecOp::Push(v) => {
                    let pushed = ours.try_push(v).is_ok();
                    prop_assert_eq!(pushed, model.len() < CAP);
                    if pushed {
                        model.push(v);
                    }
                }
                VecOp::Pop => {
                    prop_assert_eq!(ours.pop(), model.pop());
                }
                VecOp::InsertAt(at, v) => {
                    let at = at % (model.len() + 1);
                    let inserted = ours.try_insert(at, v).is_ok();
                    prop_assert_eq!(inserted, model.len() < CAP);
                    if inserted {
                        model.insert(at, v);
                    }
                }
                VecOp::RemoveAt(at) => {
                    if model.is_empty() {
                        continue;
                    }
                    let at = at % model.len();
                    prop_assert_eq!(ours.remove(at), model.remove(at));
                }
                VecOp::SwapRemoveAt(at) => {
                    if model.is_empty() {
                        continue;
                    }
                    let at = at % model.len();
                    prop_assert_eq!(ours.swap_remove(at), model.swap_remove(at));
                }
                VecOp::Truncate(len) => {
                    ours.truncate(len);
                    model.truncate(len);
                }
            }
            prop_assert_eq!(ours.len(), model.len());
        }

        prop_assert_eq!(ours.as_slice(), model.as_slice());
    }
}
