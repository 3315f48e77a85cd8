#![cfg(test)]

// Property tests for SymTable kept inside the crate so they can run the
// structural invariant checker against internals after every operation.

use crate::{InsertError, SymTable};
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap};

// Pool-indexed operations to improve shrinking: indices shrink to earlier
// keys, pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Insert(usize, i32),
    Replace(usize, i32),
    Remove(usize),
    Get(usize),
    Contains(String),
    Mutate(usize, i32),
    Iterate,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z]{0,5}", 1..=8).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let contains_pool = proptest::sample::select(pool.clone());
        let op = prop_oneof![
            (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Insert(i, v)),
            (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Replace(i, v)),
            idx.clone().prop_map(OpI::Remove),
            idx.clone().prop_map(OpI::Get),
            prop_oneof![
                contains_pool.prop_map(|s: String| s),
                "[a-z]{0,5}".prop_map(|s| s)
            ]
            .prop_map(OpI::Contains),
            (idx.clone(), any::<i32>()).prop_map(|(i, d)| OpI::Mutate(i, d)),
            Just(OpI::Iterate),
        ];
        proptest::collection::vec(op, 1..60).prop_map(move |ops| (pool.clone(), ops))
    })
}

// Property: state-machine equivalence against std::collections::HashMap.
// Invariants exercised across random operation sequences:
// - Duplicate keys are rejected and the rejected value is handed back.
// - `get`/`contains_key` parity with the model after every op.
// - `replace` returns the model's previous value; absent replace is a no-op.
// - `remove` returns the model's value and clears membership.
// - `iter` yields each live binding exactly once; key set equals the model's.
// - After every op: size parity and the structural invariants (home-bucket
//   placement, reachability, key distinctness) hold.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        let mut sut: SymTable<i32> = SymTable::new();
        let mut model: HashMap<String, i32> = HashMap::new();

        for op in ops {
            match op {
                OpI::Insert(i, v) => {
                    let k = &pool[i];
                    let already = model.contains_key(k);
                    match sut.insert(k, v) {
                        Ok(()) => {
                            prop_assert!(!already, "insert must fail on duplicate");
                            model.insert(k.clone(), v);
                        }
                        Err(InsertError::DuplicateKey(back)) => {
                            prop_assert!(already, "duplicate error only when key exists");
                            prop_assert_eq!(back, v, "rejected value must travel back");
                        }
                    }
                }
                OpI::Replace(i, v) => {
                    let k = &pool[i];
                    let old = sut.replace(k, v);
                    let model_old = model.get(k).copied();
                    prop_assert_eq!(old, model_old);
                    if old.is_some() {
                        model.insert(k.clone(), v);
                    }
                }
                OpI::Remove(i) => {
                    let k = &pool[i];
                    let got = sut.remove(k);
                    let expected = model.remove(k);
                    prop_assert_eq!(got, expected);
                    prop_assert!(!sut.contains_key(k));
                }
                OpI::Get(i) => {
                    let k = &pool[i];
                    prop_assert_eq!(sut.get(k), model.get(k));
                }
                OpI::Contains(s) => {
                    prop_assert_eq!(sut.contains_key(&s), model.contains_key(&s));
                }
                OpI::Mutate(i, d) => {
                    let k = &pool[i];
                    match sut.get_mut(k) {
                        Some(v) => {
                            *v = v.saturating_add(d);
                            let mv = model.get_mut(k).expect("model tracks live keys");
                            *mv = mv.saturating_add(d);
                        }
                        None => prop_assert!(!model.contains_key(k)),
                    }
                }
                OpI::Iterate => {
                    let s_keys: BTreeSet<String> =
                        sut.iter().map(|(k, _)| k.to_string()).collect();
                    let m_keys: BTreeSet<String> = model.keys().cloned().collect();
                    prop_assert_eq!(sut.iter().count(), model.len());
                    prop_assert_eq!(s_keys, m_keys);
                }
            }

            // Post-conditions after each op.
            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.is_empty(), model.is_empty());
            sut.check_invariants();
        }
    }
}

// Property: rehashing preserves every binding. Insert enough sequential keys
// to cross the first resize boundaries, then verify each key still maps to
// its original value and the structure is sound at the final capacity.
proptest! {
    #![proptest_config(ProptestConfig { cases: 8, .. ProptestConfig::default() })]
    #[test]
    fn prop_growth_preserves_all_bindings(n in 510usize..1200) {
        let mut sut: SymTable<usize> = SymTable::new();
        for i in 0..n {
            sut.insert(&format!("key{i:05}"), i).unwrap();
        }
        prop_assert_eq!(sut.len(), n);
        for i in 0..n {
            prop_assert_eq!(sut.get(&format!("key{i:05}")), Some(&i));
        }
        sut.check_invariants();
    }
}
