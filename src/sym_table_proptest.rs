#![cfg(test)]

// Property tests for the two table backends kept inside the crate so the
// same scenarios can drive them side by side.

use crate::chain_table::ChainTable;
use crate::sym_table::{InsertError, SymTable};
use proptest::prelude::*;
use std::collections::{BTreeMap, HashMap};

// Pool-indexed operations to improve shrinking: indices shrink to earlier
// keys, pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Put(usize, i32),
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
            (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Put(i, v)),
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

// Property: state-machine equivalence of both backends against
// std::collections::HashMap across random operation sequences.
// Invariants exercised:
// - put rejects exactly the keys the model already holds, leaving state
//   unchanged; on success len rises by one.
// - replace/remove return the model's previous value or None.
// - get/contains parity on present and absent keys.
// - iter yields each live binding exactly once; pair set equals the
//   model's pair set.
// - len/is_empty parity after every operation.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_backends_match_model((pool, ops) in arb_scenario()) {
        let mut hashed: SymTable<i32> = SymTable::new();
        let mut chained: ChainTable<i32> = ChainTable::new();
        let mut model: HashMap<String, i32> = HashMap::new();

        for op in ops {
            match op {
                OpI::Put(i, v) => {
                    let k = &pool[i];
                    let already = model.contains_key(k);
                    let rh = hashed.put(k, v);
                    let rc = chained.put(k, v);
                    if already {
                        prop_assert_eq!(rh, Err(InsertError::DuplicateKey));
                        prop_assert_eq!(rc, Err(InsertError::DuplicateKey));
                    } else {
                        prop_assert_eq!(rh, Ok(()));
                        prop_assert_eq!(rc, Ok(()));
                        model.insert(k.clone(), v);
                    }
                }
                OpI::Replace(i, v) => {
                    let k = &pool[i];
                    let prev = model.get(k).copied();
                    prop_assert_eq!(hashed.replace(k, v), prev);
                    prop_assert_eq!(chained.replace(k, v), prev);
                    if prev.is_some() {
                        model.insert(k.clone(), v);
                    }
                }
                OpI::Remove(i) => {
                    let k = &pool[i];
                    let prev = model.remove(k);
                    prop_assert_eq!(hashed.remove(k), prev);
                    prop_assert_eq!(chained.remove(k), prev);
                }
                OpI::Get(i) => {
                    let k = &pool[i];
                    prop_assert_eq!(hashed.get(k), model.get(k));
                    prop_assert_eq!(chained.get(k), model.get(k));
                }
                OpI::Contains(s) => {
                    let present = model.contains_key(&s);
                    prop_assert_eq!(hashed.contains(&s), present);
                    prop_assert_eq!(chained.contains(&s), present);
                }
                OpI::Mutate(i, d) => {
                    let k = &pool[i];
                    if let Some(mv) = model.get_mut(k) {
                        *mv = mv.saturating_add(d);
                        let vh = hashed.get_mut(k).expect("bound in model");
                        *vh = vh.saturating_add(d);
                        let vc = chained.get_mut(k).expect("bound in model");
                        *vc = vc.saturating_add(d);
                    } else {
                        prop_assert!(hashed.get_mut(k).is_none());
                        prop_assert!(chained.get_mut(k).is_none());
                    }
                }
                OpI::Iterate => {
                    let h: BTreeMap<String, i32> =
                        hashed.iter().map(|(k, v)| (k.to_string(), *v)).collect();
                    let c: BTreeMap<String, i32> =
                        chained.iter().map(|(k, v)| (k.to_string(), *v)).collect();
                    let m: BTreeMap<String, i32> =
                        model.iter().map(|(k, v)| (k.clone(), *v)).collect();
                    prop_assert_eq!(hashed.iter().count(), model.len());
                    prop_assert_eq!(&h, &m);
                    prop_assert_eq!(&c, &m);
                }
            }

            // Post-conditions after each op
            prop_assert_eq!(hashed.len(), model.len());
            prop_assert_eq!(chained.len(), model.len());
            prop_assert_eq!(hashed.is_empty(), model.is_empty());
            prop_assert_eq!(chained.is_empty(), model.is_empty());
        }
    }
}
