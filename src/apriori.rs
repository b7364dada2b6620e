// Copyright 2018 Chris Pearce
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::candidates::generate_candidates;
use crate::item_counter::ItemCounter;
use crate::itemset::{ItemSet, ItemsetCount};
use crate::transaction::{Transaction, TransactionStore};
use fnv::FnvHashMap;
use rayon::prelude::*;
use tracing::debug;

/// The frequent itemsets of one size, with their frequencies. Immutable
/// once built; lookups go through an index keyed by the canonical itemset.
#[derive(Clone, Debug)]
pub struct LevelTable {
    itemset_size: usize,
    entries: Vec<ItemsetCount>,
    index: FnvHashMap<ItemSet, usize>,
}

impl LevelTable {
    pub fn new(itemset_size: usize, entries: Vec<ItemsetCount>) -> LevelTable {
        debug_assert!(entries.iter().all(|e| e.itemset.len() == itemset_size));
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.itemset.clone(), i))
            .collect();
        LevelTable {
            itemset_size,
            entries,
            index,
        }
    }

    pub fn itemset_size(&self) -> usize {
        self.itemset_size
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ItemsetCount] {
        &self.entries
    }

    pub fn iter_itemsets(&self) -> impl Iterator<Item = &ItemSet> {
        self.entries.iter().map(|e| &e.itemset)
    }

    pub fn frequency_of(&self, itemset: &ItemSet) -> Option<u64> {
        self.index.get(itemset).map(|&i| self.entries[i].frequency)
    }
}

/// Looks up an itemset's frequency in the level table matching its size.
pub fn frequency_in_levels(levels: &[LevelTable], itemset: &ItemSet) -> Option<u64> {
    if itemset.is_empty() {
        return None;
    }
    levels
        .get(itemset.len() - 1)
        .and_then(|level| level.frequency_of(itemset))
}

// An itemset no transaction contains is never frequent, even at a
// threshold of zero.
fn is_frequent(frequency: u64, total: u64, min_support: f64) -> bool {
    frequency > 0 && frequency as f64 / total as f64 >= min_support
}

fn filter_by_support(
    itemset_size: usize,
    counts: Vec<ItemsetCount>,
    total: u64,
    min_support: f64,
) -> LevelTable {
    let frequent = counts
        .into_iter()
        .filter(|c| is_frequent(c.frequency, total, min_support))
        .collect();
    LevelTable::new(itemset_size, frequent)
}

fn count_single_items(transactions: &[Transaction]) -> Vec<ItemsetCount> {
    let mut item_count = ItemCounter::new();
    for transaction in transactions {
        for item in transaction.items().items() {
            item_count.add(item, transaction.weight());
        }
    }
    item_count
        .items()
        .into_iter()
        .map(|(item, count)| ItemsetCount::new(ItemSet::singleton(item), count))
        .collect()
}

/// Counts the weighted occurrences of each candidate in `transactions`, then
/// drops every transaction that contains no candidate. Such a transaction
/// cannot contain any larger candidate either, so it takes no further part.
fn count_and_prune(
    candidates: Vec<ItemSet>,
    transactions: &mut Vec<Transaction>,
) -> Vec<ItemsetCount> {
    let matches: Vec<Vec<usize>> = transactions
        .par_iter()
        .map(|transaction| {
            candidates
                .iter()
                .enumerate()
                .filter(|(_, candidate)| transaction.contains(candidate))
                .map(|(i, _)| i)
                .collect()
        })
        .collect();

    let mut frequencies: Vec<u64> = vec![0; candidates.len()];
    for (transaction, matched) in transactions.iter().zip(matches.iter()) {
        for &i in matched {
            frequencies[i] += transaction.weight();
        }
    }

    let mut matched = matches.iter().map(|m| !m.is_empty());
    transactions.retain(|_| matched.next().unwrap_or(false));

    candidates
        .into_iter()
        .zip(frequencies.into_iter())
        .map(|(itemset, frequency)| ItemsetCount::new(itemset, frequency))
        .collect()
}

/// Level-wise Apriori. Returns one table per itemset size that has at least
/// one frequent itemset, smallest first; table `k - 1` holds itemsets of
/// size `k`. `total` is the weight of the whole, unpruned store and
/// `min_support` is a fraction in [0,1].
pub fn mine_frequent_itemsets(
    store: &TransactionStore,
    min_support: f64,
    total: u64,
) -> Vec<LevelTable> {
    let mut levels: Vec<LevelTable> = vec![];
    if total == 0 {
        return levels;
    }

    // Working copy; pruning shrinks it as the itemsets grow.
    let mut transactions: Vec<Transaction> = store.as_slice().to_vec();

    let level = filter_by_support(1, count_single_items(&transactions), total, min_support);
    debug!(
        itemset_size = 1,
        frequent = level.len(),
        "counted single items"
    );
    if level.is_empty() {
        return levels;
    }
    levels.push(level);

    loop {
        let k = levels.len();
        let previous: Vec<ItemSet> = levels[k - 1].iter_itemsets().cloned().collect();
        let candidates = generate_candidates(&previous, k);
        if candidates.is_empty() {
            debug!(itemset_size = k + 1, "no candidates generated");
            break;
        }
        let num_candidates = candidates.len();
        let counts = count_and_prune(candidates, &mut transactions);
        let level = filter_by_support(k + 1, counts, total, min_support);
        debug!(
            itemset_size = k + 1,
            candidates = num_candidates,
            transactions_remaining = transactions.len(),
            frequent = level.len(),
            "counted candidates"
        );
        if level.is_empty() {
            break;
        }
        levels.push(level);
    }

    levels
}
