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

use crate::item::Item;
use crate::itemset::ItemSet;

/// One pre-aggregated row: `weight` real-world occurrences of exactly
/// this combination of items.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Transaction {
    weight: u64,
    items: ItemSet,
}

impl Transaction {
    pub fn new(weight: u64, items: Vec<Item>) -> Transaction {
        Transaction {
            weight,
            items: ItemSet::new(items),
        }
    }

    pub fn from_ids(weight: u64, ids: &[u32]) -> Transaction {
        Transaction {
            weight,
            items: ItemSet::from_ids(ids),
        }
    }

    pub fn weight(&self) -> u64 {
        self.weight
    }

    pub fn items(&self) -> &ItemSet {
        &self.items
    }

    pub fn contains(&self, itemset: &ItemSet) -> bool {
        itemset.is_subset_of(&self.items)
    }
}

/// Ordered collection of weighted transactions, as loaded.
#[derive(Clone, Debug, Default)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    pub fn new() -> TransactionStore {
        TransactionStore {
            transactions: vec![],
        }
    }

    pub fn push(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    pub fn as_slice(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Sum of all weights. This is the fixed denominator for every support
    /// calculation, so take it before any pruning happens.
    pub fn total_weight(&self) -> u64 {
        self.transactions.iter().map(|t| t.weight).sum()
    }
}

impl From<Vec<Transaction>> for TransactionStore {
    fn from(transactions: Vec<Transaction>) -> TransactionStore {
        TransactionStore { transactions }
    }
}

impl std::iter::FromIterator<Transaction> for TransactionStore {
    fn from_iter<I: IntoIterator<Item = Transaction>>(iter: I) -> TransactionStore {
        TransactionStore {
            transactions: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TransactionStore {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;
    fn into_iter(self) -> Self::IntoIter {
        self.transactions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{Transaction, TransactionStore};
    use crate::itemset::ItemSet;

    #[test]
    fn test_total_weight() {
        let store: TransactionStore = vec![
            Transaction::from_ids(3, &[0, 1]),
            Transaction::from_ids(2, &[0]),
            Transaction::from_ids(1, &[1]),
            Transaction::from_ids(4, &[]),
        ]
        .into();
        assert_eq!(store.len(), 4);
        assert_eq!(store.total_weight(), 10);
    }

    #[test]
    fn test_transaction_items_are_unique() {
        let t = Transaction::from_ids(1, &[4, 2, 4, 2]);
        assert_eq!(t.items(), &ItemSet::from_ids(&[2, 4]));
        assert!(t.contains(&ItemSet::from_ids(&[4])));
        assert!(!t.contains(&ItemSet::from_ids(&[1, 4])));
    }
}
