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
use crate::itemizer::Itemizer;
use crate::vec_sets;
use itertools::Itertools;
use std::cmp;
use std::fmt;

/// A set of items in canonical form: sorted ascending, no duplicates.
/// Two `ItemSet`s are equal exactly when they hold the same items, so the
/// type can be used directly as a hash key.
#[derive(Clone, Hash, PartialEq, Eq, Debug, Default)]
pub struct ItemSet {
    items: Vec<Item>,
}

impl ItemSet {
    pub fn new(items: Vec<Item>) -> ItemSet {
        ItemSet {
            items: items.into_iter().sorted().dedup().collect(),
        }
    }

    pub fn from_ids(ids: &[u32]) -> ItemSet {
        ItemSet::new(ids.iter().map(|&id| Item::with_id(id)).collect())
    }

    pub fn singleton(item: Item) -> ItemSet {
        ItemSet { items: vec![item] }
    }

    // Caller guarantees `items` is already sorted and unique.
    fn from_sorted(items: Vec<Item>) -> ItemSet {
        debug_assert!(items.windows(2).all(|w| w[0] < w[1]));
        ItemSet { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_subset_of(&self, other: &ItemSet) -> bool {
        vec_sets::is_subset(&self.items, &other.items)
    }

    pub fn is_disjoint(&self, other: &ItemSet) -> bool {
        vec_sets::is_disjoint(&self.items, &other.items)
    }

    pub fn union(&self, other: &ItemSet) -> ItemSet {
        ItemSet::from_sorted(vec_sets::union(&self.items, &other.items))
    }

    pub fn union_len(&self, other: &ItemSet) -> usize {
        vec_sets::union_len(&self.items, &other.items)
    }

    pub fn difference(&self, other: &ItemSet) -> ItemSet {
        ItemSet::from_sorted(vec_sets::difference(&self.items, &other.items))
    }

    pub fn labels(&self, itemizer: &Itemizer) -> String {
        Item::item_vec_to_string(&self.items, itemizer)
    }
}

impl From<Vec<Item>> for ItemSet {
    fn from(items: Vec<Item>) -> ItemSet {
        ItemSet::new(items)
    }
}

// Smaller itemsets first, then lexicographic by item id.
impl Ord for ItemSet {
    fn cmp(&self, other: &ItemSet) -> cmp::Ordering {
        self.len()
            .cmp(&other.len())
            .then_with(|| self.items.cmp(&other.items))
    }
}

impl PartialOrd for ItemSet {
    fn partial_cmp(&self, other: &ItemSet) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ItemSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.items.iter().join(", "))
    }
}

/// An itemset together with the total weight of the transactions that
/// contain it.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ItemsetCount {
    pub itemset: ItemSet,
    pub frequency: u64,
}

impl ItemsetCount {
    pub fn new(itemset: ItemSet, frequency: u64) -> ItemsetCount {
        ItemsetCount { itemset, frequency }
    }

    pub fn support(&self, total: u64) -> f64 {
        self.frequency as f64 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::ItemSet;

    #[test]
    fn test_canonical_form() {
        let a = ItemSet::from_ids(&[3, 1, 2, 1]);
        let b = ItemSet::from_ids(&[1, 2, 3]);
        assert_eq!(a, b);
        assert_eq!(a.len(), 3);
        assert_eq!(format!("{}", a), "{1, 2, 3}");
    }

    #[test]
    fn test_set_operations() {
        let a = ItemSet::from_ids(&[0, 2]);
        let b = ItemSet::from_ids(&[1, 2]);
        assert_eq!(a.union(&b), ItemSet::from_ids(&[0, 1, 2]));
        assert_eq!(a.union_len(&b), 3);
        assert_eq!(a.difference(&b), ItemSet::from_ids(&[0]));
        assert!(!a.is_disjoint(&b));
        assert!(ItemSet::from_ids(&[2]).is_subset_of(&a));
        assert!(!b.is_subset_of(&a));
    }

    #[test]
    fn test_ordering() {
        let mut sets = vec![
            ItemSet::from_ids(&[1, 2]),
            ItemSet::from_ids(&[3]),
            ItemSet::from_ids(&[0, 5]),
            ItemSet::from_ids(&[0]),
        ];
        sets.sort();
        assert_eq!(
            sets,
            vec![
                ItemSet::from_ids(&[0]),
                ItemSet::from_ids(&[3]),
                ItemSet::from_ids(&[0, 5]),
                ItemSet::from_ids(&[1, 2]),
            ]
        );
    }
}
