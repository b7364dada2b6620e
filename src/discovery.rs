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

use crate::apriori::LevelTable;
use crate::itemset::ItemSet;

/// Selects the itemsets that seed rule generation: every itemset in the
/// deepest level, plus (when there are at least three levels) the itemsets
/// of the level below it that aren't contained in any deepest-level itemset.
/// Earlier levels are not considered. Itemsets with fewer than two items
/// can't be split into a rule, so they are never returned.
pub fn discovery_sets(levels: &[LevelTable]) -> Vec<ItemSet> {
    let top = match levels.last() {
        Some(level) => level,
        None => return vec![],
    };

    let mut seeds: Vec<ItemSet> = top.iter_itemsets().cloned().collect();

    if levels.len() >= 3 {
        let penultimate = &levels[levels.len() - 2];
        seeds.extend(
            penultimate
                .iter_itemsets()
                .filter(|itemset| !top.iter_itemsets().any(|t| itemset.is_subset_of(t)))
                .cloned(),
        );
    }

    seeds.retain(|itemset| itemset.len() >= 2);
    seeds
}

#[cfg(test)]
mod tests {
    use super::discovery_sets;
    use crate::apriori::LevelTable;
    use crate::itemset::{ItemSet, ItemsetCount};

    fn level(size: usize, ids: &[&[u32]]) -> LevelTable {
        LevelTable::new(
            size,
            ids.iter()
                .map(|s| ItemsetCount::new(ItemSet::from_ids(s), 1))
                .collect(),
        )
    }

    #[test]
    fn test_no_levels() {
        assert!(discovery_sets(&[]).is_empty());
    }

    #[test]
    fn test_only_single_items() {
        let levels = vec![level(1, &[&[0], &[1]])];
        assert!(discovery_sets(&levels).is_empty());
    }

    #[test]
    fn test_two_levels_uses_top_only() {
        let levels = vec![level(1, &[&[0], &[1], &[2]]), level(2, &[&[0, 1]])];
        assert_eq!(discovery_sets(&levels), vec![ItemSet::from_ids(&[0, 1])]);
    }

    #[test]
    fn test_three_levels_adds_unsubsumed_penultimate() {
        let levels = vec![
            level(1, &[&[0], &[1], &[2], &[3], &[4]]),
            level(2, &[&[0, 1], &[0, 2], &[1, 2], &[3, 4]]),
            level(3, &[&[0, 1, 2]]),
        ];
        assert_eq!(
            discovery_sets(&levels),
            vec![ItemSet::from_ids(&[0, 1, 2]), ItemSet::from_ids(&[3, 4])]
        );
    }

    #[test]
    fn test_earlier_levels_are_not_considered() {
        // {5} is not subsumed by anything but sits two levels below the top.
        let levels = vec![
            level(1, &[&[0], &[1], &[2], &[5]]),
            level(2, &[&[0, 1], &[0, 2], &[1, 2]]),
            level(3, &[&[0, 1, 2]]),
        ];
        assert_eq!(discovery_sets(&levels), vec![ItemSet::from_ids(&[0, 1, 2])]);
    }
}
