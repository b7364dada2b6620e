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
use crate::error::Result;
use crate::itemset::ItemSet;
use crate::rule::{CandidateRule, Rule};
use itertools::Itertools;

/// Enumerates every split of each seed into a non-empty antecedent and a
/// non-empty consequent; a seed of m items yields 2^m - 2 candidates.
/// Antecedents are enumerated smallest first.
pub fn candidate_rules(seeds: &[ItemSet]) -> Vec<CandidateRule> {
    let mut candidates: Vec<CandidateRule> = vec![];
    for itemset in seeds.iter().filter(|i| i.len() > 1) {
        for size in 1..itemset.len() {
            for antecedent in itemset.items().iter().cloned().combinations(size) {
                let antecedent = ItemSet::new(antecedent);
                let consequent = itemset.difference(&antecedent);
                candidates.push(CandidateRule::new(antecedent, consequent));
            }
        }
    }
    candidates
}

/// Scores each candidate and keeps those with confidence of at least
/// `min_confidence`, in candidate order. Fails if a candidate refers to an
/// itemset the levels don't hold.
pub fn filter_by_confidence(
    candidates: Vec<CandidateRule>,
    levels: &[LevelTable],
    min_confidence: f64,
    total: u64,
) -> Result<Vec<Rule>> {
    let mut rules: Vec<Rule> = vec![];
    for candidate in candidates {
        let rule = candidate.score(levels, total)?;
        if rule.confidence() >= min_confidence {
            rules.push(rule);
        }
    }
    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::{candidate_rules, filter_by_confidence};
    use crate::apriori::mine_frequent_itemsets;
    use crate::discovery::discovery_sets;
    use crate::itemizer::Itemizer;
    use crate::itemset::ItemSet;
    use crate::rule::CandidateRule;
    use crate::transaction::{Transaction, TransactionStore};
    use fnv::FnvHashSet;

    #[test]
    fn test_candidate_rules() {
        let rules = candidate_rules(&[ItemSet::from_ids(&[0, 1])]);
        assert_eq!(
            rules,
            vec![
                CandidateRule::new(ItemSet::from_ids(&[0]), ItemSet::from_ids(&[1])),
                CandidateRule::new(ItemSet::from_ids(&[1]), ItemSet::from_ids(&[0])),
            ]
        );
    }

    #[test]
    fn test_candidate_rule_count() {
        for m in 1..7u32 {
            let ids: Vec<u32> = (0..m).collect();
            let seed = ItemSet::from_ids(&ids);
            let rules = candidate_rules(&[seed.clone()]);
            let expected = if m < 2 { 0 } else { (1usize << m) - 2 };
            assert_eq!(rules.len(), expected);
            let distinct: FnvHashSet<&CandidateRule> = rules.iter().collect();
            assert_eq!(distinct.len(), rules.len());
            for rule in &rules {
                assert!(rule.antecedent.is_disjoint(&rule.consequent));
                assert_eq!(rule.union(), seed);
            }
        }
    }

    #[test]
    fn test_filter_by_confidence() {
        let store: TransactionStore = vec![
            Transaction::from_ids(3, &[0, 1]),
            Transaction::from_ids(2, &[0]),
            Transaction::from_ids(1, &[1]),
        ]
        .into();
        let total = store.total_weight();
        let levels = mine_frequent_itemsets(&store, 0.4, total);
        let candidates = candidate_rules(&discovery_sets(&levels));

        let rules = filter_by_confidence(candidates.clone(), &levels, 0.0, total).unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].confidence(), 0.6);
        assert_eq!(rules[1].confidence(), 0.75);

        let rules = filter_by_confidence(candidates, &levels, 0.7, total).unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].antecedent(), &ItemSet::from_ids(&[1]));
        assert_eq!(rules[0].consequent(), &ItemSet::from_ids(&[0]));
        assert_eq!(rules[0].support(), 0.5);
    }

    #[test]
    fn test_census_rules() {
        // HARM's census2.csv test dataset.
        let transactions = vec![
            vec!["a", "b", "c"],
            vec!["d", "b", "c"],
            vec!["a", "b", "e"],
            vec!["f", "g", "c"],
            vec!["d", "g", "e"],
            vec!["f", "b", "c"],
            vec!["f", "b", "c"],
            vec!["a", "b", "e"],
            vec!["a", "b", "c"],
            vec!["a", "b", "e"],
            vec!["a", "b", "e"],
        ];
        let mut itemizer = Itemizer::new();
        let store: TransactionStore = transactions
            .iter()
            .map(|line| Transaction::new(1, itemizer.to_id_vec(line)))
            .collect();
        let total = store.total_weight();

        let levels = mine_frequent_itemsets(&store, 0.3, total);
        // Only {a,b}, {a,e}, {b,c}, {b,e} reach 4/11; {a,b,e} follows.
        assert_eq!(levels.len(), 3);
        let seeds = discovery_sets(&levels);
        assert_eq!(
            seeds,
            vec![
                ItemSet::new(itemizer.to_id_vec(&["a", "b", "e"])),
                ItemSet::new(itemizer.to_id_vec(&["b", "c"])),
            ]
        );

        let rules = filter_by_confidence(candidate_rules(&seeds), &levels, 0.9, total).unwrap();
        let mut found: Vec<String> = rules.iter().map(|r| r.to_string(&itemizer)).collect();
        found.sort();
        // e => a b only reaches 0.8.
        assert_eq!(found, vec!["a e => b", "b e => a"]);
    }
}
