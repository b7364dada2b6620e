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

use crate::apriori::{mine_frequent_itemsets, LevelTable};
use crate::discovery::discovery_sets;
use crate::error::{MiningError, Result};
use crate::generate_rules::{candidate_rules, filter_by_confidence};
use crate::rule::Rule;
use crate::thresholds::Thresholds;
use crate::transaction::TransactionStore;
use tracing::debug;

/// Result of a mining run. Each way of ending up with no rules is its own
/// variant so that callers can tell the user which threshold was too strict.
#[derive(Clone, Debug)]
pub enum MiningOutcome {
    /// No itemset met the minimum support.
    NoFrequentItemsets,
    /// Frequent itemsets exist, but none has two or more items to split.
    NoDiscoverySets { levels: Vec<LevelTable> },
    /// Rules were generated, but none met the minimum confidence.
    NoRulesMeetConfidence { levels: Vec<LevelTable> },
    /// Accepted rules, highest confidence first.
    Rules {
        levels: Vec<LevelTable>,
        rules: Vec<Rule>,
    },
}

impl MiningOutcome {
    pub fn levels(&self) -> &[LevelTable] {
        match self {
            MiningOutcome::NoFrequentItemsets => &[],
            MiningOutcome::NoDiscoverySets { levels }
            | MiningOutcome::NoRulesMeetConfidence { levels }
            | MiningOutcome::Rules { levels, .. } => levels.as_slice(),
        }
    }

    pub fn rules(&self) -> &[Rule] {
        match self {
            MiningOutcome::Rules { rules, .. } => rules.as_slice(),
            _ => &[],
        }
    }
}

pub fn rank_rules(rules: &mut [Rule]) {
    rules.sort_by(|a, b| a.rank_cmp(b));
}

/// Mines `store` for association rules. The total weight used as the
/// support denominator is taken from the store before mining starts.
pub fn mine_association_rules(
    store: &TransactionStore,
    thresholds: &Thresholds,
) -> Result<MiningOutcome> {
    let total = store.total_weight();
    if total == 0 {
        return Err(MiningError::EmptyDataset);
    }
    // Re-validate, the fields may have come from anywhere.
    let thresholds = Thresholds::new(thresholds.min_support(), thresholds.min_confidence())?;

    let levels = mine_frequent_itemsets(store, thresholds.min_support(), total);
    if levels.is_empty() {
        return Ok(MiningOutcome::NoFrequentItemsets);
    }

    let seeds = discovery_sets(&levels);
    debug!(levels = levels.len(), seeds = seeds.len(), "selected discovery sets");
    if seeds.is_empty() {
        return Ok(MiningOutcome::NoDiscoverySets { levels });
    }

    let candidates = candidate_rules(&seeds);
    let num_candidates = candidates.len();
    let mut rules = filter_by_confidence(candidates, &levels, thresholds.min_confidence(), total)?;
    debug!(
        candidates = num_candidates,
        accepted = rules.len(),
        "filtered rules by confidence"
    );
    if rules.is_empty() {
        return Ok(MiningOutcome::NoRulesMeetConfidence { levels });
    }

    rank_rules(&mut rules);
    Ok(MiningOutcome::Rules { levels, rules })
}
