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

use crate::apriori::{frequency_in_levels, LevelTable};
use crate::error::{MiningError, Result};
use crate::itemizer::Itemizer;
use crate::itemset::ItemSet;
use ordered_float::OrderedFloat;
use std::cmp;
use std::hash::{Hash, Hasher};

/// An unscored split of an itemset into antecedent and consequent.
#[derive(Clone, Hash, PartialEq, Eq, Debug)]
pub struct CandidateRule {
    pub antecedent: ItemSet,
    pub consequent: ItemSet,
}

impl CandidateRule {
    pub fn new(antecedent: ItemSet, consequent: ItemSet) -> CandidateRule {
        debug_assert!(antecedent.is_disjoint(&consequent));
        CandidateRule {
            antecedent,
            consequent,
        }
    }

    pub fn union(&self) -> ItemSet {
        self.antecedent.union(&self.consequent)
    }

    // Scores the rule against the mined frequencies. Both the antecedent
    // and the union must be present; anything else means the levels and
    // the rule seeds disagree.
    pub fn score(self, levels: &[LevelTable], total: u64) -> Result<Rule> {
        let union = self.union();
        let union_frequency = match frequency_in_levels(levels, &union) {
            Some(f) => f,
            None => return Err(MiningError::InconsistentLevels { itemset: union }),
        };
        let antecedent_frequency = match frequency_in_levels(levels, &self.antecedent) {
            Some(f) if f > 0 => f,
            _ => {
                return Err(MiningError::InconsistentLevels {
                    itemset: self.antecedent,
                })
            }
        };
        Ok(Rule {
            antecedent: self.antecedent,
            consequent: self.consequent,
            support: union_frequency as f64 / total as f64,
            confidence: union_frequency as f64 / antecedent_frequency as f64,
        })
    }
}

#[derive(Clone, Debug)]
pub struct Rule {
    antecedent: ItemSet,
    consequent: ItemSet,
    support: f64,
    confidence: f64,
}

impl PartialEq for Rule {
    fn eq(&self, other: &Rule) -> bool {
        self.antecedent == other.antecedent && self.consequent == other.consequent
    }
}

// Can't derive Eq as f64 doesn't satisfy Eq.
impl Eq for Rule {}

impl Hash for Rule {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.antecedent.hash(state);
        self.consequent.hash(state);
    }
}

impl Rule {
    pub fn antecedent(&self) -> &ItemSet {
        &self.antecedent
    }

    pub fn consequent(&self) -> &ItemSet {
        &self.consequent
    }

    pub fn support(&self) -> f64 {
        self.support
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn to_string(&self, itemizer: &Itemizer) -> String {
        [
            self.antecedent.labels(itemizer),
            " => ".to_owned(),
            self.consequent.labels(itemizer),
        ]
        .join("")
    }

    // Highest confidence first, then highest support, then by items so
    // that the order is stable.
    pub fn rank_cmp(&self, other: &Rule) -> cmp::Ordering {
        OrderedFloat(other.confidence)
            .cmp(&OrderedFloat(self.confidence))
            .then_with(|| OrderedFloat(other.support).cmp(&OrderedFloat(self.support)))
            .then_with(|| self.antecedent.cmp(&other.antecedent))
            .then_with(|| self.consequent.cmp(&other.consequent))
    }
}
