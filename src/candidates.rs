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

use crate::itemset::ItemSet;
use fnv::FnvHashSet;

/// Generates the distinct itemsets of size `k + 1` formed by the union of
/// each unordered pair of the size `k` `itemsets`. Candidates are returned
/// in the order they are first generated.
pub fn generate_candidates(itemsets: &[ItemSet], k: usize) -> Vec<ItemSet> {
    let mut candidates: Vec<ItemSet> = vec![];
    if itemsets.len() < 2 {
        return candidates;
    }
    let mut seen: FnvHashSet<ItemSet> = FnvHashSet::default();
    for i in 0..itemsets.len() - 1 {
        for j in (i + 1)..itemsets.len() {
            // Only pairs that differ by exactly one item grow to k + 1.
            if itemsets[i].union_len(&itemsets[j]) != k + 1 {
                continue;
            }
            let candidate = itemsets[i].union(&itemsets[j]);
            if seen.insert(candidate.clone()) {
                candidates.push(candidate);
            }
        }
    }
    candidates
}
