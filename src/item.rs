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

use crate::itemizer::Itemizer;
use std::fmt;

/// Identifier of one distinct category. Ids are dense, starting at 0.
#[derive(Copy, Clone, Hash, PartialOrd, PartialEq, Eq, Ord, Debug)]
pub struct Item {
    id: u32,
}

impl Item {
    pub fn with_id(id: u32) -> Item {
        Item { id }
    }
    pub fn id(&self) -> u32 {
        self.id
    }
    pub fn as_index(&self) -> usize {
        self.id as usize
    }
    pub fn item_vec_to_string(items: &[Item], itemizer: &Itemizer) -> String {
        let mut a: Vec<&str> = items.iter().map(|&id| itemizer.str_of(id)).collect();
        ensure_sorted(&mut a);
        a.join(" ")
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

// If all items in the itemset convert to an integer, order by that integer,
// otherwise order lexicographically.
fn ensure_sorted(a: &mut Vec<&str>) {
    let all_items_convert_to_ints = a.iter().all(|x| x.parse::<u64>().is_ok());
    if all_items_convert_to_ints {
        a.sort_by_key(|x| x.parse::<u64>().unwrap_or(0));
    } else {
        a.sort();
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_item_vec_to_string() {
        use super::Item;
        use crate::itemizer::Itemizer;

        let mut itemizer = Itemizer::new();
        let words = itemizer.to_id_vec(&["milk", "bread", "eggs"]);
        assert_eq!(Item::item_vec_to_string(&words, &itemizer), "bread eggs milk");

        let numbers = itemizer.to_id_vec(&["10", "9", "100"]);
        assert_eq!(Item::item_vec_to_string(&numbers, &itemizer), "9 10 100");
    }
}
