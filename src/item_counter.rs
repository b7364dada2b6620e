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

/// Dense weighted counter indexed by item id.
pub struct ItemCounter {
    counter: Vec<u64>,
    present: Vec<bool>,
}

impl ItemCounter {
    pub fn new() -> ItemCounter {
        ItemCounter {
            counter: vec![],
            present: vec![],
        }
    }
    pub fn add(&mut self, item: &Item, count: u64) {
        let index = item.as_index();
        if self.counter.len() <= index {
            self.counter.resize(index + 1, 0);
            self.present.resize(index + 1, false);
        }
        self.counter[index] += count;
        self.present[index] = true;
    }
    pub fn get(&self, item: &Item) -> u64 {
        self.counter.get(item.as_index()).cloned().unwrap_or(0)
    }
    // Items that appeared in at least one transaction, ascending by id.
    pub fn items(&self) -> Vec<(Item, u64)> {
        self.present
            .iter()
            .enumerate()
            .filter(|&(_, &seen)| seen)
            .map(|(i, _)| (Item::with_id(i as u32), self.counter[i]))
            .collect()
    }
}

impl Default for ItemCounter {
    fn default() -> Self {
        ItemCounter::new()
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_item_counter() {
        use super::ItemCounter;
        use crate::item::Item;

        let mut counter = ItemCounter::new();
        counter.add(&Item::with_id(3), 2);
        counter.add(&Item::with_id(0), 5);
        counter.add(&Item::with_id(3), 4);

        assert_eq!(counter.get(&Item::with_id(3)), 6);
        assert_eq!(counter.get(&Item::with_id(1)), 0);
        assert_eq!(counter.get(&Item::with_id(42)), 0);
        assert_eq!(
            counter.items(),
            vec![(Item::with_id(0), 5), (Item::with_id(3), 6)]
        );
    }
}
