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
use fnv::FnvHashMap;

/// Two way mapping between category labels and `Item` ids. Ids are handed
/// out in first-seen order starting at 0 and never change.
#[derive(Default)]
pub struct Itemizer {
    item_str_to_id: FnvHashMap<String, Item>,
    item_id_to_str: Vec<String>,
}

impl Itemizer {
    pub fn new() -> Itemizer {
        Itemizer {
            item_str_to_id: FnvHashMap::default(),
            item_id_to_str: vec![],
        }
    }
    pub fn id_of(&mut self, item: &str) -> Item {
        if let Some(id) = self.item_str_to_id.get(item) {
            return *id;
        }
        let id = Item::with_id(self.item_id_to_str.len() as u32);
        self.item_str_to_id.insert(String::from(item), id);
        self.item_id_to_str.push(String::from(item));
        id
    }
    pub fn str_of(&self, id: Item) -> &str {
        self.item_id_to_str
            .get(id.as_index())
            .map(|s| s.as_str())
            .unwrap_or("?")
    }
    pub fn to_id_vec(&mut self, items: &[&str]) -> Vec<Item> {
        items.iter().map(|s| self.id_of(s)).collect()
    }
    pub fn len(&self) -> usize {
        self.item_id_to_str.len()
    }
    pub fn is_empty(&self) -> bool {
        self.item_id_to_str.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::Itemizer;
    use crate::item::Item;

    #[test]
    fn test_first_seen_order() {
        let mut itemizer = Itemizer::new();
        assert_eq!(itemizer.id_of("red"), Item::with_id(0));
        assert_eq!(itemizer.id_of("green"), Item::with_id(1));
        assert_eq!(itemizer.id_of("red"), Item::with_id(0));
        assert_eq!(itemizer.id_of("blue"), Item::with_id(2));
        assert_eq!(itemizer.len(), 3);
        assert_eq!(itemizer.str_of(Item::with_id(1)), "green");
    }

    #[test]
    fn test_unknown_id() {
        let itemizer = Itemizer::new();
        assert!(itemizer.is_empty());
        assert_eq!(itemizer.str_of(Item::with_id(7)), "?");
    }
}
