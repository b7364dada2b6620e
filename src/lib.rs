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

//! Level-wise Apriori mining of frequent itemsets and association rules
//! over weighted transactions.

pub mod apriori;
pub mod association;
pub mod candidates;
pub mod discovery;
pub mod error;
pub mod generate_rules;
pub mod item;
pub mod item_counter;
pub mod itemizer;
pub mod itemset;
pub mod report;
pub mod rule;
pub mod thresholds;
pub mod transaction;
pub mod transaction_reader;
pub mod vec_sets;

pub use crate::apriori::{mine_frequent_itemsets, LevelTable};
pub use crate::association::{mine_association_rules, MiningOutcome};
pub use crate::error::{MiningError, ReadError};
pub use crate::item::Item;
pub use crate::itemizer::Itemizer;
pub use crate::itemset::{ItemSet, ItemsetCount};
pub use crate::rule::Rule;
pub use crate::thresholds::Thresholds;
pub use crate::transaction::{Transaction, TransactionStore};
