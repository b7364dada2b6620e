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
use thiserror::Error;

pub type Result<T> = std::result::Result<T, MiningError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MiningError {
    #[error("{name} must be in range [0,1], got {value}")]
    InvalidThreshold { name: &'static str, value: f64 },

    #[error("total transaction weight is zero")]
    EmptyDataset,

    /// A rule refers to an itemset that the mined levels don't hold with a
    /// non-zero frequency. Never expected; indicates a bug.
    #[error("itemset {itemset} is missing from the mined levels")]
    InconsistentLevels { itemset: ItemSet },
}

#[derive(Error, Debug)]
pub enum ReadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input has no header line")]
    MissingHeader,

    #[error("line {line}: invalid weight {value:?}, expected an integer >= 1")]
    InvalidWeight { line: usize, value: String },
}
