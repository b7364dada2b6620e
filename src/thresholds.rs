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

use crate::error::{MiningError, Result};

/// Minimum support and confidence, both as fractions in [0,1].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Thresholds {
    min_support: f64,
    min_confidence: f64,
}

fn check_fraction(name: &'static str, value: f64) -> Result<f64> {
    // NaN fails both comparisons, so it's rejected too.
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(MiningError::InvalidThreshold { name, value })
    }
}

impl Thresholds {
    pub fn new(min_support: f64, min_confidence: f64) -> Result<Thresholds> {
        Ok(Thresholds {
            min_support: check_fraction("minimum support", min_support)?,
            min_confidence: check_fraction("minimum confidence", min_confidence)?,
        })
    }

    /// Builds thresholds from percentages in [0,100].
    pub fn from_percentages(support: f64, confidence: f64) -> Result<Thresholds> {
        Thresholds::new(support / 100.0, confidence / 100.0)
    }

    pub fn min_support(&self) -> f64 {
        self.min_support
    }

    pub fn min_confidence(&self) -> f64 {
        self.min_confidence
    }
}
