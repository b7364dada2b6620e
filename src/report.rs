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
use crate::itemizer::Itemizer;
use crate::rule::Rule;
use std::io::{self, Write};

pub fn write_rules<W: Write>(
    output: &mut W,
    rules: &[Rule],
    itemizer: &Itemizer,
) -> io::Result<()> {
    writeln!(output, "Antecedent->Consequent,Support,Confidence")?;
    for rule in rules {
        writeln!(
            output,
            "{},{:.6},{:.6}",
            rule.to_string(itemizer),
            rule.support(),
            rule.confidence()
        )?;
    }
    Ok(())
}

pub fn write_itemsets<W: Write>(
    output: &mut W,
    levels: &[LevelTable],
    itemizer: &Itemizer,
    total: u64,
) -> io::Result<()> {
    writeln!(output, "Size,Itemset,Frequency,Support")?;
    for level in levels {
        for entry in level.entries() {
            writeln!(
                output,
                "{},{},{},{:.6}",
                level.itemset_size(),
                entry.itemset.labels(itemizer),
                entry.frequency,
                entry.support(total)
            )?;
        }
    }
    Ok(())
}
