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

use crate::error::ReadError;
use crate::item::Item;
use crate::itemizer::Itemizer;
use crate::transaction::{Transaction, TransactionStore};
use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;
use std::path::Path;

/// Reads weighted transactions from CSV. The first line is a header and is
/// skipped. Each following line is `weight,label,label,...`; empty labels
/// are ignored and blank lines are skipped.
pub struct TransactionReader<'a, R: BufRead> {
    reader: R,
    itemizer: &'a mut Itemizer,
    line_number: usize,
}

impl<'a, R: BufRead> TransactionReader<'a, R> {
    pub fn new(
        mut reader: R,
        itemizer: &'a mut Itemizer,
    ) -> Result<TransactionReader<'a, R>, ReadError> {
        let mut header = String::new();
        if reader.read_line(&mut header)? == 0 {
            return Err(ReadError::MissingHeader);
        }
        Ok(TransactionReader {
            reader,
            itemizer,
            line_number: 1,
        })
    }

    fn parse_line(&mut self, line: &str) -> Result<Transaction, ReadError> {
        let mut fields = line.split(',').map(|s| s.trim());
        let weight_field = fields.next().unwrap_or("");
        let weight = match weight_field.parse::<u64>() {
            Ok(w) if w >= 1 => w,
            _ => {
                return Err(ReadError::InvalidWeight {
                    line: self.line_number,
                    value: weight_field.to_owned(),
                })
            }
        };
        let itemizer = &mut *self.itemizer;
        let items: Vec<Item> = fields
            .filter(|s| !s.is_empty())
            .map(|s| itemizer.id_of(s))
            .collect();
        // Duplicate labels in a row collapse into one item.
        Ok(Transaction::new(weight, items))
    }
}

impl<'a, R: BufRead> Iterator for TransactionReader<'a, R> {
    type Item = Result<Transaction, ReadError>;
    fn next(&mut self) -> Option<Result<Transaction, ReadError>> {
        let mut line = String::new();
        loop {
            line.clear();
            match self.reader.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => return Some(Err(ReadError::from(e))),
            }
            self.line_number += 1;
            if line.trim().is_empty() {
                continue;
            }
            return Some(self.parse_line(&line));
        }
    }
}

pub fn read_transactions<P: AsRef<Path>>(
    path: P,
    itemizer: &mut Itemizer,
) -> Result<TransactionStore, ReadError> {
    let file = File::open(path)?;
    TransactionReader::new(BufReader::new(file), itemizer)?.collect()
}
