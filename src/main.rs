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

mod command_line_args;

use apriori::association::{mine_association_rules, MiningOutcome};
use apriori::itemizer::Itemizer;
use apriori::report::{write_itemsets, write_rules};
use apriori::thresholds::Thresholds;
use apriori::transaction_reader::read_transactions;
use command_line_args::{parse_args_or_exit, Arguments};

use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::process;
use std::time::Instant;
use tracing::{info, Level};

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn mine_apriori(args: &Arguments) -> Result<(), Box<dyn Error>> {
    let thresholds = Thresholds::from_percentages(args.min_support, args.min_confidence)?;

    info!(path = %args.input_file_path, "reading transactions");
    let start = Instant::now();
    let timer = Instant::now();
    let mut itemizer = Itemizer::new();
    let store = read_transactions(&args.input_file_path, &mut itemizer)?;
    let total = store.total_weight();
    info!(
        rows = store.len(),
        total_weight = total,
        distinct_items = itemizer.len(),
        elapsed_ms = timer.elapsed().as_millis() as u64,
        "read transactions"
    );

    let timer = Instant::now();
    let outcome = mine_association_rules(&store, &thresholds)?;
    info!(
        levels = outcome.levels().len(),
        rules = outcome.rules().len(),
        elapsed_ms = timer.elapsed().as_millis() as u64,
        "mining finished"
    );

    if let Some(ref path) = args.output_itemsets_path {
        let mut output = BufWriter::new(File::create(path)?);
        write_itemsets(&mut output, outcome.levels(), &itemizer, total)?;
        output.flush()?;
    }

    {
        let mut output = BufWriter::new(File::create(&args.output_rules_path)?);
        write_rules(&mut output, outcome.rules(), &itemizer)?;
        output.flush()?;
    }

    match outcome {
        MiningOutcome::NoFrequentItemsets => println!(
            "No rules: no itemset meets the minimum support of {}%.",
            args.min_support
        ),
        MiningOutcome::NoDiscoverySets { .. } => {
            println!("No rules: no frequent itemset has more than one item.")
        }
        MiningOutcome::NoRulesMeetConfidence { .. } => println!(
            "No rules: no rule meets the minimum confidence of {}%.",
            args.min_confidence
        ),
        MiningOutcome::Rules { ref rules, .. } => println!(
            "Wrote {} rules to {}",
            rules.len(),
            args.output_rules_path
        ),
    }

    info!(
        elapsed_ms = start.elapsed().as_millis() as u64,
        "total runtime"
    );

    Ok(())
}

fn main() {
    let arguments = parse_args_or_exit();
    init_logging(arguments.verbose);

    if let Err(err) = mine_apriori(&arguments) {
        println!("Error: {}", err);
        process::exit(1);
    }
}
