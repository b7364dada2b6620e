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

use std::env;
use std::io;
use std::process;

use argparse::{ArgumentParser, Store, StoreOption, StoreTrue};

pub struct Arguments {
    pub input_file_path: String,
    pub output_rules_path: String,
    pub output_itemsets_path: Option<String>,
    pub min_support: f64,
    pub min_confidence: f64,
    pub verbose: bool,
}

fn in_percent_range(value: f64) -> bool {
    (0.0..=100.0).contains(&value)
}

pub fn parse_args_or_exit() -> Arguments {
    let mut args: Arguments = Arguments {
        input_file_path: String::new(),
        output_rules_path: String::new(),
        output_itemsets_path: None,
        min_support: 0.0,
        min_confidence: 0.0,
        verbose: false,
    };

    {
        let mut parser = ArgumentParser::new();
        parser.set_description("Apriori association rule miner for weighted transactions.");

        parser
            .refer(&mut args.input_file_path)
            .add_option(
                &["--input"],
                Store,
                "Input dataset in CSV format. The first line is a header; \
                 each row is a weight followed by the row's items.",
            )
            .metavar("file_path")
            .required();

        parser
            .refer(&mut args.output_rules_path)
            .add_option(
                &["--output"],
                Store,
                "File path in which to store output rules. \
                 Format: antecedent => consequent, support, confidence.",
            )
            .metavar("file_path")
            .required();

        parser
            .refer(&mut args.output_itemsets_path)
            .add_option(
                &["--itemsets"],
                StoreOption,
                "Optional file path in which to store the frequent itemsets.",
            )
            .metavar("file_path");

        parser
            .refer(&mut args.min_support)
            .add_option(
                &["--min-support"],
                Store,
                "Minimum itemset support threshold, in percent [0,100].",
            )
            .metavar("percent")
            .required();

        parser
            .refer(&mut args.min_confidence)
            .add_option(
                &["--min-confidence"],
                Store,
                "Minimum rule confidence threshold, in percent [0,100].",
            )
            .metavar("percent")
            .required();

        parser
            .refer(&mut args.verbose)
            .add_option(&["-v", "--verbose"], StoreTrue, "Log each mining level.");

        if env::args().count() == 1 {
            // Nothing useful to do if stderr is gone.
            let _ = parser.print_help("Usage:", &mut io::stderr());
            process::exit(1);
        }

        if let Err(err) = parser.parse_args() {
            process::exit(err);
        }
    }

    if !in_percent_range(args.min_support) {
        eprintln!("Minimum itemset support must be in range [0,100]");
        process::exit(1);
    }

    if !in_percent_range(args.min_confidence) {
        eprintln!("Minimum rule confidence threshold must be in range [0,100]");
        process::exit(1);
    }

    args
}
