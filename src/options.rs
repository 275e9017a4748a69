//! Parsing Options.
//! Without options the demo runs over the reference sequence. `--random N`
//! switches to `N` random values, with `--seed` and `--queries` controlling them.

use std::ffi::OsString;

use clap::builder::RangedU64ValueParser;
use clap::{value_parser, Arg, ArgAction, Command};

/// Where the demo gets its elements and queries from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Reference,
    Random {
        len: usize,
        seed: u64,
        queries: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub input: Input,
    /// Build a max-tree instead of a min-tree.
    pub max: bool,
}

fn make_options_parser() -> Command {
    Command::new("rqt-demo")
        .about("Builds a range query tree and answers a few range queries")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("random")
                .long("random")
                .value_name("N")
                .help("Use N random values instead of the reference sequence")
                .value_parser(RangedU64ValueParser::<usize>::new().range(1..)),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("SEED")
                .help("Seed for the random values and queries")
                .default_value("0")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("queries")
                .long("queries")
                .value_name("Q")
                .help("Number of random queries to run")
                .default_value("5")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("max")
                .long("max")
                .help("Query for the biggest value instead of the smallest")
                .action(ArgAction::SetTrue),
        )
}

impl Options {
    pub fn parse_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = make_options_parser().try_get_matches_from(args)?;
        let input = match matches.get_one::<usize>("random") {
            None => Input::Reference,
            Some(&len) => Input::Random {
                len,
                seed: *matches.get_one::<u64>("seed").expect("seed has a default"),
                queries: *matches
                    .get_one::<usize>("queries")
                    .expect("queries has a default"),
            },
        };
        Ok(Options {
            input,
            max: matches.get_flag("max"),
        })
    }
}
