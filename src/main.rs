//! Demo driver: builds a tree over a small sequence and prints a few range queries.

mod options;

use std::process::ExitCode;

use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};

use options::{Input, Options};
use range_query_tree::{Comparator, RangeQueryTree, Reversed, TreeError};

const REFERENCE_DATA: [f64; 10] = [7.0, 2.0, 4.0, 3.0, 9.0, 8.0, 0.0, 6.0, 5.0, 1.0];
const REFERENCE_QUERIES: [(usize, usize); 5] = [(1, 2), (2, 4), (3, 7), (8, 8), (7, 9)];

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = match Options::parse_from(std::env::args_os()) {
        Ok(options) => options,
        Err(err) => err.exit(),
    };
    match run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(options: &Options) -> Result<(), TreeError> {
    let (data, queries) = match options.input {
        Input::Reference => (REFERENCE_DATA.to_vec(), REFERENCE_QUERIES.to_vec()),
        Input::Random { len, seed, queries } => random_input(len, seed, queries),
    };

    let ascending = |left: &f64, right: &f64| left.total_cmp(right);
    if options.max {
        report(&data, &queries, Reversed(ascending))
    } else {
        report(&data, &queries, ascending)
    }
}

/// `len` random whole numbers and `count` random valid queries over them.
fn random_input(len: usize, seed: u64, count: usize) -> (Vec<f64>, Vec<(usize, usize)>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let data = (0..len).map(|_| f64::from(rng.gen_range(0..100u32))).collect();
    if len == 0 {
        return (data, vec![]);
    }
    let queries = (0..count)
        .map(|_| {
            let from = rng.gen_range(0..len);
            (from, rng.gen_range(from..len))
        })
        .collect();
    (data, queries)
}

fn report<C: Comparator<f64>>(
    data: &[f64],
    queries: &[(usize, usize)],
    comparator: C,
) -> Result<(), TreeError> {
    let tree = RangeQueryTree::from_slice(data, comparator)?;
    info!(
        "built a tree over {} elements ({} leaves)",
        tree.len(),
        tree.leaf_count()
    );

    println!("INPUT:");
    for (index, value) in data.iter().enumerate() {
        println!("[{index}]\t{value:.6}");
    }

    println!("OUTPUT:");
    for &(from, to) in queries {
        println!("[{from}:{to}]\t{:.6}", tree.get_value(from, to)?);
    }
    Ok(())
}
