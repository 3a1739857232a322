//! Heap sort self-check
//!
//! Sorts random vectors of several sizes and key ranges with the binomial
//! heap and exits with status 1 (printing input and output) on the first
//! unsorted result.
//!
//! ## Running
//!
//! ```bash
//! cargo run --release --example sort_check
//! ```

use rand::Rng;
use rust_binomial_heap::sort::{heap_sort, is_sorted};

/// (length, max |key|) for each run
const CASES: [(usize, i64); 6] = [
    (10, 10),
    (100, 100),
    (100_000, 1),
    (100_000, 100),
    (100_000, 1_000),
    (100_000, 1_000_000_000),
];

/// `len` uniform random integers in `[-max, max]`
fn random_vec(rng: &mut impl Rng, len: usize, max: i64) -> Vec<i64> {
    (0..len).map(|_| rng.gen_range(-max..=max)).collect()
}

fn print_values(values: &[i64]) {
    let line: Vec<String> = values.iter().map(ToString::to_string).collect();
    println!("{}", line.join(" "));
}

fn main() {
    let mut rng = rand::thread_rng();

    for (len, max) in CASES {
        let values = random_vec(&mut rng, len, max);
        let sorted = heap_sort(values.iter().copied());

        if !is_sorted(&sorted) {
            println!("Before:");
            print_values(&values);
            println!("After:");
            print_values(&sorted);
            std::process::exit(1);
        }
        eprintln!("  sorted {} values in [-{}, {}]", len, max, max);
    }

    eprintln!("all sort checks passed");
}
