//! random Erdos-Renyi G(n,p) instance generator, written in the
//! matrix-record text format consumed by `matrix_io`.
//!
//! grounded on `original_source/src/BenchmarkUtils.h`'s
//! `generateDenseMatrices`, which samples each edge independently via a
//! Bernoulli draw at a fixed density.

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Parser, Debug)]
#[command(name = "gen_instance", about = "random graph instance generator")]
struct Args {
    /// number of vertices.
    n: usize,

    /// edge density in [0,1].
    #[arg(long, default_value_t = 0.5)]
    density: f64,

    /// RNG seed, for reproducible instances.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() {
    let args = Args::parse();
    assert!(
        (0.0..=1.0).contains(&args.density),
        "density must be in [0,1], got {}",
        args.density
    );

    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut matrix = vec![vec![0u8; args.n]; args.n];
    for i in 0..args.n {
        for j in (i + 1)..args.n {
            if rng.gen_bool(args.density) {
                matrix[i][j] = 1;
                matrix[j][i] = 1;
            }
        }
    }

    println!("n = {}", args.n);
    println!("d = {}", args.density);
    println!("matrix:");
    for row in &matrix {
        let line: Vec<String> = row.iter().map(ToString::to_string).collect();
        println!("{}", line.join(" "));
    }
}
