use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sylvan::config::{DEFAULT_COUNT, DEFAULT_HIGH, DEFAULT_LOW};
use sylvan::{min_merge_cost, AvlTree, DemoConfig, MergePlan};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "sylvan", about = "AVL tree queries and greedy minimum-cost merging")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build an AVL tree from random (or given) keys and report min and sums.
    Tree {
        /// Number of distinct random keys to draw.
        #[arg(long, default_value_t = DEFAULT_COUNT)]
        count: usize,
        /// Lower bound of the key range (inclusive).
        #[arg(long, default_value_t = DEFAULT_LOW, allow_negative_numbers = true)]
        low: i64,
        /// Upper bound of the key range (exclusive).
        #[arg(long, default_value_t = DEFAULT_HIGH, allow_negative_numbers = true)]
        high: i64,
        /// Seed for reproducible key draws.
        #[arg(long)]
        seed: Option<u64>,
        /// Explicit keys, comma separated; skips random sampling.
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        keys: Option<Vec<i64>>,
        /// Also print `(key, x, y)` layout rows for a renderer.
        #[arg(long)]
        positions: bool,
    },
    /// Plan the cheapest way to join weighted items (e.g. cable lengths) pairwise.
    Merge {
        /// Item weights.
        #[arg(default_values_t = [8u64, 4, 6, 12, 10])]
        weights: Vec<u64>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Tree {
            count,
            low,
            high,
            seed,
            keys,
            positions,
        } => {
            let config = DemoConfig {
                count,
                low,
                high,
                seed,
            };
            run_tree(config, keys, positions)?
        }
        Commands::Merge { weights } => run_merge(weights),
    }

    Ok(())
}

fn run_tree(config: DemoConfig, keys: Option<Vec<i64>>, show_positions: bool) -> Result<()> {
    let keys = match keys {
        Some(keys) => keys,
        None => config
            .draw_keys()
            .with_context(|| format!("failed to draw {} keys from [{}, {})", config.count, config.low, config.high))?,
    };
    println!("Generated: {:?}", keys);

    let tree = build_tree(&keys);
    info!(
        len = tree.len(),
        rotations = tree.rotations().total(),
        "tree built"
    );

    println!();
    println!("AVL tree:");
    print!("{}", tree);

    match tree.find_min() {
        Some(min) => println!("Minimum value: {}", min),
        None => println!("Minimum value: <none, tree is empty>"),
    }
    println!("Sum of values (recursive): {}", tree.sum_values());
    println!("Sum of values (iterative): {}", tree.sum_values_iterative());
    println!("Size: {}\tHeight: {}", tree.size(), tree.height());

    if show_positions {
        println!();
        println!("key\tx\ty");
        for pos in tree.positions() {
            println!("{}\t{}\t{}", pos.key, pos.x, pos.y);
        }
        if let Some(min) = tree.min_position() {
            println!("highlight\t{}\t{}", min.x, min.y);
        }
    }

    Ok(())
}

fn run_merge(weights: Vec<u64>) {
    println!("Weights: {:?}", weights);
    let plan = plan_merge(&weights);
    info!(merges = plan.len(), "merge planned");

    println!("Merge steps (a + b -> a + b):");
    for step in &plan.steps {
        println!("  {} + {} -> {}", step.a, step.b, step.combined);
    }
    println!("Minimum total cost: {}", plan.total_cost);
}

/// Keys are widened to `i128` so sums of any `i64` input fit.
fn build_tree(keys: &[i64]) -> AvlTree<i128> {
    keys.iter().map(|&key| i128::from(key)).collect()
}

/// Weights are widened to `u128` so merge costs of any `u64` input fit.
fn plan_merge(weights: &[u64]) -> MergePlan<u128> {
    min_merge_cost(weights.iter().map(|&weight| u128::from(weight)))
}
