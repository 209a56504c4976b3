use cartesian_tree::treap::{Node, Treap};
use clap::Parser;
use log::{info, warn, LevelFilter};
use rand::{Rng, SeedableRng, XorShiftRng};
use simplelog::{Config, SimpleLogger};
use std::error::Error;
use std::io::{self, BufRead};

/// Builds a treap from random keys and priorities, prints its shape, then removes a key read from
/// standard input and prints the shape again.
#[derive(Parser, Debug)]
#[command(name = "cartesian-tree", about, long_about = None)]
struct Cli {
    /// Number of random (key, priority) pairs to insert
    #[arg(short, long, default_value_t = 20)]
    count: usize,

    /// Largest key that can be generated
    #[arg(long, default_value_t = 30)]
    max_key: u32,

    /// Largest priority that can be generated
    #[arg(long, default_value_t = 30)]
    max_priority: u32,

    /// Seed for the random generator (default: drawn from the thread generator)
    #[arg(long)]
    seed: Option<u32>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn describe(node: Option<&Node<u32, u32>>) -> String {
    match node {
        Some(node) => format!("({}, {})", node.key(), node.priority()),
        None => String::from("-"),
    }
}

fn print_treap(t: &Treap<u32, u32>) {
    if t.is_empty() {
        println!("(empty)");
        return;
    }
    for node in t {
        println!(
            "{} left: {} right: {}",
            describe(Some(node)),
            describe(node.left()),
            describe(node.right()),
        );
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        LevelFilter::Trace
    } else {
        LevelFilter::Info
    };
    SimpleLogger::init(level, Config::default())?;

    let seed = cli.seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!("using seed {}", seed);
    let mut rng: XorShiftRng =
        SeedableRng::from_seed([seed, seed ^ 0x9E37_79B9, 0x243F_6A88, 0x85A3_08D3]);

    let mut t = Treap::new();
    for _ in 0..cli.count {
        let key = rng.gen_range(0, cli.max_key.saturating_add(1));
        let priority = rng.gen_range(0, cli.max_priority.saturating_add(1));
        t.insert(key, priority);
    }
    info!("built treap with {} nodes and height {}", t.len(), t.height());
    print_treap(&t);

    println!("key to remove:");
    let stdin = io::stdin();
    let mut line = String::new();
    stdin.lock().read_line(&mut line)?;
    let key: u32 = match line.trim().parse() {
        Ok(key) => key,
        Err(err) => {
            warn!("could not parse {:?} as a key: {}", line.trim(), err);
            return Ok(());
        },
    };

    match t.remove(&key) {
        Ok((key, priority)) => info!("removed ({}, {})", key, priority),
        Err(err) => warn!("could not remove {}: {}", key, err),
    }
    print_treap(&t);
    Ok(())
}
