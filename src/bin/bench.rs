//! Search benchmark for the Cubic engine
//!
//! `compare` runs a fixed set of search configurations over random
//! mid-game positions; `depth` shows how the tree grows on the empty board.

use std::time::Duration;

use clap::{Parser, Subcommand};
use log::info;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use cubic::rules::is_terminal;
use cubic::{best_move, Board, ConfigError, HeuristicKind, Mark, SearchConfig, SearchStats};

/// Benchmark Cubic search configurations.
#[derive(Parser)]
#[command(name = "cubic-bench", about = "Benchmark Cubic search configurations")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compare configurations on random positions
    Compare {
        /// Number of random positions per configuration
        #[arg(long, default_value_t = 5)]
        positions: usize,

        /// Seed for position generation
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Heuristic used where a configuration does not fix one
        #[arg(long, default_value = "advanced")]
        heuristic: HeuristicKind,
    },
    /// Nodes explored on the empty board at increasing depth
    Depth {
        /// Deepest search to run
        #[arg(long, default_value_t = 3)]
        max_depth: u32,
    },
}

/// Averages over all positions for one configuration
struct Summary {
    name: &'static str,
    nodes: f64,
    pruned: f64,
    ratio: f64,
    time: Duration,
}

impl Summary {
    fn from_stats(name: &'static str, stats: &[SearchStats]) -> Self {
        let n = stats.len().max(1) as f64;
        let nodes: u64 = stats.iter().map(|s| s.nodes_explored).sum();
        let pruned: u64 = stats.iter().map(|s| s.nodes_pruned).sum();
        let ratio: f64 = stats.iter().map(SearchStats::pruning_ratio).sum();
        let time: Duration = stats.iter().map(|s| s.elapsed).sum();
        Self {
            name,
            nodes: nodes as f64 / n,
            pruned: pruned as f64 / n,
            ratio: ratio / n,
            time: time.div_f64(n),
        }
    }
}

/// The reference configurations
fn configurations(heuristic: HeuristicKind) -> Result<Vec<(&'static str, SearchConfig)>, ConfigError> {
    let d3 = SearchConfig::new(3)?;
    let tuned = d3.with_heuristic(heuristic);
    Ok(vec![
        ("No heuristic, depth 2", SearchConfig::new(2)?.with_heuristic(HeuristicKind::None)),
        ("Simple, minimax", d3.with_heuristic(HeuristicKind::Simple).with_alpha_beta(false)),
        ("Simple, alpha-beta", d3.with_heuristic(HeuristicKind::Simple)),
        ("Advanced, minimax", d3.with_heuristic(HeuristicKind::Advanced).with_alpha_beta(false)),
        ("Advanced, alpha-beta", d3.with_heuristic(HeuristicKind::Advanced)),
        ("Alpha-beta + symmetry", tuned.with_symmetry_reduction(true)),
        ("Alpha-beta + heuristic red.", tuned.with_heuristic_reduction(true)),
        ("Alpha-beta + both reductions", tuned.with_symmetry_reduction(true).with_heuristic_reduction(true)),
    ])
}

/// A non-terminal position after 5 to 15 random moves, X moving first
fn random_position(rng: &mut StdRng) -> Board {
    loop {
        let mut board = Board::new();
        let mut mark = Mark::X;
        let count = rng.gen_range(5..=15);
        for _ in 0..count {
            let moves = board.legal_moves();
            let Some(&pos) = moves.choose(rng) else { break };
            board.apply(pos, mark);
            mark = mark.opponent();
        }
        if !is_terminal(&board) {
            return board;
        }
    }
}

fn compare(positions: usize, seed: u64, heuristic: HeuristicKind) -> Result<(), ConfigError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let boards: Vec<Board> = (0..positions).map(|_| random_position(&mut rng)).collect();
    info!("Generated {} positions with seed {}", boards.len(), seed);

    let mut summaries = Vec::new();
    for (name, config) in configurations(heuristic)? {
        config.validate()?;
        info!("Running '{}' ({})", name, config.algorithm_name());
        let stats: Vec<SearchStats> = boards
            .iter()
            .map(|board| best_move(board, Mark::O, &config).stats)
            .collect();
        summaries.push(Summary::from_stats(name, &stats));
    }

    println!(
        "{:<30} {:>12} {:>12} {:>8} {:>12}",
        "Configuration", "Avg nodes", "Avg pruned", "Pruned", "Avg time"
    );
    println!("{}", "-".repeat(78));
    for s in &summaries {
        println!(
            "{:<30} {:>12.1} {:>12.1} {:>7.1}% {:>10.2}ms",
            s.name,
            s.nodes,
            s.pruned,
            s.ratio * 100.0,
            s.time.as_secs_f64() * 1000.0
        );
    }

    let fewest = summaries.iter().min_by(|a, b| a.nodes.total_cmp(&b.nodes));
    let fastest = summaries.iter().min_by_key(|s| s.time);
    if let (Some(fewest), Some(fastest)) = (fewest, fastest) {
        println!();
        println!("Fewest nodes: {} ({:.1})", fewest.name, fewest.nodes);
        println!("Fastest:      {} ({:.2}ms)", fastest.name, fastest.time.as_secs_f64() * 1000.0);
    }
    Ok(())
}

fn depth(max_depth: u32) -> Result<(), ConfigError> {
    let board = Board::new();
    println!("{:>6} {:>14} {:>12} {:>12}", "Depth", "Nodes", "Pruned", "Time");
    for d in 1..=max_depth {
        let config = SearchConfig::new(d)?;
        let stats = best_move(&board, Mark::X, &config).stats;
        println!(
            "{:>6} {:>14} {:>12} {:>10.2}ms",
            d,
            stats.nodes_explored,
            stats.nodes_pruned,
            stats.elapsed_ms()
        );
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let outcome = match cli.command {
        Command::Compare { positions, seed, heuristic } => compare(positions, seed, heuristic),
        Command::Depth { max_depth } => depth(max_depth),
    };

    if let Err(err) = outcome {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(nodes: u64, pruned: u64) -> SearchStats {
        let mut stats = SearchStats::empty(&SearchConfig::default());
        stats.nodes_explored = nodes;
        stats.nodes_pruned = pruned;
        stats.elapsed = Duration::from_millis(4);
        stats
    }

    #[test]
    fn test_summary_averages_pruning_ratio() {
        // 25% and 50% pruned
        let summary = Summary::from_stats("mixed", &[stats(30, 10), stats(10, 10)]);
        assert_eq!(summary.nodes, 20.0);
        assert_eq!(summary.pruned, 10.0);
        assert!((summary.ratio - 0.375).abs() < 1e-12);
        assert_eq!(summary.time, Duration::from_millis(4));
    }

    #[test]
    fn test_summary_of_nothing() {
        let summary = Summary::from_stats("none", &[]);
        assert_eq!(summary.nodes, 0.0);
        assert_eq!(summary.ratio, 0.0);
    }
}
