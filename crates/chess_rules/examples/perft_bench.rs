//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p chess_rules -- [depth] [moves...]
//!
//! Examples:
//!   # Default: depth 4 over the built-in openings
//!   cargo flamegraph --example perft_bench -p chess_rules
//!
//!   # Custom depth
//!   cargo flamegraph --example perft_bench -p chess_rules -- 5
//!
//!   # Custom depth after playing some moves from the initial position
//!   cargo flamegraph --example perft_bench -p chess_rules -- 4 e2e4 c7c5 g1f3

use chess_rules::{Position, perft};
use std::env;
use std::time::Instant;

/// Openings reached from the initial position, for broader coverage.
const TEST_LINES: &[(&str, &[&str])] = &[
    ("Starting position", &[]),
    ("Open game", &["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "f8c5"]),
    ("Sicilian", &["e2e4", "c7c5", "g1f3", "d7d6", "d2d4", "c5d4", "f3d4"]),
    ("Queen's gambit", &["d2d4", "d7d5", "c2c4", "e7e6", "b1c3", "g8f6"]),
    ("Castled", &["e2e4", "e7e5", "g1f3", "g8f6", "f1e2", "f8e7", "0-0", "0-0"]),
];

fn main() {
    let args: Vec<String> = env::args().collect();

    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(4);

    // If moves provided, use single position mode
    if args.len() > 2 {
        let moves: Vec<&str> = args[2..].iter().map(String::as_str).collect();
        run_single_position(&moves, depth);
    } else {
        run_all_positions(depth);
    }
}

fn position_after(moves: &[&str]) -> Position {
    let mut pos = Position::startpos();
    for token in moves {
        if let Err(reason) = pos.submit(token) {
            eprintln!("{token}: {reason}");
            std::process::exit(1);
        }
    }
    pos
}

fn nps(nodes: u64, secs: f64) -> f64 {
    if secs > 0.0 { nodes as f64 / secs } else { 0.0 }
}

fn run_single_position(moves: &[&str], depth: u8) {
    let pos = position_after(moves);

    println!("Moves: {}", moves.join(" "));
    println!("Depth: {depth}");
    println!();

    // Warm-up run at lower depth
    if depth > 2 {
        let _ = perft(&pos, depth.saturating_sub(2));
    }

    let start = Instant::now();
    let nodes = perft(&pos, depth);
    let elapsed = start.elapsed();

    println!("Nodes: {nodes}");
    println!("Time: {elapsed:.3?}");
    println!("NPS: {:.0}", nps(nodes, elapsed.as_secs_f64()));
}

fn run_all_positions(depth: u8) {
    println!("=== Perft Benchmark Suite ===");
    println!("Depth: {depth}");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = std::time::Duration::ZERO;

    for (name, moves) in TEST_LINES {
        let pos = position_after(moves);

        print!("{name:.<30}");

        let start = Instant::now();
        let nodes = perft(&pos, depth);
        let elapsed = start.elapsed();

        total_nodes += nodes;
        total_time += elapsed;

        println!(
            " {nodes:>12} nodes in {elapsed:>8.3?} ({:>10.0} nps)",
            nps(nodes, elapsed.as_secs_f64())
        );
    }

    println!();
    println!("{:=<70}", "");
    println!(
        "TOTAL: {total_nodes} nodes in {total_time:.3?} ({:.0} nps)",
        nps(total_nodes, total_time.as_secs_f64())
    );
}
