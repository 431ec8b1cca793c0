//! Command-line driver: solve an N-Queens board and print the result.
//!
//! ```text
//! cargo run --example n_queens -- 128 --seed 7
//! ```

use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use regina::{
    board,
    solver::{
        engine::{MinConflictsSolver, SolveOutcome},
        heuristics::{
            restart::{AlwaysRestart, MaxAttempts, RestartPolicy},
            value::{
                LeastConflictedColumnHeuristic, LeastConflictedPositionHeuristic,
                ValueSelectionHeuristic,
            },
            variable::{
                MostConflictedHeuristic, RandomConflictedHeuristic, VariableSelectionHeuristic,
            },
        },
        model::Model,
        stats::{render_attempts_table, SearchStats},
    },
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ValueHeuristicChoice {
    /// Diagonal-probe scoring (the default).
    Position,
    /// Conventional min-conflicts scoring along the queen's own row.
    Column,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum VariableHeuristicChoice {
    /// Move a queen tied for the most conflicts.
    Most,
    /// Move any conflicted queen.
    Random,
}

#[derive(Parser, Debug)]
#[command(about = "Solve N-Queens with min-conflicts local search")]
struct Args {
    /// Board size.
    #[arg(default_value_t = 8)]
    n: usize,

    /// Seed for the random number generator; omit for an arbitrary seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Give up after this many attempts instead of restarting forever.
    #[arg(long)]
    max_attempts: Option<u64>,

    /// Value-selection heuristic.
    #[arg(long, value_enum, default_value_t = ValueHeuristicChoice::Position)]
    heuristic: ValueHeuristicChoice,

    /// Variable-selection heuristic.
    #[arg(long, value_enum, default_value_t = VariableHeuristicChoice::Most)]
    variable_heuristic: VariableHeuristicChoice,

    /// Render this queen as 'X' in the board output.
    #[arg(long)]
    highlight: Option<usize>,

    /// Emit the result as JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    n: usize,
    outcome: SolveOutcome,
    stats: &'a SearchStats,
    columns: Vec<usize>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let variable_heuristic: Box<dyn VariableSelectionHeuristic> = match args.variable_heuristic {
        VariableHeuristicChoice::Most => Box::new(MostConflictedHeuristic),
        VariableHeuristicChoice::Random => Box::new(RandomConflictedHeuristic),
    };
    let value_heuristic: Box<dyn ValueSelectionHeuristic> = match args.heuristic {
        ValueHeuristicChoice::Position => Box::new(LeastConflictedPositionHeuristic),
        ValueHeuristicChoice::Column => Box::new(LeastConflictedColumnHeuristic),
    };
    let restart_policy: Box<dyn RestartPolicy> = match args.max_attempts {
        Some(max_attempts) => Box::new(MaxAttempts { max_attempts }),
        None => Box::new(AlwaysRestart),
    };

    let mut model = Model::new(args.n);
    let mut solver =
        MinConflictsSolver::new(variable_heuristic, value_heuristic, restart_policy, Box::new(rng));

    let (outcome, stats) = match solver.solve(&mut model) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    if args.json {
        let report = JsonReport {
            n: args.n,
            outcome,
            stats: &stats,
            columns: model.variables().iter().map(|v| v.value()).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report).unwrap());
        return;
    }

    print!("{}", board::render_with_highlight(&model, args.highlight));
    println!("Total steps: {}", stats.steps);
    println!("Total attempts: {}", stats.attempts);
    println!(
        "Total runtime is {} milliseconds.",
        stats.elapsed.as_millis()
    );

    if outcome == SolveOutcome::AttemptsExhausted {
        println!("No solution found within {} attempts.", stats.attempts);
    }

    println!("\n{}", render_attempts_table(&stats));
}
