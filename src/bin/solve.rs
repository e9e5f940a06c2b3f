use anyhow::{Context, bail};
use aoc2025::{bench, io, puzzles};
use clap::Parser;
use std::path::PathBuf;

/// Runs the puzzle solutions on their inputs and prints the answers.
#[derive(Parser, Debug)]
struct Cli {
    /// Days to run (all registered days if omitted)
    days: Vec<u8>,
    /// Input file to use instead of `<data-dir>/dayNN.txt` (single day only)
    #[clap(long, short = 'i')]
    input: Option<PathBuf>,
    /// Directory holding the puzzle inputs
    #[clap(long, default_value = "data/2025")]
    data_dir: PathBuf,
    /// Average the solve time over this many runs
    #[clap(long, short = 'b')]
    bench: Option<usize>,
    /// Print one JSON object per day
    #[clap(long, short = 'j', default_value_t = false)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let days: Vec<u8> = if cli.days.is_empty() {
        puzzles::all_puzzles().iter().map(|p| p.day).collect()
    } else {
        cli.days.clone()
    };
    if cli.input.is_some() && days.len() != 1 {
        bail!("--input needs exactly one day, got {}", days.len());
    }

    for day in days {
        eprintln!("!log day {}", day);
        let Some(puzzle) = puzzles::get_puzzle(day) else {
            eprintln!("!log status error");
            bail!("Unknown day: {}", day);
        };
        let path = cli
            .input
            .clone()
            .unwrap_or_else(|| cli.data_dir.join(format!("day{:02}.txt", day)));
        let input = match io::read_input_raw(&path) {
            Ok(input) => input,
            Err(e) => {
                eprintln!("!log status error");
                return Err(e);
            }
        };

        let stime = std::time::Instant::now();
        let answer = match (puzzle.solve)(&input) {
            Ok(answer) => answer,
            Err(e) => {
                eprintln!("!log status error");
                return Err(e).with_context(|| format!("Day {} failed on {}", day, path.display()));
            }
        };
        let t = stime.elapsed();
        eprintln!("!log time {:.3}", t.as_secs_f64());
        eprintln!("!log status ok");

        if let Some(runs) = cli.bench {
            let avg = bench::time_callable(|| (puzzle.solve)(&input), runs);
            eprintln!("!log bench {:.6} runs {}", avg.as_secs_f64(), runs.max(1));
        }

        if cli.json {
            println!(
                "{}",
                serde_json::json!({ "day": day, "title": puzzle.title, "answer": answer })
            );
        } else {
            println!("Day {}: {}", day, puzzle.title);
            println!("Part 1: {}", answer.part1);
            if let Some(part2) = answer.part2 {
                println!("Part 2: {}", part2);
            }
        }
    }
    Ok(())
}
