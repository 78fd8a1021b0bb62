use aoc2023::{fixture, solve};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error + 'static>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let hailstones = fixture::parse_all(fixture::PUZZLE_INPUT)?;

    let solution = solve(&hailstones)?;
    let answer = solution.first().position_sum();

    println!("{}", solution.report());

    assert_eq!(answer.to_string(), "546494494317645");

    Ok(())
}
