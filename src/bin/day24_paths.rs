use aoc2023::{fixture, paths};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error + 'static>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let hailstones = fixture::parse_all(fixture::PUZZLE_INPUT)?;

    let crossings = paths::crossings_within(&hailstones, paths::PUZZLE_AREA);

    println!("{}", crossings);
    assert_eq!(crossings, 3);

    Ok(())
}
