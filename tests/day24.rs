use aoc2023::{fixture, paths, solve, Axis, EquationSet, Hailstone, SolveError};
use num_rational::BigRational;
use num_traits::Zero;
use std::convert::TryInto;

fn puzzle() -> Vec<Hailstone> {
    fixture::parse_all(fixture::PUZZLE_INPUT).unwrap()
}

fn int(n: i64) -> BigRational {
    BigRational::from_integer(n.into())
}

fn first_three(hailstones: &[Hailstone]) -> &[Hailstone; 3] {
    hailstones[..3].try_into().unwrap()
}

#[test]
fn all_nine_equations_hold() {
    let hailstones = puzzle();
    let solution = solve(&hailstones).unwrap();
    let equations = EquationSet::new(first_three(&hailstones));

    for branch in solution.branches() {
        for eq in equations.iter() {
            assert!(eq.residual(branch).is_zero(), "{} failed", eq);
        }
        assert!(equations.is_satisfied_by(branch));
    }
}

#[test]
fn stone_and_particle_meet_at_solved_times() {
    let hailstones = puzzle();
    let solution = solve(&hailstones).unwrap();
    let branch = solution.first();

    for (hailstone, t) in hailstones.iter().zip(branch.times().iter()) {
        assert_eq!(branch.stone_at(t), hailstone.position_at(t));
    }
}

#[test]
fn puzzle_regression() {
    let solution = solve(&puzzle()).unwrap();
    let branch = solution.first();

    assert_eq!(
        branch.stone_position(),
        [
            &int(200_027_938_836_082),
            &int(127_127_087_242_193),
            &int(219_339_468_239_370)
        ]
    );
    assert_eq!(branch.stone_velocity(), [&int(133), &int(278), &int(85)]);
    assert_eq!(
        branch.times(),
        [
            &int(430_864_632_071),
            &int(704_396_064_221),
            &int(487_119_270_122)
        ]
    );
    assert_eq!(branch.position_sum(), int(546_494_494_317_645));
}

#[test]
fn shared_axis_speed_uses_another_axis_for_time() {
    // first particle and the stone both move 133 along x, starting from the same x
    let hailstones = puzzle();
    let branch = solve(&hailstones).unwrap().first().clone();
    let x = Axis::X.index();
    assert_eq!(branch.stone_velocity()[x], &int(hailstones[0].velocity.x));
    assert_eq!(branch.stone_position()[x], &int(hailstones[0].position.x));
    assert!(!branch.times()[0].is_zero());
}

#[test]
fn solving_twice_gives_the_same_answer() {
    let hailstones = puzzle();
    let a = solve(&hailstones).unwrap();
    let b = solve(&hailstones).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.to_string(), b.to_string());
    assert_eq!(a.first().position_sum(), b.first().position_sum());
}

#[test]
fn printed_solution() {
    assert_eq!(
        solve(&puzzle()).unwrap().to_string(),
        "[(200027938836082, 127127087242193, 219339468239370, 133, 278, 85, \
         430864632071, 704396064221, 487119270122)]"
    );
}

#[test]
fn duplicated_particle_is_degenerate() {
    let hailstones = puzzle();
    let duplicated = [hailstones[0], hailstones[0], hailstones[2]];
    assert!(matches!(
        solve(&duplicated),
        Err(SolveError::Degenerate(_))
    ));
}

#[test]
fn parallel_particles_are_degenerate() {
    let h = |s: &str| s.parse::<Hailstone>().unwrap();
    let parallel = [
        h("0 0 0 1 0 0"),
        h("0 5 0 1 0 0"),
        h("0 0 5 1 0 0"),
    ];
    assert!(matches!(
        solve(&parallel),
        Err(SolveError::Degenerate(_))
    ));
}

#[test]
fn example_answers() {
    let hailstones = fixture::parse_all(fixture::EXAMPLE_INPUT).unwrap();
    assert_eq!(paths::crossings_within(&hailstones, 7..=27), 2);
    assert_eq!(solve(&hailstones).unwrap().first().position_sum(), int(47));
}

#[test]
fn puzzle_crossings() {
    assert_eq!(paths::crossings_within(&puzzle(), paths::PUZZLE_AREA), 3);
}

#[test]
fn malformed_literal() {
    assert!(fixture::parse_all(&["200027938836082 135313515251542 133 259 506"]).is_err());
}

#[test]
fn report_is_solution_then_sum() {
    let report = solve(&puzzle()).unwrap().report();
    let lines = report.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("[(200027938836082, "));
    assert_eq!(lines[1], "546494494317645");
}

#[test]
fn extreme_components_do_not_overflow() {
    let h = |s: &str| s.parse::<Hailstone>().unwrap();

    // velocities at both ends of i64, differences only fit when widened
    let extreme = [
        h("0 0 0 9223372036854775807 1 1"),
        h("0 0 0 -9223372036854775807 2 2"),
        h("1 2 3 4 5 6"),
    ];
    assert!(matches!(
        solve(&extreme),
        Err(SolveError::Degenerate(_))
    ));

    // stone from the origin at 1, 1, 1 meeting three far apart hailstones
    let far = [
        h("6000000000000000000 2000000000000000000 0 -2 0 1"),
        h("-9000000000000000000 0 6000000000000000000 4 1 -1"),
        h("1000000000000000000 -2000000000000000000 -1000000000000000000 0 3 2"),
    ];
    let solution = solve(&far).unwrap();
    let branch = solution.first();
    assert_eq!(branch.stone_position(), [&int(0), &int(0), &int(0)]);
    assert_eq!(branch.stone_velocity(), [&int(1), &int(1), &int(1)]);
    assert_eq!(
        branch.times(),
        [
            &int(2_000_000_000_000_000_000),
            &int(3_000_000_000_000_000_000),
            &int(1_000_000_000_000_000_000)
        ]
    );
}
