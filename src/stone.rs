//! Finding the stone which, thrown from some position with some constant velocity at t = 0,
//! hits each of three hailstones at its own moment.
//!
//! For hailstone `k` with position `p_k` and velocity `v_k` and the stone `P`, `V`, the hit means
//! `P + V t_k = p_k + v_k t_k` on every axis, nine equations in nine unknowns. The products
//! `V t_k` make them nonlinear, but `P - p_k` and `V - v_k` must then be parallel:
//!
//! ```text
//! (P - p_k) x (V - v_k) = 0
//! P x V - P x v_k - p_k x V + p_k x v_k = 0
//! ```
//!
//! `P x V` is the same for every hailstone so subtracting the equation of hailstone 1 from those
//! of hailstones 2 and 3 leaves six linear equations for the six components of `P` and `V`:
//!
//! ```text
//! P x (v_j - v_1) + (p_j - p_1) x V = p_j x v_j - p_1 x v_1
//! ```

use crate::exact;
use crate::hail::{Axis, Hailstone};
use itertools::Itertools;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};
use std::fmt;

/// The nine unknowns in the order a branch lists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unknown {
    X0,
    Y0,
    Z0,
    I0,
    J0,
    K0,
    T1,
    T2,
    T3,
}

impl Unknown {
    pub const ALL: [Unknown; 9] = [
        Unknown::X0,
        Unknown::Y0,
        Unknown::Z0,
        Unknown::I0,
        Unknown::J0,
        Unknown::K0,
        Unknown::T1,
        Unknown::T2,
        Unknown::T3,
    ];

    pub fn position(axis: Axis) -> Unknown {
        Unknown::ALL[axis.index()]
    }

    pub fn velocity(axis: Axis) -> Unknown {
        Unknown::ALL[3 + axis.index()]
    }

    /// Intersection time of the zero based `particle`, one of 0, 1 or 2.
    pub fn time(particle: usize) -> Unknown {
        Unknown::ALL[6 + particle]
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Unknown {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Unknown::X0 => "x0",
            Unknown::Y0 => "y0",
            Unknown::Z0 => "z0",
            Unknown::I0 => "i0",
            Unknown::J0 => "j0",
            Unknown::K0 => "k0",
            Unknown::T1 => "t1",
            Unknown::T2 => "t2",
            Unknown::T3 => "t3",
        };
        fmt.write_str(s)
    }
}

/// `stone_position + stone_velocity * t - particle_position - particle_velocity * t = 0` for one
/// particle along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Equation {
    pub particle: usize,
    pub hailstone: Hailstone,
    pub axis: Axis,
}

impl Equation {
    /// Left hand side evaluated with the values of `branch`; zero when the equation holds.
    pub fn residual(&self, branch: &Branch) -> BigRational {
        let t = branch.get(Unknown::time(self.particle));
        let stone = branch.get(Unknown::position(self.axis))
            + branch.get(Unknown::velocity(self.axis)) * t;
        stone - self.hailstone.axis_at(self.axis, t)
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = Unknown::time(self.particle);
        write!(
            fmt,
            "{} + {} * {} - ({}) - ({}) * {} = 0",
            Unknown::position(self.axis),
            Unknown::velocity(self.axis),
            t,
            self.hailstone.position.axis(self.axis),
            self.hailstone.velocity.axis(self.axis),
            t
        )
    }
}

/// All nine equations, ordered by particle and then axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquationSet {
    equations: Vec<Equation>,
}

impl EquationSet {
    pub fn new(hailstones: &[Hailstone; 3]) -> Self {
        let equations = hailstones
            .iter()
            .enumerate()
            .cartesian_product(Axis::ALL.iter())
            .map(|((particle, &hailstone), &axis)| Equation {
                particle,
                hailstone,
                axis,
            })
            .collect::<Vec<_>>();

        EquationSet { equations }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Equation> + '_ {
        self.equations.iter()
    }

    /// True when every equation evaluates to exactly zero.
    pub fn is_satisfied_by(&self, branch: &Branch) -> bool {
        self.first_unsatisfied(branch).is_none()
    }

    fn first_unsatisfied(&self, branch: &Branch) -> Option<&Equation> {
        self.equations
            .iter()
            .find(|eq| !eq.residual(branch).is_zero())
    }
}

/// One assignment of all nine unknowns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    values: [BigRational; 9],
}

impl Branch {
    pub fn get(&self, unknown: Unknown) -> &BigRational {
        &self.values[unknown.index()]
    }

    pub fn stone_position(&self) -> [&BigRational; 3] {
        Axis::ALL.map(|axis| self.get(Unknown::position(axis)))
    }

    pub fn stone_velocity(&self) -> [&BigRational; 3] {
        Axis::ALL.map(|axis| self.get(Unknown::velocity(axis)))
    }

    pub fn times(&self) -> [&BigRational; 3] {
        [0, 1, 2].map(|particle| self.get(Unknown::time(particle)))
    }

    /// Where the stone is at time `t`.
    pub fn stone_at(&self, t: &BigRational) -> [BigRational; 3] {
        Axis::ALL.map(|axis| {
            self.get(Unknown::position(axis)) + self.get(Unknown::velocity(axis)) * t
        })
    }

    /// The answer to the puzzle: `x0 + y0 + z0`.
    pub fn position_sum(&self) -> BigRational {
        self.stone_position()
            .iter()
            .fold(BigRational::zero(), |acc, &v| acc + v)
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "({})", self.values.iter().format(", "))
    }
}

/// All branches found, in the order they were found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    branches: Vec<Branch>,
}

impl Solution {
    /// The branch taken as the answer. A `Solution` is only built with at least one branch.
    pub fn first(&self) -> &Branch {
        &self.branches[0]
    }

    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    /// The two lines printed as the answer: every branch, then the position sum of the first.
    pub fn report(&self) -> String {
        format!("{}\n{}", self, self.first().position_sum())
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "[{}]", self.branches.iter().format(", "))
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    #[error("need three hailstones, got {0}")]
    TooFewHailstones(usize),
    #[error("hailstones do not determine a single stone")]
    Degenerate(#[from] exact::Singular),
    #[error("stone moves along with particle {} so its intersection time is undetermined", .0 + 1)]
    UndeterminedTime(usize),
    #[error("branch {branch} does not satisfy {equation}")]
    InconsistentBranch { branch: String, equation: String },
    #[error("particle {} would be hit at negative time {time}", .particle + 1)]
    NegativeTime { particle: usize, time: BigRational },
}

/// Solves the nine equations for the first three of `hailstones`.
///
/// The linear reduction has exactly one solution whenever it has any, so the returned
/// `Solution` holds a single branch which has been checked against all nine equations.
pub fn solve(hailstones: &[Hailstone]) -> Result<Solution, SolveError> {
    let three = match hailstones {
        [a, b, c, ..] => [*a, *b, *c],
        _ => return Err(SolveError::TooFewHailstones(hailstones.len())),
    };
    let three = &three;

    let equations = EquationSet::new(three);
    for eq in equations.iter() {
        tracing::debug!(%eq, "equation");
    }

    let (position, velocity) = throw(three)?;

    let time = |particle: usize| {
        intersection_time(particle, &three[particle], &position, &velocity)
    };
    let [t1, t2, t3] = [time(0)?, time(1)?, time(2)?];

    let [x0, y0, z0] = position;
    let [i0, j0, k0] = velocity;

    let branch = Branch {
        values: [x0, y0, z0, i0, j0, k0, t1, t2, t3],
    };

    validate(&equations, &branch)?;

    Ok(Solution {
        branches: vec![branch],
    })
}

type Triple = [BigRational; 3];

/// Coefficients for `x0 y0 z0 i0 j0 k0` and the right hand side.
type Row = ([BigRational; 6], BigRational);

/// Stone position and velocity from the six linear equations.
fn throw(three: &[Hailstone; 3]) -> Result<(Triple, Triple), SolveError> {
    let [first, second, third] = three;

    let [(a0, b0), (a1, b1), (a2, b2)] = linear_rows(first, second);
    let [(a3, b3), (a4, b4), (a5, b5)] = linear_rows(first, third);

    let solved = exact::solve([a0, a1, a2, a3, a4, a5], [b0, b1, b2, b3, b4, b5])?;
    tracing::debug!(?solved, "stone");

    let [x0, y0, z0, i0, j0, k0] = solved;
    Ok(([x0, y0, z0], [i0, j0, k0]))
}

/// Rows of `P x a + b x V = c` with `a = v_j - v_i`, `b = p_j - p_i` and
/// `c = p_j x v_j - p_i x v_i`.
fn linear_rows(i: &Hailstone, j: &Hailstone) -> [Row; 3] {
    let [ax, ay, az] = j.velocity.difference(&i.velocity);
    let [bx, by, bz] = j.position.difference(&i.position);

    let cj = j.position.cross(&j.velocity);
    let ci = i.position.cross(&i.velocity);
    let [cx, cy, cz] = [0, 1, 2].map(|axis| BigRational::from_integer(&cj[axis] - &ci[axis]));

    let z = BigRational::zero;
    let p = |v: &BigInt| BigRational::from_integer(v.clone());
    let n = |v: &BigInt| BigRational::from_integer(-v);

    [
        ([z(), p(&az), n(&ay), z(), n(&bz), p(&by)], cx),
        ([n(&az), z(), p(&ax), p(&bz), z(), n(&bx)], cy),
        ([p(&ay), n(&ax), z(), n(&by), p(&bx), z()], cz),
    ]
}

/// Time at which the stone meets `hailstone`, read from any axis along which they move at
/// different speeds. Along an axis of equal speeds the quotient would be 0/0.
fn intersection_time(
    particle: usize,
    hailstone: &Hailstone,
    position: &Triple,
    velocity: &Triple,
) -> Result<BigRational, SolveError> {
    Axis::ALL
        .iter()
        .find_map(|&axis| {
            let i = axis.index();
            let v = BigRational::from_integer(hailstone.velocity.axis(axis).into());
            let closing = &velocity[i] - v;
            if closing.is_zero() {
                return None;
            }
            let p = BigRational::from_integer(hailstone.position.axis(axis).into());
            Some((p - &position[i]) / closing)
        })
        .ok_or(SolveError::UndeterminedTime(particle))
}

/// A branch is only accepted when all nine equations hold exactly and no hailstone is met
/// before the throw. Checking every equation also covers the times being the same on all
/// three axes.
fn validate(equations: &EquationSet, branch: &Branch) -> Result<(), SolveError> {
    if let Some(eq) = equations.first_unsatisfied(branch) {
        return Err(SolveError::InconsistentBranch {
            branch: branch.to_string(),
            equation: eq.to_string(),
        });
    }

    if let Some((particle, &time)) = branch
        .times()
        .iter()
        .enumerate()
        .find(|(_, t)| t.is_negative())
    {
        return Err(SolveError::NegativeTime {
            particle,
            time: time.clone(),
        });
    }

    tracing::debug!(%branch, "branch satisfies all equations");
    Ok(())
}
