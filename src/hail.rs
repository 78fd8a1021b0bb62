use num_bigint::BigInt;
use num_rational::BigRational;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vec3 {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl Vec3 {
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Vec3 { x, y, z }
    }

    /// Components in axis order x, y, z.
    pub fn components(&self) -> [i64; 3] {
        [self.x, self.y, self.z]
    }

    pub fn axis(&self, axis: Axis) -> i64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// `self - other` widened to `BigInt`, any two parsed components can be subtracted.
    pub fn difference(&self, other: &Vec3) -> [BigInt; 3] {
        let a = self.components().map(BigInt::from);
        let b = other.components().map(BigInt::from);
        let [ax, ay, az] = a;
        [ax - &b[0], ay - &b[1], az - &b[2]]
    }

    /// Cross product widened to `BigInt`; puzzle positions are around 4e14 so the products do
    /// not fit an `i64`.
    pub fn cross(&self, other: &Vec3) -> [BigInt; 3] {
        let a = self.components().map(BigInt::from);
        let b = other.components().map(BigInt::from);
        [
            &a[1] * &b[2] - &a[2] * &b[1],
            &a[2] * &b[0] - &a[0] * &b[2],
            &a[0] * &b[1] - &a[1] * &b[0],
        ]
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "{}, {}, {}", self.x, self.y, self.z)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        fmt.write_str(s)
    }
}

/// One of the observed particles: where it is at t = 0 and how far it moves per time unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hailstone {
    pub position: Vec3,
    pub velocity: Vec3,
}

impl Hailstone {
    pub const fn new(position: Vec3, velocity: Vec3) -> Self {
        Hailstone { position, velocity }
    }

    /// Position along a single axis at time `t`.
    pub fn axis_at(&self, axis: Axis, t: &BigRational) -> BigRational {
        let p = BigRational::from_integer(self.position.axis(axis).into());
        let v = BigRational::from_integer(self.velocity.axis(axis).into());
        p + v * t
    }

    pub fn position_at(&self, t: &BigRational) -> [BigRational; 3] {
        Axis::ALL.map(|axis| self.axis_at(axis, t))
    }
}

impl fmt::Display for Hailstone {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "{} @ {}", self.position, self.velocity)
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseHailstoneError {
    #[error("expected six integers, found {0} tokens")]
    TokenCount(usize),
    #[error("invalid integer {token:?} at token {index}")]
    InvalidInteger {
        index: usize,
        token: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

impl FromStr for Hailstone {
    type Err = ParseHailstoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // "19, 13, 30 @ -2, 1, -2" reads the same as "19 13 30 -2 1 -2"
        let tokens = s
            .split(|c: char| c.is_whitespace() || c == ',' || c == '@')
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>();

        if tokens.len() != 6 {
            return Err(ParseHailstoneError::TokenCount(tokens.len()));
        }

        let mut values = [0i64; 6];
        for (index, (token, slot)) in tokens.iter().zip(values.iter_mut()).enumerate() {
            *slot = token
                .parse()
                .map_err(|source| ParseHailstoneError::InvalidInteger {
                    index,
                    token: token.to_string(),
                    source,
                })?;
        }

        let [x, y, z, i, j, k] = values;
        Ok(Hailstone::new(Vec3::new(x, y, z), Vec3::new(i, j, k)))
    }
}
