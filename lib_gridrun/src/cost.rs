use std::ops::{Add, AddAssign};

use num_traits::{Bounded, Zero};

type CostType = u64;

/// The accumulated cost of a path prefix.
///
/// This cost type is not allowed to be negative.
/// This is important when using Dijkstra to compute a cheapest path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cost(CostType);

impl Cost {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(CostType::MAX);

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<CostType> for Cost {
    fn from(value: CostType) -> Self {
        Self(value)
    }
}

impl From<u32> for Cost {
    fn from(value: u32) -> Self {
        Self(value.into())
    }
}

impl Add for Cost {
    type Output = Cost;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Cost {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Zero for Cost {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Bounded for Cost {
    fn min_value() -> Self {
        Self::ZERO
    }

    fn max_value() -> Self {
        Self::MAX
    }
}

impl std::fmt::Display for Cost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
