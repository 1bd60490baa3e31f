//! # Building blocks to describe linear programs.
use std::fmt;
use std::ops::Not;
use std::str::FromStr;

use enum_map::Enum;

use crate::error::SolveError;

/// A `ConstraintRelation` is a type of (in)equality.
///
/// These are read "from constraint to constraint value": `Less` means `<a, x> <= b`.
#[allow(missing_docs)]
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ConstraintRelation {
    Less,
    Greater,
    Equal,
}

/// Multiplying both sides of a constraint by `-1` reverses an inequality.
///
/// An equality stays an equality.
impl Not for ConstraintRelation {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            ConstraintRelation::Less => ConstraintRelation::Greater,
            ConstraintRelation::Greater => ConstraintRelation::Less,
            ConstraintRelation::Equal => ConstraintRelation::Equal,
        }
    }
}

impl FromStr for ConstraintRelation {
    type Err = SolveError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.trim() {
            "<=" | "≤" => Ok(ConstraintRelation::Less),
            ">=" | "≥" => Ok(ConstraintRelation::Greater),
            "=" | "==" => Ok(ConstraintRelation::Equal),
            _ => Err(SolveError::InvalidRelation { token: token.to_string() }),
        }
    }
}

impl fmt::Display for ConstraintRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConstraintRelation::Less => "<=",
            ConstraintRelation::Greater => ">=",
            ConstraintRelation::Equal => "=",
        })
    }
}

/// Direction of optimization.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Objective {
    Maximize,
    #[default]
    Minimize,
}

impl FromStr for Objective {
    type Err = SolveError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.trim() {
            "max" | "maximize" => Ok(Objective::Maximize),
            "min" | "minimize" => Ok(Objective::Minimize),
            _ => Err(SolveError::InvalidObjective { token: token.to_string() }),
        }
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Objective::Maximize => "max",
            Objective::Minimize => "min",
        })
    }
}
