use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Árbol buscado: mínimo (pesos ascendentes) o máximo (descendentes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreeGoal {
    #[default]
    Minimum,
    Maximum,
}

impl TreeGoal {
    pub fn from_maximize(maximize: bool) -> Self {
        if maximize {
            TreeGoal::Maximum
        } else {
            TreeGoal::Minimum
        }
    }

    pub fn is_maximum(&self) -> bool {
        matches!(self, TreeGoal::Maximum)
    }
}

impl fmt::Display for TreeGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeGoal::Minimum => f.write_str("minimum"),
            TreeGoal::Maximum => f.write_str("maximum"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown tree goal '{0}' (expected min|max)")]
pub struct ParseTreeGoalError(pub String);

impl FromStr for TreeGoal {
    type Err = ParseTreeGoalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "min" | "minimum" => Ok(TreeGoal::Minimum),
            "max" | "maximum" => Ok(TreeGoal::Maximum),
            other => Err(ParseTreeGoalError(other.to_string())),
        }
    }
}
