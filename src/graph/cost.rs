use crate::error::CostParseError;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

/// A non-negative edge or tour cost.
///
/// Any value at or above [`Cost::INFINITE_THRESHOLD`] is normalized to the
/// infinite sentinel at construction, so `Cost::new(999_999.0)` and
/// `Cost::new(f64::INFINITY)` are the same cost: "no usable direct
/// connection". Infinity absorbs finite addends, so a running total that has
/// gone infinite stays infinite.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Cost(f64);

impl Cost {
    /// Values at or above this threshold are treated as infinity.
    pub const INFINITE_THRESHOLD: f64 = 999_999.0;

    pub const ZERO: Cost = Cost(0.0);
    pub const INFINITE: Cost = Cost(f64::INFINITY);

    /// Creates a cost, normalizing the infinite sentinel.
    ///
    /// NaN does not compare below the threshold and therefore also maps to
    /// the infinite sentinel, which keeps every stored cost orderable.
    pub fn new(value: f64) -> Self {
        if value < Self::INFINITE_THRESHOLD {
            Cost(value)
        } else {
            Self::INFINITE
        }
    }

    pub fn is_infinite(&self) -> bool {
        self.0.is_infinite()
    }

    /// The raw numeric value; `f64::INFINITY` for the sentinel.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Add for Cost {
    type Output = Cost;

    fn add(self, rhs: Cost) -> Cost {
        // Renormalize: a finite sum can cross the threshold.
        Cost::new(self.0 + rhs.0)
    }
}

impl AddAssign for Cost {
    fn add_assign(&mut self, rhs: Cost) {
        *self = *self + rhs;
    }
}

impl fmt::Display for Cost {
    /// The display contract for costs: the infinity marker for the sentinel
    /// (or any raw value at or above the threshold), a plain integer for
    /// integral values, the f64 otherwise. Sentinel values are never
    /// rendered as a numeric string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_infinite() || self.0 >= Self::INFINITE_THRESHOLD {
            write!(f, "∞ (Infinite)")
        } else if self.0.fract() == 0.0 {
            write!(f, "{}", self.0 as i64)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl FromStr for Cost {
    type Err = CostParseError;

    /// Parses a cost cell as entered by a user: `"inf"`, `"infinity"`, `"∞"`
    /// (case-insensitive) and the empty cell all mean "no connection".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(Self::INFINITE);
        }
        match trimmed.to_lowercase().as_str() {
            "inf" | "infinity" | "∞" => Ok(Self::INFINITE),
            _ => {
                let value = trimmed
                    .parse::<f64>()
                    .map_err(|_| CostParseError(s.to_string()))?;
                // f64's parser also accepts "-inf" and "-5"; costs are
                // non-negative.
                if value < 0.0 {
                    return Err(CostParseError(s.to_string()));
                }
                Ok(Cost::new(value))
            }
        }
    }
}

impl Serialize for Cost {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_infinite() {
            serializer.serialize_str("inf")
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

impl<'de> Deserialize<'de> for Cost {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // A cost cell is either a JSON number or one of the textual
        // "no connection" spellings.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawCost {
            Number(f64),
            Text(String),
        }

        match RawCost::deserialize(deserializer)? {
            RawCost::Number(n) => Ok(Cost::new(n)),
            RawCost::Text(s) => s.parse().map_err(D::Error::custom),
        }
    }
}
