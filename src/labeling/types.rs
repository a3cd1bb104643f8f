//! Validated value types: divisors, upper bounds, rules and result entries.
//!
//! Every type here can only be constructed in a valid state. Conversions
//! from raw numbers go through `TryFrom`, which rejects zero, negative,
//! fractional and non-finite inputs.

use std::fmt;
use std::num::NonZeroU64;

use crate::error::{FizzBuzzError, Result};

/// Converts a float to a positive integer, if it is one exactly.
fn positive_integer(value: f64) -> Option<NonZeroU64> {
    // `u64::MAX as f64` rounds up to 2^64, which is out of range.
    if value.is_finite() && value.fract() == 0.0 && value >= 1.0 && value < u64::MAX as f64 {
        NonZeroU64::new(value as u64)
    } else {
        None
    }
}

macro_rules! impl_positive_conversions {
    (@int $target:ident, $err:expr; $($int:ty),*) => {
        $(
            impl TryFrom<$int> for $target {
                type Error = FizzBuzzError;

                fn try_from(value: $int) -> Result<Self> {
                    u64::try_from(value)
                        .ok()
                        .and_then(NonZeroU64::new)
                        .map(Self)
                        .ok_or($err)
                }
            }
        )*
    };
    ($target:ident, $err:expr) => {
        impl_positive_conversions!(@int $target, $err;
            u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

        impl TryFrom<f64> for $target {
            type Error = FizzBuzzError;

            fn try_from(value: f64) -> Result<Self> {
                positive_integer(value).map(Self).ok_or($err)
            }
        }

        impl TryFrom<f32> for $target {
            type Error = FizzBuzzError;

            fn try_from(value: f32) -> Result<Self> {
                Self::try_from(f64::from(value))
            }
        }

        impl From<NonZeroU64> for $target {
            fn from(value: NonZeroU64) -> Self {
                Self(value)
            }
        }

        impl From<$target> for u64 {
            fn from(value: $target) -> u64 {
                value.get()
            }
        }

        impl fmt::Display for $target {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

/// A rule divisor: an integer >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Number", into = "u64")
)]
pub struct Divisor(NonZeroU64);

impl Divisor {
    /// Returns `None` for zero.
    pub const fn new(value: u64) -> Option<Self> {
        match NonZeroU64::new(value) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    pub const fn get(self) -> u64 {
        self.0.get()
    }

    /// Whether `n` is an exact multiple of this divisor.
    pub const fn divides(self, n: u64) -> bool {
        n % self.0.get() == 0
    }
}

impl_positive_conversions!(Divisor, FizzBuzzError::InvalidDivisor);

/// Inclusive upper end of the evaluated range `1..=N`; always >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UpperBound(NonZeroU64);

impl UpperBound {
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

impl_positive_conversions!(UpperBound, FizzBuzzError::InvalidRange);

/// Raw numeric input accepted when deserializing a divisor.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum Number {
    Signed(i64),
    Unsigned(u64),
    Float(f64),
}

#[cfg(feature = "serde")]
impl TryFrom<Number> for Divisor {
    type Error = FizzBuzzError;

    fn try_from(value: Number) -> Result<Self> {
        match value {
            Number::Signed(n) => Self::try_from(n),
            Number::Unsigned(n) => Self::try_from(n),
            Number::Float(n) => Self::try_from(n),
        }
    }
}

/// A labeling rule: integers divisible by `divisor` become `replacement`.
///
/// # Examples
///
/// ```
/// use u_fizzbuzz::labeling::Rule;
/// use u_fizzbuzz::FizzBuzzError;
///
/// let rule = Rule::new(3, "Fizz").unwrap();
/// assert!(rule.matches(9));
///
/// assert_eq!(Rule::new(0, "Fizz"), Err(FizzBuzzError::InvalidDivisor));
/// assert_eq!(Rule::new(3, "  "), Err(FizzBuzzError::InvalidReplacement));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RuleRepr")
)]
pub struct Rule {
    pub(crate) divisor: Divisor,
    pub(crate) replacement: String,
}

impl Rule {
    /// Creates a rule, checking the divisor before the replacement.
    ///
    /// The replacement is kept verbatim; surrounding whitespace only
    /// matters for the emptiness check.
    pub fn new<D>(divisor: D, replacement: impl Into<String>) -> Result<Self>
    where
        D: TryInto<Divisor>,
        FizzBuzzError: From<D::Error>,
    {
        let divisor = divisor.try_into()?;
        let replacement = replacement.into();
        if replacement.trim().is_empty() {
            return Err(FizzBuzzError::InvalidReplacement);
        }
        Ok(Self {
            divisor,
            replacement,
        })
    }

    pub fn divisor(&self) -> Divisor {
        self.divisor
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Whether this rule labels `n`.
    pub fn matches(&self, n: u64) -> bool {
        self.divisor.divides(n)
    }
}

/// Any JSON-like value in a divisor slot. Type mismatches are reported as
/// validation errors rather than serde errors.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum LooseDivisor {
    Number(Number),
    Other(serde::de::IgnoredAny),
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum LooseText {
    Text(String),
    Other(serde::de::IgnoredAny),
}

/// Raw rule fields; missing or mistyped fields are accepted here and
/// rejected by the `TryFrom` conversion.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
pub(crate) struct RuleRepr {
    #[serde(default)]
    divisor: Option<LooseDivisor>,
    #[serde(default)]
    replacement: Option<LooseText>,
}

#[cfg(feature = "serde")]
impl TryFrom<RuleRepr> for Rule {
    type Error = FizzBuzzError;

    fn try_from(repr: RuleRepr) -> Result<Self> {
        let divisor = match repr.divisor {
            Some(LooseDivisor::Number(n)) => Divisor::try_from(n)?,
            Some(LooseDivisor::Other(_)) | None => return Err(FizzBuzzError::InvalidDivisor),
        };
        match repr.replacement {
            Some(LooseText::Text(text)) => Rule::new(divisor, text),
            Some(LooseText::Other(_)) | None => Err(FizzBuzzError::InvalidReplacement),
        }
    }
}

/// One position of an evaluated sequence.
///
/// Renderers must handle both cases; `Display` writes the text or the
/// decimal integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Entry {
    /// Text of the first rule that matched.
    Replacement(String),

    /// The integer itself; no rule matched.
    Original(u64),
}

impl Entry {
    pub fn is_replacement(&self) -> bool {
        matches!(self, Entry::Replacement(_))
    }

    pub fn as_replacement(&self) -> Option<&str> {
        match self {
            Entry::Replacement(text) => Some(text),
            Entry::Original(_) => None,
        }
    }

    pub fn as_original(&self) -> Option<u64> {
        match self {
            Entry::Replacement(_) => None,
            Entry::Original(n) => Some(*n),
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Replacement(text) => f.write_str(text),
            Entry::Original(n) => write!(f, "{n}"),
        }
    }
}
