//! Easing curves.
//!
//! Curves are named the way the site's motion design was specified
//! (`power3.out`, `back.out(1.7)`, `elastic.out(1, 0.3)`), so animation
//! settings can be written in config files with the same vocabulary.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;
use std::fmt;
use std::str::FromStr;

/// An easing curve mapping linear progress to eased progress.
///
/// Every curve maps `t <= 0` to exactly `0.0` and `t >= 1` to exactly `1.0`.
/// Between the ends `back` and `elastic` overshoot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Ease {
    /// Constant speed (`none`)
    Linear,
    /// Accelerating power curve; exponent is `power + 1`
    PowerIn(u8),
    /// Decelerating power curve
    PowerOut(u8),
    /// Accelerate then decelerate
    PowerInOut(u8),
    /// Overshoots the end then settles; value is the overshoot strength
    BackOut(f32),
    /// Springs past the end and oscillates
    ElasticOut {
        /// Oscillation amplitude (values below 1.0 are treated as 1.0)
        amplitude: f32,
        /// Oscillation period as a fraction of the duration
        period: f32,
    },
}

impl Ease {
    /// `power3.out`, the default for reveals.
    pub const SMOOTH: Self = Self::PowerOut(3);
    /// `back.out(1.7)`.
    pub const BOUNCE: Self = Self::BackOut(1.7);
    /// `elastic.out(1, 0.3)`.
    pub const ELASTIC: Self = Self::ElasticOut {
        amplitude: 1.0,
        period: 0.3,
    };
    /// `power2.out`, the default for hover responses.
    pub const POWER: Self = Self::PowerOut(2);
    /// `power2.inOut`, used by floating effects.
    pub const SWAY: Self = Self::PowerInOut(2);

    /// Map linear progress `t` to eased progress.
    #[must_use]
    pub fn apply(&self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match *self {
            Self::Linear => t,
            Self::PowerIn(p) => t.powi(i32::from(p) + 1),
            Self::PowerOut(p) => 1.0 - (1.0 - t).powi(i32::from(p) + 1),
            Self::PowerInOut(p) => {
                let exp = i32::from(p) + 1;
                if t < 0.5 {
                    (2.0 * t).powi(exp) / 2.0
                } else {
                    1.0 - (2.0 * (1.0 - t)).powi(exp) / 2.0
                }
            }
            Self::BackOut(s) => {
                let u = t - 1.0;
                1.0 + (s + 1.0) * u.powi(3) + s * u.powi(2)
            }
            Self::ElasticOut { amplitude, period } => {
                let a = amplitude.max(1.0);
                let p = if period > 0.0 { period } else { 0.3 };
                let shift = p / (2.0 * PI) * (1.0 / a).asin();
                a * 2f32.powf(-10.0 * t) * ((t - shift) * (2.0 * PI) / p).sin() + 1.0
            }
        }
    }
}

impl Default for Ease {
    fn default() -> Self {
        Self::SMOOTH
    }
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "none"),
            Self::PowerIn(p) => write!(f, "power{p}.in"),
            Self::PowerOut(p) => write!(f, "power{p}.out"),
            Self::PowerInOut(p) => write!(f, "power{p}.inOut"),
            Self::BackOut(s) => write!(f, "back.out({s})"),
            Self::ElasticOut { amplitude, period } => {
                write!(f, "elastic.out({amplitude}, {period})")
            }
        }
    }
}

/// Split `name(args)` into the name and its numeric arguments.
fn split_call(s: &str) -> Result<(&str, Vec<f32>)> {
    let Some(open) = s.find('(') else {
        return Ok((s, Vec::new()));
    };
    let close = s
        .rfind(')')
        .filter(|&c| c > open)
        .with_context(|| format!("Unbalanced parentheses in ease '{s}'"))?;
    let args = s[open + 1..close]
        .split(',')
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .map(|a| {
            a.parse::<f32>()
                .with_context(|| format!("Invalid ease argument '{a}' in '{s}'"))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok((s[..open].trim(), args))
}

impl FromStr for Ease {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (name, args) = split_call(s.trim())?;
        let (family, direction) = name.split_once('.').unwrap_or((name, "out"));

        match family {
            "none" | "linear" | "power0" => return Ok(Self::Linear),
            "back" if direction == "out" => {
                return Ok(Self::BackOut(args.first().copied().unwrap_or(1.7)));
            }
            "elastic" if direction == "out" => {
                return Ok(Self::ElasticOut {
                    amplitude: args.first().copied().unwrap_or(1.0),
                    period: args.get(1).copied().unwrap_or(0.3),
                });
            }
            _ => {}
        }

        let power = family
            .strip_prefix("power")
            .and_then(|n| n.parse::<u8>().ok())
            .filter(|n| (1..=4).contains(n))
            .with_context(|| format!("Unknown ease '{s}'"))?;

        match direction {
            "in" => Ok(Self::PowerIn(power)),
            "out" => Ok(Self::PowerOut(power)),
            "inOut" => Ok(Self::PowerInOut(power)),
            other => anyhow::bail!("Unknown ease direction '{other}' in '{s}'"),
        }
    }
}

impl TryFrom<String> for Ease {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Ease> for String {
    fn from(ease: Ease) -> Self {
        ease.to_string()
    }
}
