//! The fixed, ordered set of responsive-design size thresholds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A responsive-design breakpoint, ordered from the narrowest viewport to the widest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Breakpoint {
    #[serde(rename = "xs")]
    ExtraSmall,
    #[serde(rename = "sm")]
    Small,
    #[serde(rename = "md")]
    Medium,
    #[serde(rename = "lg")]
    Large,
    #[serde(rename = "xl")]
    ExtraLarge,
    #[serde(rename = "xxl")]
    ExtraExtraLarge,
}

impl Breakpoint {
    /// Every breakpoint, smallest first.
    pub const ALL: [Breakpoint; 6] = [
        Breakpoint::ExtraSmall,
        Breakpoint::Small,
        Breakpoint::Medium,
        Breakpoint::Large,
        Breakpoint::ExtraLarge,
        Breakpoint::ExtraExtraLarge,
    ];

    /// Position of this breakpoint within [`Breakpoint::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// The short name used in serialized specs and class names.
    pub fn short_name(self) -> &'static str {
        match self {
            Breakpoint::ExtraSmall => "xs",
            Breakpoint::Small => "sm",
            Breakpoint::Medium => "md",
            Breakpoint::Large => "lg",
            Breakpoint::ExtraLarge => "xl",
            Breakpoint::ExtraExtraLarge => "xxl",
        }
    }

    /// The infix inserted into responsive class names (`col-md-6`).
    ///
    /// The smallest breakpoint has no infix: its classes apply everywhere (`col-6`).
    pub fn infix(self) -> Option<&'static str> {
        match self {
            Breakpoint::ExtraSmall => None,
            other => Some(other.short_name()),
        }
    }

    /// Minimum viewport width, in CSS pixels, at which this breakpoint applies.
    pub fn min_width(self) -> u32 {
        match self {
            Breakpoint::ExtraSmall => 0,
            Breakpoint::Small => 576,
            Breakpoint::Medium => 768,
            Breakpoint::Large => 992,
            Breakpoint::ExtraLarge => 1200,
            Breakpoint::ExtraExtraLarge => 1400,
        }
    }

    /// Builds a responsive class name: `prefix-value` or `prefix-infix-value`.
    pub fn class_name(self, prefix: &str, value: &str) -> String {
        match self.infix() {
            Some(infix) => format!("{prefix}-{infix}-{value}"),
            None => format!("{prefix}-{value}"),
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown breakpoint '{0}', expected one of xs, sm, md, lg, xl, xxl")]
pub struct ParseBreakpointError(pub String);

impl FromStr for Breakpoint {
    type Err = ParseBreakpointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Breakpoint::ALL
            .into_iter()
            .find(|bp| bp.short_name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseBreakpointError(s.to_string()))
    }
}
