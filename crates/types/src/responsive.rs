//! Partially-specified per-breakpoint values and their cascade into concrete mappings.
//!
//! A [`ResponsiveValues`] supplies an optional value per [`Breakpoint`]. Resolving it walks the
//! breakpoints smallest first, carrying the most recent explicit value forward so that a
//! breakpoint without its own value inherits from the nearest smaller one that has one.
//!
//! Two resolution modes exist:
//!
//! - [`ResponsiveValues::cascade`] omits breakpoints that have nothing to inherit from. This is
//!   what class-list generation wants: `col-md-6` already applies to every larger viewport.
//! - [`ResponsiveValues::resolve_with`] fills those leading breakpoints with a caller default,
//!   producing a complete mapping suitable for style objects.

use crate::breakpoint::Breakpoint;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A partial breakpoint spec: any subset of breakpoints may carry a value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResponsiveValues<T> {
    #[serde(rename = "xs", default, skip_serializing_if = "Option::is_none")]
    extra_small: Option<T>,
    #[serde(rename = "sm", default, skip_serializing_if = "Option::is_none")]
    small: Option<T>,
    #[serde(rename = "md", default, skip_serializing_if = "Option::is_none")]
    medium: Option<T>,
    #[serde(rename = "lg", default, skip_serializing_if = "Option::is_none")]
    large: Option<T>,
    #[serde(rename = "xl", default, skip_serializing_if = "Option::is_none")]
    extra_large: Option<T>,
    #[serde(rename = "xxl", default, skip_serializing_if = "Option::is_none")]
    extra_extra_large: Option<T>,
}

impl<T> Default for ResponsiveValues<T> {
    fn default() -> Self {
        Self {
            extra_small: None,
            small: None,
            medium: None,
            large: None,
            extra_large: None,
            extra_extra_large: None,
        }
    }
}

impl<T> ResponsiveValues<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The value explicitly supplied for `breakpoint`, without any cascading.
    pub fn get(&self, breakpoint: Breakpoint) -> Option<&T> {
        match breakpoint {
            Breakpoint::ExtraSmall => self.extra_small.as_ref(),
            Breakpoint::Small => self.small.as_ref(),
            Breakpoint::Medium => self.medium.as_ref(),
            Breakpoint::Large => self.large.as_ref(),
            Breakpoint::ExtraLarge => self.extra_large.as_ref(),
            Breakpoint::ExtraExtraLarge => self.extra_extra_large.as_ref(),
        }
    }

    fn slot_mut(&mut self, breakpoint: Breakpoint) -> &mut Option<T> {
        match breakpoint {
            Breakpoint::ExtraSmall => &mut self.extra_small,
            Breakpoint::Small => &mut self.small,
            Breakpoint::Medium => &mut self.medium,
            Breakpoint::Large => &mut self.large,
            Breakpoint::ExtraLarge => &mut self.extra_large,
            Breakpoint::ExtraExtraLarge => &mut self.extra_extra_large,
        }
    }

    pub fn set(&mut self, breakpoint: Breakpoint, value: T) {
        *self.slot_mut(breakpoint) = Some(value);
    }

    pub fn unset(&mut self, breakpoint: Breakpoint) -> Option<T> {
        self.slot_mut(breakpoint).take()
    }

    pub fn with(mut self, breakpoint: Breakpoint, value: T) -> Self {
        self.set(breakpoint, value);
        self
    }

    pub fn xs(self, value: T) -> Self {
        self.with(Breakpoint::ExtraSmall, value)
    }

    pub fn sm(self, value: T) -> Self {
        self.with(Breakpoint::Small, value)
    }

    pub fn md(self, value: T) -> Self {
        self.with(Breakpoint::Medium, value)
    }

    pub fn lg(self, value: T) -> Self {
        self.with(Breakpoint::Large, value)
    }

    pub fn xl(self, value: T) -> Self {
        self.with(Breakpoint::ExtraLarge, value)
    }

    pub fn xxl(self, value: T) -> Self {
        self.with(Breakpoint::ExtraExtraLarge, value)
    }

    /// Explicitly supplied values, smallest breakpoint first.
    pub fn explicit(&self) -> impl Iterator<Item = (Breakpoint, &T)> + '_ {
        Breakpoint::ALL
            .into_iter()
            .filter_map(move |bp| self.get(bp).map(|value| (bp, value)))
    }

    pub fn is_empty(&self) -> bool {
        self.explicit().next().is_none()
    }
}

impl<T: Clone> ResponsiveValues<T> {
    /// The single left-to-right fold both resolution modes share.
    ///
    /// `fallback` is only consulted while no explicit value has been seen yet.
    fn fold<F>(&self, mut fallback: F) -> ResolvedBreakpoints<T>
    where
        F: FnMut(Breakpoint) -> Option<T>,
    {
        let mut last_value: Option<&T> = None;
        let mut entries = Vec::with_capacity(Breakpoint::ALL.len());

        for breakpoint in Breakpoint::ALL {
            if let Some(value) = self.get(breakpoint) {
                entries.push((breakpoint, value.clone()));
                last_value = Some(value);
            } else if let Some(value) = last_value {
                entries.push((breakpoint, value.clone()));
            } else if let Some(value) = fallback(breakpoint) {
                entries.push((breakpoint, value));
            }
        }

        ResolvedBreakpoints { entries }
    }

    /// Cascaded-only resolution: breakpoints smaller than the first explicit value are omitted.
    pub fn cascade(&self) -> ResolvedBreakpoints<T> {
        self.fold(|_| None)
    }

    /// Defaulted resolution: every breakpoint is present. Breakpoints with nothing to inherit
    /// from take `default(breakpoint)`.
    pub fn resolve_with<F>(&self, mut default: F) -> ResolvedBreakpoints<T>
    where
        F: FnMut(Breakpoint) -> T,
    {
        self.fold(|bp| Some(default(bp)))
    }

    pub fn resolve_or(&self, default: T) -> ResolvedBreakpoints<T> {
        self.resolve_with(|_| default.clone())
    }
}

impl<T: Clone + PartialEq> ResponsiveValues<T> {
    /// The breakpoints at which the cascaded value actually changes.
    ///
    /// Re-stating an inherited value (`xs: 6, md: 6`) produces no transition at `md`.
    pub fn transitions(&self) -> Vec<(Breakpoint, T)> {
        let mut transitions: Vec<(Breakpoint, T)> = Vec::new();
        for (breakpoint, value) in self.cascade() {
            let unchanged = transitions
                .last()
                .is_some_and(|(_, previous)| *previous == value);
            if !unchanged {
                transitions.push((breakpoint, value));
            }
        }
        transitions
    }
}

impl<T: Clone + PartialEq + fmt::Display> ResponsiveValues<T> {
    /// Minimal responsive class list, e.g. `["col-12", "col-md-6"]` for prefix `col`.
    pub fn class_names(&self, prefix: &str) -> Vec<String> {
        self.transitions()
            .into_iter()
            .map(|(breakpoint, value)| breakpoint.class_name(prefix, &value.to_string()))
            .collect()
    }
}

impl<T> From<T> for ResponsiveValues<T> {
    /// A single value applied from the smallest breakpoint upwards.
    fn from(value: T) -> Self {
        Self::new().with(Breakpoint::ExtraSmall, value)
    }
}

impl<T> FromIterator<(Breakpoint, T)> for ResponsiveValues<T> {
    fn from_iter<I: IntoIterator<Item = (Breakpoint, T)>>(iter: I) -> Self {
        let mut values = Self::new();
        for (breakpoint, value) in iter {
            values.set(breakpoint, value);
        }
        values
    }
}

/// A resolved, ascending mapping from breakpoint to a concrete value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ResolvedBreakpoints<T> {
    entries: Vec<(Breakpoint, T)>,
}

impl<T> ResolvedBreakpoints<T> {
    pub fn get(&self, breakpoint: Breakpoint) -> Option<&T> {
        self.entries
            .iter()
            .find(|(bp, _)| *bp == breakpoint)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Breakpoint, &T)> + '_ {
        self.entries.iter().map(|(bp, value)| (*bp, value))
    }

    pub fn breakpoints(&self) -> impl Iterator<Item = Breakpoint> + '_ {
        self.entries.iter().map(|(bp, _)| *bp)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_vec(self) -> Vec<(Breakpoint, T)> {
        self.entries
    }
}

impl<T> IntoIterator for ResolvedBreakpoints<T> {
    type Item = (Breakpoint, T);
    type IntoIter = std::vec::IntoIter<(Breakpoint, T)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
