// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Daymark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Daymark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Calendar event sources.
//!
//! A [`CalendarProvider`] yields the raw events for one day; the layout engine neither knows
//! nor cares where they came from. Providers are fallible (network, auth, parsing), and the
//! app treats a failed fetch as "keep showing the last good frame".

use std::fmt;

use chrono::NaiveDate;

use crate::model::RawEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The backing source could not be reached or read.
    Unavailable(String),
    /// The source responded with something that could not be interpreted as events.
    Malformed(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(reason) => write!(f, "calendar source unavailable: {reason}"),
            Self::Malformed(reason) => write!(f, "calendar response malformed: {reason}"),
        }
    }
}

impl std::error::Error for ProviderError {}

/// Source of one day's events.
pub trait CalendarProvider {
    /// Events for `date`, in no particular order; the normalizer sorts.
    fn events_for_day(&mut self, date: NaiveDate) -> Result<Vec<RawEvent>, ProviderError>;
}

/// A provider serving a fixed event list regardless of the requested date.
///
/// Used by the demo binary and as a test double.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    events: Vec<RawEvent>,
}

impl StaticProvider {
    pub fn new(events: Vec<RawEvent>) -> Self {
        Self { events }
    }
}

impl CalendarProvider for StaticProvider {
    fn events_for_day(&mut self, _date: NaiveDate) -> Result<Vec<RawEvent>, ProviderError> {
        Ok(self.events.clone())
    }
}
