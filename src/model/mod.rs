// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Daymark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Daymark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Event data model for the day view.
//!
//! Everything here is recomputed from scratch on every render cycle; nothing in the model
//! persists between cycles.

pub mod event;
pub mod fixtures;

pub use event::{minute_of_day, DayWindow, Event, EventId, RawEvent};
