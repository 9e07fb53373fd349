// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Daymark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Daymark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The timeline layout engine.
//!
//! Every function here is a deterministic pure function over its inputs: normalize raw events,
//! assign lanes to overlapping intervals, place labels without collisions, summarize coverage
//! density. The engine is total over its documented input domain and never fails.

pub mod density;
pub mod labels;
pub mod lanes;
pub mod normalize;

pub use density::{density_profile, DensityProfile};
pub use labels::{place_labels, LabelParams, LabelPlacement, LabelSlot};
pub use lanes::{assign_lanes, LaneAssignment};
pub use normalize::normalize_events;
