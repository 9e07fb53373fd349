// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Daymark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Daymark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use smallvec::SmallVec;

use crate::model::{Event, EventId};

/// Mapping from event id to the lane separating temporally overlapping ticks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LaneAssignment {
    lanes: BTreeMap<EventId, u32>,
    lane_count: u32,
}

impl LaneAssignment {
    /// Lane for `id`; events the engine never saw default to lane 0.
    pub fn lane(&self, id: EventId) -> u32 {
        self.lanes.get(&id).copied().unwrap_or(0)
    }

    pub fn lane_count(&self) -> u32 {
        self.lane_count
    }

    pub fn iter(&self) -> impl Iterator<Item = (EventId, u32)> + '_ {
        self.lanes.iter().map(|(id, lane)| (*id, *lane))
    }
}

/// Greedy left-to-right sweep assigning each event the smallest free lane.
///
/// `events` must be sorted ascending by start time (the normalizer's output order). A lane
/// expires when its occupant ends at or before the next start, so touching intervals never
/// conflict. With start-sorted input the greedy choice is optimal: the lane count equals the
/// maximum number of simultaneously active events.
///
/// There is no upper bound on lanes; N fully overlapping events degrade to N lanes, which is
/// a rendering concern, not a layout failure.
pub fn assign_lanes(events: &[Event]) -> LaneAssignment {
    debug_assert!(
        events.windows(2).all(|pair| pair[0].start_minute() <= pair[1].start_minute()),
        "assign_lanes expects start-sorted events"
    );

    // (end_minute, lane) for events still occupying a lane. Lane counts are small in
    // practice, so a linear scan beats anything fancier.
    let mut active = SmallVec::<[(u32, u32); 8]>::new();
    let mut lanes = BTreeMap::<EventId, u32>::new();
    let mut lane_count = 0u32;

    for event in events {
        active.retain(|(end, _)| *end > event.start_minute());

        let mut lane = 0u32;
        while active.iter().any(|(_, used)| *used == lane) {
            lane += 1;
        }

        active.push((event.end_minute(), lane));
        lane_count = lane_count.max(lane + 1);
        lanes.insert(event.id(), lane);
    }

    LaneAssignment { lanes, lane_count }
}
