// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Daymark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Daymark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::EventId;

/// Tunables for label placement, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelParams {
    box_height: i32,
    min_gap: i32,
    max_top: i32,
}

impl LabelParams {
    /// `max_top` is `canvas_height - box_height`: the largest legal label top.
    pub fn new(box_height: i32, min_gap: i32, max_top: i32) -> Self {
        Self { box_height, min_gap, max_top }
    }

    pub fn box_height(&self) -> i32 {
        self.box_height
    }

    pub fn min_gap(&self) -> i32 {
        self.min_gap
    }

    pub fn max_top(&self) -> i32 {
        self.max_top
    }
}

/// Where a single label landed: its horizontal column and resolved vertical top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LabelSlot {
    column: u32,
    top: i32,
}

impl LabelSlot {
    pub fn column(&self) -> u32 {
        self.column
    }

    pub fn top(&self) -> i32 {
        self.top
    }
}

/// Mapping from event id to its label slot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LabelPlacement {
    slots: BTreeMap<EventId, LabelSlot>,
    column_count: u32,
}

impl LabelPlacement {
    pub fn slot(&self, id: EventId) -> Option<LabelSlot> {
        self.slots.get(&id).copied()
    }

    pub fn column_count(&self) -> u32 {
        self.column_count
    }

    pub fn iter(&self) -> impl Iterator<Item = (EventId, LabelSlot)> + '_ {
        self.slots.iter().map(|(id, slot)| (*id, *slot))
    }
}

/// Places labels so that no two labels in the same column overlap vertically.
///
/// `desired_tops` pairs each event with the pixel y of its tick start, in chronological
/// order (the normalizer's sort). Three passes:
///
/// 1. **Clustering**: labels sorted by desired top are greedily grouped whenever the next
///    top would intrude into the running cluster bottom plus `min_gap`.
/// 2. **Fan columns**: within a cluster of size `k`, the chronologically first label gets
///    column `k - 1` and the last column `0` — later events in a collision cluster sit
///    nearer the axis, earlier ones are pushed outward.
/// 3. **Vertical resolution**: per column, walk top-to-bottom enforcing
///    `top = max(desired, previous_bottom + min_gap)`, clamped to `[0, max_top]`.
///
/// The bounded-canvas clamp takes precedence over spacing: under extreme density labels
/// degrade to tightly packed, clipped boxes rather than escaping the canvas.
pub fn place_labels(desired_tops: &[(EventId, i32)], params: LabelParams) -> LabelPlacement {
    let mut sorted = desired_tops.to_vec();
    sorted.sort_by_key(|(_, top)| *top);

    // Pass 1: disjoint clusters of labels that would collide at their desired positions.
    let mut clusters = Vec::<Vec<(EventId, i32)>>::new();
    let mut current = Vec::<(EventId, i32)>::new();
    let mut current_bottom = i32::MIN / 2;
    for (id, top) in sorted {
        if current.is_empty() {
            current.push((id, top));
            current_bottom = top + params.box_height;
            continue;
        }
        if top < current_bottom + params.min_gap {
            current.push((id, top));
            current_bottom = current_bottom.max(top + params.box_height);
        } else {
            clusters.push(std::mem::take(&mut current));
            current.push((id, top));
            current_bottom = top + params.box_height;
        }
    }
    if !current.is_empty() {
        clusters.push(current);
    }

    // Pass 2: fan column assignment within each cluster.
    let mut columns = BTreeMap::<EventId, u32>::new();
    let mut column_count = 0u32;
    for cluster in &clusters {
        let k = cluster.len() as u32;
        column_count = column_count.max(k);
        for (position, (id, _)) in cluster.iter().enumerate() {
            columns.insert(*id, k - 1 - position as u32);
        }
    }

    // Pass 3: per-column vertical stacking. Cluster traversal order is top-sorted, so each
    // column's labels arrive already ordered by desired top.
    let mut by_column = BTreeMap::<u32, Vec<(EventId, i32)>>::new();
    for cluster in &clusters {
        for (id, top) in cluster {
            let column = columns[id];
            by_column.entry(column).or_default().push((*id, *top));
        }
    }

    let max_top = params.max_top.max(0);
    let mut slots = BTreeMap::<EventId, LabelSlot>::new();
    for (column, labels) in by_column {
        let mut labels = labels;
        labels.sort_by_key(|(_, top)| *top);
        let mut last_bottom = i32::MIN / 2;
        for (id, desired) in labels {
            let top = desired.max(last_bottom + params.min_gap).clamp(0, max_top);
            last_bottom = top + params.box_height;
            slots.insert(id, LabelSlot { column, top });
        }
    }

    LabelPlacement { slots, column_count }
}
