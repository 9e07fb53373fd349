// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Daymark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Daymark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Daymark — single-day calendar timeline layout for e-ink panels.
//!
//! The pipeline is normalize → lanes → labels → density → scene, all deterministic pure
//! functions over minute-of-day intervals; everything around it (providers, rasterizers,
//! the refresh scheduler) plugs in at trait seams.

pub mod app;
pub mod calendar;
pub mod config;
pub mod display;
pub mod layout;
pub mod model;
pub mod render;
pub mod scene;
pub mod schedule;

#[cfg(test)]
mod tests {
    #[test]
    fn sanity() {
        assert_eq!(2 + 2, 4);
    }
}
