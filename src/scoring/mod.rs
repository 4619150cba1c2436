// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how catalog items get their numbers, and their order.
//!
//! `core` turns (item, parsed query) into an additive relevance score.
//! `ranking` sorts, filters and truncates the scored candidates.

mod core;
pub mod ranking;

pub use core::*;
