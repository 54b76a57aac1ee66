// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Shared helper utilities reused by UI components.

pub mod search;

/// Accent- and case-insensitive search matching.
pub use search::matches_query;
