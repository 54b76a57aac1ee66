// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Reusable egui components structured for MVU-style updates.

pub mod confirm;
pub mod dropdown;
pub mod field;
pub mod rich_list;
pub mod rich_list_field;

#[cfg(test)]
pub(crate) mod testing;
