// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Domain layer: list operations, interceptors, and declarative configuration,
//! shared between the UI components and the form model.

pub mod config;
pub mod interceptors;
pub mod item_list;
