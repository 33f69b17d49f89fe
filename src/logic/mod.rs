// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Business logic: the master-mix calculation engine and the report formatter.

pub mod mastermix;
pub mod report;
