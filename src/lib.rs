// File: lib.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

#![allow(clippy::uninlined_format_args)]
#![allow(clippy::bool_assert_comparison)]

pub mod classifier;
pub mod cli;
pub mod config;
pub mod error;
pub mod errorlog;
pub mod getstate;
pub mod http;
pub mod httpinner;
pub mod payload;
pub mod recorder;
pub mod report;
pub mod runner;

#[cfg(test)]
mod config_tests;
