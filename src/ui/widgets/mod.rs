// SPDX-License-Identifier: MPL-2.0
//! Custom Iced widgets used by the stage.

pub mod sparkline;

pub use sparkline::Sparkline;
