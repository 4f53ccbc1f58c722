// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation file loading, and string formatting.
//!
//! Review fixture text and the manager apology are sample content, not UI
//! chrome, so they deliberately stay unlocalized.

pub mod fluent;
