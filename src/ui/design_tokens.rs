// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the demo stage.
//!
//! Centralized constants for colors, spacing, sizing, typography, and
//! shadows, following the W3C Design Tokens standard. Tokens are designed
//! to be consistent; keep ratios intact (e.g. MD = XS * 2) when modifying.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (blue scale)
    pub const PRIMARY_100: Color = Color::from_rgb(0.85, 0.92, 1.0); // Very light blue
    pub const PRIMARY_200: Color = Color::from_rgb(0.7, 0.84, 0.98); // Light blue
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0); // Medium light blue
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9); // Primary blue
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8); // Medium dark blue

    // Narrative colors
    /// Positive reviews and recovered state.
    pub const POSITIVE_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const POSITIVE_100: Color = Color::from_rgb(0.88, 0.97, 0.9);
    /// Negative reviews awaiting recovery.
    pub const NEGATIVE_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const NEGATIVE_100: Color = Color::from_rgb(1.0, 0.95, 0.85);
    /// Recovery gift accents.
    pub const GIFT_500: Color = Color::from_rgb(0.58, 0.4, 0.93);
    pub const GIFT_100: Color = Color::from_rgb(0.93, 0.9, 0.99);
    /// Star rating fill.
    pub const STAR_400: Color = Color::from_rgb(0.98, 0.8, 0.18);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OPAQUE: f32 = 1.0;

    /// Surface background - Semi-transparent panels and containers
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_XL: f32 = 48.0;

    // Stage components
    pub const BUBBLE_MAX_WIDTH: f32 = 320.0;
    pub const PORTAL_WIDTH: f32 = 220.0;
    pub const SPARKLINE_WIDTH: f32 = 120.0;
    pub const SPARKLINE_HEIGHT: f32 = 36.0;
    pub const STAR_SIZE: f32 = 14.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Large title - Intro heading
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - Metric values, section headers
    pub const TITLE_MD: f32 = 20.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - Customer names, badges, small info
    pub const CAPTION: f32 = 12.0;

    /// Emoji rendered inside review bubbles
    pub const EMOJI: f32 = 24.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}
