//! Color theme constants for the Vastra Villa UI
//!
//! Defines the boutique dark palette used throughout the UI.

use ratatui::style::Color;

// ============================================================================
// Brand Palette
// ============================================================================

/// Near-black base tone, used as the fill behind avatar initials
pub const COLOR_OBSIDIAN: Color = Color::Rgb(26, 26, 26); // #1A1A1A

/// Warm off-white for primary text
pub const COLOR_ALABASTER: Color = Color::Rgb(249, 247, 241); // #F9F7F1

/// Champagne gold accent for highlights and confirmations
pub const COLOR_CHAMPAGNE: Color = Color::Rgb(212, 184, 150); // #D4B896

/// Deep rose gold for the focus ring on form fields
pub const COLOR_ROSE_GOLD: Color = Color::Rgb(183, 110, 121); // #B76E79

/// Soft silk neutral for secondary text
pub const COLOR_SILK: Color = Color::Rgb(214, 205, 192); // #D6CDC0

// ============================================================================
// Semantic Colors
// ============================================================================

/// Primary text color
pub const COLOR_TEXT: Color = COLOR_ALABASTER;

/// Accent color for keybind hints and brand marks
pub const COLOR_ACCENT: Color = COLOR_CHAMPAGNE;

/// Border color for unfocused fields and outer frames
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Border color for the focused form field
pub const COLOR_BORDER_FOCUS: Color = COLOR_ROSE_GOLD;

/// Dim text for labels and less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Validation and request error text - muted red
pub const COLOR_ERROR: Color = Color::Rgb(224, 108, 117); // #E06C75

/// Verified state for the OTP row - champagne, matching the brand accent
pub const COLOR_VERIFIED: Color = Color::Rgb(212, 184, 150); // #D4B896

// ============================================================================
// Password Strength Colors
// ============================================================================

/// Weak password meter fill
pub const COLOR_STRENGTH_WEAK: Color = COLOR_ROSE_GOLD;

/// Medium password meter fill
pub const COLOR_STRENGTH_MEDIUM: Color = COLOR_CHAMPAGNE;

/// Strong password meter fill
pub const COLOR_STRENGTH_STRONG: Color = COLOR_ALABASTER;
