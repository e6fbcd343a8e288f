//! Color theme constants for the Etalage UI
//!
//! Defines the warm dark palette used throughout the page.

use ratatui::style::Color;

// ============================================================================
// Base Palette
// ============================================================================

/// Section borders - dark gray, kept quiet next to the orange accent
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Body text color - warm off-white
pub const COLOR_TEXT: Color = Color::Rgb(225, 220, 210);

/// Section title color - white
pub const COLOR_TITLE: Color = Color::White;

/// Accent color - brand orange for highlights and calls to action
pub const COLOR_ACCENT: Color = Color::Rgb(240, 130, 40); // oranje #F08228

/// Softer accent for hovered elements
pub const COLOR_HOVER: Color = Color::Rgb(255, 170, 90);

/// De-emphasized text: hints, placeholders, the footer line
pub const COLOR_DIM: Color = Color::DarkGray;

/// Background for the form input fields - near-black with a warm cast
pub const COLOR_INPUT_BG: Color = Color::Rgb(28, 24, 18);

// ============================================================================
// Chart Colors
// ============================================================================

/// Plotted line color - brand orange (same as accent for consistency)
pub const COLOR_CHART_LINE: Color = Color::Rgb(240, 130, 40); // oranje #F08228

/// Fill under the line - darkened orange
pub const COLOR_CHART_AREA: Color = Color::Rgb(110, 60, 20);

/// Data point markers - light orange
pub const COLOR_CHART_POINT: Color = Color::Rgb(255, 180, 90);

/// Axis labels and gridline color
pub const COLOR_CHART_AXIS: Color = Color::DarkGray;

// ============================================================================
// Bubble Colors
// ============================================================================

/// Bubble border and label - teal, set off against the orange accent
pub const COLOR_BUBBLE: Color = Color::Rgb(70, 160, 185);

/// Expanding pulse ring after a bubble press - light teal
pub const COLOR_PULSE: Color = Color::Rgb(130, 205, 225);

// ============================================================================
// Status Colors
// ============================================================================

/// Success messages and the confirmation dialog border
pub const COLOR_SUCCESS: Color = Color::LightGreen;

/// Error messages in the status bar
pub const COLOR_ERROR: Color = Color::Red;

/// Background color for the confirmation dialog
pub const COLOR_DIALOG_BG: Color = Color::Rgb(25, 20, 12);
