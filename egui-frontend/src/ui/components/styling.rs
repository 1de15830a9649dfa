//! # Styling Module
//!
//! This module contains the styling function and color constants for the
//! finance control app's dark theme.
//!
//! ## Key Functions:
//! - `setup_tracker_style()` - Configure global egui styling
//!
//! ## Color Palette:
//! The colors module holds the color constants used throughout the app:
//! dark window and card backgrounds, grey balance text, and the
//! teal-green/red pair used for inflows and outflows everywhere they
//! appear (buttons, table amounts, chart lines).

use eframe::egui;

/// Setup the dark tracker styling for the entire application
pub fn setup_tracker_style(ctx: &egui::Context) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        style.visuals.dark_mode = true;
        style.visuals.window_fill = colors::WINDOW_BACKGROUND;
        style.visuals.panel_fill = colors::WINDOW_BACKGROUND;
        style.visuals.button_frame = true;

        // Text edits draw on extreme_bg_color in egui 0.28
        style.visuals.extreme_bg_color = colors::PANEL_BACKGROUND;
        style.visuals.widgets.noninteractive.fg_stroke.color = colors::BALANCE_TEXT;

        // Rounded corners and padding
        style.spacing.button_padding = egui::vec2(12.0, 8.0);
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.visuals.widgets.inactive.rounding = egui::Rounding::same(8.0);
        style.visuals.widgets.active.rounding = egui::Rounding::same(8.0);
        style.visuals.widgets.hovered.rounding = egui::Rounding::same(8.0);

        style
    });
}

/// Color constants for the dark tracker theme
pub mod colors {
    use eframe::egui::Color32;

    // Window and card backgrounds
    pub const WINDOW_BACKGROUND: Color32 = Color32::from_rgb(31, 33, 40); // #1f2128
    pub const PANEL_BACKGROUND: Color32 = Color32::from_rgb(23, 24, 29); // #17181d

    // Flow colors
    pub const INFLOW: Color32 = Color32::from_rgb(38, 166, 154); // Teal green
    pub const OUTFLOW: Color32 = Color32::from_rgb(239, 83, 80); // Red

    // Balance text
    pub const BALANCE_TEXT: Color32 = Color32::from_rgb(158, 158, 158); // Grey
    pub const BALANCE_NEGATIVE: Color32 = Color32::from_rgb(239, 83, 80);
}
