//! # Header Module
//!
//! This module renders the tracker header: the "Total Balance" caption and
//! the formatted balance amount underneath it.
//!
//! The balance text color is a pure function of the balance sign: red when
//! the balance is negative, the default grey otherwise.

use eframe::egui;

use crate::ui::app_state::FinanceControlApp;
use crate::ui::components::styling::colors;

impl FinanceControlApp {
    /// Render the balance header
    pub fn render_header(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(self.config.window_title.as_str())
                        .font(egui::FontId::new(16.0, egui::FontFamily::Proportional))
                        .strong()
                        .color(colors::BALANCE_TEXT),
                )
                .selectable(false),
            );

            ui.add_space(15.0);

            ui.add(
                egui::Label::new(
                    egui::RichText::new("Total Balance")
                        .font(egui::FontId::new(11.0, egui::FontFamily::Proportional))
                        .strong()
                        .color(colors::BALANCE_TEXT),
                )
                .selectable(false),
            );

            let balance = self.backend.transaction_service.balance();
            let balance_color = if self.backend.transaction_service.balance_is_negative() {
                colors::BALANCE_NEGATIVE
            } else {
                colors::BALANCE_TEXT
            };

            ui.add(
                egui::Label::new(
                    egui::RichText::new(self.formatter.format(balance))
                        .font(egui::FontId::new(48.0, egui::FontFamily::Proportional))
                        .strong()
                        .color(balance_color),
                )
                .selectable(false),
            );
        });
    }
}
