//! # Money Controls Module
//!
//! The input row of the tracker: a subtract button, the amount field, and
//! an add button. Clicking add records an inflow, clicking subtract an
//! outflow; Enter in the field submits as an inflow.
//!
//! After every submission (accepted or rejected) the field is cleared and
//! refocused, matching the tracker's single-field workflow.

use eframe::egui;
use shared::TransactionDirection;

use crate::ui::app_state::FinanceControlApp;
use crate::ui::components::styling::colors;

impl FinanceControlApp {
    /// Render the subtract / amount / add row and handle submissions
    pub fn render_money_controls(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.horizontal(|ui| {
                // Center the row inside the panel
                let row_width = 36.0 + 8.0 + 220.0 + 8.0 + 36.0;
                ui.add_space((ui.available_width() - row_width).max(0.0) / 2.0);

                let subtract_clicked = ui
                    .add(flow_button("−", colors::OUTFLOW))
                    .on_hover_text("Subtract from balance")
                    .clicked();

                let field = ui.add(
                    egui::TextEdit::singleline(&mut self.amount_input)
                        .hint_text("Amount")
                        .desired_width(220.0)
                        .font(egui::FontId::new(16.0, egui::FontFamily::Proportional)),
                );

                if self.focus_amount_input {
                    field.request_focus();
                    self.focus_amount_input = false;
                }

                let enter_pressed =
                    field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                let add_clicked = ui
                    .add(flow_button("+", colors::INFLOW))
                    .on_hover_text("Add to balance")
                    .clicked();

                if add_clicked || enter_pressed {
                    self.submit_amount(TransactionDirection::Inflow);
                }
                if subtract_clicked {
                    self.submit_amount(TransactionDirection::Outflow);
                }
            });
        });
    }
}

/// Build one of the round add/subtract buttons
fn flow_button(label: &str, color: egui::Color32) -> egui::Button<'_> {
    egui::Button::new(
        egui::RichText::new(label)
            .font(egui::FontId::new(18.0, egui::FontFamily::Proportional))
            .strong()
            .color(color),
    )
    .fill(colors::WINDOW_BACKGROUND)
    .rounding(egui::Rounding::same(10.0))
    .min_size(egui::vec2(36.0, 36.0))
}
