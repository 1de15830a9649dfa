use eframe::egui;

use crate::ui::app_state::FinanceControlApp;
use crate::ui::components::chart_renderer::render_flow_chart;
use crate::ui::components::styling::colors;
use crate::ui::components::transaction_table::render_transaction_table;

impl eframe::App for FinanceControlApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Tracker panel on the left, charts fill the rest
        egui::SidePanel::left("tracker_panel")
            .exact_width(440.0)
            .resizable(false)
            .frame(
                egui::Frame::none()
                    .fill(colors::WINDOW_BACKGROUND)
                    .inner_margin(egui::Margin::same(20.0)),
            )
            .show(ctx, |ui| {
                self.render_tracker_panel(ui);
            });

        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(colors::WINDOW_BACKGROUND)
                    .inner_margin(egui::Margin::same(20.0)),
            )
            .show(ctx, |ui| {
                self.render_charts_column(ui);
            });
    }
}

impl FinanceControlApp {
    /// Render the balance header, input controls, and transaction table
    fn render_tracker_panel(&mut self, ui: &mut egui::Ui) {
        egui::Frame::none()
            .fill(colors::PANEL_BACKGROUND)
            .rounding(egui::Rounding::same(10.0))
            .inner_margin(egui::Margin::same(20.0))
            .show(ui, |ui| {
                ui.set_min_size(ui.available_size());

                self.render_header(ui);
                ui.add_space(25.0);
                self.render_money_controls(ui);
                ui.add_space(25.0);

                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        render_transaction_table(
                            ui,
                            self.backend.transaction_service.transactions(),
                            &self.formatter,
                        );
                    });
            });
    }

    /// Render the inflow chart stacked above the outflow chart
    fn render_charts_column(&mut self, ui: &mut egui::Ui) {
        let spacing = 20.0;
        let card_height = (ui.available_height() - spacing) / 2.0;
        let series = self.backend.transaction_service.series();

        egui::Frame::none()
            .fill(colors::PANEL_BACKGROUND)
            .rounding(egui::Rounding::same(10.0))
            .inner_margin(egui::Margin::same(30.0))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                render_flow_chart(
                    ui,
                    "inflow_chart",
                    series.inflow(),
                    colors::INFLOW,
                    card_height - 60.0,
                );
            });

        ui.add_space(spacing);

        egui::Frame::none()
            .fill(colors::PANEL_BACKGROUND)
            .rounding(egui::Rounding::same(10.0))
            .inner_margin(egui::Margin::same(30.0))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                render_flow_chart(
                    ui,
                    "outflow_chart",
                    series.outflow(),
                    colors::OUTFLOW,
                    card_height - 60.0,
                );
            });
    }
}
