use eframe::egui;
use egui_extras::{Column, TableBuilder};
use shared::{CurrencyFormatter, Transaction, TransactionDirection};

use crate::ui::components::styling::colors;

/// Render the transaction table
pub fn render_transaction_table(
    ui: &mut egui::Ui,
    transactions: &[Transaction],
    formatter: &CurrencyFormatter,
) {
    if transactions.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(10.0);
            ui.label(
                egui::RichText::new("No transactions yet")
                    .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
                    .color(colors::BALANCE_TEXT),
            );
        });
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .resizable(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::exact(160.0)) // TIMESTAMP column
        .column(Column::remainder()) // AMOUNT column
        .header(35.0, |mut header| {
            header.col(|ui| {
                ui.add_space(8.0);
                ui.colored_label(
                    colors::BALANCE_TEXT,
                    egui::RichText::new("Timestamp")
                        .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
                        .strong(),
                );
            });
            header.col(|ui| {
                ui.add_space(8.0);
                ui.colored_label(
                    colors::BALANCE_TEXT,
                    egui::RichText::new("Amount")
                        .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
                        .strong(),
                );
            });
        })
        .body(|mut body| {
            for transaction in transactions {
                body.row(40.0, |mut row| {
                    row.col(|ui| {
                        ui.add_space(8.0);
                        ui.label(
                            egui::RichText::new(format_timestamp(transaction.timestamp))
                                .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
                                .color(colors::BALANCE_TEXT),
                        );
                    });

                    // Amount column colored by flow direction
                    row.col(|ui| {
                        ui.add_space(8.0);
                        let amount_color = match transaction.direction {
                            TransactionDirection::Inflow => colors::INFLOW,
                            TransactionDirection::Outflow => colors::OUTFLOW,
                        };
                        ui.colored_label(
                            amount_color,
                            egui::RichText::new(formatter.format(transaction.amount))
                                .font(egui::FontId::new(14.0, egui::FontFamily::Proportional))
                                .strong(),
                        );
                    });
                });
            }
        });
}

/// Format an epoch-seconds timestamp as local wall-clock time
fn format_timestamp(timestamp: i64) -> String {
    match chrono::DateTime::from_timestamp(timestamp, 0) {
        Some(datetime) => datetime
            .with_timezone(&chrono::Local)
            .format("%H:%M:%S")
            .to_string(),
        None => timestamp.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp_falls_back_to_raw_seconds() {
        // Out-of-range timestamps render as the raw number
        assert_eq!(format_timestamp(i64::MAX), i64::MAX.to_string());
    }

    #[test]
    fn test_format_timestamp_renders_wall_clock() {
        let formatted = format_timestamp(1_702_516_122);
        assert_eq!(formatted.len(), 8);
        assert_eq!(formatted.matches(':').count(), 2);
    }
}
