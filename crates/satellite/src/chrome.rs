//! Page chrome: header, footer, landing screen, disclaimer, history panel,
//! first-time badge, walkthrough overlay, info widget and submission mask.

use eframe::egui;

use satellite_flow_core::{BridgeState, TransferRecord};

use crate::state::{WalkthroughState, WALKTHROUGH_PAGES};
use crate::ui;

/// Returns true when the history toggle was clicked this frame.
pub fn render_header(ctx: &egui::Context, walkthrough: &mut WalkthroughState) -> bool {
    let mut history_clicked = false;
    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.heading(
                egui::RichText::new("🛰 Satellite")
                    .size(22.0)
                    .color(ui::ACCENT),
            );
            ui.add_space(30.0);
            ui.separator();
            ui.add_space(10.0);
            ui.label("Send assets across chains");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("❓ Walkthrough").clicked() {
                    walkthrough.open = true;
                    walkthrough.page = 0;
                }
                if ui.button("🕘 History").clicked() {
                    history_clicked = true;
                }
            });
        });
        ui.add_space(4.0);
    });
    history_clicked
}

pub fn render_footer(ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Satellite").small());
            ui.separator();
            ui::external_link(ui, "Docs", "https://docs.satellite.money");
            ui.separator();
            ui::external_link(ui, "Support", "https://discord.gg/satellite");
        });
        ui.add_space(4.0);
    });
}

/// Shown instead of the app while the deployment is under maintenance.
pub fn render_landing(ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(120.0);
            ui::styled_heading(ui, "Satellite is under maintenance");
            ui.add_space(10.0);
            ui.label("Transfers are paused while we upgrade the bridge. Back soon.");
            ui.add_space(10.0);
            ui::external_link(ui, "Status page", "https://status.satellite.money");
        });
    });
}

/// Returns true when the user dismissed the disclaimer this frame.
pub fn render_disclaimer(ctx: &egui::Context) -> bool {
    let mut dismissed = false;
    egui::Window::new("Before you transfer")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_TOP, [0.0, 60.0])
        .show(ctx, |ui| {
            ui.label(
                "Satellite moves real funds between chains. Deposits sent to an expired \
                 address, to the wrong chain, or in an unsupported asset cannot be recovered \
                 automatically.",
            );
            ui.add_space(6.0);
            ui.label("Double-check the destination address before depositing.");
            ui.add_space(8.0);
            if ui.button("I understand").clicked() {
                dismissed = true;
            }
        });
    dismissed
}

/// Returns true when the panel asked to close.
pub fn render_tx_history(ctx: &egui::Context, history: &[TransferRecord]) -> bool {
    let mut close = false;
    egui::Window::new("Transaction history")
        .default_width(420.0)
        .show(ctx, |ui| {
            if history.is_empty() {
                ui.label("No completed transfers in this session yet.");
            } else {
                egui::Grid::new("history_grid")
                    .num_columns(4)
                    .striped(true)
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new("Asset").strong());
                        ui.label(egui::RichText::new("Amount").strong());
                        ui.label(egui::RichText::new("From").strong());
                        ui.label(egui::RichText::new("To").strong());
                        ui.end_row();
                        for record in history {
                            ui.label(&record.asset_symbol);
                            ui.label(&record.amount);
                            ui.label(&record.source_chain);
                            ui.label(&record.destination_chain);
                            ui.end_row();
                        }
                    });
            }
            ui.add_space(8.0);
            if ui.button("Close").clicked() {
                close = true;
            }
        });
    close
}

pub fn render_first_time_badge(ctx: &egui::Context) {
    egui::Area::new(egui::Id::new("first_time_badge"))
        .anchor(egui::Align2::RIGHT_TOP, [-16.0, 48.0])
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.label(
                    egui::RichText::new("First transfer? Open the walkthrough ↗")
                        .small()
                        .color(ui::ACCENT),
                );
            });
        });
}

pub fn render_walkthrough(ctx: &egui::Context, walkthrough: &mut WalkthroughState) {
    if !walkthrough.open {
        return;
    }
    let last_page = WALKTHROUGH_PAGES.len() - 1;
    egui::Window::new("How Satellite works")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(format!(
                "Step {} of {}",
                walkthrough.page + 1,
                WALKTHROUGH_PAGES.len()
            ));
            ui.add_space(6.0);
            ui.label(WALKTHROUGH_PAGES[walkthrough.page]);
            ui.add_space(10.0);
            ui.horizontal(|ui| {
                if walkthrough.page > 0 && ui.button("Back").clicked() {
                    walkthrough.page -= 1;
                }
                if walkthrough.page < last_page {
                    if ui.button("Next").clicked() {
                        walkthrough.page += 1;
                    }
                } else if ui.button("Done").clicked() {
                    walkthrough.open = false;
                }
                if ui.button("Skip").clicked() {
                    walkthrough.open = false;
                }
            });
        });
}

pub fn render_info_widget(ctx: &egui::Context, state: &BridgeState) {
    egui::Window::new("ℹ Info")
        .default_open(false)
        .anchor(egui::Align2::LEFT_BOTTOM, [16.0, -40.0])
        .show(ctx, |ui| {
            if let (Some(src), Some(dst)) = (&state.source_chain, &state.destination_chain) {
                ui.label(format!(
                    "Route: {} → {}",
                    src.chain_name, dst.chain_name
                ));
            } else {
                ui.label("Select chains to see route details.");
            }
            ui::external_link(ui, "Fee schedule", "https://docs.satellite.money/fees");
            ui::external_link(
                ui,
                "Supported assets",
                "https://docs.satellite.money/assets",
            );
        });
}

/// Full-window translucent mask while a submission is in flight.
pub fn render_mask(ctx: &egui::Context) {
    egui::Area::new(egui::Id::new("submit_mask"))
        .fixed_pos(egui::Pos2::ZERO)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            let screen = ctx.screen_rect();
            ui.painter()
                .rect_filled(screen, 0.0, egui::Color32::from_black_alpha(160));
            ui.allocate_new_ui(egui::UiBuilder::new().max_rect(screen), |ui| {
                ui.centered_and_justified(|ui| {
                    ui.spinner();
                });
            });
        });
}
