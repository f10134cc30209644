//! Swap widget: chain/asset selection, destination address entry, and the
//! deposit-address generation affordance.

use eframe::egui;

use satellite_flow_adapters::registry;
use satellite_flow_core::{can_light_up, BridgeStore, Side};

use crate::state::SwapFormState;
use crate::ui;

/// Action the app shell must carry out after this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapAction {
    None,
    GenerateDepositAddress,
}

pub fn render(
    ui_root: &mut egui::Ui,
    store: &mut BridgeStore,
    form: &mut SwapFormState,
) -> SwapAction {
    let mut action = SwapAction::None;

    ui::styled_heading(ui_root, "Transfer");
    ui_root.label("Move assets from one chain to another through a one-time deposit address.");
    ui_root.add_space(10.0);

    chain_selector(ui_root, store, Side::Source, "From:");
    asset_selector(ui_root, store);
    chain_selector(ui_root, store, Side::Destination, "To:");
    destination_address_field(ui_root, store, form);

    ui_root.add_space(10.0);
    let lit = can_light_up(store.state());
    let already_generating =
        store.state().is_submitting || store.state().deposit_address.is_some();
    let button = egui::Button::new("🚀 Generate deposit address");
    if ui_root
        .add_enabled(lit && !already_generating, button)
        .on_disabled_hover_text("Pick two distinct chains, an asset and a valid recipient first")
        .clicked()
    {
        action = SwapAction::GenerateDepositAddress;
    }

    action
}

fn chain_selector(ui_root: &mut egui::Ui, store: &mut BridgeStore, side: Side, label: &str) {
    let selected_name = store
        .state()
        .chain_selection(side)
        .map(|c| c.chain_name.clone())
        .unwrap_or_else(|| "Select chain".to_owned());
    let id = match side {
        Side::Source => "source_chain_select",
        Side::Destination => "destination_chain_select",
    };

    ui_root.horizontal(|ui_row| {
        ui_row.label(label);
        egui::ComboBox::from_id_salt(id)
            .selected_text(selected_name)
            .width(180.0)
            .show_ui(ui_row, |ui_list| {
                for chain in registry::supported_chains() {
                    let is_selected = store
                        .state()
                        .chain_selection(side)
                        .is_some_and(|c| c.chain_name == chain.chain_name);
                    if ui_list
                        .selectable_label(is_selected, &chain.chain_name)
                        .clicked()
                    {
                        store.select_chain(side, Some(chain.clone()));
                        revalidate_destination(store);
                    }
                }
            });
    });
}

fn asset_selector(ui_root: &mut egui::Ui, store: &mut BridgeStore) {
    let Some(source_chain) = store.state().source_chain.clone() else {
        return;
    };
    let selected = store
        .state()
        .source_asset
        .as_ref()
        .map(|a| a.asset_symbol.clone())
        .unwrap_or_else(|| "Select asset".to_owned());

    ui_root.horizontal(|ui_row| {
        ui_row.label("Asset:");
        egui::ComboBox::from_id_salt("source_asset_select")
            .selected_text(selected)
            .width(180.0)
            .show_ui(ui_row, |ui_list| {
                for asset in registry::assets_for_chain(&source_chain) {
                    let is_selected = store
                        .state()
                        .source_asset
                        .as_ref()
                        .is_some_and(|a| a.asset_symbol == asset.asset_symbol);
                    if ui_list
                        .selectable_label(is_selected, &asset.asset_symbol)
                        .clicked()
                    {
                        store.update(|s| s.source_asset = Some(asset.clone()));
                    }
                }
            });
    });
}

fn destination_address_field(
    ui_root: &mut egui::Ui,
    store: &mut BridgeStore,
    form: &mut SwapFormState,
) {
    ui_root.horizontal(|ui_row| {
        ui_row.label("Recipient:");
        let response = ui_row.add(
            egui::TextEdit::singleline(&mut form.destination_address_input)
                .hint_text("Destination address")
                .desired_width(420.0)
                .font(egui::TextStyle::Monospace),
        );
        if response.changed() {
            let input = form.destination_address_input.clone();
            let valid = crate::state::validate_destination_address(
                store.state().destination_chain.as_ref(),
                &input,
            );
            store.update(|s| {
                s.destination_address = if input.is_empty() { None } else { Some(input) };
                s.destination_address_valid = valid;
            });
        }
        if !form.destination_address_input.is_empty() {
            if store.state().destination_address_valid {
                ui_row.label(egui::RichText::new("✔").color(ui::ACCENT));
            } else {
                ui_row.label(egui::RichText::new("✖").color(ui::FAILURE));
            }
        }
    });
}

/// Chain switches can invalidate a previously valid recipient.
fn revalidate_destination(store: &mut BridgeStore) {
    let valid = match &store.state().destination_address {
        Some(address) => crate::state::validate_destination_address(
            store.state().destination_chain.as_ref(),
            address,
        ),
        None => false,
    };
    if store.state().destination_address_valid != valid {
        store.update(|s| s.destination_address_valid = valid);
    }
}
