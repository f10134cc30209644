//! Status window: renders the four-step view model with copy, link, wallet
//! and add-token affordances.

use std::sync::{Arc, Mutex};

use eframe::egui;

use satellite_flow_adapters::registry;
use satellite_flow_core::{
    build_status_list, BridgeState, ChainModule, ConfirmView, DepositFollowUp, DepositView,
    StepBody, StepperInputs, TokenDetails, TransferView, WalletPrompt,
};

use crate::flow_bridge::{FlowBridge, WalletConnectResult};
use crate::ui;

pub fn render(
    ui_root: &mut egui::Ui,
    ctx: &egui::Context,
    state: &BridgeState,
    bridge: &FlowBridge,
    recovery_revealed: bool,
    wallet_mailbox: &Arc<Mutex<Option<WalletConnectResult>>>,
) {
    ui::section_header(ui_root, "Transfer status");

    let config = bridge.config();
    let source_explorer = state
        .source_chain
        .as_ref()
        .and_then(|c| config.block_explorer(&c.chain_name));
    let destination_explorer = state
        .destination_chain
        .as_ref()
        .and_then(|c| config.block_explorer(&c.chain_name));
    let min_deposit = match (&state.source_asset, &state.source_chain, &state.destination_chain) {
        (Some(asset), Some(src), Some(dst)) => registry::min_deposit_amount(asset, src, dst),
        _ => None,
    };
    let watchable_token = resolve_watchable_token(state, config);

    let inputs = StepperInputs {
        active_step: state.active_step,
        wallet_connected: state.wallet_connected,
        source_chain: state.source_chain.as_ref(),
        destination_chain: state.destination_chain.as_ref(),
        source_asset: state.source_asset.as_ref(),
        destination_address: state.destination_address.as_deref(),
        deposit_address: state.deposit_address.as_ref(),
        source_confirmations: Some(&state.source_confirmations),
        destination_confirmations: Some(&state.destination_confirmations),
        deposit_tx_hash: state.deposit_tx_hash.as_deref(),
        broadcast_result: state.broadcast_result.as_ref(),
        recovery_revealed,
        source_explorer: source_explorer.as_ref(),
        destination_explorer: destination_explorer.as_ref(),
        broadcast_explorer_base: Some(config.broadcast_tx_url_base()),
        recovery_tool_url: Some(config.recovery_tool_url()),
        min_deposit_amount: min_deposit.as_ref(),
        watchable_token: watchable_token.as_ref(),
    };
    let view = build_status_list(&inputs);

    for row in &view.rows {
        let active = state.active_step == row.step;
        ui_root.add_space(6.0);
        ui_root.horizontal_top(|ui_row| {
            ui::step_bubble(ui_row, row.step.ordinal(), row.reached, active);
            ui_row.add_space(6.0);
            ui_row.vertical(|ui_body| match &row.body {
                StepBody::Generate(generate) => {
                    ui_body.horizontal_wrapped(|ui_line| {
                        ui_line.label("Generating a one-time deposit address for");
                        ui_line.label(egui::RichText::new(&generate.asset_symbol).strong());
                        ui_line.label("recipient:");
                        ui_line.label(
                            egui::RichText::new(&generate.recipient_short)
                                .strong()
                                .monospace(),
                        );
                    });
                }
                StepBody::Deposit(deposit) => {
                    render_deposit(ui_body, ctx, deposit, bridge, wallet_mailbox);
                }
                StepBody::Confirm(confirm) => render_confirm(ui_body, confirm),
                StepBody::Transfer(transfer) => render_transfer(ui_body, transfer, bridge),
            });
        });
    }
}

fn resolve_watchable_token(
    state: &BridgeState,
    config: &satellite_flow_adapters::DeploymentConfig,
) -> Option<TokenDetails> {
    let destination = state.destination_chain.as_ref()?;
    if destination.module != ChainModule::Evm {
        return None;
    }
    let asset = state.source_asset.as_ref()?;
    let address = config.token_address(&destination.chain_name, &asset.asset_symbol)?;
    Some(TokenDetails {
        address,
        symbol: asset.asset_symbol.clone(),
        decimals: asset.decimals,
    })
}

fn render_deposit(
    ui_body: &mut egui::Ui,
    ctx: &egui::Context,
    deposit: &DepositView,
    bridge: &FlowBridge,
    wallet_mailbox: &Arc<Mutex<Option<WalletConnectResult>>>,
) {
    match deposit {
        DepositView::Waiting => {
            ui_body.label("Waiting for your deposit into a temporary deposit account.");
        }
        DepositView::Ready {
            address,
            address_short,
            follow_up,
        } => {
            ui_body.horizontal(|ui_line| {
                ui_line.label("Deposit address:");
                ui_line.label(egui::RichText::new(address_short).strong().monospace());
                if ui_line
                    .small_button("📋")
                    .on_hover_text(
                        "Advanced Usage: Copy this address to make this deposit from outside Satellite.",
                    )
                    .clicked()
                {
                    ui::copy_to_clipboard(address);
                }
            });
            match follow_up {
                DepositFollowUp::ExplorerLink(link) => {
                    ui::external_link(ui_body, &link.label, &link.url);
                }
                DepositFollowUp::WalletPrompt(prompt) => {
                    render_wallet_prompt(ui_body, ctx, prompt, bridge, wallet_mailbox);
                }
                DepositFollowUp::None => {}
            }
        }
    }
}

fn render_wallet_prompt(
    ui_body: &mut egui::Ui,
    ctx: &egui::Context,
    prompt: &WalletPrompt,
    bridge: &FlowBridge,
    wallet_mailbox: &Arc<Mutex<Option<WalletConnectResult>>>,
) {
    ui_body.horizontal(|ui_line| {
        ui_line.label(&prompt.lead_in);
        for (index, option) in prompt.options.iter().enumerate() {
            if index > 0 {
                ui_line.label("OR");
            }
            if ui_line.button(&option.label).clicked() {
                bridge.connect_wallet(option.wallet, Arc::clone(wallet_mailbox), ctx.clone());
            }
        }
    });
    if let Some(note) = &prompt.native_wrap_note {
        ui_body.label(egui::RichText::new(note).italics().small());
    }
}

fn render_confirm(ui_body: &mut egui::Ui, confirm: &ConfirmView) {
    match confirm {
        ConfirmView::Confirmed {
            amount,
            after_fees,
            asset_symbol,
            destination_chain,
            eta_minutes,
            broadcast_link,
        } => {
            ui_body.horizontal_wrapped(|ui_line| {
                ui_line.label(
                    egui::RichText::new(format!("{amount} {asset_symbol}")).strong(),
                );
                ui_line.label("deposit confirmed. Sending");
            });
            ui_body.horizontal_wrapped(|ui_line| {
                ui_line.label(
                    egui::RichText::new(format!("{after_fees} {asset_symbol}")).strong(),
                );
                ui_line.label(format!(
                    "to {destination_chain} within the next ~{eta_minutes} min."
                ));
            });
            if let Some(link) = broadcast_link {
                ui::external_link(ui_body, &link.label, &link.url);
            }
        }
        ConfirmView::RecoveryAvailable { tool_url } => {
            ui_body.label("This is taking longer than expected...");
            if ui_body.button("Open our Deposit Recovery Tool").clicked() {
                ui::open_url_new_tab(tool_url);
            }
        }
        ConfirmView::BroadcastFailed { link } => {
            let response = ui_body.link(
                egui::RichText::new(&link.label).color(ui::FAILURE),
            );
            if response.clicked() {
                ui::open_url_new_tab(&link.url);
            }
        }
        ConfirmView::Detecting { source_chain } => {
            ui_body.label(format!("Detecting your deposit on {source_chain}."));
        }
    }
}

fn render_transfer(ui_body: &mut egui::Ui, transfer: &TransferView, bridge: &FlowBridge) {
    match transfer {
        TransferView::Detecting { destination_chain } => {
            ui_body.label(format!("Detecting your transfer on {destination_chain}"));
        }
        TransferView::Completed {
            link,
            explorer_name,
            add_token,
        } => {
            ui_body.horizontal_wrapped(|ui_line| {
                ui_line.label("Transaction completed - see it");
                ui::external_link(ui_line, &link.label, &link.url);
                ui_line.label(format!("on {explorer_name}!"));
                if let Some(token) = add_token {
                    if ui_line
                        .small_button("🦊")
                        .on_hover_text("Add to Metamask")
                        .clicked()
                    {
                        bridge.add_token_to_wallet(token.clone());
                    }
                }
            });
        }
        TransferView::CompletedNoExplorer => {
            ui_body.label("Transfer Completed!");
        }
    }
}
