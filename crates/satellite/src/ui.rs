//! UI helper components

use eframe::egui;

pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(0, 212, 170);
pub const FAILURE: egui::Color32 = egui::Color32::from_rgb(252, 68, 68);

/// Open URL in the system browser
pub fn open_url_new_tab(url: &str) {
    let _ = open::that(url);
}

/// Copy to clipboard
pub fn copy_to_clipboard(text: &str) {
    if let Ok(mut clipboard) = arboard::Clipboard::new() {
        let _ = clipboard.set_text(text);
    }
}

/// Styled heading with accent color
pub fn styled_heading(ui: &mut egui::Ui, text: &str) {
    ui.heading(egui::RichText::new(text).color(ACCENT));
}

/// Section header with separator
pub fn section_header(ui: &mut egui::Ui, text: &str) {
    ui.add_space(10.0);
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(text).strong().size(14.0));
    });
    ui.separator();
}

/// Hyperlink-styled label that opens the URL externally when clicked.
pub fn external_link(ui: &mut egui::Ui, label: &str, url: &str) {
    let response = ui
        .link(egui::RichText::new(label).color(ui.visuals().hyperlink_color))
        .on_hover_text(url.to_owned());
    if response.clicked() {
        open_url_new_tab(url);
    }
}

/// Round step marker: done, active, or pending.
pub fn step_bubble(ui: &mut egui::Ui, ordinal: u8, reached: bool, active: bool) {
    let (text, color) = if reached && !active {
        ("✔".to_owned(), ACCENT)
    } else {
        (format!("{ordinal}"), if active { ACCENT } else { egui::Color32::GRAY })
    };
    ui.label(
        egui::RichText::new(text)
            .strong()
            .size(16.0)
            .color(color),
    );
}
