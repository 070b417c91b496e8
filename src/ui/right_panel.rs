use eframe::egui;

use super::app::PromApp;
use crate::engine::tutor::EXAMPLE_QUESTIONS;

pub fn draw_right_panel(ctx: &egui::Context, app: &mut PromApp) {
    if !app.ui.tutor_open {
        egui::Area::new(egui::Id::new("tutor_launcher"))
            .anchor(egui::Align2::RIGHT_BOTTOM, [-16.0, -16.0])
            .show(ctx, |ui| {
                if ui.button("🌱 Ask the Earth").clicked() {
                    app.ui.tutor_open = true;
                }
            });
        return;
    }

    let input_id = egui::Id::new("tutor_input_box");
    let mut picked: Option<String> = None;
    let mut send_now = false;

    egui::SidePanel::right("tutor")
        .resizable(true)
        .default_width(320.0)
        .min_width(260.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("🌱 Ask the Earth");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("✖").on_hover_text("Minimize chat").clicked() {
                        app.ui.tutor_open = false;
                    }
                });
            });
            ui.separator();

            // ---------- Chat history ----------
            let history_height = (ui.available_height() - 170.0).max(120.0);
            egui::ScrollArea::vertical()
                .max_height(history_height)
                .auto_shrink([false, false])
                .stick_to_bottom(app.ui.should_auto_scroll)
                .show(ui, |ui| {
                    for msg in app.tutor.messages() {
                        if let Some(q) = app.draw_message(ui, msg) {
                            picked = Some(q);
                        }
                    }
                });

            ui.separator();

            // ---------- Input bar ----------
            ui.horizontal(|ui| {
                let response = ui.add(
                    egui::TextEdit::singleline(&mut app.ui.tutor_input)
                        .id(input_id)
                        .hint_text("Ask a climate question...")
                        .desired_width(ui.available_width() - 60.0),
                );

                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    send_now = true;
                }

                let label = if app.ui.pending_remote > 0 { "..." } else { "Ask" };
                if ui.button(label).clicked() {
                    send_now = true;
                }
            });

            // ---------- Examples ----------
            ui.add_space(4.0);
            ui.horizontal_wrapped(|ui| {
                for example in EXAMPLE_QUESTIONS {
                    if ui.small_button(example).clicked() {
                        picked = Some(example.to_string());
                    }
                }
            });
        });

    // examples and follow-ups only fill the box, the player still sends
    if let Some(q) = picked {
        app.ui.tutor_input = q;
        ctx.memory_mut(|m| m.request_focus(input_id));
    }

    if send_now {
        let text = std::mem::take(&mut app.ui.tutor_input);
        app.submit_question(&text);
        ctx.memory_mut(|m| m.request_focus(input_id));
    }

    app.ui.should_auto_scroll = false;
}
