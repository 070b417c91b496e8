use eframe::egui;

use super::app::PromApp;
use super::settings::UI_SCALE_RANGE;
use crate::engine::llm_client::RemoteMode;
use crate::model::message::Sender;

pub fn draw_left_panel(ctx: &egui::Context, app: &mut PromApp) {
    egui::SidePanel::left("settings")
        .resizable(false)
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.heading("Settings");
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.label("UI Scale");
                ui.add(egui::Slider::new(&mut app.settings.ui_scale, UI_SCALE_RANGE));

                ui.collapsing("Chat colours", |ui| {
                    for (sender, label) in [
                        (Sender::User, "You"),
                        (Sender::Tutor, "Earth Tutor"),
                        (Sender::System, "System"),
                    ] {
                        ui.horizontal(|ui| {
                            let mut color = app.settings.color(sender);
                            if egui::color_picker::color_edit_button_srgba(
                                ui,
                                &mut color,
                                egui::color_picker::Alpha::Opaque,
                            )
                            .changed()
                            {
                                app.settings.set_color(sender, color);
                            }
                            ui.label(label);
                        });
                    }
                });

                ui.separator();
                let before = (app.settings.remote.enabled, app.settings.remote.mode);
                draw_remote_settings(ui, app);
                if (app.settings.remote.enabled, app.settings.remote.mode) != before {
                    app.apply_remote_settings();
                }

                ui.separator();
                if ui.button("Save").clicked() {
                    app.save_settings();
                }

                if let Some(status) = &app.ui.status {
                    ui.weak(status);
                }
            });
        });
}

fn draw_remote_settings(ui: &mut egui::Ui, app: &mut PromApp) {
    let remote = &mut app.settings.remote;

    ui.label(egui::RichText::new("Remote tutor").strong());
    ui.weak("Used only when the built-in facts have no answer.");

    ui.checkbox(&mut remote.enabled, "Enabled");

    ui.add_enabled_ui(remote.enabled, |ui| {
        egui::ComboBox::from_label("Mode")
            .selected_text(match remote.mode {
                RemoteMode::Proxy => "Proxy",
                RemoteMode::ChatCompletions => "Chat completions",
            })
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut remote.mode, RemoteMode::Proxy, "Proxy");
                ui.selectable_value(
                    &mut remote.mode,
                    RemoteMode::ChatCompletions,
                    "Chat completions",
                );
            });

        ui.label("Endpoint");
        ui.text_edit_singleline(&mut remote.endpoint);

        if remote.mode == RemoteMode::ChatCompletions {
            ui.label("Model");
            ui.text_edit_singleline(&mut remote.model);

            ui.horizontal(|ui| {
                ui.label("Temperature");
                ui.add(
                    egui::DragValue::new(&mut remote.temperature)
                        .speed(0.05)
                        .range(0.0..=2.0),
                );
            });
        }

        if remote.api_key.is_none() {
            ui.weak("No API key found in GREEN_PROM_API_KEY or OPENAI_API_KEY.");
        }
    });
}
