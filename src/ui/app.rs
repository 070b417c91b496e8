use eframe::egui;
use egui::Layout;
use std::sync::mpsc;
use std::time::Duration;

use crate::engine::fact_matcher::FactMatcher;
use crate::engine::progression::ProgressionEngine;
use crate::engine::protocol::{TutorCommand, TutorResponse};
use crate::engine::tutor::{remote_context, TutorSession};
use crate::engine::worker::TutorWorker;
use crate::model::catalog::Catalog;
use crate::model::fact::FactCatalog;
use crate::model::message::Message;
use crate::ui::center_panel::draw_center_panel;
use crate::ui::left_panel::draw_left_panel;
use crate::ui::right_panel::draw_right_panel;
use crate::ui::settings::AppSettings;
use crate::ui::settings_io::save_settings;

/* =========================
   UI State
   ========================= */

#[derive(Default)]
pub struct UiState {
    /// Choice whose impact card is open, waiting for confirmation
    pub highlighted_choice: Option<String>,

    pub tutor_input: String,
    pub tutor_open: bool,
    pub should_auto_scroll: bool,
    pub show_settings: bool,

    /// Remote questions still in flight
    pub pending_remote: usize,
    /// Settings panel feedback
    pub status: Option<String>,
    /// Last rejected choice, shown above the choice cards
    pub choice_error: Option<String>,
}

/* =========================
   App
   ========================= */

pub struct PromApp {
    pub game: ProgressionEngine,
    pub tutor: TutorSession,
    pub settings: AppSettings,
    pub ui: UiState,

    cmd_tx: mpsc::Sender<TutorCommand>,
    resp_rx: mpsc::Receiver<TutorResponse>,
}

impl PromApp {
    pub fn new(catalog: Catalog, facts: FactCatalog, settings: AppSettings) -> Self {
        let (cmd_tx, resp_rx) = TutorWorker::spawn(settings.remote.clone());

        Self {
            game: ProgressionEngine::new(catalog),
            tutor: TutorSession::new(FactMatcher::new(facts)),
            settings,
            ui: UiState {
                tutor_open: true,
                ..Default::default()
            },
            cmd_tx,
            resp_rx,
        }
    }

    pub fn send_command(&self, cmd: TutorCommand) {
        if self.cmd_tx.send(cmd).is_err() {
            tracing::error!("Tutor worker is gone");
        }
    }

    /// Answers locally, then asks the remote tutor if nothing matched.
    pub fn submit_question(&mut self, input: &str) {
        let Some(reply) = self.tutor.ask(input) else {
            return;
        };
        self.ui.should_auto_scroll = true;

        if !reply.matched && self.settings.remote.enabled {
            let context = remote_context(self.game.state());
            self.send_command(TutorCommand::Ask {
                question: reply.question,
                context: Some(context),
            });
            self.ui.pending_remote += 1;
        }
    }

    pub fn apply_remote_settings(&self) {
        self.send_command(TutorCommand::Configure(self.settings.remote.clone()));
    }

    pub fn save_settings(&mut self) {
        self.apply_remote_settings();
        self.ui.status = Some(match save_settings(&self.settings) {
            Ok(()) => "Settings saved".to_string(),
            Err(e) => {
                tracing::warn!("Could not save settings: {:#}", e);
                format!("Could not save settings: {e}")
            }
        });
    }

    fn drain_responses(&mut self) {
        while let Ok(resp) = self.resp_rx.try_recv() {
            self.ui.pending_remote = self.ui.pending_remote.saturating_sub(1);
            match resp {
                TutorResponse::Answered { answer, .. } => {
                    self.tutor.push_remote_answer(answer);
                }
                TutorResponse::Failed { reason, .. } => {
                    self.tutor
                        .push_system(format!("The remote tutor could not help: {reason}"));
                }
            }
            self.ui.should_auto_scroll = true;
        }
    }

    pub fn draw_message(&self, ui: &mut egui::Ui, msg: &Message) -> Option<String> {
        let bg = self.settings.color(msg.sender());
        let mut clicked = None;

        ui.add_space(6.0);

        let mut draw = |ui: &mut egui::Ui| {
            bubble(ui, bg, |ui| {
                ui.label(egui::RichText::new(msg.text()).color(egui::Color32::WHITE));

                if !msg.follow_ups().is_empty() {
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new("Follow-up questions:")
                            .small()
                            .color(egui::Color32::LIGHT_GREEN),
                    );
                    for q in msg.follow_ups() {
                        if ui.small_button(q.as_str()).clicked() {
                            clicked = Some(q.clone());
                        }
                    }
                }
            });
        };

        if matches!(msg, Message::User(_)) {
            ui.with_layout(Layout::right_to_left(egui::Align::TOP), draw);
        } else {
            draw(ui);
        }

        clicked
    }
}

/* =========================
   egui App
   ========================= */

impl eframe::App for PromApp {
    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        ctx.set_pixels_per_point(self.settings.ui_scale);

        self.drain_responses();

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("🌱 Green Prom Planner");

                ui.with_layout(Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.toggle_value(&mut self.ui.show_settings, "⚙ Settings");

                    if self.game.state().has_started {
                        if ui.button("Restart").clicked() {
                            self.game.reset();
                            self.ui.highlighted_choice = None;
                            self.ui.choice_error = None;
                        }
                        let undo = egui::Button::new("↶ Undo last choice");
                        if ui.add_enabled(self.game.can_undo(), undo).clicked() {
                            self.game.undo();
                            self.ui.highlighted_choice = None;
                            self.ui.choice_error = None;
                        }
                    }
                });
            });
        });

        if self.ui.show_settings {
            draw_left_panel(ctx, self);
        }

        // the tutor only appears once the player has started
        if self.game.state().has_started {
            draw_right_panel(ctx, self);
        }

        draw_center_panel(ctx, self);

        if self.ui.pending_remote > 0 {
            ctx.request_repaint_after(Duration::from_millis(200));
        }
    }
}

/* =========================
   UI Helpers
   ========================= */

pub fn bubble<R>(
    ui: &mut egui::Ui,
    color: egui::Color32,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    egui::Frame::new()
        .fill(color)
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::symmetric(10, 6))
        .show(ui, add_contents)
        .inner
}
