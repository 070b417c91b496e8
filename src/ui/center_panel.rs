use eframe::egui;

use super::app::{bubble, PromApp};
use crate::engine::progression::Stage;
use crate::engine::scoring::comparison_line;
use crate::model::catalog::{Choice, Phase};
use crate::model::game_result::{CarbonGrade, StatBand};

const GREEN: egui::Color32 = egui::Color32::from_rgb(22, 163, 74);
const AMBER: egui::Color32 = egui::Color32::from_rgb(202, 138, 4);
const RED: egui::Color32 = egui::Color32::from_rgb(220, 38, 38);
const CARD: egui::Color32 = egui::Color32::from_rgb(40, 48, 44);

/// Decisions made while drawing; applied once the frame is laid out.
enum SceneAction {
    Start,
    Highlight(String),
    BackToChoices,
    Confirm { phase_id: String, choice: Choice },
    PlayAgain,
}

pub fn draw_center_panel(ctx: &egui::Context, app: &mut PromApp) {
    let mut action = None;

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            action = if app.game.stage() == Stage::NotStarted {
                draw_welcome(ui, app)
            } else if app.game.is_complete() {
                draw_results(ui, app)
            } else {
                draw_choice_scene(ui, app)
            };
        });
    });

    if let Some(action) = action {
        apply(app, action);
    }
}

fn apply(app: &mut PromApp, action: SceneAction) {
    match action {
        SceneAction::Start => {
            app.game.start();
            app.ui.choice_error = None;
        }
        SceneAction::Highlight(id) => app.ui.highlighted_choice = Some(id),
        SceneAction::BackToChoices => app.ui.highlighted_choice = None,
        SceneAction::Confirm { phase_id, choice } => {
            // the UI only offers choices of the current phase
            app.ui.choice_error = app
                .game
                .select_choice(&phase_id, &choice)
                .err()
                .map(|e| e.to_string());
            app.ui.highlighted_choice = None;
        }
        SceneAction::PlayAgain => {
            app.game.reset();
            app.ui.highlighted_choice = None;
            app.ui.choice_error = None;
        }
    }
}

fn band_color(band: StatBand) -> egui::Color32 {
    match band {
        StatBand::Good => GREEN,
        StatBand::Caution => AMBER,
        StatBand::Poor => RED,
    }
}

/* =========================
   Welcome
   ========================= */

fn draw_welcome(ui: &mut egui::Ui, app: &PromApp) -> Option<SceneAction> {
    let mut action = None;

    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.label(egui::RichText::new("🌱 Green Prom Planner").size(32.0).strong());
        ui.label("Plan your perfect prom while learning about environmental impact!");
        ui.add_space(16.0);
    });

    bubble(ui, CARD, |ui| {
        ui.heading("What You'll Learn");
        ui.label("🌿 How your clothing choices affect the environment");
        ui.label("🚗 The carbon footprint of different transportation options");
        ui.label("🍽 Sustainable dining and venue choices");
        ui.label("💎 Eco-friendly accessory alternatives");

        ui.add_space(8.0);
        ui.heading("Your Mission");
        ui.label(
            "Make thoughtful decisions to create an amazing prom experience while minimizing \
             your environmental impact. You'll see how each choice affects your carbon \
             footprint, popularity score, and budget!",
        );
    });

    ui.vertical_centered(|ui| {
        ui.add_space(16.0);
        let start = egui::Button::new(
            egui::RichText::new("Start Planning My Green Prom! 🌟").size(18.0).strong(),
        )
        .fill(GREEN);
        if ui.add(start).clicked() {
            action = Some(SceneAction::Start);
        }

        ui.add_space(8.0);
        ui.weak(format!(
            "Budget: ${} | Goal: Minimize carbon footprint while having fun!",
            app.game.catalog().initial_budget
        ));
    });

    action
}

/* =========================
   Choices
   ========================= */

fn draw_stats(ui: &mut egui::Ui, app: &PromApp) {
    let state = app.game.state();
    let catalog = app.game.catalog();

    bubble(ui, CARD, |ui| {
        ui.heading("Your Prom Stats");

        egui::Grid::new("prom_stats")
            .num_columns(3)
            .spacing([32.0, 4.0])
            .show(ui, |ui| {
                ui.colored_label(
                    band_color(StatBand::for_carbon(state.carbon_footprint)),
                    egui::RichText::new(format!("{} kg CO₂", state.carbon_footprint)).strong(),
                );
                ui.label(
                    egui::RichText::new(format!(
                        "{}/{}",
                        state.popularity_score,
                        catalog.popularity_ceiling()
                    ))
                    .strong(),
                );
                ui.colored_label(
                    band_color(StatBand::for_budget(state.budget_remaining)),
                    egui::RichText::new(format!("${} remaining", state.budget_remaining)).strong(),
                );
                ui.end_row();

                ui.weak("Carbon Footprint");
                ui.weak("Popularity Score");
                ui.weak("Budget");
                ui.end_row();
            });

        ui.add_space(6.0);
        let done = state.completed_phases.len();
        let total = catalog.len();
        ui.add(
            egui::ProgressBar::new(done as f32 / total as f32)
                .text(format!("{done} of {total} phases completed")),
        );
    });
}

fn draw_choice_scene(ui: &mut egui::Ui, app: &PromApp) -> Option<SceneAction> {
    let phase = app.game.current_phase()?;

    draw_stats(ui, app);
    if let Some(error) = &app.ui.choice_error {
        ui.colored_label(RED, format!("Choice not recorded: {error}"));
    }
    ui.add_space(12.0);

    let highlighted = app
        .ui
        .highlighted_choice
        .as_deref()
        .and_then(|id| phase.choice(id));

    match highlighted {
        Some(choice) => draw_feedback(ui, phase, choice),
        None => draw_choice_cards(ui, phase),
    }
}

fn draw_choice_cards(ui: &mut egui::Ui, phase: &Phase) -> Option<SceneAction> {
    let mut action = None;

    ui.heading(&phase.title);
    ui.label(&phase.prompt);
    ui.add_space(8.0);

    for choice in &phase.choices {
        let card = bubble(ui, CARD, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(&choice.title).strong().size(16.0));
            ui.label(&choice.description);
            ui.horizontal(|ui| {
                ui.colored_label(RED, format!("+{} kg CO₂", choice.carbon_footprint));
                ui.label(format!("+{} popularity", choice.popularity_score));
                ui.label(format!("-${}", choice.cost));
            });
            ui.button("See impact").clicked()
        });
        if card {
            action = Some(SceneAction::Highlight(choice.id.clone()));
        }
        ui.add_space(6.0);
    }

    ui.weak("Click on a choice to see its environmental impact and confirm your decision.");
    action
}

fn draw_feedback(ui: &mut egui::Ui, phase: &Phase, choice: &Choice) -> Option<SceneAction> {
    let mut action = None;

    ui.heading(&phase.title);
    ui.label(egui::RichText::new(&choice.title).strong().size(18.0));
    ui.add_space(8.0);

    bubble(ui, CARD, |ui| {
        ui.label(egui::RichText::new("🌱 Environmental Impact").strong());
        ui.label(&choice.environmental_impact);
    });

    ui.add_space(8.0);
    egui::Grid::new("choice_deltas").num_columns(3).spacing([32.0, 4.0]).show(ui, |ui| {
        ui.colored_label(RED, format!("+{}", choice.carbon_footprint));
        ui.label(format!("+{}", choice.popularity_score));
        ui.label(format!("-${}", choice.cost));
        ui.end_row();
        ui.weak("kg CO₂");
        ui.weak("Popularity");
        ui.weak("Cost");
        ui.end_row();
    });

    ui.add_space(12.0);
    ui.horizontal(|ui| {
        if ui.button("← Back to Choices").clicked() {
            action = Some(SceneAction::BackToChoices);
        }
        if ui.add(egui::Button::new("Confirm Choice →").fill(GREEN)).clicked() {
            action = Some(SceneAction::Confirm {
                phase_id: phase.id.clone(),
                choice: choice.clone(),
            });
        }
    });

    action
}

/* =========================
   Results
   ========================= */

fn draw_results(ui: &mut egui::Ui, app: &PromApp) -> Option<SceneAction> {
    let mut action = None;
    let result = app.game.result();
    let catalog = app.game.catalog();
    let state = app.game.state();
    let grade = CarbonGrade::from_footprint(result.total_carbon_footprint);

    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new("🎉 Your Green Prom Results!").size(28.0).strong());
        ui.label("Here's how your choices impacted the environment");
        ui.add_space(12.0);
        ui.label(egui::RichText::new(grade.label()).size(56.0).strong().color(GREEN));
        ui.label("Environmental Impact Grade");
    });

    ui.add_space(12.0);
    egui::Grid::new("result_totals").num_columns(3).spacing([40.0, 4.0]).show(ui, |ui| {
        let big = |text: String| egui::RichText::new(text).size(24.0);
        ui.colored_label(RED, big(result.total_carbon_footprint.to_string()));
        ui.label(big(result.total_popularity_score.to_string()));
        ui.colored_label(GREEN, big(format!("${}", result.total_cost)));
        ui.end_row();

        ui.label("kg CO₂ Total");
        ui.label("Popularity Points");
        ui.label("Total Spent");
        ui.end_row();

        ui.weak(format!("vs {} kg average", result.average_student_carbon_footprint));
        ui.weak(format!("out of {} possible", catalog.popularity_ceiling()));
        ui.weak(format!("out of ${} budget", catalog.initial_budget));
        ui.end_row();
    });

    ui.add_space(12.0);
    bubble(ui, CARD, |ui| {
        ui.heading("🌱 Your Impact");
        ui.label(&result.reflection_message);
    });

    ui.add_space(12.0);
    ui.heading("📋 Your Choices Summary");
    for phase in &catalog.phases {
        let Some(choice) = state.choice_for(&phase.id) else {
            continue;
        };
        bubble(ui, CARD, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(&phase.title).strong());
                    ui.label(&choice.title);
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                    ui.vertical(|ui| {
                        ui.colored_label(RED, format!("+{} kg CO₂", choice.carbon_footprint));
                        ui.label(format!("+{} points", choice.popularity_score));
                        ui.label(format!("-${}", choice.cost));
                    });
                });
            });
        });
        ui.add_space(4.0);
    }

    ui.add_space(12.0);
    bubble(ui, CARD, |ui| {
        ui.heading("🌍 Environmental Impact Comparison");
        ui.label(format!(
            "Average student: {} kg CO₂ per prom",
            result.average_student_carbon_footprint
        ));
        ui.label(format!("Your prom: {} kg CO₂ total", result.total_carbon_footprint));
        ui.label(egui::RichText::new(comparison_line(&result)).strong().color(GREEN));
    });

    ui.add_space(16.0);
    ui.vertical_centered(|ui| {
        if ui
            .add(egui::Button::new(egui::RichText::new("Play Again! 🌱").size(18.0)).fill(GREEN))
            .clicked()
        {
            action = Some(SceneAction::PlayAgain);
        }
        ui.weak("Share your results and encourage friends to make sustainable choices!");
    });

    action
}
