use serde::{Deserialize, Serialize};
use egui::Color32;
use std::collections::HashMap;

use crate::engine::llm_client::RemoteTutorSettings;
use crate::model::message::Sender;

pub const UI_SCALE_RANGE: std::ops::RangeInclusive<f32> = 0.75..=2.0;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    pub ui_scale: f32,

    // Sender → bubble colour
    pub bubble_colors: HashMap<String, [u8; 4]>,

    pub remote: RemoteTutorSettings,
}

impl Default for AppSettings {
    fn default() -> Self {
        let mut bubble_colors = HashMap::new();

        bubble_colors.insert("User".into(), [46, 125, 50, 255]);
        bubble_colors.insert("Tutor".into(), [30, 90, 60, 255]);
        bubble_colors.insert("System".into(), [80, 80, 80, 255]);

        Self {
            ui_scale: 1.0,
            bubble_colors,
            remote: RemoteTutorSettings::default(),
        }
    }
}

impl AppSettings {
    pub fn color(&self, sender: Sender) -> Color32 {
        self.bubble_colors
            .get(sender_key(sender))
            .map(|c| Color32::from_rgba_unmultiplied(c[0], c[1], c[2], c[3]))
            .unwrap_or(Color32::DARK_GRAY)
    }

    pub fn set_color(&mut self, sender: Sender, color: Color32) {
        self.bubble_colors.insert(
            sender_key(sender).to_string(),
            [color.r(), color.g(), color.b(), color.a()],
        );
    }

    /// Pulls out-of-range values from hand-edited files back into range.
    pub fn sanitized(mut self) -> Self {
        if !self.ui_scale.is_finite() {
            self.ui_scale = 1.0;
        }
        self.ui_scale = self
            .ui_scale
            .clamp(*UI_SCALE_RANGE.start(), *UI_SCALE_RANGE.end());
        self
    }
}

fn sender_key(sender: Sender) -> &'static str {
    match sender {
        Sender::User => "User",
        Sender::Tutor => "Tutor",
        Sender::System => "System",
    }
}
