use eframe::egui;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_config(mode: &str) -> Self {
        if mode.eq_ignore_ascii_case("light") {
            Self::Light
        } else {
            Self::Dark
        }
    }

    pub fn visuals(&self) -> egui::Visuals {
        match self {
            Self::Light => egui::Visuals::light(),
            Self::Dark => egui::Visuals::dark(),
        }
    }
}

// --- Sizing ---
pub const ROW_HEIGHT: f32 = 24.0;
pub const HEADER_HEIGHT: f32 = 20.0;
pub const MENU_ITEM_HEIGHT: f32 = 32.0;
pub const SUB_ITEM_INDENT: f32 = 20.0;
pub const SEARCH_WIDTH: f32 = 300.0;
pub const FILTER_WIDTH: f32 = 180.0;

// --- Sidebar constraints ---
pub const SIDEBAR_MIN: f32 = 180.0;
pub const SIDEBAR_MAX: f32 = 420.0;
pub const SIDEBAR_COLLAPSED_MIN: f32 = 48.0;
pub const SIDEBAR_COLLAPSED_MAX: f32 = 96.0;

// --- Modals ---
pub const MODAL_MIN_WIDTH: f32 = 300.0;
pub const MODAL_MAX_WIDTH: f32 = 500.0;
pub const MODAL_WIDTH_RATIO: f32 = 0.6;

// --- Timing ---
pub const MESSAGE_TIMEOUT_SECS: u64 = 5;

// --- Colors ---
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(120, 180, 255);
pub const HEALTHY: egui::Color32 = egui::Color32::from_rgb(80, 200, 120);
pub const WARNING: egui::Color32 = egui::Color32::from_rgb(230, 180, 60);
pub const ERROR: egui::Color32 = egui::Color32::from_rgb(230, 90, 90);

/// Glyph for a menu icon reference.
pub fn icon_glyph(icon: &str) -> &'static str {
    match icon {
        "workflow" => "🔀",
        "lock" => "🔒",
        "cpu" => "🖥",
        "network" => "🖧",
        "credit-card" => "💳",
        "settings" => "⚙",
        _ => "•",
    }
}

// --- Helper functions ---

pub fn modal_width(ctx: &egui::Context) -> f32 {
    let width = ctx.input(|i| {
        i.viewport()
            .inner_rect
            .map(|r| r.width())
            .unwrap_or(800.0)
    });
    (width * MODAL_WIDTH_RATIO).clamp(MODAL_MIN_WIDTH, MODAL_MAX_WIDTH)
}

pub fn truncated_label(
    ui: &mut egui::Ui,
    text: impl Into<egui::WidgetText>,
) -> egui::Response {
    ui.add(egui::Label::new(text).truncate())
}

pub fn truncated_label_with_sense(
    ui: &mut egui::Ui,
    text: impl Into<egui::WidgetText>,
    sense: egui::Sense,
) -> egui::Response {
    ui.add(egui::Label::new(text).truncate().sense(sense))
}

/// Apply the configured font sizes to the text styles the dashboard uses.
pub fn apply_font_size(ctx: &egui::Context, font_size: f32) {
    ctx.style_mut(|style| {
        for (text_style, font_id) in style.text_styles.iter_mut() {
            match text_style {
                egui::TextStyle::Body | egui::TextStyle::Button => font_id.size = font_size,
                egui::TextStyle::Small => font_id.size = font_size * 0.8,
                egui::TextStyle::Heading => font_id.size = font_size * 1.5,
                _ => {}
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_config() {
        assert_eq!(Theme::from_config("light"), Theme::Light);
        assert_eq!(Theme::from_config("Dark"), Theme::Dark);
        assert_eq!(Theme::from_config("solarized"), Theme::Dark);
    }

    #[test]
    fn test_unknown_icon_falls_back() {
        assert_eq!(icon_glyph("lock"), "🔒");
        assert_eq!(icon_glyph("rocket"), "•");
    }
}
