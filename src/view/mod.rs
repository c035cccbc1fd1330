pub mod clusters;
pub mod content;
pub mod header;
pub mod modals;
pub mod sidebar;

use crate::app::Console;
use crate::message::Message;
use crate::style;
use eframe::egui;

impl Console {
    pub(crate) fn render_dashboard(&self, ctx: &egui::Context, messages: &mut Vec<Message>) {
        let Some(session) = &self.session else {
            return;
        };

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            self.render_header(ui, messages);
            ui.separator();
            self.render_breadcrumb(ui, session, messages);
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.render_status_bar(ui);
        });

        let collapsed = session.navigation.state().sidebar_collapsed;
        let width = if collapsed {
            self.config
                .sidebar
                .collapsed_width
                .clamp(style::SIDEBAR_COLLAPSED_MIN, style::SIDEBAR_COLLAPSED_MAX)
        } else {
            self.config
                .sidebar
                .expanded_width
                .clamp(style::SIDEBAR_MIN, style::SIDEBAR_MAX)
        };
        egui::SidePanel::left("sidebar")
            .exact_width(width)
            .resizable(false)
            .show(ctx, |ui| {
                self.render_sidebar(ui, session, messages);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_content(ui, session, messages);
        });

        self.render_quota_modal(ctx, messages);
    }

    fn render_status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if self.inventory_loading {
                ui.spinner();
                ui.label("Loading inventory...");
            }
            if let Some((message, _)) = &self.error_message {
                ui.colored_label(style::ERROR, message);
            } else if let Some((message, _)) = &self.info_message {
                ui.label(message);
            }
        });
    }
}
