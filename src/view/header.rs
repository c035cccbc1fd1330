// Header bar and breadcrumb trail

use crate::app::Console;
use crate::message::Message;
use crate::state::DashboardSession;
use crate::style;
use eframe::egui;

impl Console {
    pub(crate) fn render_header(&self, ui: &mut egui::Ui, messages: &mut Vec<Message>) {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.heading("H4 Console");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Log out").clicked() {
                    messages.push(Message::Logout);
                }
                ui.label(egui::RichText::new(&self.username).strong());
                ui.separator();
                let reload = ui.add_enabled(!self.inventory_loading, egui::Button::new("⟳ Reload"));
                if reload.on_hover_text("Reload inventory (F5)").clicked() {
                    messages.push(Message::ReloadInventory);
                }
            });
        });
    }

    pub(crate) fn render_breadcrumb(
        &self,
        ui: &mut egui::Ui,
        session: &DashboardSession,
        messages: &mut Vec<Message>,
    ) {
        let items = match session.breadcrumb() {
            Ok(items) => items,
            Err(e) => {
                ui.colored_label(style::ERROR, e.to_string());
                return;
            }
        };

        ui.horizontal(|ui| {
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    ui.weak("/");
                }
                if item.is_active {
                    ui.label(egui::RichText::new(&item.label).strong());
                    continue;
                }
                match &item.target {
                    Some(target) => {
                        if ui.link(&item.label).clicked() {
                            messages.push(Message::BreadcrumbClicked(target.clone()));
                        }
                    }
                    None => {
                        ui.label(&item.label);
                    }
                }
            }
        });
    }
}
