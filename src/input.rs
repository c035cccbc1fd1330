// Keyboard shortcuts for the dashboard

use crate::app::Console;
use crate::message::Message;
use crate::state::Section;
use eframe::egui;

impl Console {
    pub fn handle_input(&self, ctx: &egui::Context, messages: &mut Vec<Message>) {
        let Some(session) = &self.session else {
            return;
        };

        // Leave Escape to the quota window while it is open
        if self.quota_cluster.is_some() {
            if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
                messages.push(Message::CloseQuota);
            }
            return;
        }

        if ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::B)) {
            messages.push(Message::ToggleSidebar);
        }

        if ctx.input(|i| i.modifiers.command && i.modifiers.shift && i.key_pressed(egui::Key::X)) {
            messages.push(Message::ClearFilters);
        }

        if ctx.input(|i| i.key_pressed(egui::Key::F5)) {
            messages.push(Message::ReloadInventory);
        }

        let state = session.navigation.state();
        if state.active_section == Section::Deploy
            && state.selected_entity_label.is_some()
            && ctx.input(|i| i.key_pressed(egui::Key::Escape))
        {
            messages.push(Message::SelectEntity(None));
        }
    }
}
