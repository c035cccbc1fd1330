// Sidebar menu rendering

use crate::app::Console;
use crate::message::Message;
use crate::state::{DashboardSession, MenuItem};
use crate::style;
use eframe::egui;

impl Console {
    pub(crate) fn render_sidebar(
        &self,
        ui: &mut egui::Ui,
        session: &DashboardSession,
        messages: &mut Vec<Message>,
    ) {
        let nav = &session.navigation;
        let collapsed = nav.state().sidebar_collapsed;

        ui.add_space(4.0);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
            let (arrow, hint) = if collapsed {
                ("▶", "Expand sidebar (Ctrl+B)")
            } else {
                ("◀", "Collapse sidebar (Ctrl+B)")
            };
            if ui.small_button(arrow).on_hover_text(hint).clicked() {
                messages.push(Message::ToggleSidebar);
            }
        });

        if let Some(settings) = nav.registry().footer_item() {
            egui::TopBottomPanel::bottom("sidebar_footer")
                .show_separator_line(true)
                .show_inside(ui, |ui| {
                    ui.add_space(6.0);
                    self.render_menu_item(ui, session, settings, messages);
                    ui.add_space(6.0);
                });
        }

        egui::ScrollArea::vertical()
            .id_salt("sidebar_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for item in nav.registry().main_items() {
                    self.render_menu_item(ui, session, item, messages);

                    if !nav.is_expanded(item.section) {
                        continue;
                    }
                    for sub in &item.sub_items {
                        let is_active = nav.state().active_section == item.section
                            && nav.state().active_sub_section.as_deref() == Some(sub.as_str());
                        ui.horizontal(|ui| {
                            ui.add_space(style::SUB_ITEM_INDENT);
                            let text = if is_active {
                                egui::RichText::new(sub).strong()
                            } else {
                                egui::RichText::new(sub)
                            };
                            if ui.selectable_label(is_active, text).clicked() {
                                messages.push(Message::SelectSubSection(item.section, sub.clone()));
                            }
                        });
                    }
                }
            });
    }

    fn render_menu_item(
        &self,
        ui: &mut egui::Ui,
        session: &DashboardSession,
        item: &MenuItem,
        messages: &mut Vec<Message>,
    ) {
        let nav = &session.navigation;
        let collapsed = nav.state().sidebar_collapsed;
        let is_active = nav.state().active_section == item.section;
        let icon = egui::RichText::new(style::icon_glyph(&item.icon)).size(self.config.font.icon_size);

        let response = if collapsed {
            let response = ui.add_sized(
                [ui.available_width(), style::MENU_ITEM_HEIGHT],
                egui::Button::new(icon).selected(is_active),
            );
            response.on_hover_text(item.title())
        } else {
            let mut label = format!("{}  {}", style::icon_glyph(&item.icon), item.title());
            if !item.sub_items.is_empty() {
                label.push_str(if nav.is_expanded(item.section) { "  ▾" } else { "  ▸" });
            }
            let mut text = egui::RichText::new(label);
            if is_active {
                text = text.strong().color(style::ACCENT);
            }
            ui.add_sized(
                [ui.available_width(), style::MENU_ITEM_HEIGHT],
                egui::Button::new(text).selected(is_active),
            )
        };

        if response.clicked() {
            messages.push(Message::SelectSection(item.section));
        }
    }
}
