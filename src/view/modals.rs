// Modal windows and the screens shown instead of the dashboard

use crate::app::Console;
use crate::message::Message;
use crate::style;
use eframe::egui;

impl Console {
    pub(crate) fn render_quota_modal(&self, ctx: &egui::Context, messages: &mut Vec<Message>) {
        let Some(name) = &self.quota_cluster else {
            return;
        };
        let Some(cluster) = self.inventory.clusters.iter().find(|c| &c.name == name) else {
            // Cluster vanished after a reload
            messages.push(Message::CloseQuota);
            return;
        };

        let mut open = true;
        egui::Window::new(format!("Resource Quota: {}", cluster.name))
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .default_width(style::modal_width(ctx))
            .show(ctx, |ui| {
                let quota = &cluster.resource_quota;
                egui::Grid::new("quota_grid").striped(true).num_columns(2).show(ui, |ui| {
                    for (key, value) in [
                        ("CPU", &quota.cpu),
                        ("Memory", &quota.memory),
                        ("Storage", &quota.storage),
                        ("PVCs", &quota.pvcs),
                        ("NodePorts", &quota.node_ports),
                        ("Ingress", &cluster.ingress_controller),
                    ] {
                        ui.label(key);
                        ui.label(if value.is_empty() { "-" } else { value.as_str() });
                        ui.end_row();
                    }
                });

                ui.add_space(8.0);
                let monitoring = &cluster.monitoring;
                ui.horizontal(|ui| {
                    for (label, enabled) in [
                        ("Prometheus", monitoring.prometheus),
                        ("Grafana", monitoring.grafana),
                        ("Alertmanager", monitoring.alert_manager),
                    ] {
                        let color = if enabled { style::HEALTHY } else { ui.visuals().weak_text_color() };
                        ui.colored_label(color, label);
                    }
                });
                if let Some(url) = &cluster.console_url {
                    ui.hyperlink_to("Open console", url);
                }

                ui.add_space(10.0);
                if ui.button("Close").clicked() {
                    messages.push(Message::CloseQuota);
                }
            });

        if !open {
            messages.push(Message::CloseQuota);
        }
    }

    pub(crate) fn render_sign_in(&mut self, ctx: &egui::Context, messages: &mut Vec<Message>) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.3);
                ui.heading("H4 Console");
                ui.weak("Sign in to continue");
                ui.add_space(10.0);

                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.sign_in_buffer)
                        .hint_text("Username")
                        .desired_width(style::SEARCH_WIDTH),
                );
                let submitted =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if ui.button("Sign in").clicked() || submitted {
                    messages.push(Message::SignIn(self.sign_in_buffer.clone()));
                }

                if let Some((message, _)) = &self.error_message {
                    ui.add_space(6.0);
                    ui.colored_label(style::ERROR, message);
                }
            });
        });
    }

    pub(crate) fn render_admin_notice(
        &self,
        ctx: &egui::Context,
        username: &str,
        messages: &mut Vec<Message>,
    ) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.3);
                ui.heading("Administrator account");
                ui.label(format!("{username} is an administrator. Use the admin console instead."));
                ui.add_space(10.0);
                if ui.button("Log out").clicked() {
                    messages.push(Message::Logout);
                }
            });
        });
    }
}
