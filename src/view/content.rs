// Main content panel: one view per section and sub-section

use crate::app::Console;
use crate::config::Config;
use crate::message::Message;
use crate::state::{DashboardSession, Section};
use crate::style;
use eframe::egui;

impl Console {
    pub(crate) fn render_content(
        &self,
        ui: &mut egui::Ui,
        session: &DashboardSession,
        messages: &mut Vec<Message>,
    ) {
        let state = session.navigation.state();
        let sub = state.active_sub_section.as_deref();

        match state.active_section {
            Section::Deploy => match sub {
                Some("ApplicationTemplate") => self.render_templates(ui),
                Some("DestinationCluster") => self.render_cluster_list(ui, session, messages),
                _ => self.render_applications(ui, session, messages),
            },
            Section::ResourcePool => self.render_resource_pool(ui, sub),
            Section::Security | Section::Network => {
                ui.heading(state.active_section.as_str());
                ui.separator();
                if let Some(sub) = sub {
                    ui.label(egui::RichText::new(sub).strong());
                    ui.weak(format!("No {sub} resources found."));
                }
            }
            Section::Bill => self.render_billing(ui),
            Section::Settings => self.render_settings(ui),
        }
    }

    fn render_applications(
        &self,
        ui: &mut egui::Ui,
        session: &DashboardSession,
        messages: &mut Vec<Message>,
    ) {
        let selected = session.navigation.state().selected_entity_label.as_deref();
        let applications = &self.inventory.applications;

        if let Some(name) = selected {
            if ui.button("◀ All applications").clicked() {
                messages.push(Message::SelectEntity(None));
            }
            ui.separator();
            match applications.iter().find(|app| app.name == name) {
                Some(app) => {
                    ui.heading(&app.name);
                    egui::Grid::new("application_detail").num_columns(2).show(ui, |ui| {
                        for (key, value) in [
                            ("Project", &app.project),
                            ("Destination", &app.destination),
                            ("Namespace", &app.namespace),
                            ("Sync", &app.sync_status),
                            ("Health", &app.health_status),
                        ] {
                            ui.weak(key);
                            ui.label(value);
                            ui.end_row();
                        }
                    });
                }
                None => {
                    ui.weak(format!("Application {name} is no longer in the inventory."));
                }
            }
            return;
        }

        ui.heading("Argo Applications");
        ui.separator();
        if applications.is_empty() {
            ui.weak("No applications found.");
            return;
        }

        use egui_extras::{Column, TableBuilder};
        TableBuilder::new(ui)
            .striped(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::auto().at_least(160.0).clip(true))
            .column(Column::auto().at_least(100.0))
            .column(Column::auto().at_least(120.0))
            .column(Column::auto().at_least(90.0))
            .column(Column::remainder())
            .header(style::HEADER_HEIGHT, |mut header| {
                for title in ["Name", "Project", "Destination", "Sync", "Health"] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|body| {
                body.rows(style::ROW_HEIGHT, applications.len(), |mut row| {
                    let app = &applications[row.index()];
                    row.col(|ui| {
                        let response = style::truncated_label_with_sense(
                            ui,
                            egui::RichText::new(&app.name).color(style::ACCENT),
                            egui::Sense::click(),
                        );
                        if response.clicked() {
                            messages.push(Message::SelectEntity(Some(app.name.clone())));
                        }
                    });
                    row.col(|ui| {
                        ui.label(&app.project);
                    });
                    row.col(|ui| {
                        ui.label(&app.destination);
                    });
                    row.col(|ui| {
                        let color = if app.is_synced() { style::HEALTHY } else { style::WARNING };
                        ui.colored_label(color, &app.sync_status);
                    });
                    row.col(|ui| {
                        ui.label(&app.health_status);
                    });
                });
            });
    }

    fn render_templates(&self, ui: &mut egui::Ui) {
        ui.heading("Application Templates");
        ui.separator();
        ui.weak("Templates are managed in the deployment repository.");
    }

    fn render_resource_pool(&self, ui: &mut egui::Ui, sub: Option<&str>) {
        let clusters = &self.inventory.clusters;
        ui.heading("Resource Pool");
        ui.separator();

        match sub {
            Some("Nodes") => {
                egui::Grid::new("pool_nodes").striped(true).num_columns(3).show(ui, |ui| {
                    ui.strong("Cluster");
                    ui.strong("Ready");
                    ui.strong("Total");
                    ui.end_row();
                    for cluster in clusters {
                        ui.label(&cluster.name);
                        ui.label(cluster.nodes.ready.to_string());
                        ui.label(cluster.nodes.total.to_string());
                        ui.end_row();
                    }
                });
            }
            _ => {
                let ready: u32 = clusters.iter().map(|c| c.nodes.ready).sum();
                let total: u32 = clusters.iter().map(|c| c.nodes.total).sum();
                let healthy = clusters.iter().filter(|c| c.health.is_healthy()).count();
                egui::Grid::new("pool_overview").num_columns(2).show(ui, |ui| {
                    ui.weak("Clusters");
                    ui.label(format!("{} ({healthy} healthy)", clusters.len()));
                    ui.end_row();
                    ui.weak("Nodes ready");
                    ui.label(format!("{ready} / {total}"));
                    ui.end_row();
                });
            }
        }
    }

    fn render_billing(&self, ui: &mut egui::Ui) {
        ui.heading("Billing");
        ui.separator();
        egui::Grid::new("billing").striped(true).num_columns(2).show(ui, |ui| {
            ui.strong("Total Usage");
            ui.strong("$1,234.56");
            ui.end_row();
            for (name, amount) in [
                ("Compute", 450.0),
                ("Storage", 200.0),
                ("Network", 150.0),
                ("Security", 100.0),
            ] {
                ui.label(name);
                ui.label(format!("${amount:.2}"));
                ui.end_row();
            }
        });
    }

    fn render_settings(&self, ui: &mut egui::Ui) {
        ui.heading("Settings");
        ui.separator();
        let config_path = Config::config_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "unavailable".to_string());
        let inventory = self
            .config
            .inventory
            .path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "built-in sample".to_string());

        egui::Grid::new("settings").num_columns(2).show(ui, |ui| {
            ui.weak("Config file");
            ui.label(config_path);
            ui.end_row();
            ui.weak("Theme");
            ui.label(format!("{:?}", self.theme));
            ui.end_row();
            ui.weak("Inventory");
            ui.label(inventory);
            ui.end_row();
            ui.weak("Start collapsed");
            ui.label(self.config.sidebar.start_collapsed.to_string());
            ui.end_row();
        });
    }
}
