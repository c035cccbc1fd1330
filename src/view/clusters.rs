// Destination cluster list: filter bar plus table

use crate::app::Console;
use crate::message::Message;
use crate::model::ClusterInfo;
use crate::state::{DashboardSession, EnvironmentFilter, ProviderFilter};
use crate::style;
use chrono::{DateTime, Utc};
use eframe::egui;

impl Console {
    pub(crate) fn render_cluster_list(
        &self,
        ui: &mut egui::Ui,
        session: &DashboardSession,
        messages: &mut Vec<Message>,
    ) {
        let filters = &session.filters;
        let all = &self.inventory.clusters;
        let visible = session.visible_clusters(all);

        ui.horizontal(|ui| {
            let mut term = filters.search_term().to_string();
            let search = ui.add(
                egui::TextEdit::singleline(&mut term)
                    .hint_text("Search clusters by name or environment...")
                    .desired_width(style::SEARCH_WIDTH),
            );
            if search.changed() {
                messages.push(Message::SearchChanged(term));
            }

            let mut environment = filters.environment();
            egui::ComboBox::from_id_salt("environment_filter")
                .width(style::FILTER_WIDTH)
                .selected_text(environment.to_string())
                .show_ui(ui, |ui| {
                    for option in EnvironmentFilter::options() {
                        ui.selectable_value(&mut environment, option, option.to_string());
                    }
                });
            if environment != filters.environment() {
                messages.push(Message::EnvironmentFilterChanged(environment));
            }

            let mut provider = filters.provider();
            egui::ComboBox::from_id_salt("provider_filter")
                .width(style::FILTER_WIDTH)
                .selected_text(provider.to_string())
                .show_ui(ui, |ui| {
                    for option in ProviderFilter::options() {
                        ui.selectable_value(&mut provider, option, option.to_string());
                    }
                });
            if provider != filters.provider() {
                messages.push(Message::ProviderFilterChanged(provider));
            }

            if filters.is_filtering() && ui.button("Clear").clicked() {
                messages.push(Message::ClearFilters);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.weak(format!("Showing {} of {}", visible.len(), all.len()));
            });
        });
        ui.separator();

        if visible.is_empty() {
            ui.add_space(12.0);
            ui.vertical_centered(|ui| {
                ui.weak(if all.is_empty() {
                    "No destination clusters registered."
                } else {
                    "No clusters match the current filters."
                });
            });
            return;
        }

        use egui_extras::{Column, TableBuilder};
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::auto().at_least(140.0).clip(true))
            .column(Column::auto().at_least(50.0))
            .column(Column::auto().at_least(50.0))
            .column(Column::auto().at_least(80.0))
            .column(Column::auto().at_least(50.0))
            .column(Column::auto().at_least(90.0).clip(true))
            .column(Column::auto().at_least(80.0))
            .column(Column::auto().at_least(70.0))
            .column(Column::remainder())
            .header(style::HEADER_HEIGHT, |mut header| {
                for title in [
                    "Name", "Env", "Provider", "Version", "Nodes", "Region", "Health", "Updated", "",
                ] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|body| {
                body.rows(style::ROW_HEIGHT, visible.len(), |mut row| {
                    let cluster = visible[row.index()];
                    row.col(|ui| {
                        style::truncated_label(ui, &cluster.name);
                        if cluster.builtin {
                            ui.weak("builtin");
                        }
                    });
                    row.col(|ui| {
                        ui.label(cluster.environment.as_str());
                    });
                    row.col(|ui| {
                        ui.label(cluster.provider.as_str());
                    });
                    row.col(|ui| {
                        ui.label(&cluster.version.kubernetes)
                            .on_hover_text(&cluster.version.platform);
                    });
                    row.col(|ui| {
                        ui.label(format!("{}/{}", cluster.nodes.ready, cluster.nodes.total));
                    });
                    row.col(|ui| {
                        style::truncated_label(ui, &cluster.region);
                    });
                    row.col(|ui| {
                        render_health(ui, cluster);
                    });
                    row.col(|ui| {
                        ui.label(format_updated(&cluster.last_updated, Utc::now()))
                            .on_hover_text(&cluster.last_updated);
                    });
                    row.col(|ui| {
                        if ui.small_button("Quota").clicked() {
                            messages.push(Message::ShowQuota(cluster.name.clone()));
                        }
                    });
                });
            });
    }
}

fn render_health(ui: &mut egui::Ui, cluster: &ClusterInfo) {
    let color = if cluster.health.is_healthy() {
        style::HEALTHY
    } else if cluster.health.status.is_empty() {
        ui.visuals().weak_text_color()
    } else {
        style::WARNING
    };
    let status = if cluster.health.status.is_empty() {
        "Unknown"
    } else {
        cluster.health.status.as_str()
    };
    let response = ui.colored_label(color, status);
    if let Some(message) = &cluster.health.message {
        response.on_hover_text(message);
    }
}

/// Render an RFC 3339 timestamp as a short relative age.
pub fn format_updated(timestamp: &str, now: DateTime<Utc>) -> String {
    let Ok(updated) = DateTime::parse_from_rfc3339(timestamp) else {
        return if timestamp.is_empty() { "-".to_string() } else { timestamp.to_string() };
    };
    let age = now.signed_duration_since(updated.with_timezone(&Utc));
    if age.num_seconds() < 60 {
        "just now".to_string()
    } else if age.num_minutes() < 60 {
        format!("{}m ago", age.num_minutes())
    } else if age.num_hours() < 24 {
        format!("{}h ago", age.num_hours())
    } else {
        format!("{}d ago", age.num_days())
    }
}
