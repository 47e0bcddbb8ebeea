use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use aim_trends::data::{export, loader};
use aim_trends::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – scenario summary and skipped files
// ---------------------------------------------------------------------------

/// Render the left summary panel.
pub fn side_panel(ui: &mut Ui, state: &AppState) {
    ui.heading("Scenarios");
    ui.separator();

    match state.dataset() {
        Some(dataset) => {
            ScrollArea::vertical()
                .id_salt("scenario_list")
                .max_height(ui.available_height() * 0.5)
                .show(ui, |ui: &mut Ui| {
                    for group in dataset.groups() {
                        let slope = match group.trend() {
                            Some(t) if group.len() > 1 => format!("{:+.1}/run", t.slope),
                            _ => "–".to_string(),
                        };
                        ui.horizontal(|ui: &mut Ui| {
                            ui.strong(group.name.trim_end());
                            ui.label(format!("{} runs, {slope}", group.len()));
                        });
                    }
                });
        }
        None => {
            ui.label("No stats loaded.");
        }
    }

    let Some(report) = &state.report else {
        return;
    };
    if report.skipped.is_empty() {
        return;
    }

    ui.add_space(8.0);
    ui.strong(format!("Skipped files ({})", report.skipped.len()));
    ui.separator();

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_most(180.0).clip(true))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("File");
            });
            header.col(|ui| {
                ui.strong("Reason");
            });
        })
        .body(|mut body| {
            for skipped in &report.skipped {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(&skipped.name);
                    });
                    row.col(|ui| {
                        ui.label(skipped.reason.to_string());
                    });
                });
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open stats…").clicked() {
                open_files_dialog(state);
                ui.close_menu();
            }
            let can_export = state.batch.is_some();
            if ui
                .add_enabled(can_export, egui::Button::new("Export JSON…"))
                .clicked()
            {
                export_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(report) = &state.report {
            ui.label(format!(
                "{} files selected, {} used, {} skipped",
                report.considered,
                report.accepted,
                report.skipped.len()
            ));
            if report.dropped_by_cutoff > 0 {
                ui.label(format!(
                    "(only the latest {} kept)",
                    state.settings.latest_cutoff
                ));
            }
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_files_dialog(state: &mut AppState) {
    let mut dialog = rfd::FileDialog::new()
        .set_title("Open aim-trainer stats")
        .add_filter("Stats CSV", &["csv"]);
    if let Some(dir) = &state.settings.stats_dir {
        dialog = dialog.set_directory(dir);
    }

    if let Some(paths) = dialog.pick_files() {
        let (dataset, report) = loader::load_paths(&paths, state.settings.latest_cutoff);
        log::info!(
            "Loaded {} scores in {} scenarios",
            dataset.observation_count(),
            dataset.len()
        );
        state.apply_batch(dataset, report);
    }
}

pub fn export_dialog(state: &mut AppState) {
    let Some(dataset) = state.dataset() else {
        return;
    };

    let file = rfd::FileDialog::new()
        .set_title("Export trends")
        .add_filter("JSON", &["json"])
        .set_file_name("aim-trends.json")
        .save_file();

    if let Some(path) = file {
        match export::export_json(dataset, &path) {
            Ok(()) => log::info!("Exported trends to {}", path.display()),
            Err(e) => {
                log::error!("Failed to export: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
