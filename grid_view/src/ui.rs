// ui.rs - Draws the puzzle page and turns clicks into grid actions

use eframe::egui;
use egui::{Align, Color32, Layout, Rect, RichText, Vec2};
use crate::view::{GridAction, GridView};
use grid_model::CellState;

impl eframe::App for GridView {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Applied once the whole frame is laid out
        let mut pending: Option<GridAction> = None;

        egui::TopBottomPanel::top("page_header").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    let config = self.config();
                    if !config.eyebrow.is_empty() {
                        ui.label(RichText::new(config.eyebrow.to_uppercase()).small().strong());
                    }
                    ui.heading(&config.title);
                    if !config.lede.is_empty() {
                        ui.label(&config.lede);
                    }
                });

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.button("Clear grid").clicked() {
                        pending = Some(GridAction::Clear);
                    }
                });
            });
            ui.add_space(8.0);
        });

        egui::SidePanel::right("rules_panel")
            .resizable(true)
            .default_width(320.0)
            .show(ctx, |ui| {
                let config = self.config();
                ui.heading(&config.rules_heading);
                if !config.rules_note.is_empty() {
                    ui.label(RichText::new(&config.rules_note).weak());
                }
                ui.separator();

                // Scrolls on its own so the grid stays in view
                egui::ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
                    for (number, rule) in self.numbered_rules() {
                        ui.horizontal_wrapped(|ui| {
                            ui.label(RichText::new(format!("{number}.")).strong());
                            ui.label(rule);
                        });
                        ui.add_space(4.0);
                    }
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both().show(ui, |ui| {
                self.draw_grid(ui, &mut pending);

                ui.add_space(8.0);
                if !self.config().hint.is_empty() {
                    ui.label(RichText::new(&self.config().hint).weak().italics());
                }

                ui.separator();

                let grid = self.grid();
                ui.horizontal(|ui| {
                    ui.label(format!("✓ {}", grid.count(CellState::Checked)));
                    ui.label(format!("✕ {}", grid.count(CellState::Crossed)));
                    ui.label(format!("Blank {}", grid.count(CellState::Empty)));
                });
            });
        });

        if let Some(action) = pending {
            // Rejections are already logged by the view
            if let Err(err) = self.apply(action) {
                tracing::debug!(%err, ?action, "grid action dropped");
            }
            ctx.request_repaint();
        }
    }
}

impl GridView {
    /// Lays out headings and cells, recording a click as a pending action.
    ///
    /// Returns the screen rect of every cell, row-major, as laid out this frame.
    fn draw_grid(&self, ui: &mut egui::Ui, pending: &mut Option<GridAction>) -> Vec<Vec<Rect>> {
        let config = self.config();
        let rows = &config.row_category;
        let columns = &config.column_category;
        let cell = Vec2::splat(self.cell_size);
        let mut cell_rects = Vec::with_capacity(rows.len());

        egui::Grid::new("logic_grid")
            .spacing([4.0, 4.0])
            .min_col_width(self.cell_size)
            .show(ui, |ui| {
                // Corner and column headings
                ui.vertical(|ui| {
                    ui.set_min_width(self.heading_width);
                    ui.label(RichText::new(&rows.name).strong());
                    ui.label(RichText::new("vs").weak().small());
                    ui.label(RichText::new(&columns.name).strong());
                });
                for item in &columns.items {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(&columns.name).small().weak());
                        ui.label(&item.label);
                    })
                    .response
                    .on_hover_text(&columns.description);
                }
                ui.end_row();

                for (row, (row_item, marks)) in rows.items.iter().zip(self.grid().iter_rows()).enumerate() {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(&rows.name).small().weak());
                        ui.label(&row_item.label);
                    })
                    .response
                    .on_hover_text(&rows.description);

                    let mut row_rects = Vec::with_capacity(columns.len());
                    for (column, (column_item, &state)) in columns.items.iter().zip(marks).enumerate() {
                        // Keyed by item ids so a cell keeps its identity across frames
                        ui.push_id((row_item.id.as_str(), column_item.id.as_str()), |ui| {
                            let button = egui::Button::new(self.cell_text(row, column, state)).fill(self.blank_color);
                            let response = ui
                                .add_sized(cell, button)
                                .on_hover_text(self.cell_label(row, column));
                            if response.clicked() {
                                *pending = Some(GridAction::Activate { row, column });
                            }
                            row_rects.push(response.rect);
                        });
                    }
                    cell_rects.push(row_rects);
                    ui.end_row();
                }
            });

        cell_rects
    }

    fn cell_text(&self, row: usize, column: usize, state: CellState) -> RichText {
        let color = match state {
            CellState::Empty => Color32::TRANSPARENT,
            CellState::Checked => self.check_color,
            CellState::Crossed => self.cross_color,
        };
        RichText::new(self.marker(row, column).unwrap_or("")).size(self.cell_size * 0.5).color(color)
    }
}
