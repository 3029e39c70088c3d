use eframe::egui;
use swot_core::{Category, FieldEdit, SwotEngine};

const BAR_COLOR: egui::Color32 = egui::Color32::from_rgb(0, 123, 255);
const CHART_HEIGHT: f32 = 160.0;

/// The SWOT analysis screen: draft-row editor plus a results pop-up with
/// totals, verdict, bar chart, and the committed record.
///
/// All state lives in the engine; the UI reads the projection each frame
/// and routes widget interactions back through the engine's operations.
pub struct SwotBoardApp {
    engine: SwotEngine,
}

impl SwotBoardApp {
    pub fn new() -> Self {
        Self {
            engine: SwotEngine::new(),
        }
    }

    fn show_draft_card(&mut self, ui: &mut egui::Ui, row: usize) {
        let draft = self.engine.drafts()[row].clone();

        egui::Frame::group(ui.style())
            .corner_radius(egui::CornerRadius::same(10))
            .inner_margin(egui::Margin::same(12))
            .show(ui, |ui| {
                let picker_label = draft
                    .category
                    .map(Category::label)
                    .unwrap_or("Pick a category (S, W, O, T)");
                if ui
                    .add_sized([ui.available_width(), 30.0], egui::Button::new(picker_label))
                    .clicked()
                {
                    self.engine.toggle_dropdown(row);
                }

                if draft.dropdown_open {
                    for category in Category::ALL {
                        if ui
                            .add_sized(
                                [ui.available_width(), 24.0],
                                egui::Button::new(category.label()),
                            )
                            .clicked()
                        {
                            self.engine.select_category(row, category);
                        }
                    }
                }

                let mut description = draft.description.clone();
                let response = ui.add_sized(
                    [ui.available_width(), 30.0],
                    egui::TextEdit::singleline(&mut description)
                        .id_salt(("description", row))
                        .hint_text("Description"),
                );
                if response.changed() {
                    self.engine
                        .set_field(row, FieldEdit::Description(description));
                }

                let mut score_text = draft.score_text.clone();
                let response = ui.add_sized(
                    [ui.available_width(), 30.0],
                    egui::TextEdit::singleline(&mut score_text)
                        .id_salt(("score", row))
                        .hint_text("Score"),
                );
                if response.changed() {
                    self.engine.set_field(row, FieldEdit::ScoreText(score_text));
                }
            });
        ui.add_space(6.0);
    }

    fn show_results_window(&mut self, ctx: &egui::Context) {
        let mut close_requested = false;

        egui::Window::new("swot_results")
            .title_bar(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.set_width(ui.available_width().min(400.0));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("\u{2715}").clicked() {
                        close_requested = true;
                    }
                });

                egui::ScrollArea::vertical()
                    .max_height(560.0)
                    .show(ui, |ui| {
                        let totals = *self.engine.totals();
                        ui.strong(format!("Overall score: {}", self.engine.overall_score()));
                        for category in Category::ALL {
                            ui.label(format!("{}: {}", category.label(), totals.get(category)));
                        }
                        ui.add_space(4.0);
                        ui.strong(format!(
                            "Strategy outlook: {}",
                            self.engine.verdict().label()
                        ));

                        ui.separator();
                        show_bar_chart(ui, &totals.as_array());
                        ui.separator();

                        for entry in self.engine.committed() {
                            egui::Frame::group(ui.style())
                                .corner_radius(egui::CornerRadius::same(10))
                                .inner_margin(egui::Margin::same(10))
                                .show(ui, |ui| {
                                    ui.label(format!(
                                        "{}: {}",
                                        entry.category.label(),
                                        entry.description
                                    ));
                                    ui.label(format!("Score: {}", entry.score));
                                });
                            ui.add_space(4.0);
                        }
                    });
            });

        if close_requested {
            self.engine.dismiss_results();
        }
    }
}

impl eframe::App for SwotBoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.add_space(8.0);
                    ui.vertical_centered(|ui| ui.heading("SWOT Analysis"));
                    ui.add_space(8.0);

                    for row in 0..self.engine.drafts().len() {
                        self.show_draft_card(ui, row);
                    }

                    ui.add_space(4.0);
                    ui.horizontal(|ui| {
                        let half = (ui.available_width() - ui.spacing().item_spacing.x) / 2.0;
                        if ui.add_sized([half, 34.0], egui::Button::new("Add")).clicked() {
                            self.engine.add_row();
                        }
                        if ui
                            .add_sized([half, 34.0], egui::Button::new("Average"))
                            .clicked()
                        {
                            self.engine.submit_entries();
                        }
                    });
                });
        });

        if self.engine.results_visible() {
            self.show_results_window(ctx);
        }
    }
}

fn show_bar_chart(ui: &mut egui::Ui, totals: &[f64; 4]) {
    let fractions = bar_fractions(totals);
    let width = ui.available_width();
    let (rect, _) =
        ui.allocate_exact_size(egui::vec2(width, CHART_HEIGHT + 18.0), egui::Sense::hover());
    let baseline = rect.top() + CHART_HEIGHT;

    ui.painter().line_segment(
        [
            egui::pos2(rect.left(), baseline),
            egui::pos2(rect.right(), baseline),
        ],
        egui::Stroke::new(1.0, ui.visuals().weak_text_color()),
    );

    let slot = rect.width() / 4.0;
    let bar_width = (slot * 0.6).min(48.0);
    for (i, category) in Category::ALL.iter().enumerate() {
        let center_x = rect.left() + slot * (i as f32 + 0.5);
        let height = fractions[i] * CHART_HEIGHT;
        if height > 0.0 {
            let bar = egui::Rect::from_min_max(
                egui::pos2(center_x - bar_width / 2.0, baseline - height),
                egui::pos2(center_x + bar_width / 2.0, baseline),
            );
            ui.painter()
                .rect_filled(bar, egui::CornerRadius::same(5), BAR_COLOR);
        }
        ui.painter().text(
            egui::pos2(center_x, baseline + 4.0),
            egui::Align2::CENTER_TOP,
            category.short_label(),
            egui::FontId::proportional(13.0),
            ui.visuals().text_color(),
        );
    }
}

/// Normalized bar heights in the fixed S/W/O/T order. Bars scale against
/// the largest finite total; non-finite or non-positive totals draw as
/// zero-height bars.
fn bar_fractions(totals: &[f64; 4]) -> [f32; 4] {
    let max = totals
        .iter()
        .copied()
        .filter(|total| total.is_finite())
        .fold(0.0_f64, f64::max);
    let mut fractions = [0.0_f32; 4];
    if max <= 0.0 {
        return fractions;
    }
    for (fraction, &total) in fractions.iter_mut().zip(totals) {
        if total.is_finite() && total > 0.0 {
            *fraction = (total / max) as f32;
        }
    }
    fractions
}

#[cfg(test)]
mod tests {
    use super::bar_fractions;

    #[test]
    fn bar_fractions_scale_against_the_largest_total() {
        let fractions = bar_fractions(&[10.0, 5.0, 0.0, 2.5]);
        assert_eq!(fractions, [1.0, 0.5, 0.0, 0.25]);
    }

    #[test]
    fn bar_fractions_are_zero_when_nothing_committed() {
        assert_eq!(bar_fractions(&[0.0; 4]), [0.0; 4]);
    }

    #[test]
    fn poisoned_totals_draw_as_empty_bars() {
        let fractions = bar_fractions(&[f64::NAN, 4.0, f64::INFINITY, 1.0]);
        assert_eq!(fractions, [0.0, 1.0, 0.0, 0.25]);
    }

    #[test]
    fn negative_totals_draw_as_empty_bars() {
        let fractions = bar_fractions(&[-3.0, 6.0, 3.0, 0.0]);
        assert_eq!(fractions, [0.0, 1.0, 0.5, 0.0]);
    }
}
