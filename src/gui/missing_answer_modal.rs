use eframe::egui;

/// Blocking notice shown when "Check" is pressed with an incomplete answer.
pub struct MissingAnswerModal {
    open: bool,
}

impl MissingAnswerModal {
    pub fn new() -> Self {
        Self { open: false }
    }

    pub fn open_modal(&mut self) {
        self.open = true;
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        if self.open {
            let modal = egui::Modal::new(egui::Id::new("missing_answer_modal")).show(ctx, |ui| {
                ui.set_width(320.0);

                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("⚠").size(24.0).color(egui::Color32::RED));
                    ui.label(egui::RichText::new("Missing an answer!").size(18.0).strong());
                });

                ui.add_space(10.0);

                ui.label("Bitte wähle eine Präposition und einen Kasus aus.");

                ui.add_space(15.0);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("OK").clicked() {
                        ui.close();
                    }
                });
            });

            if modal.should_close() {
                self.open = false;
            }
        }
    }
}

impl Default for MissingAnswerModal {
    fn default() -> Self {
        Self::new()
    }
}
