use eframe::egui;

use crate::{
    core::{
        GrammaticalCase,
        Preposition,
    },
    gui::theme::Theme,
    quiz::LastAnswer,
};

pub struct ReviewPanel;

impl ReviewPanel {
    /// Shows the verdict for the answer that was just graded, together with
    /// the card's full pattern and its example sentences.
    pub fn show(ui: &mut egui::Ui, answer: &LastAnswer, theme: &Theme) {
        ui.group(|ui| {
            ui.set_width(ui.available_width());

            ui.label(theme.heading(ui.ctx(), &answer.card.verb_form).size(18.0));

            for example in &answer.card.examples {
                ui.label(
                    egui::RichText::new(example).italics().color(theme.comment(ui.ctx())),
                );
            }

            ui.add_space(6.0);

            if answer.correct {
                ui.label(
                    egui::RichText::new("Richtig!").color(theme.green(ui.ctx())).strong(),
                );
            } else {
                ui.label(
                    egui::RichText::new(format!(
                        "Falsch! Gewählt: {}",
                        pattern(answer.chosen_preposition, answer.chosen_case)
                    ))
                    .color(theme.red(ui.ctx())),
                );
                ui.label(
                    egui::RichText::new(format!(
                        "Richtig ist: {}",
                        pattern(answer.card.preposition, answer.card.case)
                    ))
                    .color(theme.green(ui.ctx())),
                );
            }
        });
    }
}

fn pattern(preposition: Preposition, case: GrammaticalCase) -> String {
    format!("{} + {}", preposition.label(), case.german_name())
}
