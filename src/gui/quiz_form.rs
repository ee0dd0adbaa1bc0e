use eframe::egui;

use crate::{
    core::{
        GrammaticalCase,
        Preposition,
    },
    gui::theme::Theme,
    quiz::QuizSession,
};

pub struct QuizForm;

impl QuizForm {
    /// Draws the prompt and both answer groups. Returns true when "Check"
    /// was clicked this frame.
    pub fn show(ui: &mut egui::Ui, session: &mut QuizSession, theme: &Theme) -> bool {
        ui.vertical_centered(|ui| {
            ui.label(theme.bold(ui.ctx(), &session.current_card().verb).size(28.0));
        });

        ui.add_space(10.0);

        ui.group(|ui| {
            ui.label(theme.heading(ui.ctx(), "Präposition:"));
            ui.horizontal(|ui| {
                for column in Preposition::ALL.chunks(8) {
                    ui.vertical(|ui| {
                        for &preposition in column {
                            let selected = session.selected_preposition() == Some(preposition);
                            if ui.radio(selected, preposition.label()).clicked() {
                                session.select_preposition(preposition);
                            }
                        }
                    });
                    ui.add_space(24.0);
                }
            });
        });

        ui.add_space(6.0);

        ui.group(|ui| {
            ui.label(theme.heading(ui.ctx(), "Kasus:"));
            ui.horizontal(|ui| {
                for case in GrammaticalCase::ALL {
                    let selected = session.selected_case() == Some(case);
                    if ui.radio(selected, case.german_name()).clicked() {
                        session.select_case(case);
                    }
                }
            });
        });

        ui.add_space(10.0);

        let mut submitted = false;
        ui.vertical_centered(|ui| {
            if ui.button(egui::RichText::new("Check").size(16.0)).clicked() {
                submitted = true;
            }
        });

        submitted
    }
}
