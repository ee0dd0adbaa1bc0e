use eframe::egui;

use super::{
    missing_answer_modal::MissingAnswerModal,
    quiz_form::QuizForm,
    review_panel::ReviewPanel,
    theme::{
        set_theme,
        Theme,
    },
    top_bar::{
        DEFAULT_ZOOM,
        TopBar,
    },
};
use crate::quiz::{
    QuizSession,
    SubmitError,
};

pub struct PraepdrillApp {
    // Quiz State
    session: QuizSession,

    // UI State
    theme: Theme,
    zoom: f32,
    missing_answer: MissingAnswerModal,
}

impl PraepdrillApp {
    pub fn new(cc: &eframe::CreationContext<'_>, session: QuizSession) -> Self {
        let theme = Theme::nord();

        set_theme(&cc.egui_ctx, theme.clone());
        cc.egui_ctx.set_zoom_factor(DEFAULT_ZOOM);

        Self {
            session,
            theme,
            zoom: DEFAULT_ZOOM,
            missing_answer: MissingAnswerModal::new(),
        }
    }
}

impl eframe::App for PraepdrillApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        TopBar::show(ctx, &mut self.zoom);

        egui::TopBottomPanel::bottom("stats_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("Number Correct: {}", self.session.number_correct()));
                ui.separator();
                ui.label(format!("Total Answered: {}", self.session.total_answered()));
                ui.separator();
                ui.label(format!("Percentage: {}%", self.session.accuracy_percentage()));
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(self.theme.heading(ui.ctx(), "Verben mit Präpositionen").size(22.0));
            });

            ui.add_space(8.0);

            egui::ScrollArea::vertical().show(ui, |ui| {
                if QuizForm::show(ui, &mut self.session, &self.theme) {
                    match self.session.submit() {
                        Ok(()) => {}
                        Err(SubmitError::MissingSelection) => self.missing_answer.open_modal(),
                    }
                }

                if let Some(answer) = self.session.last_answer() {
                    ui.add_space(10.0);
                    ReviewPanel::show(ui, answer, &self.theme);
                }
            });
        });

        self.missing_answer.show(ctx);
    }
}
