use rand::rng;
use thiserror::Error;

use crate::{
    catalog::VerbCatalog,
    core::{ GrammaticalCase, Preposition, VerbCard },
};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SubmitError {
    #[error("both a preposition and a case must be selected")]
    MissingSelection,
}

/// The answer that was just graded, kept around so the verdict and the
/// card's full pattern stay on screen while the next verb is prompted.
#[derive(Debug, Clone)]
pub struct LastAnswer {
    pub card: VerbCard,
    pub chosen_preposition: Preposition,
    pub chosen_case: GrammaticalCase,
    pub correct: bool,
}

/// One running quiz over a verb catalog. All state changes go through
/// [`QuizSession::select_preposition`], [`QuizSession::select_case`] and
/// [`QuizSession::submit`].
pub struct QuizSession {
    catalog: VerbCatalog,
    current: VerbCard,
    number_correct: u32,
    total_answered: u32,
    selected_preposition: Option<Preposition>,
    selected_case: Option<GrammaticalCase>,
    last_answer: Option<LastAnswer>,
}

impl QuizSession {
    pub fn new(catalog: VerbCatalog) -> Self {
        let mut rng = rng();
        let current = catalog.pick(&mut rng).clone();

        QuizSession {
            catalog,
            current,
            number_correct: 0,
            total_answered: 0,
            selected_preposition: None,
            selected_case: None,
            last_answer: None,
        }
    }

    pub fn current_card(&self) -> &VerbCard {
        &self.current
    }

    pub fn number_correct(&self) -> u32 {
        self.number_correct
    }

    pub fn total_answered(&self) -> u32 {
        self.total_answered
    }

    pub fn selected_preposition(&self) -> Option<Preposition> {
        self.selected_preposition
    }

    pub fn selected_case(&self) -> Option<GrammaticalCase> {
        self.selected_case
    }

    pub fn last_answer(&self) -> Option<&LastAnswer> {
        self.last_answer.as_ref()
    }

    pub fn select_preposition(&mut self, preposition: Preposition) {
        self.selected_preposition = Some(preposition);
    }

    pub fn select_case(&mut self, case: GrammaticalCase) {
        self.selected_case = Some(case);
    }

    /// Grades the pending selections against the current card. The answer
    /// only counts as correct when preposition and case both match. On
    /// success the session moves to a fresh card and the selections reset;
    /// with either selection missing nothing changes.
    pub fn submit(&mut self) -> Result<(), SubmitError> {
        let (preposition, case) = match (self.selected_preposition, self.selected_case) {
            (Some(preposition), Some(case)) => (preposition, case),
            _ => return Err(SubmitError::MissingSelection),
        };

        let correct = preposition == self.current.preposition && case == self.current.case;
        if correct {
            self.number_correct += 1;
        }
        self.total_answered += 1;

        let mut rng = rng();
        let next = self.catalog.pick(&mut rng).clone();
        let answered = std::mem::replace(&mut self.current, next);

        self.last_answer = Some(LastAnswer {
            card: answered,
            chosen_preposition: preposition,
            chosen_case: case,
            correct,
        });
        self.selected_preposition = None;
        self.selected_case = None;

        Ok(())
    }

    /// Share of correct answers in percent, rounded to the nearest whole
    /// number. Before the first submission this reads 0.
    pub fn accuracy_percentage(&self) -> u32 {
        let attempts = self.total_answered.max(1);
        (100.0 * f64::from(self.number_correct) / f64::from(attempts)).round() as u32
    }
}
