/// The prepositions a verb can govern, in quiz display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preposition {
    An,
    Auf,
    Aus,
    Bei,
    Fuer,
    Gegen,
    In,
    Mit,
    Nach,
    Ueber,
    Um,
    Unter,
    Von,
    Vor,
    Zu,
    Zwischen,
}

impl Preposition {
    pub const ALL: [Preposition; 16] = [
        Preposition::An,
        Preposition::Auf,
        Preposition::Aus,
        Preposition::Bei,
        Preposition::Fuer,
        Preposition::Gegen,
        Preposition::In,
        Preposition::Mit,
        Preposition::Nach,
        Preposition::Ueber,
        Preposition::Um,
        Preposition::Unter,
        Preposition::Von,
        Preposition::Vor,
        Preposition::Zu,
        Preposition::Zwischen,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Preposition::An => "an",
            Preposition::Auf => "auf",
            Preposition::Aus => "aus",
            Preposition::Bei => "bei",
            Preposition::Fuer => "für",
            Preposition::Gegen => "gegen",
            Preposition::In => "in",
            Preposition::Mit => "mit",
            Preposition::Nach => "nach",
            Preposition::Ueber => "über",
            Preposition::Um => "um",
            Preposition::Unter => "unter",
            Preposition::Von => "von",
            Preposition::Vor => "vor",
            Preposition::Zu => "zu",
            Preposition::Zwischen => "zwischen",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Preposition::ALL.into_iter().find(|p| p.label() == label)
    }
}

/// The four German cases. Catalog files name them in English, the quiz
/// displays them in German.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrammaticalCase {
    Nominative,
    Accusative,
    Dative,
    Genitive,
}

impl GrammaticalCase {
    pub const ALL: [GrammaticalCase; 4] = [
        GrammaticalCase::Nominative,
        GrammaticalCase::Accusative,
        GrammaticalCase::Dative,
        GrammaticalCase::Genitive,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            GrammaticalCase::Nominative => "nominative",
            GrammaticalCase::Accusative => "accusative",
            GrammaticalCase::Dative => "dative",
            GrammaticalCase::Genitive => "genitive",
        }
    }

    pub fn german_name(&self) -> &'static str {
        match self {
            GrammaticalCase::Nominative => "Nominativ",
            GrammaticalCase::Accusative => "Akkusativ",
            GrammaticalCase::Dative => "Dativ",
            GrammaticalCase::Genitive => "Genitiv",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        GrammaticalCase::ALL.into_iter().find(|c| c.label() == label)
    }
}

#[derive(Debug, Clone)]
pub struct VerbCard {
    pub verb: String,              // Prompt shown during the quiz
    pub verb_form: String,         // Full pattern shown in the review panel
    pub preposition: Preposition,  // Governed preposition
    pub case: GrammaticalCase,     // Case the preposition takes with this verb
    pub examples: Vec<String>,     // Example sentences, may be empty
}
