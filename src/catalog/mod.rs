use rand::Rng;
use serde::Deserialize;

use crate::core::{ GrammaticalCase, PraepdrillError, Preposition, VerbCard };

/// Catalog shipped inside the binary so the quiz never depends on files on disk.
pub const BUNDLED_VERBS: &str = include_str!("../../data/verbs.json");

/// One entry as it appears in the catalog file, before validation.
#[derive(Deserialize, Debug)]
struct RawVerbRecord {
    verb: Option<String>,
    verb_form: Option<String>,
    preposition: Option<String>,
    case: Option<String>,
    examples: Option<Vec<String>>,
}

pub struct VerbCatalog {
    cards: Vec<VerbCard>,
}

impl VerbCatalog {
    pub fn load_bundled() -> Result<Self, PraepdrillError> {
        Self::parse(BUNDLED_VERBS)
    }

    /// Parses a catalog file, dropping malformed records one by one. Each skip
    /// is reported on stderr so bad entries can be fixed without the loader
    /// giving up on the rest of the file. Only an unreadable document is fatal.
    pub fn parse(source: &str) -> Result<Self, PraepdrillError> {
        let raw_values: Vec<serde_json::Value> = serde_json::from_str(source)?;
        let total = raw_values.len();

        let cards: Vec<VerbCard> = raw_values
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| {
                let validated = serde_json::from_value::<RawVerbRecord>(value)
                    .map_err(|error| error.to_string())
                    .and_then(validate_record);

                match validated {
                    Ok(card) => Some(card),
                    Err(reason) => {
                        eprintln!("Skipping verb record {}: {}", index, reason);
                        None
                    }
                }
            })
            .collect();

        if cards.is_empty() {
            return Err(PraepdrillError::EmptyCatalog);
        }

        println!("Loaded {} of {} verb records.", cards.len(), total);
        Ok(VerbCatalog { cards })
    }

    pub fn cards(&self) -> &[VerbCard] {
        &self.cards
    }

    /// Draws a card uniformly at random. Construction guarantees the catalog
    /// holds at least one card.
    pub fn pick(&self, rng: &mut impl Rng) -> &VerbCard {
        &self.cards[rng.random_range(0..self.cards.len())]
    }
}

fn validate_record(record: RawVerbRecord) -> Result<VerbCard, String> {
    let verb = record
        .verb
        .filter(|verb| !verb.trim().is_empty())
        .ok_or("missing or empty verb text")?;

    let preposition_label = record.preposition.ok_or("missing preposition")?;
    let preposition = Preposition::from_label(&preposition_label)
        .ok_or_else(|| format!("unknown preposition '{}'", preposition_label))?;

    let case_label = record.case.ok_or("missing case")?;
    let case = GrammaticalCase::from_label(&case_label)
        .ok_or_else(|| format!("unknown case '{}'", case_label))?;

    // The short form doubles as the full pattern for entries added before
    // the catalog carried one.
    let verb_form = record
        .verb_form
        .filter(|form| !form.trim().is_empty())
        .unwrap_or_else(|| verb.clone());

    Ok(VerbCard {
        verb,
        verb_form,
        preposition,
        case,
        examples: record.examples.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_records_load_in_file_order() {
        let source = r#"[
            {"verb": "denken", "verb_form": "denken an + Akkusativ", "preposition": "an", "case": "accusative", "examples": ["Ich denke oft an meine Kindheit."]},
            {"verb": "träumen", "verb_form": "träumen von + Dativ", "preposition": "von", "case": "dative", "examples": []}
        ]"#;

        let catalog = VerbCatalog::parse(source).unwrap();

        assert_eq!(catalog.cards().len(), 2);
        assert_eq!(catalog.cards()[0].verb, "denken");
        assert_eq!(catalog.cards()[0].preposition, Preposition::An);
        assert_eq!(catalog.cards()[0].case, GrammaticalCase::Accusative);
        assert_eq!(catalog.cards()[1].verb, "träumen");
        assert_eq!(catalog.cards()[1].preposition, Preposition::Von);
    }

    #[test]
    fn malformed_records_are_skipped() {
        let source = r#"[
            {"verb": "denken", "preposition": "an", "case": "accusative"},
            {"verb": "warten", "preposition": "auf"},
            {"verb": "bestehen", "preposition": "onto", "case": "dative"},
            {"verb": "fragen", "preposition": "nach", "case": "dativ"},
            {"verb": "   ", "preposition": "mit", "case": "dative"},
            {"preposition": "zu", "case": "dative"}
        ]"#;

        let catalog = VerbCatalog::parse(source).unwrap();

        assert_eq!(catalog.cards().len(), 1);
        assert_eq!(catalog.cards()[0].verb, "denken");
    }

    #[test]
    fn type_mismatched_records_are_skipped() {
        let source = r#"[
            {"verb": "denken", "preposition": "an", "case": "accusative"},
            {"verb": "warten", "preposition": "auf", "case": 5},
            {"verb": "glauben", "preposition": "an", "case": "accusative", "examples": "keine"},
            {"verb": ["hoffen"], "preposition": "auf", "case": "accusative"},
            null
        ]"#;

        let catalog = VerbCatalog::parse(source).unwrap();

        assert_eq!(catalog.cards().len(), 1);
        assert_eq!(catalog.cards()[0].verb, "denken");
    }

    #[test]
    fn missing_optional_fields_take_defaults() {
        let source = r#"[{"verb": "glauben", "preposition": "an", "case": "accusative"}]"#;

        let catalog = VerbCatalog::parse(source).unwrap();

        assert_eq!(catalog.cards()[0].verb_form, "glauben");
        assert!(catalog.cards()[0].examples.is_empty());
    }

    #[test]
    fn catalog_with_no_usable_records_is_an_error() {
        let all_malformed = r#"[
            {"verb": "warten", "preposition": "auf"},
            {"verb": "", "preposition": "an", "case": "dative"}
        ]"#;

        assert!(matches!(
            VerbCatalog::parse(all_malformed),
            Err(PraepdrillError::EmptyCatalog)
        ));
        assert!(matches!(VerbCatalog::parse("[]"), Err(PraepdrillError::EmptyCatalog)));
    }

    #[test]
    fn unreadable_json_is_an_error() {
        assert!(matches!(
            VerbCatalog::parse("not json"),
            Err(PraepdrillError::Json(_))
        ));
    }

    #[test]
    fn bundled_catalog_loads() {
        let catalog = VerbCatalog::load_bundled().unwrap();

        assert_eq!(catalog.cards()[0].verb, "ändern");
        assert!(catalog.cards().iter().all(|card| card.preposition == Preposition::An));
    }

    #[test]
    fn pick_only_returns_catalog_cards() {
        let catalog = VerbCatalog::load_bundled().unwrap();
        let mut rng = rand::rng();

        for _ in 0..50 {
            let drawn = catalog.pick(&mut rng);
            assert!(catalog.cards().iter().any(|card| card.verb == drawn.verb));
        }
    }
}
