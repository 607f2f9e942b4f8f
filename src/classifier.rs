//! Decides whether an installed program is likely a game.
//!
//! The decision is an ordered list of checks, the first that matches wins:
//!
//! 1. a program with an empty name is never a game
//! 2. a publisher containing a trusted game publisher term is always a game
//! 3. a name containing an excluded term is never a game
//! 4. a name containing a genre keyword is a game
//!
//! Anything else is not a game. All matching is case-insensitive substring matching.

use crate::{config::HeuristicRules, data::ProgramRecord};

/// Outcome of classifying a single program, along with the term which decided it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict<'a> {
    MissingName,
    TrustedPublisher(&'a str),
    Excluded(&'a str),
    GenreKeyword(&'a str),
    NoMatch,
}

impl Verdict<'_> {
    pub fn is_game(&self) -> bool {
        matches!(self, Verdict::TrustedPublisher(_) | Verdict::GenreKeyword(_))
    }
}

#[derive(Debug, Clone, Default)]
pub struct Classifier {
    rules: HeuristicRules,
}

fn find_term<'a>(terms: &'a [String], haystack: &str) -> Option<&'a str> {
    terms
        .iter()
        .find(|term| haystack.contains(term.as_str()))
        .map(String::as_str)
}

impl Classifier {
    pub fn new(rules: HeuristicRules) -> Self {
        Classifier {
            rules: rules.normalised(),
        }
    }

    pub fn classify(&self, record: &ProgramRecord) -> Verdict<'_> {
        if record.name.is_empty() {
            return Verdict::MissingName;
        }

        let name = record.name.to_lowercase();
        let publisher = record
            .publisher
            .as_deref()
            .map(str::to_lowercase)
            .unwrap_or_default();

        if let Some(term) = find_term(&self.rules.game_publishers, &publisher) {
            return Verdict::TrustedPublisher(term);
        }

        if let Some(term) = find_term(&self.rules.non_game_keywords, &name) {
            return Verdict::Excluded(term);
        }

        if let Some(term) = find_term(&self.rules.game_keywords, &name) {
            return Verdict::GenreKeyword(term);
        }

        Verdict::NoMatch
    }

    #[tracing::instrument(level = "trace", skip_all, fields(name = %record.name))]
    pub fn is_likely_game(&self, record: &ProgramRecord) -> bool {
        let verdict = self.classify(record);
        tracing::trace!("Verdict for '{}': {verdict:?}", record.name);

        verdict.is_game()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::data::SupportedSources;

    fn record(name: &str, publisher: Option<&str>) -> ProgramRecord {
        ProgramRecord {
            name: name.to_owned(),
            install_location: Some(r"D:\Games".to_owned()),
            publisher: publisher.map(String::from),
            source_tag: None,
            source: SupportedSources::UninstallMachine,
        }
    }

    #[test_case("", None; "empty")]
    #[test_case("", Some("Valve"); "empty with trusted publisher")]
    fn test_missing_name(name: &str, publisher: Option<&str>) {
        let classifier = Classifier::default();
        let record = record(name, publisher);

        assert_eq!(classifier.classify(&record), Verdict::MissingName);
        assert!(!classifier.is_likely_game(&record));
    }

    #[test_case("Adobe Game Tool", "Steam", "steam"; "publisher beats excluded name")]
    #[test_case("Microsoft Flight", "Xbox Game Studios", "xbox game studios"; "studio")]
    #[test_case("Some Launcher", "BATTLE.NET", "battle.net"; "upper case publisher")]
    #[test_case(" ", "Steam", "steam"; "blank name")]
    #[test_case("Windows Driver Update", "Ubisoft Entertainment", "ubisoft"; "every excluded term")]
    fn test_trusted_publisher(name: &str, publisher: &str, term: &str) {
        let classifier = Classifier::default();
        let record = record(name, Some(publisher));

        assert_eq!(classifier.classify(&record), Verdict::TrustedPublisher(term));
        assert!(classifier.is_likely_game(&record));
    }

    #[test_case("Microsoft Office Update", Some("Microsoft"), "microsoft"; "office update")]
    #[test_case("Game Capture Tool", None, "tool"; "excluded beats genre")]
    #[test_case("RPG Maker Runtime", Some("Degica"), "runtime"; "runtime")]
    fn test_excluded(name: &str, publisher: Option<&str>, term: &str) {
        let classifier = Classifier::default();
        let record = record(name, publisher);

        assert_eq!(classifier.classify(&record), Verdict::Excluded(term));
        assert!(!classifier.is_likely_game(&record));
    }

    #[test_case("RPG Adventure Quest", None, "adventure"; "several keywords")]
    #[test_case("Euro Truck Simulator 2", Some("SCS Software"), "simulator"; "simulator")]
    #[test_case("Factorio: Space Age Edition", Some("Wube"), "edition"; "edition")]
    fn test_genre_keyword(name: &str, publisher: Option<&str>, term: &str) {
        let classifier = Classifier::default();
        let record = record(name, publisher);

        assert_eq!(classifier.classify(&record), Verdict::GenreKeyword(term));
        assert!(classifier.is_likely_game(&record));
    }

    #[test_case("7-Zip", Some("Igor Pavlov"); "archiver")]
    #[test_case("Total War: Warhammer", None; "no listed keyword")]
    fn test_no_match(name: &str, publisher: Option<&str>) {
        let classifier = Classifier::default();
        let record = record(name, publisher);

        assert_eq!(classifier.classify(&record), Verdict::NoMatch);
        assert!(!classifier.is_likely_game(&record));
    }

    #[test]
    fn test_custom_rules_are_normalised() {
        let classifier = Classifier::new(HeuristicRules {
            game_publishers: vec!["Paradox".into()],
            game_keywords: vec!["  WARHAMMER".into()],
            non_game_keywords: vec!["".into()],
        });

        assert!(classifier.is_likely_game(&record("Total War: Warhammer", None)));
        assert!(classifier.is_likely_game(&record("Stellaris", Some("Paradox Interactive"))));
        assert!(!classifier.is_likely_game(&record("7-Zip", None)));
    }
}
