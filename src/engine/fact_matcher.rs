use std::collections::HashSet;

use crate::model::fact::{FactCatalog, FactEntry};

/// Shown when no catalog question shares a keyword with the input.
pub const FALLBACK_ANSWER: &str =
    "I'm not sure, but that's a great question! Try rephrasing or ask about another prom sustainability topic.";

/// Words ignored when comparing questions. The exact contents change
/// which answer wins, so keep the list as is.
pub const STOPWORDS: &[&str] = &[
    "what", "is", "the", "of", "a", "an", "how", "can", "i", "at", "to", "for", "and", "in", "on",
    "why", "are", "do", "does", "about", "with", "by", "from", "it", "you", "your", "my", "we",
    "our", "be", "as", "that", "this", "or", "any", "options", "make", "help", "me", "prom",
];

/// Lowercases, drops everything outside `[a-z0-9 ]`, splits on single
/// spaces and removes empty tokens and stopwords.
pub fn keywords(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == ' ')
        .collect();

    cleaned
        .split(' ')
        .filter(|word| !word.is_empty() && !STOPWORDS.contains(word))
        .map(str::to_string)
        .collect()
}

struct IndexedFact {
    entry: FactEntry,
    keywords: HashSet<String>,
}

/// Best-overlap lookup over a fixed question/answer list.
pub struct FactMatcher {
    facts: Vec<IndexedFact>,
}

impl FactMatcher {
    pub fn new(catalog: FactCatalog) -> Self {
        let facts = catalog
            .entries
            .into_iter()
            .map(|entry| IndexedFact {
                keywords: keywords(&entry.question).into_iter().collect(),
                entry,
            })
            .collect();

        Self { facts }
    }

    /// Entry sharing the most distinct keywords with `question`.
    /// Ties go to the earlier entry; zero overlap is no match.
    pub fn best_match(&self, question: &str) -> Option<&FactEntry> {
        let wanted: HashSet<String> = keywords(question).into_iter().collect();

        let mut best: Option<(&FactEntry, usize)> = None;
        for fact in &self.facts {
            let score = wanted.intersection(&fact.keywords).count();
            if score > 0 && best.map_or(true, |(_, top)| score > top) {
                best = Some((&fact.entry, score));
            }
        }

        best.map(|(entry, _)| entry)
    }

    pub fn answer(&self, question: &str) -> Option<&str> {
        self.best_match(question).map(|f| f.answer.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin() -> FactMatcher {
        FactMatcher::new(FactCatalog::builtin().unwrap())
    }

    fn fact(question: &str, answer: &str) -> FactEntry {
        FactEntry {
            question: question.into(),
            answer: answer.into(),
        }
    }

    #[test]
    fn keywords_strip_punctuation_and_stopwords() {
        assert_eq!(
            keywords("What is the carbon footprint of a limousine?"),
            ["carbon", "footprint", "limousine"]
        );
        assert_eq!(
            keywords("How can I make prom decorations eco-friendly?"),
            ["decorations", "ecofriendly"]
        );
        assert_eq!(keywords("  PROM   Help!! "), Vec::<String>::new());
    }

    #[test]
    fn keywords_do_not_split_on_other_whitespace() {
        assert_eq!(keywords("carbon\tfootprint"), ["carbonfootprint"]);
    }

    #[test]
    fn limousine_question_finds_limousine_fact() {
        let matcher = builtin();
        let entry = matcher
            .best_match("What is the carbon footprint of a limousine?")
            .unwrap();

        assert_eq!(entry.question, "What is the carbon footprint of a limousine?");
        assert!(entry.answer.contains("45 kg"));
    }

    #[test]
    fn higher_overlap_beats_earlier_entry() {
        let matcher = builtin();
        let entry = matcher
            .best_match("carbon footprint of a new dress")
            .unwrap();

        assert_eq!(entry.question, "What is the carbon footprint of a new prom dress?");
    }

    #[test]
    fn unknown_question_has_no_match() {
        let matcher = builtin();

        assert!(matcher.answer("xyz").is_none());
        assert!(matcher.answer("what is the prom?").is_none());
    }

    #[test]
    fn ties_go_to_first_entry() {
        let matcher = FactMatcher::new(FactCatalog::from(vec![
            fact("Are bamboo straws good?", "first"),
            fact("Are bamboo plates good?", "second"),
            fact("Bamboo straws and plates", "third"),
        ]));

        assert_eq!(matcher.answer("bamboo"), Some("first"));
        assert_eq!(matcher.answer("bamboo plates"), Some("second"));
        assert_eq!(matcher.answer("bamboo straws plates"), Some("third"));
    }

    #[test]
    fn ties_in_builtin_catalog() {
        // three entries mention eco-friendly, decorations one is listed first
        let matcher = builtin();
        let entry = matcher.best_match("eco-friendly").unwrap();
        assert_eq!(entry.question, "How can I make prom decorations eco-friendly?");
    }

    #[test]
    fn repeated_words_count_once() {
        let matcher = FactMatcher::new(FactCatalog::from(vec![
            fact("solar solar solar", "solar"),
            fact("solar panels roof", "panels"),
        ]));

        assert_eq!(matcher.answer("solar solar solar solar"), Some("solar"));
        assert_eq!(matcher.answer("solar panels"), Some("panels"));
    }

    #[test]
    fn empty_catalog_never_matches() {
        let matcher = FactMatcher::new(FactCatalog::default());
        assert!(matcher.best_match("carbon").is_none());
    }
}
