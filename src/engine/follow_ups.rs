/// Three related questions offered after a tutor answer.
#[derive(Debug, PartialEq, Eq)]
pub struct FollowUpGroup {
    pub topic: &'static str,
    pub questions: [&'static str; 3],
}

pub const TRANSPORTATION: FollowUpGroup = FollowUpGroup {
    topic: "transportation",
    questions: [
        "What is the carbon footprint of a limousine?",
        "How can I make prom more inclusive and accessible?",
        "How can I reduce energy use at prom?",
    ],
};

pub const DECOR: FollowUpGroup = FollowUpGroup {
    topic: "decor",
    questions: [
        "What are some alternatives to balloons for prom decor?",
        "How can I make prom decorations eco-friendly?",
        "What should I do with leftover prom decorations?",
    ],
};

pub const FOOD_WASTE: FollowUpGroup = FollowUpGroup {
    topic: "food waste",
    questions: [
        "How can I make the prom menu more sustainable?",
        "What are the benefits of a plant-based prom menu?",
        "How can I encourage recycling at prom?",
    ],
};

pub const ATTIRE: FollowUpGroup = FollowUpGroup {
    topic: "attire",
    questions: [
        "Is it better to rent or buy prom attire?",
        "What is the environmental impact of fast fashion for prom?",
        "How can I make prom invitations eco-friendly?",
    ],
};

pub const PLASTIC: FollowUpGroup = FollowUpGroup {
    topic: "plastic",
    questions: [
        "What is the impact of single-use plastics at prom?",
        "How can I encourage recycling at prom?",
        "Are there eco-friendly options for prom party favors?",
    ],
};

pub const ENERGY: FollowUpGroup = FollowUpGroup {
    topic: "energy",
    questions: [
        "How can I make prom decorations eco-friendly?",
        "What are some alternatives to balloons for prom decor?",
        "How can I make prom tickets more sustainable?",
    ],
};

pub const DEFAULT: FollowUpGroup = FollowUpGroup {
    topic: "default",
    questions: [
        "What are some green transportation options for prom?",
        "How can I make prom decorations eco-friendly?",
        "What are sustainable prom dress options?",
    ],
};

/// Substring triggers in priority order; first hit wins.
/// Matching is by plain substring, so "carbon" hits "car".
pub const TOPIC_TRIGGERS: &[(&[&str], &FollowUpGroup)] = &[
    (&["limousine", "car", "transport"], &TRANSPORTATION),
    (&["glitter", "decor"], &DECOR),
    (&["food", "waste", "menu"], &FOOD_WASTE),
    (&["dress", "attire", "fashion"], &ATTIRE),
    (&["plastic", "single-use"], &PLASTIC),
    (&["energy", "light"], &ENERGY),
];

pub fn select_group(question: &str) -> &'static FollowUpGroup {
    let lower = question.to_lowercase();

    TOPIC_TRIGGERS
        .iter()
        .find(|(triggers, _)| triggers.iter().any(|t| lower.contains(t)))
        .map(|(_, group)| *group)
        .unwrap_or(&DEFAULT)
}

/// Follow-ups for `question`, minus the question itself (case-insensitive).
pub fn follow_up_questions(question: &str) -> Vec<String> {
    let lower = question.to_lowercase();

    select_group(question)
        .questions
        .iter()
        .filter(|q| q.to_lowercase() != lower)
        .map(|q| q.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limousine_question_gets_transport_group_without_itself() {
        let question = "What is the carbon footprint of a limousine?";

        assert_eq!(select_group(question).topic, "transportation");
        assert_eq!(
            follow_up_questions(question),
            [
                "How can I make prom more inclusive and accessible?",
                "How can I reduce energy use at prom?",
            ]
        );
    }

    #[test]
    fn self_filter_ignores_case() {
        let follow_ups = follow_up_questions("HOW CAN I MAKE PROM DECORATIONS ECO-FRIENDLY?");

        assert_eq!(
            follow_ups,
            [
                "What are some alternatives to balloons for prom decor?",
                "What should I do with leftover prom decorations?",
            ]
        );
    }

    #[test]
    fn unmatched_input_gets_default_group() {
        assert_eq!(select_group("xyz"), &DEFAULT);
        assert_eq!(follow_up_questions("xyz").len(), 3);
    }

    #[test]
    fn car_substring_takes_priority() {
        // "carbon" triggers transportation before "dress" is considered
        assert_eq!(select_group("carbon cost of a dress").topic, "transportation");
        assert_eq!(select_group("Why is glitter bad?").topic, "decor");
        assert_eq!(select_group("food waste tips").topic, "food waste");
        assert_eq!(select_group("Fast FASHION").topic, "attire");
        assert_eq!(select_group("single-use cups").topic, "plastic");
        assert_eq!(select_group("LED lights").topic, "energy");
    }

    #[test]
    fn decor_wins_over_energy() {
        assert_eq!(select_group("decoration lighting").topic, "decor");
    }
}
