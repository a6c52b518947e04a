//! Query routing between general chit-chat and grounded answering

/// How a query should be answered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    /// Conversational turn answered with a canned reply
    General(GeneralKind),
    /// Substantive question answered from retrieved context
    Grounded,
}

/// Flavor of a general-chat query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneralKind {
    Greeting,
    Gratitude,
    Farewell,
    /// Matched the detection set but none of the reply sets
    /// (e.g. "good morning", "appreciate", "see you")
    Other,
}

// Detection sets: a query containing any of these is general chat
const GREETINGS: &[&str] = &[
    "hello",
    "hi",
    "hey",
    "good morning",
    "good afternoon",
    "good evening",
];
const GRATITUDE: &[&str] = &["thanks", "thank you", "appreciate"];
const FAREWELLS: &[&str] = &["bye", "goodbye", "see you", "farewell"];

// Reply sets: the narrower keywords that pick a specific canned reply
const GREETING_REPLIES: &[&str] = &["hello", "hi", "hey"];
const GRATITUDE_REPLIES: &[&str] = &["thanks", "thank you"];
const FAREWELL_REPLIES: &[&str] = &["bye", "goodbye"];

/// Classify a query, case-insensitively, by keyword containment
pub fn classify(query: &str) -> QueryKind {
    let lower = query.to_lowercase();
    let contains_any = |words: &[&str]| words.iter().any(|w| lower.contains(w));

    if !contains_any(GREETINGS) && !contains_any(GRATITUDE) && !contains_any(FAREWELLS) {
        return QueryKind::Grounded;
    }

    if contains_any(GREETING_REPLIES) {
        QueryKind::General(GeneralKind::Greeting)
    } else if contains_any(GRATITUDE_REPLIES) {
        QueryKind::General(GeneralKind::Gratitude)
    } else if contains_any(FAREWELL_REPLIES) {
        QueryKind::General(GeneralKind::Farewell)
    } else {
        QueryKind::General(GeneralKind::Other)
    }
}

impl GeneralKind {
    /// The fixed reply for this chit-chat flavor
    pub fn canned_reply(&self) -> &'static str {
        match self {
            Self::Greeting => {
                "Hello! I'm here to help you make education more accessible \
                 for visually impaired students. What would you like to know?"
            }
            Self::Gratitude => {
                "You're welcome! Feel free to ask if you have any more \
                 questions about accessibility."
            }
            Self::Farewell => {
                "Goodbye! Don't hesitate to return if you need more \
                 assistance with accessibility matters."
            }
            Self::Other => "I'm here to help with your accessibility-related questions!",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_detection() {
        assert_eq!(
            classify("Hello there"),
            QueryKind::General(GeneralKind::Greeting)
        );
        assert_eq!(
            classify("hey, quick question"),
            QueryKind::General(GeneralKind::Greeting)
        );
    }

    #[test]
    fn test_gratitude_detection() {
        assert_eq!(
            classify("thanks a lot"),
            QueryKind::General(GeneralKind::Gratitude)
        );
        assert_eq!(
            classify("Thank you!"),
            QueryKind::General(GeneralKind::Gratitude)
        );
    }

    #[test]
    fn test_farewell_detection() {
        assert_eq!(classify("bye now"), QueryKind::General(GeneralKind::Farewell));
        assert_eq!(
            classify("Goodbye!"),
            QueryKind::General(GeneralKind::Farewell)
        );
    }

    #[test]
    fn test_substantive_question_is_grounded() {
        assert_eq!(
            classify("What tools help blind students?"),
            QueryKind::Grounded
        );
        assert_eq!(
            classify("How do I make course materials accessible?"),
            QueryKind::Grounded
        );
    }

    #[test]
    fn test_detection_without_reply_match_falls_back() {
        // These match the detection sets but none of the reply sets
        assert_eq!(
            classify("good morning"),
            QueryKind::General(GeneralKind::Other)
        );
        assert_eq!(
            classify("appreciate it"),
            QueryKind::General(GeneralKind::Other)
        );
        assert_eq!(classify("see you"), QueryKind::General(GeneralKind::Other));
    }

    #[test]
    fn test_fallback_reply_is_nonempty() {
        assert!(!GeneralKind::Other.canned_reply().is_empty());
    }
}
