//! Rule-based wellness assistant.
//!
//! Replies come from an ordered rule table: the first rule with a keyword
//! contained in the lower-cased message wins, otherwise the fallback reply is
//! returned. No state is kept between messages.

/// One row of the responder table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatRule {
    /// Lower-case keywords; any one of them triggers the rule.
    pub keywords: &'static [&'static str],
    pub reply: &'static str,
}

/// Opening line shown when a conversation starts.
pub const GREETING: &str = "Namaste! I am your Ayurvedic wellness assistant. How can I help you today? You can ask me about foods, remedies, doshas, or general health advice.";

/// Prompts offered to users who do not know what to ask.
pub const SUGGESTED_PROMPTS: [&str; 3] = [
    "Tell me about Vata dosha",
    "What are benefits of turmeric?",
    "How to improve digestion?",
];

/// Reply used when no rule matches.
pub const FALLBACK_REPLY: &str = "Thank you for your question! For personalized Ayurvedic guidance, I recommend: 1) Understanding your dosha constitution, 2) Following seasonal eating practices (Ritucharya), 3) Maintaining regular meal times, and 4) Including the six tastes (sweet, sour, salty, pungent, bitter, astringent) in your meals. What specific aspect of Ayurveda interests you?";

/// Built-in rules in priority order.
pub const WELLNESS_RULES: &[ChatRule] = &[
    ChatRule {
        keywords: &["vata"],
        reply: "Vata dosha is associated with air and space elements. People with Vata dominance benefit from warm, grounding foods like cooked vegetables, whole grains, and warming spices like ginger and cinnamon. Avoid cold, raw, and dry foods.",
    },
    ChatRule {
        keywords: &["pitta"],
        reply: "Pitta dosha is linked to fire and water elements. Pitta types should favor cooling foods like cucumber, coconut, sweet fruits, and mint. Avoid spicy, acidic, and fried foods that can aggravate Pitta.",
    },
    ChatRule {
        keywords: &["kapha"],
        reply: "Kapha dosha combines earth and water elements. Kapha individuals thrive on light, dry, and warming foods like legumes, leafy greens, and spices like turmeric and black pepper. Minimize heavy, oily, and sweet foods.",
    },
    ChatRule {
        keywords: &["turmeric", "haldi"],
        reply: "Turmeric (Haldi) is a powerful anti-inflammatory spice. It supports joint health, boosts immunity, and aids digestion. Try Golden Milk: 1 tsp turmeric in warm milk with honey and a pinch of black pepper for better absorption.",
    },
    ChatRule {
        keywords: &["ginger", "adrak"],
        reply: "Ginger is excellent for digestion, nausea, and inflammation. It kindles digestive fire (Agni) and helps with respiratory issues. Consume fresh ginger tea or add it to meals daily.",
    },
    ChatRule {
        keywords: &["diabetes"],
        reply: "For diabetes management, Ayurveda recommends bitter gourd juice, fenugreek seeds, and cinnamon. These help regulate blood sugar naturally. Always consult your healthcare provider before making dietary changes.",
    },
    ChatRule {
        keywords: &["weight loss", "obesity"],
        reply: "For healthy weight management, try Triphala before bed, drink warm lemon water in the morning, include plenty of fiber-rich foods, and practice mindful eating. Regular yoga and walking are also beneficial.",
    },
    ChatRule {
        keywords: &["sleep", "insomnia"],
        reply: "For better sleep, drink warm milk with a pinch of nutmeg before bed, practice oil massage (Abhyanga), avoid screens 1 hour before sleep, and try Ashwagandha or Jatamansi herbs.",
    },
    ChatRule {
        keywords: &["stress", "anxiety"],
        reply: "To manage stress naturally, consider Ashwagandha (adaptogen), Brahmi for mental clarity, and regular meditation. Practice deep breathing (Pranayama) and maintain a consistent daily routine.",
    },
    ChatRule {
        keywords: &["digestion", "gut"],
        reply: "For digestive health, drink warm water throughout the day, include digestive spices like cumin, coriander, and fennel in meals. Triphala is excellent for overall gut health. Eat mindfully without distractions.",
    },
    ChatRule {
        keywords: &["immunity", "immune"],
        reply: "Boost immunity with Chyawanprash (herbal jam), turmeric milk, Tulsi (holy basil) tea, and Amla (Indian gooseberry). Get adequate sleep, manage stress, and include garlic and ginger in your diet.",
    },
    ChatRule {
        keywords: &["dosha"],
        reply: "There are three doshas in Ayurveda: Vata (air/space), Pitta (fire/water), and Kapha (earth/water). Each person has a unique combination. Understanding your dosha helps personalize your diet and lifestyle for optimal health.",
    },
    ChatRule {
        keywords: &["thank"],
        reply: "You're most welcome! May you enjoy good health and wellness. Feel free to ask me anything else about Ayurveda. 🙏",
    },
];

/// Stateless responder over an ordered rule table.
///
/// # Examples
/// ```
/// use annapurna::domain::ChatResponder;
///
/// let bot = ChatResponder::default();
/// assert!(bot.reply("Tell me about VATA and pitta").starts_with("Vata dosha"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ChatResponder {
    rules: &'static [ChatRule],
    fallback: &'static str,
}

impl Default for ChatResponder {
    fn default() -> Self {
        Self::new(WELLNESS_RULES, FALLBACK_REPLY)
    }
}

impl ChatResponder {
    /// Build a responder over a custom table.
    #[must_use]
    pub const fn new(rules: &'static [ChatRule], fallback: &'static str) -> Self {
        Self { rules, fallback }
    }

    /// Choose the reply for `message`.
    #[must_use]
    pub fn reply(&self, message: &str) -> &'static str {
        self.matching_rule(message)
            .map_or(self.fallback, |rule| rule.reply)
    }

    /// The first rule triggered by `message`, if any.
    #[must_use]
    pub fn matching_rule(&self, message: &str) -> Option<&'static ChatRule> {
        let lowered = message.to_lowercase();
        self.rules.iter().find(|rule| {
            rule.keywords
                .iter()
                .any(|keyword| lowered.contains(keyword))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn reply(message: &str) -> &'static str {
        ChatResponder::default().reply(message)
    }

    #[rstest]
    #[case("vata", "Vata dosha is")]
    #[case("What suits PITTA types?", "Pitta dosha is")]
    #[case("kapha diet", "Kapha dosha combines")]
    #[case("benefits of haldi", "Turmeric (Haldi)")]
    #[case("Adrak chai?", "Ginger is excellent")]
    #[case("I have diabetes", "For diabetes management")]
    #[case("help with Weight Loss", "For healthy weight management")]
    #[case("obesity tips", "For healthy weight management")]
    #[case("I suffer from insomnia", "For better sleep")]
    #[case("so much anxiety", "To manage stress")]
    #[case("my gut hurts", "For digestive health")]
    #[case("boost my immune system", "Boost immunity")]
    #[case("what is my dosha", "There are three doshas")]
    #[case("Thanks a lot", "You're most welcome")]
    fn keywords_select_their_reply(#[case] message: &str, #[case] prefix: &str) {
        assert!(
            reply(message).starts_with(prefix),
            "{message:?} gave {:?}",
            reply(message)
        );
    }

    #[rstest]
    #[case("I love vata and pitta")]
    #[case("pitta? no, VATA")]
    #[case("thank you, and what about vata dosha")]
    fn earlier_rules_win(#[case] message: &str) {
        assert!(reply(message).starts_with("Vata dosha"));
    }

    #[rstest]
    fn digestion_ranks_below_ginger() {
        assert!(reply("does ginger help digestion").starts_with("Ginger is excellent"));
    }

    #[rstest]
    fn sleep_ranks_above_stress() {
        assert!(reply("stress ruins my sleep").starts_with("For better sleep"));
    }

    #[rstest]
    #[case("")]
    #[case("hello there")]
    #[case("weight gain")]
    fn unmatched_messages_fall_back(#[case] message: &str) {
        assert_eq!(reply(message), FALLBACK_REPLY);
    }

    #[rstest]
    fn table_holds_thirteen_rules_plus_fallback() {
        assert_eq!(WELLNESS_RULES.len(), 13);
        assert!(WELLNESS_RULES
            .iter()
            .flat_map(|rule| rule.keywords)
            .all(|keyword| *keyword == keyword.to_lowercase()));
    }

    #[rstest]
    fn custom_tables_are_supported() {
        static RULES: &[ChatRule] = &[ChatRule {
            keywords: &["ping"],
            reply: "pong",
        }];
        let bot = ChatResponder::new(RULES, "?");
        assert_eq!(bot.reply("PING"), "pong");
        assert_eq!(bot.reply("vata"), "?");
    }
}
