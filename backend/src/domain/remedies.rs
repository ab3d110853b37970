//! Static catalogue of herbal remedies grouped by condition.

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// A single remedy suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Remedy {
    pub name: &'static str,
    pub benefits: &'static str,
    pub usage: &'static str,
}

/// Remedies listed under one condition key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionRemedies {
    pub condition: &'static str,
    pub remedies: &'static [Remedy],
}

const fn remedy(name: &'static str, benefits: &'static str, usage: &'static str) -> Remedy {
    Remedy {
        name,
        benefits,
        usage,
    }
}

static ENTRIES: &[ConditionRemedies] = &[
    ConditionRemedies {
        condition: "diabetes",
        remedies: &[
            remedy("Bitter Gourd Juice", "Lowers blood sugar", "Drink 30ml daily on empty stomach"),
            remedy("Fenugreek Seeds", "Improves insulin sensitivity", "Soak overnight, consume in morning"),
            remedy("Cinnamon", "Regulates glucose", "1 tsp daily in warm water"),
        ],
    },
    ConditionRemedies {
        condition: "hypertension",
        remedies: &[
            remedy("Garlic", "Reduces blood pressure", "2 cloves daily on empty stomach"),
            remedy("Ashwagandha", "Stress reduction", "500mg twice daily"),
            remedy("Cardamom", "Improves circulation", "Add to tea or meals"),
        ],
    },
    ConditionRemedies {
        condition: "arthritis",
        remedies: &[
            remedy("Turmeric", "Anti-inflammatory", "1 tsp with warm milk"),
            remedy("Ginger", "Pain relief", "Fresh ginger tea 2x daily"),
            remedy("Boswellia", "Joint support", "300mg daily"),
        ],
    },
    ConditionRemedies {
        condition: "obesity",
        remedies: &[
            remedy("Triphala", "Metabolism boost", "1 tsp with warm water before bed"),
            remedy("Green Tea", "Fat burning", "2-3 cups daily"),
            remedy("Guggul", "Cholesterol management", "500mg twice daily"),
        ],
    },
    ConditionRemedies {
        condition: "asthma",
        remedies: &[
            remedy("Tulsi (Holy Basil)", "Respiratory support", "Fresh leaves or tea daily"),
            remedy("Ginger", "Bronchodilator", "Ginger honey mix 2x daily"),
            remedy("Black Pepper", "Clears airways", "With honey in warm water"),
        ],
    },
    ConditionRemedies {
        condition: "anxiety",
        remedies: &[
            remedy("Brahmi", "Calms nervous system", "300mg daily"),
            remedy("Ashwagandha", "Adaptogen", "500mg twice daily"),
            remedy("Jatamansi", "Sleep & mood", "500mg before bed"),
        ],
    },
];

/// Read-only remedy catalogue.
///
/// Serialises as a JSON object keyed by condition, in catalogue order.
///
/// # Examples
/// ```
/// use annapurna::domain::RemedyCatalog;
///
/// let catalog = RemedyCatalog::builtin();
/// let diabetes = catalog.lookup("  Diabetes ").unwrap();
/// assert_eq!(diabetes.remedies.len(), 3);
/// assert!(catalog.lookup("unknown-x").is_none());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RemedyCatalog {
    entries: &'static [ConditionRemedies],
}

impl RemedyCatalog {
    /// The catalogue shipped with the service.
    #[must_use]
    pub const fn builtin() -> Self {
        Self { entries: ENTRIES }
    }

    /// Normalise a user-supplied condition key: surrounding whitespace is
    /// dropped and the rest is lower-cased, so `" Diabetes\t"` matches
    /// `diabetes`. A key that is blank after trimming is empty.
    #[must_use]
    pub fn normalise_key(raw: &str) -> String {
        raw.trim().to_lowercase()
    }

    /// Case-insensitive lookup of one condition.
    #[must_use]
    pub fn lookup(&self, condition: &str) -> Option<&'static ConditionRemedies> {
        let key = Self::normalise_key(condition);
        self.entries.iter().find(|entry| entry.condition == key)
    }

    /// Every condition key, in catalogue order.
    #[must_use]
    pub fn conditions(&self) -> Vec<&'static str> {
        self.entries.iter().map(|entry| entry.condition).collect()
    }

    /// Every entry, in catalogue order.
    #[must_use]
    pub fn entries(&self) -> &'static [ConditionRemedies] {
        self.entries
    }
}

impl Serialize for RemedyCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in self.entries {
            map.serialize_entry(entry.condition, entry.remedies)?;
        }
        map.end()
    }
}
