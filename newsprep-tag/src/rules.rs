//! Tag rule table
//!
//! Ordered mapping from tag category to trigger phrases. The table is
//! immutable once built and injected into the engine at construction, so
//! tests can substitute their own tables.

use newsprep_common::{Error, Result};

/// One tag category and the phrases that trigger it
#[derive(Debug, Clone)]
pub struct TagRule {
    /// Tag name recorded on matching articles
    pub name: String,
    /// Trigger phrases, matched case-insensitively as substrings
    pub triggers: Vec<String>,
}

impl TagRule {
    pub fn new(name: &str, triggers: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            triggers: triggers.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Ordered, validated collection of tag rules.
///
/// Invariants enforced at construction: tag names are unique, every rule
/// has at least one trigger. Triggers are stored lowercased so matching
/// against lowercased article text is case-insensitive.
#[derive(Debug, Clone)]
pub struct TagRuleTable {
    rules: Vec<TagRule>,
}

impl TagRuleTable {
    /// Build a table from rules, validating invariants.
    pub fn new(rules: Vec<TagRule>) -> Result<Self> {
        let mut seen = std::collections::HashSet::new();
        for rule in &rules {
            if !seen.insert(rule.name.as_str()) {
                return Err(Error::InvalidInput(format!(
                    "Duplicate tag rule name: {}",
                    rule.name
                )));
            }
            if rule.triggers.is_empty() {
                return Err(Error::InvalidInput(format!(
                    "Tag rule '{}' has no triggers",
                    rule.name
                )));
            }
        }

        let rules = rules
            .into_iter()
            .map(|rule| TagRule {
                name: rule.name,
                triggers: rule.triggers.iter().map(|t| t.to_lowercase()).collect(),
            })
            .collect();

        Ok(Self { rules })
    }

    /// The standard rule table: nine news categories with their trigger
    /// keyword lists.
    pub fn standard() -> Self {
        let rules = vec![
            TagRule::new(
                "tech",
                &[
                    "tech", "technology", "ai", "artificial intelligence",
                    "software", "digital", "semiconductor", "chip",
                    "cybersecurity", "cloud",
                ],
            ),
            TagRule::new(
                "climate",
                &[
                    "climate", "emissions", "carbon", "co2",
                    "environment", "sustainability", "renewable",
                    "solar", "wind", "net-zero",
                ],
            ),
            TagRule::new(
                "policy",
                &[
                    "policy", "bill", "regulation", "regulatory",
                    "federal", "law", "legislation", "congress",
                    "government", "mandate",
                ],
            ),
            TagRule::new(
                "economy",
                &[
                    "economy", "economic", "market", "inflation",
                    "supply chain", "trade", "growth", "recession",
                    "industry", "production",
                ],
            ),
            TagRule::new(
                "science",
                &[
                    "research", "study", "scientist", "laboratory",
                    "experiment", "peer-reviewed", "findings",
                ],
            ),
            TagRule::new(
                "transit",
                &[
                    "transit", "transportation", "subway", "rail",
                    "bus", "infrastructure", "traffic", "mobility",
                    "commute",
                ],
            ),
            TagRule::new(
                "data",
                &[
                    "data", "analytics", "dashboard", "open data",
                    "dataset", "metrics", "algorithm",
                ],
            ),
            TagRule::new(
                "health",
                &[
                    "health", "healthcare", "hospital", "medical",
                    "public health", "epidemic", "pandemic",
                ],
            ),
            TagRule::new(
                "education",
                &[
                    "school", "university", "college", "education",
                    "classroom", "students", "curriculum",
                ],
            ),
        ];

        Self::new(rules).expect("standard rule table is valid")
    }

    pub fn iter(&self) -> impl Iterator<Item = &TagRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
