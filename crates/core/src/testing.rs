//! Fixtures shared by unit tests and by the db/api integration tests
//! (enabled there through the `testing` feature).

use chrono::{Duration, TimeZone, Utc};

use crate::alternative::{Alternative, AlternativeItem, ComparisonPair, Verdict};
use crate::dataset::Dataset;
use crate::deal::Deal;
use crate::localization::Translations;
use crate::local::LocalCatalog;
use crate::pricing::PricingPlan;
use crate::submission::NewSubmission;
use crate::taxonomy::{slugify, Category};
use crate::tool::{Score, Tool, ToolStatus};
use crate::types::Timestamp;

/// Fixed reference instant for fixtures: 2024-01-01T00:00:00Z.
pub fn epoch() -> Timestamp {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

// ---------------------------------------------------------------------------
// Tools
// ---------------------------------------------------------------------------

/// Builder for published tools with sensible defaults.
pub struct ToolBuilder {
    tool: Tool,
}

impl ToolBuilder {
    pub fn new(slug: &str) -> Self {
        Self {
            tool: Tool {
                id: slug.to_string(),
                slug: slug.to_string(),
                name: slug.to_string(),
                slogan: format!("{slug} slogan"),
                description: format!("About {slug}."),
                translations: Translations::new(),
                website_url: format!("https://{slug}.example.com"),
                docs_url: None,
                logo_url: None,
                pricing: Vec::new(),
                is_open_source: false,
                has_free_trial: false,
                supports_secondary_locale: false,
                categories: vec!["general".to_string()],
                tags: Vec::new(),
                platforms: Vec::new(),
                integrations: Vec::new(),
                login_methods: Vec::new(),
                score: None,
                pros: Vec::new(),
                cons: Vec::new(),
                faq: Vec::new(),
                alt_of: Vec::new(),
                deal_ids: Vec::new(),
                is_featured: false,
                status: ToolStatus::Published,
                created_at: epoch(),
                updated_at: epoch(),
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.tool.name = name.to_string();
        self
    }

    pub fn slogan(mut self, slogan: &str) -> Self {
        self.tool.slogan = slogan.to_string();
        self
    }

    pub fn score(mut self, ease: f64, value: f64, features: f64, docs: f64) -> Self {
        self.tool.score = Some(Score {
            ease,
            value,
            features,
            docs,
        });
        self
    }

    pub fn pricing(mut self, plans: Vec<PricingPlan>) -> Self {
        self.tool.pricing = plans;
        self
    }

    pub fn translation(mut self, key: &str, value: &str) -> Self {
        self.tool.translations.insert(key.to_string(), value.to_string());
        self
    }

    pub fn categories(mut self, categories: &[&str]) -> Self {
        self.tool.categories = to_strings(categories);
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tool.tags = to_strings(tags);
        self
    }

    pub fn platforms(mut self, platforms: &[&str]) -> Self {
        self.tool.platforms = to_strings(platforms);
        self
    }

    pub fn open_source(mut self, value: bool) -> Self {
        self.tool.is_open_source = value;
        self
    }

    pub fn free_trial(mut self, value: bool) -> Self {
        self.tool.has_free_trial = value;
        self
    }

    pub fn secondary_locale(mut self, value: bool) -> Self {
        self.tool.supports_secondary_locale = value;
        self
    }

    pub fn featured(mut self, value: bool) -> Self {
        self.tool.is_featured = value;
        self
    }

    pub fn status(mut self, status: ToolStatus) -> Self {
        self.tool.status = status;
        self
    }

    /// Set `created_at`, moving `updated_at` forward if it would precede it.
    pub fn created_days_after_epoch(mut self, days: i64) -> Self {
        self.tool.created_at = epoch() + Duration::days(days);
        if self.tool.updated_at < self.tool.created_at {
            self.tool.updated_at = self.tool.created_at;
        }
        self
    }

    pub fn updated_days_after_epoch(mut self, days: i64) -> Self {
        self.tool.updated_at = epoch() + Duration::days(days);
        self
    }

    pub fn build(self) -> Tool {
        self.tool
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ---------------------------------------------------------------------------
// Other entities
// ---------------------------------------------------------------------------

pub fn category(slug: &str) -> Category {
    Category {
        id: slug.to_string(),
        slug: slug.to_string(),
        name: slug.to_string(),
        description: None,
        translations: Translations::new(),
        icon: None,
        color: None,
        count: 0,
        created_at: epoch(),
        updated_at: epoch(),
    }
}

/// An active, open-ended deal.
pub fn deal(id: &str, tool_slug: &str) -> Deal {
    Deal {
        id: id.to_string(),
        tool_slug: tool_slug.to_string(),
        title: format!("{tool_slug} deal"),
        description: "Special offer".to_string(),
        translations: Translations::new(),
        code: None,
        url: format!("https://{tool_slug}.example.com/deal"),
        starts_at: None,
        ends_at: None,
        source: "official".to_string(),
        discount_percentage: None,
        is_active: true,
        created_at: epoch(),
        updated_at: epoch(),
    }
}

pub fn alternative(brand: &str, tool_slugs: &[&str]) -> Alternative {
    Alternative {
        id: format!("alt-{}", slugify(brand)),
        brand: brand.to_string(),
        description: None,
        translations: Translations::new(),
        items: tool_slugs
            .iter()
            .map(|slug| AlternativeItem {
                tool_slug: slug.to_string(),
                reason: format!("Try {slug}"),
            })
            .collect(),
        created_at: epoch(),
        updated_at: epoch(),
    }
}

pub fn comparison(a: &str, b: &str) -> ComparisonPair {
    ComparisonPair {
        id: format!("vs-{a}-{b}"),
        a_slug: a.to_string(),
        b_slug: b.to_string(),
        matrix: serde_json::json!({ "features": ["Chat"] }),
        summary: Some(format!("{a} and {b} compared.")),
        translations: Translations::new(),
        verdict: Verdict {
            beginner: a.to_string(),
            team: b.to_string(),
            enterprise: a.to_string(),
        },
        created_at: epoch(),
        updated_at: epoch(),
    }
}

/// A submission that passes validation.
pub fn submission(name: &str) -> NewSubmission {
    NewSubmission {
        name: name.to_string(),
        website_url: "https://example.com".to_string(),
        slogan: format!("{name} does things"),
        description: None,
        category: Some("development".to_string()),
        tags: vec!["editor".to_string()],
        platforms: vec!["macOS".to_string()],
        pricing_type: Some("freemium".to_string()),
        has_free_trial: true,
        is_open_source: false,
        supports_secondary_locale: false,
        logo_url: None,
        contact_email: Some("team@example.com".to_string()),
        additional_notes: None,
    }
}

// ---------------------------------------------------------------------------
// Datasets
// ---------------------------------------------------------------------------

/// Local catalog over the embedded seed.
pub fn seeded_catalog() -> LocalCatalog {
    LocalCatalog::new(Dataset::embedded().expect("embedded seed is valid"))
}

/// The embedded seed plus enough generated tools to exercise every sort key,
/// multi-page pagination, timestamp ties and hidden statuses.
pub fn fixture_dataset() -> Dataset {
    let mut dataset = Dataset::embedded().expect("embedded seed is valid");
    let categories = ["development", "productivity", "analysis"];
    let tags = ["ai-coding", "chatbot", "note-taking", "automation"];
    let platforms = ["Web", "macOS", "Linux"];

    for i in 0..30i64 {
        let n = i as usize;
        let name = if i % 2 == 0 {
            format!("bulk tool {i:02}")
        } else {
            format!("Bulk Tool {i:02}")
        };
        let rating = 1.0 + (i % 9) as f64 * 0.5;
        let mut builder = ToolBuilder::new(&format!("bulk-{i:02}"))
            .name(&name)
            .categories(&[categories[n % categories.len()]])
            .tags(&[tags[n % tags.len()]])
            .platforms(&[platforms[n % platforms.len()]])
            .open_source(i % 3 == 0)
            .free_trial(i % 2 == 1)
            .secondary_locale(i % 4 == 0)
            .featured(i % 5 == 0)
            .created_days_after_epoch(i / 3)
            .updated_days_after_epoch(10 + i / 2);
        if i % 7 != 0 {
            builder = builder.score(rating, rating, rating, rating);
        }
        if i % 10 == 9 {
            builder = builder.status(ToolStatus::Draft);
        }
        dataset.tools.push(builder.build());
    }

    dataset.tags.clear();
    dataset
        .tags
        .extend(crate::taxonomy::derive_tags(&dataset.tools, epoch()));
    dataset
}
