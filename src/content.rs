//! Typed section payloads.
//!
//! A section's content is stored on disk as a `templateId` string plus an
//! opaque `data` object. In memory the pair is one [`SectionContent`] value:
//! one variant per catalog template, each holding the exact payload its
//! renderer expects. The exporter matches on it exhaustively.
//!
//! Records written by other versions may carry template ids this build does
//! not know, or payloads that no longer parse. Those become
//! [`SectionContent::Unknown`] and keep their raw JSON, so a load/save cycle
//! never loses data.
//!
//! Every payload struct is `#[serde(default)]`: a partially filled object
//! still parses, with missing fields empty.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const HEADER_SIMPLE: &str = "header-simple-001";
pub const HEADER_MODERN: &str = "header-modern-002";
pub const HERO_MODERN: &str = "hero-modern-001";
pub const HERO_SPLIT: &str = "hero-split-002";
pub const ABOUT_SIMPLE: &str = "about-simple-001";
pub const ABOUT_TEAM: &str = "about-team-002";
pub const SERVICES_GRID: &str = "services-grid-001";
pub const FEATURES_LIST: &str = "features-list-001";
pub const PRICING_CARDS: &str = "pricing-cards-001";
pub const TESTIMONIALS_GRID: &str = "testimonials-grid-001";
pub const PORTFOLIO_GRID: &str = "portfolio-grid-001";
pub const CONTACT_FORM: &str = "contact-form-001";
pub const FOOTER_SIMPLE: &str = "footer-simple-001";
pub const FOOTER_DETAILED: &str = "footer-detailed-002";
pub const CTA_SIMPLE: &str = "cta-simple-001";
pub const BLOG_GRID: &str = "blog-grid-001";

// ============================================================================
// Payloads
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeaderContent {
    pub logo: String,
    pub menu_items: Vec<String>,
    pub cta_text: String,
    pub cta_link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeaderModernContent {
    pub logo: String,
    pub menu_items: Vec<String>,
    pub cta_text: String,
    pub cta_link: String,
    pub has_gradient: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroModernContent {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub cta_text: String,
    pub cta_link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_cta_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_cta_link: Option<String>,
    pub background_image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroSplitContent {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub features: Vec<String>,
    pub cta_text: String,
    pub cta_link: String,
    pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AboutSimpleContent {
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
    pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AboutTeamContent {
    pub title: String,
    pub subtitle: String,
    pub team_members: Vec<TeamMember>,
}

/// An icon + title + blurb card, shared by the services and features grids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IconCard {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServicesGridContent {
    pub title: String,
    pub subtitle: String,
    pub services: Vec<IconCard>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeaturesListContent {
    pub title: String,
    pub subtitle: String,
    pub features: Vec<IconCard>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PricingPlan {
    pub name: String,
    pub price: String,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PricingCardsContent {
    pub title: String,
    pub plans: Vec<PricingPlan>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub company: String,
    pub avatar: String,
    pub content: String,
    /// Filled stars out of five. Absent means five.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TestimonialsGridContent {
    pub title: String,
    pub subtitle: String,
    pub testimonials: Vec<Testimonial>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PortfolioItem {
    pub title: String,
    pub description: String,
    pub image: String,
    pub category: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PortfolioGridContent {
    pub title: String,
    pub subtitle: String,
    pub projects: Vec<PortfolioItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactFormContent {
    pub title: String,
    pub subtitle: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SocialLink {
    pub icon: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FooterSimpleContent {
    pub company_name: String,
    pub description: String,
    pub social_links: Vec<SocialLink>,
    pub copyright: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FooterLinkGroup {
    pub title: String,
    pub links: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FooterDetailedContent {
    pub company_name: String,
    pub description: String,
    pub social_links: Vec<SocialLink>,
    pub sections: Vec<FooterLinkGroup>,
    pub copyright: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CtaContent {
    pub title: String,
    pub description: String,
    pub cta_text: String,
    pub cta_link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_cta_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_cta_link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlogPost {
    pub title: String,
    pub excerpt: String,
    pub image: String,
    /// `YYYY-MM-DD`; other formats are shown verbatim.
    pub date: String,
    pub author: String,
    pub category: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlogGridContent {
    pub title: String,
    pub subtitle: String,
    pub posts: Vec<BlogPost>,
}

// ============================================================================
// The tagged union
// ============================================================================

/// Content of one placed section, keyed by template.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionContent {
    HeaderSimple(HeaderContent),
    HeaderModern(HeaderModernContent),
    HeroModern(HeroModernContent),
    HeroSplit(HeroSplitContent),
    AboutSimple(AboutSimpleContent),
    AboutTeam(AboutTeamContent),
    ServicesGrid(ServicesGridContent),
    FeaturesList(FeaturesListContent),
    PricingCards(PricingCardsContent),
    TestimonialsGrid(TestimonialsGridContent),
    PortfolioGrid(PortfolioGridContent),
    ContactForm(ContactFormContent),
    FooterSimple(FooterSimpleContent),
    FooterDetailed(FooterDetailedContent),
    CtaSimple(CtaContent),
    BlogGrid(BlogGridContent),
    /// A template id this build does not render, or a payload that did not
    /// parse for its template. Kept verbatim.
    Unknown { template_id: String, data: Value },
}

fn parse<T: for<'de> Deserialize<'de>>(data: &Value) -> Option<T> {
    // `null` means "no payload": treat it as an empty object.
    if data.is_null() {
        return serde_json::from_value(Value::Object(Default::default())).ok();
    }
    serde_json::from_value(data.clone()).ok()
}

impl SectionContent {
    /// Rebuild typed content from its stored `templateId` / `data` pair.
    ///
    /// Never fails: unrecognized ids and unparseable payloads come back as
    /// [`SectionContent::Unknown`].
    pub fn from_parts(template_id: &str, data: Value) -> Self {
        let typed = match template_id {
            HEADER_SIMPLE => parse(&data).map(Self::HeaderSimple),
            HEADER_MODERN => parse(&data).map(Self::HeaderModern),
            HERO_MODERN => parse(&data).map(Self::HeroModern),
            HERO_SPLIT => parse(&data).map(Self::HeroSplit),
            ABOUT_SIMPLE => parse(&data).map(Self::AboutSimple),
            ABOUT_TEAM => parse(&data).map(Self::AboutTeam),
            SERVICES_GRID => parse(&data).map(Self::ServicesGrid),
            FEATURES_LIST => parse(&data).map(Self::FeaturesList),
            PRICING_CARDS => parse(&data).map(Self::PricingCards),
            TESTIMONIALS_GRID => parse(&data).map(Self::TestimonialsGrid),
            PORTFOLIO_GRID => parse(&data).map(Self::PortfolioGrid),
            CONTACT_FORM => parse(&data).map(Self::ContactForm),
            FOOTER_SIMPLE => parse(&data).map(Self::FooterSimple),
            FOOTER_DETAILED => parse(&data).map(Self::FooterDetailed),
            CTA_SIMPLE => parse(&data).map(Self::CtaSimple),
            BLOG_GRID => parse(&data).map(Self::BlogGrid),
            _ => None,
        };
        typed.unwrap_or_else(|| Self::Unknown {
            template_id: template_id.to_string(),
            data,
        })
    }

    /// The catalog template this content belongs to.
    pub fn template_id(&self) -> &str {
        match self {
            Self::HeaderSimple(_) => HEADER_SIMPLE,
            Self::HeaderModern(_) => HEADER_MODERN,
            Self::HeroModern(_) => HERO_MODERN,
            Self::HeroSplit(_) => HERO_SPLIT,
            Self::AboutSimple(_) => ABOUT_SIMPLE,
            Self::AboutTeam(_) => ABOUT_TEAM,
            Self::ServicesGrid(_) => SERVICES_GRID,
            Self::FeaturesList(_) => FEATURES_LIST,
            Self::PricingCards(_) => PRICING_CARDS,
            Self::TestimonialsGrid(_) => TESTIMONIALS_GRID,
            Self::PortfolioGrid(_) => PORTFOLIO_GRID,
            Self::ContactForm(_) => CONTACT_FORM,
            Self::FooterSimple(_) => FOOTER_SIMPLE,
            Self::FooterDetailed(_) => FOOTER_DETAILED,
            Self::CtaSimple(_) => CTA_SIMPLE,
            Self::BlogGrid(_) => BLOG_GRID,
            Self::Unknown { template_id, .. } => template_id,
        }
    }

    /// The payload as stored on disk.
    pub fn to_data(&self) -> Value {
        let data = match self {
            Self::HeaderSimple(c) => serde_json::to_value(c),
            Self::HeaderModern(c) => serde_json::to_value(c),
            Self::HeroModern(c) => serde_json::to_value(c),
            Self::HeroSplit(c) => serde_json::to_value(c),
            Self::AboutSimple(c) => serde_json::to_value(c),
            Self::AboutTeam(c) => serde_json::to_value(c),
            Self::ServicesGrid(c) => serde_json::to_value(c),
            Self::FeaturesList(c) => serde_json::to_value(c),
            Self::PricingCards(c) => serde_json::to_value(c),
            Self::TestimonialsGrid(c) => serde_json::to_value(c),
            Self::PortfolioGrid(c) => serde_json::to_value(c),
            Self::ContactForm(c) => serde_json::to_value(c),
            Self::FooterSimple(c) => serde_json::to_value(c),
            Self::FooterDetailed(c) => serde_json::to_value(c),
            Self::CtaSimple(c) => serde_json::to_value(c),
            Self::BlogGrid(c) => serde_json::to_value(c),
            Self::Unknown { data, .. } => return data.clone(),
        };
        // Plain structs of strings, vecs, and options always serialize.
        data.unwrap_or(Value::Null)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn known_template_parses_typed() {
        let content = SectionContent::from_parts(
            CONTACT_FORM,
            json!({"title": "Talk to us", "email": "hi@acme.test"}),
        );
        match content {
            SectionContent::ContactForm(c) => {
                assert_eq!(c.title, "Talk to us");
                assert_eq!(c.email, "hi@acme.test");
                assert_eq!(c.phone, "");
            }
            other => panic!("expected contact form, got {other:?}"),
        }
    }

    #[test]
    fn unknown_template_is_kept_verbatim() {
        let data = json!({"whatever": [1, 2, 3]});
        let content = SectionContent::from_parts("gallery-masonry-009", data.clone());
        assert!(content.is_unknown());
        assert_eq!(content.template_id(), "gallery-masonry-009");
        assert_eq!(content.to_data(), data);
    }

    #[test]
    fn malformed_payload_becomes_unknown() {
        let data = json!({"plans": "not a list"});
        let content = SectionContent::from_parts(PRICING_CARDS, data.clone());
        assert!(content.is_unknown());
        assert_eq!(content.template_id(), PRICING_CARDS);
        assert_eq!(content.to_data(), data);
    }

    #[test]
    fn null_payload_parses_as_empty() {
        let content = SectionContent::from_parts(HERO_MODERN, Value::Null);
        assert_eq!(
            content,
            SectionContent::HeroModern(HeroModernContent::default())
        );
    }

    #[test]
    fn data_uses_camel_case_keys() {
        let content = SectionContent::HeaderModern(HeaderModernContent {
            logo: "Acme".into(),
            menu_items: vec!["Home".into()],
            has_gradient: true,
            ..Default::default()
        });
        let data = content.to_data();
        assert_eq!(data["menuItems"], json!(["Home"]));
        assert_eq!(data["hasGradient"], json!(true));
    }

    #[test]
    fn optional_secondary_cta_is_omitted_when_absent() {
        let data = SectionContent::CtaSimple(CtaContent::default()).to_data();
        assert!(data.get("secondaryCtaText").is_none());
    }

    #[test]
    fn template_id_round_trips_through_parts() {
        let original = SectionContent::FooterDetailed(FooterDetailedContent {
            company_name: "Acme".into(),
            sections: vec![FooterLinkGroup {
                title: "Company".into(),
                links: vec!["About".into()],
            }],
            ..Default::default()
        });
        let rebuilt =
            SectionContent::from_parts(original.template_id(), original.to_data());
        assert_eq!(rebuilt, original);
    }
}
