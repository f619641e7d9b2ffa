//! One renderer per section template.
//!
//! Renderers take their typed payload and return a markup fragment. Colors
//! and fonts only appear as theme CSS variables or `website-*` utility
//! classes, so one generated stylesheet restyles every section.

use chrono::{Datelike, NaiveDate};
use maud::{Markup, PreEscaped, html};

use super::icons::icon_svg;
use crate::content::*;
use crate::types::SectionInstance;

const PRIMARY_COLOR: &str = "color: var(--website-color-primary);";
const PRIMARY_GRADIENT: &str =
    "linear-gradient(135deg, var(--website-color-primary), var(--website-color-secondary))";
const ICON_TILE: &str =
    "background-color: rgba(var(--website-color-primary-rgb), 0.2); color: var(--website-color-primary);";

/// Render one placed section.
pub fn render_section(section: &SectionInstance) -> Markup {
    match &section.content {
        SectionContent::HeaderSimple(c) => header_simple(c),
        SectionContent::HeaderModern(c) => header_modern(c),
        SectionContent::HeroModern(c) => hero_modern(c),
        SectionContent::HeroSplit(c) => hero_split(c),
        SectionContent::AboutSimple(c) => about_simple(c),
        SectionContent::AboutTeam(c) => about_team(c),
        SectionContent::ServicesGrid(c) => services_grid(c),
        SectionContent::FeaturesList(c) => features_list(c),
        SectionContent::PricingCards(c) => pricing_cards(c),
        SectionContent::TestimonialsGrid(c) => testimonials_grid(c),
        SectionContent::PortfolioGrid(c) => portfolio_grid(c),
        SectionContent::ContactForm(c) => contact_form(c),
        SectionContent::FooterSimple(c) => footer_simple(c),
        SectionContent::FooterDetailed(c) => footer_detailed(c),
        SectionContent::CtaSimple(c) => cta_simple(c),
        SectionContent::BlogGrid(c) => blog_grid(c),
        SectionContent::Unknown { template_id, .. } => {
            tracing::error!(section = %section.id, template = %template_id, "No renderer for template");
            unsupported(template_id)
        }
    }
}

/// Comment marker left in place of a section nothing can render.
fn unsupported(template_id: &str) -> Markup {
    // Ids are arbitrary stored strings; keep them from closing the comment.
    let mut safe: String = template_id
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        .collect();
    while safe.contains("--") {
        safe = safe.replace("--", "-");
    }
    PreEscaped(format!("<!-- Unsupported section: {safe} -->"))
}

// ============================================================================
// Shared pieces
// ============================================================================

/// Staggered entrance for the `index`-th card of a grid.
fn stagger(index: usize) -> String {
    let tenths = 6 + index;
    if tenths % 10 == 0 {
        format!("fadeInUp {}s ease-out", tenths / 10)
    } else {
        format!("fadeInUp {}.{}s ease-out", tenths / 10, tenths % 10)
    }
}

fn anchor(menu_item: &str) -> String {
    format!("#{}", menu_item.to_lowercase())
}

/// `2024-01-15` → `1/15/2024`; anything else is shown as written.
pub fn display_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => format!("{}/{}/{}", d.month(), d.day(), d.year()),
        Err(_) => date.to_string(),
    }
}

fn section_heading(title: &str, subtitle: Option<&str>, subtitle_width: &str) -> Markup {
    html! {
        div class="text-center mb-16 animate-on-scroll" data-animation="fadeInUp 0.6s ease-out" {
            h2 class="text-responsive-lg font-bold mb-4 website-font-primary" style=(PRIMARY_COLOR) {
                (title)
            }
            @if let Some(subtitle) = subtitle {
                p class=(format!("text-lg website-text-secondary website-font-secondary {subtitle_width}").trim_end()) {
                    (subtitle)
                }
            }
        }
    }
}

fn check_item(text: &str) -> Markup {
    html! {
        div class="flex items-center gap-3 mb-3" {
            div class="w-5 h-5 rounded-full flex items-center justify-center" style="background-color: var(--website-color-success);" {
                (icon_svg("Check"))
            }
            span class="website-text-primary website-font-secondary" { (text) }
        }
    }
}

fn social_links(links: &[SocialLink]) -> Markup {
    html! {
        @for link in links {
            a href=(link.url) class="hover:opacity-70 transition-opacity" target="_blank" rel="noopener noreferrer" {
                (icon_svg(&link.icon))
            }
        }
    }
}

/// Slide-in menu shared by both headers. `panel_style` colors the panel.
fn mobile_menu_panel(
    logo: &str,
    menu_items: &[String],
    cta: Markup,
    panel_style: Option<&str>,
    text_color: &str,
) -> Markup {
    let text_style = format!("color: {text_color};");
    html! {
        div id="mobile-menu-panel" class="mobile-menu-panel" style=[panel_style] {
            div class="flex items-center justify-between mb-6" {
                h2 class="text-lg font-bold website-font-primary" style=(text_style) {
                    (logo)
                }
                button onclick="closeMobileMenu()" class="p-2" style=(text_style) {
                    (icon_svg("X"))
                }
            }
            nav class="space-y-4" {
                @for item in menu_items {
                    a href=(anchor(item)) class="block py-2 website-font-secondary" style=(text_style) onclick="closeMobileMenu()" {
                        (item)
                    }
                }
                div class="pt-4" {
                    (cta)
                }
            }
        }
    }
}

// ============================================================================
// Headers
// ============================================================================

fn header_simple(c: &HeaderContent) -> Markup {
    let text_style = "color: var(--website-color-text);";
    let panel_cta = html! {
        a href=(c.cta_link) class="btn-primary w-full text-center" onclick="closeMobileMenu()" {
            (c.cta_text)
        }
    };
    html! {
        header class="sticky top-0 z-50 border-b backdrop-blur-xl" style="background-color: rgba(255, 255, 255, 0.95); border-color: var(--website-color-border);" {
            div class="container" {
                div class="flex items-center justify-between h-16" {
                    h1 class="text-xl font-bold website-font-primary" style=(PRIMARY_COLOR) {
                        (c.logo)
                    }
                    nav class="desktop-menu flex items-center space-x-8" {
                        @for item in &c.menu_items {
                            a href=(anchor(item)) class="font-medium hover:opacity-70 transition-opacity website-font-secondary" style=(text_style) {
                                (item)
                            }
                        }
                    }
                    div class="desktop-menu" {
                        a href=(c.cta_link) class="btn-primary" { (c.cta_text) }
                    }
                    button class="mobile-menu p-2" onclick="toggleMobileMenu()" {
                        (icon_svg("Menu"))
                    }
                }
            }
        }
        (mobile_menu_panel(&c.logo, &c.menu_items, panel_cta, None, "var(--website-color-text)"))
    }
}

fn header_modern(c: &HeaderModernContent) -> Markup {
    let (header_style, text_color, cta_style, panel_background) = if c.has_gradient {
        (
            format!("background: {PRIMARY_GRADIENT};"),
            "#ffffff",
            "background-color: #ffffff; color: var(--website-color-primary);".to_string(),
            PRIMARY_GRADIENT.to_string(),
        )
    } else {
        (
            "background-color: rgba(255, 255, 255, 0.95); border-bottom: 1px solid var(--website-color-border);"
                .to_string(),
            "var(--website-color-text)",
            format!("background: {PRIMARY_GRADIENT}; color: white;"),
            "var(--website-color-background)".to_string(),
        )
    };
    let text_style = format!("color: {text_color};");
    let panel_style = format!("background: {panel_background};");
    let panel_cta = html! {
        a href=(c.cta_link) class="block w-full px-4 py-2 rounded-lg font-medium text-center transition-colors website-font-secondary" style=(cta_style) onclick="closeMobileMenu()" {
            (c.cta_text)
        }
    };

    html! {
        header class="sticky top-0 z-50 backdrop-blur-xl" style=(header_style) {
            div class="container" {
                div class="flex items-center justify-between h-16" {
                    h1 class="text-xl font-bold website-font-primary" style=(text_style) {
                        (c.logo)
                    }
                    nav class="desktop-menu flex items-center space-x-8" {
                        @for item in &c.menu_items {
                            a href=(anchor(item)) class="font-medium hover:opacity-70 transition-opacity website-font-secondary" style=(text_style) {
                                (item)
                            }
                        }
                    }
                    div class="desktop-menu" {
                        a href=(c.cta_link) class="px-4 py-2 rounded-lg font-medium transition-colors website-font-secondary" style=(cta_style) {
                            (c.cta_text)
                        }
                    }
                    button class="mobile-menu p-2" onclick="toggleMobileMenu()" style=(text_style) {
                        (icon_svg("Menu"))
                    }
                }
            }
        }
        (mobile_menu_panel(&c.logo, &c.menu_items, panel_cta, Some(&panel_style), text_color))
    }
}

// ============================================================================
// Heroes
// ============================================================================

fn hero_modern(c: &HeroModernContent) -> Markup {
    let background = format!(
        "background-image: url('{}'); background-size: cover; background-position: center;",
        c.background_image
    );
    html! {
        section id="home" class="relative min-h-screen flex items-center justify-center website-font-primary" style=(background) {
            div class="absolute inset-0 bg-black/50" {}
            div class="relative z-10 container text-center text-white animate-on-scroll" data-animation="fadeInUp 0.6s ease-out" {
                h1 class="text-responsive-xl font-bold mb-6 website-font-primary" { (c.title) }
                p class="text-responsive-lg mb-4 website-font-secondary" { (c.subtitle) }
                p class="text-lg mb-8 max-w-2xl mx-auto opacity-90 website-font-secondary" { (c.description) }
                div class="flex flex-col sm:flex-row gap-4 justify-center" {
                    a href=(c.cta_link) class="btn-primary text-lg px-8 py-4" { (c.cta_text) }
                    @if let Some(text) = c.secondary_cta_text.as_deref().filter(|t| !t.is_empty()) {
                        a href=(c.secondary_cta_link.as_deref().filter(|l| !l.is_empty()).unwrap_or("#about")) class="btn-secondary text-lg px-8 py-4" style="border-color: white; color: white;" {
                            (text)
                        }
                    }
                }
            }
        }
    }
}

fn hero_split(c: &HeroSplitContent) -> Markup {
    html! {
        section id="home" class="section-padding website-bg-background" {
            div class="container" {
                div class="grid-2 items-center gap-12" {
                    div class="animate-on-scroll" data-animation="fadeInLeft 0.6s ease-out" {
                        h1 class="text-responsive-xl font-bold mb-6 website-font-primary" style=(PRIMARY_COLOR) {
                            (c.title)
                        }
                        p class="text-responsive-md mb-4 website-text-secondary website-font-secondary" { (c.subtitle) }
                        p class="text-lg mb-6 website-text-secondary website-font-secondary" { (c.description) }
                        @for feature in &c.features {
                            (check_item(feature))
                        }
                        div class="mt-8" {
                            a href=(c.cta_link) class="btn-primary text-lg px-8 py-4" { (c.cta_text) }
                        }
                    }
                    div class="relative animate-on-scroll" data-animation="fadeInRight 0.6s ease-out" {
                        img src=(c.image) alt=(c.title) class="rounded-2xl website-shadow-lg w-full";
                    }
                }
            }
        }
    }
}

// ============================================================================
// About
// ============================================================================

fn about_simple(c: &AboutSimpleContent) -> Markup {
    html! {
        section id="about" class="section-padding website-bg-surface" {
            div class="container" {
                div class="grid-2 items-center gap-12" {
                    div class="animate-on-scroll" data-animation="fadeInLeft 0.6s ease-out" {
                        h2 class="text-responsive-lg font-bold mb-6 website-font-primary" style=(PRIMARY_COLOR) {
                            (c.title)
                        }
                        p class="text-lg mb-6 website-text-secondary website-font-secondary" { (c.description) }
                        @for feature in &c.features {
                            (check_item(feature))
                        }
                    }
                    div class="relative animate-on-scroll" data-animation="fadeInRight 0.6s ease-out" {
                        img src=(c.image) alt=(c.title) class="rounded-2xl website-shadow-lg w-full";
                    }
                }
            }
        }
    }
}

fn about_team(c: &AboutTeamContent) -> Markup {
    html! {
        section id="team" class="section-padding website-bg-background" {
            div class="container" {
                (section_heading(&c.title, Some(&c.subtitle), "max-w-3xl mx-auto"))
                div class="grid-3 gap-8" {
                    @for (i, member) in c.team_members.iter().enumerate() {
                        div class="text-center rounded-xl p-6 website-bg-surface website-shadow-lg hover-shadow animate-on-scroll" data-animation=(stagger(i)) {
                            img src=(member.image) alt=(member.name) class="w-24 h-24 rounded-full mx-auto mb-4 object-cover website-shadow-md";
                            h3 class="text-xl font-semibold mb-2 website-text-primary website-font-primary" { (member.name) }
                            p class="mb-3 website-font-secondary" style=(PRIMARY_COLOR) { (member.role) }
                            p class="text-sm website-text-secondary website-font-secondary" { (member.bio) }
                        }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Services, features, pricing
// ============================================================================

fn services_grid(c: &ServicesGridContent) -> Markup {
    html! {
        section id="services" class="section-padding website-bg-background" {
            div class="container" {
                (section_heading(&c.title, Some(&c.subtitle), "max-w-2xl mx-auto"))
                div class="grid-3 gap-8" {
                    @for (i, service) in c.services.iter().enumerate() {
                        div class="website-bg-surface rounded-xl p-8 website-shadow-lg hover-shadow animate-on-scroll" data-animation=(stagger(i)) {
                            div class="w-16 h-16 website-gradient-primary rounded-xl flex items-center justify-center mb-6 text-white" {
                                (icon_svg(&service.icon))
                            }
                            h3 class="text-xl font-bold mb-4 website-text-primary website-font-primary" { (service.title) }
                            p class="website-text-secondary website-font-secondary" { (service.description) }
                        }
                    }
                }
            }
        }
    }
}

fn features_list(c: &FeaturesListContent) -> Markup {
    html! {
        section id="features" class="section-padding website-bg-surface" {
            div class="container" {
                (section_heading(&c.title, Some(&c.subtitle), "max-w-3xl mx-auto"))
                div class="grid-2 gap-8" {
                    @for (i, feature) in c.features.iter().enumerate() {
                        div class="flex items-start gap-4 p-6 rounded-xl website-bg-background border hover-shadow animate-on-scroll" style="border-color: var(--website-color-border);" data-animation=(stagger(i)) {
                            div class="w-12 h-12 rounded-lg flex items-center justify-center flex-shrink-0" style=(ICON_TILE) {
                                (icon_svg(&feature.icon))
                            }
                            div class="flex-1" {
                                h3 class="text-xl font-semibold mb-2 website-text-primary website-font-primary" { (feature.title) }
                                p class="website-text-secondary website-font-secondary" { (feature.description) }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn pricing_cards(c: &PricingCardsContent) -> Markup {
    html! {
        section id="pricing" class="section-padding website-bg-surface" {
            div class="container" {
                (section_heading(&c.title, None, ""))
                div class="grid-3 gap-8" {
                    @for (i, plan) in c.plans.iter().enumerate() {
                        (pricing_card(plan, i))
                    }
                }
            }
        }
    }
}

/// The second plan is highlighted as the popular one.
fn pricing_card(plan: &PricingPlan, index: usize) -> Markup {
    let popular = index == 1;
    let class = if popular {
        "website-bg-background rounded-xl p-8 website-shadow-lg hover-shadow animate-on-scroll transform scale-105"
    } else {
        "website-bg-background rounded-xl p-8 website-shadow-lg hover-shadow animate-on-scroll"
    };
    let border = if popular {
        "border: 2px solid var(--website-color-primary);"
    } else {
        "border: 2px solid var(--website-color-border);"
    };
    html! {
        div class=(class) style=(border) data-animation=(stagger(index)) {
            @if popular {
                div class="text-center -mt-4 mb-4" {
                    span class="website-gradient-primary text-white px-4 py-1 rounded-full text-sm font-semibold" { "Most Popular" }
                }
            }
            div class="text-center mb-8" {
                h3 class="text-2xl font-bold mb-4 website-text-primary website-font-primary" { (plan.name) }
                div class="text-4xl font-bold mb-2 website-font-accent" style=(PRIMARY_COLOR) { (plan.price) }
                p class="website-text-secondary website-font-secondary" { "per month" }
            }
            div class="space-y-4 mb-8" {
                @for feature in &plan.features {
                    div class="flex items-center gap-3" {
                        div class="w-5 h-5 rounded-full flex items-center justify-center" style="background-color: rgba(var(--website-color-success-rgb), 0.2); color: var(--website-color-success);" {
                            (icon_svg("Check"))
                        }
                        span class="website-text-primary website-font-secondary" { (feature) }
                    }
                }
            }
            button class="w-full btn-primary" { "Get Started" }
        }
    }
}

// ============================================================================
// Testimonials, portfolio, blog
// ============================================================================

const STAR_PATH: &str = "M9.049 2.927c.3-.921 1.603-.921 1.902 0l1.07 3.292a1 1 0 00.95.69h3.462c.969 0 1.371 1.24.588 1.81l-2.8 2.034a1 1 0 00-.364 1.118l1.07 3.292c.3.921-.755 1.688-1.54 1.118l-2.8-2.034a1 1 0 00-1.175 0l-2.8 2.034c-.784.57-1.838-.197-1.539-1.118l1.07-3.292a1 1 0 00-.364-1.118L2.98 8.72c-.783-.57-.38-1.81.588-1.81h3.461a1 1 0 00.951-.69l1.07-3.292z";

/// Five stars, the first `rating` filled. Zero or absent counts as five.
fn star_rating(rating: Option<u8>) -> Markup {
    let filled = rating.filter(|r| *r > 0).unwrap_or(5);
    html! {
        div class="flex items-center gap-1 mb-4" {
            @for i in 0..5u8 {
                @let tone = if i < filled { "text-yellow-400" } else { "text-gray-300" };
                svg class={ "w-4 h-4 " (tone) } fill="currentColor" viewBox="0 0 20 20" {
                    path d=(STAR_PATH) {}
                }
            }
        }
    }
}

fn testimonials_grid(c: &TestimonialsGridContent) -> Markup {
    html! {
        section id="testimonials" class="section-padding website-bg-background" {
            div class="container" {
                (section_heading(&c.title, Some(&c.subtitle), "max-w-3xl mx-auto"))
                div class="grid-3 gap-8" {
                    @for (i, t) in c.testimonials.iter().enumerate() {
                        div class="website-bg-surface rounded-xl p-6 website-shadow-lg hover-shadow animate-on-scroll" data-animation=(stagger(i)) {
                            div class="flex items-center gap-4 mb-4" {
                                img src=(t.avatar) alt=(t.name) class="w-12 h-12 rounded-full object-cover website-shadow-sm";
                                div class="flex-1" {
                                    h4 class="font-semibold website-text-primary website-font-primary" { (t.name) }
                                    p class="text-sm website-text-secondary website-font-secondary" {
                                        (t.role) ", " (t.company)
                                    }
                                }
                            }
                            (star_rating(t.rating))
                            p class="italic website-text-secondary website-font-secondary" {
                                "\"" (t.content) "\""
                            }
                        }
                    }
                }
            }
        }
    }
}

fn portfolio_grid(c: &PortfolioGridContent) -> Markup {
    html! {
        section id="portfolio" class="section-padding website-bg-background" {
            div class="container" {
                (section_heading(&c.title, Some(&c.subtitle), "max-w-3xl mx-auto"))
                div class="grid-3 gap-8" {
                    @for (i, item) in c.projects.iter().enumerate() {
                        div class="website-bg-surface rounded-xl overflow-hidden website-shadow-lg hover-shadow group animate-on-scroll" data-animation=(stagger(i)) {
                            div class="relative overflow-hidden" {
                                img src=(item.image) alt=(item.title) class="w-full h-48 object-cover group-hover:scale-110 transition-transform duration-300";
                                div class="absolute inset-0 bg-black/0 group-hover:bg-black/20 transition-colors duration-300 flex items-center justify-center" {
                                    a href=(item.url) class="w-12 h-12 bg-white rounded-full flex items-center justify-center opacity-0 group-hover:opacity-100 transition-opacity duration-300 hover-scale website-shadow-lg" {
                                        (icon_svg("ExternalLink"))
                                    }
                                }
                            }
                            div class="p-6" {
                                div class="mb-3" {
                                    span class="text-sm font-medium website-font-secondary badge" style="background-color: var(--website-color-primary);" {
                                        (item.category)
                                    }
                                }
                                h3 class="text-xl font-semibold mb-3 website-text-primary website-font-primary" { (item.title) }
                                p class="leading-relaxed text-sm website-text-secondary website-font-secondary" { (item.description) }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn blog_grid(c: &BlogGridContent) -> Markup {
    html! {
        section id="blog" class="section-padding website-bg-background" {
            div class="container" {
                (section_heading(&c.title, Some(&c.subtitle), "max-w-3xl mx-auto"))
                div class="grid-3 gap-8" {
                    @for (i, post) in c.posts.iter().enumerate() {
                        article class="website-bg-surface rounded-xl overflow-hidden website-shadow-lg hover-shadow animate-on-scroll" data-animation=(stagger(i)) {
                            img src=(post.image) alt=(post.title) class="w-full h-48 object-cover";
                            div class="p-6" {
                                div class="flex items-center gap-4 mb-3 text-sm" {
                                    div class="flex items-center gap-1" {
                                        (icon_svg("Calendar"))
                                        span class="website-text-secondary website-font-secondary" { (display_date(&post.date)) }
                                    }
                                    div class="flex items-center gap-1" {
                                        (icon_svg("User"))
                                        span class="website-text-secondary website-font-secondary" { (post.author) }
                                    }
                                }
                                div class="mb-3" {
                                    span class="text-sm font-medium website-font-secondary badge" style="background-color: var(--website-color-primary);" {
                                        (post.category)
                                    }
                                }
                                h3 class="text-xl font-semibold mb-3 website-text-primary website-font-primary" { (post.title) }
                                p class="leading-relaxed mb-4 text-sm website-text-secondary website-font-secondary" { (post.excerpt) }
                                a href=(post.url) class="inline-flex items-center gap-2 font-medium hover:underline website-font-secondary" style=(PRIMARY_COLOR) {
                                    "Read More"
                                    (icon_svg("ArrowRight"))
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Contact, call to action, footers
// ============================================================================

fn contact_detail(icon: &str, label: &str, value: &str) -> Markup {
    html! {
        div class="flex items-center gap-4" {
            div class="w-12 h-12 rounded-lg flex items-center justify-center" style=(ICON_TILE) {
                (icon_svg(icon))
            }
            div {
                h3 class="font-semibold mb-1 website-text-primary website-font-primary" { (label) }
                p class="website-text-secondary website-font-secondary" { (value) }
            }
        }
    }
}

fn contact_form(c: &ContactFormContent) -> Markup {
    html! {
        section id="contact" class="section-padding website-bg-background" {
            div class="container-lg" {
                (section_heading(&c.title, Some(&c.subtitle), ""))
                div class="grid-2 gap-12" {
                    div class="space-y-6 animate-on-scroll" data-animation="fadeInLeft 0.6s ease-out" {
                        (contact_detail("Mail", "Email", &c.email))
                        (contact_detail("Phone", "Phone", &c.phone))
                        (contact_detail("MapPin", "Address", &c.address))
                    }
                    div class="website-bg-surface rounded-2xl p-8 website-shadow-lg animate-on-scroll" data-animation="fadeInRight 0.6s ease-out" {
                        form onsubmit="handleFormSubmit(event)" {
                            div class="grid-2 mb-6" {
                                input type="text" name="name" placeholder="Your Name" class="form-input" required;
                                input type="email" name="email" placeholder="Your Email" class="form-input" required;
                            }
                            input type="text" name="subject" placeholder="Subject" class="form-input mb-6" required;
                            textarea name="message" placeholder="Your Message" class="form-textarea mb-6" required {}
                            button type="submit" class="btn-primary w-full" {
                                (icon_svg("Send"))
                                "Send Message"
                            }
                        }
                    }
                }
            }
        }
    }
}

fn cta_simple(c: &CtaContent) -> Markup {
    html! {
        section class="section-padding website-gradient-primary text-white" {
            div class="container text-center animate-on-scroll" data-animation="fadeInUp 0.6s ease-out" {
                h2 class="text-responsive-lg font-bold mb-6 website-font-primary" { (c.title) }
                p class="text-lg mb-8 max-w-2xl mx-auto opacity-90 website-font-secondary" { (c.description) }
                div class="flex flex-col sm:flex-row gap-4 justify-center" {
                    a href=(c.cta_link) class="inline-block px-8 py-4 bg-white rounded-lg hover:bg-gray-100 transition-colors font-semibold website-font-secondary" style=(PRIMARY_COLOR) {
                        (c.cta_text)
                    }
                    @if let Some(text) = c.secondary_cta_text.as_deref().filter(|t| !t.is_empty()) {
                        a href=(c.secondary_cta_link.as_deref().filter(|l| !l.is_empty()).unwrap_or("#")) class="inline-block px-8 py-4 border-2 border-white text-white rounded-lg hover:bg-white transition-colors font-semibold website-font-secondary" {
                            (text)
                        }
                    }
                }
            }
        }
    }
}

fn footer_simple(c: &FooterSimpleContent) -> Markup {
    html! {
        footer class="py-12 website-gradient-primary text-white" {
            div class="container" {
                div class="text-center" {
                    h3 class="text-2xl font-bold mb-4 website-font-primary" { (c.company_name) }
                    p class="mb-6 website-font-secondary" { (c.description) }
                    div class="flex justify-center space-x-6 mb-6" {
                        (social_links(&c.social_links))
                    }
                    p class="text-sm opacity-70 website-font-secondary" { (c.copyright) }
                }
            }
        }
    }
}

fn footer_detailed(c: &FooterDetailedContent) -> Markup {
    html! {
        footer class="py-16 website-gradient-primary text-white" {
            div class="container" {
                div class="grid-4 mb-12 gap-8" {
                    div {
                        h3 class="text-2xl font-bold mb-4 website-font-primary" { (c.company_name) }
                        p class="mb-6 opacity-90 website-font-secondary" { (c.description) }
                        div class="flex space-x-4" {
                            (social_links(&c.social_links))
                        }
                    }
                    @for group in &c.sections {
                        div {
                            h4 class="text-lg font-semibold mb-4 website-font-primary" { (group.title) }
                            ul class="space-y-2" {
                                @for link in &group.links {
                                    li {
                                        a href="#" class="opacity-90 hover:opacity-100 transition-opacity website-font-secondary" { (link) }
                                    }
                                }
                            }
                        }
                    }
                }
                div class="border-t border-white/20 pt-8 text-center" {
                    p class="text-sm opacity-70 website-font-secondary" { (c.copyright) }
                }
            }
        }
    }
}
