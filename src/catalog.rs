//! The built-in section template catalog.
//!
//! Sixteen templates, one per renderer in [`export::sections`](crate::export::sections).
//! The list is built once on first use and is read-only afterwards; the store
//! seeds it into storage the first time it loads.

use crate::content::*;
use crate::types::SectionTemplate;
use std::sync::LazyLock;

static TEMPLATES: LazyLock<Vec<SectionTemplate>> = LazyLock::new(build_catalog);

/// All templates, in catalog order.
pub fn templates() -> &'static [SectionTemplate] {
    &TEMPLATES
}

/// Look up a template by id.
pub fn find(template_id: &str) -> Option<&'static SectionTemplate> {
    TEMPLATES.iter().find(|t| t.id == template_id)
}

/// Templates in one category, in catalog order.
pub fn by_category(category: &str) -> Vec<&'static SectionTemplate> {
    TEMPLATES.iter().filter(|t| t.category == category).collect()
}

/// Distinct categories in first-seen order.
pub fn categories() -> Vec<&'static str> {
    let mut seen: Vec<&'static str> = Vec::new();
    for template in TEMPLATES.iter() {
        if !seen.contains(&template.category.as_str()) {
            seen.push(template.category.as_str());
        }
    }
    seen
}

fn pexels(photo: u32) -> String {
    format!(
        "https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg?auto=compress&cs=tinysrgb&w=800"
    )
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn template(
    id: &str,
    name: &str,
    category: &str,
    description: &str,
    icon: &str,
    tags: &[&str],
    photo: u32,
    default_content: SectionContent,
) -> SectionTemplate {
    SectionTemplate {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        kind: category.to_string(),
        thumbnail: pexels(photo),
        description: description.to_string(),
        default_content,
        icon: icon.to_string(),
        tags: strings(tags),
    }
}

fn icon_card(icon: &str, title: &str, description: &str) -> IconCard {
    IconCard {
        icon: icon.to_string(),
        title: title.to_string(),
        description: description.to_string(),
    }
}

fn social_links() -> Vec<SocialLink> {
    [
        ("Facebook", "https://facebook.com"),
        ("Twitter", "https://twitter.com"),
        ("Instagram", "https://instagram.com"),
        ("LinkedIn", "https://linkedin.com"),
    ]
    .into_iter()
    .map(|(icon, url)| SocialLink {
        icon: icon.to_string(),
        url: url.to_string(),
    })
    .collect()
}

fn build_catalog() -> Vec<SectionTemplate> {
    vec![
        template(
            HEADER_SIMPLE,
            "Simple Header",
            "header",
            "Clean navigation bar with logo, menu links, and a call to action",
            "Menu",
            &["navigation", "header", "simple"],
            3184292,
            SectionContent::HeaderSimple(HeaderContent {
                logo: "YourBrand".into(),
                menu_items: strings(&["Home", "About", "Services", "Contact"]),
                cta_text: "Get Started".into(),
                cta_link: "#contact".into(),
            }),
        ),
        template(
            HEADER_MODERN,
            "Modern Header",
            "header",
            "Sticky header with optional gradient background",
            "Menu",
            &["navigation", "header", "gradient"],
            3184360,
            SectionContent::HeaderModern(HeaderModernContent {
                logo: "YourBrand".into(),
                menu_items: strings(&["Home", "Features", "Pricing", "Contact"]),
                cta_text: "Sign Up".into(),
                cta_link: "#pricing".into(),
                has_gradient: true,
            }),
        ),
        template(
            HERO_MODERN,
            "Modern Hero",
            "hero",
            "Full-screen hero with background image and two calls to action",
            "Rocket",
            &["hero", "landing", "fullscreen"],
            3184398,
            SectionContent::HeroModern(HeroModernContent {
                title: "Build Something Amazing".into(),
                subtitle: "Your vision, our expertise".into(),
                description: "We help businesses grow with modern websites that convert visitors into customers.".into(),
                cta_text: "Get Started".into(),
                cta_link: "#contact".into(),
                secondary_cta_text: Some("Learn More".into()),
                secondary_cta_link: Some("#about".into()),
                background_image: pexels(3184418),
            }),
        ),
        template(
            HERO_SPLIT,
            "Split Hero",
            "hero",
            "Two-column hero with feature checklist and image",
            "Monitor",
            &["hero", "split", "features"],
            3184465,
            SectionContent::HeroSplit(HeroSplitContent {
                title: "Grow Your Business Online".into(),
                subtitle: "Everything you need in one place".into(),
                description: "Launch faster with tools designed for small teams.".into(),
                features: strings(&["No setup fees", "Cancel anytime", "24/7 support"]),
                cta_text: "Start Free Trial".into(),
                cta_link: "#pricing".into(),
                image: pexels(3184339),
            }),
        ),
        template(
            ABOUT_SIMPLE,
            "Simple About",
            "about",
            "Company story with highlights and an image",
            "Users",
            &["about", "story", "company"],
            3184306,
            SectionContent::AboutSimple(AboutSimpleContent {
                title: "About Us".into(),
                description: "We are a passionate team dedicated to delivering exceptional results for our clients.".into(),
                features: strings(&["10+ years of experience", "200+ happy clients", "Award-winning team"]),
                image: pexels(3184357),
            }),
        ),
        template(
            ABOUT_TEAM,
            "Team Showcase",
            "about",
            "Grid of team members with roles and short bios",
            "Users",
            &["about", "team", "people"],
            3184405,
            SectionContent::AboutTeam(AboutTeamContent {
                title: "Meet Our Team".into(),
                subtitle: "The people behind our success".into(),
                team_members: vec![
                    TeamMember {
                        name: "Sarah Johnson".into(),
                        role: "CEO & Founder".into(),
                        bio: "Leads strategy and keeps the team focused on what matters.".into(),
                        image: pexels(774909),
                    },
                    TeamMember {
                        name: "Michael Chen".into(),
                        role: "Lead Developer".into(),
                        bio: "Builds fast, reliable products.".into(),
                        image: pexels(220453),
                    },
                    TeamMember {
                        name: "Emily Davis".into(),
                        role: "Design Director".into(),
                        bio: "Turns complex ideas into simple interfaces.".into(),
                        image: pexels(415829),
                    },
                ],
            }),
        ),
        template(
            SERVICES_GRID,
            "Services Grid",
            "services",
            "Three-column grid of services with icons",
            "Briefcase",
            &["services", "grid", "icons"],
            3184287,
            SectionContent::ServicesGrid(ServicesGridContent {
                title: "Our Services".into(),
                subtitle: "Solutions tailored to your needs".into(),
                services: vec![
                    icon_card("Palette", "Web Design", "Beautiful, responsive designs that engage your audience."),
                    icon_card("Code", "Development", "Robust applications built with modern technology."),
                    icon_card("TrendingUp", "Marketing", "Data-driven campaigns that grow your reach."),
                ],
            }),
        ),
        template(
            FEATURES_LIST,
            "Features List",
            "features",
            "Two-column list of features with tinted icon badges",
            "Zap",
            &["features", "list", "icons"],
            3184291,
            SectionContent::FeaturesList(FeaturesListContent {
                title: "Why Choose Us".into(),
                subtitle: "Features that set us apart".into(),
                features: vec![
                    icon_card("Zap", "Lightning Fast", "Optimized for speed on every device."),
                    icon_card("Shield", "Secure", "Security best practices built in from day one."),
                    icon_card("Smartphone", "Mobile Ready", "Looks great on phones, tablets, and desktops."),
                    icon_card("Users", "Dedicated Support", "Real people ready to help when you need it."),
                ],
            }),
        ),
        template(
            PRICING_CARDS,
            "Pricing Cards",
            "pricing",
            "Three pricing plans with the middle one highlighted",
            "DollarSign",
            &["pricing", "plans", "cards"],
            3184325,
            SectionContent::PricingCards(PricingCardsContent {
                title: "Simple, Transparent Pricing".into(),
                plans: vec![
                    PricingPlan {
                        name: "Starter".into(),
                        price: "$9".into(),
                        features: strings(&["1 website", "Basic analytics", "Email support"]),
                    },
                    PricingPlan {
                        name: "Professional".into(),
                        price: "$29".into(),
                        features: strings(&["5 websites", "Advanced analytics", "Priority support", "Custom domain"]),
                    },
                    PricingPlan {
                        name: "Enterprise".into(),
                        price: "$99".into(),
                        features: strings(&["Unlimited websites", "Dedicated manager", "SLA", "White labeling"]),
                    },
                ],
            }),
        ),
        template(
            TESTIMONIALS_GRID,
            "Testimonials Grid",
            "testimonials",
            "Customer quotes with avatars and star ratings",
            "Star",
            &["testimonials", "reviews", "social-proof"],
            3184338,
            SectionContent::TestimonialsGrid(TestimonialsGridContent {
                title: "What Our Clients Say".into(),
                subtitle: "Trusted by businesses everywhere".into(),
                testimonials: vec![
                    Testimonial {
                        name: "Anna Smith".into(),
                        role: "Marketing Director".into(),
                        company: "TechCorp".into(),
                        avatar: pexels(1239291),
                        content: "Working with this team transformed our online presence.".into(),
                        rating: Some(5),
                    },
                    Testimonial {
                        name: "David Lee".into(),
                        role: "Founder".into(),
                        company: "StartupXYZ".into(),
                        avatar: pexels(1222271),
                        content: "Fast, professional, and a pleasure to work with.".into(),
                        rating: Some(5),
                    },
                    Testimonial {
                        name: "Maria Garcia".into(),
                        role: "Owner".into(),
                        company: "Garcia Bakery".into(),
                        avatar: pexels(1181686),
                        content: "Our online orders doubled within a month.".into(),
                        rating: Some(4),
                    },
                ],
            }),
        ),
        template(
            PORTFOLIO_GRID,
            "Portfolio Grid",
            "portfolio",
            "Project cards with category badges and external links",
            "Image",
            &["portfolio", "projects", "gallery"],
            3184296,
            SectionContent::PortfolioGrid(PortfolioGridContent {
                title: "Our Work".into(),
                subtitle: "A selection of recent projects".into(),
                projects: vec![
                    PortfolioItem {
                        title: "E-commerce Platform".into(),
                        description: "A complete online store with custom checkout.".into(),
                        image: pexels(230544),
                        category: "Web Development".into(),
                        url: "#".into(),
                    },
                    PortfolioItem {
                        title: "Brand Identity".into(),
                        description: "Logo, palette, and guidelines for a coffee chain.".into(),
                        image: pexels(1591061),
                        category: "Branding".into(),
                        url: "#".into(),
                    },
                    PortfolioItem {
                        title: "Fitness App".into(),
                        description: "Workout tracking for iOS and Android.".into(),
                        image: pexels(4164761),
                        category: "Mobile".into(),
                        url: "#".into(),
                    },
                ],
            }),
        ),
        template(
            CONTACT_FORM,
            "Contact Form",
            "contact",
            "Contact details next to a message form",
            "Mail",
            &["contact", "form", "email"],
            3184465,
            SectionContent::ContactForm(ContactFormContent {
                title: "Get In Touch".into(),
                subtitle: "We'd love to hear from you".into(),
                email: "hello@example.com".into(),
                phone: "+1 (555) 123-4567".into(),
                address: "123 Main Street, Anytown".into(),
            }),
        ),
        template(
            FOOTER_SIMPLE,
            "Simple Footer",
            "footer",
            "Centered footer with social links",
            "Link",
            &["footer", "simple", "social"],
            3184292,
            SectionContent::FooterSimple(FooterSimpleContent {
                company_name: "YourBrand".into(),
                description: "Building better websites, one section at a time.".into(),
                social_links: social_links(),
                copyright: "© 2024 YourBrand. All rights reserved.".into(),
            }),
        ),
        template(
            FOOTER_DETAILED,
            "Detailed Footer",
            "footer",
            "Multi-column footer with link groups and social links",
            "Link",
            &["footer", "detailed", "links"],
            3184360,
            SectionContent::FooterDetailed(FooterDetailedContent {
                company_name: "YourBrand".into(),
                description: "Building better websites, one section at a time.".into(),
                social_links: social_links(),
                sections: vec![
                    FooterLinkGroup {
                        title: "Company".into(),
                        links: strings(&["About", "Careers", "Press"]),
                    },
                    FooterLinkGroup {
                        title: "Services".into(),
                        links: strings(&["Design", "Development", "Marketing"]),
                    },
                    FooterLinkGroup {
                        title: "Support".into(),
                        links: strings(&["Help Center", "Contact", "Privacy"]),
                    },
                ],
                copyright: "© 2024 YourBrand. All rights reserved.".into(),
            }),
        ),
        template(
            CTA_SIMPLE,
            "Simple Call to Action",
            "cta",
            "Gradient banner with one or two buttons",
            "Target",
            &["cta", "conversion", "banner"],
            3184398,
            SectionContent::CtaSimple(CtaContent {
                title: "Ready to Get Started?".into(),
                description: "Join thousands of happy customers today.".into(),
                cta_text: "Start Now".into(),
                cta_link: "#contact".into(),
                secondary_cta_text: Some("Contact Sales".into()),
                secondary_cta_link: Some("#contact".into()),
            }),
        ),
        template(
            BLOG_GRID,
            "Blog Grid",
            "blog",
            "Latest posts with author, date, and category",
            "File",
            &["blog", "posts", "articles"],
            3184418,
            SectionContent::BlogGrid(BlogGridContent {
                title: "Latest Articles".into(),
                subtitle: "Insights and updates from our team".into(),
                posts: vec![
                    BlogPost {
                        title: "10 Tips for a Faster Website".into(),
                        excerpt: "Small changes that make a big difference in load time.".into(),
                        image: pexels(265087),
                        date: "2024-03-15".into(),
                        author: "Sarah Johnson".into(),
                        category: "Performance".into(),
                        url: "#".into(),
                    },
                    BlogPost {
                        title: "Designing for Mobile First".into(),
                        excerpt: "Why starting small leads to better layouts.".into(),
                        image: pexels(196644),
                        date: "2024-02-28".into(),
                        author: "Emily Davis".into(),
                        category: "Design".into(),
                        url: "#".into(),
                    },
                    BlogPost {
                        title: "Choosing the Right Colors".into(),
                        excerpt: "A practical guide to building a brand palette.".into(),
                        image: pexels(1029757),
                        date: "2024-02-10".into(),
                        author: "Michael Chen".into(),
                        category: "Branding".into(),
                        url: "#".into(),
                    },
                ],
            }),
        ),
    ]
}
