//! Static page copy
//!
//! The engine treats all of this as opaque payload; only the number of
//! entries per section matters to the reveal choreography.

use serde::Serialize;

use crate::section::SectionKey;

pub const BRAND: &str = "CraftTech";
pub const BRAND_SUBTITLE: &str = "Digital Product Studio";

/// Hero carousel entry. `media` is an opaque resource handed to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeroSlide {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub media: &'static str,
}

/// Caption shown over the active hero slide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlideCopy {
    pub kicker: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub const HERO_SLIDES: [HeroSlide; 3] = [
    HeroSlide {
        id: "your-video",
        title: "We craft software that feels premium and performs under pressure.",
        subtitle: "From concept to launch, CraftTech partners with US businesses to design and build modern digital products.",
        media: "assets/herovideo1.mp4",
    },
    HeroSlide {
        id: "matrix-ai",
        title: "Type-safe, AI-ready architectures built for the next decade.",
        subtitle: "We use modern TypeScript, cloud, and data practices to future-proof your platforms.",
        media: "assets/hero2.mp4",
    },
    HeroSlide {
        id: "crafttech-brand",
        title: "Your product squad: strategy, design, and engineering in one team.",
        subtitle: "A distributed studio from Pakistan building for North American founders, product leaders, and CTOs.",
        media: "assets/hero3.webm",
    },
];

/// Slide whose copy is shown when a slide has no entry of its own
pub const DEFAULT_SLIDE_ID: &str = "your-video";

static HERO_COPY: [(&str, SlideCopy); 3] = [
    (
        "your-video",
        SlideCopy {
            kicker: "Digital Product Studio",
            title: "We craft software that feels premium\nand performs under pressure.",
            body: "From concept to launch, CraftTech partners with US businesses to design and build modern digital products.",
        },
    ),
    (
        "matrix-ai",
        SlideCopy {
            kicker: "Digital Product Studio",
            title: "Type-safe, AI-ready architectures\nbuilt for the next decade.",
            body: "We use modern TypeScript, cloud, and data practices to future-proof your platforms.",
        },
    ),
    (
        "crafttech-brand",
        SlideCopy {
            kicker: "Digital Product Studio",
            title: "Your product squad: strategy, design,\nand engineering in one team.",
            body: "A distributed studio from Pakistan building for North American founders, product leaders, and CTOs.",
        },
    ),
];

/// Copy for a slide, falling back to the default slide's copy
pub fn slide_copy(slide_id: &str) -> &'static SlideCopy {
    HERO_COPY
        .iter()
        .find(|(id, _)| *id == slide_id)
        .or_else(|| HERO_COPY.iter().find(|(id, _)| *id == DEFAULT_SLIDE_ID))
        .map(|(_, copy)| copy)
        .unwrap_or(&HERO_COPY[0].1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceCard {
    pub label: &'static str,
    pub title: &'static str,
    pub body: &'static str,
    pub tags: &'static [&'static str],
}

pub const SERVICES_INTRO: &str = "Strategy, design, and engineering for teams that ship serious software. We work with the same stacks your in-house engineers already love.";

pub const SERVICES_STACK: [&str; 4] = ["React", "Node.js", "TypeScript", "AWS"];

pub const SERVICE_CARDS: [ServiceCard; 3] = [
    ServiceCard {
        label: "01",
        title: "Product Strategy & Discovery",
        body: "We help you validate ideas, prioritise features, and align stakeholders before a single line of code is written.",
        tags: &["MVP Roadmaps", "Discovery Workshops", "Product Analytics"],
    },
    ServiceCard {
        label: "02",
        title: "Design & Experience",
        body: "Premium product UX for web and mobile, clean and modern, and optimised for real-world usage.",
        tags: &["Figma", "Design Systems", "Prototypes"],
    },
    ServiceCard {
        label: "03",
        title: "Engineering & Launch",
        body: "TypeScript-first builds on React, React Native, Node.js, and AWS with performance, reliability, and handover in mind.",
        tags: &["React", "Node.js", "TypeScript", "AWS"],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProcessStep {
    pub title: &'static str,
    pub body: &'static str,
}

pub const PROCESS_TITLE: &str = "How we take you from brief to launch";

pub const PROCESS_STEPS: [ProcessStep; 4] = [
    ProcessStep {
        title: "01 • Discover",
        body: "Workshops, research, and requirements to get everyone aligned on the same problem and outcome.",
    },
    ProcessStep {
        title: "02 • Design",
        body: "Flows, wireframes, and polished UI that reflect your brand and real user journeys.",
    },
    ProcessStep {
        title: "03 • Build",
        body: "Sprints with demos, reviews, and code that your in-house team can extend with confidence.",
    },
    ProcessStep {
        title: "04 • Launch & grow",
        body: "Rollout, monitoring, and iterative improvements based on real usage and product metrics.",
    },
];

/// Portfolio filter chips
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PortfolioCategory {
    #[default]
    All,
    Web,
    Mobile,
    Ecommerce,
}

impl PortfolioCategory {
    pub const ALL: [PortfolioCategory; 4] = [
        PortfolioCategory::All,
        PortfolioCategory::Web,
        PortfolioCategory::Mobile,
        PortfolioCategory::Ecommerce,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PortfolioCategory::All => "All",
            PortfolioCategory::Web => "Web",
            PortfolioCategory::Mobile => "Mobile",
            PortfolioCategory::Ecommerce => "E-commerce",
        }
    }

    /// Next chip to the right, wrapping around
    pub fn next(&self) -> Self {
        let index = Self::ALL.iter().position(|c| c == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PortfolioItem {
    pub id: u32,
    pub title: &'static str,
    pub kind: &'static str,
    pub category: PortfolioCategory,
    pub description: &'static str,
    pub metrics: &'static [&'static str],
}

pub const WORK_TITLE: &str = "Products we've shipped with teams like yours";

pub static PORTFOLIO_ITEMS: [PortfolioItem; 3] = [
    PortfolioItem {
        id: 1,
        title: "Fintech SaaS Dashboard",
        kind: "Web App",
        category: PortfolioCategory::Web,
        description: "Analytics-heavy admin experience with secure multi-tenant access and real-time KPIs.",
        metrics: &["+38% retention", "SOC2-ready"],
    },
    PortfolioItem {
        id: 2,
        title: "Telehealth Mobile Platform",
        kind: "Mobile App",
        category: PortfolioCategory::Mobile,
        description: "Virtual care, scheduling, and secure messaging for a US-based healthcare startup.",
        metrics: &["iOS & Android", "50k+ sessions"],
    },
    PortfolioItem {
        id: 3,
        title: "Headless Commerce Experience",
        kind: "E-Commerce",
        category: PortfolioCategory::Ecommerce,
        description: "Conversion-optimized storefront with a custom product configurator and fast checkout.",
        metrics: &["3.9x ROI", "<1s page loads"],
    },
];

/// Portfolio items visible under `category`, in table order
///
/// Reveal slots are positional: the n-th visible card uses the n-th work tween.
pub fn filter_portfolio(category: PortfolioCategory) -> impl Iterator<Item = &'static PortfolioItem> {
    PORTFOLIO_ITEMS
        .iter()
        .filter(move |item| category == PortfolioCategory::All || item.category == category)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

pub const TESTIMONIALS_SUBTITLE: &str = "Real feedback from founders, PMs, and CTOs we've partnered with across the US.";

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "CraftTech helped us ship a product our customers actually love to use. Fast, focused, and reliable.",
        name: "Jordan Miles",
        role: "VP Product, Fintech",
    },
    Testimonial {
        quote: "They understand both UX and engineering. The collaboration felt like having an internal product squad.",
        name: "Emily Carter",
        role: "Founder, HealthTech",
    },
    Testimonial {
        quote: "Clear communication, great quality, and they handled complex requirements without drama.",
        name: "Daniel Ortiz",
        role: "CTO, Retail Brand",
    },
];

pub const CONTACT_INTRO: &str = "Share a quick summary of your product, your team, and your timeline. We'll respond with a short Loom and suggested next steps.";

pub const CONTACT_DETAILS: &str = "hello@crafttech.studio  |  Mon - Fri, US & PK friendly hours";

pub const FOOTER_TAGLINE: &str = "Building premium digital products for US startups, founders, and CTOs.";

pub const FOOTER_CREDITS: &str = "Designed & built with TypeScript, React Native, and Expo Web.";

/// Eyebrow label, title and subtitle above a section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionHeader {
    pub label: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
}

/// Header copy for every section except the hero
pub fn section_header(key: SectionKey) -> Option<SectionHeader> {
    let header = match key {
        SectionKey::Hero => return None,
        SectionKey::Services => SectionHeader {
            label: "Services",
            title: "End-to-end product delivery",
            subtitle: SERVICES_INTRO,
        },
        SectionKey::Process => SectionHeader {
            label: "Process",
            title: PROCESS_TITLE,
            subtitle: "A simple, transparent flow that keeps founders, PMs, and CTOs in sync while we build.",
        },
        SectionKey::Work => SectionHeader {
            label: "Work",
            title: WORK_TITLE,
            subtitle: "A snapshot of the platforms we design and build for US startups, scaleups, and enterprises.",
        },
        SectionKey::Testimonials => SectionHeader {
            label: "Clients",
            title: "What partners say",
            subtitle: TESTIMONIALS_SUBTITLE,
        },
        SectionKey::Contact => SectionHeader {
            label: "Contact",
            title: "Tell us what you're building",
            subtitle: CONTACT_INTRO,
        },
    };
    Some(header)
}
