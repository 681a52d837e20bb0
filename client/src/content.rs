//! Static marketing copy for the landing page.
//!
//! Plain `&'static` records, rendered as-is by the section components.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

pub const SITE_TITLE: &str = "Avotonix | AI Receptionists for Modern Businesses";
pub const SITE_DESCRIPTION: &str = "Avotonix delivers AI-powered receptionists that greet, qualify, and schedule for your business around the clock.";
pub const THEME_COLOR_LIGHT: &str = "#f6f2ff";
pub const THEME_COLOR_DARK: &str = "#090423";

pub const CONTACT_EMAIL: &str = "hello@avotonix.com";
pub const CONTACT_PHONE_DISPLAY: &str = "(212) 555-1234";
pub const CONTACT_PHONE_E164: &str = "+12125551234";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureHighlight {
    pub title: &'static str,
    pub description: &'static str,
    pub bullets: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProcessStep {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

/// One entry of the contact section's "what happens next" list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NextStep {
    pub heading: &'static str,
    pub detail: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Features", href: "#features" },
    NavItem { label: "Solutions", href: "#solutions" },
    NavItem { label: "Process", href: "#process" },
    NavItem { label: "Testimonials", href: "#testimonials" },
    NavItem { label: "FAQ", href: "#faq" },
];

/// Footer links are the header navigation minus testimonials.
pub const FOOTER_LINKS: &[NavItem] = &[
    NavItem { label: "Features", href: "#features" },
    NavItem { label: "Solutions", href: "#solutions" },
    NavItem { label: "Process", href: "#process" },
    NavItem { label: "FAQ", href: "#faq" },
];

pub const FEATURE_HIGHLIGHTS: &[FeatureHighlight] = &[
    FeatureHighlight {
        title: "Omnichannel AI solutions",
        description: "Voice, SMS, email, and chat work together so no lead slips through. Avotonix handles inbound greetings, outbound reactivation, and keeps every conversation moving forward.",
        bullets: &[
            "Conversations tailored to your brand",
            "Real-time CRM updates",
            "Intelligent escalation routing",
            "Automated follow-up and nurture",
        ],
    },
    FeatureHighlight {
        title: "Qualify and convert every opportunity",
        description: "We qualify every interaction--from new callers to dormant leads. We capture intent, answer FAQs, and drop qualified bookings straight to your calendar or ticketing system.",
        bullets: &["Proactive lead nurturing", "Calendar sync & reminders", "Human warm transfer options"],
    },
    FeatureHighlight {
        title: "Brand-safe AI solutions",
        description: "Natural speech models tuned to your brand tone, with sentiment awareness and compliance guardrails built into every interaction from day one.",
        bullets: &["Multi-lingual support", "PCI & HIPAA modes", "Zero hallucination architecture"],
    },
];

pub const METRICS: &[Metric] = &[
    Metric { label: "Average response rate", value: "98%" },
    Metric { label: "Meetings booked", value: "3.2x" },
    Metric { label: "Coverage hours", value: "24/7" },
];

pub const INDUSTRIES: &[&str] = &[
    "Professional services",
    "Healthcare clinics",
    "Real estate",
    "Home services",
    "Hospitality",
    "Legal practices",
];

pub const AGENT_CAPABILITIES: &[&str] = &[
    "Personalized greetings in your brand's tone.",
    "Dynamic lead nurturing and qualification.",
    "Effortless appointment booking and payment capture.",
    "Smooth transfers with instant summaries.",
    "Secure analytics and compliance-safe recordings.",
];

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        title: "Discover & script",
        description: "We map your intake workflows and translate them into branded conversation flows in under a week.",
    },
    ProcessStep {
        title: "Integrate & launch",
        description: "Plug Avotonix into your calendars, phone systems, and CRMs with secure handshakes.",
    },
    ProcessStep {
        title: "Learn & optimize",
        description: "Live dashboards surface insights, while our team tunes prompts for conversion and compliance.",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Avotonix took our missed calls from 32% to under 4% in a month. Clients think they're speaking with our in-house reception team.",
        name: "Karen Alvarez",
        role: "Director of Operations, Midtown Clinics",
    },
    Testimonial {
        quote: "The AI concierge doesn't just answer questions -- it books qualified site visits and briefs our sales reps before the call.",
        name: "Marcus Lee",
        role: "VP Growth, Brightline Properties",
    },
];

pub const FAQS: &[Faq] = &[
    Faq {
        question: "What exactly does Avotonix's AI Voice Solution do?",
        answer: "Avotonix automates phone-based conversations for your business--handling greetings, appointment bookings, lead reactivation, and customer follow-ups using natural, human-like AI voices that align with your brand tone.",
    },
    Faq {
        question: "Can the AI voice agent integrate with my existing tools and CRM?",
        answer: "Absolutely. Our system connects with popular CRMs, calendars, ticketing, and payment tools to ensure seamless data flow--so your team never has to manually update or follow up.",
    },
    Faq {
        question: "How does the AI handle different industries or call types?",
        answer: "Each AI workflow is custom-built for your business. Whether you run a dental clinic, law firm, or hotel, we tailor the script, tone, and compliance requirements to your industry's needs.",
    },
    Faq {
        question: "Is the AI voice capable of handling multiple languages and accents?",
        answer: "Yes. Avotonix supports multilingual and regional voice options, allowing your business to serve customers in their preferred language while maintaining a consistent brand voice.",
    },
    Faq {
        question: "Is my customer data secure and compliant?",
        answer: "Data security is a top priority. All recordings, transcripts, and analytics are encrypted and stored in compliance with data protection laws such as HIPAA, GDPR, and CCPA where applicable.",
    },
];

pub const NEXT_STEPS: &[NextStep] = &[
    NextStep { heading: "1. Discovery call:", detail: "Outline goals, integrations, compliance needs." },
    NextStep { heading: "2. Prototype voice:", detail: "We ship a branded demo script within 72 hours." },
    NextStep { heading: "3. Launch plan:", detail: "Agree on rollout, KPIs, and human handoff options." },
];

/// `mailto:` link for the contact button.
#[must_use]
pub fn mailto_href() -> String {
    format!("mailto:{CONTACT_EMAIL}")
}

/// `tel:` link for the contact button.
#[must_use]
pub fn tel_href() -> String {
    format!("tel:{CONTACT_PHONE_E164}")
}

/// Two-digit step badge, `01`, `02`, ...
#[must_use]
pub fn step_badge(index: usize) -> String {
    format!("{:02}", index + 1)
}
