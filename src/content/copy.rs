//! Fixed page copy: headlines, subtitles and contact details.

/// Hero headline, one word per line. The middle line is accented.
pub const HERO_TITLE: [&str; 3] = ["FAST.", "PRECISE.", "ELEGANT."];

/// Hero subtitle.
pub const HERO_SUBTITLE: &str = "We create lightning-fast, pixel-perfect websites that soar \
above the competition. Just like our hummingbird mascot.";

/// Hero call-to-action buttons (primary first).
pub const HERO_BUTTONS: [&str; 2] = ["Get Started", "View Portfolio"];

/// Hero stats as (value, label).
pub const HERO_STATS: [(&str, &str); 3] = [
    ("50+", "Projects Delivered"),
    ("99%", "Client Satisfaction"),
    ("24/7", "Support"),
];

/// Icons orbiting the hero circle.
pub const HERO_ICONS: [&str; 3] = ["Code", "Zap", "Sparkles"];

/// Section heading and subtitle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heading {
    /// Large headline
    pub title: &'static str,
    /// Supporting line
    pub subtitle: &'static str,
}

/// Solutions section heading.
pub const SOLUTIONS: Heading = Heading {
    title: "SOLUTIONS",
    subtitle: "From concept to deployment, we provide end-to-end solutions that transform \
your digital presence",
};

/// Portfolio section heading.
pub const PORTFOLIO: Heading = Heading {
    title: "PORTFOLIO",
    subtitle: "Showcasing our latest work - where innovation meets excellence",
};

/// Portfolio closing call to action.
pub const PORTFOLIO_CTA: Heading = Heading {
    title: "Ready to Start Your Project?",
    subtitle: "Let's create something amazing together. From concept to launch, we'll bring \
your vision to life with precision and elegance.",
};

/// Portfolio call-to-action button.
pub const PORTFOLIO_CTA_BUTTON: &str = "Start Your Project";

/// Technologies section heading.
pub const TECH_STACK: Heading = Heading {
    title: "TECH STACK",
    subtitle: "Cutting-edge technologies and tools we use to build exceptional digital experiences",
};

/// Closing panel of the technologies section.
pub const TECH_PHILOSOPHY: Heading = Heading {
    title: "Our Technology Philosophy",
    subtitle: "We believe in using the right tool for the right job. Our technology choices \
are driven by performance, scalability, and developer experience. We stay current with \
industry trends while maintaining stability and reliability in our solutions.",
};

/// Contact section heading.
pub const CONTACT: Heading = Heading {
    title: "LET'S TALK",
    subtitle: "Ready to transform your digital presence? Let's discuss your project and bring \
your vision to life.",
};

/// Contact introduction panel.
pub const CONTACT_INTRO: Heading = Heading {
    title: "Get in Touch",
    subtitle: "We're here to help you create something extraordinary. Whether you need a \
complete digital transformation or want to enhance your existing platform, our team is ready \
to make it happen.",
};

/// Contact channels as (label, value).
pub const CONTACT_DETAILS: [(&str, &str); 3] = [
    ("Email", "hello@flizzweb.com"),
    ("Phone", "+1 (555) 123-4567"),
    ("Location", "Remote & On-site Worldwide"),
];

/// Contact side notes as (title, text).
pub const CONTACT_NOTES: [(&str, &str); 2] = [
    ("Response Time", "We typically respond within 24 hours"),
    ("Free Consultation", "30-minute strategy session included"),
];

/// Contact form submit button.
pub const SUBMIT_LABEL: &str = "Send Message";

/// Solutions call-to-action button.
pub const SOLUTIONS_CTA_BUTTON: &str = "Discuss Your Project";

/// Status shown after the contact form is sent.
pub const SUBMIT_THANKS: &str = "Thank you for your message! We'll get back to you soon.";
