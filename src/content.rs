//! Site copy shared by the pages and the footer

pub const BRAND_NAME: &str = "Your Brand";
pub const TAGLINE: &str = "Professional services that deliver quality and value.";

pub const CONTACT_EMAIL: &str = "contact@yourbrand.com";
pub const CONTACT_PHONE: &str = "(555) 123-4567";

/// (days, hours) rows shown under "Business Hours"
pub const BUSINESS_HOURS: &[(&str, &str)] = &[
    ("Monday - Friday", "9:00 AM - 6:00 PM"),
    ("Saturday", "10:00 AM - 4:00 PM"),
    ("Sunday", "Closed"),
];

pub const HOME_INTRO: &str = "From first consultation to final delivery, we help our clients \
achieve their goals with dependable, professional work.";
pub const HOME_CALL_TO_ACTION: &str = "Ready to start a project? Request a free quote.";

pub const ABOUT_OVERVIEW: &[&str] = &[
    "We are a professional services company dedicated to delivering exceptional quality and \
value to our clients. With years of experience in the industry, we have built a reputation \
for excellence and reliability.",
    "Our mission is to provide innovative solutions that help our clients achieve their goals \
while maintaining the highest standards of professionalism and integrity.",
];

/// (value, description)
pub const VALUES: &[(&str, &str)] = &[
    (
        "Excellence",
        "We strive for excellence in everything we do, ensuring the highest quality of service for our clients.",
    ),
    (
        "Integrity",
        "We conduct our business with the utmost integrity and transparency, building trust with our clients.",
    ),
    (
        "Innovation",
        "We embrace innovation and continuously seek new ways to improve our services and solutions.",
    ),
];

/// (name, role)
pub const TEAM: &[(&str, &str)] = &[
    ("John Doe", "CEO"),
    ("Jane Smith", "Operations Director"),
    ("Mike Johnson", "Technical Lead"),
];

pub const QUOTE_INTRO: &str =
    "Fill out the form below and we'll provide you with a detailed quote for your project.";
pub const DESCRIPTION_PLACEHOLDER: &str =
    "Please provide details about your project requirements...";
