//! Quote form field definitions

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A value/label pair offered by a select field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn option(value: &'static str, label: &'static str) -> SelectOption {
    SelectOption { value, label }
}

pub const PROJECT_TYPE_OPTIONS: &[SelectOption] = &[
    option("", "Select project type"),
    option("consulting", "Consulting"),
    option("development", "Development"),
    option("design", "Design"),
    option("other", "Other"),
];

pub const BUDGET_OPTIONS: &[SelectOption] = &[
    option("", "Select budget range"),
    option("<5000", "Less than $5,000"),
    option("5000-10000", "$5,000 - $10,000"),
    option("10000-25000", "$10,000 - $25,000"),
    option("25000+", "$25,000+"),
];

pub const TIMELINE_OPTIONS: &[SelectOption] = &[
    option("", "Select timeline"),
    option("urgent", "Urgent (1-2 weeks)"),
    option("normal", "Normal (2-4 weeks)"),
    option("relaxed", "Relaxed (1-2 months)"),
    option("flexible", "Flexible"),
];

/// How a field is edited and displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Phone,
    Multiline,
    /// First option is always the empty placeholder
    Select(&'static [SelectOption]),
}

/// Returned when a key outside the eight quote fields is requested
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown quote field: {0}")]
pub struct UnknownFieldError(pub String);

/// The eight keys of the quote request record, in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuoteField {
    Name,
    Email,
    Phone,
    Company,
    ProjectType,
    Budget,
    Timeline,
    Description,
}

impl QuoteField {
    pub const ALL: [QuoteField; 8] = [
        QuoteField::Name,
        QuoteField::Email,
        QuoteField::Phone,
        QuoteField::Company,
        QuoteField::ProjectType,
        QuoteField::Budget,
        QuoteField::Timeline,
        QuoteField::Description,
    ];

    /// Key used in the serialized record
    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Company => "company",
            Self::ProjectType => "projectType",
            Self::Budget => "budget",
            Self::Timeline => "timeline",
            Self::Description => "description",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Company => "Company",
            Self::ProjectType => "Project Type",
            Self::Budget => "Budget Range",
            Self::Timeline => "Timeline",
            Self::Description => "Project Description",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Self::Name | Self::Company => FieldKind::Text,
            Self::Email => FieldKind::Email,
            Self::Phone => FieldKind::Phone,
            Self::ProjectType => FieldKind::Select(PROJECT_TYPE_OPTIONS),
            Self::Budget => FieldKind::Select(BUDGET_OPTIONS),
            Self::Timeline => FieldKind::Select(TIMELINE_OPTIONS),
            Self::Description => FieldKind::Multiline,
        }
    }

    /// Phone and company are the only optional fields
    pub fn is_required(self) -> bool {
        !matches!(self, Self::Phone | Self::Company)
    }

    pub fn is_multiline(self) -> bool {
        matches!(self.kind(), FieldKind::Multiline)
    }

    pub fn is_select(self) -> bool {
        matches!(self.kind(), FieldKind::Select(_))
    }

    /// Options for select fields, empty for free text
    pub fn options(self) -> &'static [SelectOption] {
        match self.kind() {
            FieldKind::Select(options) => options,
            _ => &[],
        }
    }

    /// Text shown for a stored value (select fields show the option label)
    pub fn display_value(self, value: &str) -> String {
        match self.kind() {
            FieldKind::Select(options) => options
                .iter()
                .find(|o| o.value == value)
                .map(|o| o.label.to_string())
                .unwrap_or_else(|| value.to_string()),
            _ => value.to_string(),
        }
    }

    /// Accepts the character for free-text entry
    pub fn accepts_char(self, c: char) -> bool {
        match self.kind() {
            FieldKind::Select(_) => false,
            FieldKind::Email => !c.is_whitespace(),
            FieldKind::Text | FieldKind::Phone | FieldKind::Multiline => !c.is_control(),
        }
    }
}

impl fmt::Display for QuoteField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for QuoteField {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| UnknownFieldError(s.to_string()))
    }
}

/// Step a select value forward or backward through its options, wrapping.
/// Unknown values restart from the placeholder.
pub fn cycle_option(options: &'static [SelectOption], current: &str, forward: bool) -> &'static str {
    if options.is_empty() {
        return "";
    }
    let count = options.len();
    let next = match options.iter().position(|o| o.value == current) {
        Some(idx) if forward => (idx + 1) % count,
        Some(0) => count - 1,
        Some(idx) => idx - 1,
        None => 0,
    };
    options[next].value
}

/// Find the first real option whose label starts with `c` (case-insensitive),
/// searching after the current one so repeated presses walk the matches
pub fn option_by_initial(options: &'static [SelectOption], current: &str, c: char) -> Option<&'static str> {
    let c = c.to_ascii_lowercase();
    let start = options
        .iter()
        .position(|o| o.value == current)
        .map(|idx| idx + 1)
        .unwrap_or(0);
    let count = options.len();
    (0..count)
        .map(|offset| &options[(start + offset) % count])
        .filter(|o| !o.value.is_empty())
        .find(|o| {
            o.label
                .chars()
                .next()
                .is_some_and(|first| first.to_ascii_lowercase() == c)
        })
        .map(|o| o.value)
}
