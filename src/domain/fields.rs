//! Static widget catalogs for the forms the app renders.

pub const CONTACT_NAME: &str = "contactName";
pub const CONTACT_BIRTHDATE: &str = "contactBirthdate";
pub const CONTACT_TYPE: &str = "contactType";

pub const TICKET_TITLE: &str = "title";
pub const TICKET_DESCRIPTION: &str = "issueDescription";
pub const TICKET_PRIORITY: &str = "priority";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub text: &'static str,
    pub value: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    SingleLineText,
    MultiLineText,
    DateOnly,
    RadioButtons(&'static [Choice]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: WidgetKind,
    pub required: bool,
}

const CONTACT_TYPES: &[Choice] = &[
    Choice {
        text: "Work",
        value: "Work",
        selected: false,
    },
    Choice {
        text: "Personal",
        value: "Personal",
        selected: false,
    },
];

const TICKET_PRIORITIES: &[Choice] = &[
    Choice {
        text: "Minor",
        value: "Minor",
        selected: true,
    },
    Choice {
        text: "Major",
        value: "Major",
        selected: false,
    },
    Choice {
        text: "Critical",
        value: "Critical",
        selected: false,
    },
];

pub const CONTACT_FORM: &[FieldSpec] = &[
    FieldSpec {
        name: CONTACT_NAME,
        label: "First and last name",
        kind: WidgetKind::SingleLineText,
        required: true,
    },
    FieldSpec {
        name: CONTACT_BIRTHDATE,
        label: "Birthdate",
        kind: WidgetKind::DateOnly,
        required: false,
    },
    FieldSpec {
        name: CONTACT_TYPE,
        label: "Contact type",
        kind: WidgetKind::RadioButtons(CONTACT_TYPES),
        required: false,
    },
];

pub const TICKET_FORM: &[FieldSpec] = &[
    FieldSpec {
        name: TICKET_TITLE,
        label: "Title",
        kind: WidgetKind::SingleLineText,
        required: true,
    },
    FieldSpec {
        name: TICKET_DESCRIPTION,
        label: "Issue Description",
        kind: WidgetKind::MultiLineText,
        required: true,
    },
    FieldSpec {
        name: TICKET_PRIORITY,
        label: "Priority",
        kind: WidgetKind::RadioButtons(TICKET_PRIORITIES),
        required: true,
    },
];
