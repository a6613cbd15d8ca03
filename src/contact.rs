use crate::config::CONTACT_FORM_ENDPOINT;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Multiline,
}

impl FieldKind {
    // `None` renders a `<textarea>`.
    pub fn input_type(self) -> Option<&'static str> {
        match self {
            Self::Text => Some("text"),
            Self::Email => Some("email"),
            Self::Multiline => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactField {
    pub name: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactForm {
    pub action: &'static str,
    pub method: &'static str,
    pub fields: &'static [ContactField],
}

pub const CONTACT_FIELDS: &[ContactField] = &[
    ContactField {
        name: "name",
        placeholder: "Name",
        kind: FieldKind::Text,
        required: true,
    },
    ContactField {
        name: "email",
        placeholder: "Email",
        kind: FieldKind::Email,
        required: true,
    },
    ContactField {
        name: "message",
        placeholder: "Message",
        kind: FieldKind::Multiline,
        required: true,
    },
];

pub fn contact_form() -> ContactForm {
    ContactForm {
        action: CONTACT_FORM_ENDPOINT,
        method: "POST",
        fields: CONTACT_FIELDS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posts_name_email_message() {
        let form = contact_form();
        assert_eq!(form.method, "POST");
        assert_eq!(form.action, CONTACT_FORM_ENDPOINT);

        let names: Vec<_> = form.fields.iter().map(|field| field.name).collect();
        assert_eq!(names, ["name", "email", "message"]);
        assert!(form.fields.iter().all(|field| field.required));
    }

    #[test]
    fn only_message_is_multiline() {
        let types: Vec<_> = CONTACT_FIELDS
            .iter()
            .map(|field| field.kind.input_type())
            .collect();
        assert_eq!(types, [Some("text"), Some("email"), None]);
    }
}
