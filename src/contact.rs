use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Email,
    Phone,
    Linkedin,
    Github,
}

impl ContactKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Linkedin => "LinkedIn",
            Self::Github => "GitHub",
        }
    }

    pub fn icon_class(&self) -> &'static str {
        match self {
            Self::Email => "extra-email",
            Self::Phone => "extra-phone",
            Self::Linkedin => "devicon-linkedin-plain",
            Self::Github => "devicon-github-plain",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactLink {
    pub kind: ContactKind,
    pub value: String,
    pub href: String,
}

impl ContactLink {
    /// Web links open in a new tab; `mailto:`/`tel:` stay in place.
    pub fn is_external(&self) -> bool {
        is_external(&self.href)
    }
}

pub fn is_external(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://")
}

/// What a visitor typed into the contact form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// The form never sends anything anywhere; this produces the local
    /// confirmation shown after submit. There is no failure path.
    pub fn confirmation(&self) -> String {
        let name = self.name.trim();
        if name.is_empty() {
            "Thanks for reaching out! I'll get back to you soon.".to_string()
        } else {
            format!("Thanks for reaching out, {name}! I'll get back to you soon.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_external_links() {
        assert!(is_external("https://github.com/someone"));
        assert!(is_external("http://example.com"));
        assert!(!is_external("mailto:me@example.com"));
        assert!(!is_external("tel:555-0100"));
        assert!(!is_external("/resume.pdf"));
    }

    #[test]
    fn test_confirmation_always_succeeds() {
        let msg = ContactMessage {
            name: "  Ada ".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello".to_string(),
        };
        assert_eq!(
            msg.confirmation(),
            "Thanks for reaching out, Ada! I'll get back to you soon."
        );
        assert_eq!(
            ContactMessage::default().confirmation(),
            "Thanks for reaching out! I'll get back to you soon."
        );
    }

    #[test]
    fn test_kind_deserialize() {
        let link: ContactLink =
            serde_json::from_str(r#"{"kind":"linkedin","value":"me","href":"https://linkedin.com/in/me"}"#)
                .unwrap();
        assert_eq!(link.kind, ContactKind::Linkedin);
        assert_eq!(link.kind.label(), "LinkedIn");
        assert!(link.is_external());
    }
}
