/// Scroll offset (px) past which the navigation bar switches to its solid style.
pub const SCROLLED_OFFSET: f64 = 50.0;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_OFFSET
}

/// Anchored sections of the page, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Projects,
    Resume,
    Certifications,
    Skills,
    About,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Self::Projects,
        Self::Resume,
        Self::Certifications,
        Self::Skills,
        Self::About,
        Self::Contact,
    ];

    /// Sections linked from the navigation bar.
    pub const NAV: [Section; 5] = [
        Self::Projects,
        Self::Resume,
        Self::Skills,
        Self::About,
        Self::Contact,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Projects => "projects",
            Self::Resume => "resume",
            Self::Certifications => "certifications",
            Self::Skills => "skills",
            Self::About => "about",
            Self::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Projects => "Projects",
            Self::Resume => "Resume",
            Self::Certifications => "Certifications",
            Self::Skills => "Skills",
            Self::About => "About",
            Self::Contact => "Contact",
        }
    }
}
