/// Top-level pages of the site. Routing itself lives in the host; this is
/// just the identifier it hands us.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Home,
    About,
    AiTools,
    Creators,
    Brands,
    Contact,
    Login,
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Home,
        Page::About,
        Page::AiTools,
        Page::Creators,
        Page::Brands,
        Page::Contact,
        Page::Login,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::AiTools => "ai-tools",
            Page::Creators => "creators",
            Page::Brands => "brands",
            Page::Contact => "contact",
            Page::Login => "login",
        }
    }

    /// Unknown ids land on the home page.
    pub fn from_id(id: &str) -> Page {
        Page::ALL
            .into_iter()
            .find(|p| p.id() == id)
            .unwrap_or_default()
    }

    /// Navigation bar and footer are hidden on the login screen.
    pub fn shows_chrome(self) -> bool {
        self != Page::Login
    }
}
