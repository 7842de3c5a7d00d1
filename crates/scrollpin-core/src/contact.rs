use crate::constants::CONTACT_RESET_SECS;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContactType {
    #[default]
    Creator,
    Brand,
    Business,
}

impl ContactType {
    pub fn id(self) -> &'static str {
        match self {
            ContactType::Creator => "creator",
            ContactType::Brand => "brand",
            ContactType::Business => "business",
        }
    }

    pub fn from_id(id: &str) -> Option<ContactType> {
        match id {
            "creator" => Some(ContactType::Creator),
            "brand" => Some(ContactType::Brand),
            "business" => Some(ContactType::Business),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ContactState {
    Editing,
    Submitted { elapsed_secs: f32 },
}

/// Contact form that pretends to submit: it shows the thank-you state for a
/// few seconds, then clears itself. Nothing leaves the page.
#[derive(Clone, Debug, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
    pub contact_type: ContactType,
    state: ContactState,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            company: String::new(),
            message: String::new(),
            contact_type: ContactType::default(),
            state: ContactState::Editing,
        }
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ContactState {
        self.state
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.state, ContactState::Submitted { .. })
    }

    /// Set a field by its form `name`; unknown names are ignored.
    pub fn set_field(&mut self, field: &str, value: &str) -> bool {
        let slot = match field {
            "name" => &mut self.name,
            "email" => &mut self.email,
            "company" => &mut self.company,
            "message" => &mut self.message,
            _ => return false,
        };
        value.clone_into(slot);
        true
    }

    pub fn submit(&mut self) {
        if !self.is_submitted() {
            log::info!("[contact] submitted as {}", self.contact_type.id());
            self.state = ContactState::Submitted { elapsed_secs: 0.0 };
        }
    }

    /// Returns `true` on the tick that resets the form.
    pub fn tick(&mut self, dt_secs: f32) -> bool {
        let ContactState::Submitted { elapsed_secs } = self.state else {
            return false;
        };
        let elapsed_secs = elapsed_secs + dt_secs.max(0.0);
        if elapsed_secs >= CONTACT_RESET_SECS {
            let contact_type = self.contact_type;
            *self = ContactForm {
                contact_type,
                ..ContactForm::default()
            };
            return true;
        }
        self.state = ContactState::Submitted { elapsed_secs };
        false
    }
}
