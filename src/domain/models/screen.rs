#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Login,
    Register,
    /// Requires a session token.
    Home,
}

impl Screen {
    pub fn is_protected(&self) -> bool {
        return *self == Screen::Home;
    }
}

/// Which home screen pane receives keyboard input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Search,
    Results,
    Selection,
    Chat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthField {
    Username,
    Password,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StatusType {
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Status {
    pub stype: StatusType,
    pub text: String,
}

impl Status {
    pub fn info(text: &str) -> Status {
        return Status {
            stype: StatusType::Info,
            text: text.to_string(),
        };
    }

    pub fn error(text: &str) -> Status {
        return Status {
            stype: StatusType::Error,
            text: text.to_string(),
        };
    }
}
