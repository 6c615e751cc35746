#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match *self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn value(&self) -> &str {
        match *self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}
