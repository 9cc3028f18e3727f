/// Advisory message about a likely misconfiguration.
///
/// Warnings never change the loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub message: String,
    pub hint: Option<Hint>,
}

/// Pointer to documentation accompanying a [`Warning`] or notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    pub tip: String,
    pub url: String,
}

impl Hint {
    pub fn new<T: Into<String>, U: Into<String>>(tip: T, url: U) -> Self {
        Self {
            tip: tip.into(),
            url: url.into(),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Warnings {
    pub items: Vec<Warning>,
}

impl Warnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(Warning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>>(&mut self, message: S, hint: Hint) {
        self.items.push(Warning {
            message: message.into(),
            hint: Some(hint),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Warning> {
        self.items.iter()
    }
}
