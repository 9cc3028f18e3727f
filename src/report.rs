//! User-facing build output.
//!
//! The finalizer never prints directly; everything the user sees goes through
//! a [`Reporter`] so that the hosting build step decides how it is rendered.

/// Sink for build-step output.
pub trait Reporter {
    /// A new step of the build is starting.
    fn begin_step(&mut self, message: &str);

    /// Detail within the current step.
    fn info(&mut self, message: &str);

    /// Something is probably misconfigured but the build continues.
    fn warning(&mut self, message: &str);

    /// A pointer to documentation.
    fn protip(&mut self, tip: &str, url: &str);

    /// The build is about to fail.
    fn error(&mut self, message: &str);
}

/// Forwards build output to the `log` facade in buildpack style.
#[derive(Copy, Clone, Debug, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn begin_step(&mut self, message: &str) {
        log::info!("-----> {message}");
    }

    fn info(&mut self, message: &str) {
        log::info!("       {message}");
    }

    fn warning(&mut self, message: &str) {
        log::warn!("**WARNING** {message}");
    }

    fn protip(&mut self, tip: &str, url: &str) {
        log::info!("PRO TIP: {tip}");
        log::info!("Visit {url}");
    }

    fn error(&mut self, message: &str) {
        log::error!("**ERROR** {message}");
    }
}

/// Everything reported, in order. Handy for checking what a build said.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Recorded {
    pub entries: Vec<Entry>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entry {
    Step(String),
    Info(String),
    Warning(String),
    Protip { tip: String, url: String },
    Error(String),
}

impl Recorded {
    pub fn steps(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(|e| match e {
            Entry::Step(m) => Some(m.as_str()),
            _ => None,
        })
    }

    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(|e| match e {
            Entry::Warning(m) => Some(m.as_str()),
            _ => None,
        })
    }

    pub fn errors(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(|e| match e {
            Entry::Error(m) => Some(m.as_str()),
            _ => None,
        })
    }
}

impl Reporter for Recorded {
    fn begin_step(&mut self, message: &str) {
        self.entries.push(Entry::Step(message.to_owned()));
    }

    fn info(&mut self, message: &str) {
        self.entries.push(Entry::Info(message.to_owned()));
    }

    fn warning(&mut self, message: &str) {
        self.entries.push(Entry::Warning(message.to_owned()));
    }

    fn protip(&mut self, tip: &str, url: &str) {
        self.entries.push(Entry::Protip {
            tip: tip.to_owned(),
            url: url.to_owned(),
        });
    }

    fn error(&mut self, message: &str) {
        self.entries.push(Entry::Error(message.to_owned()));
    }
}
