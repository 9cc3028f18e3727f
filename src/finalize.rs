use std::fmt;
use std::path;

use staticfile_config::DirectiveReader;
use staticfile_config::Loaded;
use staticfile_config::SiteConfig;
use staticfile_config::YamlReader;

use crate::error::*;
use crate::report::Reporter;

/// Position of the finalize pipeline.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Stage {
    Load,
    ResolveRoot,
    Warn,
    Promote,
    Synthesize,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Load => "load",
            Stage::ResolveRoot => "resolve-root",
            Stage::Warn => "warn",
            Stage::Promote => "promote",
            Stage::Synthesize => "synthesize",
            Stage::Done => "done",
        };
        f.write_str(name)
    }
}

/// A finalize run that stopped at `stage`.
#[derive(Debug, thiserror::Error)]
#[error("finalize failed during {stage}")]
pub struct Failed {
    pub stage: Stage,
    #[source]
    pub error: Error,
}

enum State {
    Load,
    ResolveRoot(Loaded),
    Warn(Loaded, path::PathBuf),
    Promote(SiteConfig, path::PathBuf),
    Synthesize(SiteConfig),
    Done(SiteConfig),
}

impl State {
    fn stage(&self) -> Stage {
        match self {
            State::Load => Stage::Load,
            State::ResolveRoot(..) => Stage::ResolveRoot,
            State::Warn(..) => Stage::Warn,
            State::Promote(..) => Stage::Promote,
            State::Synthesize(..) => Stage::Synthesize,
            State::Done(..) => Stage::Done,
        }
    }
}

/// Turns a build directory with a `Staticfile` into `public/` plus `nginx/`.
pub struct Finalizer<'r> {
    build_dir: path::PathBuf,
    reader: Box<dyn DirectiveReader>,
    reporter: &'r mut dyn Reporter,
}

impl<'r> Finalizer<'r> {
    pub fn new<P: Into<path::PathBuf>>(build_dir: P, reporter: &'r mut dyn Reporter) -> Self {
        Self {
            build_dir: build_dir.into(),
            reader: Box::new(YamlReader),
            reporter,
        }
    }

    /// Read directive files with `reader` instead of the YAML reader.
    pub fn with_reader<R: DirectiveReader + 'static>(mut self, reader: R) -> Self {
        self.reader = Box::new(reader);
        self
    }

    /// Run every stage in order, stopping at the first failure.
    ///
    /// Returns the configuration the build was finalized with.
    pub fn run(mut self) -> Result<SiteConfig, Failed> {
        let mut state = State::Load;
        loop {
            let stage = state.stage();
            state = match self.step(state) {
                Ok(State::Done(config)) => return Ok(config),
                Ok(next) => next,
                Err(error) => {
                    self.reporter
                        .error(&format!("{}: {}", failure_prefix(stage), chain(&error)));
                    return Err(Failed { stage, error });
                }
            };
        }
    }

    fn step(&mut self, state: State) -> Result<State> {
        let next = match state {
            State::Load => {
                let loaded = staticfile_config::load(&self.build_dir, self.reader.as_ref())
                    .map_err(Error::ConfigRead)?;
                for notice in &loaded.notices {
                    self.reporter.begin_step(&notice.message);
                    if let Some(hint) = &notice.hint {
                        self.reporter.protip(&hint.tip, &hint.url);
                    }
                }
                State::ResolveRoot(loaded)
            }
            State::ResolveRoot(loaded) => {
                let app_root = crate::resolve_root(&self.build_dir, &loaded.config)?;
                self.reporter
                    .begin_step(&format!("Root folder {}", app_root.display()));
                State::Warn(loaded, app_root)
            }
            State::Warn(loaded, app_root) => {
                for warning in loaded.warnings.iter() {
                    self.reporter.warning(&warning.message);
                    if let Some(hint) = &warning.hint {
                        self.reporter.protip(&hint.tip, &hint.url);
                    }
                }
                State::Promote(loaded.config, app_root)
            }
            State::Promote(config, app_root) => {
                self.reporter.begin_step("Copying project files into public");
                crate::promote(&self.build_dir, &app_root, config.host_dot_files)?;
                State::Synthesize(config)
            }
            State::Synthesize(config) => {
                self.reporter.begin_step("Configuring nginx");
                for name in crate::synthesize(&self.build_dir, &config)? {
                    self.reporter
                        .info(&format!("Using {name} from {}", crate::PUBLIC_DIR));
                }
                State::Done(config)
            }
            State::Done(config) => State::Done(config),
        };
        Ok(next)
    }
}

impl fmt::Debug for Finalizer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Finalizer")
            .field("build_dir", &self.build_dir)
            .finish_non_exhaustive()
    }
}

fn failure_prefix(stage: Stage) -> &'static str {
    match stage {
        Stage::Load => "Unable to load Staticfile",
        Stage::ResolveRoot => "Invalid root directory",
        Stage::Promote => "Unable to copy project files",
        Stage::Synthesize => "Unable to configure nginx",
        Stage::Warn | Stage::Done => "Unable to finalize",
    }
}

fn chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// Finalize `build_dir`, reporting through `reporter`.
pub fn finalize(build_dir: &path::Path, reporter: &mut dyn Reporter) -> Result<SiteConfig, Failed> {
    Finalizer::new(build_dir, reporter).run()
}
