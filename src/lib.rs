//! Finalize step for static site builds.
//!
//! Given a build directory holding an application and an optional
//! `Staticfile`, [`finalize`] runs, in order:
//!
//! 1. load the `Staticfile` directives into a [`SiteConfig`],
//! 2. resolve the application root ([`resolve_root`]),
//! 3. report advisory warnings,
//! 4. promote the application tree into `public/` ([`promote`]),
//! 5. write `nginx/conf` and `nginx/logs` ([`synthesize`]).
//!
//! Output goes through a [`Reporter`]; [`LogReporter`] sends it to `log`.

mod error;
mod finalize;
mod promote;
mod root;
mod template;

pub mod nginx;
pub mod report;

pub use error::{Error, Result};
pub use finalize::{Failed, Finalizer, Stage, finalize};
pub use nginx::synthesize;
pub use promote::{PUBLIC_DIR, promote};
pub use report::{LogReporter, Reporter};
pub use root::resolve_root;

pub use staticfile_config::SiteConfig;
