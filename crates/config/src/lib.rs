//! Loading of the `Staticfile` directive file into a typed [`SiteConfig`].
//!
//! The directive file is a flat key/value document. Every recognized key is
//! decoded through the [`DIRECTIVES`] table; anything else is ignored so that
//! newer directive files keep working with older finalizers.

mod config;
mod directive;
mod loader;
mod reader;
mod warnings;

pub use self::config::*;
pub use self::directive::*;
pub use self::loader::*;
pub use self::reader::*;
pub use self::warnings::*;

pub type Status = status::Status;
pub type Result<T, E = Status> = std::result::Result<T, E>;

/// Name of the directive file at the root of the build directory.
pub const STATICFILE: &str = "Staticfile";

/// Name of the basic-auth credentials sibling of [`STATICFILE`].
pub const STATICFILE_AUTH: &str = "Staticfile.auth";
