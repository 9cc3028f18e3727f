use std::io;
use std::path;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Fatal finalize failures. None of them are retried.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    ConfigRead(staticfile_config::Status),

    #[error("the application Staticfile specifies a root directory {root} that does not exist")]
    RootNotFound {
        root: String,
        #[source]
        source: io::Error,
    },

    #[error(
        "the application Staticfile specifies a root directory {root} that is a plain file, \
         but was expected to be a directory"
    )]
    RootNotDirectory { root: String },

    #[error("failed to promote {} into public", path.display())]
    Promotion {
        path: path::PathBuf,
        #[source]
        source: BoxError,
    },

    #[error("unable to render nginx.conf")]
    Template(#[source] liquid::Error),

    #[error("unable to write {}", path.display())]
    ConfigWrite {
        path: path::PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to install Staticfile.auth as {}", path.display())]
    AuthWire {
        path: path::PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    pub(crate) fn promotion<E: Into<BoxError>>(path: &path::Path, source: E) -> Self {
        Error::Promotion {
            path: path.to_owned(),
            source: source.into(),
        }
    }

    pub(crate) fn config_write(path: &path::Path, source: io::Error) -> Self {
        Error::ConfigWrite {
            path: path.to_owned(),
            source,
        }
    }
}
