use crate::Result;
use crate::Status;

/// Build-system control files; they are never served.
pub const EXCLUDED_NAMES: &[&str] = &[
    "Staticfile",
    "Staticfile.auth",
    "manifest.yml",
    ".profile",
    ".profile.d",
    "stackato.yml",
    ".cloudfoundry",
];

/// The top level of an application root, filtered down to what gets served.
#[derive(Debug, Clone)]
pub struct Source {
    root: std::path::PathBuf,
    ignore: ignore::gitignore::Gitignore,
}

impl Source {
    pub fn new(root: &std::path::Path, host_dot_files: bool) -> Result<Self> {
        let mut ignore = ignore::gitignore::GitignoreBuilder::new(root);
        let hidden = (!host_dot_files).then_some(".*");
        for line in EXCLUDED_NAMES.iter().copied().chain(hidden) {
            ignore
                .add_line(None, line)
                .map_err(|e| Status::new("Invalid ignore entry").with_source(e))?;
        }
        let ignore = ignore
            .build()
            .map_err(|e| Status::new("Invalid ignore entry").with_source(e))?;

        let source = Self {
            root: root.to_owned(),
            ignore,
        };
        Ok(source)
    }

    pub fn includes_file(&self, file: &std::path::Path) -> bool {
        let is_dir = false;
        self.includes_path(file, is_dir)
    }

    pub fn includes_dir(&self, dir: &std::path::Path) -> bool {
        let is_dir = true;
        self.includes_path(dir, is_dir)
    }

    /// Immediate children of the root that should be served, sorted by name.
    ///
    /// Directories are listed but not descended into; they move as a whole.
    pub fn children(&self) -> std::io::Result<Vec<std::path::PathBuf>> {
        let mut children = Vec::new();
        let walker = walkdir::WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .sort_by_file_name();
        for entry in walker {
            let entry = entry?;
            let included = if entry.file_type().is_dir() {
                self.includes_dir(entry.path())
            } else {
                self.includes_file(entry.path())
            };
            if included {
                children.push(entry.into_path());
            }
        }
        Ok(children)
    }

    fn includes_path(&self, path: &std::path::Path, is_dir: bool) -> bool {
        match self.ignore.matched(path, is_dir) {
            ignore::Match::None => true,
            ignore::Match::Ignore(glob) => {
                log::trace!("{path:?}: skipped {:?}", glob.original());
                false
            }
            ignore::Match::Whitelist(glob) => {
                log::trace!("{path:?}: allowed {:?}", glob.original());
                true
            }
        }
    }
}
