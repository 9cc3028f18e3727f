use std::fmt;

/// Effective site settings for one build.
///
/// Built once by [`load`](crate::load) and then only read. Every field
/// defaults to off/unset, which is also what an absent `Staticfile` yields.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
pub struct SiteConfig {
    /// Application root relative to the build directory, as written by the user.
    pub root_dir: Option<String>,
    pub host_dot_files: bool,
    /// Extra nginx fragment included inside `location /`, as written by the user.
    pub location_include: Option<String>,
    pub directory_index: bool,
    pub ssi: bool,
    pub pushstate: bool,
    pub hsts: bool,
    pub hsts_include_subdomains: bool,
    pub hsts_preload: bool,
    pub force_https: bool,
    /// Set when `Staticfile.auth` exists; there is no directive for it.
    pub basic_auth: bool,
}

impl SiteConfig {
    /// The configured root, treating an empty value as unset.
    pub fn root_dir(&self) -> Option<&str> {
        self.root_dir.as_deref().filter(|r| !r.is_empty())
    }

    /// The configured include fragment, treating an empty value as unset.
    pub fn location_include(&self) -> Option<&str> {
        self.location_include.as_deref().filter(|l| !l.is_empty())
    }

    /// Sub-flags of HSTS are set while HSTS itself is not.
    pub fn has_dangling_hsts_flags(&self) -> bool {
        !self.hsts && (self.hsts_include_subdomains || self.hsts_preload)
    }
}

impl fmt::Display for SiteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let converted = serde_yaml::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{converted}")
    }
}
