use crate::SiteConfig;

/// How a raw directive value is interpreted.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Decode {
    /// Stored as written.
    Verbatim,
    /// On only for the literal values `enabled` or `true`.
    Enabled,
    /// On for any non-empty value.
    NonEmpty,
}

/// The [`SiteConfig`] field a directive writes to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Field {
    RootDir,
    HostDotFiles,
    LocationInclude,
    DirectoryIndex,
    Ssi,
    PushState,
    Hsts,
    HstsIncludeSubdomains,
    HstsPreload,
    ForceHttps,
}

/// One recognized `Staticfile` key.
#[derive(Copy, Clone, Debug)]
pub struct Directive {
    pub key: &'static str,
    pub field: Field,
    pub decode: Decode,
    /// Build step announced when the directive turns something on.
    pub notice: &'static str,
}

pub static DIRECTIVES: &[Directive] = &[
    Directive {
        key: "root",
        field: Field::RootDir,
        decode: Decode::Verbatim,
        notice: "",
    },
    Directive {
        key: "host_dot_files",
        field: Field::HostDotFiles,
        decode: Decode::Enabled,
        notice: "Enabling hosting of dotfiles",
    },
    Directive {
        key: "location_include",
        field: Field::LocationInclude,
        decode: Decode::Verbatim,
        notice: "Enabling location include file",
    },
    Directive {
        key: "directory",
        field: Field::DirectoryIndex,
        decode: Decode::NonEmpty,
        notice: "Enabling directory index for folders without index.html files",
    },
    Directive {
        key: "ssi",
        field: Field::Ssi,
        decode: Decode::Enabled,
        notice: "Enabling SSI",
    },
    Directive {
        key: "pushstate",
        field: Field::PushState,
        decode: Decode::Enabled,
        notice: "Enabling pushstate",
    },
    Directive {
        key: "http_strict_transport_security",
        field: Field::Hsts,
        decode: Decode::Enabled,
        notice: "Enabling HSTS",
    },
    Directive {
        key: "http_strict_transport_security_include_subdomains",
        field: Field::HstsIncludeSubdomains,
        decode: Decode::Enabled,
        notice: "Enabling HSTS includeSubDomains",
    },
    Directive {
        key: "http_strict_transport_security_preload",
        field: Field::HstsPreload,
        decode: Decode::Enabled,
        notice: "Enabling HSTS Preload",
    },
    Directive {
        key: "force_https",
        field: Field::ForceHttps,
        decode: Decode::Enabled,
        notice: "Enabling HTTPS redirect",
    },
];

/// Look up the directive for a `Staticfile` key.
pub fn find_directive(key: &str) -> Option<&'static Directive> {
    DIRECTIVES.iter().find(|d| d.key == key)
}

impl Directive {
    /// Apply `value` to `config`.
    ///
    /// Returns the build step to announce, if the value turned something on.
    pub fn apply(&self, config: &mut SiteConfig, value: &str) -> Option<String> {
        match self.decode {
            Decode::Verbatim => {
                let slot = match self.field {
                    Field::RootDir => &mut config.root_dir,
                    Field::LocationInclude => &mut config.location_include,
                    _ => return None,
                };
                *slot = Some(value.to_owned());
                if self.notice.is_empty() || value.is_empty() {
                    None
                } else {
                    Some(format!("{} {}", self.notice, value))
                }
            }
            Decode::Enabled | Decode::NonEmpty => {
                if !self.decode.is_on(value) {
                    return None;
                }
                *config.flag_mut(self.field)? = true;
                Some(self.notice.to_owned())
            }
        }
    }
}

impl Decode {
    fn is_on(self, value: &str) -> bool {
        match self {
            Decode::Verbatim => false,
            Decode::Enabled => value == "enabled" || value == "true",
            Decode::NonEmpty => !value.is_empty(),
        }
    }
}

impl SiteConfig {
    fn flag_mut(&mut self, field: Field) -> Option<&mut bool> {
        let flag = match field {
            Field::HostDotFiles => &mut self.host_dot_files,
            Field::DirectoryIndex => &mut self.directory_index,
            Field::Ssi => &mut self.ssi,
            Field::PushState => &mut self.pushstate,
            Field::Hsts => &mut self.hsts,
            Field::HstsIncludeSubdomains => &mut self.hsts_include_subdomains,
            Field::HstsPreload => &mut self.hsts_preload,
            Field::ForceHttps => &mut self.force_https,
            Field::RootDir | Field::LocationInclude => return None,
        };
        Some(flag)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn apply(key: &str, value: &str) -> (SiteConfig, Option<String>) {
        let mut config = SiteConfig::default();
        let notice = find_directive(key).unwrap().apply(&mut config, value);
        (config, notice)
    }

    #[test]
    fn every_key_is_unique() {
        for (i, d) in DIRECTIVES.iter().enumerate() {
            assert!(DIRECTIVES[i + 1..].iter().all(|o| o.key != d.key), "{}", d.key);
        }
    }

    #[test]
    fn unknown_key_is_not_a_directive() {
        assert!(find_directive("gzip").is_none());
        assert!(find_directive("Root").is_none());
    }

    #[test]
    fn enabled_literals() {
        assert!(apply("ssi", "enabled").0.ssi);
        assert!(apply("ssi", "true").0.ssi);
        assert!(!apply("ssi", "on").0.ssi);
        assert!(!apply("ssi", "TRUE").0.ssi);
        assert!(!apply("ssi", "").0.ssi);
    }

    #[test]
    fn directory_takes_any_non_empty_value() {
        assert!(apply("directory", "visible").0.directory_index);
        assert!(apply("directory", "false").0.directory_index);
        assert!(!apply("directory", "").0.directory_index);
    }

    #[test]
    fn root_is_verbatim() {
        let (config, notice) = apply("root", "  build/dist ");
        assert_eq!(config.root_dir.as_deref(), Some("  build/dist "));
        assert_eq!(notice, None);
    }

    #[test]
    fn location_include_announces_path() {
        let (config, notice) = apply("location_include", "includes/*.conf");
        assert_eq!(config.location_include.as_deref(), Some("includes/*.conf"));
        assert_eq!(
            notice.as_deref(),
            Some("Enabling location include file includes/*.conf")
        );

        let (config, notice) = apply("location_include", "");
        assert_eq!(config.location_include.as_deref(), Some(""));
        assert_eq!(notice, None);
    }

    #[test]
    fn yaml_spellings_stay_literal() {
        let entries =
            crate::parse_directives("ssi: TRUE\nroot: 1.10\ndirectory: false\n").unwrap();
        let mut config = SiteConfig::default();
        for (key, value) in &entries {
            find_directive(key).unwrap().apply(&mut config, value);
        }
        assert!(!config.ssi);
        assert_eq!(config.root_dir.as_deref(), Some("1.10"));
        assert!(config.directory_index);
    }

    #[test]
    fn disabled_flag_is_silent() {
        let (config, notice) = apply("force_https", "disabled");
        assert!(!config.force_https);
        assert_eq!(notice, None);
    }

    #[test]
    fn each_flag_lands_on_its_field() {
        assert!(apply("host_dot_files", "true").0.host_dot_files);
        assert!(apply("pushstate", "enabled").0.pushstate);
        assert!(apply("http_strict_transport_security", "true").0.hsts);
        assert!(
            apply("http_strict_transport_security_include_subdomains", "true")
                .0
                .hsts_include_subdomains
        );
        assert!(
            apply("http_strict_transport_security_preload", "true")
                .0
                .hsts_preload
        );
        assert!(apply("force_https", "enabled").0.force_https);
    }
}
