use std::path;

use crate::DirectiveReader;
use crate::Hint;
use crate::Result;
use crate::SiteConfig;
use crate::Warnings;
use crate::find_directive;

const HSTS_DOCS: &str = "https://docs.cloudfoundry.org/buildpacks/staticfile/index.html#strict-security";
const AUTH_DOCS: &str = "https://docs.cloudfoundry.org/buildpacks/staticfile/index.html#authentication";

/// A build step announced while loading, e.g. `Enabling SSI`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub hint: Option<Hint>,
}

impl Notice {
    fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
            hint: None,
        }
    }
}

/// Result of [`load`]: the configuration and what to tell the user about it.
#[derive(Debug, Clone, Default)]
pub struct Loaded {
    pub config: SiteConfig,
    pub notices: Vec<Notice>,
    pub warnings: Warnings,
}

/// Load `build_dir/Staticfile` into a [`SiteConfig`].
///
/// A missing `Staticfile` is not an error; it yields the defaults. Nothing is
/// logged here: notices and warnings are handed back for the caller to report.
pub fn load(build_dir: &path::Path, reader: &dyn DirectiveReader) -> Result<Loaded> {
    let staticfile = build_dir.join(crate::STATICFILE);
    let entries = match reader.read(&staticfile)? {
        Some(entries) => entries,
        None => {
            log::debug!("No {} found, using defaults", staticfile.display());
            Default::default()
        }
    };

    let mut loaded = Loaded::default();
    for (key, value) in &entries {
        let Some(directive) = find_directive(key) else {
            log::debug!("Ignoring unrecognized directive `{key}`");
            continue;
        };
        if let Some(step) = directive.apply(&mut loaded.config, value) {
            loaded.notices.push(Notice::new(step));
        }
    }

    check_consistency(build_dir, &loaded.config, &mut loaded.warnings);

    let auth_file = build_dir.join(crate::STATICFILE_AUTH);
    if auth_file.exists() {
        loaded.config.basic_auth = true;
        loaded.notices.push(Notice {
            message: "Enabling basic authentication using Staticfile.auth".to_owned(),
            hint: Some(Hint::new("Learn about basic authentication", AUTH_DOCS)),
        });
    }

    Ok(loaded)
}

fn check_consistency(build_dir: &path::Path, config: &SiteConfig, warnings: &mut Warnings) {
    if config.has_dangling_hsts_flags() {
        warnings.push_with_hint(
            "http_strict_transport_security is not enabled while \
             http_strict_transport_security_include_subdomains or \
             http_strict_transport_security_preload have been enabled.",
            Hint::new(
                "http_strict_transport_security_include_subdomains and \
                 http_strict_transport_security_preload do nothing without \
                 http_strict_transport_security enabled.",
                HSTS_DOCS,
            ),
        );
    }

    if config.root_dir().is_none() {
        if config.location_include().is_some() {
            warnings.push(
                "The location_include directive only works in conjunction with root.\n\
                 Please specify root to use location_include",
            );
        }

        if build_dir.join("nginx").join("conf").exists() {
            warnings.push(
                "You have an nginx/conf directory, but have not set *root*.\n\
                 If you are using the nginx/conf directory for nginx configuration, \
                 you probably need to also set the *root* directive.",
            );
        }
    }
}
