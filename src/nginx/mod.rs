//! Generation of the nginx configuration directory.

use std::path;

use staticfile_config::SiteConfig;

use crate::error::*;
use crate::promote::PUBLIC_DIR;
use crate::template::Liquid;

/// Template for `nginx.conf`. The `<%= ... %>` placeholders are left for the
/// platform's startup step to fill in.
pub const NGINX_CONF_TEMPLATE: &str = include_str!("nginx.conf.liquid");

pub const MIME_TYPES: &str = include_str!("mime.types");

pub const NGINX_CONF: &str = "nginx.conf";
pub const MIME_TYPES_FILE: &str = "mime.types";
/// Name nginx's `auth_basic_user_file` points at.
pub const HTPASSWD: &str = ".htpasswd";

pub fn conf_dir(build_dir: &path::Path) -> path::PathBuf {
    build_dir.join("nginx").join("conf")
}

pub fn logs_dir(build_dir: &path::Path) -> path::PathBuf {
    build_dir.join("nginx").join("logs")
}

/// Render `nginx.conf` for `config`.
pub fn render_nginx_conf(config: &SiteConfig) -> Result<String> {
    Liquid::new()?.render(NGINX_CONF_TEMPLATE, config)
}

/// Populate `nginx/conf` and `nginx/logs` under `build_dir`.
///
/// Must run after promotion: a `nginx.conf` or `mime.types` sitting in
/// `public/` is taken as a user override and moved into `nginx/conf` instead
/// of writing the generated file. Returns the names of the overrides used.
pub fn synthesize(build_dir: &path::Path, config: &SiteConfig) -> Result<Vec<&'static str>> {
    let nginx_conf = render_nginx_conf(config)?;

    let conf_dir = conf_dir(build_dir);
    std::fs::create_dir_all(&conf_dir).map_err(|e| Error::config_write(&conf_dir, e))?;
    let logs_dir = logs_dir(build_dir);
    std::fs::create_dir_all(&logs_dir).map_err(|e| Error::config_write(&logs_dir, e))?;

    let public_dir = build_dir.join(PUBLIC_DIR);
    let mut overrides = Vec::new();
    for (name, contents) in [(NGINX_CONF, nginx_conf.as_str()), (MIME_TYPES_FILE, MIME_TYPES)] {
        let dest = conf_dir.join(name);
        let custom = public_dir.join(name);
        if custom.is_file() {
            log::debug!("Using custom {name} from {}", public_dir.display());
            staticfile_core::move_path(&custom, &dest).map_err(|e| Error::config_write(&dest, e))?;
            overrides.push(name);
        } else {
            staticfile_core::write_file(contents.as_bytes(), &dest)
                .map_err(|e| Error::config_write(&dest, e))?;
        }
    }

    if config.basic_auth {
        let auth_file = build_dir.join(staticfile_config::STATICFILE_AUTH);
        let dest = conf_dir.join(HTPASSWD);
        staticfile_core::copy_file(&auth_file, &dest)
            .map_err(|source| Error::AuthWire { path: dest, source })?;
    }

    Ok(overrides)
}
