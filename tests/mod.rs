use std::fs;
use std::path::{Path, PathBuf};

use staticfile::report::Recorded;
use walkdir::WalkDir;

/// Copy `tests/fixtures/<name>` into a scratch build directory.
fn stage_fixture(name: &str) -> tempfile::TempDir {
    let source = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    let build = tempfile::tempdir().unwrap();

    for entry in WalkDir::new(&source).min_depth(1) {
        let entry = entry.unwrap();
        let relative = entry.path().strip_prefix(&source).unwrap();
        let dest = build.path().join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest).unwrap();
        } else {
            fs::copy(entry.path(), &dest).unwrap();
        }
    }

    build
}

/// Relative paths of every file under `dir`, sorted.
fn files_under(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<_> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().strip_prefix(dir).unwrap().to_owned())
        .collect();
    files.sort();
    files
}

fn run_test(name: &str) -> (tempfile::TempDir, Recorded) {
    let build = stage_fixture(name);
    let mut recorded = Recorded::default();
    match staticfile::finalize(build.path(), &mut recorded) {
        Ok(_) => println!("Finalize successful"),
        Err(e) => panic!("Error: {e} ({:?})", recorded.entries),
    }
    (build, recorded)
}

#[test]
pub fn plain() {
    let (build, recorded) = run_test("plain");
    let build = build.path();

    assert_eq!(
        files_under(&build.join("public")),
        [PathBuf::from("css/site.css"), PathBuf::from("index.html")]
    );
    assert_eq!(
        fs::read_to_string(build.join("public/index.html")).unwrap(),
        "<h1>plain</h1>\n"
    );
    assert!(build.join("nginx/conf/nginx.conf").is_file());
    assert!(build.join("nginx/conf/mime.types").is_file());
    assert!(!build.join("nginx/conf/.htpasswd").exists());
    assert!(build.join("nginx/logs").is_dir());

    // Excluded names stay behind; they are not served.
    assert!(build.join("Staticfile").is_file());
    assert!(build.join("manifest.yml").is_file());
    assert!(!build.join("index.html").exists());

    assert_eq!(recorded.warnings().count(), 0);
    assert_eq!(recorded.errors().count(), 0);
}

#[test]
pub fn rooted_with_auth() {
    let (build, recorded) = run_test("rooted");
    let build = build.path();

    assert_eq!(
        files_under(&build.join("public")),
        [PathBuf::from("index.html"), PathBuf::from("secret.txt")]
    );
    assert_eq!(
        fs::read(build.join("nginx/conf/.htpasswd")).unwrap(),
        fs::read(build.join("Staticfile.auth")).unwrap()
    );
    assert!(!build.join("public/Staticfile").exists());
    assert!(!build.join("public/Staticfile.auth").exists());
    // Outside the application root, so left where it was.
    assert!(build.join("README.md").is_file());

    let conf = fs::read_to_string(build.join("nginx/conf/nginx.conf")).unwrap();
    assert!(conf.contains("auth_basic_user_file"));

    let steps: Vec<_> = recorded.steps().collect();
    assert!(steps.contains(&"Enabling basic authentication using Staticfile.auth"));
    let root_step = steps
        .iter()
        .find(|s| s.starts_with("Root folder "))
        .unwrap();
    assert!(root_step.ends_with("app"));
}

#[test]
pub fn custom_nginx_conf() {
    let fixture = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/custom_nginx/nginx.conf");
    let (build, _) = run_test("custom_nginx");
    let build = build.path();

    assert_eq!(
        fs::read(build.join("nginx/conf/nginx.conf")).unwrap(),
        fs::read(fixture).unwrap()
    );
    assert!(!build.join("public/nginx.conf").exists());
    assert_eq!(
        fs::read_to_string(build.join("nginx/conf/mime.types")).unwrap(),
        staticfile::nginx::MIME_TYPES
    );
}

#[test]
pub fn hsts_preload_without_hsts() {
    let (build, recorded) = run_test("hsts_preload");

    let warnings: Vec<_> = recorded.warnings().collect();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("http_strict_transport_security"));

    let conf = fs::read_to_string(build.path().join("nginx/conf/nginx.conf")).unwrap();
    assert!(!conf.contains("Strict-Transport-Security"));
}

#[test]
pub fn dotfiles() {
    let (build, _) = run_test("dotfiles");
    let build = build.path();

    assert_eq!(
        files_under(&build.join("public")),
        [PathBuf::from(".well-known"), PathBuf::from("index.html")]
    );
    // Still excluded even with dotfiles hosted.
    assert!(build.join(".profile").is_file());

    let conf = fs::read_to_string(build.join("nginx/conf/nginx.conf")).unwrap();
    assert!(!conf.contains("location ~ /\\. {"));
}

#[test]
pub fn replaces_existing_public() {
    let build = stage_fixture("rooted");
    fs::create_dir_all(build.path().join("public")).unwrap();
    fs::write(build.path().join("public/stale.html"), "old").unwrap();
    let mut recorded = Recorded::default();

    staticfile::finalize(build.path(), &mut recorded).unwrap();

    assert_eq!(
        files_under(&build.path().join("public")),
        [PathBuf::from("index.html"), PathBuf::from("secret.txt")]
    );
}

#[test]
pub fn root_is_public() {
    let build = tempfile::tempdir().unwrap();
    fs::write(build.path().join("Staticfile"), "root: public\n").unwrap();
    fs::create_dir_all(build.path().join("public")).unwrap();
    fs::write(build.path().join("public/index.html"), "kept").unwrap();
    let mut recorded = Recorded::default();

    staticfile::finalize(build.path(), &mut recorded).unwrap();

    assert_eq!(
        fs::read_to_string(build.path().join("public/index.html")).unwrap(),
        "kept"
    );
    assert!(build.path().join("nginx/conf/nginx.conf").is_file());
}

#[test]
pub fn root_is_a_file() {
    let build = tempfile::tempdir().unwrap();
    fs::write(build.path().join("Staticfile"), "root: site.zip\n").unwrap();
    fs::write(build.path().join("site.zip"), "").unwrap();
    let mut recorded = Recorded::default();

    let failed = staticfile::finalize(build.path(), &mut recorded).unwrap_err();

    assert_eq!(failed.stage, staticfile::Stage::ResolveRoot);
    assert!(failed.error.to_string().contains("site.zip"));
    let errors: Vec<_> = recorded.errors().collect();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("Invalid root directory: "));
    assert!(!build.path().join("public").exists());
}
