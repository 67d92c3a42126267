//! Reporter contract tests
//!
//! Builds a throwaway application tree on disk, describes it with a kernel
//! manifest and checks the report fields consumers rely on.

use appinspect_common::{ApplicationReporter, FixedClock, KernelHandle, ManifestKernel};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct Fixture {
    _dir: TempDir,
    project: PathBuf,
    manifest: PathBuf,
}

fn fixture(bundles: &str) -> Fixture {
    let dir = TempDir::new().unwrap();
    let project = dir.path().join("shop");
    fs::create_dir_all(project.join("app")).unwrap();
    fs::create_dir_all(project.join("var/cache/prod/twig")).unwrap();
    fs::create_dir_all(project.join("var/logs")).unwrap();
    fs::write(project.join("var/cache/prod/container.php"), vec![b'x'; 1024]).unwrap();
    fs::write(project.join("var/cache/prod/twig/page.php"), vec![b'x'; 512]).unwrap();

    let manifest = project.join("app.toml");
    fs::write(
        &manifest,
        format!(
            r#"
class = "ShopKernel"
version = "3.4.2"
end_of_maintenance = "01/2000"
end_of_life = "01/2999"
environment = "prod"
debug = false
root_dir = "app"
cache_dir = "var/cache/prod"
log_dir = "var/logs"
{bundles}
"#
        ),
    )
    .unwrap();

    Fixture {
        _dir: dir,
        project,
        manifest,
    }
}

fn clock() -> FixedClock {
    FixedClock::at("2026-10-19T08:00:00+00:00").unwrap()
}

#[test]
fn report_relativizes_kernel_directories() {
    let fx = fixture("");
    let kernel = ManifestKernel::load(&fx.manifest).unwrap();
    let reporter = ApplicationReporter::new(&kernel, clock()).unwrap();

    let canonical = fx.project.canonicalize().unwrap();
    assert_eq!(reporter.base_dir(), Some(canonical.to_str().unwrap()));

    let report = reporter.report();
    assert_eq!(report.class, "ShopKernel");
    assert_eq!(report.name, "app");
    assert_eq!(report.root_dir, "./app");
    assert_eq!(report.cache_dir, "./var/cache/prod");
    assert_eq!(report.log_dir, "./var/logs");
    assert_eq!(report.cache_dir_size, "1.50kB");
    assert_eq!(report.log_dir_size, "0.00B");
}

#[cfg(unix)]
#[test]
fn report_through_symlinked_project_is_relative() {
    let fx = fixture(
        r#"
[[bundles]]
name = "FrameworkBundle"
path = "vendor/framework"
"#,
    );
    let link = fx.project.with_file_name("current");
    std::os::unix::fs::symlink(&fx.project, &link).unwrap();

    let kernel = ManifestKernel::load(&link.join("app.toml")).unwrap();
    let report = ApplicationReporter::new(&kernel, clock()).unwrap().report();

    assert_eq!(report.root_dir, "./app");
    assert_eq!(report.cache_dir, "./var/cache/prod");
    assert_eq!(report.log_dir, "./var/logs");
    assert_eq!(report.cache_dir_size, "1.50kB");
    assert_eq!(report.bundles[0].path, "./vendor/framework");
}

#[test]
fn report_lifecycle_flags() {
    let fx = fixture("");
    let kernel = ManifestKernel::load(&fx.manifest).unwrap();
    let report = ApplicationReporter::new(&kernel, clock()).unwrap().report();

    assert_eq!(report.eom, "01/2000");
    assert!(report.eom_expired);
    assert_eq!(report.eol, "01/2999");
    assert!(!report.eol_expired);
}

#[test]
fn report_is_idempotent() {
    let fx = fixture(
        r#"
[[bundles]]
name = "FrameworkBundle"
path = "vendor/framework"
"#,
    );
    let kernel = ManifestKernel::load(&fx.manifest).unwrap();
    let reporter = ApplicationReporter::new(&kernel, clock()).unwrap();

    assert_eq!(reporter.report(), reporter.report());
}

#[test]
fn bundles_sorted_and_relativized() {
    let fx = fixture(
        r#"
[[bundles]]
name = "Zeta"
path = "/z"

[[bundles]]
name = "Alpha"
path = "vendor/alpha"
"#,
    );
    let kernel = ManifestKernel::load(&fx.manifest).unwrap();
    let bundles = ApplicationReporter::new(&kernel, clock()).unwrap().bundles();

    assert_eq!(bundles.len(), 2);
    assert_eq!(bundles[0].name, "Alpha");
    assert_eq!(bundles[0].path, "./vendor/alpha");
    assert_eq!(bundles[1].name, "Zeta");
    assert_eq!(bundles[1].path, "/z");
}

#[test]
fn empty_bundles_serialize_as_empty_list() {
    let fx = fixture("");
    let kernel = ManifestKernel::load(&fx.manifest).unwrap();
    assert!(kernel.bundles().is_empty());

    let report = ApplicationReporter::new(&kernel, clock()).unwrap().report();
    assert!(report.bundles.is_empty());

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["bundles"], serde_json::json!([]));
}

#[test]
fn works_through_trait_object() {
    let fx = fixture("");
    let kernel = ManifestKernel::load(&fx.manifest).unwrap();
    let handle: &dyn KernelHandle = &kernel;

    let report = ApplicationReporter::new(handle, clock()).unwrap().report();
    assert_eq!(report.env, "prod");
    assert!(!report.debug);
    assert_eq!(report.charset, "UTF-8");
}

#[test]
fn root_outside_any_resolvable_base_stays_absolute() {
    let dir = TempDir::new().unwrap();
    let manifest = dir.path().join("app.toml");
    fs::write(
        &manifest,
        r#"
version = "1.0"
end_of_maintenance = "01/2999"
end_of_life = "01/2999"
root_dir = "/nonexistent/appinspect/app"
"#,
    )
    .unwrap();

    let kernel = ManifestKernel::load(&manifest).unwrap();
    let report = ApplicationReporter::new(&kernel, clock()).unwrap().report();
    assert_eq!(report.root_dir, "/nonexistent/appinspect/app");
    assert_eq!(
        Path::new(&report.cache_dir),
        Path::new("/nonexistent/appinspect/app/cache/dev")
    );
}
