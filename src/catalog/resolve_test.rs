use super::*;
use crate::catalog::entry::{Link, Package};

fn entry_with_packages(slug: &str, platforms: &[(&str, &str)]) -> CatalogEntry {
    CatalogEntry {
        slug: slug.to_string(),
        version: "1.0.0".to_string(),
        url: String::new(),
        links: vec![Link {
            href: format!("/plugins/{}", slug),
        }],
        packages: platforms
            .iter()
            .map(|(platform, url)| {
                (
                    platform.to_string(),
                    Package {
                        download_url: url.to_string(),
                    },
                )
            })
            .collect(),
    }
}

// =========================================================================
// resolve_package tests
// =========================================================================

#[test]
fn test_resolve_any_package() {
    let entry = CatalogEntry {
        version: "2.0.0".to_string(),
        ..entry_with_packages("volkovlabs-x", &[("any", "/d/x")])
    };

    let info = resolve_package(&entry).unwrap();
    assert_eq!(info.slug, "volkovlabs-x");
    assert_eq!(info.version, "2.0.0");
    assert_eq!(info.package_url, "https://grafana.com/d/x");
    assert_eq!(
        info.homepage_url.as_deref(),
        Some("https://grafana.com/grafana/plugins/volkovlabs-x")
    );
}

#[test]
fn test_resolve_prefers_linux_amd64_over_any() {
    let entry = entry_with_packages(
        "foo-datasource",
        &[("any", "/any.zip"), ("linux-amd64", "/linux.zip")],
    );

    let info = resolve_package(&entry).unwrap();
    assert_eq!(info.package_url, "https://grafana.com/linux.zip");
}

#[test]
fn test_resolve_ignores_other_platforms() {
    let entry = entry_with_packages(
        "foo-datasource",
        &[("darwin-arm64", "/darwin.zip"), ("windows-amd64", "/win.zip")],
    );

    let result = resolve_package(&entry);
    assert!(matches!(result, Err(NurayaError::Unresolvable(slug)) if slug == "foo-datasource"));
}

#[test]
fn test_resolve_without_links_has_no_homepage() {
    let entry = CatalogEntry {
        links: vec![],
        ..entry_with_packages("foo-panel", &[("any", "/d/foo")])
    };

    let info = resolve_package(&entry).unwrap();
    assert!(info.homepage_url.is_none());
}

// =========================================================================
// repository_url tests
// =========================================================================

#[test]
fn test_repository_url_private_sentinel() {
    assert_eq!(repository_url(PRIVATE_PLUGINS_URL, "volkovlabs-app"), None);
}

#[test]
fn test_repository_url_explicit() {
    assert_eq!(
        repository_url("https://github.com/grafana/clock-panel", "grafana-clock-panel"),
        Some("https://github.com/grafana/clock-panel".to_string())
    );
}

#[test]
fn test_repository_url_vendor_slug() {
    assert_eq!(
        repository_url("", "volkovlabs-echarts-panel"),
        Some("https://github.com/VolkovLabs/volkovlabs-echarts-panel".to_string())
    );
}

#[test]
fn test_repository_url_unknown() {
    assert_eq!(repository_url("", "grafana-clock-panel"), None);
}
