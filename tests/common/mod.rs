#![allow(dead_code)]

use imagedeck::app::{Controller, ViewSettings};
use imagedeck::infrastructure::MemoryClipboard;
use imagedeck::storage::{MemoryPreferenceStore, PreferenceStore};
use imagedeck::{Page, Registry};
use serde_json::json;

/// A detail page with two variants, dependency data and all sections on `latest`.
pub fn detail_page() -> Page {
    let latest_args = json!([
        {"name": "openssl", "value": "3.2.1"},
        {"name": "php", "value": "8.3"}
    ]);
    let alpine_args = json!([{"name": "curl", "value": "8.6"}]);

    let sbom = json!({
        "packages_total": 142,
        "ecosystems": {"apk": 98, "composer": 44},
        "format": "spdx-json"
    });
    let changelog = json!({
        "changes": [
            {"type": "updated", "name": "openssl", "from": "3.2.0", "to": "3.2.1"},
            {"type": "added", "name": "libzip", "to": "1.10"}
        ]
    });
    let history = json!([
        {"built_at": "2025-03-05T10:00:00Z", "version": "8.3.4", "packages_total": 142},
        {"built_at": "last tuesday", "version": "8.3.3"}
    ]);

    let catalog = json!([
        {"name": "openssl", "status": "monitored"},
        {"name": "php", "status": "monitored"},
        {"name": "curl", "status": "disabled"}
    ]);
    let updates = json!([{"name": "openssl", "current": "3.2.1", "latest": "3.3.0"}]);

    let document = json!({
        "title": "php",
        "sections": [{
            "variants": [
                {
                    "tag": "latest",
                    "size_amd64": "52 MB",
                    "size_arm64": "50 MB",
                    "build_digest": "sha256:abc123",
                    "base_image": "alpine:3.19",
                    "build_args": latest_args.to_string(),
                    "sbom": sbom.to_string(),
                    "changelog": changelog.to_string(),
                    "build_history": history.to_string(),
                    "selected": true
                },
                {
                    "tag": "alpine",
                    "build_digest": "unknown",
                    "build_args": alpine_args.to_string(),
                    "sbom": "{broken"
                }
            ]
        }],
        "dependencies": {
            "catalog": catalog.to_string(),
            "updates": updates.to_string()
        },
        "lineage_items": [{"name": "openssl", "value": "3.2.1"}, {"name": "php", "value": "8.3"}]
    });

    Page::from_json(&document.to_string()).expect("fixture page parses")
}

/// A page without variant sections: one static data carrier drives every slot.
pub fn static_page() -> Page {
    let history = json!([{"built_at": "2024-12-01 08:30:00", "version": "1.4.0"}]);
    let catalog = json!([
        {"name": "node", "status": "monitored"},
        {"name": "yarn", "status": "disabled"}
    ]);

    let document = json!({
        "title": "node-builder",
        "static_data": {
            "tag": "latest",
            "size_amd64": "10 MB",
            "build_digest": "sha256:1",
            "base_image": "debian:bookworm",
            "build_args": json!([
                {"name": "node", "value": "20"},
                {"name": "yarn", "value": "1.22"}
            ]).to_string(),
            "build_history": history.to_string()
        },
        "dependencies": {"catalog": catalog.to_string()}
    });

    Page::from_json(&document.to_string()).expect("fixture page parses")
}

/// A dashboard page with three cards.
pub fn dashboard_page() -> Page {
    let document = json!({
        "cards": [
            {
                "container": "nginx",
                "status_class": "status-green",
                "ghcr_base": "ghcr.io/acme/nginx",
                "dockerhub_base": "acme/nginx",
                "variants": [
                    {"tag": "latest", "size_amd64": "40 MB", "selected": true},
                    {"tag": "alpine", "size_amd64": "12 MB", "size_arm64": "11 MB"}
                ]
            },
            {
                "container": "postgres",
                "status_class": "status-warning",
                "ghcr_base": "ghcr.io/acme/postgres",
                "dockerhub_base": "acme/postgres",
                "default_tag": "16"
            },
            {
                "container": "redis",
                "status_class": "status-gray",
                "ghcr_base": "ghcr.io/acme/redis",
                "dockerhub_base": "acme/redis"
            }
        ]
    });

    Page::from_json(&document.to_string()).expect("fixture page parses")
}

pub fn controller_with<S: PreferenceStore>(
    page: Page,
    store: S,
    clipboard: MemoryClipboard,
) -> Controller<S, MemoryClipboard> {
    Controller::new(page, ViewSettings::default(), Registry::Ghcr, store, clipboard, None)
}

pub fn controller(page: Page) -> Controller<MemoryPreferenceStore, MemoryClipboard> {
    controller_with(page, MemoryPreferenceStore::default(), MemoryClipboard::new())
}
