/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use json2html::{ConvertOptions, Json2Html, Templates};
use tempfile::TempDir;

/// A template that exposes every parameter, so tests can see exactly what
/// reached the renderer.
pub const FIELDS_TEMPLATE: &str = "\
{% if creators %}creators;{% endif %}\
{% if title %}title={{ title }};{% endif %}\
{% if publisher %}publisher={{ publisher }};{% endif %}\
{% if physical_location %}physical_location={{ physical_location }};{% endif %}\
{% if volume %}volume={{ volume }};{% endif %}\
{% if doi %}doi={{ doi | safe }};{% endif %}\
{% if url %}url={{ url | safe }};{% endif %}\
{% if accessed_date %}accessed_date={{ accessed_date }};{% endif %}\
{% if publication_date %}publication_date={{ publication_date }};{% endif %}\
{% if entry_id %}entry_id={{ entry_id | safe }};{% endif %}";

pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

pub fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).expect("fixture should be readable")
}

/// A workspace with `templates/entry.html` and an empty `content/` directory.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new(template: &str) -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::create_dir(dir.path().join("templates")).expect("templates dir");
        std::fs::create_dir(dir.path().join("content")).expect("content dir");
        std::fs::write(dir.path().join("templates/entry.html"), template).expect("template");
        Self { dir }
    }

    pub fn options(&self) -> ConvertOptions {
        ConvertOptions {
            template_dir: self.dir.path().join("templates"),
            output_dir: self.dir.path().join("content"),
            ..Default::default()
        }
    }

    pub fn converter(&self) -> Json2Html {
        Json2Html::from_options(self.options()).expect("templates should load")
    }

    pub fn converter_with(&self, f: impl FnOnce(&mut ConvertOptions)) -> Json2Html {
        let mut options = self.options();
        f(&mut options);
        Json2Html::from_options(options).expect("templates should load")
    }

    pub fn output(&self, id: &str) -> Option<String> {
        std::fs::read_to_string(self.dir.path().join("content").join(format!("{id}.html"))).ok()
    }

    pub fn output_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = std::fs::read_dir(self.dir.path().join("content"))
            .expect("content dir")
            .filter_map(|e| e.ok())
            .filter_map(|e| {
                e.path()
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
            })
            .collect();
        ids.sort();
        ids
    }
}

pub fn builtin_converter() -> Json2Html {
    Json2Html::new(Templates::builtin().expect("builtin template"))
}
