//! Archive fixtures written into temporary directories.

use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// In-memory archive builder.
#[derive(Default)]
pub struct JarBuilder {
    entries: Vec<(String, Vec<u8>)>,
}

impl JarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(mut self, name: &str, content: impl AsRef<[u8]>) -> Self {
        self.entries.push((name.to_string(), content.as_ref().to_vec()));
        self
    }

    pub fn manifest(self, attributes: &[(&str, &str)]) -> Self {
        let mut text = String::from("Manifest-Version: 1.0\r\n");
        for (key, value) in attributes {
            text.push_str(&format!("{}: {}\r\n", key, value));
        }
        text.push_str("\r\n");
        self.entry("META-INF/MANIFEST.MF", text)
    }

    /// Adds `META-INF/maven/<group>/<artifact>/pom.xml`.
    pub fn pom(self, group: &str, artifact: &str, version: &str, dependencies: &[&str]) -> Self {
        let path = format!("META-INF/maven/{}/{}/pom.xml", group, artifact);
        self.entry(&path, pom_xml(group, artifact, version, dependencies))
    }

    pub fn build(self) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options: FileOptions<'_, ()> =
            FileOptions::default().compression_method(CompressionMethod::Deflated);
        for (name, content) in &self.entries {
            writer.start_file(name.as_str(), options).unwrap();
            writer.write_all(content).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    pub fn write_to(self, dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, self.build()).unwrap();
        path
    }
}

/// pom.xml text; dependencies are given as `group:artifact:version`.
pub fn pom_xml(group: &str, artifact: &str, version: &str, dependencies: &[&str]) -> String {
    let deps: String = dependencies
        .iter()
        .map(|dep| {
            let parts: Vec<&str> = dep.split(':').collect();
            format!(
                "    <dependency>\n      <groupId>{}</groupId>\n      <artifactId>{}</artifactId>\n      <version>{}</version>\n    </dependency>\n",
                parts[0], parts[1], parts[2]
            )
        })
        .collect();
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<project xmlns=\"http://maven.apache.org/POM/4.0.0\">\n  <modelVersion>4.0.0</modelVersion>\n  <groupId>{}</groupId>\n  <artifactId>{}</artifactId>\n  <version>{}</version>\n  <dependencies>\n{}  </dependencies>\n</project>\n",
        group, artifact, version, deps
    )
}

/// A library archive with a manifest, a pom and one class.
pub fn library(group: &str, artifact: &str, version: &str, dependencies: &[&str]) -> Vec<u8> {
    JarBuilder::new()
        .manifest(&[("Implementation-Version", version)])
        .pom(group, artifact, version, dependencies)
        .entry("com/example/Lib.class", [0xca, 0xfe, 0xba, 0xbe])
        .build()
}

/// `app.war` with `lib-a` and `lib-b` under `WEB-INF/lib`, `lib-b` depending on `lib-a`.
pub fn sample_war(dir: &Path) -> PathBuf {
    JarBuilder::new()
        .manifest(&[("Implementation-Title", "app")])
        .entry(
            "WEB-INF/lib/lib-a-1.0.jar",
            library("com.x", "lib-a", "1.0", &[]),
        )
        .entry(
            "WEB-INF/lib/lib-b-2.0.jar",
            library("com.x", "lib-b", "2.0", &["com.x:lib-a:1.0"]),
        )
        .entry("WEB-INF/classes/com/x/App.class", [0xca, 0xfe])
        .write_to(dir, "app.war")
}
