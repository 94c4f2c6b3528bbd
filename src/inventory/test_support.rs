//! Archive fixtures built in memory for unit tests.

use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Builds a zip archive holding the given entries.
pub fn jar_bytes(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(CompressionMethod::Deflated);
    for (name, content) in entries {
        writer.start_file(*name, options).unwrap();
        writer.write_all(content).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

/// Writes an archive into `dir` and returns its path.
pub fn write_jar(dir: &Path, name: &str, entries: &[(&str, &[u8])]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, jar_bytes(entries)).unwrap();
    path
}

/// Minimal pom.xml with optional dependencies (`group:artifact:version`).
pub fn pom(group: &str, artifact: &str, version: &str, dependencies: &[&str]) -> String {
    let deps: String = dependencies
        .iter()
        .map(|dep| {
            let parts: Vec<&str> = dep.split(':').collect();
            format!(
                "<dependency><groupId>{}</groupId><artifactId>{}</artifactId><version>{}</version></dependency>",
                parts[0], parts[1], parts[2]
            )
        })
        .collect();
    format!(
        "<?xml version=\"1.0\"?>\n<project xmlns=\"http://maven.apache.org/POM/4.0.0\">\n  <modelVersion>4.0.0</modelVersion>\n  <groupId>{}</groupId>\n  <artifactId>{}</artifactId>\n  <version>{}</version>\n  <dependencies>{}</dependencies>\n</project>\n",
        group, artifact, version, deps
    )
}

/// A library archive carrying a pom under `META-INF/maven/<g>/<a>/pom.xml`.
pub fn library_jar(group: &str, artifact: &str, version: &str, dependencies: &[&str]) -> Vec<u8> {
    let pom = pom(group, artifact, version, dependencies);
    let pom_path = format!("META-INF/maven/{}/{}/pom.xml", group, artifact);
    jar_bytes(&[
        ("META-INF/MANIFEST.MF", b"Manifest-Version: 1.0\r\n\r\n"),
        (pom_path.as_str(), pom.as_bytes()),
        ("com/example/Lib.class", b"\xca\xfe\xba\xbe"),
    ])
}
