use std::io::{Cursor, Write};

use uipro::error::Result;
use uipro::{TargetPrompter, TargetType};
use zip::write::SimpleFileOptions;

pub const RELEASES_PATH: &str = "/repos/nextlevelbuilder/ui-ux-pro-max-skill/releases";
pub const LATEST_PATH: &str = "/repos/nextlevelbuilder/ui-ux-pro-max-skill/releases/latest";

/// Zip bytes with the given `(path, contents)` file entries
pub fn zip_bytes(files: &[(&str, &str)]) -> Vec<u8> {
    let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
    for (name, contents) in files {
        zip.start_file(*name, options).unwrap();
        zip.write_all(contents.as_bytes()).unwrap();
    }
    zip.finish().unwrap().into_inner()
}

/// Release JSON with one asset per `(name, url)`
pub fn release_json(tag: &str, assets: &[(&str, &str)]) -> String {
    let assets: Vec<serde_json::Value> = assets
        .iter()
        .map(|(name, url)| serde_json::json!({ "name": name, "browser_download_url": url }))
        .collect();
    serde_json::json!({ "tag_name": tag, "assets": assets }).to_string()
}

/// Prompter for runs that pass an explicit target
pub struct NoPrompt;

impl TargetPrompter for NoPrompt {
    fn select_target(&self, _: &[TargetType], _: TargetType) -> Result<Option<TargetType>> {
        panic!("explicit target must not prompt");
    }
}

pub fn dir_is_empty(path: &std::path::Path) -> bool {
    std::fs::read_dir(path).unwrap().next().is_none()
}
