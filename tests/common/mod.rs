#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn vertag_cmd() -> Command {
    let mut cmd = Command::cargo_bin("vertag").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Write `<root>/<root_id>/<ver_folder>/info.json`
pub fn write_info(root: &Path, root_id: &str, ver_folder: &str, contents: &str) {
    let dir = root.join(root_id).join(ver_folder);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("info.json"), contents).unwrap();
}

pub fn read_output(root: &Path, version: &str) -> String {
    fs::read_to_string(root.join("output").join(format!("{}.json", version))).unwrap()
}

pub fn output_names(root: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(root.join("output"))
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
