#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

pub fn mockup(controls: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<mockup version="1.0" skin="sketch" measuredW="800" measuredH="600" mockupW="800" mockupH="600">
  <controls>
{controls}
  </controls>
</mockup>
"#
    )
}

pub fn link_control(type_id: &str, text: &str, href: &str) -> String {
    format!(
        r#"    <control controlTypeID="com.balsamiq.mockups::{type_id}">
      <controlProperties>
        <text>{text}</text>
        <href>{href}</href>
      </controlProperties>
    </control>"#
    )
}

pub fn write_mockup(dir: &Path, name: &str, controls: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, mockup(controls)).unwrap();
    path
}
