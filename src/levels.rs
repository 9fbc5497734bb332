use std::error::Error;
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

use crate::LoadLevel;

// The reference pack ships 51 levels; this one is smaller and nothing in the
// engine assumes a particular count.
const PACK: &str = include_str!("../levels/pack.txt");

/// The level pack compiled into the binary.
///
/// The pack file holds one level per record, separated by `;` comment lines.
#[derive(Debug)]
pub struct BundledLevels {
    levels: Vec<String>,
}

impl BundledLevels {
    pub fn new() -> BundledLevels {
        BundledLevels { levels: split_pack(PACK) }
    }
}

impl Default for BundledLevels {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadLevel for BundledLevels {
    fn load_level(&self, index: usize) -> Result<String, Box<dyn Error>> {
        match self.levels.get(index) {
            Some(text) => Ok(text.clone()),
            None => Err(format!("no bundled level {}", index + 1).into()),
        }
    }

    fn level_count(&self) -> usize {
        self.levels.len()
    }
}

fn split_pack(text: &str) -> Vec<String> {
    let mut levels = Vec::new();
    let mut current = String::new();
    for line in text.lines() {
        if line.trim_start().starts_with(';') {
            push_record(&mut levels, &mut current);
            continue;
        }
        current.push_str(line);
        current.push('\n');
    }
    push_record(&mut levels, &mut current);
    levels
}

fn push_record(levels: &mut Vec<String>, current: &mut String) {
    let record = current.trim_matches('\n');
    if !record.is_empty() {
        levels.push(record.to_string());
    }
    current.clear();
}

pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String, Box<dyn Error>> {
    let mut file = File::open(path)?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}
