//! Rom loading. A rom set is a folder holding a fixed list of dumps; the
//! program roms are concatenated in address order to form the image that gets
//! disassembled.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

#[allow(unused)]
use log::{debug, error, info, warn};

use crate::dasm_err;
use crate::err::{DasmError, DasmErrorType, DasmResult};

/// Every dump of the Pac-Man board.
pub const PACMAN_ROMS: [&str; 10] = [
  "pacman.6e", // code rom 1
  "pacman.6f", // code rom 2
  "pacman.6h", // code rom 3
  "pacman.6j", // code rom 4
  "82s123.7f", // color prom
  "82s126.4a", // palette prom
  "pacman.5e", // tile rom
  "pacman.5f", // sprite rom
  "82s126.1m", // sound prom 1
  "82s126.3m", // sound prom 2
];

/// Program roms in the order they are mapped, starting at $0000.
pub const PACMAN_CODE_ROMS: [&str; 4] = ["pacman.6e", "pacman.6f", "pacman.6h", "pacman.6j"];

pub type RomMap = HashMap<String, Vec<u8>>;

pub struct RomSet {
  folder: PathBuf,
  required: Vec<String>,
}

impl RomSet {
  pub fn new<P: AsRef<Path>>(folder: P, required: &[&str]) -> RomSet {
    RomSet {
      folder: folder.as_ref().to_path_buf(),
      required: required.iter().map(|name| name.to_string()).collect(),
    }
  }

  pub fn pacman<P: AsRef<Path>>(folder: P) -> RomSet {
    Self::new(folder, &PACMAN_ROMS)
  }

  pub fn required(&self) -> &[String] {
    &self.required
  }

  fn path_of(&self, name: &str) -> PathBuf {
    self.folder.join(name)
  }

  /// Check that every required file is present. Fails on the first one missing.
  pub fn verify(&self) -> DasmResult<()> {
    for name in &self.required {
      let path = self.path_of(name);
      if !path.is_file() {
        error!("Rom file not found: {}", path.display());
        return dasm_err!(DasmErrorType::RomMissing(path));
      }
      info!("Rom file found: {}", name);
    }
    Ok(())
  }

  /// Read every required file into memory, keyed by file name
  pub fn load(&self) -> DasmResult<RomMap> {
    let mut roms = RomMap::new();
    for name in &self.required {
      let data = load_rom(&self.path_of(name))?;
      roms.insert(name.clone(), data);
    }
    Ok(roms)
  }
}

pub fn load_rom(path: &Path) -> DasmResult<Vec<u8>> {
  if !path.exists() {
    error!("Rom file not found: {}", path.display());
    return dasm_err!(DasmErrorType::RomMissing(path.to_path_buf()));
  }
  match fs::read(path) {
    Ok(data) => {
      info!("Loaded rom: {} ({} bytes)", path.display(), data.len());
      Ok(data)
    }
    Err(e) => {
      error!("Failed to read rom {}: {}", path.display(), e);
      dasm_err!(DasmErrorType::ReadFailed(path.to_path_buf()))
    }
  }
}

/// Join the named roms end to end in the given order
pub fn concat_roms<S: AsRef<str>>(roms: &RomMap, order: &[S]) -> DasmResult<Vec<u8>> {
  let mut image = Vec::new();
  for name in order {
    let name = name.as_ref();
    match roms.get(name) {
      Some(data) => {
        debug!("Appending {} at ${:04x}", name, image.len());
        image.extend_from_slice(data);
      }
      None => {
        error!("Rom {} was not loaded", name);
        return dasm_err!(DasmErrorType::RomNotLoaded(name.to_string()));
      }
    }
  }
  Ok(image)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn scratch_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("zdasm-rom-{}-{}", tag, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
  }

  #[test]
  fn test_verify_and_load() {
    let dir = scratch_dir("load");
    fs::write(dir.join("a.bin"), [0x00u8, 0x01]).unwrap();
    fs::write(dir.join("b.bin"), [0xc9u8]).unwrap();

    let set = RomSet::new(&dir, &["a.bin", "b.bin"]);
    set.verify().unwrap();
    let roms = set.load().unwrap();
    assert_eq!(roms.len(), 2);
    assert_eq!(roms["a.bin"], vec![0x00, 0x01]);
    assert_eq!(roms["b.bin"], vec![0xc9]);

    fs::remove_dir_all(&dir).unwrap();
  }

  #[test]
  fn test_verify_missing() {
    let dir = scratch_dir("missing");
    fs::write(dir.join("a.bin"), [0x00u8]).unwrap();

    let set = RomSet::new(&dir, &["a.bin", "b.bin"]);
    let err = set.verify().unwrap_err();
    assert_eq!(err.error_type(), &DasmErrorType::RomMissing(dir.join("b.bin")));
    assert!(set.load().is_err());

    fs::remove_dir_all(&dir).unwrap();
  }

  #[test]
  fn test_pacman_set() {
    let set = RomSet::pacman("roms");
    assert_eq!(set.required().len(), 10);
    for name in PACMAN_CODE_ROMS {
      assert!(set.required().iter().any(|r| r == name));
    }
  }

  #[test]
  fn test_concat_order() {
    let mut roms = RomMap::new();
    roms.insert("lo".to_string(), vec![0x01, 0x02]);
    roms.insert("hi".to_string(), vec![0x03]);
    assert_eq!(concat_roms(&roms, &["lo", "hi"]).unwrap(), vec![0x01, 0x02, 0x03]);
    assert_eq!(concat_roms(&roms, &["hi", "lo"]).unwrap(), vec![0x03, 0x01, 0x02]);
    assert!(concat_roms::<&str>(&roms, &[]).unwrap().is_empty());
  }

  #[test]
  fn test_concat_unknown() {
    let roms = RomMap::new();
    let err = concat_roms(&roms, &["pacman.6e"]).unwrap_err();
    assert_eq!(
      err.error_type(),
      &DasmErrorType::RomNotLoaded("pacman.6e".to_string())
    );
  }

  #[test]
  fn test_load_rom_missing() {
    let path = std::env::temp_dir().join(format!("zdasm-none-{}.bin", std::process::id()));
    let err = load_rom(&path).unwrap_err();
    assert_eq!(err.error_type(), &DasmErrorType::RomMissing(path));
  }
}
