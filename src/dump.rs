//! Plain hex dumps of loaded roms, for eyeballing them next to a listing.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

#[allow(unused)]
use log::{debug, error, info, warn};

use crate::dasm_err;
use crate::err::{DasmError, DasmErrorType, DasmResult};
use crate::rom::{concat_roms, RomMap};

const BYTES_PER_ROW: usize = 16;

pub const COMBINED_BIN: &str = "combined.bin";
pub const COMBINED_TXT: &str = "combined.txt";

/// Each byte as two hex digits and a space, 16 bytes per row
pub fn hex_dump(bytes: &[u8]) -> String {
  let mut out = String::with_capacity(bytes.len() * 3 + bytes.len() / BYTES_PER_ROW);
  for (i, byte) in bytes.iter().enumerate() {
    // writing to a String can't fail
    let _ = write!(out, "{:02x} ", byte);
    if (i + 1) % BYTES_PER_ROW == 0 {
      out.push('\n');
    }
  }
  out
}

fn create_dir(dir: &Path) -> DasmResult<()> {
  if let Err(e) = fs::create_dir_all(dir) {
    error!("Failed to create {}: {}", dir.display(), e);
    return dasm_err!(DasmErrorType::WriteFailed(dir.to_path_buf()));
  }
  Ok(())
}

fn write_file(path: &Path, contents: &[u8]) -> DasmResult<()> {
  if let Err(e) = fs::write(path, contents) {
    error!("Failed to write {}: {}", path.display(), e);
    return dasm_err!(DasmErrorType::WriteFailed(path.to_path_buf()));
  }
  Ok(())
}

/// Write `<name>.txt` into `dir` for every rom
pub fn dump_roms(roms: &RomMap, dir: &Path) -> DasmResult<()> {
  create_dir(dir)?;

  let mut names: Vec<&String> = roms.keys().collect();
  names.sort();
  for name in names {
    let path = dir.join(format!("{}.txt", name));
    write_file(&path, hex_dump(&roms[name]).as_bytes())?;
    info!("Dumped {} to {}", name, path.display());
  }
  Ok(())
}

/// Remove a dump folder and everything in it. Missing folders are fine.
pub fn clear_dump_dir(dir: &Path) -> DasmResult<()> {
  if !dir.exists() {
    return Ok(());
  }
  if let Err(e) = fs::remove_dir_all(dir) {
    error!("Failed to delete {}: {}", dir.display(), e);
    return dasm_err!(DasmErrorType::WriteFailed(dir.to_path_buf()));
  }
  info!("Deleted folder: {}", dir.display());
  Ok(())
}

/// Concatenate roms in `order` and write the raw image plus its hex dump into
/// `dir`. Returns the path of the raw image.
pub fn write_combined<S: AsRef<str>>(
  roms: &RomMap,
  order: &[S],
  dir: &Path,
) -> DasmResult<PathBuf> {
  let image = concat_roms(roms, order)?;
  create_dir(dir)?;

  let bin_path = dir.join(COMBINED_BIN);
  write_file(&bin_path, &image)?;
  write_file(&dir.join(COMBINED_TXT), hex_dump(&image).as_bytes())?;
  info!(
    "Combined {} roms into {} ({} bytes)",
    order.len(),
    bin_path.display(),
    image.len()
  );
  Ok(bin_path)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn scratch_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("zdasm-dump-{}-{}", tag, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
  }

  #[test]
  fn test_hex_dump_rows() {
    assert_eq!(hex_dump(&[]), "");
    assert_eq!(hex_dump(&[0x00, 0xab, 0x0f]), "00 ab 0f ");
    let bytes: Vec<u8> = (0..17).collect();
    assert_eq!(
      hex_dump(&bytes),
      "00 01 02 03 04 05 06 07 08 09 0a 0b 0c 0d 0e 0f \n10 "
    );
  }

  #[test]
  fn test_dump_and_clear() {
    let dir = scratch_dir("roms");
    let mut roms = RomMap::new();
    roms.insert("pacman.6e".to_string(), vec![0xf3, 0x3e, 0x3f]);
    roms.insert("82s123.7f".to_string(), vec![0x00; 16]);

    dump_roms(&roms, &dir).unwrap();
    assert_eq!(
      fs::read_to_string(dir.join("pacman.6e.txt")).unwrap(),
      "f3 3e 3f "
    );
    assert_eq!(
      fs::read_to_string(dir.join("82s123.7f.txt")).unwrap(),
      format!("{}\n", "00 ".repeat(16))
    );

    clear_dump_dir(&dir).unwrap();
    assert!(!dir.exists());
    // second clear is a no-op
    clear_dump_dir(&dir).unwrap();
  }

  #[test]
  fn test_write_combined() {
    let dir = scratch_dir("combined");
    let mut roms = RomMap::new();
    roms.insert("a".to_string(), vec![0x01, 0x02]);
    roms.insert("b".to_string(), vec![0x03]);

    let bin_path = write_combined(&roms, &["b", "a"], &dir).unwrap();
    assert_eq!(bin_path, dir.join(COMBINED_BIN));
    assert_eq!(fs::read(&bin_path).unwrap(), vec![0x03, 0x01, 0x02]);
    assert_eq!(
      fs::read_to_string(dir.join(COMBINED_TXT)).unwrap(),
      "03 01 02 "
    );

    fs::remove_dir_all(&dir).unwrap();
  }

  #[test]
  fn test_write_combined_unknown_rom() {
    let dir = scratch_dir("unknown");
    let roms = RomMap::new();
    let err = write_combined(&roms, &["missing"], &dir).unwrap_err();
    assert_eq!(
      err.error_type(),
      &DasmErrorType::RomNotLoaded("missing".to_string())
    );
    assert!(!dir.exists());
  }
}
