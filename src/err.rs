//! Errors and Result types for the disassembler.

use std::fmt;
use std::path::PathBuf;

#[macro_export]
macro_rules! dasm_err {
  ( $x:expr ) => {
    Err(DasmError::new($x, file!(), line!()))
  };
}

pub type DasmResult<T> = Result<T, DasmError>;

/// Error type for the disassembler
#[derive(Debug)]
pub struct DasmError {
  error: DasmErrorType,
  line: u32,
  file: &'static str,
}

impl DasmError {
  pub fn new(error: DasmErrorType, file: &'static str, line: u32) -> DasmError {
    DasmError { error, line, file }
  }

  pub fn error_type(&self) -> &DasmErrorType {
    &self.error
  }
}

#[derive(Debug, PartialEq, Eq)]
pub enum DasmErrorType {
  RomMissing(PathBuf),
  ReadFailed(PathBuf),
  WriteFailed(PathBuf),
  RomNotLoaded(String),
}

impl fmt::Display for DasmErrorType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      DasmErrorType::RomMissing(path) => write!(f, "rom file not found: {}", path.display()),
      DasmErrorType::ReadFailed(path) => write!(f, "failed to read {}", path.display()),
      DasmErrorType::WriteFailed(path) => write!(f, "failed to write {}", path.display()),
      DasmErrorType::RomNotLoaded(name) => write!(f, "rom not loaded: {}", name),
    }
  }
}

impl fmt::Display for DasmError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} ({}:{})", self.error, self.file, self.line)
  }
}

impl std::error::Error for DasmError {}
