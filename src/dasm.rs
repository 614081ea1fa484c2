//! Disassembler for the Z80 cpu. Walks a byte stream one instruction at a time
//! and renders each as an address, a mnemonic and an optional immediate.
//!
//! Every byte is treated as code. There is no control flow tracking, so data
//! embedded in a rom simply decodes as whatever instructions it happens to
//! look like.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::iter::FusedIterator;
use std::path::Path;

#[allow(unused)]
use log::{debug, error, info, trace};

use crate::dasm_err;
use crate::err::{DasmError, DasmErrorType, DasmResult};
use crate::table::{lookup, Entry, InstrEntry, TableId};

/// Immediate or displacement value that follows an opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
  D8(u8),
  D16(u16),
}

/// One decoded instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedLine {
  pub addr: u16,
  pub name: &'static str,
  pub operand: Option<Operand>,
}

impl fmt::Display for DecodedLine {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:04x}: {}", self.addr, self.name)?;
    match self.operand {
      None => Ok(()),
      Some(Operand::D8(val)) => write!(f, " #{:02x}", val),
      Some(Operand::D16(val)) => write!(f, " #{:04x}", val),
    }
  }
}

#[derive(Clone, Copy, Debug, Default)]
struct Cursor {
  offset: usize,
  // program counter, wraps like the real 16 bit register
  addr: u16,
}

impl Cursor {
  fn advance(&mut self, count: usize) {
    self.offset += count;
    self.addr = self.addr.wrapping_add(count as u16);
  }
}

/// An instruction found in the table set, before its operand has been read.
struct Resolved {
  entry: InstrEntry,
  table: TableId,
  prefix_bytes: usize,
}

/// The disassembler. Yields one [`DecodedLine`] per instruction and stops for
/// good at the end of the stream or at the first truncated instruction.
pub struct Dasm<'a> {
  bytes: &'a [u8],
  cursor: Cursor,
  done: bool,
}

impl<'a> Dasm<'a> {
  pub fn new(bytes: &'a [u8]) -> Dasm<'a> {
    Dasm {
      bytes,
      cursor: Cursor::default(),
      done: false,
    }
  }

  /// Follow prefix bytes from the cursor until a real instruction is found.
  /// None if the stream ends first.
  fn resolve(&self) -> Option<Resolved> {
    let start = self.cursor.offset;
    let mut table = TableId::Main;
    let mut prefix_bytes = 0;
    let mut at = start;
    loop {
      let byte = *self.bytes.get(at)?;
      match lookup(table, byte) {
        Entry::Instr(entry) => {
          return Some(Resolved {
            entry,
            table,
            prefix_bytes,
          })
        }
        Entry::Prefix(next) => {
          prefix_bytes += 1;
          table = next;
          // DD CB d op: skip over the displacement to reach the opcode
          at = start + prefix_bytes + next.displacement_first() as usize;
        }
      }
    }
  }

  /// Decode the instruction under the cursor and advance past it
  fn munch(&mut self) -> Option<DecodedLine> {
    let start = self.cursor.offset;
    let resolved = match self.resolve() {
      Some(resolved) => resolved,
      None => {
        self.log_truncated();
        return None;
      }
    };

    let size = resolved.entry.size as usize;
    let total = size + resolved.prefix_bytes;
    if start + total > self.bytes.len() {
      self.log_truncated();
      return None;
    }

    let operand_at = if resolved.table.displacement_first() {
      start + resolved.prefix_bytes
    } else {
      start + resolved.prefix_bytes + 1
    };
    let operand = match size {
      1 => None,
      2 => Some(Operand::D8(self.bytes[operand_at])),
      _ => Some(Operand::D16(u16::from_le_bytes([
        self.bytes[operand_at],
        self.bytes[operand_at + 1],
      ]))),
    };

    let line = DecodedLine {
      addr: self.cursor.addr,
      name: resolved.entry.name,
      operand,
    };
    self.cursor.advance(total);

    #[cfg(feature = "instr-trace")]
    trace!("{}", line);

    Some(line)
  }

  fn log_truncated(&self) {
    debug!(
      "Truncated instruction at ${:04x}, dropping {} trailing byte(s)",
      self.cursor.addr,
      self.bytes.len() - self.cursor.offset
    );
  }
}

impl<'a> Iterator for Dasm<'a> {
  type Item = DecodedLine;

  fn next(&mut self) -> Option<DecodedLine> {
    if self.done || self.cursor.offset >= self.bytes.len() {
      return None;
    }
    let line = self.munch();
    if line.is_none() {
      self.done = true;
    }
    line
  }
}

impl<'a> FusedIterator for Dasm<'a> {}

/// Decode the whole stream
pub fn decode(bytes: &[u8]) -> Vec<DecodedLine> {
  Dasm::new(bytes).collect()
}

/// Write each line followed by a newline. Returns the number of lines written.
pub fn write_listing<W, I>(lines: I, out: &mut W) -> io::Result<usize>
where
  W: Write,
  I: IntoIterator<Item = DecodedLine>,
{
  let mut count = 0;
  for line in lines {
    writeln!(out, "{}", line)?;
    count += 1;
  }
  out.flush()?;
  Ok(count)
}

/// Disassemble `bytes` into a listing file at `path`
pub fn disassemble_to_file(bytes: &[u8], path: &Path) -> DasmResult<usize> {
  let file = match File::create(path) {
    Ok(file) => file,
    Err(e) => {
      error!("Failed to create {}: {}", path.display(), e);
      return dasm_err!(DasmErrorType::WriteFailed(path.to_path_buf()));
    }
  };
  let mut out = BufWriter::new(file);
  match write_listing(decode(bytes), &mut out) {
    Ok(count) => {
      info!("Disassembly written to {} ({} lines)", path.display(), count);
      Ok(count)
    }
    Err(e) => {
      error!("Failed to write {}: {}", path.display(), e);
      dasm_err!(DasmErrorType::WriteFailed(path.to_path_buf()))
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;

  fn listing(bytes: &[u8]) -> Vec<String> {
    decode(bytes).iter().map(|line| line.to_string()).collect()
  }

  #[test]
  fn test_dasm_empty() {
    assert!(decode(&[]).is_empty());
  }

  #[test]
  fn test_dasm_nop() {
    assert_eq!(listing(&[0x00]), vec!["0000: NOP"]);
  }

  #[test]
  fn test_dasm_size_3() {
    assert_eq!(
      listing(&[0x00, 0x01, 0x34, 0x12]),
      vec!["0000: NOP", "0001: LD BC,nn #1234"]
    );
  }

  #[test]
  fn test_dasm_size_2_imm8() {
    assert_eq!(listing(&[0x06, 0x7f]), vec!["0000: LD B,n #7f"]);
  }

  #[test]
  fn test_dasm_cb() {
    let lines = decode(&[0xcb, 0x00, 0x00]);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].to_string(), "0000: RLC B");
    assert_eq!(lines[0].operand, None);
    // both bytes consumed
    assert_eq!(lines[1].addr, 0x0002);
  }

  #[test]
  fn test_dasm_misc_imm16() {
    assert_eq!(
      listing(&[0xed, 0x43, 0x34, 0x12, 0x00]),
      vec!["0000: LD (nn),BC #1234", "0004: NOP"]
    );
  }

  #[test]
  fn test_dasm_index_displacement() {
    assert_eq!(
      listing(&[0xdd, 0x46, 0xfe, 0xfd, 0x77, 0x03]),
      vec!["0000: LD B,(IX+d) #fe", "0003: LD (IY+d),A #03"]
    );
  }

  #[test]
  fn test_dasm_index_displacement_and_imm() {
    // the displacement and the immediate are read as one little endian word
    assert_eq!(
      listing(&[0xdd, 0x36, 0x05, 0xaa]),
      vec!["0000: LD (IX+d),n #aa05"]
    );
  }

  #[test]
  fn test_dasm_index_bit() {
    assert_eq!(
      listing(&[0xdd, 0xcb, 0x05, 0x06, 0xfd, 0xcb, 0x80, 0x7e, 0x00]),
      vec!["0000: RLC (IX+d) #05", "0004: BIT 7,(IY+d) #80", "0008: NOP"]
    );
  }

  #[test]
  fn test_dasm_index_placeholder() {
    // unused DD slots still consume the prefix and the selector
    assert_eq!(listing(&[0xdd, 0x00, 0x00]), vec!["0000: NOP", "0002: NOP"]);
  }

  #[test]
  fn test_dasm_main_table_single_bytes() {
    for b in 0..=255u8 {
      let entry = match lookup(TableId::Main, b) {
        Entry::Prefix(_) => continue,
        Entry::Instr(entry) => entry,
      };
      let mut bytes = vec![b];
      bytes.resize(entry.size as usize, 0x00);
      let lines = decode(&bytes);
      assert_eq!(lines.len(), 1, "opcode {:02x}", b);
      assert_eq!(lines[0].name, entry.name);
      assert_eq!(lines[0].addr, 0);
      match entry.size {
        1 => assert_eq!(lines[0].operand, None),
        2 => assert_eq!(lines[0].operand, Some(Operand::D8(0))),
        _ => assert_eq!(lines[0].operand, Some(Operand::D16(0))),
      }
    }
  }

  #[test]
  fn test_dasm_prefixed_tables() {
    let prefixes = [
      (0xcb, TableId::Bit),
      (0xed, TableId::Misc),
      (0xdd, TableId::Ix),
      (0xfd, TableId::Iy),
    ];
    for (prefix, table) in prefixes {
      for sel in 0..=255u8 {
        let (bytes, expected) = match lookup(table, sel) {
          Entry::Instr(entry) => {
            let mut bytes = vec![prefix, sel];
            bytes.resize(entry.size as usize + 1, 0x00);
            (bytes, entry.name)
          }
          Entry::Prefix(next) => match lookup(next, 0x46) {
            Entry::Instr(entry) => (vec![prefix, sel, 0x00, 0x46], entry.name),
            Entry::Prefix(_) => panic!("unexpected third prefix"),
          },
        };
        let lines = decode(&bytes);
        assert_eq!(lines.len(), 1, "{:02x} {:02x}", prefix, sel);
        assert_eq!(lines[0].name, expected);
      }
    }
  }

  #[test]
  fn test_dasm_lone_prefix() {
    for prefix in [0xcb, 0xdd, 0xed, 0xfd] {
      assert!(decode(&[prefix]).is_empty());
    }
    assert!(decode(&[0xdd, 0xcb]).is_empty());
    assert!(decode(&[0xfd, 0xcb, 0x05]).is_empty());
  }

  #[test]
  fn test_dasm_truncated_operand() {
    assert!(decode(&[0x01, 0x34]).is_empty());
    assert!(decode(&[0xed, 0x43, 0x00]).is_empty());
    assert_eq!(listing(&[0x00, 0x06]), vec!["0000: NOP"]);
    assert_eq!(listing(&[0x00, 0xdd, 0x46]), vec!["0000: NOP"]);
  }

  #[test]
  fn test_dasm_stops_after_truncation() {
    let mut dasm = Dasm::new(&[0x00, 0xc3, 0x00]);
    assert!(dasm.next().is_some());
    assert!(dasm.next().is_none());
    assert!(dasm.next().is_none());
  }

  #[test]
  fn test_dasm_addr_wraps() {
    let lines = decode(&vec![0x00; 0x10002]);
    assert_eq!(lines.len(), 0x10002);
    assert_eq!(lines[0xffff].addr, 0xffff);
    assert_eq!(lines[0x10000].addr, 0x0000);
    assert_eq!(lines[0x10001].addr, 0x0001);

    let bytes: Vec<u8> = [0x01, 0x00, 0x00].repeat(21847);
    let lines = decode(&bytes);
    assert_eq!(lines.len(), 21847);
    assert_eq!(lines[21845].addr, 0xffff);
    assert_eq!(lines[21846].addr, 0x0002);
  }

  #[test]
  fn test_dasm_deterministic() {
    let bytes = [
      0x31, 0xf0, 0x4f, 0xcb, 0x7e, 0xdd, 0x21, 0x00, 0x4c, 0xed, 0xb0, 0x18, 0xfe,
    ];
    let first = listing(&bytes);
    let second = listing(&bytes);
    assert_eq!(first, second);
    assert_eq!(
      first,
      vec![
        "0000: LD SP,nn #4ff0",
        "0003: BIT 7,(HL)",
        "0005: LD IX,nn #4c00",
        "0009: LDIR",
        "000b: JR e #fe",
      ]
    );
  }

  #[test]
  fn test_write_listing() {
    let mut out = Vec::new();
    let count = write_listing(Dasm::new(&[0x00, 0x01, 0x34, 0x12]), &mut out).unwrap();
    assert_eq!(count, 2);
    assert_eq!(
      String::from_utf8(out).unwrap(),
      "0000: NOP\n0001: LD BC,nn #1234\n"
    );
  }

  #[test]
  fn test_disassemble_to_file() {
    let dir = std::env::temp_dir().join(format!("zdasm-dasm-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("out.asm");
    let count = disassemble_to_file(&[0x06, 0x7f, 0xc9], &path).unwrap();
    assert_eq!(count, 2);
    assert_eq!(
      fs::read_to_string(&path).unwrap(),
      "0000: LD B,n #7f\n0002: RET\n"
    );
    fs::remove_dir_all(&dir).unwrap();
  }

  #[test]
  fn test_disassemble_to_missing_dir() {
    let path = std::env::temp_dir()
      .join(format!("zdasm-missing-{}", std::process::id()))
      .join("nested")
      .join("out.asm");
    let err = disassemble_to_file(&[0x00], &path).unwrap_err();
    assert_eq!(err.error_type(), &DasmErrorType::WriteFailed(path));
  }
}
