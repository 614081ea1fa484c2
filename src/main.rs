//! Z80 disassembler entry point

mod dasm;
mod dump;
mod err;
mod logger;
mod rom;
mod table;

use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Parser, Subcommand};
#[allow(unused)]
use log::{debug, error, info, trace, warn, LevelFilter};

use crate::err::{DasmErrorType, DasmResult};
use crate::rom::{RomSet, PACMAN_CODE_ROMS};

#[derive(Parser, Debug)]
#[command(name = "zdasm")]
#[command(about = "Linear sweep disassembler for Z80 binaries", long_about = None)]
struct Args {
  /// More log output (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = ArgAction::Count, global = true)]
  verbose: u8,

  /// Only log errors
  #[arg(short, long, action = ArgAction::SetTrue, global = true)]
  quiet: bool,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Disassemble a single binary file
  File {
    /// Binary to disassemble
    input: PathBuf,
    /// Where to write the listing
    output: PathBuf,
  },

  /// Verify a rom set, join its program roms and disassemble the result
  Romset {
    /// Folder holding the rom dumps
    #[arg(long, default_value = "roms")]
    dir: PathBuf,

    /// Where to write the listing
    #[arg(long, default_value = "pacman.asm")]
    output: PathBuf,

    /// Program roms to join, in address order (defaults to the Pac-Man code roms)
    #[arg(long, value_delimiter = ',')]
    order: Vec<String>,

    /// Also write hex dumps of every rom and of the joined image to this folder
    #[arg(long)]
    dump: Option<PathBuf>,
  },

  /// Write hex dumps of every rom in a rom set
  Dump {
    /// Folder holding the rom dumps
    #[arg(long, default_value = "roms")]
    dir: PathBuf,

    /// Folder receiving the text dumps
    #[arg(long, default_value = "rom_dumps")]
    out: PathBuf,

    /// Delete the dump folder instead of writing it
    #[arg(long, action = ArgAction::SetTrue)]
    clear: bool,
  },
}

fn main() {
  let args = Args::parse();
  logger::init_logging(level_filter(args.verbose, args.quiet));

  if let Err(e) = run(args.command) {
    error!("{}", e);
    if let DasmErrorType::RomMissing(_) = e.error_type() {
      error!("Make sure every rom file is in the rom folder");
    }
    process::exit(1);
  }
}

fn level_filter(verbose: u8, quiet: bool) -> LevelFilter {
  if quiet {
    return LevelFilter::Error;
  }
  match verbose {
    0 => LevelFilter::Warn,
    1 => LevelFilter::Info,
    2 => LevelFilter::Debug,
    _ => LevelFilter::Trace,
  }
}

fn run(command: Command) -> DasmResult<()> {
  match command {
    Command::File { input, output } => disassemble_file(&input, &output),
    Command::Romset {
      dir,
      output,
      order,
      dump,
    } => disassemble_romset(&dir, &output, &order, dump.as_deref()),
    Command::Dump { dir, out, clear } => {
      if clear {
        return dump::clear_dump_dir(&out);
      }
      let set = RomSet::pacman(&dir);
      set.verify()?;
      dump::dump_roms(&set.load()?, &out)
    }
  }
}

fn disassemble_file(input: &Path, output: &Path) -> DasmResult<()> {
  let bytes = rom::load_rom(input)?;
  dasm::disassemble_to_file(&bytes, output)?;
  Ok(())
}

fn disassemble_romset(
  dir: &Path,
  output: &Path,
  order: &[String],
  dump_dir: Option<&Path>,
) -> DasmResult<()> {
  let set = RomSet::pacman(dir);
  debug!("Rom set requires {}", set.required().join(", "));
  set.verify()?;
  let roms = set.load()?;

  let order: Vec<&str> = if order.is_empty() {
    PACMAN_CODE_ROMS.to_vec()
  } else {
    order.iter().map(String::as_str).collect()
  };

  if let Some(dump_dir) = dump_dir {
    dump::dump_roms(&roms, dump_dir)?;
    dump::write_combined(&roms, &order, dump_dir)?;
  }

  let image = rom::concat_roms(&roms, &order)?;
  info!("Program image is {} bytes", image.len());
  dasm::disassemble_to_file(&image, output)?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_level_filter() {
    assert_eq!(level_filter(0, false), LevelFilter::Warn);
    assert_eq!(level_filter(1, false), LevelFilter::Info);
    assert_eq!(level_filter(2, false), LevelFilter::Debug);
    assert_eq!(level_filter(5, false), LevelFilter::Trace);
    assert_eq!(level_filter(3, true), LevelFilter::Error);
  }

  #[test]
  fn test_args_file() {
    let args = Args::try_parse_from(["zdasm", "-vv", "file", "in.bin", "out.asm"]).unwrap();
    assert_eq!(args.verbose, 2);
    match args.command {
      Command::File { input, output } => {
        assert_eq!(input, PathBuf::from("in.bin"));
        assert_eq!(output, PathBuf::from("out.asm"));
      }
      other => panic!("unexpected command {:?}", other),
    }
  }

  #[test]
  fn test_args_romset_order() {
    let args =
      Args::try_parse_from(["zdasm", "romset", "--order", "pacman.6f,pacman.6e"]).unwrap();
    match args.command {
      Command::Romset {
        dir, order, dump, ..
      } => {
        assert_eq!(dir, PathBuf::from("roms"));
        assert_eq!(order, vec!["pacman.6f", "pacman.6e"]);
        assert!(dump.is_none());
      }
      other => panic!("unexpected command {:?}", other),
    }
  }

  #[test]
  fn test_args_file_needs_paths() {
    assert!(Args::try_parse_from(["zdasm", "file", "in.bin"]).is_err());
  }

  #[test]
  fn test_disassemble_romset() {
    let dir = std::env::temp_dir().join(format!("zdasm-main-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    for name in rom::PACMAN_ROMS {
      std::fs::write(dir.join(name), [0x00u8]).unwrap();
    }
    std::fs::write(dir.join("pacman.6e"), [0x01u8, 0x34]).unwrap();
    std::fs::write(dir.join("pacman.6f"), [0x12u8]).unwrap();

    let output = dir.join("out.asm");
    let dumps = dir.join("dumps");
    disassemble_romset(&dir, &output, &[], Some(dumps.as_path())).unwrap();
    assert_eq!(
      std::fs::read_to_string(&output).unwrap(),
      "0000: LD BC,nn #1234\n0003: NOP\n0004: NOP\n"
    );
    assert!(dumps.join(dump::COMBINED_BIN).is_file());
    assert!(dumps.join("pacman.5e.txt").is_file());

    std::fs::remove_dir_all(&dir).unwrap();
  }

  #[test]
  fn test_disassemble_romset_missing_rom() {
    let dir = std::env::temp_dir().join(format!("zdasm-main-empty-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    assert!(disassemble_romset(&dir, &dir.join("out.asm"), &[], None).is_err());
    assert!(!dir.join("out.asm").exists());
    std::fs::remove_dir_all(&dir).unwrap();
  }
}
