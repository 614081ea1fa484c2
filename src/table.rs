//! Opcode tables for the Z80. Each table covers all 256 byte values so a
//! lookup never misses. Bytes that only select another table are stored as
//! [`Entry::Prefix`] instead of an instruction.
//!
//! Instruction sizes count the table's own opcode byte plus its operand bytes.
//! Prefix bytes that led to the table are not included; the decoder adds them.

/// Tables the decoder can dispatch into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TableId {
  Main,
  /// 0xCB
  Bit,
  /// 0xED
  Misc,
  /// 0xDD
  Ix,
  /// 0xFD
  Iy,
  /// 0xDD 0xCB
  IxBit,
  /// 0xFD 0xCB
  IyBit,
}

impl TableId {
  pub fn entries(self) -> &'static [Entry; 256] {
    match self {
      TableId::Main => &MAIN_TABLE,
      TableId::Bit => &BIT_TABLE,
      TableId::Misc => &MISC_TABLE,
      TableId::Ix => &IX_TABLE,
      TableId::Iy => &IY_TABLE,
      TableId::IxBit => &IX_BIT_TABLE,
      TableId::IyBit => &IY_BIT_TABLE,
    }
  }

  /// True for the `DD CB d op` style tables, where the displacement byte sits
  /// between the prefixes and the opcode.
  pub fn displacement_first(self) -> bool {
    matches!(self, TableId::IxBit | TableId::IyBit)
  }
}

/// A single instruction encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InstrEntry {
  pub name: &'static str,
  pub size: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entry {
  Instr(InstrEntry),
  Prefix(TableId),
}

/// Look up `byte` in `table`. Total over every byte value.
pub fn lookup(table: TableId, byte: u8) -> Entry {
  table.entries()[byte as usize]
}

const fn op(name: &'static str, size: u8) -> Entry {
  Entry::Instr(InstrEntry { name, size })
}

const NOP: Entry = op("NOP", 1);
const TO_BIT: Entry = Entry::Prefix(TableId::Bit);
const TO_MISC: Entry = Entry::Prefix(TableId::Misc);
const TO_IX: Entry = Entry::Prefix(TableId::Ix);
const TO_IY: Entry = Entry::Prefix(TableId::Iy);
const TO_IX_BIT: Entry = Entry::Prefix(TableId::IxBit);
const TO_IY_BIT: Entry = Entry::Prefix(TableId::IyBit);

/// Unprefixed opcodes.
#[rustfmt::skip]
pub static MAIN_TABLE: [Entry; 256] = [
  /* 00 */ op("NOP", 1), /* 01 */ op("LD BC,nn", 3), /* 02 */ op("LD (BC),A", 1), /* 03 */ op("INC BC", 1),
  /* 04 */ op("INC B", 1), /* 05 */ op("DEC B", 1), /* 06 */ op("LD B,n", 2), /* 07 */ op("RLCA", 1),
  /* 08 */ op("EX AF,AF'", 1), /* 09 */ op("ADD HL,BC", 1), /* 0A */ op("LD A,(BC)", 1), /* 0B */ op("DEC BC", 1),
  /* 0C */ op("INC C", 1), /* 0D */ op("DEC C", 1), /* 0E */ op("LD C,n", 2), /* 0F */ op("RRCA", 1),

  /* 10 */ op("DJNZ e", 2), /* 11 */ op("LD DE,nn", 3), /* 12 */ op("LD (DE),A", 1), /* 13 */ op("INC DE", 1),
  /* 14 */ op("INC D", 1), /* 15 */ op("DEC D", 1), /* 16 */ op("LD D,n", 2), /* 17 */ op("RLA", 1),
  /* 18 */ op("JR e", 2), /* 19 */ op("ADD HL,DE", 1), /* 1A */ op("LD A,(DE)", 1), /* 1B */ op("DEC DE", 1),
  /* 1C */ op("INC E", 1), /* 1D */ op("DEC E", 1), /* 1E */ op("LD E,n", 2), /* 1F */ op("RRA", 1),

  /* 20 */ op("JR NZ,e", 2), /* 21 */ op("LD HL,nn", 3), /* 22 */ op("LD (nn),HL", 3), /* 23 */ op("INC HL", 1),
  /* 24 */ op("INC H", 1), /* 25 */ op("DEC H", 1), /* 26 */ op("LD H,n", 2), /* 27 */ op("DAA", 1),
  /* 28 */ op("JR Z,e", 2), /* 29 */ op("ADD HL,HL", 1), /* 2A */ op("LD HL,(nn)", 3), /* 2B */ op("DEC HL", 1),
  /* 2C */ op("INC L", 1), /* 2D */ op("DEC L", 1), /* 2E */ op("LD L,n", 2), /* 2F */ op("CPL", 1),

  /* 30 */ op("JR NC,e", 2), /* 31 */ op("LD SP,nn", 3), /* 32 */ op("LD (nn),A", 3), /* 33 */ op("INC SP", 1),
  /* 34 */ op("INC (HL)", 1), /* 35 */ op("DEC (HL)", 1), /* 36 */ op("LD (HL),n", 2), /* 37 */ op("SCF", 1),
  /* 38 */ op("JR C,e", 2), /* 39 */ op("ADD HL,SP", 1), /* 3A */ op("LD A,(nn)", 3), /* 3B */ op("DEC SP", 1),
  /* 3C */ op("INC A", 1), /* 3D */ op("DEC A", 1), /* 3E */ op("LD A,n", 2), /* 3F */ op("CCF", 1),

  /* 40 */ op("LD B,B", 1), /* 41 */ op("LD B,C", 1), /* 42 */ op("LD B,D", 1), /* 43 */ op("LD B,E", 1),
  /* 44 */ op("LD B,H", 1), /* 45 */ op("LD B,L", 1), /* 46 */ op("LD B,(HL)", 1), /* 47 */ op("LD B,A", 1),
  /* 48 */ op("LD C,B", 1), /* 49 */ op("LD C,C", 1), /* 4A */ op("LD C,D", 1), /* 4B */ op("LD C,E", 1),
  /* 4C */ op("LD C,H", 1), /* 4D */ op("LD C,L", 1), /* 4E */ op("LD C,(HL)", 1), /* 4F */ op("LD C,A", 1),

  /* 50 */ op("LD D,B", 1), /* 51 */ op("LD D,C", 1), /* 52 */ op("LD D,D", 1), /* 53 */ op("LD D,E", 1),
  /* 54 */ op("LD D,H", 1), /* 55 */ op("LD D,L", 1), /* 56 */ op("LD D,(HL)", 1), /* 57 */ op("LD D,A", 1),
  /* 58 */ op("LD E,B", 1), /* 59 */ op("LD E,C", 1), /* 5A */ op("LD E,D", 1), /* 5B */ op("LD E,E", 1),
  /* 5C */ op("LD E,H", 1), /* 5D */ op("LD E,L", 1), /* 5E */ op("LD E,(HL)", 1), /* 5F */ op("LD E,A", 1),

  /* 60 */ op("LD H,B", 1), /* 61 */ op("LD H,C", 1), /* 62 */ op("LD H,D", 1), /* 63 */ op("LD H,E", 1),
  /* 64 */ op("LD H,H", 1), /* 65 */ op("LD H,L", 1), /* 66 */ op("LD H,(HL)", 1), /* 67 */ op("LD H,A", 1),
  /* 68 */ op("LD L,B", 1), /* 69 */ op("LD L,C", 1), /* 6A */ op("LD L,D", 1), /* 6B */ op("LD L,E", 1),
  /* 6C */ op("LD L,H", 1), /* 6D */ op("LD L,L", 1), /* 6E */ op("LD L,(HL)", 1), /* 6F */ op("LD L,A", 1),

  /* 70 */ op("LD (HL),B", 1), /* 71 */ op("LD (HL),C", 1), /* 72 */ op("LD (HL),D", 1), /* 73 */ op("LD (HL),E", 1),
  /* 74 */ op("LD (HL),H", 1), /* 75 */ op("LD (HL),L", 1), /* 76 */ op("HALT", 1), /* 77 */ op("LD (HL),A", 1),
  /* 78 */ op("LD A,B", 1), /* 79 */ op("LD A,C", 1), /* 7A */ op("LD A,D", 1), /* 7B */ op("LD A,E", 1),
  /* 7C */ op("LD A,H", 1), /* 7D */ op("LD A,L", 1), /* 7E */ op("LD A,(HL)", 1), /* 7F */ op("LD A,A", 1),

  /* 80 */ op("ADD A,B", 1), /* 81 */ op("ADD A,C", 1), /* 82 */ op("ADD A,D", 1), /* 83 */ op("ADD A,E", 1),
  /* 84 */ op("ADD A,H", 1), /* 85 */ op("ADD A,L", 1), /* 86 */ op("ADD A,(HL)", 1), /* 87 */ op("ADD A,A", 1),
  /* 88 */ op("ADC A,B", 1), /* 89 */ op("ADC A,C", 1), /* 8A */ op("ADC A,D", 1), /* 8B */ op("ADC A,E", 1),
  /* 8C */ op("ADC A,H", 1), /* 8D */ op("ADC A,L", 1), /* 8E */ op("ADC A,(HL)", 1), /* 8F */ op("ADC A,A", 1),

  /* 90 */ op("SUB B", 1), /* 91 */ op("SUB C", 1), /* 92 */ op("SUB D", 1), /* 93 */ op("SUB E", 1),
  /* 94 */ op("SUB H", 1), /* 95 */ op("SUB L", 1), /* 96 */ op("SUB (HL)", 1), /* 97 */ op("SUB A", 1),
  /* 98 */ op("SBC A,B", 1), /* 99 */ op("SBC A,C", 1), /* 9A */ op("SBC A,D", 1), /* 9B */ op("SBC A,E", 1),
  /* 9C */ op("SBC A,H", 1), /* 9D */ op("SBC A,L", 1), /* 9E */ op("SBC A,(HL)", 1), /* 9F */ op("SBC A,A", 1),

  /* A0 */ op("AND B", 1), /* A1 */ op("AND C", 1), /* A2 */ op("AND D", 1), /* A3 */ op("AND E", 1),
  /* A4 */ op("AND H", 1), /* A5 */ op("AND L", 1), /* A6 */ op("AND (HL)", 1), /* A7 */ op("AND A", 1),
  /* A8 */ op("XOR B", 1), /* A9 */ op("XOR C", 1), /* AA */ op("XOR D", 1), /* AB */ op("XOR E", 1),
  /* AC */ op("XOR H", 1), /* AD */ op("XOR L", 1), /* AE */ op("XOR (HL)", 1), /* AF */ op("XOR A", 1),

  /* B0 */ op("OR B", 1), /* B1 */ op("OR C", 1), /* B2 */ op("OR D", 1), /* B3 */ op("OR E", 1),
  /* B4 */ op("OR H", 1), /* B5 */ op("OR L", 1), /* B6 */ op("OR (HL)", 1), /* B7 */ op("OR A", 1),
  /* B8 */ op("CP B", 1), /* B9 */ op("CP C", 1), /* BA */ op("CP D", 1), /* BB */ op("CP E", 1),
  /* BC */ op("CP H", 1), /* BD */ op("CP L", 1), /* BE */ op("CP (HL)", 1), /* BF */ op("CP A", 1),

  /* C0 */ op("RET NZ", 1), /* C1 */ op("POP BC", 1), /* C2 */ op("JP NZ,nn", 3), /* C3 */ op("JP nn", 3),
  /* C4 */ op("CALL NZ,nn", 3), /* C5 */ op("PUSH BC", 1), /* C6 */ op("ADD A,n", 2), /* C7 */ op("RST 00H", 1),
  /* C8 */ op("RET Z", 1), /* C9 */ op("RET", 1), /* CA */ op("JP Z,nn", 3), /* CB */ TO_BIT,
  /* CC */ op("CALL Z,nn", 3), /* CD */ op("CALL nn", 3), /* CE */ op("ADC A,n", 2), /* CF */ op("RST 08H", 1),

  /* D0 */ op("RET NC", 1), /* D1 */ op("POP DE", 1), /* D2 */ op("JP NC,nn", 3), /* D3 */ op("OUT (n),A", 2),
  /* D4 */ op("CALL NC,nn", 3), /* D5 */ op("PUSH DE", 1), /* D6 */ op("SUB n", 2), /* D7 */ op("RST 10H", 1),
  /* D8 */ op("RET C", 1), /* D9 */ op("EXX", 1), /* DA */ op("JP C,nn", 3), /* DB */ op("IN A,(n)", 2),
  /* DC */ op("CALL C,nn", 3), /* DD */ TO_IX, /* DE */ op("SBC A,n", 2), /* DF */ op("RST 18H", 1),

  /* E0 */ op("RET PO", 1), /* E1 */ op("POP HL", 1), /* E2 */ op("JP PO,nn", 3), /* E3 */ op("EX (SP),HL", 1),
  /* E4 */ op("CALL PO,nn", 3), /* E5 */ op("PUSH HL", 1), /* E6 */ op("AND n", 2), /* E7 */ op("RST 20H", 1),
  /* E8 */ op("RET PE", 1), /* E9 */ op("JP (HL)", 1), /* EA */ op("JP PE,nn", 3), /* EB */ op("EX DE,HL", 1),
  /* EC */ op("CALL PE,nn", 3), /* ED */ TO_MISC, /* EE */ op("XOR n", 2), /* EF */ op("RST 28H", 1),

  /* F0 */ op("RET P", 1), /* F1 */ op("POP AF", 1), /* F2 */ op("JP P,nn", 3), /* F3 */ op("DI", 1),
  /* F4 */ op("CALL P,nn", 3), /* F5 */ op("PUSH AF", 1), /* F6 */ op("OR n", 2), /* F7 */ op("RST 30H", 1),
  /* F8 */ op("RET M", 1), /* F9 */ op("LD SP,HL", 1), /* FA */ op("JP M,nn", 3), /* FB */ op("EI", 1),
  /* FC */ op("CALL M,nn", 3), /* FD */ TO_IY, /* FE */ op("CP n", 2), /* FF */ op("RST 38H", 1),
];

/// Opcodes following a 0xCB prefix: rotates, shifts and bit operations.
#[rustfmt::skip]
pub static BIT_TABLE: [Entry; 256] = [
  /* 00 */ op("RLC B", 1), /* 01 */ op("RLC C", 1), /* 02 */ op("RLC D", 1), /* 03 */ op("RLC E", 1),
  /* 04 */ op("RLC H", 1), /* 05 */ op("RLC L", 1), /* 06 */ op("RLC (HL)", 1), /* 07 */ op("RLC A", 1),
  /* 08 */ op("RRC B", 1), /* 09 */ op("RRC C", 1), /* 0A */ op("RRC D", 1), /* 0B */ op("RRC E", 1),
  /* 0C */ op("RRC H", 1), /* 0D */ op("RRC L", 1), /* 0E */ op("RRC (HL)", 1), /* 0F */ op("RRC A", 1),

  /* 10 */ op("RL B", 1), /* 11 */ op("RL C", 1), /* 12 */ op("RL D", 1), /* 13 */ op("RL E", 1),
  /* 14 */ op("RL H", 1), /* 15 */ op("RL L", 1), /* 16 */ op("RL (HL)", 1), /* 17 */ op("RL A", 1),
  /* 18 */ op("RR B", 1), /* 19 */ op("RR C", 1), /* 1A */ op("RR D", 1), /* 1B */ op("RR E", 1),
  /* 1C */ op("RR H", 1), /* 1D */ op("RR L", 1), /* 1E */ op("RR (HL)", 1), /* 1F */ op("RR A", 1),

  /* 20 */ op("SLA B", 1), /* 21 */ op("SLA C", 1), /* 22 */ op("SLA D", 1), /* 23 */ op("SLA E", 1),
  /* 24 */ op("SLA H", 1), /* 25 */ op("SLA L", 1), /* 26 */ op("SLA (HL)", 1), /* 27 */ op("SLA A", 1),
  /* 28 */ op("SRA B", 1), /* 29 */ op("SRA C", 1), /* 2A */ op("SRA D", 1), /* 2B */ op("SRA E", 1),
  /* 2C */ op("SRA H", 1), /* 2D */ op("SRA L", 1), /* 2E */ op("SRA (HL)", 1), /* 2F */ op("SRA A", 1),

  /* 30 */ op("SLL B", 1), /* 31 */ op("SLL C", 1), /* 32 */ op("SLL D", 1), /* 33 */ op("SLL E", 1),
  /* 34 */ op("SLL H", 1), /* 35 */ op("SLL L", 1), /* 36 */ op("SLL (HL)", 1), /* 37 */ op("SLL A", 1),
  /* 38 */ op("SRL B", 1), /* 39 */ op("SRL C", 1), /* 3A */ op("SRL D", 1), /* 3B */ op("SRL E", 1),
  /* 3C */ op("SRL H", 1), /* 3D */ op("SRL L", 1), /* 3E */ op("SRL (HL)", 1), /* 3F */ op("SRL A", 1),

  /* 40 */ op("BIT 0,B", 1), /* 41 */ op("BIT 0,C", 1), /* 42 */ op("BIT 0,D", 1), /* 43 */ op("BIT 0,E", 1),
  /* 44 */ op("BIT 0,H", 1), /* 45 */ op("BIT 0,L", 1), /* 46 */ op("BIT 0,(HL)", 1), /* 47 */ op("BIT 0,A", 1),
  /* 48 */ op("BIT 1,B", 1), /* 49 */ op("BIT 1,C", 1), /* 4A */ op("BIT 1,D", 1), /* 4B */ op("BIT 1,E", 1),
  /* 4C */ op("BIT 1,H", 1), /* 4D */ op("BIT 1,L", 1), /* 4E */ op("BIT 1,(HL)", 1), /* 4F */ op("BIT 1,A", 1),

  /* 50 */ op("BIT 2,B", 1), /* 51 */ op("BIT 2,C", 1), /* 52 */ op("BIT 2,D", 1), /* 53 */ op("BIT 2,E", 1),
  /* 54 */ op("BIT 2,H", 1), /* 55 */ op("BIT 2,L", 1), /* 56 */ op("BIT 2,(HL)", 1), /* 57 */ op("BIT 2,A", 1),
  /* 58 */ op("BIT 3,B", 1), /* 59 */ op("BIT 3,C", 1), /* 5A */ op("BIT 3,D", 1), /* 5B */ op("BIT 3,E", 1),
  /* 5C */ op("BIT 3,H", 1), /* 5D */ op("BIT 3,L", 1), /* 5E */ op("BIT 3,(HL)", 1), /* 5F */ op("BIT 3,A", 1),

  /* 60 */ op("BIT 4,B", 1), /* 61 */ op("BIT 4,C", 1), /* 62 */ op("BIT 4,D", 1), /* 63 */ op("BIT 4,E", 1),
  /* 64 */ op("BIT 4,H", 1), /* 65 */ op("BIT 4,L", 1), /* 66 */ op("BIT 4,(HL)", 1), /* 67 */ op("BIT 4,A", 1),
  /* 68 */ op("BIT 5,B", 1), /* 69 */ op("BIT 5,C", 1), /* 6A */ op("BIT 5,D", 1), /* 6B */ op("BIT 5,E", 1),
  /* 6C */ op("BIT 5,H", 1), /* 6D */ op("BIT 5,L", 1), /* 6E */ op("BIT 5,(HL)", 1), /* 6F */ op("BIT 5,A", 1),

  /* 70 */ op("BIT 6,B", 1), /* 71 */ op("BIT 6,C", 1), /* 72 */ op("BIT 6,D", 1), /* 73 */ op("BIT 6,E", 1),
  /* 74 */ op("BIT 6,H", 1), /* 75 */ op("BIT 6,L", 1), /* 76 */ op("BIT 6,(HL)", 1), /* 77 */ op("BIT 6,A", 1),
  /* 78 */ op("BIT 7,B", 1), /* 79 */ op("BIT 7,C", 1), /* 7A */ op("BIT 7,D", 1), /* 7B */ op("BIT 7,E", 1),
  /* 7C */ op("BIT 7,H", 1), /* 7D */ op("BIT 7,L", 1), /* 7E */ op("BIT 7,(HL)", 1), /* 7F */ op("BIT 7,A", 1),

  /* 80 */ op("RES 0,B", 1), /* 81 */ op("RES 0,C", 1), /* 82 */ op("RES 0,D", 1), /* 83 */ op("RES 0,E", 1),
  /* 84 */ op("RES 0,H", 1), /* 85 */ op("RES 0,L", 1), /* 86 */ op("RES 0,(HL)", 1), /* 87 */ op("RES 0,A", 1),
  /* 88 */ op("RES 1,B", 1), /* 89 */ op("RES 1,C", 1), /* 8A */ op("RES 1,D", 1), /* 8B */ op("RES 1,E", 1),
  /* 8C */ op("RES 1,H", 1), /* 8D */ op("RES 1,L", 1), /* 8E */ op("RES 1,(HL)", 1), /* 8F */ op("RES 1,A", 1),

  /* 90 */ op("RES 2,B", 1), /* 91 */ op("RES 2,C", 1), /* 92 */ op("RES 2,D", 1), /* 93 */ op("RES 2,E", 1),
  /* 94 */ op("RES 2,H", 1), /* 95 */ op("RES 2,L", 1), /* 96 */ op("RES 2,(HL)", 1), /* 97 */ op("RES 2,A", 1),
  /* 98 */ op("RES 3,B", 1), /* 99 */ op("RES 3,C", 1), /* 9A */ op("RES 3,D", 1), /* 9B */ op("RES 3,E", 1),
  /* 9C */ op("RES 3,H", 1), /* 9D */ op("RES 3,L", 1), /* 9E */ op("RES 3,(HL)", 1), /* 9F */ op("RES 3,A", 1),

  /* A0 */ op("RES 4,B", 1), /* A1 */ op("RES 4,C", 1), /* A2 */ op("RES 4,D", 1), /* A3 */ op("RES 4,E", 1),
  /* A4 */ op("RES 4,H", 1), /* A5 */ op("RES 4,L", 1), /* A6 */ op("RES 4,(HL)", 1), /* A7 */ op("RES 4,A", 1),
  /* A8 */ op("RES 5,B", 1), /* A9 */ op("RES 5,C", 1), /* AA */ op("RES 5,D", 1), /* AB */ op("RES 5,E", 1),
  /* AC */ op("RES 5,H", 1), /* AD */ op("RES 5,L", 1), /* AE */ op("RES 5,(HL)", 1), /* AF */ op("RES 5,A", 1),

  /* B0 */ op("RES 6,B", 1), /* B1 */ op("RES 6,C", 1), /* B2 */ op("RES 6,D", 1), /* B3 */ op("RES 6,E", 1),
  /* B4 */ op("RES 6,H", 1), /* B5 */ op("RES 6,L", 1), /* B6 */ op("RES 6,(HL)", 1), /* B7 */ op("RES 6,A", 1),
  /* B8 */ op("RES 7,B", 1), /* B9 */ op("RES 7,C", 1), /* BA */ op("RES 7,D", 1), /* BB */ op("RES 7,E", 1),
  /* BC */ op("RES 7,H", 1), /* BD */ op("RES 7,L", 1), /* BE */ op("RES 7,(HL)", 1), /* BF */ op("RES 7,A", 1),

  /* C0 */ op("SET 0,B", 1), /* C1 */ op("SET 0,C", 1), /* C2 */ op("SET 0,D", 1), /* C3 */ op("SET 0,E", 1),
  /* C4 */ op("SET 0,H", 1), /* C5 */ op("SET 0,L", 1), /* C6 */ op("SET 0,(HL)", 1), /* C7 */ op("SET 0,A", 1),
  /* C8 */ op("SET 1,B", 1), /* C9 */ op("SET 1,C", 1), /* CA */ op("SET 1,D", 1), /* CB */ op("SET 1,E", 1),
  /* CC */ op("SET 1,H", 1), /* CD */ op("SET 1,L", 1), /* CE */ op("SET 1,(HL)", 1), /* CF */ op("SET 1,A", 1),

  /* D0 */ op("SET 2,B", 1), /* D1 */ op("SET 2,C", 1), /* D2 */ op("SET 2,D", 1), /* D3 */ op("SET 2,E", 1),
  /* D4 */ op("SET 2,H", 1), /* D5 */ op("SET 2,L", 1), /* D6 */ op("SET 2,(HL)", 1), /* D7 */ op("SET 2,A", 1),
  /* D8 */ op("SET 3,B", 1), /* D9 */ op("SET 3,C", 1), /* DA */ op("SET 3,D", 1), /* DB */ op("SET 3,E", 1),
  /* DC */ op("SET 3,H", 1), /* DD */ op("SET 3,L", 1), /* DE */ op("SET 3,(HL)", 1), /* DF */ op("SET 3,A", 1),

  /* E0 */ op("SET 4,B", 1), /* E1 */ op("SET 4,C", 1), /* E2 */ op("SET 4,D", 1), /* E3 */ op("SET 4,E", 1),
  /* E4 */ op("SET 4,H", 1), /* E5 */ op("SET 4,L", 1), /* E6 */ op("SET 4,(HL)", 1), /* E7 */ op("SET 4,A", 1),
  /* E8 */ op("SET 5,B", 1), /* E9 */ op("SET 5,C", 1), /* EA */ op("SET 5,D", 1), /* EB */ op("SET 5,E", 1),
  /* EC */ op("SET 5,H", 1), /* ED */ op("SET 5,L", 1), /* EE */ op("SET 5,(HL)", 1), /* EF */ op("SET 5,A", 1),

  /* F0 */ op("SET 6,B", 1), /* F1 */ op("SET 6,C", 1), /* F2 */ op("SET 6,D", 1), /* F3 */ op("SET 6,E", 1),
  /* F4 */ op("SET 6,H", 1), /* F5 */ op("SET 6,L", 1), /* F6 */ op("SET 6,(HL)", 1), /* F7 */ op("SET 6,A", 1),
  /* F8 */ op("SET 7,B", 1), /* F9 */ op("SET 7,C", 1), /* FA */ op("SET 7,D", 1), /* FB */ op("SET 7,E", 1),
  /* FC */ op("SET 7,H", 1), /* FD */ op("SET 7,L", 1), /* FE */ op("SET 7,(HL)", 1), /* FF */ op("SET 7,A", 1),
];

/// Opcodes following a 0xED prefix. Unused slots decode as `NOP`.
#[rustfmt::skip]
pub static MISC_TABLE: [Entry; 256] = [
  /* 00 */ NOP, /* 01 */ NOP, /* 02 */ NOP, /* 03 */ NOP,
  /* 04 */ NOP, /* 05 */ NOP, /* 06 */ NOP, /* 07 */ NOP,
  /* 08 */ NOP, /* 09 */ NOP, /* 0A */ NOP, /* 0B */ NOP,
  /* 0C */ NOP, /* 0D */ NOP, /* 0E */ NOP, /* 0F */ NOP,

  /* 10 */ NOP, /* 11 */ NOP, /* 12 */ NOP, /* 13 */ NOP,
  /* 14 */ NOP, /* 15 */ NOP, /* 16 */ NOP, /* 17 */ NOP,
  /* 18 */ NOP, /* 19 */ NOP, /* 1A */ NOP, /* 1B */ NOP,
  /* 1C */ NOP, /* 1D */ NOP, /* 1E */ NOP, /* 1F */ NOP,

  /* 20 */ NOP, /* 21 */ NOP, /* 22 */ NOP, /* 23 */ NOP,
  /* 24 */ NOP, /* 25 */ NOP, /* 26 */ NOP, /* 27 */ NOP,
  /* 28 */ NOP, /* 29 */ NOP, /* 2A */ NOP, /* 2B */ NOP,
  /* 2C */ NOP, /* 2D */ NOP, /* 2E */ NOP, /* 2F */ NOP,

  /* 30 */ NOP, /* 31 */ NOP, /* 32 */ NOP, /* 33 */ NOP,
  /* 34 */ NOP, /* 35 */ NOP, /* 36 */ NOP, /* 37 */ NOP,
  /* 38 */ NOP, /* 39 */ NOP, /* 3A */ NOP, /* 3B */ NOP,
  /* 3C */ NOP, /* 3D */ NOP, /* 3E */ NOP, /* 3F */ NOP,

  /* 40 */ op("IN B,(C)", 1), /* 41 */ op("OUT (C),B", 1), /* 42 */ op("SBC HL,BC", 1), /* 43 */ op("LD (nn),BC", 3),
  /* 44 */ op("NEG", 1), /* 45 */ op("RETN", 1), /* 46 */ op("IM 0", 1), /* 47 */ op("LD I,A", 1),
  /* 48 */ op("IN C,(C)", 1), /* 49 */ op("OUT (C),C", 1), /* 4A */ op("ADC HL,BC", 1), /* 4B */ op("LD BC,(nn)", 3),
  /* 4C */ NOP, /* 4D */ op("RETI", 1), /* 4E */ NOP, /* 4F */ op("LD R,A", 1),

  /* 50 */ op("IN D,(C)", 1), /* 51 */ op("OUT (C),D", 1), /* 52 */ op("SBC HL,DE", 1), /* 53 */ op("LD (nn),DE", 3),
  /* 54 */ NOP, /* 55 */ NOP, /* 56 */ op("IM 1", 1), /* 57 */ op("LD A,I", 1),
  /* 58 */ op("IN E,(C)", 1), /* 59 */ op("OUT (C),E", 1), /* 5A */ op("ADC HL,DE", 1), /* 5B */ op("LD DE,(nn)", 3),
  /* 5C */ NOP, /* 5D */ NOP, /* 5E */ op("IM 2", 1), /* 5F */ op("LD A,R", 1),

  /* 60 */ op("IN H,(C)", 1), /* 61 */ op("OUT (C),H", 1), /* 62 */ op("SBC HL,HL", 1), /* 63 */ op("LD (nn),HL", 3),
  /* 64 */ NOP, /* 65 */ NOP, /* 66 */ NOP, /* 67 */ op("RRD", 1),
  /* 68 */ op("IN L,(C)", 1), /* 69 */ op("OUT (C),L", 1), /* 6A */ op("ADC HL,HL", 1), /* 6B */ op("LD HL,(nn)", 3),
  /* 6C */ NOP, /* 6D */ NOP, /* 6E */ NOP, /* 6F */ op("RLD", 1),

  /* 70 */ op("IN (C)", 1), /* 71 */ op("OUT (C),0", 1), /* 72 */ op("SBC HL,SP", 1), /* 73 */ op("LD (nn),SP", 3),
  /* 74 */ NOP, /* 75 */ NOP, /* 76 */ NOP, /* 77 */ NOP,
  /* 78 */ op("IN A,(C)", 1), /* 79 */ op("OUT (C),A", 1), /* 7A */ op("ADC HL,SP", 1), /* 7B */ op("LD SP,(nn)", 3),
  /* 7C */ NOP, /* 7D */ NOP, /* 7E */ NOP, /* 7F */ NOP,

  /* 80 */ NOP, /* 81 */ NOP, /* 82 */ NOP, /* 83 */ NOP,
  /* 84 */ NOP, /* 85 */ NOP, /* 86 */ NOP, /* 87 */ NOP,
  /* 88 */ NOP, /* 89 */ NOP, /* 8A */ NOP, /* 8B */ NOP,
  /* 8C */ NOP, /* 8D */ NOP, /* 8E */ NOP, /* 8F */ NOP,

  /* 90 */ NOP, /* 91 */ NOP, /* 92 */ NOP, /* 93 */ NOP,
  /* 94 */ NOP, /* 95 */ NOP, /* 96 */ NOP, /* 97 */ NOP,
  /* 98 */ NOP, /* 99 */ NOP, /* 9A */ NOP, /* 9B */ NOP,
  /* 9C */ NOP, /* 9D */ NOP, /* 9E */ NOP, /* 9F */ NOP,

  /* A0 */ op("LDI", 1), /* A1 */ op("CPI", 1), /* A2 */ op("INI", 1), /* A3 */ op("OUTI", 1),
  /* A4 */ NOP, /* A5 */ NOP, /* A6 */ NOP, /* A7 */ NOP,
  /* A8 */ op("LDD", 1), /* A9 */ op("CPD", 1), /* AA */ op("IND", 1), /* AB */ op("OUTD", 1),
  /* AC */ NOP, /* AD */ NOP, /* AE */ NOP, /* AF */ NOP,

  /* B0 */ op("LDIR", 1), /* B1 */ op("CPIR", 1), /* B2 */ op("INIR", 1), /* B3 */ op("OTIR", 1),
  /* B4 */ NOP, /* B5 */ NOP, /* B6 */ NOP, /* B7 */ NOP,
  /* B8 */ op("LDDR", 1), /* B9 */ op("CPDR", 1), /* BA */ op("INDR", 1), /* BB */ op("OTDR", 1),
  /* BC */ NOP, /* BD */ NOP, /* BE */ NOP, /* BF */ NOP,

  /* C0 */ NOP, /* C1 */ NOP, /* C2 */ NOP, /* C3 */ NOP,
  /* C4 */ NOP, /* C5 */ NOP, /* C6 */ NOP, /* C7 */ NOP,
  /* C8 */ NOP, /* C9 */ NOP, /* CA */ NOP, /* CB */ NOP,
  /* CC */ NOP, /* CD */ NOP, /* CE */ NOP, /* CF */ NOP,

  /* D0 */ NOP, /* D1 */ NOP, /* D2 */ NOP, /* D3 */ NOP,
  /* D4 */ NOP, /* D5 */ NOP, /* D6 */ NOP, /* D7 */ NOP,
  /* D8 */ NOP, /* D9 */ NOP, /* DA */ NOP, /* DB */ NOP,
  /* DC */ NOP, /* DD */ NOP, /* DE */ NOP, /* DF */ NOP,

  /* E0 */ NOP, /* E1 */ NOP, /* E2 */ NOP, /* E3 */ NOP,
  /* E4 */ NOP, /* E5 */ NOP, /* E6 */ NOP, /* E7 */ NOP,
  /* E8 */ NOP, /* E9 */ NOP, /* EA */ NOP, /* EB */ NOP,
  /* EC */ NOP, /* ED */ NOP, /* EE */ NOP, /* EF */ NOP,

  /* F0 */ NOP, /* F1 */ NOP, /* F2 */ NOP, /* F3 */ NOP,
  /* F4 */ NOP, /* F5 */ NOP, /* F6 */ NOP, /* F7 */ NOP,
  /* F8 */ NOP, /* F9 */ NOP, /* FA */ NOP, /* FB */ NOP,
  /* FC */ NOP, /* FD */ NOP, /* FE */ NOP, /* FF */ NOP,
];

/// Opcodes following a 0xDD prefix, addressing through IX.
#[rustfmt::skip]
pub static IX_TABLE: [Entry; 256] = [
  /* 00 */ NOP, /* 01 */ NOP, /* 02 */ NOP, /* 03 */ NOP,
  /* 04 */ NOP, /* 05 */ NOP, /* 06 */ NOP, /* 07 */ NOP,
  /* 08 */ NOP, /* 09 */ op("ADD IX,BC", 1), /* 0A */ NOP, /* 0B */ NOP,
  /* 0C */ NOP, /* 0D */ NOP, /* 0E */ NOP, /* 0F */ NOP,

  /* 10 */ NOP, /* 11 */ NOP, /* 12 */ NOP, /* 13 */ NOP,
  /* 14 */ NOP, /* 15 */ NOP, /* 16 */ NOP, /* 17 */ NOP,
  /* 18 */ NOP, /* 19 */ op("ADD IX,DE", 1), /* 1A */ NOP, /* 1B */ NOP,
  /* 1C */ NOP, /* 1D */ NOP, /* 1E */ NOP, /* 1F */ NOP,

  /* 20 */ NOP, /* 21 */ op("LD IX,nn", 3), /* 22 */ op("LD (nn),IX", 3), /* 23 */ op("INC IX", 1),
  /* 24 */ NOP, /* 25 */ NOP, /* 26 */ NOP, /* 27 */ NOP,
  /* 28 */ NOP, /* 29 */ op("ADD IX,IX", 1), /* 2A */ op("LD IX,(nn)", 3), /* 2B */ op("DEC IX", 1),
  /* 2C */ NOP, /* 2D */ NOP, /* 2E */ NOP, /* 2F */ NOP,

  /* 30 */ NOP, /* 31 */ NOP, /* 32 */ NOP, /* 33 */ NOP,
  /* 34 */ op("INC (IX+d)", 2), /* 35 */ op("DEC (IX+d)", 2), /* 36 */ op("LD (IX+d),n", 3), /* 37 */ NOP,
  /* 38 */ NOP, /* 39 */ op("ADD IX,SP", 1), /* 3A */ NOP, /* 3B */ NOP,
  /* 3C */ NOP, /* 3D */ NOP, /* 3E */ NOP, /* 3F */ NOP,

  /* 40 */ NOP, /* 41 */ NOP, /* 42 */ NOP, /* 43 */ NOP,
  /* 44 */ NOP, /* 45 */ NOP, /* 46 */ op("LD B,(IX+d)", 2), /* 47 */ NOP,
  /* 48 */ NOP, /* 49 */ NOP, /* 4A */ NOP, /* 4B */ NOP,
  /* 4C */ NOP, /* 4D */ NOP, /* 4E */ op("LD C,(IX+d)", 2), /* 4F */ NOP,

  /* 50 */ NOP, /* 51 */ NOP, /* 52 */ NOP, /* 53 */ NOP,
  /* 54 */ NOP, /* 55 */ NOP, /* 56 */ op("LD D,(IX+d)", 2), /* 57 */ NOP,
  /* 58 */ NOP, /* 59 */ NOP, /* 5A */ NOP, /* 5B */ NOP,
  /* 5C */ NOP, /* 5D */ NOP, /* 5E */ op("LD E,(IX+d)", 2), /* 5F */ NOP,

  /* 60 */ NOP, /* 61 */ NOP, /* 62 */ NOP, /* 63 */ NOP,
  /* 64 */ NOP, /* 65 */ NOP, /* 66 */ op("LD H,(IX+d)", 2), /* 67 */ NOP,
  /* 68 */ NOP, /* 69 */ NOP, /* 6A */ NOP, /* 6B */ NOP,
  /* 6C */ NOP, /* 6D */ NOP, /* 6E */ op("LD L,(IX+d)", 2), /* 6F */ NOP,

  /* 70 */ op("LD (IX+d),B", 2), /* 71 */ op("LD (IX+d),C", 2), /* 72 */ op("LD (IX+d),D", 2), /* 73 */ op("LD (IX+d),E", 2),
  /* 74 */ op("LD (IX+d),H", 2), /* 75 */ op("LD (IX+d),L", 2), /* 76 */ NOP, /* 77 */ op("LD (IX+d),A", 2),
  /* 78 */ NOP, /* 79 */ NOP, /* 7A */ NOP, /* 7B */ NOP,
  /* 7C */ NOP, /* 7D */ NOP, /* 7E */ op("LD A,(IX+d)", 2), /* 7F */ NOP,

  /* 80 */ NOP, /* 81 */ NOP, /* 82 */ NOP, /* 83 */ NOP,
  /* 84 */ NOP, /* 85 */ NOP, /* 86 */ op("ADD A,(IX+d)", 2), /* 87 */ NOP,
  /* 88 */ NOP, /* 89 */ NOP, /* 8A */ NOP, /* 8B */ NOP,
  /* 8C */ NOP, /* 8D */ NOP, /* 8E */ op("ADC A,(IX+d)", 2), /* 8F */ NOP,

  /* 90 */ NOP, /* 91 */ NOP, /* 92 */ NOP, /* 93 */ NOP,
  /* 94 */ NOP, /* 95 */ NOP, /* 96 */ op("SUB (IX+d)", 2), /* 97 */ NOP,
  /* 98 */ NOP, /* 99 */ NOP, /* 9A */ NOP, /* 9B */ NOP,
  /* 9C */ NOP, /* 9D */ NOP, /* 9E */ op("SBC A,(IX+d)", 2), /* 9F */ NOP,

  /* A0 */ NOP, /* A1 */ NOP, /* A2 */ NOP, /* A3 */ NOP,
  /* A4 */ NOP, /* A5 */ NOP, /* A6 */ op("AND (IX+d)", 2), /* A7 */ NOP,
  /* A8 */ NOP, /* A9 */ NOP, /* AA */ NOP, /* AB */ NOP,
  /* AC */ NOP, /* AD */ NOP, /* AE */ op("XOR (IX+d)", 2), /* AF */ NOP,

  /* B0 */ NOP, /* B1 */ NOP, /* B2 */ NOP, /* B3 */ NOP,
  /* B4 */ NOP, /* B5 */ NOP, /* B6 */ op("OR (IX+d)", 2), /* B7 */ NOP,
  /* B8 */ NOP, /* B9 */ NOP, /* BA */ NOP, /* BB */ NOP,
  /* BC */ NOP, /* BD */ NOP, /* BE */ op("CP (IX+d)", 2), /* BF */ NOP,

  /* C0 */ NOP, /* C1 */ NOP, /* C2 */ NOP, /* C3 */ NOP,
  /* C4 */ NOP, /* C5 */ NOP, /* C6 */ NOP, /* C7 */ NOP,
  /* C8 */ NOP, /* C9 */ NOP, /* CA */ NOP, /* CB */ TO_IX_BIT,
  /* CC */ NOP, /* CD */ NOP, /* CE */ NOP, /* CF */ NOP,

  /* D0 */ NOP, /* D1 */ NOP, /* D2 */ NOP, /* D3 */ NOP,
  /* D4 */ NOP, /* D5 */ NOP, /* D6 */ NOP, /* D7 */ NOP,
  /* D8 */ NOP, /* D9 */ NOP, /* DA */ NOP, /* DB */ NOP,
  /* DC */ NOP, /* DD */ NOP, /* DE */ NOP, /* DF */ NOP,

  /* E0 */ NOP, /* E1 */ op("POP IX", 1), /* E2 */ NOP, /* E3 */ op("EX (SP),IX", 1),
  /* E4 */ NOP, /* E5 */ op("PUSH IX", 1), /* E6 */ NOP, /* E7 */ NOP,
  /* E8 */ NOP, /* E9 */ op("JP (IX)", 1), /* EA */ NOP, /* EB */ NOP,
  /* EC */ NOP, /* ED */ NOP, /* EE */ NOP, /* EF */ NOP,

  /* F0 */ NOP, /* F1 */ NOP, /* F2 */ NOP, /* F3 */ NOP,
  /* F4 */ NOP, /* F5 */ NOP, /* F6 */ NOP, /* F7 */ NOP,
  /* F8 */ NOP, /* F9 */ op("LD SP,IX", 1), /* FA */ NOP, /* FB */ NOP,
  /* FC */ NOP, /* FD */ NOP, /* FE */ NOP, /* FF */ NOP,
];

/// Opcodes following a 0xFD prefix, addressing through IY.
#[rustfmt::skip]
pub static IY_TABLE: [Entry; 256] = [
  /* 00 */ NOP, /* 01 */ NOP, /* 02 */ NOP, /* 03 */ NOP,
  /* 04 */ NOP, /* 05 */ NOP, /* 06 */ NOP, /* 07 */ NOP,
  /* 08 */ NOP, /* 09 */ op("ADD IY,BC", 1), /* 0A */ NOP, /* 0B */ NOP,
  /* 0C */ NOP, /* 0D */ NOP, /* 0E */ NOP, /* 0F */ NOP,

  /* 10 */ NOP, /* 11 */ NOP, /* 12 */ NOP, /* 13 */ NOP,
  /* 14 */ NOP, /* 15 */ NOP, /* 16 */ NOP, /* 17 */ NOP,
  /* 18 */ NOP, /* 19 */ op("ADD IY,DE", 1), /* 1A */ NOP, /* 1B */ NOP,
  /* 1C */ NOP, /* 1D */ NOP, /* 1E */ NOP, /* 1F */ NOP,

  /* 20 */ NOP, /* 21 */ op("LD IY,nn", 3), /* 22 */ op("LD (nn),IY", 3), /* 23 */ op("INC IY", 1),
  /* 24 */ NOP, /* 25 */ NOP, /* 26 */ NOP, /* 27 */ NOP,
  /* 28 */ NOP, /* 29 */ op("ADD IY,IY", 1), /* 2A */ op("LD IY,(nn)", 3), /* 2B */ op("DEC IY", 1),
  /* 2C */ NOP, /* 2D */ NOP, /* 2E */ NOP, /* 2F */ NOP,

  /* 30 */ NOP, /* 31 */ NOP, /* 32 */ NOP, /* 33 */ NOP,
  /* 34 */ op("INC (IY+d)", 2), /* 35 */ op("DEC (IY+d)", 2), /* 36 */ op("LD (IY+d),n", 3), /* 37 */ NOP,
  /* 38 */ NOP, /* 39 */ op("ADD IY,SP", 1), /* 3A */ NOP, /* 3B */ NOP,
  /* 3C */ NOP, /* 3D */ NOP, /* 3E */ NOP, /* 3F */ NOP,

  /* 40 */ NOP, /* 41 */ NOP, /* 42 */ NOP, /* 43 */ NOP,
  /* 44 */ NOP, /* 45 */ NOP, /* 46 */ op("LD B,(IY+d)", 2), /* 47 */ NOP,
  /* 48 */ NOP, /* 49 */ NOP, /* 4A */ NOP, /* 4B */ NOP,
  /* 4C */ NOP, /* 4D */ NOP, /* 4E */ op("LD C,(IY+d)", 2), /* 4F */ NOP,

  /* 50 */ NOP, /* 51 */ NOP, /* 52 */ NOP, /* 53 */ NOP,
  /* 54 */ NOP, /* 55 */ NOP, /* 56 */ op("LD D,(IY+d)", 2), /* 57 */ NOP,
  /* 58 */ NOP, /* 59 */ NOP, /* 5A */ NOP, /* 5B */ NOP,
  /* 5C */ NOP, /* 5D */ NOP, /* 5E */ op("LD E,(IY+d)", 2), /* 5F */ NOP,

  /* 60 */ NOP, /* 61 */ NOP, /* 62 */ NOP, /* 63 */ NOP,
  /* 64 */ NOP, /* 65 */ NOP, /* 66 */ op("LD H,(IY+d)", 2), /* 67 */ NOP,
  /* 68 */ NOP, /* 69 */ NOP, /* 6A */ NOP, /* 6B */ NOP,
  /* 6C */ NOP, /* 6D */ NOP, /* 6E */ op("LD L,(IY+d)", 2), /* 6F */ NOP,

  /* 70 */ op("LD (IY+d),B", 2), /* 71 */ op("LD (IY+d),C", 2), /* 72 */ op("LD (IY+d),D", 2), /* 73 */ op("LD (IY+d),E", 2),
  /* 74 */ op("LD (IY+d),H", 2), /* 75 */ op("LD (IY+d),L", 2), /* 76 */ NOP, /* 77 */ op("LD (IY+d),A", 2),
  /* 78 */ NOP, /* 79 */ NOP, /* 7A */ NOP, /* 7B */ NOP,
  /* 7C */ NOP, /* 7D */ NOP, /* 7E */ op("LD A,(IY+d)", 2), /* 7F */ NOP,

  /* 80 */ NOP, /* 81 */ NOP, /* 82 */ NOP, /* 83 */ NOP,
  /* 84 */ NOP, /* 85 */ NOP, /* 86 */ op("ADD A,(IY+d)", 2), /* 87 */ NOP,
  /* 88 */ NOP, /* 89 */ NOP, /* 8A */ NOP, /* 8B */ NOP,
  /* 8C */ NOP, /* 8D */ NOP, /* 8E */ op("ADC A,(IY+d)", 2), /* 8F */ NOP,

  /* 90 */ NOP, /* 91 */ NOP, /* 92 */ NOP, /* 93 */ NOP,
  /* 94 */ NOP, /* 95 */ NOP, /* 96 */ op("SUB (IY+d)", 2), /* 97 */ NOP,
  /* 98 */ NOP, /* 99 */ NOP, /* 9A */ NOP, /* 9B */ NOP,
  /* 9C */ NOP, /* 9D */ NOP, /* 9E */ op("SBC A,(IY+d)", 2), /* 9F */ NOP,

  /* A0 */ NOP, /* A1 */ NOP, /* A2 */ NOP, /* A3 */ NOP,
  /* A4 */ NOP, /* A5 */ NOP, /* A6 */ op("AND (IY+d)", 2), /* A7 */ NOP,
  /* A8 */ NOP, /* A9 */ NOP, /* AA */ NOP, /* AB */ NOP,
  /* AC */ NOP, /* AD */ NOP, /* AE */ op("XOR (IY+d)", 2), /* AF */ NOP,

  /* B0 */ NOP, /* B1 */ NOP, /* B2 */ NOP, /* B3 */ NOP,
  /* B4 */ NOP, /* B5 */ NOP, /* B6 */ op("OR (IY+d)", 2), /* B7 */ NOP,
  /* B8 */ NOP, /* B9 */ NOP, /* BA */ NOP, /* BB */ NOP,
  /* BC */ NOP, /* BD */ NOP, /* BE */ op("CP (IY+d)", 2), /* BF */ NOP,

  /* C0 */ NOP, /* C1 */ NOP, /* C2 */ NOP, /* C3 */ NOP,
  /* C4 */ NOP, /* C5 */ NOP, /* C6 */ NOP, /* C7 */ NOP,
  /* C8 */ NOP, /* C9 */ NOP, /* CA */ NOP, /* CB */ TO_IY_BIT,
  /* CC */ NOP, /* CD */ NOP, /* CE */ NOP, /* CF */ NOP,

  /* D0 */ NOP, /* D1 */ NOP, /* D2 */ NOP, /* D3 */ NOP,
  /* D4 */ NOP, /* D5 */ NOP, /* D6 */ NOP, /* D7 */ NOP,
  /* D8 */ NOP, /* D9 */ NOP, /* DA */ NOP, /* DB */ NOP,
  /* DC */ NOP, /* DD */ NOP, /* DE */ NOP, /* DF */ NOP,

  /* E0 */ NOP, /* E1 */ op("POP IY", 1), /* E2 */ NOP, /* E3 */ op("EX (SP),IY", 1),
  /* E4 */ NOP, /* E5 */ op("PUSH IY", 1), /* E6 */ NOP, /* E7 */ NOP,
  /* E8 */ NOP, /* E9 */ op("JP (IY)", 1), /* EA */ NOP, /* EB */ NOP,
  /* EC */ NOP, /* ED */ NOP, /* EE */ NOP, /* EF */ NOP,

  /* F0 */ NOP, /* F1 */ NOP, /* F2 */ NOP, /* F3 */ NOP,
  /* F4 */ NOP, /* F5 */ NOP, /* F6 */ NOP, /* F7 */ NOP,
  /* F8 */ NOP, /* F9 */ op("LD SP,IY", 1), /* FA */ NOP, /* FB */ NOP,
  /* FC */ NOP, /* FD */ NOP, /* FE */ NOP, /* FF */ NOP,
];

/// Opcodes following `DD CB d`. Every entry spans the opcode and its
/// displacement, with the displacement placed before the opcode.
#[rustfmt::skip]
pub static IX_BIT_TABLE: [Entry; 256] = [
  /* 00 */ op("RLC (IX+d),B", 2), /* 01 */ op("RLC (IX+d),C", 2), /* 02 */ op("RLC (IX+d),D", 2), /* 03 */ op("RLC (IX+d),E", 2),
  /* 04 */ op("RLC (IX+d),H", 2), /* 05 */ op("RLC (IX+d),L", 2), /* 06 */ op("RLC (IX+d)", 2), /* 07 */ op("RLC (IX+d),A", 2),
  /* 08 */ op("RRC (IX+d),B", 2), /* 09 */ op("RRC (IX+d),C", 2), /* 0A */ op("RRC (IX+d),D", 2), /* 0B */ op("RRC (IX+d),E", 2),
  /* 0C */ op("RRC (IX+d),H", 2), /* 0D */ op("RRC (IX+d),L", 2), /* 0E */ op("RRC (IX+d)", 2), /* 0F */ op("RRC (IX+d),A", 2),

  /* 10 */ op("RL (IX+d),B", 2), /* 11 */ op("RL (IX+d),C", 2), /* 12 */ op("RL (IX+d),D", 2), /* 13 */ op("RL (IX+d),E", 2),
  /* 14 */ op("RL (IX+d),H", 2), /* 15 */ op("RL (IX+d),L", 2), /* 16 */ op("RL (IX+d)", 2), /* 17 */ op("RL (IX+d),A", 2),
  /* 18 */ op("RR (IX+d),B", 2), /* 19 */ op("RR (IX+d),C", 2), /* 1A */ op("RR (IX+d),D", 2), /* 1B */ op("RR (IX+d),E", 2),
  /* 1C */ op("RR (IX+d),H", 2), /* 1D */ op("RR (IX+d),L", 2), /* 1E */ op("RR (IX+d)", 2), /* 1F */ op("RR (IX+d),A", 2),

  /* 20 */ op("SLA (IX+d),B", 2), /* 21 */ op("SLA (IX+d),C", 2), /* 22 */ op("SLA (IX+d),D", 2), /* 23 */ op("SLA (IX+d),E", 2),
  /* 24 */ op("SLA (IX+d),H", 2), /* 25 */ op("SLA (IX+d),L", 2), /* 26 */ op("SLA (IX+d)", 2), /* 27 */ op("SLA (IX+d),A", 2),
  /* 28 */ op("SRA (IX+d),B", 2), /* 29 */ op("SRA (IX+d),C", 2), /* 2A */ op("SRA (IX+d),D", 2), /* 2B */ op("SRA (IX+d),E", 2),
  /* 2C */ op("SRA (IX+d),H", 2), /* 2D */ op("SRA (IX+d),L", 2), /* 2E */ op("SRA (IX+d)", 2), /* 2F */ op("SRA (IX+d),A", 2),

  /* 30 */ op("SLL (IX+d),B", 2), /* 31 */ op("SLL (IX+d),C", 2), /* 32 */ op("SLL (IX+d),D", 2), /* 33 */ op("SLL (IX+d),E", 2),
  /* 34 */ op("SLL (IX+d),H", 2), /* 35 */ op("SLL (IX+d),L", 2), /* 36 */ op("SLL (IX+d)", 2), /* 37 */ op("SLL (IX+d),A", 2),
  /* 38 */ op("SRL (IX+d),B", 2), /* 39 */ op("SRL (IX+d),C", 2), /* 3A */ op("SRL (IX+d),D", 2), /* 3B */ op("SRL (IX+d),E", 2),
  /* 3C */ op("SRL (IX+d),H", 2), /* 3D */ op("SRL (IX+d),L", 2), /* 3E */ op("SRL (IX+d)", 2), /* 3F */ op("SRL (IX+d),A", 2),

  /* 40 */ op("BIT 0,(IX+d)", 2), /* 41 */ op("BIT 0,(IX+d)", 2), /* 42 */ op("BIT 0,(IX+d)", 2), /* 43 */ op("BIT 0,(IX+d)", 2),
  /* 44 */ op("BIT 0,(IX+d)", 2), /* 45 */ op("BIT 0,(IX+d)", 2), /* 46 */ op("BIT 0,(IX+d)", 2), /* 47 */ op("BIT 0,(IX+d)", 2),
  /* 48 */ op("BIT 1,(IX+d)", 2), /* 49 */ op("BIT 1,(IX+d)", 2), /* 4A */ op("BIT 1,(IX+d)", 2), /* 4B */ op("BIT 1,(IX+d)", 2),
  /* 4C */ op("BIT 1,(IX+d)", 2), /* 4D */ op("BIT 1,(IX+d)", 2), /* 4E */ op("BIT 1,(IX+d)", 2), /* 4F */ op("BIT 1,(IX+d)", 2),

  /* 50 */ op("BIT 2,(IX+d)", 2), /* 51 */ op("BIT 2,(IX+d)", 2), /* 52 */ op("BIT 2,(IX+d)", 2), /* 53 */ op("BIT 2,(IX+d)", 2),
  /* 54 */ op("BIT 2,(IX+d)", 2), /* 55 */ op("BIT 2,(IX+d)", 2), /* 56 */ op("BIT 2,(IX+d)", 2), /* 57 */ op("BIT 2,(IX+d)", 2),
  /* 58 */ op("BIT 3,(IX+d)", 2), /* 59 */ op("BIT 3,(IX+d)", 2), /* 5A */ op("BIT 3,(IX+d)", 2), /* 5B */ op("BIT 3,(IX+d)", 2),
  /* 5C */ op("BIT 3,(IX+d)", 2), /* 5D */ op("BIT 3,(IX+d)", 2), /* 5E */ op("BIT 3,(IX+d)", 2), /* 5F */ op("BIT 3,(IX+d)", 2),

  /* 60 */ op("BIT 4,(IX+d)", 2), /* 61 */ op("BIT 4,(IX+d)", 2), /* 62 */ op("BIT 4,(IX+d)", 2), /* 63 */ op("BIT 4,(IX+d)", 2),
  /* 64 */ op("BIT 4,(IX+d)", 2), /* 65 */ op("BIT 4,(IX+d)", 2), /* 66 */ op("BIT 4,(IX+d)", 2), /* 67 */ op("BIT 4,(IX+d)", 2),
  /* 68 */ op("BIT 5,(IX+d)", 2), /* 69 */ op("BIT 5,(IX+d)", 2), /* 6A */ op("BIT 5,(IX+d)", 2), /* 6B */ op("BIT 5,(IX+d)", 2),
  /* 6C */ op("BIT 5,(IX+d)", 2), /* 6D */ op("BIT 5,(IX+d)", 2), /* 6E */ op("BIT 5,(IX+d)", 2), /* 6F */ op("BIT 5,(IX+d)", 2),

  /* 70 */ op("BIT 6,(IX+d)", 2), /* 71 */ op("BIT 6,(IX+d)", 2), /* 72 */ op("BIT 6,(IX+d)", 2), /* 73 */ op("BIT 6,(IX+d)", 2),
  /* 74 */ op("BIT 6,(IX+d)", 2), /* 75 */ op("BIT 6,(IX+d)", 2), /* 76 */ op("BIT 6,(IX+d)", 2), /* 77 */ op("BIT 6,(IX+d)", 2),
  /* 78 */ op("BIT 7,(IX+d)", 2), /* 79 */ op("BIT 7,(IX+d)", 2), /* 7A */ op("BIT 7,(IX+d)", 2), /* 7B */ op("BIT 7,(IX+d)", 2),
  /* 7C */ op("BIT 7,(IX+d)", 2), /* 7D */ op("BIT 7,(IX+d)", 2), /* 7E */ op("BIT 7,(IX+d)", 2), /* 7F */ op("BIT 7,(IX+d)", 2),

  /* 80 */ op("RES 0,(IX+d),B", 2), /* 81 */ op("RES 0,(IX+d),C", 2), /* 82 */ op("RES 0,(IX+d),D", 2), /* 83 */ op("RES 0,(IX+d),E", 2),
  /* 84 */ op("RES 0,(IX+d),H", 2), /* 85 */ op("RES 0,(IX+d),L", 2), /* 86 */ op("RES 0,(IX+d)", 2), /* 87 */ op("RES 0,(IX+d),A", 2),
  /* 88 */ op("RES 1,(IX+d),B", 2), /* 89 */ op("RES 1,(IX+d),C", 2), /* 8A */ op("RES 1,(IX+d),D", 2), /* 8B */ op("RES 1,(IX+d),E", 2),
  /* 8C */ op("RES 1,(IX+d),H", 2), /* 8D */ op("RES 1,(IX+d),L", 2), /* 8E */ op("RES 1,(IX+d)", 2), /* 8F */ op("RES 1,(IX+d),A", 2),

  /* 90 */ op("RES 2,(IX+d),B", 2), /* 91 */ op("RES 2,(IX+d),C", 2), /* 92 */ op("RES 2,(IX+d),D", 2), /* 93 */ op("RES 2,(IX+d),E", 2),
  /* 94 */ op("RES 2,(IX+d),H", 2), /* 95 */ op("RES 2,(IX+d),L", 2), /* 96 */ op("RES 2,(IX+d)", 2), /* 97 */ op("RES 2,(IX+d),A", 2),
  /* 98 */ op("RES 3,(IX+d),B", 2), /* 99 */ op("RES 3,(IX+d),C", 2), /* 9A */ op("RES 3,(IX+d),D", 2), /* 9B */ op("RES 3,(IX+d),E", 2),
  /* 9C */ op("RES 3,(IX+d),H", 2), /* 9D */ op("RES 3,(IX+d),L", 2), /* 9E */ op("RES 3,(IX+d)", 2), /* 9F */ op("RES 3,(IX+d),A", 2),

  /* A0 */ op("RES 4,(IX+d),B", 2), /* A1 */ op("RES 4,(IX+d),C", 2), /* A2 */ op("RES 4,(IX+d),D", 2), /* A3 */ op("RES 4,(IX+d),E", 2),
  /* A4 */ op("RES 4,(IX+d),H", 2), /* A5 */ op("RES 4,(IX+d),L", 2), /* A6 */ op("RES 4,(IX+d)", 2), /* A7 */ op("RES 4,(IX+d),A", 2),
  /* A8 */ op("RES 5,(IX+d),B", 2), /* A9 */ op("RES 5,(IX+d),C", 2), /* AA */ op("RES 5,(IX+d),D", 2), /* AB */ op("RES 5,(IX+d),E", 2),
  /* AC */ op("RES 5,(IX+d),H", 2), /* AD */ op("RES 5,(IX+d),L", 2), /* AE */ op("RES 5,(IX+d)", 2), /* AF */ op("RES 5,(IX+d),A", 2),

  /* B0 */ op("RES 6,(IX+d),B", 2), /* B1 */ op("RES 6,(IX+d),C", 2), /* B2 */ op("RES 6,(IX+d),D", 2), /* B3 */ op("RES 6,(IX+d),E", 2),
  /* B4 */ op("RES 6,(IX+d),H", 2), /* B5 */ op("RES 6,(IX+d),L", 2), /* B6 */ op("RES 6,(IX+d)", 2), /* B7 */ op("RES 6,(IX+d),A", 2),
  /* B8 */ op("RES 7,(IX+d),B", 2), /* B9 */ op("RES 7,(IX+d),C", 2), /* BA */ op("RES 7,(IX+d),D", 2), /* BB */ op("RES 7,(IX+d),E", 2),
  /* BC */ op("RES 7,(IX+d),H", 2), /* BD */ op("RES 7,(IX+d),L", 2), /* BE */ op("RES 7,(IX+d)", 2), /* BF */ op("RES 7,(IX+d),A", 2),

  /* C0 */ op("SET 0,(IX+d),B", 2), /* C1 */ op("SET 0,(IX+d),C", 2), /* C2 */ op("SET 0,(IX+d),D", 2), /* C3 */ op("SET 0,(IX+d),E", 2),
  /* C4 */ op("SET 0,(IX+d),H", 2), /* C5 */ op("SET 0,(IX+d),L", 2), /* C6 */ op("SET 0,(IX+d)", 2), /* C7 */ op("SET 0,(IX+d),A", 2),
  /* C8 */ op("SET 1,(IX+d),B", 2), /* C9 */ op("SET 1,(IX+d),C", 2), /* CA */ op("SET 1,(IX+d),D", 2), /* CB */ op("SET 1,(IX+d),E", 2),
  /* CC */ op("SET 1,(IX+d),H", 2), /* CD */ op("SET 1,(IX+d),L", 2), /* CE */ op("SET 1,(IX+d)", 2), /* CF */ op("SET 1,(IX+d),A", 2),

  /* D0 */ op("SET 2,(IX+d),B", 2), /* D1 */ op("SET 2,(IX+d),C", 2), /* D2 */ op("SET 2,(IX+d),D", 2), /* D3 */ op("SET 2,(IX+d),E", 2),
  /* D4 */ op("SET 2,(IX+d),H", 2), /* D5 */ op("SET 2,(IX+d),L", 2), /* D6 */ op("SET 2,(IX+d)", 2), /* D7 */ op("SET 2,(IX+d),A", 2),
  /* D8 */ op("SET 3,(IX+d),B", 2), /* D9 */ op("SET 3,(IX+d),C", 2), /* DA */ op("SET 3,(IX+d),D", 2), /* DB */ op("SET 3,(IX+d),E", 2),
  /* DC */ op("SET 3,(IX+d),H", 2), /* DD */ op("SET 3,(IX+d),L", 2), /* DE */ op("SET 3,(IX+d)", 2), /* DF */ op("SET 3,(IX+d),A", 2),

  /* E0 */ op("SET 4,(IX+d),B", 2), /* E1 */ op("SET 4,(IX+d),C", 2), /* E2 */ op("SET 4,(IX+d),D", 2), /* E3 */ op("SET 4,(IX+d),E", 2),
  /* E4 */ op("SET 4,(IX+d),H", 2), /* E5 */ op("SET 4,(IX+d),L", 2), /* E6 */ op("SET 4,(IX+d)", 2), /* E7 */ op("SET 4,(IX+d),A", 2),
  /* E8 */ op("SET 5,(IX+d),B", 2), /* E9 */ op("SET 5,(IX+d),C", 2), /* EA */ op("SET 5,(IX+d),D", 2), /* EB */ op("SET 5,(IX+d),E", 2),
  /* EC */ op("SET 5,(IX+d),H", 2), /* ED */ op("SET 5,(IX+d),L", 2), /* EE */ op("SET 5,(IX+d)", 2), /* EF */ op("SET 5,(IX+d),A", 2),

  /* F0 */ op("SET 6,(IX+d),B", 2), /* F1 */ op("SET 6,(IX+d),C", 2), /* F2 */ op("SET 6,(IX+d),D", 2), /* F3 */ op("SET 6,(IX+d),E", 2),
  /* F4 */ op("SET 6,(IX+d),H", 2), /* F5 */ op("SET 6,(IX+d),L", 2), /* F6 */ op("SET 6,(IX+d)", 2), /* F7 */ op("SET 6,(IX+d),A", 2),
  /* F8 */ op("SET 7,(IX+d),B", 2), /* F9 */ op("SET 7,(IX+d),C", 2), /* FA */ op("SET 7,(IX+d),D", 2), /* FB */ op("SET 7,(IX+d),E", 2),
  /* FC */ op("SET 7,(IX+d),H", 2), /* FD */ op("SET 7,(IX+d),L", 2), /* FE */ op("SET 7,(IX+d)", 2), /* FF */ op("SET 7,(IX+d),A", 2),
];

/// Opcodes following `FD CB d`. Same layout as [`IX_BIT_TABLE`].
#[rustfmt::skip]
pub static IY_BIT_TABLE: [Entry; 256] = [
  /* 00 */ op("RLC (IY+d),B", 2), /* 01 */ op("RLC (IY+d),C", 2), /* 02 */ op("RLC (IY+d),D", 2), /* 03 */ op("RLC (IY+d),E", 2),
  /* 04 */ op("RLC (IY+d),H", 2), /* 05 */ op("RLC (IY+d),L", 2), /* 06 */ op("RLC (IY+d)", 2), /* 07 */ op("RLC (IY+d),A", 2),
  /* 08 */ op("RRC (IY+d),B", 2), /* 09 */ op("RRC (IY+d),C", 2), /* 0A */ op("RRC (IY+d),D", 2), /* 0B */ op("RRC (IY+d),E", 2),
  /* 0C */ op("RRC (IY+d),H", 2), /* 0D */ op("RRC (IY+d),L", 2), /* 0E */ op("RRC (IY+d)", 2), /* 0F */ op("RRC (IY+d),A", 2),

  /* 10 */ op("RL (IY+d),B", 2), /* 11 */ op("RL (IY+d),C", 2), /* 12 */ op("RL (IY+d),D", 2), /* 13 */ op("RL (IY+d),E", 2),
  /* 14 */ op("RL (IY+d),H", 2), /* 15 */ op("RL (IY+d),L", 2), /* 16 */ op("RL (IY+d)", 2), /* 17 */ op("RL (IY+d),A", 2),
  /* 18 */ op("RR (IY+d),B", 2), /* 19 */ op("RR (IY+d),C", 2), /* 1A */ op("RR (IY+d),D", 2), /* 1B */ op("RR (IY+d),E", 2),
  /* 1C */ op("RR (IY+d),H", 2), /* 1D */ op("RR (IY+d),L", 2), /* 1E */ op("RR (IY+d)", 2), /* 1F */ op("RR (IY+d),A", 2),

  /* 20 */ op("SLA (IY+d),B", 2), /* 21 */ op("SLA (IY+d),C", 2), /* 22 */ op("SLA (IY+d),D", 2), /* 23 */ op("SLA (IY+d),E", 2),
  /* 24 */ op("SLA (IY+d),H", 2), /* 25 */ op("SLA (IY+d),L", 2), /* 26 */ op("SLA (IY+d)", 2), /* 27 */ op("SLA (IY+d),A", 2),
  /* 28 */ op("SRA (IY+d),B", 2), /* 29 */ op("SRA (IY+d),C", 2), /* 2A */ op("SRA (IY+d),D", 2), /* 2B */ op("SRA (IY+d),E", 2),
  /* 2C */ op("SRA (IY+d),H", 2), /* 2D */ op("SRA (IY+d),L", 2), /* 2E */ op("SRA (IY+d)", 2), /* 2F */ op("SRA (IY+d),A", 2),

  /* 30 */ op("SLL (IY+d),B", 2), /* 31 */ op("SLL (IY+d),C", 2), /* 32 */ op("SLL (IY+d),D", 2), /* 33 */ op("SLL (IY+d),E", 2),
  /* 34 */ op("SLL (IY+d),H", 2), /* 35 */ op("SLL (IY+d),L", 2), /* 36 */ op("SLL (IY+d)", 2), /* 37 */ op("SLL (IY+d),A", 2),
  /* 38 */ op("SRL (IY+d),B", 2), /* 39 */ op("SRL (IY+d),C", 2), /* 3A */ op("SRL (IY+d),D", 2), /* 3B */ op("SRL (IY+d),E", 2),
  /* 3C */ op("SRL (IY+d),H", 2), /* 3D */ op("SRL (IY+d),L", 2), /* 3E */ op("SRL (IY+d)", 2), /* 3F */ op("SRL (IY+d),A", 2),

  /* 40 */ op("BIT 0,(IY+d)", 2), /* 41 */ op("BIT 0,(IY+d)", 2), /* 42 */ op("BIT 0,(IY+d)", 2), /* 43 */ op("BIT 0,(IY+d)", 2),
  /* 44 */ op("BIT 0,(IY+d)", 2), /* 45 */ op("BIT 0,(IY+d)", 2), /* 46 */ op("BIT 0,(IY+d)", 2), /* 47 */ op("BIT 0,(IY+d)", 2),
  /* 48 */ op("BIT 1,(IY+d)", 2), /* 49 */ op("BIT 1,(IY+d)", 2), /* 4A */ op("BIT 1,(IY+d)", 2), /* 4B */ op("BIT 1,(IY+d)", 2),
  /* 4C */ op("BIT 1,(IY+d)", 2), /* 4D */ op("BIT 1,(IY+d)", 2), /* 4E */ op("BIT 1,(IY+d)", 2), /* 4F */ op("BIT 1,(IY+d)", 2),

  /* 50 */ op("BIT 2,(IY+d)", 2), /* 51 */ op("BIT 2,(IY+d)", 2), /* 52 */ op("BIT 2,(IY+d)", 2), /* 53 */ op("BIT 2,(IY+d)", 2),
  /* 54 */ op("BIT 2,(IY+d)", 2), /* 55 */ op("BIT 2,(IY+d)", 2), /* 56 */ op("BIT 2,(IY+d)", 2), /* 57 */ op("BIT 2,(IY+d)", 2),
  /* 58 */ op("BIT 3,(IY+d)", 2), /* 59 */ op("BIT 3,(IY+d)", 2), /* 5A */ op("BIT 3,(IY+d)", 2), /* 5B */ op("BIT 3,(IY+d)", 2),
  /* 5C */ op("BIT 3,(IY+d)", 2), /* 5D */ op("BIT 3,(IY+d)", 2), /* 5E */ op("BIT 3,(IY+d)", 2), /* 5F */ op("BIT 3,(IY+d)", 2),

  /* 60 */ op("BIT 4,(IY+d)", 2), /* 61 */ op("BIT 4,(IY+d)", 2), /* 62 */ op("BIT 4,(IY+d)", 2), /* 63 */ op("BIT 4,(IY+d)", 2),
  /* 64 */ op("BIT 4,(IY+d)", 2), /* 65 */ op("BIT 4,(IY+d)", 2), /* 66 */ op("BIT 4,(IY+d)", 2), /* 67 */ op("BIT 4,(IY+d)", 2),
  /* 68 */ op("BIT 5,(IY+d)", 2), /* 69 */ op("BIT 5,(IY+d)", 2), /* 6A */ op("BIT 5,(IY+d)", 2), /* 6B */ op("BIT 5,(IY+d)", 2),
  /* 6C */ op("BIT 5,(IY+d)", 2), /* 6D */ op("BIT 5,(IY+d)", 2), /* 6E */ op("BIT 5,(IY+d)", 2), /* 6F */ op("BIT 5,(IY+d)", 2),

  /* 70 */ op("BIT 6,(IY+d)", 2), /* 71 */ op("BIT 6,(IY+d)", 2), /* 72 */ op("BIT 6,(IY+d)", 2), /* 73 */ op("BIT 6,(IY+d)", 2),
  /* 74 */ op("BIT 6,(IY+d)", 2), /* 75 */ op("BIT 6,(IY+d)", 2), /* 76 */ op("BIT 6,(IY+d)", 2), /* 77 */ op("BIT 6,(IY+d)", 2),
  /* 78 */ op("BIT 7,(IY+d)", 2), /* 79 */ op("BIT 7,(IY+d)", 2), /* 7A */ op("BIT 7,(IY+d)", 2), /* 7B */ op("BIT 7,(IY+d)", 2),
  /* 7C */ op("BIT 7,(IY+d)", 2), /* 7D */ op("BIT 7,(IY+d)", 2), /* 7E */ op("BIT 7,(IY+d)", 2), /* 7F */ op("BIT 7,(IY+d)", 2),

  /* 80 */ op("RES 0,(IY+d),B", 2), /* 81 */ op("RES 0,(IY+d),C", 2), /* 82 */ op("RES 0,(IY+d),D", 2), /* 83 */ op("RES 0,(IY+d),E", 2),
  /* 84 */ op("RES 0,(IY+d),H", 2), /* 85 */ op("RES 0,(IY+d),L", 2), /* 86 */ op("RES 0,(IY+d)", 2), /* 87 */ op("RES 0,(IY+d),A", 2),
  /* 88 */ op("RES 1,(IY+d),B", 2), /* 89 */ op("RES 1,(IY+d),C", 2), /* 8A */ op("RES 1,(IY+d),D", 2), /* 8B */ op("RES 1,(IY+d),E", 2),
  /* 8C */ op("RES 1,(IY+d),H", 2), /* 8D */ op("RES 1,(IY+d),L", 2), /* 8E */ op("RES 1,(IY+d)", 2), /* 8F */ op("RES 1,(IY+d),A", 2),

  /* 90 */ op("RES 2,(IY+d),B", 2), /* 91 */ op("RES 2,(IY+d),C", 2), /* 92 */ op("RES 2,(IY+d),D", 2), /* 93 */ op("RES 2,(IY+d),E", 2),
  /* 94 */ op("RES 2,(IY+d),H", 2), /* 95 */ op("RES 2,(IY+d),L", 2), /* 96 */ op("RES 2,(IY+d)", 2), /* 97 */ op("RES 2,(IY+d),A", 2),
  /* 98 */ op("RES 3,(IY+d),B", 2), /* 99 */ op("RES 3,(IY+d),C", 2), /* 9A */ op("RES 3,(IY+d),D", 2), /* 9B */ op("RES 3,(IY+d),E", 2),
  /* 9C */ op("RES 3,(IY+d),H", 2), /* 9D */ op("RES 3,(IY+d),L", 2), /* 9E */ op("RES 3,(IY+d)", 2), /* 9F */ op("RES 3,(IY+d),A", 2),

  /* A0 */ op("RES 4,(IY+d),B", 2), /* A1 */ op("RES 4,(IY+d),C", 2), /* A2 */ op("RES 4,(IY+d),D", 2), /* A3 */ op("RES 4,(IY+d),E", 2),
  /* A4 */ op("RES 4,(IY+d),H", 2), /* A5 */ op("RES 4,(IY+d),L", 2), /* A6 */ op("RES 4,(IY+d)", 2), /* A7 */ op("RES 4,(IY+d),A", 2),
  /* A8 */ op("RES 5,(IY+d),B", 2), /* A9 */ op("RES 5,(IY+d),C", 2), /* AA */ op("RES 5,(IY+d),D", 2), /* AB */ op("RES 5,(IY+d),E", 2),
  /* AC */ op("RES 5,(IY+d),H", 2), /* AD */ op("RES 5,(IY+d),L", 2), /* AE */ op("RES 5,(IY+d)", 2), /* AF */ op("RES 5,(IY+d),A", 2),

  /* B0 */ op("RES 6,(IY+d),B", 2), /* B1 */ op("RES 6,(IY+d),C", 2), /* B2 */ op("RES 6,(IY+d),D", 2), /* B3 */ op("RES 6,(IY+d),E", 2),
  /* B4 */ op("RES 6,(IY+d),H", 2), /* B5 */ op("RES 6,(IY+d),L", 2), /* B6 */ op("RES 6,(IY+d)", 2), /* B7 */ op("RES 6,(IY+d),A", 2),
  /* B8 */ op("RES 7,(IY+d),B", 2), /* B9 */ op("RES 7,(IY+d),C", 2), /* BA */ op("RES 7,(IY+d),D", 2), /* BB */ op("RES 7,(IY+d),E", 2),
  /* BC */ op("RES 7,(IY+d),H", 2), /* BD */ op("RES 7,(IY+d),L", 2), /* BE */ op("RES 7,(IY+d)", 2), /* BF */ op("RES 7,(IY+d),A", 2),

  /* C0 */ op("SET 0,(IY+d),B", 2), /* C1 */ op("SET 0,(IY+d),C", 2), /* C2 */ op("SET 0,(IY+d),D", 2), /* C3 */ op("SET 0,(IY+d),E", 2),
  /* C4 */ op("SET 0,(IY+d),H", 2), /* C5 */ op("SET 0,(IY+d),L", 2), /* C6 */ op("SET 0,(IY+d)", 2), /* C7 */ op("SET 0,(IY+d),A", 2),
  /* C8 */ op("SET 1,(IY+d),B", 2), /* C9 */ op("SET 1,(IY+d),C", 2), /* CA */ op("SET 1,(IY+d),D", 2), /* CB */ op("SET 1,(IY+d),E", 2),
  /* CC */ op("SET 1,(IY+d),H", 2), /* CD */ op("SET 1,(IY+d),L", 2), /* CE */ op("SET 1,(IY+d)", 2), /* CF */ op("SET 1,(IY+d),A", 2),

  /* D0 */ op("SET 2,(IY+d),B", 2), /* D1 */ op("SET 2,(IY+d),C", 2), /* D2 */ op("SET 2,(IY+d),D", 2), /* D3 */ op("SET 2,(IY+d),E", 2),
  /* D4 */ op("SET 2,(IY+d),H", 2), /* D5 */ op("SET 2,(IY+d),L", 2), /* D6 */ op("SET 2,(IY+d)", 2), /* D7 */ op("SET 2,(IY+d),A", 2),
  /* D8 */ op("SET 3,(IY+d),B", 2), /* D9 */ op("SET 3,(IY+d),C", 2), /* DA */ op("SET 3,(IY+d),D", 2), /* DB */ op("SET 3,(IY+d),E", 2),
  /* DC */ op("SET 3,(IY+d),H", 2), /* DD */ op("SET 3,(IY+d),L", 2), /* DE */ op("SET 3,(IY+d)", 2), /* DF */ op("SET 3,(IY+d),A", 2),

  /* E0 */ op("SET 4,(IY+d),B", 2), /* E1 */ op("SET 4,(IY+d),C", 2), /* E2 */ op("SET 4,(IY+d),D", 2), /* E3 */ op("SET 4,(IY+d),E", 2),
  /* E4 */ op("SET 4,(IY+d),H", 2), /* E5 */ op("SET 4,(IY+d),L", 2), /* E6 */ op("SET 4,(IY+d)", 2), /* E7 */ op("SET 4,(IY+d),A", 2),
  /* E8 */ op("SET 5,(IY+d),B", 2), /* E9 */ op("SET 5,(IY+d),C", 2), /* EA */ op("SET 5,(IY+d),D", 2), /* EB */ op("SET 5,(IY+d),E", 2),
  /* EC */ op("SET 5,(IY+d),H", 2), /* ED */ op("SET 5,(IY+d),L", 2), /* EE */ op("SET 5,(IY+d)", 2), /* EF */ op("SET 5,(IY+d),A", 2),

  /* F0 */ op("SET 6,(IY+d),B", 2), /* F1 */ op("SET 6,(IY+d),C", 2), /* F2 */ op("SET 6,(IY+d),D", 2), /* F3 */ op("SET 6,(IY+d),E", 2),
  /* F4 */ op("SET 6,(IY+d),H", 2), /* F5 */ op("SET 6,(IY+d),L", 2), /* F6 */ op("SET 6,(IY+d)", 2), /* F7 */ op("SET 6,(IY+d),A", 2),
  /* F8 */ op("SET 7,(IY+d),B", 2), /* F9 */ op("SET 7,(IY+d),C", 2), /* FA */ op("SET 7,(IY+d),D", 2), /* FB */ op("SET 7,(IY+d),E", 2),
  /* FC */ op("SET 7,(IY+d),H", 2), /* FD */ op("SET 7,(IY+d),L", 2), /* FE */ op("SET 7,(IY+d)", 2), /* FF */ op("SET 7,(IY+d),A", 2),
];

#[cfg(test)]
mod tests {
  use super::*;

  const ALL_TABLES: [TableId; 7] = [
    TableId::Main,
    TableId::Bit,
    TableId::Misc,
    TableId::Ix,
    TableId::Iy,
    TableId::IxBit,
    TableId::IyBit,
  ];

  fn prefixes(table: TableId) -> Vec<(u8, TableId)> {
    (0..=255u8)
      .filter_map(|b| match lookup(table, b) {
        Entry::Prefix(next) => Some((b, next)),
        Entry::Instr(_) => None,
      })
      .collect()
  }

  #[test]
  fn test_main_prefixes() {
    assert_eq!(
      prefixes(TableId::Main),
      vec![
        (0xcb, TableId::Bit),
        (0xdd, TableId::Ix),
        (0xed, TableId::Misc),
        (0xfd, TableId::Iy),
      ]
    );
  }

  #[test]
  fn test_index_prefixes() {
    assert_eq!(prefixes(TableId::Ix), vec![(0xcb, TableId::IxBit)]);
    assert_eq!(prefixes(TableId::Iy), vec![(0xcb, TableId::IyBit)]);
    for table in [TableId::Bit, TableId::Misc, TableId::IxBit, TableId::IyBit] {
      assert!(prefixes(table).is_empty(), "{:?} has prefix entries", table);
    }
  }

  #[test]
  fn test_sizes_in_range() {
    for table in ALL_TABLES {
      for b in 0..=255u8 {
        if let Entry::Instr(entry) = lookup(table, b) {
          assert!(
            (1..=3).contains(&entry.size),
            "{:?}[{:02x}] {} has size {}",
            table,
            b,
            entry.name,
            entry.size
          );
          assert!(!entry.name.is_empty());
          assert!(!entry.name.contains(", "), "{}", entry.name);
        }
      }
    }
  }

  #[test]
  fn test_bit_tables_fixed_size() {
    for b in 0..=255u8 {
      match lookup(TableId::Bit, b) {
        Entry::Instr(entry) => assert_eq!(entry.size, 1),
        Entry::Prefix(_) => panic!("unexpected prefix"),
      }
      for table in [TableId::IxBit, TableId::IyBit] {
        match lookup(table, b) {
          Entry::Instr(entry) => assert_eq!(entry.size, 2),
          Entry::Prefix(_) => panic!("unexpected prefix"),
        }
      }
    }
  }

  #[test]
  fn test_ix_iy_mirror() {
    for b in 0..=255u8 {
      match (lookup(TableId::Ix, b), lookup(TableId::Iy, b)) {
        (Entry::Instr(ix), Entry::Instr(iy)) => {
          assert_eq!(ix.name.replace("IX", "IY"), iy.name);
          assert_eq!(ix.size, iy.size);
        }
        (Entry::Prefix(_), Entry::Prefix(_)) => {}
        _ => panic!("IX/IY tables disagree at {:02x}", b),
      }
    }
  }

  #[test]
  fn test_spot_checks() {
    assert_eq!(lookup(TableId::Main, 0x01), op("LD BC,nn", 3));
    assert_eq!(lookup(TableId::Main, 0x76), op("HALT", 1));
    assert_eq!(lookup(TableId::Main, 0xd3), op("OUT (n),A", 2));
    assert_eq!(lookup(TableId::Bit, 0x00), op("RLC B", 1));
    assert_eq!(lookup(TableId::Bit, 0x36), op("SLL (HL)", 1));
    assert_eq!(lookup(TableId::Bit, 0xff), op("SET 7,A", 1));
    assert_eq!(lookup(TableId::Misc, 0x43), op("LD (nn),BC", 3));
    assert_eq!(lookup(TableId::Misc, 0x6b), op("LD HL,(nn)", 3));
    assert_eq!(lookup(TableId::Misc, 0x00), NOP);
    assert_eq!(lookup(TableId::Ix, 0x96), op("SUB (IX+d)", 2));
    assert_eq!(lookup(TableId::Ix, 0x4e), op("LD C,(IX+d)", 2));
    assert_eq!(lookup(TableId::Iy, 0x36), op("LD (IY+d),n", 3));
    assert_eq!(lookup(TableId::IxBit, 0x06), op("RLC (IX+d)", 2));
    assert_eq!(lookup(TableId::IyBit, 0x7e), op("BIT 7,(IY+d)", 2));
    assert_eq!(lookup(TableId::IyBit, 0xc0), op("SET 0,(IY+d),B", 2));
  }

  #[test]
  fn test_displacement_first() {
    for table in ALL_TABLES {
      assert_eq!(
        table.displacement_first(),
        table == TableId::IxBit || table == TableId::IyBit
      );
    }
  }
}
