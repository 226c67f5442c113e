//! BPF wire relocation codes and the on-disk relocation record.

/// No relocation. Also the benign placeholder a dynamic loader skips.
pub const R_BPF_NONE: u32 = 0;
/// 64-bit absolute address split across an `lddw` instruction pair.
pub const R_BPF_64_64: u32 = 1;
/// 64-bit value requiring a runtime base-address adjustment.
pub const R_BPF_64_RELATIVE: u32 = 8;
/// 32-bit PC-relative displacement, in units of instruction slots.
pub const R_BPF_64_32: u32 = 10;

/// Instruction slot size in bytes. Every instruction occupies one slot;
/// `lddw` occupies two consecutive slots.
pub const INSN_SIZE: usize = 8;
/// Byte offset of the 32-bit immediate field within a slot.
pub const IMM_OFFSET: usize = 4;

/// A BPF relocation code.
///
/// Discriminants are the wire values reserved for `EM_BPF` and must stay
/// bit-exact for interoperability with existing object consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum RelocCode {
    None = R_BPF_NONE,
    Abs64 = R_BPF_64_64,
    Relative64 = R_BPF_64_RELATIVE,
    Rel32 = R_BPF_64_32,
}

impl RelocCode {
    /// The wire value emitted into relocation records.
    pub fn wire(self) -> u32 {
        self as u32
    }

    /// Decode a wire value. Codes outside the table are data errors the
    /// link stage reports; this returns `None` rather than guessing.
    pub fn from_wire(ty: u32) -> Option<RelocCode> {
        match ty {
            R_BPF_NONE => Some(RelocCode::None),
            R_BPF_64_64 => Some(RelocCode::Abs64),
            R_BPF_64_RELATIVE => Some(RelocCode::Relative64),
            R_BPF_64_32 => Some(RelocCode::Rel32),
            _ => None,
        }
    }
}

/// On-disk relocation record: `Elf64_Rel` with the `r_info` halves
/// unpacked.
///
/// The format has no addend field. Any positional adjustment must already
/// be baked into the instruction bytes when the record is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelRecord {
    /// Byte offset of the patch site within its section.
    pub offset: u64,
    /// Symbol table index the relocation targets.
    pub symbol: u32,
    /// Wire relocation type.
    pub ty: u32,
}

impl RelRecord {
    /// Size of one record on disk.
    pub const SIZE: usize = 16;

    /// Encode as little-endian `Elf64_Rel` bytes.
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut buf = [0u8; Self::SIZE];
        buf[..8].copy_from_slice(&self.offset.to_le_bytes());
        let info = (u64::from(self.symbol) << 32) | u64::from(self.ty);
        buf[8..].copy_from_slice(&info.to_le_bytes());
        buf
    }

    /// Decode one record from little-endian bytes. Returns `None` if the
    /// slice is shorter than [`RelRecord::SIZE`].
    pub fn parse(data: &[u8]) -> Option<RelRecord> {
        let offset = u64::from_le_bytes(data.get(..8)?.try_into().ok()?);
        let info = u64::from_le_bytes(data.get(8..16)?.try_into().ok()?);
        Some(RelRecord {
            offset,
            symbol: (info >> 32) as u32,
            ty: info as u32,
        })
    }
}
