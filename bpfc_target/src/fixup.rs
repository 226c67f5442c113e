//! Compiler-internal fixups and their wire relocation codes.

use crate::reloc::RelocCode;

/// A deferred relocation request shape produced during code emission.
///
/// The set is closed: the code generator can only request shapes the
/// target can represent, so the mapping to wire codes has no failure
/// path. A generator producing anything else fails to compile against
/// this enum rather than mis-encoding at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixupKind {
    /// 4-byte PC-relative (call displacement).
    PcRel4,
    /// 4-byte section-relative.
    SecRel4,
    /// 4-byte absolute data.
    Data4,
    /// 8-byte section-relative.
    SecRel8,
    /// 8-byte absolute data (lddw immediate).
    Data8,
}

/// A fixup recorded against a code buffer, consumed exactly once when
/// the object file is emitted.
#[derive(Debug, Clone)]
pub struct Fixup {
    pub kind: FixupKind,
    /// Byte offset of the patch site: the start of its instruction slot.
    pub offset: u64,
    /// The symbol the relocation targets.
    pub symbol: String,
}

/// Map a fixup kind to the relocation code emitted into the object file.
///
/// All 4-byte shapes become slot-indexed PC-relative records; all 8-byte
/// shapes become absolute `lddw`-pair records.
pub fn reloc_code(kind: FixupKind) -> RelocCode {
    match kind {
        FixupKind::PcRel4 | FixupKind::SecRel4 | FixupKind::Data4 => RelocCode::Rel32,
        FixupKind::SecRel8 | FixupKind::Data8 => RelocCode::Abs64,
    }
}
