//! Byte patching of resolved relocation values.

use bpfc_target::reloc::{RelocCode, IMM_OFFSET, INSN_SIZE};

use crate::diag::{Diagnostics, LinkDiag, Location};

/// Patch the resolved value `val` into the instruction bytes at the
/// patch site.
///
/// `insn` starts at the patch location and must cover one full slot, or
/// two for `R_BPF_64_64`; [`crate::apply::apply_relocations`] checks
/// this before calling. Values outside the representable range truncate
/// silently: the 32-bit fields keep only the low bits.
///
/// An unrecognized code records a diagnostic and writes nothing, leaving
/// the region undefined; the caller must fail the link if any diagnostic
/// was raised.
pub fn relocate_one(insn: &mut [u8], ty: u32, val: u64, loc: Location, diags: &mut Diagnostics) {
    match RelocCode::from_wire(ty) {
        Some(RelocCode::Rel32) => {
            // The displacement is measured from the instruction after the
            // call, in whole slots rather than bytes.
            let slots = val.wrapping_sub(INSN_SIZE as u64) / INSN_SIZE as u64;
            write_imm(insn, 0, slots as u32);
        }
        Some(RelocCode::Abs64) => {
            // lddw pair: low half in this slot's immediate field, high
            // half in the next slot's.
            write_imm(insn, 0, val as u32);
            write_imm(insn, 1, (val >> 32) as u32);
        }
        Some(RelocCode::None) | Some(RelocCode::Relative64) | None => {
            diags.error(LinkDiag::UnrecognizedRelocation {
                location: loc,
                code: ty,
            });
        }
    }
}

/// Write a 32-bit immediate into the immediate field of slot `slot` of
/// the patch site, little-endian.
fn write_imm(insn: &mut [u8], slot: usize, val: u32) {
    let at = slot * INSN_SIZE + IMM_OFFSET;
    insn[at..at + 4].copy_from_slice(&val.to_le_bytes());
}
