//! Applying a section's relocation records.

use log::debug;

use bpfc_target::reloc::{RelRecord, RelocCode, INSN_SIZE};
use bpfc_target::Symbol;

use crate::diag::{Diagnostics, LinkDiag, Location};
use crate::expr::{rel_expr, RelExpr};
use crate::patch::relocate_one;

/// A symbol together with its final link-time address.
#[derive(Debug, Clone)]
pub struct Resolved {
    pub symbol: Symbol,
    pub address: u64,
}

/// Fold one section's relocation records into its bytes.
///
/// `base` is the section's final address; the patch-site address for
/// PC-relative values is `base + record.offset`. Unknown symbol indices,
/// out-of-range offsets, and unrecognized codes each record a diagnostic
/// and skip that record; the remaining records are still processed so
/// the caller can report everything at once.
///
/// The section bytes are exclusively borrowed for the duration of the
/// call; there is no shared state between records, and records with
/// non-overlapping patch regions are order-independent.
pub fn apply_relocations(
    data: &mut [u8],
    records: &[RelRecord],
    base: u64,
    resolve: impl Fn(u32) -> Option<Resolved>,
    file: &str,
    diags: &mut Diagnostics,
) {
    for rec in records {
        let loc = Location::new(file, rec.offset);

        let resolved = match resolve(rec.symbol) {
            Some(r) => r,
            None => {
                diags.error(LinkDiag::UnknownSymbol {
                    location: loc,
                    index: rec.symbol,
                });
                continue;
            }
        };

        let val = match rel_expr(rec.ty, &resolved.symbol, loc.clone(), diags) {
            RelExpr::PcRel => resolved.address.wrapping_sub(base.wrapping_add(rec.offset)),
            RelExpr::Abs => resolved.address,
            // Diagnostic already recorded by the classifier.
            RelExpr::None => continue,
        };

        // An lddw-pair relocation writes into two consecutive slots.
        let needed = match RelocCode::from_wire(rec.ty) {
            Some(RelocCode::Abs64) => 2 * INSN_SIZE,
            _ => INSN_SIZE,
        };
        let fits = rec
            .offset
            .checked_add(needed as u64)
            .is_some_and(|end| end <= data.len() as u64);
        if !fits {
            diags.error(LinkDiag::OutOfBounds {
                location: loc,
                needed,
            });
            continue;
        }

        debug!("{loc}: applying type {} value {val:#x}", rec.ty);
        relocate_one(&mut data[rec.offset as usize..], rec.ty, val, loc, diags);
    }
}
