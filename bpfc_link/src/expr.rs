//! Relocation expression classification.

use bpfc_target::reloc::RelocCode;
use bpfc_target::Symbol;

use crate::diag::{Diagnostics, LinkDiag, Location};

/// How the final value for a patch site is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelExpr {
    /// value = symbol address − patch-site address
    PcRel,
    /// value = the symbol's final resolved address
    Abs,
    /// Unrecognized code; a diagnostic was recorded. Callers skip the
    /// record and keep scanning so further errors can be batched.
    None,
}

/// Classify a wire relocation type.
///
/// The symbol is part of the target-independent classifier interface;
/// classification on this target depends only on the code.
pub fn rel_expr(ty: u32, _sym: &Symbol, loc: Location, diags: &mut Diagnostics) -> RelExpr {
    match RelocCode::from_wire(ty) {
        Some(RelocCode::Rel32) => RelExpr::PcRel,
        Some(RelocCode::Abs64) => RelExpr::Abs,
        // NONE and RELATIVE64 never reach a static patch site; anything
        // else is not in the table at all.
        Some(RelocCode::None) | Some(RelocCode::Relative64) | None => {
            diags.error(LinkDiag::UnrecognizedRelocation {
                location: loc,
                code: ty,
            });
            RelExpr::None
        }
    }
}
