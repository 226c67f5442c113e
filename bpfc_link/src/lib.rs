//! bpfc_link: Link-stage relocation resolution for BPF objects.
//!
//! Classifies relocation records into address-computation modes
//! ([`expr::rel_expr`]), patches resolved values into emitted instruction
//! bytes ([`patch::relocate_one`]), and folds a section's record list
//! ([`apply::apply_relocations`]). Diagnostics accumulate in a
//! caller-owned [`diag::Diagnostics`] sink; this crate never aborts, and
//! whether to stop at the first error or batch them is the caller's
//! decision. A link that recorded any diagnostic must be treated as
//! failed.

pub mod apply;
pub mod diag;
pub mod expr;
pub mod patch;
