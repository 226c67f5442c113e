//! bpfc_target: Shared target definitions for the BPF backend.
//!
//! Wire relocation codes, compiler-internal fixup kinds, the on-disk
//! relocation record codec, and the per-link-job target strategy
//! ([`target::BpfTarget`]). This crate is the leaf the emission and link
//! layers both build on; it has no dependencies of its own.

pub mod fixup;
pub mod reloc;
pub mod target;


/// A symbol as seen by the relocation subsystem.
///
/// Owned by the object file's symbol table; relocation code only reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    /// Index in the object file's symbol table.
    pub index: u32,
    /// Defining section, if any (`None` for undefined symbols).
    pub section: Option<u32>,
    /// Offset of the symbol within its defining section.
    pub offset: u64,
    /// Whether the symbol has local (file-scope) binding.
    pub is_local: bool,
}
