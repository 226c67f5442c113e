//! bpfc_codegen: Object-file emission for the BPF backend.
//!
//! Converts compiled functions and their deferred fixups into ELF
//! relocatable objects carrying the target's wire relocation codes.

pub mod emit;

#[cfg(test)]
mod tests;
