//! Per-link-job target strategy.

use crate::reloc::RelocCode;
use crate::Symbol;

/// Decides whether a relocation record must reference its symbol
/// directly instead of collapsing to a section symbol plus offset.
pub type SymbolRelocPolicy = fn(&Symbol, RelocCode) -> bool;

/// Maps a relocation code to the code a runtime relocation table entry
/// carries for it.
pub type DynRelPolicy = fn(&BpfTarget, RelocCode) -> RelocCode;

/// How a relocation code participates in dynamic relocation tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DynRelClass {
    /// The benign no-op entry a dynamic loader skips.
    Placeholder,
    /// Requires a runtime base-address adjustment.
    Relative,
    /// Must be fully resolved at static link time.
    StaticOnly,
}

/// Target strategy for one link job.
///
/// A plain value constructed per job and passed where a policy decision
/// is needed; there is no process-wide target singleton.
#[derive(Debug, Clone)]
pub struct BpfTarget {
    /// This target's own "no relocation" code. Never borrowed from
    /// another architecture's table.
    pub none_rel: RelocCode,
    /// The runtime base-relative code.
    pub relative_rel: RelocCode,
    symbol_reloc: SymbolRelocPolicy,
    dyn_rel: DynRelPolicy,
}

impl Default for BpfTarget {
    fn default() -> Self {
        BpfTarget {
            none_rel: RelocCode::None,
            relative_rel: RelocCode::Relative64,
            symbol_reloc: force_symbol_relocation,
            dyn_rel: dyn_rel_default,
        }
    }
}

impl BpfTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Substitute the symbol-relocation policy.
    pub fn with_symbol_reloc_policy(mut self, policy: SymbolRelocPolicy) -> Self {
        self.symbol_reloc = policy;
        self
    }

    /// Substitute the dynamic-relocation policy.
    pub fn with_dyn_rel_policy(mut self, policy: DynRelPolicy) -> Self {
        self.dyn_rel = policy;
        self
    }

    /// Whether the emitted record for `sym` must reference the symbol
    /// itself.
    pub fn needs_reloc_with_symbol(&self, sym: &Symbol, code: RelocCode) -> bool {
        (self.symbol_reloc)(sym, code)
    }

    /// The code a dynamic relocation table entry carries for `code`.
    pub fn dyn_rel(&self, code: RelocCode) -> RelocCode {
        (self.dyn_rel)(self, code)
    }

    /// Classify how `code` may appear in a dynamic relocation table.
    pub fn dyn_rel_class(&self, code: RelocCode) -> DynRelClass {
        if code == self.relative_rel {
            DynRelClass::Relative
        } else if code == self.none_rel {
            DynRelClass::Placeholder
        } else {
            DynRelClass::StaticOnly
        }
    }
}

/// Default symbol policy: every relocation keeps its symbol reference.
///
/// The record format has no addend field to carry a section-relative
/// correction, so collapsing to section+offset would lose the target.
/// Keeping the symbol index lets the link stage resolve the final
/// address unambiguously.
pub fn force_symbol_relocation(_sym: &Symbol, _code: RelocCode) -> bool {
    true
}

/// Default dynamic policy: the relative code and this target's own
/// placeholder pass through; everything else, PC-relative included,
/// degrades to the placeholder.
pub fn dyn_rel_default(target: &BpfTarget, code: RelocCode) -> RelocCode {
    if code == target.relative_rel || code == target.none_rel {
        code
    } else {
        target.none_rel
    }
}
