//! ELF object file emission using the `object` crate.

use std::collections::HashMap;

use object::write::{
    Object, Relocation as ObjRelocation, Symbol as ObjSymbol, SymbolId, SymbolSection,
};
use object::{
    Architecture, BinaryFormat, Endianness, RelocationFlags, SymbolFlags, SymbolKind, SymbolScope,
};

use bpfc_target::fixup::{reloc_code, Fixup};
use bpfc_target::target::BpfTarget;
use bpfc_target::Symbol;

/// A compiled function ready for object file emission.
#[derive(Debug, Clone)]
pub struct CompiledFunction {
    pub name: String,
    pub code: Vec<u8>,
    /// Deferred relocation requests against the code, consumed here.
    pub fixups: Vec<Fixup>,
}

/// Emit a single function as a BPF ELF object file.
pub fn emit_elf(target: &BpfTarget, name: &str, code: &[u8], fixups: &[Fixup]) -> Vec<u8> {
    emit_elf_multi(
        target,
        &[CompiledFunction {
            name: name.to_string(),
            code: code.to_vec(),
            fixups: fixups.to_vec(),
        }],
    )
}

/// Emit multiple functions as a single BPF ELF object file.
///
/// Every fixup becomes a relocation record with the wire code chosen by
/// [`reloc_code`] and an addend of zero: the record format carries none,
/// so any positional adjustment is already in the instruction bytes.
pub fn emit_elf_multi(target: &BpfTarget, functions: &[CompiledFunction]) -> Vec<u8> {
    let mut obj = Object::new(BinaryFormat::Elf, Architecture::Bpf, Endianness::Little);
    let text = obj.section_id(object::write::StandardSection::Text);

    // Track symbol name → id and the relocation subsystem's view of the
    // symbol, so fixups can reference definitions in this same object.
    let mut sym_map: HashMap<String, (SymbolId, Symbol)> = HashMap::new();

    // Define all functions first so cross-function fixups resolve to the
    // in-object definition rather than an undefined duplicate.
    let mut offsets = Vec::with_capacity(functions.len());
    for func in functions {
        let code_offset = obj.append_section_data(text, &func.code, 8);
        offsets.push(code_offset);

        // .L-prefixed names are file-local helpers — keep them STB_LOCAL
        // so they don't collide across object files.
        let local = func.name.starts_with(".L");
        let scope = if local {
            SymbolScope::Compilation
        } else {
            SymbolScope::Linkage
        };
        let sid = obj.add_symbol(ObjSymbol {
            name: func.name.as_bytes().to_vec(),
            value: code_offset,
            size: func.code.len() as u64,
            kind: SymbolKind::Text,
            scope,
            weak: false,
            section: SymbolSection::Section(text),
            flags: SymbolFlags::None,
        });
        let view = Symbol {
            index: sym_map.len() as u32,
            // Single .text section in these objects.
            section: Some(0),
            offset: code_offset,
            is_local: local,
        };
        sym_map.insert(func.name.clone(), (sid, view));
    }

    for (func, &code_offset) in functions.iter().zip(&offsets) {
        for fixup in &func.fixups {
            let (sym_id, sym_view) = if let Some(entry) = sym_map.get(&fixup.symbol) {
                entry.clone()
            } else {
                let sid = obj.add_symbol(ObjSymbol {
                    name: fixup.symbol.as_bytes().to_vec(),
                    value: 0,
                    size: 0,
                    kind: SymbolKind::Text,
                    scope: SymbolScope::Unknown,
                    weak: false,
                    section: SymbolSection::Undefined,
                    flags: SymbolFlags::None,
                });
                let view = Symbol {
                    index: sym_map.len() as u32,
                    section: None,
                    offset: 0,
                    is_local: false,
                };
                sym_map.insert(fixup.symbol.clone(), (sid, view.clone()));
                (sid, view)
            };

            let code = reloc_code(fixup.kind);
            // Collapsing to section+offset is only sound when the
            // positional correction is already in the bytes: with no
            // addend field the record itself cannot carry it. The
            // default policy therefore keeps the symbol for every
            // record; undefined symbols have no section to collapse to
            // either way.
            let record_sym = if target.needs_reloc_with_symbol(&sym_view, code)
                || sym_view.section.is_none()
            {
                sym_id
            } else {
                obj.section_symbol(text)
            };

            obj.add_relocation(
                text,
                ObjRelocation {
                    offset: code_offset + fixup.offset,
                    symbol: record_sym,
                    addend: 0,
                    flags: RelocationFlags::Elf {
                        r_type: code.wire(),
                    },
                },
            )
            .expect("failed to add relocation");
        }
    }

    let mut buf = Vec::new();
    obj.emit(&mut buf).expect("failed to emit ELF object");
    buf
}
