//! Tests for BPF ELF object emission.

use object::{
    Architecture, Object as _, ObjectSection, ObjectSymbol, RelocationFlags, RelocationTarget,
};

use bpfc_target::fixup::{Fixup, FixupKind};
use bpfc_target::reloc::{R_BPF_64_32, R_BPF_64_64};
use bpfc_target::target::BpfTarget;

use crate::emit::{emit_elf, emit_elf_multi, CompiledFunction};

fn sample_fixups() -> Vec<Fixup> {
    vec![
        Fixup {
            kind: FixupKind::PcRel4,
            offset: 0,
            symbol: "helper".to_string(),
        },
        Fixup {
            kind: FixupKind::Data8,
            offset: 8,
            symbol: "map".to_string(),
        },
    ]
}

#[test]
fn emit_elf_valid() {
    let target = BpfTarget::new();
    let elf = emit_elf(&target, "prog", &[0u8; 24], &sample_fixups());

    assert_eq!(&elf[..4], b"\x7fELF");
    let file = object::File::parse(&elf[..]).expect("parse emitted object");
    assert_eq!(file.architecture(), Architecture::Bpf);
}

#[test]
fn emitted_records_carry_wire_codes() {
    let target = BpfTarget::new();
    let elf = emit_elf(&target, "prog", &[0u8; 24], &sample_fixups());
    let file = object::File::parse(&elf[..]).expect("parse emitted object");
    let text = file.section_by_name(".text").expect(".text section");

    let mut relocs: Vec<(u64, u32, i64, String)> = Vec::new();
    for (offset, reloc) in text.relocations() {
        let r_type = match reloc.flags() {
            RelocationFlags::Elf { r_type } => r_type,
            other => panic!("unexpected relocation flags: {other:?}"),
        };
        let name = match reloc.target() {
            RelocationTarget::Symbol(idx) => file
                .symbol_by_index(idx)
                .expect("relocation symbol")
                .name()
                .expect("symbol name")
                .to_string(),
            other => panic!("unexpected relocation target: {other:?}"),
        };
        relocs.push((offset, r_type, reloc.addend(), name));
    }
    relocs.sort();

    // PcRel4 → R_BPF_64_32, Data8 → R_BPF_64_64, both with no addend.
    assert_eq!(
        relocs,
        vec![
            (0, R_BPF_64_32, 0, "helper".to_string()),
            (8, R_BPF_64_64, 0, "map".to_string()),
        ]
    );
}

#[test]
fn cross_function_fixups_reuse_definitions() {
    let target = BpfTarget::new();
    let funcs = [
        CompiledFunction {
            name: "caller".to_string(),
            code: vec![0u8; 8],
            fixups: vec![Fixup {
                kind: FixupKind::PcRel4,
                offset: 0,
                symbol: "callee".to_string(),
            }],
        },
        CompiledFunction {
            name: "callee".to_string(),
            code: vec![0u8; 8],
            fixups: Vec::new(),
        },
    ];
    let elf = emit_elf_multi(&target, &funcs);
    let file = object::File::parse(&elf[..]).expect("parse emitted object");

    // "callee" is defined exactly once, not duplicated as an undefined
    // reference.
    let defined: Vec<_> = file
        .symbols()
        .filter(|s| matches!(s.name(), Ok("callee")))
        .collect();
    assert_eq!(defined.len(), 1);
    assert!(!defined[0].is_undefined());
}
