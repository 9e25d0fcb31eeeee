// SPDX-FileCopyrightText: 2026 Contributors to the raylib Rust bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Rendering of the generated source artifact.
//!
//! The output is a single Rust file consumed verbatim as
//! `raylib-sys/src/generated.rs`: version constants, packed color constants,
//! struct layout tables and the symbol table. Classification happens here,
//! and an unclassifiable type aborts the render.

use std::fmt::Write;

use crate::classify::{self, Kind, StructDef, STRUCTS};
use crate::error::{Error, Result};
use crate::scrape::{ColorEntry, Declaration, Versions};

fn classify_or_fail(ty: &str, line: usize) -> Result<Kind> {
    classify::classify(ty).ok_or_else(|| Error::UnknownType { line, ty: ty.to_string() })
}

fn render_layout(out: &mut String, def: &StructDef) {
    let all_same = def.fields.windows(2).all(|pair| pair[0] == pair[1]);
    let fields = if all_same && !def.fields.is_empty() {
        format!("&[{}; {}]", def.fields[0].token(), def.fields.len())
    } else {
        let tokens: Vec<&str> = def.fields.iter().map(|field| field.token()).collect();
        format!("&[{}]", tokens.join(", "))
    };
    writeln!(
        out,
        "pub const {}: StructLayout = StructLayout {{ fields: {} }};",
        def.const_name, fields
    )
    .expect("string write");
}

fn render_symbol(out: &mut String, declaration: &Declaration) -> Result<()> {
    let params = declaration
        .params
        .iter()
        .map(|ty| classify_or_fail(ty, declaration.line).map(Kind::token))
        .collect::<Result<Vec<_>>>()?;
    let ret = classify_or_fail(&declaration.ret, declaration.line)?.token();
    writeln!(out, "    // {}", declaration.doc).expect("string write");
    writeln!(
        out,
        "    Symbol {{ name: \"{}\", sig: FnSig {{ params: &[{}], ret: {} }} }},",
        declaration.name,
        params.join(", "),
        ret
    )
    .expect("string write");
    Ok(())
}

/// Renders the complete generated artifact.
pub fn render(
    versions: &Versions,
    colors: &[ColorEntry],
    declarations: &[Declaration],
) -> Result<String> {
    let mut out = String::new();
    out.push_str("// This file is generated by raylib-bindgen. Do not edit by hand.\n\n");
    out.push_str("//! Generated constants, layout tables and symbol table scraped from `raylib.h`.\n\n");
    out.push_str("use crate::{FieldKind as F, FnSig, StructLayout, Symbol, ValueKind as K};\n\n");

    out.push_str("// --- Version constants ---\n");
    writeln!(out, "pub const RAYLIB_VERSION_MAJOR: i32 = {};", versions.major).expect("string write");
    writeln!(out, "pub const RAYLIB_VERSION_MINOR: i32 = {};", versions.minor).expect("string write");
    writeln!(out, "pub const RAYLIB_VERSION_PATCH: i32 = {};", versions.patch).expect("string write");
    writeln!(out, "pub const RAYLIB_VERSION: &str = {};", versions.full).expect("string write");

    out.push_str("\n// --- Color constants (packed blue-green-red-alpha) ---\n");
    out.push_str("pub mod colors {\n");
    for color in colors {
        writeln!(
            out,
            "    pub const {}: [u8; 4] = [{}, {}, {}, {}];",
            color.name, color.b, color.g, color.r, color.a
        )
        .expect("string write");
    }
    out.push_str("}\n");

    out.push_str("\n// --- Struct layout tables ---\n");
    for def in STRUCTS {
        render_layout(&mut out, def);
    }

    out.push_str("\n// --- Symbol table ---\n");
    out.push_str("pub static SYMBOLS: &[Symbol] = &[\n");
    for declaration in declarations {
        render_symbol(&mut out, declaration)?;
    }
    out.push_str("];\n");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn versions() -> Versions {
        Versions {
            major: "4".into(),
            minor: "0".into(),
            patch: "0".into(),
            full: "\"4.0.0\"".into(),
        }
    }

    #[test]
    fn version_scenario() {
        let rendered = render(&versions(), &[], &[]).unwrap();
        assert!(rendered.contains("pub const RAYLIB_VERSION_MAJOR: i32 = 4;"));
        assert!(rendered.contains("pub const RAYLIB_VERSION_MINOR: i32 = 0;"));
        assert!(rendered.contains("pub const RAYLIB_VERSION_PATCH: i32 = 0;"));
        assert!(rendered.contains("pub const RAYLIB_VERSION: &str = \"4.0.0\";"));
    }

    // RED (230, 41, 55, 255) must be emitted as [55, 41, 230, 255]: the
    // packed constants are blue-green-red-alpha, not RGBA.
    #[test]
    fn colors_are_packed_blue_green_red_alpha() {
        let colors = vec![ColorEntry { name: "RED".into(), r: 230, g: 41, b: 55, a: 255 }];
        let rendered = render(&versions(), &colors, &[]).unwrap();
        assert!(rendered.contains("pub const RED: [u8; 4] = [55, 41, 230, 255];"));
    }

    #[test]
    fn symbols_render_with_doc_and_kinds() {
        let declarations = vec![Declaration {
            line: 953,
            name: "InitWindow".into(),
            doc: "Initialize window and OpenGL context".into(),
            ret: "void".into(),
            params: vec!["int".into(), "int".into(), "const char *".into()],
        }];
        let rendered = render(&versions(), &[], &declarations).unwrap();
        assert!(rendered.contains("    // Initialize window and OpenGL context\n"));
        assert!(rendered.contains(
            "    Symbol { name: \"InitWindow\", sig: FnSig { params: &[K::I32, K::I32, K::Buffer], ret: K::Void } },\n"
        ));
    }

    #[test]
    fn struct_kinds_reference_layout_constants() {
        let declarations = vec![Declaration {
            line: 960,
            name: "ClearBackground".into(),
            doc: "Set background color (framebuffer clear color)".into(),
            ret: "void".into(),
            params: vec!["Color".into()],
        }];
        let rendered = render(&versions(), &[], &declarations).unwrap();
        assert!(rendered.contains("params: &[K::Struct(&COLOR)]"));
        // The referenced layout table is emitted too.
        assert!(rendered.contains("pub const COLOR: StructLayout = StructLayout { fields: &[F::U8; 4] };"));
    }

    // An unclassifiable type must abort generation instead of silently
    // producing an undefined kind in the artifact.
    #[test]
    fn unknown_type_aborts_render() {
        let declarations = vec![Declaration {
            line: 1000,
            name: "Bogus".into(),
            doc: "Uses a type the table does not know".into(),
            ret: "void".into(),
            params: vec!["struct dirent *".into()],
        }];
        match render(&versions(), &[], &declarations) {
            Err(Error::UnknownType { line: 1000, ty }) => assert_eq!(ty, "struct dirent *"),
            other => panic!("expected UnknownType, got {other:?}"),
        }
    }

    #[test]
    fn uniform_layouts_use_repeat_syntax() {
        let rendered = render(&versions(), &[], &[]).unwrap();
        assert!(rendered.contains("pub const MATRIX: StructLayout = StructLayout { fields: &[F::F32; 16] };"));
        assert!(rendered.contains(
            "pub const IMAGE: StructLayout = StructLayout { fields: &[F::Pointer, F::I32, F::I32, F::I32, F::I32] };"
        ));
    }
}
