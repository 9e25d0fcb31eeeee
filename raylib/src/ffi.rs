// SPDX-FileCopyrightText: 2026 Contributors to the raylib Rust bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Production dispatch backend: symbol-table-driven foreign calls.
//!
//! The library is opened with `libloading`; every entry of the generated
//! table is resolved once at load time and paired with a prepared libffi
//! call interface built from its signature. Calls marshal scalar arguments
//! directly, pass buffers and structs by pointer, and read struct returns
//! into owned byte buffers.

use std::collections::HashMap;
use std::ffi::c_void;

use libffi::middle::{Arg, Cif, CodePtr, Type};
use libffi::raw;
use tracing::{debug, info};

use raylib_sys::{FieldKind, FnSig, StructLayout, ValueKind, SYMBOLS};

use crate::api::{CallArg, CallRet, NativeCall};
use crate::error::{Error, Result};

struct Entry {
    sig: &'static FnSig,
    cif: Cif,
    code: CodePtr,
}

/// Backend holding the loaded library and the resolved, prepared table.
pub(crate) struct FfiBackend {
    table: HashMap<&'static str, Entry>,
    // Dropping the library would invalidate every resolved code pointer.
    _library: libloading::Library,
}

// Safety: the table is immutable after load. The native library itself is
// thread-affine (all calls must happen on the thread that initialized the
// window/audio device); that obligation stays with the caller and is not a
// property of this backend.
unsafe impl Send for FfiBackend {}
unsafe impl Sync for FfiBackend {}

fn field_type(kind: FieldKind) -> Type {
    match kind {
        FieldKind::U8 => Type::u8(),
        FieldKind::I8 => Type::i8(),
        FieldKind::U16 => Type::u16(),
        FieldKind::I16 => Type::i16(),
        FieldKind::U32 => Type::u32(),
        FieldKind::I32 => Type::i32(),
        FieldKind::U64 => Type::u64(),
        FieldKind::I64 => Type::i64(),
        FieldKind::F32 => Type::f32(),
        FieldKind::F64 => Type::f64(),
        FieldKind::Pointer => Type::pointer(),
    }
}

fn value_type(kind: &ValueKind) -> Type {
    match kind {
        ValueKind::Void => Type::void(),
        ValueKind::U8 => Type::u8(),
        ValueKind::I8 => Type::i8(),
        ValueKind::U32 => Type::u32(),
        ValueKind::I32 => Type::i32(),
        ValueKind::I64 => Type::i64(),
        ValueKind::U64 => Type::u64(),
        ValueKind::F32 => Type::f32(),
        ValueKind::F64 => Type::f64(),
        ValueKind::Pointer | ValueKind::Buffer | ValueKind::Function => Type::pointer(),
        ValueKind::Struct(layout) => Type::structure(layout.fields.iter().copied().map(field_type)),
    }
}

impl FfiBackend {
    /// Opens the library and resolves every generated symbol.
    pub(crate) fn load<P: AsRef<std::ffi::OsStr>>(path: P) -> Result<Self> {
        let library = unsafe { libloading::Library::new(path.as_ref()) }?;
        let mut table = HashMap::with_capacity(SYMBOLS.len());
        for symbol in SYMBOLS {
            let mut name_z = symbol.name.as_bytes().to_vec();
            name_z.push(0);
            let func: libloading::Symbol<'_, unsafe extern "C" fn()> =
                unsafe { library.get(&name_z) }
                    .map_err(|_| Error::MissingSymbol { name: symbol.name })?;
            let code = CodePtr((*func) as usize as *mut c_void);
            let cif = Cif::new(
                symbol.sig.params.iter().map(value_type),
                value_type(&symbol.sig.ret),
            );
            debug!(name = symbol.name, "resolved symbol");
            table.insert(symbol.name, Entry { sig: &symbol.sig, cif, code });
        }
        info!(symbols = table.len(), "raylib library loaded");
        Ok(Self { table, _library: library })
    }
}

/// Storage slot keeping a scalar or pointer argument alive and addressable
/// for the duration of the call.
enum RawArg {
    U8(u8),
    I8(i8),
    U32(u32),
    I32(i32),
    I64(i64),
    U64(u64),
    F32(f32),
    F64(f64),
    Ptr(*mut c_void),
    /// Struct-by-value: the libffi argument points at the bytes themselves.
    Bytes(*const u8),
}

fn check_and_stage(name: &str, kind: &ValueKind, arg: &CallArg<'_>) -> RawArg {
    match (kind, arg) {
        (ValueKind::U8, CallArg::U8(v)) => RawArg::U8(*v),
        (ValueKind::I8, CallArg::I8(v)) => RawArg::I8(*v),
        (ValueKind::U32, CallArg::U32(v)) => RawArg::U32(*v),
        (ValueKind::I32, CallArg::I32(v)) => RawArg::I32(*v),
        (ValueKind::I64, CallArg::I64(v)) => RawArg::I64(*v),
        (ValueKind::U64, CallArg::U64(v)) => RawArg::U64(*v),
        (ValueKind::F32, CallArg::F32(v)) => RawArg::F32(*v),
        (ValueKind::F64, CallArg::F64(v)) => RawArg::F64(*v),
        // Pointer-kinded parameters accept raw pointers and caller-owned
        // buffers alike; both travel as one machine pointer.
        (ValueKind::Pointer | ValueKind::Buffer | ValueKind::Function, CallArg::Pointer(ptr)) => {
            RawArg::Ptr(*ptr)
        }
        (ValueKind::Pointer | ValueKind::Buffer, CallArg::Buffer(bytes)) => {
            RawArg::Ptr(bytes.as_ptr() as *mut c_void)
        }
        (ValueKind::Struct(layout), CallArg::Struct(bytes)) => {
            assert_eq!(
                bytes.len(),
                layout.size(),
                "{name}: struct argument bytes do not match the table layout"
            );
            RawArg::Bytes(bytes.as_ptr())
        }
        (kind, arg) => panic!("{name}: argument {arg:?} does not match table kind {kind:?}"),
    }
}

fn struct_return(cif: &Cif, code: CodePtr, args: &mut [*mut c_void], layout: &StructLayout) -> Vec<u8> {
    // libffi requires the return buffer to hold at least one register.
    let mut bytes = vec![0u8; layout.size().max(8)];
    unsafe {
        raw::ffi_call(
            cif.as_raw_ptr(),
            Some(*code.as_safe_fun()),
            bytes.as_mut_ptr().cast::<c_void>(),
            args.as_mut_ptr(),
        );
    }
    bytes.truncate(layout.size());
    bytes
}

impl NativeCall for FfiBackend {
    fn invoke(&self, name: &'static str, args: &[CallArg<'_>]) -> CallRet {
        let entry = self
            .table
            .get(name)
            .unwrap_or_else(|| panic!("{name} is not in the generated symbol table"));
        assert_eq!(
            args.len(),
            entry.sig.params.len(),
            "{name}: argument count does not match the table signature"
        );

        let staged: Vec<RawArg> = entry
            .sig
            .params
            .iter()
            .zip(args)
            .map(|(kind, arg)| check_and_stage(name, kind, arg))
            .collect();
        let mut raw_args: Vec<*mut c_void> = Vec::with_capacity(staged.len());
        let mut ffi_args: Vec<Arg> = Vec::with_capacity(staged.len());
        for slot in &staged {
            let (raw, arg) = match slot {
                RawArg::U8(v) => (v as *const _ as *mut c_void, Arg::new(v)),
                RawArg::I8(v) => (v as *const _ as *mut c_void, Arg::new(v)),
                RawArg::U32(v) => (v as *const _ as *mut c_void, Arg::new(v)),
                RawArg::I32(v) => (v as *const _ as *mut c_void, Arg::new(v)),
                RawArg::I64(v) => (v as *const _ as *mut c_void, Arg::new(v)),
                RawArg::U64(v) => (v as *const _ as *mut c_void, Arg::new(v)),
                RawArg::F32(v) => (v as *const _ as *mut c_void, Arg::new(v)),
                RawArg::F64(v) => (v as *const _ as *mut c_void, Arg::new(v)),
                RawArg::Ptr(v) => (v as *const _ as *mut c_void, Arg::new(v)),
                RawArg::Bytes(ptr) => {
                    (*ptr as *mut c_void, Arg::new(unsafe { &**ptr }))
                }
            };
            raw_args.push(raw);
            ffi_args.push(arg);
        }

        let (cif, code) = (&entry.cif, entry.code);
        match entry.sig.ret {
            ValueKind::Void => {
                unsafe { cif.call::<()>(code, &ffi_args) };
                CallRet::Void
            }
            ValueKind::U8 => CallRet::U8(unsafe { cif.call::<u8>(code, &ffi_args) }),
            ValueKind::I8 => CallRet::I32(unsafe { cif.call::<i8>(code, &ffi_args) } as i32),
            ValueKind::U32 => CallRet::U32(unsafe { cif.call::<u32>(code, &ffi_args) }),
            ValueKind::I32 => CallRet::I32(unsafe { cif.call::<i32>(code, &ffi_args) }),
            ValueKind::I64 => CallRet::I64(unsafe { cif.call::<i64>(code, &ffi_args) }),
            ValueKind::U64 => CallRet::I64(unsafe { cif.call::<u64>(code, &ffi_args) } as i64),
            ValueKind::F32 => CallRet::F32(unsafe { cif.call::<f32>(code, &ffi_args) }),
            ValueKind::F64 => CallRet::F64(unsafe { cif.call::<f64>(code, &ffi_args) }),
            ValueKind::Pointer | ValueKind::Buffer | ValueKind::Function => {
                CallRet::Pointer(unsafe { cif.call::<*mut c_void>(code, &ffi_args) })
            }
            ValueKind::Struct(layout) => {
                CallRet::Struct(struct_return(cif, code, &mut raw_args, layout))
            }
        }
    }
}
