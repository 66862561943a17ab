//! Runtime entry points as seen by a backend
//!
//! A backend lowering `print <expr>` picks the entry point for the value's
//! type, declares it as an import and calls it with the value as the single
//! argument.

use core::fmt;

use crate::ffi;

/// Scalar type of an entry point's only parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Abi {
	I32,
	F64,
	/// C `char`
	I8,
}

/// Type of the value a `print` statement outputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrintKind {
	Int,
	Float,
	Bool,
	Char,
}

impl PrintKind {
	const fn index(self) -> usize {
		match self {
			Self::Int => 0,
			Self::Float => 1,
			Self::Bool => 2,
			Self::Char => 3,
		}
	}
}

impl fmt::Display for PrintKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Int => write!(f, "int"),
			Self::Float => write!(f, "float"),
			Self::Bool => write!(f, "bool"),
			Self::Char => write!(f, "char"),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeFn {
	pub kind: PrintKind,
	/// Unmangled symbol name
	pub name: &'static str,
	pub param: Abi,
}

/// Ordered by [`PrintKind::index`]
pub static RUNTIME_FNS: [RuntimeFn; 4] = [
	RuntimeFn::new(PrintKind::Int, "_print_int", Abi::I32),
	RuntimeFn::new(PrintKind::Float, "_print_float", Abi::F64),
	// bools cross the boundary as C ints
	RuntimeFn::new(PrintKind::Bool, "_print_bool", Abi::I32),
	RuntimeFn::new(PrintKind::Char, "_print_char", Abi::I8),
];

impl RuntimeFn {
	const fn new(kind: PrintKind, name: &'static str, param: Abi) -> Self {
		Self { kind, name, param }
	}

	#[must_use]
	pub fn for_kind(kind: PrintKind) -> &'static Self {
		&RUNTIME_FNS[kind.index()]
	}

	/// Address of the entry point in this process
	#[must_use]
	pub fn addr(&self) -> *const u8 {
		match self.kind {
			PrintKind::Int => ffi::print_int as *const u8,
			PrintKind::Float => ffi::print_float as *const u8,
			PrintKind::Bool => ffi::print_bool as *const u8,
			PrintKind::Char => ffi::print_char as *const u8,
		}
	}
}

#[must_use]
pub fn lookup(name: &str) -> Option<&'static RuntimeFn> {
	RUNTIME_FNS.iter().find(|rt_fn| rt_fn.name == name)
}

#[cfg(feature = "cranelift")]
pub use self::cranelift::{declare_imports, register_jit_symbols};

#[cfg(feature = "cranelift")]
mod cranelift {
	use std::collections::HashMap;

	use ::cranelift::prelude::{AbiParam, Type, types};
	use cranelift_jit::JITBuilder;
	use cranelift_module::{FuncId, Linkage, Module};

	use super::{Abi, RUNTIME_FNS};
	use crate::Result;

	const fn to_cl_type(abi: Abi) -> Type {
		match abi {
			Abi::I32 => types::I32,
			Abi::F64 => types::F64,
			Abi::I8 => types::I8,
		}
	}

	/// Lets JIT-ed code resolve every entry point to this process's copy
	pub fn register_jit_symbols(builder: &mut JITBuilder) {
		for rt_fn in &RUNTIME_FNS {
			builder.symbol(rt_fn.name, rt_fn.addr());
			tracing::debug!(name = rt_fn.name, "registered runtime symbol");
		}
	}

	/// Declares every entry point as an imported `fn(param)` with no return
	pub fn declare_imports(module: &mut impl Module) -> Result<HashMap<&'static str, FuncId>> {
		let mut ids = HashMap::with_capacity(RUNTIME_FNS.len());
		for rt_fn in &RUNTIME_FNS {
			let mut param = AbiParam::new(to_cl_type(rt_fn.param));
			if rt_fn.param == Abi::I8 {
				// C callers widen char arguments
				param = param.sext();
			}

			let mut signature = module.make_signature();
			signature.params.push(param);

			let func_id = module
				.declare_function(rt_fn.name, Linkage::Import, &signature)
				.map_err(|_| "runtime function clashes with an existing declaration")?;
			ids.insert(rt_fn.name, func_id);
		}
		Ok(ids)
	}
}

#[cfg(feature = "llvm")]
pub use self::llvm::declare_in_module;

#[cfg(feature = "llvm")]
mod llvm {
	use inkwell::{
		context::Context,
		module::{Linkage, Module},
		types::BasicMetadataTypeEnum,
		values::FunctionValue,
	};

	use super::{Abi, RUNTIME_FNS};

	/// Adds external prototypes for every entry point, reusing existing ones
	pub fn declare_in_module<'ctx>(
		context: &'ctx Context,
		module: &Module<'ctx>,
	) -> Vec<FunctionValue<'ctx>> {
		RUNTIME_FNS
			.iter()
			.map(|rt_fn| {
				if let Some(existing) = module.get_function(rt_fn.name) {
					return existing;
				}

				let param: BasicMetadataTypeEnum = match rt_fn.param {
					Abi::I32 => context.i32_type().into(),
					Abi::F64 => context.f64_type().into(),
					Abi::I8 => context.i8_type().into(),
				};
				let fn_type = context.void_type().fn_type(&[param], false);
				tracing::debug!(name = rt_fn.name, "declared runtime prototype");
				module.add_function(rt_fn.name, fn_type, Some(Linkage::External))
			})
			.collect()
	}
}
