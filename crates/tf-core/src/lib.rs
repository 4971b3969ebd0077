//! # tf-core
//!
//! Core types for generating arity-parameterized C++ template families.
//!
//! A template family is one C++ pattern instantiated once per arity
//! `0..=N`. Each instantiation is described by a set of substitution rules
//! that an external text-substitution engine applies to a fixed template
//! file. This crate owns the vocabulary shared by every other crate:
//!
//! | Type | Meaning |
//! |------|---------|
//! | [`Arity`] | Number of extra parameters of one instantiation |
//! | [`ModuleName`] | Validated module name; every file name derives from it |
//! | [`Placeholder`] | One of the seven fixed substitution tokens |
//! | [`SubstitutionRule`] | Placeholder plus replacement text |
//! | [`ScriptDialect`] | Host shell the driver script is written for |
//!
//! The [`naming`] module is the single source of file names. The descriptor
//! generator and the driver emitter both go through it, so the driver can
//! only ever reference descriptors that were actually produced.

pub mod arity;
pub mod dialect;
pub mod error;
pub mod naming;
pub mod rule;

pub use arity::Arity;
pub use dialect::ScriptDialect;
pub use error::CoreError;
pub use naming::ModuleName;
pub use rule::{Placeholder, SubstitutionRule};
