//! # tf-generator
//!
//! Builds the inputs of an external template-expansion pipeline for an
//! arity-parameterized C++ template family.
//!
//! For a module `Foo` and a maximum arity `N` it writes:
//!
//! - `FooOpt0.txt` .. `FooOptN.txt`: one substitution descriptor per arity
//! - `MakeFoo.bat` (or `MakeFoo.sh`): the driver script that runs the
//!   substitution engine once per arity and assembles `Foo.hpp`
//!
//! Optionally the driver steps are executed in-process afterwards.
//!
//! # Usage
//!
//! ```bash
//! # Descriptors for arities 0..=5 plus MakeCallFunction.bat
//! cargo run -p tf-generator --bin tf-make-script -- --module CallFunction --maxparam 5
//!
//! # POSIX script into gen/, then run it natively
//! cargo run -p tf-generator --bin tf-make-script -- \
//!     --module CallFunction --maxparam 5 -o gen --dialect shell --engine ssr --run
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   module,   │ ──> │ Descriptor  │ ──> │ FooOpt<n>   │  n = 0..=N
//! │  max arity  │     │  Generator  │     │   .txt      │
//! └──────┬──────┘     └─────────────┘     └─────────────┘
//!        │
//!        ▼
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Driver    │ ──> │  MakeFoo    │ ──> │   Runner    │  (--run)
//! │   Emitter   │     │  .bat/.sh   │     │  -> Foo.hpp │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```

pub mod args;
pub mod generator;

pub use args::{Args, DialectArg, ReportFormat};
pub use generator::{GenerationReport, GeneratorConfig, GeneratorError, ScriptGenerator};
