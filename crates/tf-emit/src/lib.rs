//! # tf-emit
//!
//! Text emitters for arity-family template generation.
//!
//! Two emitters, both pure up to the final write:
//!
//! 1. **Descriptors** ([`descriptor::generate`]): for one arity, the seven
//!    substitution rules the external engine applies to the template file.
//! 2. **Driver script** ([`driver::emit`]): the command sequence that runs the
//!    engine once per arity and concatenates header, bodies and footer into
//!    the generated header.
//!
//! ```text
//! MakeFoo.bat
//! ├── type Header.txt >..\Foo.hpp
//! ├── ssr --options FooOpt0.txt -f Foo.txt -o body.txt
//! ├── type body.txt >>..\Foo.hpp
//! ├── ...                              (one pair per arity)
//! └── type Footer.txt >>..\Foo.hpp
//! ```

pub mod config;
pub mod descriptor;
pub mod driver;
pub mod error;

pub use config::ScriptLayout;
pub use descriptor::{generate, DescriptorFile};
pub use driver::{emit, DriverScript, DriverStep};
pub use error::EmitError;
