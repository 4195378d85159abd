//! Configuration section definitions.
//!
//! Each module corresponds to a section in `svgcomp.toml`:
//!
//! | Module    | TOML Section | Purpose                            |
//! |-----------|--------------|------------------------------------|
//! | `batch`   | `[batch]`    | Batch run settings                 |
//! | `convert` | `[convert]`  | Boundary checks                    |
//! | `output`  | `[output]`   | Output directory, extension        |

mod batch;
mod convert;
mod output;

pub use batch::BatchConfig;
pub use convert::ConvertConfig;
pub use output::OutputConfig;
