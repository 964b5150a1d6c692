mod codegen;

pub use codegen::{CGenerator, MAIN_FUNCTION};
