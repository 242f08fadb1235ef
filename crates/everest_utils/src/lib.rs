//! Various `everest-cli` utilities.

pub mod highlight;
pub mod logging;
pub mod stream;
