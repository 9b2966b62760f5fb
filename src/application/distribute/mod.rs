//! Distribute Use Case
//!
//! Fans scripts out to every identity directory of a layout, rendering each
//! script once through a transform pipeline.

mod result;
mod use_case;


pub use result::DistributeResult;
pub use use_case::DistributeUseCase;
