pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod logging;
pub mod pipeline;
pub mod sender;
pub mod types;

pub use error::{LabelError, Result};
pub use pipeline::{run_parser, PipelineOutput};
pub use sender::{SenderAddress, SenderStore};
pub use types::{AddressRow, LabelRow};
