//! Shared response and paging types.

mod pagination;
mod response;

pub use pagination::PaginationParams;
pub use response::{ApiResponse, ErrorResponse};
