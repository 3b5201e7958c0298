//! Application-wide constants

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Welcome message served on `GET /`
pub const WELCOME_MESSAGE: &str = "API de geração de senhas!";

// =============================================================================
// Pagination
// =============================================================================

pub const DEFAULT_PAGE_NUMBER: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 20;
pub const MAX_PAGE_SIZE: u64 = 100;

// =============================================================================
// Environment Variables
// =============================================================================

pub const ENV_HOST: &str = "HOST";
pub const ENV_PORT: &str = "PORT";
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";
