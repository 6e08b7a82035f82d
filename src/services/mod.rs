// Service exports
pub mod appointments;
pub mod external;
pub mod inventory;
pub mod router;

pub use appointments::{AppointmentBook, BOOKING_CONFIRMATION};
pub use external::{
    parse_output, DelegatedMatcher, ExternalErrorKind, ExternalNotFound, DEFAULT_EXTERNAL_TIMEOUT,
};
pub use inventory::{alert_level, InventoryError, SupplyInventory, DEFAULT_LOW_STOCK_THRESHOLD};
pub use router::{detect_backend, BackendKind, ExecutionRouter, SpecialistMatcher, SERVERLESS_ENV_VAR};
