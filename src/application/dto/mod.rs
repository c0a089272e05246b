/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod generate_request;
mod generate_response;

pub use generate_request::GenerateRequest;
pub use generate_response::GenerateResponse;
