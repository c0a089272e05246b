/// Use cases module containing application business logic orchestration
mod generate_fsio_files;

pub use generate_fsio_files::GenerateFsioFilesUseCase;
