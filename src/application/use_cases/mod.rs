/// Use cases module containing application business logic orchestration
mod identify_documents;

pub use identify_documents::IdentifyDocumentsUseCase;
