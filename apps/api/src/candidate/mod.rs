// Candidate profiles: in-memory storage, completeness analysis, and the
// suggestion catalogs that back the profile form.

pub mod completeness;
pub mod handlers;
pub mod repository;
pub mod suggestions;
