// Job postings: heuristic parsing, match scoring against candidate profiles,
// and the in-memory catalog. Parsing and scoring are pure functions; the HTTP
// handlers compose them.

pub mod catalog;
pub mod handlers;
pub mod match_scoring;
pub mod posting_parser;
