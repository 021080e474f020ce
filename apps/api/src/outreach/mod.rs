// Outreach email drafting. The writer behind `EmailWriter` is either the
// deterministic template writer or the LLM-backed one; everything else here
// (subject parsing, tone analysis, template catalog) is local and pure.

pub mod analysis;
pub mod handlers;
pub mod prompts;
pub mod writer;
