// Resume storage and AI review.
// PDF text extraction, candidate name resolution and critique prompts live
// here; uploads go to S3 with presigned download links.

pub mod analysis;
pub mod extract;
pub mod handlers;
pub mod identity;
pub mod prompts;
pub mod storage;
