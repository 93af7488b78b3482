//! HTTP adapters for the hosted mail provider and submission store.

pub mod resend;
pub mod supabase;

pub use resend::ResendMailer;
pub use supabase::SupabaseSubmissionRepository;
