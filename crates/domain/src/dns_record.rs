pub mod record;
pub mod record_type;

pub use record::AnswerRecord;
pub use record_type::RecordType;
