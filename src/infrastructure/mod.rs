//! 基础设施层：文档的读取与报告的保存

pub mod document_reader;
pub mod report_writer;

pub use document_reader::{DocumentFormat, DocumentReader, FileDocumentReader};
pub use report_writer::{write_json, write_report};
