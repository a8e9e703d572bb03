// error module
mod error;
// cursor-based scanner
mod string_scanner;

pub use error::ScanError;
pub use string_scanner::StringScanner;
