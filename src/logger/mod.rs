pub mod console_reporter;
