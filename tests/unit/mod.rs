/// Unit tests against the public library interface
mod calendar_tests;
mod stats_tests;
mod report_tests;
