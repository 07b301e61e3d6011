/// Integration tests against the SQLite-backed tracker
mod tracker_integration;
mod persistence_integration;
