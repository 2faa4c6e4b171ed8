/// Integration tests for the mood journal server
mod journal_integration;
mod server_integration;
