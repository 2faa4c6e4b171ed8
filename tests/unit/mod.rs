/// Unit tests for the public mood journal API
mod basic_tests;
