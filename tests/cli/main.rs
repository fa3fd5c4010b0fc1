#![cfg(unix)]

mod harness;

mod delegation;
