// src/lib.rs - Library root for InterviewMate

pub mod auth;
pub mod catalog;
pub mod cli;
pub mod infra;
pub mod interview;
pub mod mock;
pub mod routes;
pub mod storage;
