// error_chain macro can recurse deeply
#![recursion_limit = "1024"]

#[macro_use]
extern crate error_chain;
#[macro_use(lazy_static)]
extern crate lazy_static;

pub mod args;
pub mod assembler;
pub mod commands;
pub mod common;
pub mod constants;
pub mod design;
pub mod diagnostics;
pub mod enzyme;
pub mod errors;
pub mod fasta;
pub mod marker;
pub mod mcs;
pub mod mutate;
pub mod ori;
pub mod replication;
pub mod table;
