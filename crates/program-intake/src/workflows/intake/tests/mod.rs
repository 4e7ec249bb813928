mod common;
mod programs;
