#![cfg(test)]

mod support;

mod bypass;
mod capture;
#[cfg(unix)]
mod interrupt;
